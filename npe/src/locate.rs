use std::path::Path;

use nupkg::identity::PackageIdentity;
use nupkg::version::{PackageVersion, VersionRange};

use crate::debug_eprintln;
use crate::error::{Error, Result};

pub fn run(id: &str, version: &str, packages_dir: Option<&str>) -> Result<()> {
    let version = resolve_version(version)?;
    let identity = PackageIdentity::new(id, version);
    debug_eprintln!("looking for {}", identity);

    match nupkg::locate::locate_package(&identity, packages_dir.map(Path::new)) {
        Some(path) => {
            println!("{}", path.display());
            Ok(())
        }
        None => Err(Error::NotFound(format!(
            "package {} is not installed",
            identity
        ))),
    }
}

/// Accepts an exact version or a version range; a range resolves to the
/// version a package reference opens, its minimum bound.
fn resolve_version(version: &str) -> Result<PackageVersion> {
    if let Ok(version) = PackageVersion::parse(version) {
        return Ok(version);
    }
    let range = VersionRange::parse(version)
        .map_err(|_| Error::CliInputError(format!("invalid version or range: {}", version)))?;
    range.resolve_min().ok_or_else(|| {
        Error::CliInputError(format!("version range has no minimum version: {}", version))
    })
}
