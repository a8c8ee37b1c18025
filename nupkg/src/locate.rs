//! Finding an installed package archive on disk.
//!
//! Restored packages land in one of two layouts: the per-user global
//! packages folder (`~/.nuget/packages`, overridable through the
//! `NUGET_PACKAGES` environment variable), which stores
//! `<id>/<version>/<id>.<version>.nupkg` all lowercased, and the older
//! per-solution `packages` folder, which stores
//! `<Id.Version>/<Id.Version>.nupkg` with original casing. Probing order
//! is global first, then the solution folder, matching how restore
//! populates them.

use std::path::{Path, PathBuf};

use crate::identity::PackageIdentity;

/// Environment override for the global packages folder.
pub const GLOBAL_PACKAGES_FOLDER_ENV: &str = "NUGET_PACKAGES";

/// The per-user global packages folder, if one can be determined.
pub fn global_packages_folder() -> Option<PathBuf> {
    if let Some(folder) = std::env::var_os(GLOBAL_PACKAGES_FOLDER_ENV) {
        if !folder.is_empty() {
            return Some(PathBuf::from(folder));
        }
    }
    home_dir().map(|home| home.join(".nuget").join("packages"))
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
}

/// Path of a package archive inside a global packages folder
/// (v3 layout, lowercased id and version).
pub fn global_package_path(root: &Path, identity: &PackageIdentity) -> PathBuf {
    let id = identity.id.to_lowercase();
    let version = identity.version.to_normalized_string().to_lowercase();
    root.join(&id)
        .join(&version)
        .join(format!("{id}.{version}.nupkg"))
}

/// Path of a package archive inside a solution-style packages folder.
pub fn folder_package_path(folder: &Path, identity: &PackageIdentity) -> PathBuf {
    folder
        .join(identity.to_string())
        .join(identity.archive_file_name())
}

/// Tries the global packages folder, then the given packages folder.
/// Returns the first archive that exists, or `None`.
pub fn locate_package(
    identity: &PackageIdentity,
    packages_folder: Option<&Path>,
) -> Option<PathBuf> {
    if let Some(root) = global_packages_folder() {
        let path = global_package_path(&root, identity);
        if path.is_file() {
            return Some(path);
        }
    }

    if let Some(folder) = packages_folder {
        let path = folder_package_path(folder, identity);
        if path.is_file() {
            return Some(path);
        }
    }

    None
}
