use std::fs;
use std::path::{Path, PathBuf};

use nupkg::entry_path::EntryPath;
use nupkg::package::Package;

use crate::debug_eprintln;
use crate::error::Result;

pub fn run(package_path: &str, entry: &str, destination: &str) -> Result<()> {
    let mut package = Package::open(package_path)?;
    let data = package.read_entry(entry)?;
    debug_eprintln!("read {} bytes from {}", data.len(), entry);

    let target = target_path(entry, destination)?;
    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&target, &data)?;
    println!("Extracted {} to {}", entry, target.display());
    Ok(())
}

// A directory destination keeps the entry's base name; anything else is
// taken as the full target file path.
fn target_path(entry: &str, destination: &str) -> Result<PathBuf> {
    let destination = Path::new(destination);
    if destination.is_dir() {
        let file_name = EntryPath::new(entry)?.file_name().to_string();
        Ok(destination.join(file_name))
    } else {
        Ok(destination.to_path_buf())
    }
}
