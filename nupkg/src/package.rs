//! The package archive.
//!
//! A `.nupkg` is a ZIP archive; [`Package`] wraps one and exposes the
//! views the rest of the crate works from: the flat entry-path list, the
//! parsed manifest, the visible-content tree and raw entry bytes. Opening
//! reads only the archive's central directory; entry data is decompressed
//! on demand.

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use zip::result::ZipError;
use zip::ZipArchive;

use crate::contents::{build_content_tree, sort_for_display, ContentNode};
use crate::entry_path::EntryPath;
use crate::error::{Error, Result};
use crate::identity::PackageIdentity;
use crate::known_folders::KnownFolders;
use crate::manifest::Nuspec;

/// File extension of a package archive.
pub const PACKAGE_EXTENSION: &str = "nupkg";

/// Whether a path looks like a package archive (case-insensitive
/// `.nupkg` extension). Callers gate on this before opening, the same way
/// the IDE binds its package view by extension.
pub fn is_package_path<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(PACKAGE_EXTENSION))
        .unwrap_or(false)
}

pub struct Package<R: Read + Seek> {
    archive: ZipArchive<R>,
}

impl Package<File> {
    /// Opens a package archive from disk.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Package::from_reader(file)
    }
}

impl<R: Read + Seek> Package<R> {
    /// Reads a package archive from any seekable stream.
    pub fn from_reader(reader: R) -> Result<Self> {
        Ok(Package {
            archive: ZipArchive::new(reader)?,
        })
    }

    /// Every entry path in the archive, in stored order. Includes
    /// bookkeeping entries and directory placeholders; this is the raw
    /// list the classifier works from.
    pub fn entry_paths(&self) -> Vec<String> {
        self.archive.file_names().map(str::to_string).collect()
    }

    /// The entries a user should see: everything that is not package
    /// bookkeeping, in display order.
    pub fn visible_entries(&self, known: &KnownFolders) -> Result<Vec<EntryPath>> {
        let mut entries = Vec::new();
        for name in self.archive.file_names() {
            let entry = EntryPath::new(name)?;
            if !entry.is_internal(known) {
                entries.push(entry);
            }
        }
        sort_for_display(&mut entries);
        Ok(entries)
    }

    /// The visible entries folded into a display tree.
    pub fn content_tree(&self, known: &KnownFolders) -> Result<Vec<ContentNode>> {
        let entries = self.visible_entries(known)?;
        Ok(build_content_tree(&entries))
    }

    /// The manifest entry path: the single root-level `.nuspec`.
    pub fn nuspec_path(&self) -> Result<String> {
        let mut found: Option<String> = None;
        for name in self.archive.file_names() {
            if name.contains('/') || !name.to_lowercase().ends_with(".nuspec") {
                continue;
            }
            if found.is_some() {
                return Err(Error::InvalidManifest(
                    "package contains more than one .nuspec entry".to_string(),
                ));
            }
            found = Some(name.to_string());
        }
        found.ok_or(Error::MissingManifest)
    }

    /// The raw manifest XML.
    pub fn nuspec_xml(&mut self) -> Result<String> {
        let path = self.nuspec_path()?;
        let bytes = self.read_entry(&path)?;
        String::from_utf8(bytes)
            .map_err(|_| Error::InvalidManifest("manifest is not valid UTF-8".to_string()))
    }

    /// The parsed manifest.
    pub fn nuspec(&mut self) -> Result<Nuspec> {
        let xml = self.nuspec_xml()?;
        Nuspec::from_str(&xml)
    }

    /// The package identity from the manifest.
    pub fn identity(&mut self) -> Result<PackageIdentity> {
        self.nuspec()?.identity()
    }

    /// Raw bytes of one entry, addressed by its full archive path.
    pub fn read_entry(&mut self, path: &str) -> Result<Vec<u8>> {
        let mut entry = match self.archive.by_name(path) {
            Ok(entry) => entry,
            Err(ZipError::FileNotFound) => {
                return Err(Error::EntryNotFound(path.to_string()));
            }
            Err(err) => return Err(err.into()),
        };
        let mut bytes = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut bytes)?;
        Ok(bytes)
    }
}
