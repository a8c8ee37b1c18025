use crate::compare::eq_ignore_case;
use crate::error::{Error, Result};
use crate::known_folders::KnownFolders;

/// Bare file name of the package manifest descriptor, stored at the archive
/// root by the packaging conventions.
const CONTENT_TYPES_FILE: &str = "[Content_Types].xml";

/// Suffix of the package manifest entry.
const MANIFEST_EXTENSION: &str = ".nuspec";

/// One entry path inside a package archive.
///
/// Paths are stored forward-slash separated, exactly as the archive records
/// them (`lib/net45/Foo.dll`, `Foo.nuspec`). An `EntryPath` splits the raw
/// path once at construction; everything else is a view over those
/// segments. It is immutable and carries no identity beyond the path
/// string, so duplicate archive entries stay duplicates.
#[derive(Debug, Clone)]
pub struct EntryPath {
    raw: String,
    parts: Vec<String>,
}

impl EntryPath {
    /// Splits a raw archive entry path.
    ///
    /// An empty path would corrupt root-level grouping downstream, so it is
    /// rejected here rather than admitted.
    pub fn new<S: Into<String>>(raw: S) -> Result<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(Error::InvalidPath(raw));
        }
        let parts = raw.split('/').map(str::to_string).collect();
        Ok(EntryPath { raw, parts })
    }

    /// The path exactly as stored in the archive.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Last path segment. Equals [`raw`](Self::raw) for a root-level entry,
    /// and is empty for a directory placeholder entry (trailing slash).
    pub fn file_name(&self) -> &str {
        &self.parts[self.parts.len() - 1]
    }

    /// All segments except the last; empty for a root-level entry.
    pub fn directories(&self) -> &[String] {
        &self.parts[..self.parts.len() - 1]
    }

    pub fn has_root_folder(&self) -> bool {
        self.parts.len() > 1
    }

    pub fn root_folder(&self) -> Option<&str> {
        if self.has_root_folder() {
            Some(&self.parts[0])
        } else {
            None
        }
    }

    /// Whether this entry is package bookkeeping rather than content.
    ///
    /// Entries at the archive root are internal when they are the manifest
    /// (`*.nuspec`) or the content-types descriptor; any other bare file
    /// (a root-level `icon.png`, say) is content. Entries under a folder
    /// are internal exactly when the root folder is not a known content
    /// folder; folder membership decides alone, whatever the inner file
    /// is called.
    pub fn is_internal(&self, known: &KnownFolders) -> bool {
        if self.has_root_folder() {
            return !known.contains(&self.parts[0]);
        }
        is_internal_name(&self.parts[0])
    }
}

fn is_internal_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.ends_with(MANIFEST_EXTENSION) || eq_ignore_case(name, CONTENT_TYPES_FILE)
}

impl std::fmt::Display for EntryPath {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}
