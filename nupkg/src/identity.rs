use crate::version::PackageVersion;

/// A package id paired with an exact version. This is the key used to
/// locate an installed package on disk and to name its archive file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageIdentity {
    pub id: String,
    pub version: PackageVersion,
}

impl PackageIdentity {
    pub fn new<S: Into<String>>(id: S, version: PackageVersion) -> Self {
        PackageIdentity {
            id: id.into(),
            version,
        }
    }

    /// The archive file name for this identity, `<id>.<version>.nupkg`.
    pub fn archive_file_name(&self) -> String {
        format!("{}.{}.nupkg", self.id, self.version.to_normalized_string())
    }
}

impl std::fmt::Display for PackageIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}.{}", self.id, self.version.to_normalized_string())
    }
}
