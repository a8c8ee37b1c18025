pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    InvalidPath(String),
    InvalidVersion(String),
    InvalidRange(String),
    InvalidManifest(String),
    MissingManifest,
    EntryNotFound(String),
    IoError(std::io::Error),
    ZipError(zip::result::ZipError),
    XmlError(quick_xml::DeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::InvalidPath(ref path) => write!(f, "Invalid entry path: {path:?}"),
            Error::InvalidVersion(ref version) => write!(f, "Invalid package version: {version}"),
            Error::InvalidRange(ref range) => write!(f, "Invalid version range: {range}"),
            Error::InvalidManifest(ref msg) => write!(f, "Invalid manifest: {msg}"),
            Error::MissingManifest => write!(f, "Package has no .nuspec manifest entry"),
            Error::EntryNotFound(ref entry) => write!(f, "Entry not found in package: {entry}"),
            Error::IoError(ref err) => write!(f, "{err}"),
            Error::ZipError(ref err) => write!(f, "{err}"),
            Error::XmlError(ref err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::IoError(ref err) => Some(err),
            Error::ZipError(ref err) => Some(err),
            Error::XmlError(ref err) => Some(err),
            _ => None,
        }
    }
}

impl std::convert::From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Error {
        Error::IoError(error)
    }
}

impl std::convert::From<zip::result::ZipError> for Error {
    fn from(error: zip::result::ZipError) -> Error {
        Error::ZipError(error)
    }
}

impl std::convert::From<quick_xml::DeError> for Error {
    fn from(error: quick_xml::DeError) -> Error {
        Error::XmlError(error)
    }
}
