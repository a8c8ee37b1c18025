use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    NupkgError(nupkg::error::Error),
    IoError(std::io::Error),
    NotFound(String),
    NotAPackage(String),
    CliInputError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NupkgError(err) => write!(f, "Package library error: {}", err),
            Error::IoError(err) => write!(f, "IO error: {}", err),
            Error::NotFound(msg) => write!(f, "Not found: {}", msg),
            Error::NotAPackage(path) => {
                write!(f, "Not a NuGet package (expected a .nupkg file): {}", path)
            }
            Error::CliInputError(msg) => write!(f, "CLI input error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::NupkgError(err) => Some(err),
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl std::convert::From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Error {
        Error::IoError(error)
    }
}

impl std::convert::From<nupkg::error::Error> for Error {
    fn from(error: nupkg::error::Error) -> Error {
        Error::NupkgError(error)
    }
}
