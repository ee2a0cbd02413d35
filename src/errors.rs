//! Various box and telemetry related errors.

use std::{fmt, path::PathBuf};

/// Various box read and `gps0` decode errors.
#[derive(Debug)]
pub enum Gps0Error {
    /// Converted `BinResult` error.
    BinReadError(binrw::Error),
    /// IO error
    IOError(std::io::Error),
    /// Stream ended part way through a box header.
    /// A stream that ends exactly on a box boundary is not an error.
    TruncatedHeader{got: u64, expected: u64, offset: u64},
    /// Declared box size is smaller than the
    /// header that was already read.
    UnexpectedAtomSize{size: u64, header_size: u8, offset: u64},
    /// `gps0` body ended part way through a 32 byte record.
    TruncatedRecord{got: u64, expected: u64, offset: u64},
    /// Error for a specific input, e.g. a file path.
    Input{path: PathBuf, err: Box<Gps0Error>},
}

impl std::error::Error for Gps0Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Gps0Error::BinReadError(err) => Some(err),
            Gps0Error::IOError(err) => Some(err),
            Gps0Error::Input{err, ..} => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl fmt::Display for Gps0Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gps0Error::BinReadError(err) => write!(f, "{err}"),
            Gps0Error::IOError(err) => write!(f, "IO error: {}", err),
            Gps0Error::TruncatedHeader{got, expected, offset} => write!(f, "Truncated box header @ offset {offset}. Read {got} bytes, expected {expected} bytes."),
            Gps0Error::UnexpectedAtomSize{size, header_size, offset} => write!(f, "Malformed box @ offset {offset}. Declared size {size} bytes is smaller than the {header_size} byte header."),
            Gps0Error::TruncatedRecord{got, expected, offset} => write!(f, "Truncated gps0 record @ offset {offset}. Read {got} bytes, expected {expected} bytes."),
            Gps0Error::Input{path, err} => write!(f, "{}: {err}", path.display()),
        }
    }
}

impl Gps0Error {
    /// Attach input identity, e.g. a file path.
    /// Errors that already carry an identity are left as is.
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Gps0Error::Input{..} => self,
            err => Gps0Error::Input{path: path.into(), err: Box::new(err)},
        }
    }
}

/// Converts std::io::Error to Gps0Error
impl From<std::io::Error> for Gps0Error {
    fn from(err: std::io::Error) -> Self {
        Gps0Error::IOError(err)
    }
}

/// Converts binrw::Error to Gps0Error
impl From<binrw::Error> for Gps0Error {
    fn from(err: binrw::Error) -> Gps0Error {
        Gps0Error::BinReadError(err)
    }
}

/// Converts csv::Error to Gps0Error
impl From<csv::Error> for Gps0Error {
    fn from(err: csv::Error) -> Gps0Error {
        Gps0Error::IOError(err.into())
    }
}
