//! Error types for the peripheral collaborators (§7: the core algorithm is total).

use std::fmt;
use std::io;

/// Result type alias for uax9 operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for uax9 operations.
///
/// The core reordering pipeline never fails; errors only arise at the
/// periphery, decoding/encoding bytes or parsing CLI flags.
#[derive(Debug)]
pub enum Error {
    /// I/O error reading input or writing output.
    Io(io::Error),
    /// Unknown or unsupported encoding name passed to the byte-string wrapper.
    UnknownEncoding(String),
    /// Bytes could not be decoded under the requested encoding.
    Decode { encoding: String },
    /// Invalid CLI flag value (e.g. `--base-dir` outside `{L, R}`).
    Usage(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnknownEncoding(name) => write!(f, "unknown encoding: {name}"),
            Self::Decode { encoding } => {
                write!(f, "could not decode input as {encoding}")
            }
            Self::Usage(msg) => write!(f, "usage error: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownEncoding("not-an-encoding".to_string());
        assert!(err.to_string().contains("not-an-encoding"));

        let err = Error::Usage("--base-dir must be L or R".to_string());
        assert!(err.to_string().contains("--base-dir"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
