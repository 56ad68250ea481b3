//! Error type shared by the reducers and the command-line front end.
//!
//! The numeric surface has a single failure mode, a length mismatch between
//! the two inputs of a Hamming reduction, which is detected before any work
//! is done. The remaining variants belong to argument parsing.
//!
//! [`fmt::Display`] gives the short message printed to users;
//! [`fmt::Debug`] (derived) keeps the structured fields.

use std::fmt;
use std::io;
use std::num::ParseIntError;

#[derive(Debug)]
pub enum Error {
    /// The two input sequences of a Hamming reduction differ in length.
    ///
    /// * `left` - length of the first sequence.
    /// * `right` - length of the second sequence.
    SizeMismatch { left: usize, right: usize },

    /// A command-line argument could not be understood.
    Usage(String),

    /// A numeric command-line value failed to parse.
    InvalidNumber { value: String, source: ParseIntError },

    /// Writing command output failed.
    Io(io::Error),
}

impl Error {
    /// Process exit status for this error when it ends the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage(_) | Error::InvalidNumber { .. } => 2,
            Error::SizeMismatch { .. } | Error::Io(_) => 1,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SizeMismatch { left, right } => {
                write!(f, "vector sizes must match (got {left} and {right})")
            }
            Error::Usage(msg) => write!(f, "{msg}"),
            Error::InvalidNumber { value, source } => {
                write!(f, "invalid number '{value}': {source}")
            }
            Error::Io(e) => write!(f, "failed to write output: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidNumber { source, .. } => Some(source),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn size_mismatch_message_names_both_lengths() {
        let err = Error::SizeMismatch { left: 3, right: 2 };
        assert_eq!(err.to_string(), "vector sizes must match (got 3 and 2)");
        assert_eq!(err.exit_code(), 1);
        assert!(err.source().is_none());
    }

    #[test]
    fn invalid_number_keeps_parse_source() {
        let source = "x1".parse::<u64>().unwrap_err();
        let err = Error::InvalidNumber {
            value: "x1".into(),
            source,
        };
        assert!(err.to_string().starts_with("invalid number 'x1'"));
        assert!(err.source().is_some());
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn io_errors_convert() {
        let err: Error = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.exit_code(), 1);
        assert!(err.source().is_some());
    }
}
