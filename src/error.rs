//! Contains the Error and Result type used when rendering.
use std::fmt::Display;

/// The broad category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A value has no rendering in Minecraft's command syntax.
    Conversion,
    /// Any other failure, usually raised by a `Serialize` implementation.
    Custom,
}

/// Various errors that can occur during rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    msg: String,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl serde::ser::Error for Error {
    fn custom<T>(msg: T) -> Self
    where
        T: Display,
    {
        Error {
            kind: ErrorKind::Custom,
            msg: msg.to_string(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error {
            kind: ErrorKind::Custom,
            msg: format!("io error: {}", e),
        }
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    fn conversion(msg: String) -> Error {
        Error {
            kind: ErrorKind::Conversion,
            msg,
        }
    }

    pub(crate) fn null_value() -> Error {
        Error::conversion("cannot render null: drop the key or give it a value".to_owned())
    }

    pub(crate) fn non_finite_float(v: f64) -> Error {
        Error::conversion(format!("cannot render non-finite float: {}", v))
    }

    pub(crate) fn key_must_be_a_string() -> Error {
        Error::conversion("compound key must be a string".to_owned())
    }

    pub(crate) fn unsupported(ty: &str) -> Error {
        Error::conversion(format!("{} has no Minecraft command syntax", ty))
    }

    pub(crate) fn bespoke(msg: String) -> Error {
        Error {
            kind: ErrorKind::Custom,
            msg,
        }
    }
}
