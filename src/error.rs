use std::fmt::{self, Display};

/// Error returned when the value of an empty
/// [`MayBeValue`](crate::MayBeValue) is requested
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyValueAccess;

impl Display for EmptyValueAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no value is present")
    }
}

impl std::error::Error for EmptyValueAccess {}

/// Error returned when a frame cannot be decoded
#[derive(Debug)]
pub enum DecodeError {
    /// The underlying reader failed.
    Io(std::io::Error),
    /// The input ended before the frame was complete.
    UnexpectedEnd { needed: usize, remaining: usize },
    /// The frame was written with a version this crate does not know.
    UnsupportedVersion(u8),
    /// The presence flag was neither `0` nor `1`.
    InvalidFlag(u8),
    /// The value slot started with an unknown marker.
    InvalidMarker(u8),
    /// The element did not consume the whole value slot.
    TrailingBytes(usize),
    /// The value slot held bytes the element type rejected.
    InvalidElement(String),
    /// The presence flag is not set, but the value slot holds a value.
    Malformed,
}

impl DecodeError {
    pub(crate) fn invalid_element(description: impl Display) -> Self {
        Self::InvalidElement(description.to_string())
    }
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "could not read frame: {err}"),
            Self::UnexpectedEnd { needed, remaining } => write!(
                f,
                "unexpected end of input: needed {needed} bytes, \
                 but only {remaining} remain"
            ),
            Self::UnsupportedVersion(v) => {
                write!(f, "unsupported frame version {v}")
            }
            Self::InvalidFlag(b) => {
                write!(f, "invalid presence flag {b:#04x}")
            }
            Self::InvalidMarker(b) => {
                write!(f, "invalid value slot marker {b:#04x}")
            }
            Self::TrailingBytes(n) => {
                write!(f, "{n} trailing bytes in value slot")
            }
            Self::InvalidElement(description) => {
                write!(f, "invalid element: {description}")
            }
            Self::Malformed => write!(
                f,
                "malformed frame: value slot is not null \
                 but no value is present"
            ),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DecodeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
