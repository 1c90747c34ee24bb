use std::error::Error;
use std::fmt;

use ndarray::ShapeError;

/// Broad classification of a [`MarshalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The buffer does not have the shape the caller declared.
    InvalidArgument,
    /// A null pointer was passed together with a non-zero length.
    NullBuffer,
}

/// Custom error type for buffer conversion failures
#[derive(Debug, Clone, PartialEq)]
pub enum MarshalError {
    Indivisible { total: usize, divisor: usize },
    ZeroGroups,
    NotSquare { size: usize },
    LengthMismatch { expected: usize, actual: usize },
    SizeOverflow { size: usize, factor: usize },
    Shape(ShapeError),
    NullBuffer { len: usize },
}

impl MarshalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MarshalError::NullBuffer { .. } => ErrorKind::NullBuffer,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

impl fmt::Display for MarshalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MarshalError::Indivisible { total, divisor } => write!(
                f,
                "buffer of {} values cannot be split evenly by {}",
                total, divisor
            ),
            MarshalError::ZeroGroups => write!(f, "group count must be greater than zero"),
            MarshalError::NotSquare { size } => {
                write!(f, "{} elements do not form a square matrix", size)
            }
            MarshalError::LengthMismatch { expected, actual } => write!(
                f,
                "declared size requires {} values but buffer holds {}",
                expected, actual
            ),
            MarshalError::SizeOverflow { size, factor } => write!(
                f,
                "declared size {} times {} exceeds the addressable buffer length",
                size, factor
            ),
            MarshalError::Shape(err) => write!(f, "{}", err),
            MarshalError::NullBuffer { len } => {
                write!(f, "null buffer passed with declared length {}", len)
            }
        }
    }
}

impl Error for MarshalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MarshalError::Shape(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ShapeError> for MarshalError {
    fn from(err: ShapeError) -> Self {
        MarshalError::Shape(err)
    }
}
