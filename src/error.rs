use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Invalid domain ({width}x{height}): {msg}")]
    InvalidDomain {
        width: usize,
        height: usize,
        msg: String,
    },

    #[error("Field shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
}

impl Error {
    pub fn invalid_parameters(msg: &str) -> Self {
        Error::InvalidParameters(msg.to_string())
    }

    pub fn invalid_domain(width: usize, height: usize, msg: &str) -> Self {
        Error::InvalidDomain {
            width,
            height,
            msg: msg.to_string(),
        }
    }

    pub fn shape_mismatch(expected: (usize, usize), found: (usize, usize)) -> Self {
        Error::ShapeMismatch { expected, found }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
