use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    MalformedInput(String),
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    Exhausted(usize),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInput(msg) => write!(f, "malformed input: {}", msg),
            Self::OutOfBounds { x, y, width, height } => {
                write!(f, "({}, {}) is outside a {}x{} grid", x, y, width, height)
            }
            Self::Exhausted(n) => write!(f, "no fixed point within {} steps", n),
        }
    }
}

impl std::error::Error for GridError {}

pub type Result<T> = std::result::Result<T, GridError>;
