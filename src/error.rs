use std::fmt;

#[derive(Debug)]
pub enum BlockError {
    InvalidLength { got: usize },
}

impl fmt::Display for BlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockError::InvalidLength { got } => {
                write!(
                    f,
                    "invalid sample count {}: a block holds exactly 64 samples",
                    got
                )
            }
        }
    }
}

impl std::error::Error for BlockError {}
