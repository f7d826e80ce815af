use core::fmt;

/// Convenience alias used by fallible level construction
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// Grid has no rows or no columns
    EmptyGrid,
    /// A row's length differs from the first row's
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// Tile size must be finite and positive
    InvalidTileSize(f32),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid has no cells"),
            Self::RaggedRows {
                row,
                expected,
                actual,
            } => write!(f, "row {row} has {actual} tiles, expected {expected}"),
            Self::InvalidTileSize(size) => write!(f, "invalid tile size: {size}"),
            Self::Io(e) => write!(f, "io error: {e}"),
            Self::Json(e) => write!(f, "level parse error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
