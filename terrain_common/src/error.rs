use thiserror::Error;

/// Errors from checked cell access on a terrain grid
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TerrainError {
    #[error("cell ({col}, {row}) is outside the {width}x{height} grid")]
    OutOfBounds {
        col: usize,
        row: usize,
        width: i32,
        height: i32,
    },
}
