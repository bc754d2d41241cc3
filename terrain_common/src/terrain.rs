use std::fmt;

use crate::error::TerrainError;

/// A rectangular chunk of level data: tile ids and passability per cell,
/// positioned at `(x, y)` in world space.
///
/// Both grids are indexed `[column][row]` and always hold `width` columns of
/// `height` cells. Non-positive dimensions simply produce empty grids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terrain {
    /// World this chunk belongs to. Not part of the rendered fragment.
    pub world: String,
    pub height: i32,
    pub width: i32,
    pub x: i32,
    pub y: i32,
    pub tiles: Vec<Vec<u32>>,
    pub hitmap: Vec<Vec<bool>>,
}

impl Terrain {
    /// Build a terrain with every tile set to 0 and every cell passable
    pub fn new(world: impl Into<String>, height: i32, width: i32, x: i32, y: i32) -> Self {
        let columns = width.max(0) as usize;
        let rows = height.max(0) as usize;

        let terrain = Terrain {
            world: world.into(),
            height,
            width,
            x,
            y,
            tiles: vec![vec![0; rows]; columns],
            hitmap: vec![vec![false; rows]; columns],
        };
        log::debug!(
            "Allocated {}x{} terrain for world '{}' at ({}, {})",
            width, height, terrain.world, x, y
        );
        terrain
    }

    /// Number of allocated columns
    pub fn columns(&self) -> usize {
        self.tiles.len()
    }

    /// Number of allocated rows per column
    pub fn rows(&self) -> usize {
        self.tiles.first().map_or(0, Vec::len)
    }

    pub fn contains(&self, col: usize, row: usize) -> bool {
        col < self.columns() && row < self.rows()
    }

    pub fn tile(&self, col: usize, row: usize) -> Option<u32> {
        self.tiles.get(col)?.get(row).copied()
    }

    pub fn set_tile(&mut self, col: usize, row: usize, id: u32) -> Result<(), TerrainError> {
        let cell = self
            .tiles
            .get_mut(col)
            .and_then(|column| column.get_mut(row))
            .ok_or(TerrainError::OutOfBounds { col, row, width: self.width, height: self.height })?;
        *cell = id;
        Ok(())
    }

    /// Whether the cell blocks movement, `None` outside the grid
    pub fn is_blocked(&self, col: usize, row: usize) -> Option<bool> {
        self.hitmap.get(col)?.get(row).copied()
    }

    pub fn set_blocked(&mut self, col: usize, row: usize, blocked: bool) -> Result<(), TerrainError> {
        let cell = self
            .hitmap
            .get_mut(col)
            .and_then(|column| column.get_mut(row))
            .ok_or(TerrainError::OutOfBounds { col, row, width: self.width, height: self.height })?;
        *cell = blocked;
        Ok(())
    }
}

/// Writes each column as `[a,b,c]`. Columns are emitted back to back with no
/// separator between them; consumers depend on this exact shape.
fn write_columns<T, D, F>(f: &mut fmt::Formatter<'_>, grid: &[Vec<T>], render: F) -> fmt::Result
where
    D: fmt::Display,
    F: Fn(&T) -> D,
{
    for column in grid {
        f.write_str("[")?;
        for (i, cell) in column.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", render(cell))?;
        }
        f.write_str("]")?;
    }
    Ok(())
}

/// Renders the level fragment embedded by callers inside a larger JSON object:
///
/// `"level": [[..][..]],"hitmap": [[..][..]], "h": H, "w": W, "x": X, "y": Y`
impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"level\": [")?;
        write_columns(f, &self.tiles, |id| *id)?;
        f.write_str("],\"hitmap\": [")?;
        write_columns(f, &self.hitmap, |blocked| u8::from(*blocked))?;
        write!(
            f,
            "], \"h\": {}, \"w\": {}, \"x\": {}, \"y\": {}",
            self.height, self.width, self.x, self.y
        )
    }
}
