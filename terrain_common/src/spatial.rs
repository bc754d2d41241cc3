/// Tile-space utilities (pixel to tile conversion and level bounds)

/// Size of one tile in world pixels
pub const TILE_SIZE: f32 = 50.0;

/// Standard level dimensions in tiles
pub const LEVEL_WIDTH: i32 = 75;
pub const LEVEL_HEIGHT: i32 = 75;

/// Convert a world pixel position to a (fractional) tile coordinate
pub fn to_tile(world_pos: f32) -> f32 {
    world_pos / TILE_SIZE
}

/// Check if a pixel position lies inside a standard level, edges included
pub fn is_in_level(x: f32, y: f32) -> bool {
    let max_x = LEVEL_WIDTH as f32 * TILE_SIZE;
    let max_y = LEVEL_HEIGHT as f32 * TILE_SIZE;
    (0.0..=max_x).contains(&x) && (0.0..=max_y).contains(&y)
}
