use serde::{Deserialize, Serialize};
use spacetimedb::SpacetimeType;

/// Destination that leads back out of the current sublocation
pub const PARENT_DESTINATION: &str = "..";

/// Segments in a root location code, `world:x:y`
const ROOT_SEGMENTS: usize = 3;

/**
 * A rectangular trigger region that sends an entity to another terrain.
 *
 * The rectangle is in the owning terrain's tile space; the destination
 * coordinates are tiles in the target terrain. A destination starting with
 * `:` names a sublocation of the current terrain rather than a whole world
 * location, and `..` leads back to the parent of the current sublocation.
 */
#[derive(SpacetimeType, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Portal {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub destination: String,
    pub destination_x: f32,
    pub destination_y: f32,
}

impl Portal {
    pub fn new(
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        destination: impl Into<String>,
        destination_x: f32,
        destination_y: f32,
    ) -> Self {
        Portal {
            x,
            y,
            width,
            height,
            destination: destination.into(),
            destination_x,
            destination_y,
        }
    }

    /// Copy of this portal shifted by a tile offset, used when a building's
    /// portals are stamped onto a larger level. Coordinates wrap on overflow.
    pub fn translated(&self, dx: i32, dy: i32) -> Portal {
        Portal {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
            ..self.clone()
        }
    }

    /// Hit test for an entity standing at the tile-space point `(tile_x, tile_y)`.
    /// The entity is one tile wide and reaches one tile above its feet.
    pub fn is_touching(&self, tile_x: f32, tile_y: f32) -> bool {
        let (px, py) = (self.x as f32, self.y as f32);
        let (pw, ph) = (self.width as f32, self.height as f32);
        !(px + pw < tile_x || tile_x + 1.0 < px || py + ph < tile_y - 1.0 || tile_y < py)
    }

    pub fn is_relative(&self) -> bool {
        self.destination.starts_with(':')
    }

    pub fn is_parent(&self) -> bool {
        self.destination == PARENT_DESTINATION
    }

    /// Full location name this portal leads to when taken from `current`.
    /// A parent portal at the `world:x:y` root stays where it is.
    pub fn resolve_destination(&self, current: &str) -> String {
        if self.is_parent() {
            match current.rsplit_once(':') {
                Some((parent, _)) if current.split(':').count() > ROOT_SEGMENTS => parent.to_string(),
                _ => current.to_string(),
            }
        } else if self.is_relative() {
            format!("{}{}", current, self.destination)
        } else {
            self.destination.clone()
        }
    }
}
