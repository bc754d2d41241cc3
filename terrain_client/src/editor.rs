/**
 * Level Editor Session
 *
 * Owns one terrain chunk and the portals placed on it. This is the caller
 * side of `terrain_common`: it builds a terrain, writes cells, keeps the
 * portal list, and hands out the rendered level fragment.
 */
use log::{debug, info, warn};
use terrain_common::spatial::{is_in_level, to_tile};
use terrain_common::{Portal, Terrain, TerrainError};
use thiserror::Error;

/// Errors surfaced to the editor prompt
#[derive(Debug, Error, PartialEq)]
pub enum EditorError {
    #[error(transparent)]
    Terrain(#[from] TerrainError),
    #[error("position ({0}, {1}) is outside the level")]
    OutsideLevel(f32, f32),
}

pub struct LevelEditor {
    terrain: Terrain,
    portals: Vec<Portal>,
}

impl LevelEditor {
    pub fn new(world: &str, height: i32, width: i32, x: i32, y: i32) -> Self {
        info!("Creating {}x{} terrain in world '{}' at ({}, {})", width, height, world, x, y);
        LevelEditor {
            terrain: Terrain::new(world, height, width, x, y),
            portals: Vec::new(),
        }
    }

    /// Start over on a fresh terrain, returning how many portals were dropped
    pub fn reset(&mut self, world: &str, height: i32, width: i32, x: i32, y: i32) -> usize {
        let dropped = self.portals.len();
        *self = LevelEditor::new(world, height, width, x, y);
        if dropped > 0 {
            warn!("Dropped {} portals from the previous terrain", dropped);
        }
        dropped
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    pub fn portals(&self) -> &[Portal] {
        &self.portals
    }

    /// Location code of the current terrain, e.g. `overworld:0:0`
    pub fn location(&self) -> String {
        format!("{}:{}:{}", self.terrain.world, self.terrain.x, self.terrain.y)
    }

    pub fn set_tile(&mut self, col: usize, row: usize, id: u32) -> Result<(), EditorError> {
        self.terrain.set_tile(col, row, id)?;
        debug!("Tile ({}, {}) set to {}", col, row, id);
        Ok(())
    }

    pub fn set_blocked(&mut self, col: usize, row: usize, blocked: bool) -> Result<(), EditorError> {
        self.terrain.set_blocked(col, row, blocked)?;
        debug!("Cell ({}, {}) blocked={}", col, row, blocked);
        Ok(())
    }

    pub fn add_portal(&mut self, portal: Portal) {
        info!(
            "Portal at ({}, {}) size {}x{} -> {}",
            portal.x, portal.y, portal.width, portal.height, portal.destination
        );
        self.portals.push(portal);
    }

    /// Find the first portal an entity at pixel position `(px, py)` is touching
    pub fn portal_at(&self, px: f32, py: f32) -> Result<Option<&Portal>, EditorError> {
        if !is_in_level(px, py) {
            return Err(EditorError::OutsideLevel(px, py));
        }
        let (tx, ty) = (to_tile(px), to_tile(py));
        Ok(self.portals.iter().find(|p| p.is_touching(tx, ty)))
    }

    /// The level fragment for the current terrain
    pub fn render(&self) -> String {
        self.terrain.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_show_up_in_render() {
        let mut editor = LevelEditor::new("w", 2, 2, 0, 0);
        editor.set_tile(0, 0, 3).unwrap();
        editor.set_blocked(1, 1, true).unwrap();
        assert_eq!(
            editor.render(),
            r#""level": [[3,0][0,0]],"hitmap": [[0,0][0,1]], "h": 2, "w": 2, "x": 0, "y": 0"#
        );
    }

    #[test]
    fn out_of_range_edit_is_reported() {
        let mut editor = LevelEditor::new("w", 2, 2, 0, 0);
        let err = editor.set_tile(2, 0, 1).unwrap_err();
        assert_eq!(
            err,
            EditorError::Terrain(TerrainError::OutOfBounds { col: 2, row: 0, width: 2, height: 2 })
        );
        assert_eq!(err.to_string(), "cell (2, 0) is outside the 2x2 grid");
    }

    #[test]
    fn walking_onto_a_portal_finds_it() {
        let mut editor = LevelEditor::new("overworld", 75, 75, 0, 0);
        editor.add_portal(Portal::new(10, 20, 2, 1, ":church", 5.0, 8.0));
        editor.add_portal(Portal::new(40, 40, 1, 1, "overworld:1:0", 1.0, 37.0));

        let hit = editor.portal_at(550.0, 1025.0).unwrap().unwrap();
        assert_eq!(hit.resolve_destination(&editor.location()), "overworld:0:0:church");

        let far = editor.portal_at(2025.0, 2025.0).unwrap().unwrap();
        assert_eq!(far.destination, "overworld:1:0");

        assert_eq!(editor.portal_at(100.0, 100.0).unwrap(), None);
    }

    #[test]
    fn positions_outside_level_are_rejected() {
        let editor = LevelEditor::new("w", 1, 1, 0, 0);
        assert_eq!(editor.portal_at(-5.0, 0.0), Err(EditorError::OutsideLevel(-5.0, 0.0)));
    }

    #[test]
    fn reset_reports_dropped_portals() {
        let mut editor = LevelEditor::new("w", 2, 2, 0, 0);
        editor.add_portal(Portal::new(0, 0, 1, 1, ":inn", 1.0, 1.0));
        editor.add_portal(Portal::new(1, 1, 1, 1, "..", 1.0, 1.0));
        editor.set_tile(0, 0, 9).unwrap();

        assert_eq!(editor.reset("w", 1, 3, 4, 5), 2);
        assert!(editor.portals().is_empty());
        assert_eq!(editor.location(), "w:4:5");
        assert_eq!((editor.terrain().columns(), editor.terrain().rows()), (3, 1));
        assert_eq!(editor.reset("w", 1, 1, 0, 0), 0);
    }

    #[test]
    fn location_uses_world_and_origin() {
        let editor = LevelEditor::new("caves", 1, 1, -2, 3);
        assert_eq!(editor.location(), "caves:-2:3");
        assert!(editor.portals().is_empty());
        assert_eq!(editor.terrain().world, "caves");
    }
}
