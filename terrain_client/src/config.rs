/**
 * Level Editor Configuration
 *
 */

/// World name used when `TERRAIN_WORLD` is not set
pub const DEFAULT_WORLD: &str = "overworld";

/// Origin of the terrain created at startup
pub const DEFAULT_ORIGIN: (i32, i32) = (0, 0);

/// Retrieve the world name from the environment
pub fn world_name() -> String {
    world_name_from(std::env::var("TERRAIN_WORLD").ok())
}

/// Pick the world name from an optional variable value, ignoring empty values
fn world_name_from(var: Option<String>) -> String {
    var.filter(|world| !world.is_empty())
        .unwrap_or_else(|| DEFAULT_WORLD.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_world_is_plain_identifier() {
        assert!(!DEFAULT_WORLD.is_empty());
        assert!(!DEFAULT_WORLD.contains(':'));
    }

    #[test]
    fn unset_world_falls_back_to_default() {
        assert_eq!(world_name_from(None), DEFAULT_WORLD);
    }

    #[test]
    fn empty_world_falls_back_to_default() {
        assert_eq!(world_name_from(Some(String::new())), DEFAULT_WORLD);
    }

    #[test]
    fn set_world_is_used() {
        assert_eq!(world_name_from(Some("caves".to_string())), "caves");
    }
}
