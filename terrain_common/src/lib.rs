//! Level data shared by the game server and its tools: terrain chunks,
//! portals between them, and tile-space math.

pub mod error;
pub mod portal;
pub mod spatial;
pub mod terrain;

pub use error::TerrainError;
pub use portal::Portal;
pub use terrain::Terrain;
