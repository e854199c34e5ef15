pub mod generator;
pub mod props;
pub mod session;

pub use generator::{remove_isolated_water, TerrainGenerator};
pub use props::PropPlacer;
pub use session::{build_grid, Session};
