use crate::config::PropTable;
use crate::tiles::{Layer, Prop, Terrain, TilePos};
use rand::Rng;

/// Scatters props over bare grass.
#[derive(Debug, Clone, Default)]
pub struct PropPlacer {
    table: PropTable,
}

impl PropPlacer {
    pub fn new(table: PropTable) -> Self {
        Self { table }
    }

    /// Build the prop layer for `terrain`.
    ///
    /// Interior grass cells run the table's trials in order and take the
    /// first success. Grass is read from `terrain`, which is never written,
    /// so an earlier placement cannot hide a cell from later ones.
    pub fn place<R: Rng>(&self, terrain: &Layer<Terrain>, rng: &mut R) -> Layer<Option<Prop>> {
        let (width, height) = (terrain.width(), terrain.height());
        let mut props = Layer::filled(width, height, None);

        for y in 1..height.saturating_sub(1) {
            for x in 1..width.saturating_sub(1) {
                if terrain.get(TilePos::new(x as i32, y as i32)) != Some(Terrain::Grass) {
                    continue;
                }
                let placed = self
                    .table
                    .entries()
                    .iter()
                    .find(|entry| rng.gen::<f64>() < entry.chance)
                    .map(|entry| entry.prop);
                props.set(x, y, placed);
            }
        }

        props
    }
}
