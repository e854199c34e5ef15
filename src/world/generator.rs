use crate::config::TerrainConfig;
use crate::tiles::{Layer, Terrain, TilePos};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces the base biome layer.
///
/// The outermost ring is always water; interior cells are rolled
/// independently, then isolated water cells are turned into grass.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerrainGenerator {
    config: TerrainConfig,
}

impl TerrainGenerator {
    pub fn new(config: TerrainConfig) -> Self {
        Self { config }
    }

    /// Generate from a seed. Same seed, same layer.
    pub fn generate(&self, width: usize, height: usize, seed: u64) -> Layer<Terrain> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate_with(width, height, &mut rng)
    }

    /// Generate from an existing random stream
    pub fn generate_with<R: Rng>(&self, width: usize, height: usize, rng: &mut R) -> Layer<Terrain> {
        // Start with water everywhere so the border ring stays water
        let mut terrain = Layer::filled(width, height, Terrain::Water);

        for y in 1..height.saturating_sub(1) {
            for x in 1..width.saturating_sub(1) {
                let roll = rng.gen_range(0..=self.config.roll_max);
                terrain.set(x, y, self.classify(roll));
            }
        }

        remove_isolated_water(&mut terrain);
        terrain
    }

    fn classify(&self, roll: u32) -> Terrain {
        if roll < self.config.water_below {
            Terrain::Water
        } else if roll < self.config.sand_below {
            Terrain::Sand
        } else {
            Terrain::Grass
        }
    }
}

/// Turn water cells without a 4-connected water neighbour into grass.
///
/// Single pass, in place, row by row. A cell is only reclassified when none
/// of its neighbours is water, so a reclassification can never isolate
/// another cell and the pass does not need to repeat.
pub fn remove_isolated_water(terrain: &mut Layer<Terrain>) {
    for y in 0..terrain.height() {
        for x in 0..terrain.width() {
            let pos = TilePos::new(x as i32, y as i32);
            if terrain.get(pos) != Some(Terrain::Water) {
                continue;
            }
            let has_water_neighbour = pos
                .neighbours4()
                .iter()
                .any(|&n| terrain.get(n) == Some(Terrain::Water));
            if !has_water_neighbour {
                terrain.set(x, y, Terrain::Grass);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn water_is_connected(terrain: &Layer<Terrain>) -> bool {
        terrain.iter().all(|(x, y, t)| {
            t != Terrain::Water
                || TilePos::new(x as i32, y as i32)
                    .neighbours4()
                    .iter()
                    .any(|&n| terrain.get(n) == Some(Terrain::Water))
        })
    }

    #[test]
    fn test_same_seed_same_terrain() {
        let generator = TerrainGenerator::default();
        let a = generator.generate(50, 50, 42);
        let b = generator.generate(50, 50, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let generator = TerrainGenerator::default();
        assert_ne!(generator.generate(50, 50, 1), generator.generate(50, 50, 2));
    }

    #[test]
    fn test_border_is_water() {
        let terrain = TerrainGenerator::default().generate(20, 12, 9);
        for (x, y, t) in terrain.iter() {
            if terrain.is_border(x, y) {
                assert_eq!(t, Terrain::Water, "border cell ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_all_biomes_appear() {
        let terrain = TerrainGenerator::default().generate(50, 50, 3);
        for biome in Terrain::ALL {
            assert!(terrain.iter().any(|(_, _, t)| t == biome), "{biome:?} missing");
        }
    }

    #[test]
    fn test_isolated_water_becomes_grass() {
        let mut terrain = Layer::filled(5, 5, Terrain::Sand);
        terrain.set(2, 2, Terrain::Water);
        // A connected pair survives
        terrain.set(0, 0, Terrain::Water);
        terrain.set(1, 0, Terrain::Water);
        // Diagonal contact does not count
        terrain.set(4, 4, Terrain::Water);
        terrain.set(3, 3, Terrain::Water);

        remove_isolated_water(&mut terrain);

        assert_eq!(terrain.get(TilePos::new(2, 2)), Some(Terrain::Grass));
        assert_eq!(terrain.get(TilePos::new(0, 0)), Some(Terrain::Water));
        assert_eq!(terrain.get(TilePos::new(1, 0)), Some(Terrain::Water));
        assert_eq!(terrain.get(TilePos::new(4, 4)), Some(Terrain::Grass));
        assert_eq!(terrain.get(TilePos::new(3, 3)), Some(Terrain::Grass));
    }

    #[test]
    fn test_smoothing_does_not_cascade() {
        // Only the lone cell changes; its sand neighbours are untouched
        let mut terrain = Layer::filled(3, 3, Terrain::Sand);
        terrain.set(1, 1, Terrain::Water);
        remove_isolated_water(&mut terrain);
        let grass: Vec<_> = terrain.iter().filter(|&(_, _, t)| t == Terrain::Grass).collect();
        assert_eq!(grass, vec![(1, 1, Terrain::Grass)]);
    }

    #[test]
    fn test_custom_thresholds() {
        let all_sand = TerrainConfig {
            roll_max: 10,
            water_below: 0,
            sand_below: 11,
        };
        let terrain = TerrainGenerator::new(all_sand).generate(6, 6, 5);
        for (x, y, t) in terrain.iter() {
            if !terrain.is_border(x, y) {
                assert_eq!(t, Terrain::Sand);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_no_isolated_water(seed in any::<u64>(), w in 3usize..40, h in 3usize..40) {
            let terrain = TerrainGenerator::default().generate(w, h, seed);
            prop_assert!(water_is_connected(&terrain));
        }

        #[test]
        fn prop_generation_is_deterministic(seed in any::<u64>()) {
            let generator = TerrainGenerator::default();
            prop_assert_eq!(generator.generate(16, 16, seed), generator.generate(16, 16, seed));
        }
    }
}
