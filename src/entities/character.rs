use super::animation::{Animator, SpriteFrame};
use super::types::{CharacterState, Direction, MoveOutcome};
use crate::config::CharacterConfig;
use crate::sim::KeyState;
use crate::tiles::{TileGrid, TilePos};
use bevy::math::{IRect, IVec2, UVec2};

/// The player-controlled character.
///
/// Position is the top-left corner of the bounding box in world pixels.
#[derive(Debug, Clone)]
pub struct Character {
    position: IVec2,
    size: u32,
    speed: i32,
    run_multiplier: i32,
    state: CharacterState,
    facing: Option<Direction>,
    animator: Animator,
}

impl Character {
    pub fn new(config: &CharacterConfig, position: IVec2) -> Self {
        Self {
            position,
            size: config.size,
            speed: config.speed,
            run_multiplier: config.run_multiplier,
            state: CharacterState::Idle,
            facing: None,
            animator: Animator::new(config.frame_threshold),
        }
    }

    /// Place the character with its centre on the centre of a map
    pub fn spawn_centered(config: &CharacterConfig, map_size: UVec2) -> Self {
        let center = (map_size / 2).as_ivec2();
        let half = (config.size / 2) as i32;
        Self::new(config, center - IVec2::splat(half))
    }

    pub fn position(&self) -> IVec2 {
        self.position
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn center(&self) -> IVec2 {
        self.position + IVec2::splat((self.size / 2) as i32)
    }

    /// Bounding box in world pixels
    pub fn rect(&self) -> IRect {
        IRect::from_corners(self.position, self.position + IVec2::splat(self.size as i32))
    }

    pub fn state(&self) -> CharacterState {
        self.state
    }

    /// Last direction moved in, `None` until the first move
    pub fn facing(&self) -> Option<Direction> {
        self.facing
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    /// Sprite to draw for the current state
    pub fn sprite(&self) -> SpriteFrame {
        self.animator.frame(self.state)
    }

    /// Apply one tick of input.
    ///
    /// The move is all or nothing: if the destination fails the collision
    /// check the position is left as is and the tick reports `Blocked`.
    pub fn update(&mut self, keys: &KeyState, grid: &TileGrid) -> MoveOutcome {
        let state = CharacterState::from_input(keys.direction(), keys.run);
        self.state = state;
        self.animator.tick(state);

        let Some(direction) = state.direction() else {
            return MoveOutcome::Idle;
        };
        self.facing = Some(direction);

        let step = if state.is_running() {
            self.speed.saturating_mul(self.run_multiplier)
        } else {
            self.speed
        };
        let target = self.position.saturating_add(keys.displacement(step));

        if self.can_occupy(grid, target) {
            self.position = target;
            MoveOutcome::Moved
        } else {
            MoveOutcome::Blocked
        }
    }

    /// Collision test for a top-left position.
    ///
    /// All four corner tiles must lie inside the grid, but only the two
    /// bottom ones are tested for passability. Corners are sampled at
    /// `position + size`, so a box flush against a tile edge reaches into
    /// the next tile.
    pub fn can_occupy(&self, grid: &TileGrid, position: IVec2) -> bool {
        let size = self.size as i32;
        let tile = |offset: IVec2| TilePos::from_pixel(position.saturating_add(offset), grid.tile_size());

        let top_left = tile(IVec2::ZERO);
        let top_right = tile(IVec2::new(size, 0));
        let bottom_left = tile(IVec2::new(0, size));
        let bottom_right = tile(IVec2::new(size, size));

        let in_bounds = [top_left, top_right, bottom_left, bottom_right]
            .iter()
            .all(|&corner| grid.contains(corner));

        in_bounds
            && grid.is_passable(bottom_left.x, bottom_left.y)
            && grid.is_passable(bottom_right.x, bottom_right.y)
    }
}
