use crate::entities::Direction;
use bevy::math::{IVec2, UVec2};
use std::collections::VecDeque;

/// Raw key state sampled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Run modifier
    pub run: bool,
}

impl KeyState {
    pub const fn idle() -> Self {
        Self {
            left: false,
            right: false,
            up: false,
            down: false,
            run: false,
        }
    }

    pub const fn holding(direction: Direction) -> Self {
        let mut keys = Self::idle();
        match direction {
            Direction::Left => keys.left = true,
            Direction::Right => keys.right = true,
            Direction::Up => keys.up = true,
            Direction::Down => keys.down = true,
        }
        keys
    }

    pub const fn running(mut self) -> Self {
        self.run = true;
        self
    }

    /// Facing chosen by the held keys.
    ///
    /// Keys are checked Left, Right, Up, Down and the last held one wins,
    /// so Down beats Up beats Right beats Left.
    pub fn direction(&self) -> Option<Direction> {
        [
            (self.left, Direction::Left),
            (self.right, Direction::Right),
            (self.up, Direction::Up),
            (self.down, Direction::Down),
        ]
        .into_iter()
        .filter(|&(held, _)| held)
        .map(|(_, direction)| direction)
        .last()
    }

    /// Sum of the per-key steps. Opposite keys cancel.
    pub fn displacement(&self, step: i32) -> IVec2 {
        let mut delta = IVec2::ZERO;
        if self.left {
            delta.x = delta.x.saturating_sub(step);
        }
        if self.right {
            delta.x = delta.x.saturating_add(step);
        }
        if self.up {
            delta.y = delta.y.saturating_sub(step);
        }
        if self.down {
            delta.y = delta.y.saturating_add(step);
        }
        delta
    }
}

/// Everything the loop reads from the outside world in one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub keys: KeyState,
    /// New viewport size in pixels, if the window changed this tick
    pub resize: Option<UVec2>,
    /// Zoom notches this tick, positive zooms in
    pub zoom_steps: i32,
    pub quit: bool,
}

impl InputFrame {
    pub fn keys(keys: KeyState) -> Self {
        Self {
            keys,
            ..Default::default()
        }
    }

    pub fn quit() -> Self {
        Self {
            quit: true,
            ..Default::default()
        }
    }
}

/// Source of per-tick input
pub trait InputProvider {
    fn poll(&mut self) -> InputFrame;
}

/// Replays a fixed list of frames, then asks the loop to quit.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<InputFrame>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = InputFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// `ticks` frames walking a slow square, switching direction every
    /// `leg` ticks and running on every other lap.
    pub fn patrol(ticks: usize, leg: usize) -> Self {
        let leg = leg.max(1);
        let order = [Direction::Right, Direction::Down, Direction::Left, Direction::Up];
        Self::new((0..ticks).map(|tick| {
            let side = (tick / leg) % order.len();
            let lap = tick / (leg * order.len());
            let keys = KeyState::holding(order[side]);
            InputFrame::keys(if lap % 2 == 1 { keys.running() } else { keys })
        }))
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputProvider for ScriptedInput {
    fn poll(&mut self) -> InputFrame {
        self.frames.pop_front().unwrap_or_else(InputFrame::quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_held_key_wins() {
        let keys = KeyState {
            left: true,
            up: true,
            ..KeyState::idle()
        };
        assert_eq!(keys.direction(), Some(Direction::Up));

        let keys = KeyState {
            left: true,
            right: true,
            ..KeyState::idle()
        };
        assert_eq!(keys.direction(), Some(Direction::Right));

        let keys = KeyState {
            up: true,
            down: true,
            left: true,
            right: true,
            run: false,
        };
        assert_eq!(keys.direction(), Some(Direction::Down));
        assert_eq!(KeyState::idle().direction(), None);
    }

    #[test]
    fn test_run_alone_is_not_a_direction() {
        assert_eq!(KeyState::idle().running().direction(), None);
    }

    #[test]
    fn test_displacement() {
        let keys = KeyState {
            left: true,
            down: true,
            ..KeyState::idle()
        };
        assert_eq!(keys.displacement(5), IVec2::new(-5, 5));

        let cancel = KeyState {
            left: true,
            right: true,
            ..KeyState::idle()
        };
        assert_eq!(cancel.displacement(5), IVec2::ZERO);
    }

    #[test]
    fn test_scripted_input_quits_when_exhausted() {
        let mut input = ScriptedInput::new([InputFrame::keys(KeyState::holding(Direction::Up))]);
        assert_eq!(input.poll().keys.direction(), Some(Direction::Up));
        assert!(input.poll().quit);
        assert!(input.poll().quit);
    }

    #[test]
    fn test_patrol_cycles_directions() {
        let mut input = ScriptedInput::patrol(10, 2);
        assert_eq!(input.remaining(), 10);
        let directions: Vec<_> = (0..10).map(|_| input.poll().keys.direction()).collect();
        assert_eq!(directions[0], Some(Direction::Right));
        assert_eq!(directions[2], Some(Direction::Down));
        assert_eq!(directions[4], Some(Direction::Left));
        assert_eq!(directions[6], Some(Direction::Up));
        assert_eq!(directions[8], Some(Direction::Right));
        assert!(input.poll().quit);
    }
}
