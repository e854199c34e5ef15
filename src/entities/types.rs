/// Direction the character is facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Right-facing sprites reuse the left clip mirrored
    pub const fn flip_x(self) -> bool {
        matches!(self, Direction::Right)
    }
}

/// Movement mode of the character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharacterState {
    #[default]
    Idle,
    Walking(Direction),
    Running(Direction),
}

impl CharacterState {
    /// State for one tick of input
    pub const fn from_input(direction: Option<Direction>, run: bool) -> Self {
        match direction {
            None => CharacterState::Idle,
            Some(direction) if run => CharacterState::Running(direction),
            Some(direction) => CharacterState::Walking(direction),
        }
    }

    pub const fn direction(self) -> Option<Direction> {
        match self {
            CharacterState::Idle => None,
            CharacterState::Walking(direction) | CharacterState::Running(direction) => Some(direction),
        }
    }

    pub const fn is_moving(self) -> bool {
        !matches!(self, CharacterState::Idle)
    }

    pub const fn is_running(self) -> bool {
        matches!(self, CharacterState::Running(_))
    }
}

/// Result of one movement tick. A blocked move is an ordinary outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Position changed
    Moved,
    /// A key was held but the destination was out of bounds or on water
    Blocked,
    /// No directional key held
    Idle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_input() {
        assert_eq!(CharacterState::from_input(None, true), CharacterState::Idle);
        assert_eq!(
            CharacterState::from_input(Some(Direction::Left), false),
            CharacterState::Walking(Direction::Left)
        );
        assert_eq!(
            CharacterState::from_input(Some(Direction::Up), true),
            CharacterState::Running(Direction::Up)
        );
    }

    #[test]
    fn test_state_accessors() {
        let state = CharacterState::Running(Direction::Right);
        assert_eq!(state.direction(), Some(Direction::Right));
        assert!(state.is_moving());
        assert!(state.is_running());
        assert!(!CharacterState::Idle.is_moving());
        assert!(Direction::Right.flip_x());
        assert!(!Direction::Left.flip_x());
    }
}
