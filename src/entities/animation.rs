use super::types::{CharacterState, Direction};

/// Sprite sequences the character can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationClip {
    Idle,
    WalkUp,
    WalkDown,
    /// Left-facing; drawn mirrored when facing right
    WalkSide,
    Run,
}

impl AnimationClip {
    pub const ALL: [AnimationClip; 5] = [
        AnimationClip::Idle,
        AnimationClip::WalkUp,
        AnimationClip::WalkDown,
        AnimationClip::WalkSide,
        AnimationClip::Run,
    ];

    pub const fn len(self) -> usize {
        match self {
            AnimationClip::Idle => 1,
            AnimationClip::WalkUp | AnimationClip::WalkDown | AnimationClip::WalkSide => 6,
            AnimationClip::Run => 2,
        }
    }

    /// File stem prefix of the clip's frames (`u1`, `u2`, ...)
    pub const fn frame_prefix(self) -> &'static str {
        match self {
            AnimationClip::Idle => "s",
            AnimationClip::WalkUp => "u",
            AnimationClip::WalkDown => "d",
            AnimationClip::WalkSide => "w",
            AnimationClip::Run => "r",
        }
    }

    /// Asset name of one frame, 1-based like the files on disk
    pub fn frame_name(self, index: usize) -> String {
        format!("{}{}", self.frame_prefix(), index % self.len() + 1)
    }

    /// Clip shown for a movement state
    pub const fn for_state(state: CharacterState) -> Self {
        match state {
            CharacterState::Idle => AnimationClip::Idle,
            CharacterState::Running(_) => AnimationClip::Run,
            CharacterState::Walking(Direction::Up) => AnimationClip::WalkUp,
            CharacterState::Walking(Direction::Down) => AnimationClip::WalkDown,
            CharacterState::Walking(Direction::Left | Direction::Right) => AnimationClip::WalkSide,
        }
    }
}

/// The frame to draw this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteFrame {
    pub clip: AnimationClip,
    pub index: usize,
    pub flip_x: bool,
}

/// Frame index and tick counter for the moving clips.
///
/// Remembers the last moving state so that stopping and starting again in
/// the same way continues the cycle instead of restarting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animator {
    last_moving: Option<CharacterState>,
    index: usize,
    counter: u32,
    threshold: u32,
}

impl Animator {
    pub fn new(threshold: u32) -> Self {
        Self {
            last_moving: None,
            index: 0,
            counter: 0,
            threshold: threshold.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Advance by one tick in `state`
    pub fn tick(&mut self, state: CharacterState) {
        if !state.is_moving() {
            return;
        }

        if self.last_moving != Some(state) {
            self.index = 0;
            self.last_moving = Some(state);
        }

        self.counter += 1;
        if self.counter >= self.threshold {
            self.counter = 0;
            self.index = (self.index + 1) % AnimationClip::for_state(state).len();
        }
    }

    /// Frame to draw while in `state`
    pub fn frame(&self, state: CharacterState) -> SpriteFrame {
        let clip = AnimationClip::for_state(state);
        SpriteFrame {
            clip,
            index: self.index % clip.len(),
            flip_x: state.direction().is_some_and(Direction::flip_x),
        }
    }
}
