pub mod animation;
pub mod character;
pub mod types;

pub use animation::{AnimationClip, Animator, SpriteFrame};
pub use character::Character;
pub use types::{CharacterState, Direction, MoveOutcome};
