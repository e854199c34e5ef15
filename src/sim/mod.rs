pub mod input;
pub mod limiter;
pub mod runner;

pub use input::{InputFrame, InputProvider, KeyState, ScriptedInput};
pub use limiter::{remaining_budget, FpsCounter, FrameLimiter};
pub use runner::{RunSummary, SimulationLoop, TickReport};
