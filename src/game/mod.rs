//! Game logic: difficulty presets, the round state machine, and session state.

pub mod difficulty;
pub mod round;
pub mod session;

pub use difficulty::{Difficulty, RoundConfig};
pub use round::{Feedback, Round};
pub use session::Session;
