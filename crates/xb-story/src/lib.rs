//! Story engine for The Ballgame of Xibalba.
//!
//! The engine is a small finite-state machine: a fixed table of [`Scene`]s,
//! each offering labeled [`Choice`]s, and a pure transition function that
//! maps a [`SessionState`] plus a decision to the next state. It performs no
//! I/O; presentation shells render scenes and feed player decisions back in.

pub mod choice;
pub mod code;
pub mod config;
mod content;
pub mod error;
pub mod scene;
pub mod state;
pub mod story;
pub mod validate;

pub use choice::{Choice, Effect};
pub use code::{CodeVerdict, verify_code};
pub use config::{BallgameMode, StoryConfig};
pub use error::{StoryError, StoryResult};
pub use scene::{Scene, SceneId};
pub use state::SessionState;
pub use story::{BALLGAME_ROUNDS, Move, Story, Transition, restart};
pub use validate::GraphIssue;
