//! Error types for the story engine.

use thiserror::Error;

use crate::scene::SceneId;

/// Result type for story operations.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors that can occur while driving a story session.
///
/// None of these are fatal: the session state passed in is never modified,
/// so the shell can simply present the same scene again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoryError {
    /// The choice index is not one of the scene's offered choices.
    #[error("invalid choice {index} at {scene}: {available} choices offered")]
    InvalidChoice {
        /// Scene the choice was submitted against.
        scene: SceneId,
        /// Zero-based index that was submitted.
        index: usize,
        /// Number of choices the scene offers.
        available: usize,
    },

    /// The sacred code matched neither the success nor the failure pattern.
    #[error("not a valid code: {0:?}")]
    InvalidCode(String),

    /// A decision was submitted for a scene the session is not at.
    #[error("decision submitted for {actual}, but the session is at {expected}")]
    SceneMismatch {
        /// Scene recorded in the session state.
        expected: SceneId,
        /// Scene the shell submitted against.
        actual: SceneId,
    },

    /// A deserialized session state breaks the ballgame invariants.
    #[error("corrupt session state: {0}")]
    CorruptState(String),

    /// A scene name could not be parsed.
    #[error("unknown scene: {0}")]
    UnknownScene(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_choice_message() {
        let err = StoryError::InvalidChoice {
            scene: SceneId::Crossroads,
            index: 7,
            available: 5,
        };
        assert_eq!(
            err.to_string(),
            "invalid choice 7 at crossroads: 5 choices offered"
        );
    }

    #[test]
    fn invalid_code_quotes_input() {
        let err = StoryError::InvalidCode("garbage".to_string());
        assert_eq!(err.to_string(), "not a valid code: \"garbage\"");
    }
}
