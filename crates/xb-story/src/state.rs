//! Per-playthrough session state.

use serde::{Deserialize, Serialize};

use crate::error::{StoryError, StoryResult};
use crate::scene::SceneId;
use crate::story::BALLGAME_ROUNDS;

/// The data carried between scenes for one player's playthrough.
///
/// A session starts from [`SessionState::default`] and is only ever changed
/// by the story engine, which returns a fresh value for every transition.
/// Deserialized states are checked against the ballgame counters and
/// rejected with [`StoryError::CorruptState`] when they could not have been
/// produced by play.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawSessionState")]
pub struct SessionState {
    current_scene: SceneId,
    inventory: Vec<String>,
    score: u32,
    rounds: u32,
    last_outcome_reason: Option<String>,
}

impl SessionState {
    /// Create a fresh session at the start scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// The scene the player is at.
    pub fn current_scene(&self) -> SceneId {
        self.current_scene
    }

    /// Collected items, in the order they were found.
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    /// Check if an item has been collected.
    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|i| i == item)
    }

    /// Ballgame points scored.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Ballgame rounds played.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Why the last playthrough ended in `game_over`, if it did.
    pub fn last_outcome_reason(&self) -> Option<&str> {
        self.last_outcome_reason.as_deref()
    }

    /// Whether the session sits at a terminal scene.
    pub fn is_finished(&self) -> bool {
        self.current_scene.is_terminal()
    }

    pub(crate) fn move_to(&mut self, scene: SceneId) {
        self.current_scene = scene;
    }

    pub(crate) fn collect(&mut self, item: impl Into<String>) {
        self.inventory.push(item.into());
    }

    pub(crate) fn play_round(&mut self, points: u32) {
        self.score += points;
        self.rounds += 1;
    }

    pub(crate) fn set_outcome_reason(&mut self, reason: impl Into<String>) {
        self.last_outcome_reason = Some(reason.into());
    }
}

#[derive(Deserialize)]
struct RawSessionState {
    current_scene: SceneId,
    #[serde(default)]
    inventory: Vec<String>,
    #[serde(default)]
    score: u32,
    #[serde(default)]
    rounds: u32,
    #[serde(default)]
    last_outcome_reason: Option<String>,
}

impl TryFrom<RawSessionState> for SessionState {
    type Error = StoryError;

    fn try_from(raw: RawSessionState) -> StoryResult<Self> {
        if raw.rounds > BALLGAME_ROUNDS {
            return Err(StoryError::CorruptState(format!(
                "{} rounds played, at most {BALLGAME_ROUNDS} allowed",
                raw.rounds
            )));
        }
        if raw.score > raw.rounds {
            return Err(StoryError::CorruptState(format!(
                "score {} exceeds {} rounds played",
                raw.score, raw.rounds
            )));
        }
        if raw.current_scene == SceneId::Ballgame && raw.rounds == BALLGAME_ROUNDS {
            return Err(StoryError::CorruptState("ballgame already finished".to_string()));
        }

        Ok(Self {
            current_scene: raw.current_scene,
            inventory: raw.inventory,
            score: raw.score,
            rounds: raw.rounds,
            last_outcome_reason: raw.last_outcome_reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let state = SessionState::new();
        assert_eq!(state.current_scene(), SceneId::Start);
        assert!(state.inventory().is_empty());
        assert_eq!(state.score(), 0);
        assert_eq!(state.rounds(), 0);
        assert_eq!(state.last_outcome_reason(), None);
        assert!(!state.is_finished());
    }

    #[test]
    fn inventory_keeps_order() {
        let mut state = SessionState::new();
        state.collect("Secret Names");
        state.collect("Macaw Feathers");
        assert_eq!(state.inventory(), ["Secret Names", "Macaw Feathers"]);
        assert!(state.has_item("Secret Names"));
        assert!(!state.has_item("Cigar"));
    }

    #[test]
    fn rounds_and_score() {
        let mut state = SessionState::new();
        state.play_round(1);
        state.play_round(0);
        assert_eq!(state.score(), 1);
        assert_eq!(state.rounds(), 2);
    }

    #[test]
    fn json_shape() {
        let mut state = SessionState::new();
        state.move_to(SceneId::GameOver);
        state.set_outcome_reason("You froze in the House of Cold.");

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["current_scene"], "game_over");
        assert_eq!(json["last_outcome_reason"], "You froze in the House of Cold.");

        let back: SessionState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
        assert!(back.is_finished());
    }

    #[test]
    fn impossible_counters_are_rejected() {
        for json in [
            r#"{"current_scene": "ballgame", "rounds": 7}"#,
            r#"{"current_scene": "finale", "score": 2, "rounds": 1}"#,
            r#"{"current_scene": "ballgame", "score": 1, "rounds": 3}"#,
        ] {
            let err = serde_json::from_str::<SessionState>(json).unwrap_err();
            assert!(err.to_string().contains("corrupt session state"), "{json}: {err}");
        }
    }

    #[test]
    fn missing_counters_default_to_zero() {
        let state: SessionState =
            serde_json::from_str(r#"{"current_scene": "house_of_cold"}"#).unwrap();
        assert_eq!(state.current_scene(), SceneId::HouseOfCold);
        assert_eq!((state.score(), state.rounds()), (0, 0));
    }
}
