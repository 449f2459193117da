//! Choices and the effects they produce.

use crate::scene::SceneId;

/// A labeled option offered at a scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// The text shown to the player.
    pub label: String,
    /// What happens when the choice is taken.
    pub effect: Effect,
}

impl Choice {
    /// Create a new choice.
    pub fn new(label: impl Into<String>, effect: Effect) -> Self {
        Self {
            label: label.into(),
            effect,
        }
    }

    /// Whether taking this choice keeps the player on the success path.
    pub fn is_winning(&self) -> bool {
        match &self.effect {
            Effect::Advance { .. } | Effect::VerifyCode => true,
            Effect::Strike { points, .. } => *points > 0,
            Effect::Fail { .. } | Effect::Restart => false,
        }
    }
}

/// The transition a choice triggers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Move on to another scene.
    Advance {
        /// Target scene.
        to: SceneId,
        /// Item appended to the inventory, if any.
        gain: Option<String>,
        /// Text shown after the choice.
        message: String,
    },
    /// End the playthrough in `game_over`.
    Fail {
        /// Reason recorded in the session and shown on the game-over scene.
        reason: String,
        /// Text shown after the choice.
        message: String,
    },
    /// Play one ballgame round.
    Strike {
        /// Points scored by this move.
        points: u32,
        /// Text shown after the move.
        message: String,
    },
    /// Verify a sacred code supplied as free text.
    VerifyCode,
    /// Reset the session and return to `start`.
    Restart,
}

impl Effect {
    /// Shorthand for an [`Effect::Advance`] without an item.
    pub fn advance(to: SceneId, message: impl Into<String>) -> Self {
        Self::Advance {
            to,
            gain: None,
            message: message.into(),
        }
    }

    /// Shorthand for an [`Effect::Fail`].
    pub fn fail(reason: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fail {
            reason: reason.into(),
            message: message.into(),
        }
    }

    /// Shorthand for an [`Effect::Strike`].
    pub fn strike(points: u32, message: impl Into<String>) -> Self {
        Self::Strike {
            points,
            message: message.into(),
        }
    }

    /// Scenes this effect can lead to.
    pub fn targets(&self) -> Vec<SceneId> {
        match self {
            Self::Advance { to, .. } => vec![*to],
            Self::Fail { .. } => vec![SceneId::GameOver],
            Self::Strike { .. } => vec![SceneId::Ballgame, SceneId::Finale, SceneId::GameOver],
            Self::VerifyCode => vec![SceneId::Finale, SceneId::GameOver],
            Self::Restart => vec![SceneId::Start],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winning_choices() {
        assert!(Choice::new("Go", Effect::advance(SceneId::Finale, "")).is_winning());
        assert!(Choice::new("Hit", Effect::strike(1, "")).is_winning());
        assert!(Choice::new("Verify", Effect::VerifyCode).is_winning());
        assert!(!Choice::new("Miss", Effect::strike(0, "")).is_winning());
        assert!(!Choice::new("Die", Effect::fail("x", "y")).is_winning());
        assert!(!Choice::new("Again", Effect::Restart).is_winning());
    }

    #[test]
    fn effect_targets() {
        assert_eq!(
            Effect::advance(SceneId::HouseOfCold, "").targets(),
            vec![SceneId::HouseOfCold]
        );
        assert_eq!(Effect::fail("r", "m").targets(), vec![SceneId::GameOver]);
        assert_eq!(Effect::Restart.targets(), vec![SceneId::Start]);
        assert!(Effect::strike(0, "").targets().contains(&SceneId::Finale));
    }
}
