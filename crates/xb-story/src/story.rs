//! The story engine: scene lookup and the transition function.

use tracing::debug;

use crate::choice::Effect;
use crate::code::{CodeVerdict, verify_code};
use crate::config::StoryConfig;
use crate::content::{self, BALLGAME_LOST, BALLGAME_WON, CODE_LOST, CODE_REJECTED, CODE_WON};
use crate::error::{StoryError, StoryResult};
use crate::scene::{Scene, SceneId};
use crate::state::SessionState;
use crate::validate::{GraphIssue, validate_story};

/// Number of rounds played in the scored ballgame.
pub const BALLGAME_ROUNDS: u32 = 3;

/// A code the Lords accept, used when playing the winning path.
const WINNING_CODE: &str = "TLACHTLI-P1";

/// The result of applying a decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The new session state.
    pub state: SessionState,
    /// The scene to present next. Always equal to `state.current_scene()`.
    pub next: SceneId,
    /// Text to show the player before the next scene, if any.
    pub message: Option<String>,
}

impl Transition {
    fn new(state: SessionState, message: Option<String>) -> Self {
        Self {
            next: state.current_scene(),
            state,
            message,
        }
    }
}

/// A decision that keeps the player on the success path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Move {
    /// Take the choice at this index.
    Choose(usize),
    /// Enter this sacred code.
    Enter(String),
}

/// The immutable scene table plus the rules for moving through it.
#[derive(Debug, Clone)]
pub struct Story {
    config: StoryConfig,
    scenes: Vec<Scene>,
}

impl Default for Story {
    fn default() -> Self {
        Self::new(StoryConfig::default())
    }
}

impl Story {
    /// Build the story for a configuration.
    pub fn new(config: StoryConfig) -> Self {
        let scenes = SceneId::ALL
            .into_iter()
            .map(|id| content::scene(id, &config))
            .collect();
        Self { config, scenes }
    }

    /// The configuration the story was built with.
    pub fn config(&self) -> &StoryConfig {
        &self.config
    }

    /// Look up a scene.
    pub fn scene(&self, id: SceneId) -> &Scene {
        &self.scenes[id.index()]
    }

    /// All scenes, in story order.
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    /// Apply the choice at `index` of `scene` to `state`.
    ///
    /// Fails with [`StoryError::InvalidChoice`] when the index is out of
    /// range for `scene`, whichever scene the session is at. On any error
    /// `state` is left as it was.
    pub fn submit_choice(
        &self,
        state: &SessionState,
        scene: SceneId,
        index: usize,
    ) -> StoryResult<Transition> {
        let current = self.scene(scene);
        let choice = current.choice(index).ok_or_else(|| {
            debug!(%scene, index, "rejected choice");
            StoryError::InvalidChoice {
                scene,
                index,
                available: current.choices.len(),
            }
        })?;
        check_scene(state, scene)?;

        let transition = match &choice.effect {
            // No code typed yet.
            Effect::VerifyCode => return self.submit_code(state, scene, ""),
            Effect::Advance { to, gain, message } => advance(state, *to, gain.as_deref(), message),
            Effect::Fail { reason, message } => fail(state, reason, message),
            Effect::Strike { points, message } => strike(state, *points, message),
            Effect::Restart => Transition::new(restart(state), None),
        };
        debug!(from = %scene, to = %transition.next, choice = %choice.label, "applied choice");
        Ok(transition)
    }

    /// Apply a sacred code to `state` at `scene`.
    ///
    /// Only scenes offering a [`Effect::VerifyCode`] choice accept codes;
    /// anywhere else, and for codes matching neither pattern, this fails
    /// with [`StoryError::InvalidCode`].
    pub fn submit_code(
        &self,
        state: &SessionState,
        scene: SceneId,
        code: &str,
    ) -> StoryResult<Transition> {
        let accepts_code = self
            .scene(scene)
            .choices
            .iter()
            .any(|c| c.effect == Effect::VerifyCode);

        let verdict = if accepts_code {
            verify_code(code)
        } else {
            CodeVerdict::Unrecognized
        };
        if verdict == CodeVerdict::Unrecognized {
            debug!(%scene, code, "rejected code");
            return Err(StoryError::InvalidCode(code.to_string()));
        }
        check_scene(state, scene)?;

        let mut next = state.clone();
        let message = if verdict == CodeVerdict::Accepted {
            next.move_to(SceneId::Finale);
            CODE_WON
        } else {
            next.move_to(SceneId::GameOver);
            next.set_outcome_reason(CODE_LOST);
            CODE_REJECTED
        };

        debug!(from = %scene, to = %next.current_scene(), "accepted code");
        Ok(Transition::new(next, Some(message.to_string())))
    }

    /// The decision that keeps the player on the success path from the
    /// current scene, or `None` at a terminal scene.
    pub fn winning_move(&self, state: &SessionState) -> Option<Move> {
        let scene = self.scene(state.current_scene());
        if scene.is_terminal() {
            return None;
        }
        let (index, choice) = scene
            .choices
            .iter()
            .enumerate()
            .find(|(_, c)| c.is_winning())?;
        match choice.effect {
            Effect::VerifyCode => Some(Move::Enter(WINNING_CODE.to_string())),
            _ => Some(Move::Choose(index)),
        }
    }

    /// Apply a [`Move`].
    pub fn play(&self, state: &SessionState, mv: &Move) -> StoryResult<Transition> {
        match mv {
            Move::Choose(index) => self.submit_choice(state, state.current_scene(), *index),
            Move::Enter(code) => self.submit_code(state, state.current_scene(), code),
        }
    }

    /// Check the scene graph for structural problems.
    pub fn validate(&self) -> Vec<GraphIssue> {
        validate_story(self)
    }
}

/// Reset a session to its defaults, back at the start scene.
pub fn restart(_state: &SessionState) -> SessionState {
    SessionState::default()
}

fn check_scene(state: &SessionState, scene: SceneId) -> StoryResult<()> {
    if state.current_scene() == scene {
        Ok(())
    } else {
        Err(StoryError::SceneMismatch {
            expected: state.current_scene(),
            actual: scene,
        })
    }
}

fn advance(state: &SessionState, to: SceneId, gain: Option<&str>, message: &str) -> Transition {
    let mut next = state.clone();
    if let Some(item) = gain {
        next.collect(item);
    }
    next.move_to(to);
    Transition::new(next, Some(message.to_string()))
}

fn fail(state: &SessionState, reason: &str, message: &str) -> Transition {
    let mut next = state.clone();
    next.set_outcome_reason(reason);
    next.move_to(SceneId::GameOver);
    Transition::new(next, Some(message.to_string()))
}

fn strike(state: &SessionState, points: u32, message: &str) -> Transition {
    let mut next = state.clone();
    next.play_round(points);
    let message = if next.rounds() < BALLGAME_ROUNDS {
        next.move_to(SceneId::Ballgame);
        message.to_string()
    } else if next.score() >= 1 {
        next.move_to(SceneId::Finale);
        format!("{message}\n{BALLGAME_WON}")
    } else {
        next.set_outcome_reason(BALLGAME_LOST);
        next.move_to(SceneId::GameOver);
        message.to_string()
    };
    Transition::new(next, Some(message))
}
