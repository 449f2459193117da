//! Structural validation of the scene graph.
//!
//! Checks that every non-terminal scene offers a decision, that terminal
//! scenes offer nothing but a restart, that every scene can be reached
//! from `start`, and that following the winning moves ends in `victory`.

use std::collections::{BTreeSet, VecDeque};
use std::fmt;

use crate::choice::{Choice, Effect};
use crate::scene::SceneId;
use crate::state::SessionState;
use crate::story::Story;

/// Upper bound on decisions along the winning path.
const MAX_WALK: usize = 64;

/// A warning or error found in the scene graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphIssue {
    /// The scene where the issue was found.
    pub scene: SceneId,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl GraphIssue {
    fn error(scene: SceneId, message: impl Into<String>) -> Self {
        Self {
            scene,
            message: message.into(),
            is_error: true,
        }
    }

    fn warning(scene: SceneId, message: impl Into<String>) -> Self {
        Self {
            scene,
            message: message.into(),
            is_error: false,
        }
    }
}

impl fmt::Display for GraphIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.scene, self.message)
    }
}

/// Validate the scene graph of a story.
pub fn validate_story(story: &Story) -> Vec<GraphIssue> {
    let mut issues = Vec::new();

    for scene in story.scenes() {
        validate_choices(scene.id, &scene.choices, &mut issues);
    }
    validate_reachability(story, &mut issues);
    validate_winning_path(story, &mut issues);

    issues
}

fn validate_choices(id: SceneId, choices: &[Choice], issues: &mut Vec<GraphIssue>) {
    if id.is_terminal() {
        let only_restart = choices.len() == 1 && choices[0].effect == Effect::Restart;
        if !only_restart {
            issues.push(GraphIssue::error(
                id,
                "terminal scene must offer exactly one restart choice",
            ));
        }
        return;
    }

    if choices.is_empty() {
        issues.push(GraphIssue::error(id, "no choices offered"));
    }

    if choices.iter().any(|c| c.effect == Effect::Restart) {
        issues.push(GraphIssue::warning(
            id,
            "restart offered outside a terminal scene",
        ));
    }

    let mut labels = BTreeSet::new();
    for choice in choices {
        if !labels.insert(choice.label.as_str()) {
            issues.push(GraphIssue::warning(
                id,
                format!("duplicate choice label '{}'", choice.label),
            ));
        }
    }
}

fn validate_reachability(story: &Story, issues: &mut Vec<GraphIssue>) {
    let mut seen = BTreeSet::from([SceneId::Start]);
    let mut queue = VecDeque::from([SceneId::Start]);

    while let Some(id) = queue.pop_front() {
        for choice in &story.scene(id).choices {
            for target in choice.effect.targets() {
                if seen.insert(target) {
                    queue.push_back(target);
                }
            }
        }
    }

    for id in SceneId::ALL {
        if !seen.contains(&id) {
            issues.push(GraphIssue::error(id, "not reachable from start"));
        }
    }
}

fn validate_winning_path(story: &Story, issues: &mut Vec<GraphIssue>) {
    let mut state = SessionState::new();

    for _ in 0..MAX_WALK {
        let Some(mv) = story.winning_move(&state) else {
            break;
        };
        match story.play(&state, &mv) {
            Ok(t) => state = t.state,
            Err(e) => {
                issues.push(GraphIssue::error(
                    state.current_scene(),
                    format!("winning move rejected: {e}"),
                ));
                return;
            }
        }
    }

    if state.current_scene() != SceneId::Victory {
        issues.push(GraphIssue::error(
            state.current_scene(),
            "winning path does not end in victory",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BallgameMode, StoryConfig};

    #[test]
    fn shipped_stories_are_clean() {
        for mode in [BallgameMode::Scored, BallgameMode::SacredCode] {
            let story = Story::new(StoryConfig::default().with_ballgame(mode));
            let issues = story.validate();
            assert!(issues.is_empty(), "{mode}: {issues:?}");
        }
    }

    #[test]
    fn empty_scene_is_an_error() {
        let mut issues = Vec::new();
        validate_choices(SceneId::Finale, &[], &mut issues);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error);
        assert_eq!(issues[0].to_string(), "error: finale: no choices offered");
    }

    #[test]
    fn terminal_with_extra_choice_is_an_error() {
        let mut issues = Vec::new();
        let choices = [
            Choice::new("Try Again", Effect::Restart),
            Choice::new("Sneak out", Effect::advance(SceneId::Finale, "")),
        ];
        validate_choices(SceneId::GameOver, &choices, &mut issues);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error);
    }

    #[test]
    fn duplicate_labels_warn() {
        let mut issues = Vec::new();
        let choices = [
            Choice::new("Run", Effect::fail("a", "b")),
            Choice::new("Run", Effect::advance(SceneId::Finale, "")),
        ];
        validate_choices(SceneId::HouseOfCold, &choices, &mut issues);
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error);
        assert!(issues[0].to_string().starts_with("warning: house_of_cold"));
    }
}
