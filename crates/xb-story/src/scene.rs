//! Scene identifiers and static scene content.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::choice::Choice;
use crate::error::StoryError;

/// Identifier of a scene in the story graph.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SceneId {
    /// Title scene; the only entry point.
    #[default]
    Start,
    /// Four colored paths and a mosquito.
    Crossroads,
    /// The Lords' boiling-hot bench.
    ThroneRoom,
    /// Keep a torch burning without burning it.
    HouseOfGloom,
    /// Survive a night of ice and hail.
    HouseOfCold,
    /// A room full of hungry jaguars.
    HouseOfJaguars,
    /// The tlachtli court.
    Ballgame,
    /// The grand trick.
    Finale,
    /// Terminal: the Lords are defeated.
    Victory,
    /// Terminal: the journey ends.
    GameOver,
}

impl SceneId {
    /// Every scene, in story order.
    pub const ALL: [SceneId; 10] = [
        Self::Start,
        Self::Crossroads,
        Self::ThroneRoom,
        Self::HouseOfGloom,
        Self::HouseOfCold,
        Self::HouseOfJaguars,
        Self::Ballgame,
        Self::Finale,
        Self::Victory,
        Self::GameOver,
    ];

    /// The snake_case name of the scene.
    pub fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Crossroads => "crossroads",
            Self::ThroneRoom => "throne_room",
            Self::HouseOfGloom => "house_of_gloom",
            Self::HouseOfCold => "house_of_cold",
            Self::HouseOfJaguars => "house_of_jaguars",
            Self::Ballgame => "ballgame",
            Self::Finale => "finale",
            Self::Victory => "victory",
            Self::GameOver => "game_over",
        }
    }

    /// Parse a scene name (case-insensitive, `-` accepted for `_`).
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|id| id.name() == normalized)
    }

    /// Whether the scene ends a playthrough (only restart is offered).
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Victory | Self::GameOver)
    }

    /// Position of the scene in [`SceneId::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SceneId {
    type Err = StoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| StoryError::UnknownScene(s.to_string()))
    }
}

/// A single narrative state with its choices.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Scene identifier.
    pub id: SceneId,
    /// Banner heading.
    pub title: String,
    /// Narrative text, one paragraph per entry.
    pub text: Vec<String>,
    /// Question shown above the choices.
    pub prompt: String,
    /// Offered choices, in stable order.
    pub choices: Vec<Choice>,
    /// Journey progress in percent, for shells that draw a progress bar.
    pub progress: Option<u8>,
}

impl Scene {
    /// Create an empty scene with the given identifier and title.
    pub fn new(id: SceneId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            text: Vec::new(),
            prompt: String::new(),
            choices: Vec::new(),
            progress: None,
        }
    }

    /// Append a paragraph of narrative text.
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.text.push(line.into());
        self
    }

    /// Set the prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Add a choice.
    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }

    /// Set the progress percentage (clamped to 100).
    pub fn with_progress(mut self, percent: u8) -> Self {
        self.progress = Some(percent.min(100));
        self
    }

    /// Get a choice by zero-based index.
    pub fn choice(&self, index: usize) -> Option<&Choice> {
        self.choices.get(index)
    }

    /// Whether the scene ends a playthrough.
    pub fn is_terminal(&self) -> bool {
        self.id.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::Effect;

    #[test]
    fn names_round_trip_through_parse() {
        for id in SceneId::ALL {
            assert_eq!(SceneId::parse(id.name()), Some(id));
        }
    }

    #[test]
    fn parse_is_lenient() {
        assert_eq!(SceneId::parse("House-Of-Cold"), Some(SceneId::HouseOfCold));
        assert_eq!(SceneId::parse(" victory "), Some(SceneId::Victory));
        assert_eq!(SceneId::parse("xibalba"), None);
    }

    #[test]
    fn from_str_reports_unknown() {
        let err = "nowhere".parse::<SceneId>().unwrap_err();
        assert_eq!(err, StoryError::UnknownScene("nowhere".to_string()));
    }

    #[test]
    fn index_matches_all_order() {
        for (i, id) in SceneId::ALL.into_iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn only_victory_and_game_over_are_terminal() {
        let terminal: Vec<_> = SceneId::ALL
            .into_iter()
            .filter(|id| id.is_terminal())
            .collect();
        assert_eq!(terminal, vec![SceneId::Victory, SceneId::GameOver]);
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&SceneId::HouseOfJaguars).unwrap();
        assert_eq!(json, "\"house_of_jaguars\"");
        let back: SceneId = serde_json::from_str("\"throne_room\"").unwrap();
        assert_eq!(back, SceneId::ThroneRoom);
    }

    #[test]
    fn scene_builder() {
        let scene = Scene::new(SceneId::Finale, "The Grand Trick")
            .with_line("You perform miracles.")
            .with_prompt("Make the final decision.")
            .with_choice(Choice::new("Burn them", Effect::Restart))
            .with_progress(140);

        assert_eq!(scene.text.len(), 1);
        assert_eq!(scene.choices.len(), 1);
        assert_eq!(scene.progress, Some(100));
        assert!(scene.choice(1).is_none());
        assert!(!scene.is_terminal());
    }
}
