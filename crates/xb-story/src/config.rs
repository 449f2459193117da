//! Configuration for building a story.

use std::fmt;

/// How the ballgame scene is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BallgameMode {
    /// Three scored rounds picked from a fixed set of moves.
    #[default]
    Scored,
    /// A free-text sacred code earned in an external mini-game.
    SacredCode,
}

impl BallgameMode {
    /// Parse a mode name: `scored` or `code` (`sacred-code` also accepted).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "scored" | "rounds" => Some(Self::Scored),
            "code" | "sacred-code" | "sacred_code" => Some(Self::SacredCode),
            _ => None,
        }
    }
}

impl fmt::Display for BallgameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scored => write!(f, "scored"),
            Self::SacredCode => write!(f, "code"),
        }
    }
}

/// Configuration for a story.
#[derive(Debug, Clone, Default)]
pub struct StoryConfig {
    /// Ballgame variant.
    pub ballgame: BallgameMode,
}

impl StoryConfig {
    /// Set the ballgame variant.
    pub fn with_ballgame(mut self, mode: BallgameMode) -> Self {
        self.ballgame = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = StoryConfig::default();
        assert_eq!(cfg.ballgame, BallgameMode::Scored);
    }

    #[test]
    fn builder_methods() {
        let cfg = StoryConfig::default().with_ballgame(BallgameMode::SacredCode);
        assert_eq!(cfg.ballgame, BallgameMode::SacredCode);
    }

    #[test]
    fn parse_modes() {
        assert_eq!(BallgameMode::parse("scored"), Some(BallgameMode::Scored));
        assert_eq!(BallgameMode::parse("CODE"), Some(BallgameMode::SacredCode));
        assert_eq!(
            BallgameMode::parse("sacred-code"),
            Some(BallgameMode::SacredCode)
        );
        assert_eq!(BallgameMode::parse("dice"), None);
    }

    #[test]
    fn display_parses_back() {
        for mode in [BallgameMode::Scored, BallgameMode::SacredCode] {
            assert_eq!(BallgameMode::parse(&mode.to_string()), Some(mode));
        }
    }
}
