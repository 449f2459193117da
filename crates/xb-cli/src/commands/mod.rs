pub mod check;
pub mod play;
pub mod scenes;

use xb_story::{BallgameMode, Story, StoryConfig};

/// Build the story for a ballgame variant name given on the command line.
fn build_story(ballgame: &str) -> Result<Story, String> {
    let mode = BallgameMode::parse(ballgame)
        .ok_or_else(|| format!("unknown ballgame variant '{ballgame}', use: scored, code"))?;
    Ok(Story::new(StoryConfig::default().with_ballgame(mode)))
}
