//! Console presentation shell.
//!
//! Renders the current scene as text, reads one line per decision and hands
//! it to the story engine. Choices are listed in a shuffled order so the
//! right answer is not always in the same place; the displayed number is
//! mapped back to the choice's stable index before the engine sees it.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

use xb_story::{
    BALLGAME_ROUNDS, Effect, Move, Scene, SceneId, SessionState, Story, StoryError, restart,
};

const RULE_WIDTH: usize = 60;
const BAR_WIDTH: usize = 20;

const NOT_UNDERSTOOD: &str = "I did not understand that. Please type the number of your choice.";

/// An interactive console session.
pub struct Shell {
    story: Story,
    state: SessionState,
    rng: Option<StdRng>,
}

impl Shell {
    /// Create a shell at the start scene. Without an RNG, choices are
    /// listed in their fixed order.
    pub fn new(story: Story, rng: Option<StdRng>) -> Self {
        Self {
            story,
            state: SessionState::new(),
            rng,
        }
    }

    /// The current session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Play until the player quits or input runs out.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> io::Result<()> {
        let mut line = String::new();

        loop {
            let order = self.display_order();
            write!(out, "{}\n> ", self.render(&order))?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break;
            }

            let trimmed = line.trim();
            if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("q") {
                writeln!(out, "Goodbye.")?;
                break;
            }

            if trimmed.eq_ignore_ascii_case("restart") || trimmed.eq_ignore_ascii_case("r") {
                debug!(from = %self.state.current_scene(), "shell restarted");
                self.state = restart(&self.state);
                writeln!(out, "\nYou climb back to the surface and begin again.\n")?;
                continue;
            }

            let feedback = self.handle(trimmed, &order);
            if !feedback.is_empty() {
                writeln!(out, "\n{feedback}\n")?;
            }
        }

        Ok(())
    }

    /// Play the winning move at every scene until the story ends.
    pub fn autoplay<W: Write>(&mut self, mut out: W) -> io::Result<()> {
        while let Some(mv) = self.story.winning_move(&self.state) {
            let order = self.display_order();
            write!(out, "{}", self.render(&order))?;

            let shown = match &mv {
                Move::Choose(index) => {
                    let label = &self.story.scene(self.state.current_scene()).choices[*index].label;
                    let number = order.iter().position(|i| i == index).unwrap_or(*index) + 1;
                    let note = format!("(auto: {label})");
                    format!("{number}  {}", note.dimmed())
                }
                Move::Enter(code) => code.clone(),
            };
            writeln!(out, "\n> {shown}")?;

            let transition = self.story.play(&self.state, &mv).map_err(io::Error::other)?;
            if let Some(message) = transition.message {
                writeln!(out, "\n{message}\n")?;
            }
            self.state = transition.state;
        }

        let order = self.display_order();
        write!(out, "{}", self.render(&order))?;
        Ok(())
    }

    /// Apply one line of input and return the text to show for it.
    fn handle(&mut self, input: &str, order: &[usize]) -> String {
        let scene = self.state.current_scene();

        let result = if accepts_code(self.story.scene(scene)) {
            self.story.submit_code(&self.state, scene, input)
        } else {
            match input.parse::<usize>() {
                Ok(number) if number >= 1 => {
                    let index = order.get(number - 1).copied().unwrap_or(number - 1);
                    self.story.submit_choice(&self.state, scene, index)
                }
                _ => return NOT_UNDERSTOOD.yellow().to_string(),
            }
        };

        match result {
            Ok(transition) => {
                debug!(from = %scene, to = %transition.next, "shell advanced");
                self.state = transition.state;
                transition.message.unwrap_or_default()
            }
            Err(e) => describe_error(&e).yellow().to_string(),
        }
    }

    fn display_order(&mut self) -> Vec<usize> {
        let len = self
            .story
            .scene(self.state.current_scene())
            .choices
            .len();
        let mut order: Vec<usize> = (0..len).collect();
        if let Some(rng) = self.rng.as_mut() {
            order.shuffle(rng);
        }
        order
    }

    fn render(&self, order: &[usize]) -> String {
        let scene = self.story.scene(self.state.current_scene());
        let mut out = banner(scene);

        if let Some(percent) = scene.progress {
            out.push_str(&format!("{}\n", progress_bar(percent)));
        }
        out.push('\n');

        for line in &scene.text {
            out.push_str(line);
            out.push('\n');
        }

        if scene.id == SceneId::GameOver {
            let reason = self.state.last_outcome_reason().unwrap_or("Unknown");
            out.push_str(&format!("\nReason: {reason}\n"));
        }

        if !matches!(
            scene.id,
            SceneId::Start | SceneId::GameOver | SceneId::Victory
        ) {
            out.push_str(&format!("\n{}\n", self.status_line()));
        }

        if scene.id == SceneId::Ballgame && !accepts_code(scene) {
            out.push_str(&format!(
                "ROUND {} of {BALLGAME_ROUNDS} | SCORE: {}\n",
                self.state.rounds() + 1,
                self.state.score()
            ));
        }

        out.push('\n');
        out.push_str(&format!("{}\n", scene.prompt.bold()));
        if accepts_code(scene) {
            out.push_str("  Type the code, 'restart' to begin again, or 'quit' to leave.\n");
        } else {
            for (position, &index) in order.iter().enumerate() {
                out.push_str(&format!(
                    "  [{}] {}\n",
                    position + 1,
                    scene.choices[index].label
                ));
            }
        }

        out
    }

    fn status_line(&self) -> String {
        let inventory = if self.state.inventory().is_empty() {
            "(empty)".to_string()
        } else {
            self.state.inventory().join(", ")
        };
        format!(
            "Inventory: {inventory} | Score: {}",
            self.state.score()
        )
        .dimmed()
        .to_string()
    }
}

fn accepts_code(scene: &Scene) -> bool {
    scene.choices.iter().any(|c| c.effect == Effect::VerifyCode)
}

fn banner(scene: &Scene) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let title = scene.title.to_uppercase();
    let title = match scene.id {
        SceneId::Victory => title.yellow().bold(),
        SceneId::GameOver => title.red().bold(),
        _ => title.bold(),
    };
    format!("\n{rule}\n  {title}\n{rule}\n")
}

fn progress_bar(percent: u8) -> String {
    let filled = usize::from(percent) * BAR_WIDTH / 100;
    format!(
        "[{}{}] {percent}%",
        "#".repeat(filled),
        ".".repeat(BAR_WIDTH - filled)
    )
}

fn describe_error(error: &StoryError) -> String {
    match error {
        StoryError::InvalidChoice {
            index, available, ..
        } => format!(
            "There is no choice {}. Please pick a number from 1 to {available}.",
            index + 1
        ),
        StoryError::InvalidCode(code) if code.is_empty() => "You must enter a code.".to_string(),
        StoryError::InvalidCode(_) => "The Lords laugh. 'That is not a valid code!'".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::io::Cursor;
    use xb_story::{BallgameMode, StoryConfig};

    fn play(story: Story, script: &str) -> (Shell, String) {
        let mut shell = Shell::new(story, None);
        let mut out = Vec::new();
        shell.run(Cursor::new(script), &mut out).unwrap();
        (shell, String::from_utf8(out).unwrap())
    }

    #[test]
    fn scripted_playthrough_wins() {
        // begin, scout, floor, feathers, pinecones, bones, three hip strikes, no revive
        let (shell, out) = play(Story::default(), "1\n2\n2\n2\n2\n2\n2\n2\n2\n2\n");
        assert_eq!(shell.state().current_scene(), SceneId::Victory);
        assert!(out.contains("VICTORY!"));
        assert!(out.contains("Secret Names"));
        assert!(out.contains("ROUND 3 of 3"));
    }

    #[test]
    fn wrong_path_shows_reason() {
        let (shell, out) = play(Story::default(), "1\n4\n");
        assert_eq!(shell.state().current_scene(), SceneId::GameOver);
        assert!(out.contains("Reason: You were lost in the dark."));
        assert!(out.contains("Try Again"));
    }

    #[test]
    fn bad_input_reprompts() {
        let (shell, out) = play(Story::default(), "1\nabc\n9\n0\n");
        assert_eq!(shell.state().current_scene(), SceneId::Crossroads);
        assert!(out.contains(NOT_UNDERSTOOD));
        assert!(out.contains("There is no choice 9"));
    }

    #[test]
    fn quit_stops_the_session() {
        let (shell, out) = play(Story::default(), "1\nquit\n2\n");
        assert_eq!(shell.state().current_scene(), SceneId::Crossroads);
        assert!(out.contains("Goodbye."));
    }

    #[test]
    fn restart_command_works_mid_journey() {
        let (shell, out) = play(Story::default(), "1\n2\n2\nrestart\n");
        assert_eq!(shell.state(), &SessionState::default());
        assert!(out.contains("begin again"));
        assert!(out.matches("THE BALLGAME OF XIBALBA").count() >= 2);
    }

    #[test]
    fn restart_command_at_the_code_prompt() {
        let story = Story::new(StoryConfig::default().with_ballgame(BallgameMode::SacredCode));
        let (shell, out) = play(story, "1\n2\n2\n2\n2\n2\nR\n");
        assert_eq!(shell.state(), &SessionState::default());
        assert!(!out.contains("That is not a valid code!"));
    }

    #[test]
    fn try_again_restarts() {
        let (shell, _) = play(Story::default(), "1\n2\n1\n1\n");
        assert_eq!(shell.state(), &SessionState::default());
    }

    #[test]
    fn sacred_code_playthrough() {
        let story = Story::new(StoryConfig::default().with_ballgame(BallgameMode::SacredCode));
        let script = "1\n2\n2\n2\n2\n2\n\ngarbage\nTLACHTLI-P1-WIN\n2\n";
        let (shell, out) = play(story, script);
        assert!(out.contains("You must enter a code."));
        assert!(out.contains("That is not a valid code!"));
        assert!(out.contains("You have defeated them on the court!"));
        assert_eq!(shell.state().current_scene(), SceneId::Victory);
    }

    #[test]
    fn shuffled_numbers_map_back_to_choices() {
        let mut shell = Shell::new(Story::default(), Some(StdRng::seed_from_u64(7)));
        let order = shell.display_order();
        shell.handle("1", &order);

        let order = shell.display_order();
        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3, 4]);

        // The scout is choice 1 in the fixed order.
        let shown = order.iter().position(|&i| i == 1).unwrap() + 1;
        shell.handle(&shown.to_string(), &order);
        assert_eq!(shell.state().current_scene(), SceneId::ThroneRoom);
    }

    #[test]
    fn autoplay_reaches_victory() {
        for mode in [BallgameMode::Scored, BallgameMode::SacredCode] {
            let story = Story::new(StoryConfig::default().with_ballgame(mode));
            let mut shell = Shell::new(story, Some(StdRng::seed_from_u64(1)));
            let mut out = Vec::new();
            shell.autoplay(&mut out).unwrap();
            assert_eq!(shell.state().current_scene(), SceneId::Victory);
        }
    }

    #[test]
    fn progress_bar_fills() {
        assert_eq!(progress_bar(0), format!("[{}] 0%", ".".repeat(BAR_WIDTH)));
        assert_eq!(progress_bar(100), format!("[{}] 100%", "#".repeat(BAR_WIDTH)));
        assert!(progress_bar(55).starts_with("[###########."));
    }
}
