use std::io::{self, Write};

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::shell::Shell;

pub fn run(
    ballgame: &str,
    seed: Option<u64>,
    shuffle: bool,
    autoplay: bool,
    json: bool,
) -> Result<(), String> {
    let story = super::build_story(ballgame)?;

    let rng = shuffle.then(|| match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    });

    info!(ballgame = %story.config().ballgame, ?seed, shuffle, autoplay, "starting session");

    let mut shell = Shell::new(story, rng);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if autoplay {
        writeln!(
            out,
            "{}\n",
            "DEV MODE ACTIVATED! The game will now play itself.".dimmed()
        )
        .map_err(|e| e.to_string())?;
        shell.autoplay(&mut out).map_err(|e| e.to_string())?;
    } else {
        writeln!(out, "  Type the number of your choice, 'restart' to begin again, 'quit' to exit.")
            .map_err(|e| e.to_string())?;
        shell
            .run(io::stdin().lock(), &mut out)
            .map_err(|e| e.to_string())?;
    }

    info!(scene = %shell.state().current_scene(), "session ended");

    if json {
        let state = serde_json::to_string_pretty(shell.state()).map_err(|e| e.to_string())?;
        writeln!(out, "{state}").map_err(|e| e.to_string())?;
    }

    Ok(())
}
