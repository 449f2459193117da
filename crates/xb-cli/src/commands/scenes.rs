use comfy_table::{ContentArrangement, Table};

use xb_story::{Effect, Scene};

pub fn run(ballgame: &str) -> Result<(), String> {
    let story = super::build_story(ballgame)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Scene", "Title", "Choices", "Progress"]);

    for scene in story.scenes() {
        let progress = scene
            .progress
            .map(|p| format!("{p}%"))
            .unwrap_or_else(|| "—".to_string());
        table.add_row(vec![
            scene.id.to_string(),
            scene.title.clone(),
            describe_choices(scene),
            progress,
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} scenes, ballgame: {}",
        story.scenes().len(),
        story.config().ballgame
    );

    Ok(())
}

/// One line per choice: `label -> target`.
fn describe_choices(scene: &Scene) -> String {
    scene
        .choices
        .iter()
        .map(|c| format!("{} -> {}", c.label, describe_effect(&c.effect)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn describe_effect(effect: &Effect) -> String {
    match effect {
        Effect::Advance { to, gain: Some(item), .. } => format!("{to} (+{item})"),
        Effect::Advance { to, .. } => to.to_string(),
        Effect::Fail { .. } => "game_over".to_string(),
        Effect::Strike { points, .. } => format!("round (+{points})"),
        Effect::VerifyCode => "finale | game_over (code)".to_string(),
        Effect::Restart => "start (restart)".to_string(),
    }
}
