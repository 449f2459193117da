use colored::Colorize;

pub fn run(ballgame: &str) -> Result<(), String> {
    let story = super::build_story(ballgame)?;
    let issues = story.validate();

    for issue in &issues {
        if issue.is_error {
            eprintln!("  {}", issue.to_string().red());
        } else {
            eprintln!("  {}", issue.to_string().yellow());
        }
    }

    let errors = issues.iter().filter(|i| i.is_error).count();
    if errors > 0 {
        return Err(format!(
            "scene graph has {errors} error{}",
            if errors == 1 { "" } else { "s" }
        ));
    }

    let choices: usize = story.scenes().iter().map(|s| s.choices.len()).sum();
    println!(
        "  All checks passed (ballgame: {}).",
        story.config().ballgame
    );
    println!("  {} scenes, {choices} choices", story.scenes().len());

    Ok(())
}
