//! The story table: narrative text and choices for every scene.

use crate::choice::{Choice, Effect};
use crate::config::{BallgameMode, StoryConfig};
use crate::scene::{Scene, SceneId};

/// Item collected at the crossroads.
pub(crate) const SECRET_NAMES: &str = "Secret Names";

/// Reason recorded when the scored ballgame ends without a point.
pub(crate) const BALLGAME_LOST: &str = "The Lords defeated you in the game.";

/// Reason recorded when the sacred code belongs to the Lords.
pub(crate) const CODE_LOST: &str = "Lost the ballgame.";

/// Text shown when the scored ballgame is won.
pub(crate) const BALLGAME_WON: &str = "The Lords are furious that you are winning.\n\
They cheat and throw the ball into the House of Fire.";

/// Text shown when an accepted sacred code is entered.
pub(crate) const CODE_WON: &str =
    "The Lords recoil in shock! You have defeated them on the court!";

/// Text shown when a rejected sacred code is entered.
pub(crate) const CODE_REJECTED: &str =
    "The code turns red and crumbles. The Lords defeated you.";

/// Build the scene for `id` under the given configuration.
pub(crate) fn scene(id: SceneId, config: &StoryConfig) -> Scene {
    match id {
        SceneId::Start => start(),
        SceneId::Crossroads => crossroads(),
        SceneId::ThroneRoom => throne_room(),
        SceneId::HouseOfGloom => house_of_gloom(),
        SceneId::HouseOfCold => house_of_cold(),
        SceneId::HouseOfJaguars => house_of_jaguars(),
        SceneId::Ballgame => match config.ballgame {
            BallgameMode::Scored => scored_ballgame(),
            BallgameMode::SacredCode => sacred_code_ballgame(),
        },
        SceneId::Finale => finale(),
        SceneId::Victory => victory(),
        SceneId::GameOver => game_over(),
    }
}

fn start() -> Scene {
    Scene::new(SceneId::Start, "The Ballgame of Xibalba")
        .with_line("Many years ago, the First Twins played ball too loudly.")
        .with_line("The Lords of the Underworld (Xibalba) were annoyed.")
        .with_line("The First Twins failed the tests and were defeated.")
        .with_line("Now, YOU are the New Twins: Hunahpu and Xbalanque.")
        .with_line("You have accepted the challenge to restore honor to your family.")
        .with_prompt("Are you ready?")
        .with_choice(Choice::new(
            "Begin Adventure",
            Effect::advance(SceneId::Crossroads, "You descend into the underworld."),
        ))
}

fn crossroads() -> Scene {
    // Every path walked alone ends the same way; only the scout succeeds.
    let lost = || {
        Effect::fail(
            "You were lost in the dark.",
            "You walk into the dark. The Lords trick you immediately!",
        )
    };

    Scene::new(SceneId::Crossroads, "The Crossroads")
        .with_progress(10)
        .with_line("You descend deep into the earth. You arrive at four paths:")
        .with_line("Red, White, Yellow, and Black.")
        .with_line("The Lords are hiding. A mosquito named Xan buzzes near your ear.")
        .with_prompt("What will you do?")
        .with_choice(Choice::new("Walk the Black Path alone", lost()))
        .with_choice(Choice::new(
            "Send Xan the Mosquito ahead to scout",
            Effect::Advance {
                to: SceneId::ThroneRoom,
                gain: Some(SECRET_NAMES.to_string()),
                message: "Smart choice. Xan flies ahead.\n\
                    Xan bites the wooden dummies. They are silent.\n\
                    Xan bites the REAL Lords. They yell 'Ouch!' revealing their names."
                    .to_string(),
            },
        ))
        .with_choice(Choice::new("Walk the White Path alone", lost()))
        .with_choice(Choice::new("Walk the Yellow Path alone", lost()))
        .with_choice(Choice::new("Walk the Red Path alone", lost()))
}

fn throne_room() -> Scene {
    Scene::new(SceneId::ThroneRoom, "The Throne Room")
        .with_progress(25)
        .with_line("You enter the court knowing the Lords' names.")
        .with_line("They look surprised, but they smile wickedly.")
        .with_line("They point to a large, beautiful stone bench.")
        .with_line("'Welcome, Twins! Please, rest on our throne of honor.'")
        .with_prompt("Where will you sit?")
        .with_choice(Choice::new(
            "Sit on the Throne",
            Effect::fail(
                "You were burned and cannot play.",
                "AAAAH! The stone is boiling hot!",
            ),
        ))
        .with_choice(Choice::new(
            "Sit on the Floor",
            Effect::advance(
                SceneId::HouseOfGloom,
                "You politely decline: 'This seat is too good for us.'\n\
                You sit on the cool floor.\n\
                The Lords scowl. You have passed the first test.",
            ),
        ))
}

fn house_of_gloom() -> Scene {
    Scene::new(SceneId::HouseOfGloom, "The House of Gloom")
        .with_progress(40)
        .with_line("The Lords hand you a lit torch and a cigar.")
        .with_line("'Keep this light burning all night,' they say.")
        .with_line("'But return it tomorrow UNUSED.'")
        .with_line("It is a paradox. How do you keep fire without burning the wood?")
        .with_prompt("Choose your solution.")
        .with_choice(Choice::new(
            "Let the torch burn normally",
            Effect::fail(
                "The Lords execute you for failing the task.",
                "The torch turns to ash by morning.",
            ),
        ))
        .with_choice(Choice::new(
            "Swap the flame for red Macaw feathers",
            Effect::advance(
                SceneId::HouseOfCold,
                "Brilliant!\n\
                From a distance, the red feathers look like fire.\n\
                In the morning, you return the torch unburned.",
            ),
        ))
}

fn house_of_cold() -> Scene {
    Scene::new(SceneId::HouseOfCold, "The House of Cold")
        .with_progress(55)
        .with_line("The Lords are frustrated. They shove you into the next room.")
        .with_line("It is freezing! Thick ice coats the walls and hail falls constantly.")
        .with_line("You cannot sleep or you will freeze.")
        .with_prompt("Choose a survival strategy.")
        .with_choice(Choice::new(
            "Huddle together for warmth",
            Effect::fail(
                "You froze in the House of Cold.",
                "It is not enough. The magical cold freezes you solid.",
            ),
        ))
        .with_choice(Choice::new(
            "Burn old pinecones found on the floor",
            Effect::advance(
                SceneId::HouseOfJaguars,
                "You gather the dry pinecones and light a small fire.\n\
                The warmth keeps you alive through the freezing night.\n\
                In the morning, the Lords are shocked to see you healthy.",
            ),
        ))
}

fn house_of_jaguars() -> Scene {
    Scene::new(SceneId::HouseOfJaguars, "The House of Jaguars")
        .with_progress(70)
        .with_line("The Lords are running out of patience.")
        .with_line("They throw you into a stone room filled with hungry Jaguars!")
        .with_line("The beasts roar and circle you, licking their chops.")
        .with_prompt("Choose an action.")
        .with_choice(Choice::new(
            "Fight them with your knife",
            Effect::fail(
                "The Jaguars enjoyed their meal.",
                "There are too many! You fight bravely, but you are overwhelmed.",
            ),
        ))
        .with_choice(Choice::new(
            "Throw bones to distract them",
            Effect::advance(
                SceneId::Ballgame,
                "You throw the dry bones into the corners of the room.\n\
                The Jaguars chase the bones and gnaw on them happily.\n\
                They wrestle over the bones and ignore you all night.",
            ),
        ))
}

fn scored_ballgame() -> Scene {
    Scene::new(SceneId::Ballgame, "The Tlachtli Court")
        .with_progress(85)
        .with_line("You have survived all the Houses. Now, the sport begins.")
        .with_line("The heavy rubber ball bounces on the stone court.")
        .with_line("The Lords serve the ball to you.")
        .with_prompt("Choose your move.")
        .with_choice(Choice::new(
            "High Lob",
            Effect::strike(0, "Too high! The Lords smash it back easily."),
        ))
        .with_choice(Choice::new(
            "Hip Strike (Solid)",
            Effect::strike(1, "SMACK! A perfect hit off the hip. You score!"),
        ))
        .with_choice(Choice::new(
            "Low Slide",
            Effect::strike(0, "Too low! You scrape your knee on the stone."),
        ))
}

fn sacred_code_ballgame() -> Scene {
    Scene::new(SceneId::Ballgame, "The Tlachtli Court")
        .with_progress(85)
        .with_line("The Lords of Xibalba sneer at you.")
        .with_line("'We will not play with mere words,' they shout.")
        .with_line("'Prove your skill on the VISUAL COURT!'")
        .with_line("Defeat the Lords on the court and win 3 points to earn the Sacred Code.")
        .with_prompt("Enter the sacred code.")
        .with_choice(Choice::new("Verify Sacred Code", Effect::VerifyCode))
}

fn finale() -> Scene {
    Scene::new(SceneId::Finale, "The Grand Trick")
        .with_progress(95)
        .with_line("The Twins realize they cannot win by normal rules.")
        .with_line("You allow yourselves to be burned, but then you return!")
        .with_line("You perform miracles, bringing things back to life.")
        .with_line("The Lords are amazed. 'Burn us!' they command. 'Make us young again!'")
        .with_prompt("Make the final decision.")
        .with_choice(Choice::new(
            "Burn them and REVIVE them",
            Effect::fail(
                "You were too merciful.",
                "You revive the evil Lords. They thank you... by eating you.",
            ),
        ))
        .with_choice(Choice::new(
            "Burn them and DO NOT revive them",
            Effect::advance(
                SceneId::Victory,
                "The Lords turn to ash and blow away in the wind.",
            ),
        ))
}

fn victory() -> Scene {
    Scene::new(SceneId::Victory, "Victory!")
        .with_line("The Lords turn to ash and blow away in the wind.")
        .with_line("Xibalba is defeated.")
        .with_line("Hunahpu and Xbalanque rise into the sky.")
        .with_line("They become the SUN and the MOON.")
        .with_prompt("Congratulations! You have completed the story.")
        .with_choice(Choice::new("Play Again", Effect::Restart))
}

fn game_over() -> Scene {
    Scene::new(SceneId::GameOver, "Game Over")
        .with_line("The Lords of Xibalba laugh as your journey ends.")
        .with_prompt("The underworld waits for your return.")
        .with_choice(Choice::new("Try Again", Effect::Restart))
}
