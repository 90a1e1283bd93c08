//! Verbs that only print text or end the game.

use log::info;

use crate::command;
use crate::engine::output::Output;
use crate::world;

const COURT_ROOM: &str = "Court";

pub fn handle_help(out: &mut Output, room: &world::Room) {
    out.say("You are in the nba. Try to make it to the Hall Of Fame");
    out.say(format!("You are in: {}", room.name));
    out.say("You need all the boosts and accolades required to win");
    out.say("Your command words are:");
    out.say(command::show_commands());
}

pub fn handle_eat(out: &mut Output, food: &str) {
    match food {
        "steak" => out.say("YUMMY"),
        "bread" => out.say("I don't eat carbs..."),
        other => out.say(format!("You are the {}", other)),
    }
}

pub fn handle_sit(out: &mut Output) {
    out.say("You are now sitting. You lazy excuse for a person.");
}

/// Jumping is always fatal.
pub fn handle_jump(out: &mut Output) {
    info!("player jumped");
    out.event(
        "You jumped. Ouch you fell. You fell hard. Really hard. \
         You are getting sleepy. Very sleepy! You are dead!",
    );
}

/// Returns true when the winning shot is made.
pub fn handle_shoot(out: &mut Output, room: &world::Room, target: &str) -> bool {
    if room.name != COURT_ROOM {
        out.say("You can't shoot/practice in this room");
        return false;
    }

    if target == "basketball" {
        info!("winning shot in {}", room.name);
        out.event("Nothing but net.");
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Room;
    use test_log::test;

    #[test]
    fn eat_has_three_flavours() {
        for (food, expected) in [
            ("steak", "YUMMY"),
            ("bread", "I don't eat carbs..."),
            ("ball", "You are the ball"),
        ] {
            let mut out = Output::new();
            handle_eat(&mut out, food);
            assert_eq!(out.text(), expected);
        }
    }

    #[test]
    fn shoot_only_counts_on_the_court() {
        let court = Room::new("Court", "Hardwood.");
        let gym = Room::new("Gym", "Weights.");

        let mut out = Output::new();
        assert!(!handle_shoot(&mut out, &gym, "basketball"));
        assert_eq!(out.text(), "You can't shoot/practice in this room");

        let mut out = Output::new();
        assert!(!handle_shoot(&mut out, &court, "hoop"));
        assert!(out.is_empty());

        assert!(handle_shoot(&mut Output::new(), &court, "basketball"));
    }

    #[test]
    fn help_lists_room_and_commands() {
        let mut out = Output::new();
        handle_help(&mut out, &Room::new("Court", ""));
        assert!(out.contains("You are in: Court"));
        assert!(out.contains("shoot"));
    }
}
