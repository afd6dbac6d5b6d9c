//! Text for prompts, the status block, and round event messages.

use std::fmt::Write as _;
use wumpus_core::{DeathCause, Flight, Game, LogEvent, RoomRng, RoundOutcome};

pub const PROMPT: &str = ">>> ";

pub const WELCOME: &str = "Welcome to the game Hunt the Wumpus!";
pub const MENU_HINT: &str =
    "To see rules enter \"rules\". To find out the list of actions enter \"help\".";
pub const NEXT_ACTION: &str = "Enter next action.";

pub const SHOOT_OR_MOVE: &str = "Shoot or move?";
pub const ROUND_HINT: &str =
    "Enter correct action. To find out the list of actions enter \"help\".";
pub const CONFIGURE_REFUSED: &str = "You can't configure the game while you are playing.";
pub const WHERE: &str = "Where?";
pub const BAD_ROOM: &str = "Enter the correct room number.";
pub const ASK_PATH: &str = "Enter a sequence of rooms separated by a space.";

pub const ASK_CREATURES: &str = "Enter the number of Wumpuses.";
pub const ASK_BATS: &str = "Enter the number of bats.";
pub const BAD_NUMBER: &str = "Enter the correct number.";

pub const HELP: &str = "\
Menu actions:
  start      begin a new round
  configure  set the number of Wumpuses and bats
  rules      show the rules
  help       show this list
  quit       leave the game
Round actions:
  move       walk through a tunnel to an adjacent room
  shoot      fire an arrow along a sequence of rooms
  restart    abandon the round and return to the menu
  rules, help, quit";

pub const RULES: &str = "\
The cave has 20 rooms, each joined to three others by tunnels.
Somewhere in the dark live the Wumpuses. Walk into one and it eats you.
Two rooms hold bottomless pits. Bats in some rooms carry you off to a
random room of the cave.
You can smell a Wumpus, hear bats and feel the wind of a pit from any
adjacent room.
An arrow flies through up to five rooms you name. If a room you name is
not connected to the arrow's current room, the arrow flies off to a
random room instead. Every shot wakes the surviving Wumpuses, and each
one moves to a neighboring room or stays where it is.
Kill every Wumpus before your arrows run out.";

/// Status block shown before each "Shoot or move?" prompt.
pub fn status<R: RoomRng>(game: &Game<R>) -> String {
    let mut text = format!("You are in {} room.\nTunnels lead to", game.current_room());
    for room in game.adjacent_rooms() {
        let _ = write!(text, " {room}");
    }
    let _ = write!(text, ".\nYou have {} arrows.", game.arrows());

    let senses = game.senses();
    if senses.stench {
        text.push_str("\nYou can feel the stench.");
    }
    if senses.noise {
        text.push_str("\nYou can hear some noise.");
    }
    if senses.wind {
        text.push_str("\nYou can feel the wind.");
    }
    text
}

/// Message for a logged event, if the player should see one.
pub fn event_message(event: &LogEvent) -> Option<&'static str> {
    match event {
        LogEvent::ArrowLanded { flight: Flight::Wild, .. } => Some("You missed."),
        LogEvent::CreatureSlain { .. } => Some("You killed one Wumpus!"),
        LogEvent::BatCarried { .. } => Some("Bats carry you."),
        LogEvent::RoundEnded { outcome } => outcome_message(*outcome),
        _ => None,
    }
}

pub fn outcome_message(outcome: RoundOutcome) -> Option<&'static str> {
    match outcome {
        RoundOutcome::Won => Some("You killed all Wumpuses. Congratulations!"),
        RoundOutcome::Lost(DeathCause::OwnArrow) => Some("You are killed by arrow."),
        RoundOutcome::Lost(DeathCause::Creature) => Some("You are killed by the Wumpus."),
        RoundOutcome::Lost(DeathCause::Pit) => Some("You fell in hole."),
        RoundOutcome::Lost(DeathCause::OutOfArrows) => Some("Arrows run out."),
        RoundOutcome::Quit | RoundOutcome::Restart => None,
    }
}
