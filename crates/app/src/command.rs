//! Parsing of the words typed at the menu and round prompts.

use std::collections::BTreeSet;
use wumpus_core::Room;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuCommand {
    Start,
    Configure,
    Rules,
    Help,
    Quit,
}

impl MenuCommand {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "start" => Some(Self::Start),
            "configure" => Some(Self::Configure),
            "rules" => Some(Self::Rules),
            "help" => Some(Self::Help),
            "quit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Words accepted at the "Shoot or move?" prompt. `Configure` is recognized
/// only so the session can refuse it with a specific message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundCommand {
    Shoot,
    Move,
    Quit,
    Restart,
    Help,
    Rules,
    Configure,
}

impl RoundCommand {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "shoot" => Some(Self::Shoot),
            "move" => Some(Self::Move),
            "quit" => Some(Self::Quit),
            "restart" => Some(Self::Restart),
            "help" => Some(Self::Help),
            "rules" => Some(Self::Rules),
            "configure" => Some(Self::Configure),
            _ => None,
        }
    }
}

/// Answer to one of the configure prompts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountAnswer {
    Count(u32),
    Quit,
}

pub fn parse_count(line: &str) -> Option<CountAnswer> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("quit") {
        return Some(CountAnswer::Quit);
    }
    parse_number(line).map(CountAnswer::Count)
}

/// A move target must be a number naming one of the rooms in `reachable`.
pub fn parse_move_target(line: &str, reachable: &BTreeSet<Room>) -> Option<Room> {
    let room = Room::new(parse_number(line.trim())?)?;
    reachable.contains(&room).then_some(room)
}

/// An arrow path is one or more whitespace-separated numbers. Numbers that do
/// not name a connected room are kept; the arrow goes wild when it reaches them.
pub fn parse_path(line: &str) -> Option<Vec<u32>> {
    let path = line.split_whitespace().map(parse_number).collect::<Option<Vec<u32>>>()?;
    (!path.is_empty()).then_some(path)
}

/// Digits only. Values too large for `u32` saturate, which still names no room.
fn parse_number(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    Some(token.parse().unwrap_or(u32::MAX))
}
