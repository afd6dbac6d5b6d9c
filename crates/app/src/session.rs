//! The interactive menu and round loop, generic over its input and output so
//! whole sessions can be driven from scripted text.

use crate::command::{
    CountAnswer, MenuCommand, RoundCommand, parse_count, parse_move_target, parse_path,
};
use crate::settings::Settings;
use crate::{rating, seed, text};
use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};
use std::time::Instant;
use wumpus_core::{Action, Game, GameConfig, InputJournal, Room, RoundOutcome};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Menu,
    Exit,
}

pub struct Session<I, O> {
    input: I,
    output: O,
    config: GameConfig,
    seed: u64,
    rounds_started: u64,
    last_round: Option<InputJournal>,
}

impl<I: BufRead, O: Write> Session<I, O> {
    pub fn new(input: I, output: O, settings: Settings) -> Self {
        Self {
            input,
            output,
            config: settings.config,
            seed: settings.seed.value(),
            rounds_started: 0,
            last_round: None,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn rounds_started(&self) -> u64 {
        self.rounds_started
    }

    /// Seed, configuration and actions of the most recently started round.
    pub fn last_round(&self) -> Option<&InputJournal> {
        self.last_round.as_ref()
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Runs until `quit` or the end of input.
    pub fn run(&mut self) -> io::Result<()> {
        self.say(text::WELCOME)?;
        self.say(text::MENU_HINT)?;
        loop {
            self.prompt()?;
            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            let flow = match MenuCommand::parse(&line) {
                Some(MenuCommand::Start) => self.play_round()?,
                Some(MenuCommand::Configure) => self.configure()?,
                Some(MenuCommand::Rules) => self.say(text::RULES).map(|()| Flow::Menu)?,
                Some(MenuCommand::Help) => self.say(text::HELP).map(|()| Flow::Menu)?,
                Some(MenuCommand::Quit) => Flow::Exit,
                None => self.say(text::MENU_HINT).map(|()| Flow::Menu)?,
            };
            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn play_round(&mut self) -> io::Result<Flow> {
        let round_seed = seed::round_seed(self.seed, self.rounds_started);
        self.rounds_started += 1;
        let mut game = Game::new(round_seed, self.config);
        let mut journal = InputJournal::new(round_seed, self.config);
        let started = Instant::now();

        let outcome = loop {
            self.say(&text::status(&game))?;
            let action = self.read_action(&game.adjacent_rooms())?;
            let Some(action) = action else {
                self.last_round = Some(journal);
                return Ok(Flow::Exit);
            };

            journal.append_action(action.clone());
            let seen = game.log().len();
            let report = game.apply(action).map_err(io::Error::other)?;
            for message in game.log()[seen..].iter().filter_map(text::event_message) {
                self.say(message)?;
            }
            if let Some(outcome) = report.outcome {
                break outcome;
            }
        };
        self.last_round = Some(journal);

        match outcome {
            RoundOutcome::Won => {
                let stars = rating::stars(self.config.creature_count(), started.elapsed());
                self.say(&rating::star_line(stars))?;
                Ok(Flow::Menu)
            }
            RoundOutcome::Lost(_) => Ok(Flow::Menu),
            RoundOutcome::Restart => self.say(text::MENU_HINT).map(|()| Flow::Menu),
            RoundOutcome::Quit => Ok(Flow::Exit),
        }
    }

    /// `None` means the input ended.
    fn read_action(&mut self, reachable: &BTreeSet<Room>) -> io::Result<Option<Action>> {
        self.say(text::SHOOT_OR_MOVE)?;
        loop {
            self.prompt()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match RoundCommand::parse(&line) {
                Some(RoundCommand::Shoot) => {
                    let path = self.ask(text::ASK_PATH, text::ASK_PATH, parse_path)?;
                    return Ok(path.map(|path| Action::Shoot { path }));
                }
                Some(RoundCommand::Move) => {
                    let target = self.ask(text::WHERE, text::BAD_ROOM, |line| {
                        parse_move_target(line, reachable)
                    })?;
                    return Ok(target.map(|to| Action::Move { to }));
                }
                Some(RoundCommand::Quit) => return Ok(Some(Action::Quit)),
                Some(RoundCommand::Restart) => return Ok(Some(Action::Restart)),
                Some(RoundCommand::Help) => self.say(text::HELP)?,
                Some(RoundCommand::Rules) => self.say(text::RULES)?,
                Some(RoundCommand::Configure) => self.say(text::CONFIGURE_REFUSED)?,
                None => self.say(text::ROUND_HINT)?,
            }
        }
    }

    /// Asks for creature and bat counts. Answering `quit` leaves the program.
    fn configure(&mut self) -> io::Result<Flow> {
        let Some(CountAnswer::Count(creatures)) =
            self.ask(text::ASK_CREATURES, text::BAD_NUMBER, parse_count)?
        else {
            return Ok(Flow::Exit);
        };
        let Some(CountAnswer::Count(bats)) =
            self.ask(text::ASK_BATS, text::BAD_NUMBER, parse_count)?
        else {
            return Ok(Flow::Exit);
        };

        self.config = GameConfig::new(creatures, bats).with_pit_count(self.config.pit_count());
        self.say(text::NEXT_ACTION)?;
        Ok(Flow::Menu)
    }

    /// Repeats `retry` until `parse` accepts a line; `None` once input ends.
    fn ask<T>(
        &mut self,
        question: &str,
        retry: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> io::Result<Option<T>> {
        self.say(question)?;
        loop {
            self.prompt()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if let Some(value) = parse(&line) {
                return Ok(Some(value));
            }
            self.say(retry)?;
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self) -> io::Result<()> {
        write!(self.output, "{}", text::PROMPT)?;
        self.output.flush()
    }

    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }
}
