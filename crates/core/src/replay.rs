use crate::{
    game::Game,
    journal::{InputJournal, InputPayload},
    types::{GameError, RoundOutcome},
};

#[derive(Debug, PartialEq)]
pub enum ReplayError {
    /// The journal ran out before the round ended.
    MissingInput,
    /// Inputs remain after the round ended.
    TrailingInput { seq: u64 },
    Game(GameError),
}

#[derive(Debug, PartialEq)]
pub struct ReplayResult {
    pub final_outcome: RoundOutcome,
    pub final_snapshot_hash: u64,
    pub final_turn: u64,
}

pub fn replay_to_end(journal: &InputJournal) -> Result<ReplayResult, ReplayError> {
    let game = replay_journal_inputs(journal)?;
    let Some(final_outcome) = game.outcome() else {
        return Err(ReplayError::MissingInput);
    };
    Ok(ReplayResult {
        final_outcome,
        final_snapshot_hash: game.snapshot_hash(),
        final_turn: game.turn(),
    })
}

/// Rebuilds the round and applies every recorded action, stopping with an
/// error if an action arrives after the round is over.
pub fn replay_journal_inputs(journal: &InputJournal) -> Result<Game, ReplayError> {
    let mut game = Game::new(journal.seed, journal.config);
    for record in &journal.inputs {
        if game.is_finished() {
            return Err(ReplayError::TrailingInput { seq: record.seq });
        }
        match &record.payload {
            InputPayload::Action(action) => {
                game.apply(action.clone()).map_err(ReplayError::Game)?;
            }
        }
    }
    Ok(game)
}
