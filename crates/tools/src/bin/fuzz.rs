use anyhow::{Context, Result};
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use std::fs;
use std::path::PathBuf;
use wumpus_core::game::ARROW_RANGE;
use wumpus_core::{Action, Game, GameConfig, InputJournal, ROOM_COUNT, Room, RoundOutcome};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    rounds: u32,
    /// Write the journal of the last round played here
    #[arg(long)]
    journal_out: Option<PathBuf>,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn random_action(rng: &mut ChaCha8Rng, game: &Game) -> Action {
    let neighbors: Vec<Room> = game.adjacent_rooms().into_iter().collect();
    if rng.next_u64() % 2 == 0 {
        return Action::Move { to: choose(rng, &neighbors) };
    }
    // Paths run past the arrow's range and may name unconnected or missing rooms.
    let len = 1 + rng.next_u64() as usize % (ARROW_RANGE + 2);
    let path =
        (0..len).map(|_| 1 + (rng.next_u64() % u64::from(ROOM_COUNT + 1)) as u32).collect();
    Action::Shoot { path }
}

fn play_round(
    rng: &mut ChaCha8Rng,
    round_seed: u64,
    config: GameConfig,
) -> (RoundOutcome, InputJournal) {
    let mut game = Game::new(round_seed, config);
    let mut journal = InputJournal::new(round_seed, config);
    let pit_count = game.state().hazards.pits().len();
    let bat_count = game.state().hazards.bats().len();

    for room in Room::all() {
        assert_eq!(game.state().cave.adjacent(room).len(), 3, "Invariant failed: room degree");
    }

    loop {
        let action = random_action(rng, &game);
        let is_shot = matches!(action, Action::Shoot { .. });
        let arrows_before = game.arrows();
        let creatures_before = game.state().hazards.creatures().len();
        let turn_before = game.turn();

        journal.append_action(action.clone());
        let report = game.apply(action).expect("fuzz applied an action to a finished round");

        let hazards = &game.state().hazards;
        let expected_arrows = if is_shot { arrows_before - 1 } else { arrows_before };
        assert_eq!(game.arrows(), expected_arrows, "Invariant failed: one arrow per shot");
        assert_eq!(game.turn(), turn_before + 1, "Invariant failed: one turn per action");
        assert!(hazards.creatures().len() <= creatures_before, "Invariant failed: creatures grew");
        assert_eq!(hazards.pits().len(), pit_count, "Invariant failed: pits changed");
        assert_eq!(hazards.bats().len(), bat_count, "Invariant failed: bats changed");
        assert!(hazards.bats().is_disjoint(hazards.pits()), "Invariant failed: bat over pit");

        if let Some(outcome) = report.outcome {
            return (outcome, journal);
        }
        let room = game.current_room();
        assert!(
            !hazards.has_creature(room) && !hazards.has_pit(room) && !hazards.has_bat(room),
            "Invariant failed: player left standing on a hazard"
        );
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Starting fuzz harness on seed {} for {} rounds...", args.seed, args.rounds);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut wins = 0_u32;
    let mut last_journal = None;

    for _ in 0..args.rounds {
        let creatures = 1 + (rng.next_u64() % 19) as u32;
        let bats = 2 + (rng.next_u64() % 16) as u32;
        let config = GameConfig::new(creatures, bats);
        let round_seed = rng.next_u64();

        let (outcome, journal) = play_round(&mut rng, round_seed, config);
        if outcome == RoundOutcome::Won {
            wins += 1;
        }
        last_journal = Some(journal);
    }

    if let (Some(path), Some(journal)) = (&args.journal_out, &last_journal) {
        let json = journal.to_json().context("Failed to serialize journal")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write journal file: {}", path.display()))?;
        println!("Last round journal written to {}", path.display());
    }

    println!("Fuzzing completed successfully: {wins} of {} rounds won.", args.rounds);
    Ok(())
}
