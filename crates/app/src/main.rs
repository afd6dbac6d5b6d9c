use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use wumpus_app::seed::{SeedChoice, generate_runtime_seed};
use wumpus_app::{Overrides, Session, Settings, SettingsFile};

#[derive(Parser)]
#[command(author, version, about = "Hunt the Wumpus in the terminal", long_about = None)]
struct Args {
    /// Session seed; every round derives its own seed from it
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of Wumpuses (1-19)
    #[arg(long)]
    creatures: Option<u32>,

    /// Number of bat rooms (2-17)
    #[arg(long)]
    bats: Option<u32>,

    /// Number of pit rooms
    #[arg(long)]
    pits: Option<u32>,

    /// TOML settings file with creatures, bats, pits and seed
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file = match &args.config {
        Some(path) => SettingsFile::load(path)?,
        None => SettingsFile::default(),
    };
    let overrides = Overrides {
        creatures: args.creatures,
        bats: args.bats,
        pits: args.pits,
        seed: args.seed,
    };
    let settings = Settings::resolve(file, overrides, generate_runtime_seed());
    if let SeedChoice::Generated(seed) = settings.seed {
        println!("Session seed: {seed} (pass --seed {seed} to replay it)");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), settings);
    session.run().context("terminal session failed")
}
