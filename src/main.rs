//! Othello-Minimax command line.
//!
//! ## Usage
//!
//! - `othello` - Play against the computer (same as `othello play`)
//! - `othello play` - Play against the computer on stdin/stdout
//! - `othello selfplay` - Watch two computer players play each other

use std::io;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use fastrand::Rng;
use tracing::Level;

use othello_minimax::board::Side;
use othello_minimax::constants::{DEFAULT_DEPTH, DEFAULT_HEURISTIC};
use othello_minimax::game::{FirstMover, Session, self_play};
use othello_minimax::heuristics::{HeuristicConfig, HeuristicKind, Weights};
use othello_minimax::search::SearchConfig;

/// `DEFAULT_WEIGHTS` as a `--weights` argument
const DEFAULT_WEIGHTS_ARG: &str = "1,80,30,10,50";

/// Othello-Minimax: an Othello engine with alpha-beta search
#[derive(Parser)]
#[command(name = "othello")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log search diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against the computer
    Play(PlayArgs),
    /// Let the computer play both sides
    Selfplay(SelfplayArgs),
}

#[derive(Args)]
struct PlayArgs {
    /// Heuristic used by the computer
    #[arg(long, default_value = DEFAULT_HEURISTIC)]
    heuristic: String,
    /// Weights: coin,corner,mobility,stability,phase-threshold
    #[arg(long, default_value = DEFAULT_WEIGHTS_ARG)]
    weights: String,
    #[command(flatten)]
    search: SearchArgs,
    /// Which colour you play (X is dark, O is light)
    #[arg(long, value_enum, default_value_t = SideArg::Dark)]
    human: SideArg,
    /// Who moves first
    #[arg(long, value_enum, default_value_t = FirstArg::Computer)]
    first: FirstArg,
}

#[derive(Args)]
struct SelfplayArgs {
    #[arg(long, default_value = DEFAULT_HEURISTIC)]
    dark_heuristic: String,
    #[arg(long, default_value = DEFAULT_WEIGHTS_ARG)]
    dark_weights: String,
    #[arg(long, default_value = "weighted")]
    light_heuristic: String,
    #[arg(long, default_value = DEFAULT_WEIGHTS_ARG)]
    light_weights: String,
    #[command(flatten)]
    search: SearchArgs,
}

#[derive(Args)]
struct SearchArgs {
    /// Search depth in plies
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: u32,
    /// Disable alpha-beta pruning
    #[arg(long)]
    no_prune: bool,
    /// Seed for move-order shuffling (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

impl Default for PlayArgs {
    fn default() -> Self {
        PlayArgs {
            heuristic: DEFAULT_HEURISTIC.to_string(),
            weights: DEFAULT_WEIGHTS_ARG.to_string(),
            search: SearchArgs::default(),
            human: SideArg::Dark,
            first: FirstArg::Computer,
        }
    }
}

impl Default for SearchArgs {
    fn default() -> Self {
        SearchArgs {
            depth: DEFAULT_DEPTH,
            no_prune: false,
            seed: None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum SideArg {
    Dark,
    Light,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum FirstArg {
    Computer,
    Human,
    Random,
}

impl SearchArgs {
    fn config(&self, heuristic: &str, weights: &str) -> Result<SearchConfig> {
        let kind: HeuristicKind = heuristic.parse().context("invalid --heuristic")?;
        let weights = Weights::parse(weights).context("invalid --weights")?;
        let config = SearchConfig::new(HeuristicConfig::new(kind, weights), self.depth, !self.no_prune);
        config.validate().context("invalid search configuration")?;
        Ok(config)
    }

    fn rng(&self) -> Rng {
        match self.seed {
            Some(seed) => Rng::with_seed(seed),
            None => Rng::new(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    match cli.command {
        Some(Commands::Play(args)) => run_play(&args),
        Some(Commands::Selfplay(args)) => run_selfplay(&args),
        None => run_play(&PlayArgs::default()),
    }
}

fn run_play(args: &PlayArgs) -> Result<()> {
    let config = args.search.config(&args.heuristic, &args.weights)?;
    let human = match args.human {
        SideArg::Dark => Side::Dark,
        SideArg::Light => Side::Light,
    };
    let first = match args.first {
        FirstArg::Computer => FirstMover::Computer,
        FirstArg::Human => FirstMover::Human,
        FirstArg::Random => FirstMover::Random,
    };

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), config, human, first, args.search.rng())?;
    session.run().context("game session failed")?;
    Ok(())
}

fn run_selfplay(args: &SelfplayArgs) -> Result<()> {
    let dark = args
        .search
        .config(&args.dark_heuristic, &args.dark_weights)
        .context("dark player")?;
    let light = args
        .search
        .config(&args.light_heuristic, &args.light_weights)
        .context("light player")?;
    let mut rng = args.search.rng();

    let tally = self_play(&mut io::stdout(), &dark, &light, &mut rng)?;
    println!(
        "{}",
        match tally.dark.cmp(&tally.light) {
            std::cmp::Ordering::Greater => "Dark (X) wins.",
            std::cmp::Ordering::Less => "Light (O) wins.",
            std::cmp::Ordering::Equal => "The game was a tie.",
        }
    );
    Ok(())
}
