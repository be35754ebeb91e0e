//! Gridiron Sim - Main Binary
//!
//! Drive-based football simulation from the terminal

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use gridiron_sim::{
    bank::{generate_bank, load_bank, save_bank, PlayBank},
    config::SimConfig,
    core::{Matchup, Team},
    game::{
        CoachController, GameEndReason, GameEngine, GameLoop, GameSnapshot,
        InteractiveController, RandomController, ScriptedController, VerbosityLevel,
        ZeroController,
    },
    season::{run_slate, CoachType},
    stats::BoxScore,
};
use std::path::PathBuf;

/// Outcomes per play bucket when a bank is generated on the fly
const DEFAULT_BUCKET_SIZE: usize = 24;

/// Coach for the controlled team
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CoachArg {
    /// Always calls the first offered option
    Zero,
    /// Makes random calls
    Random,
    /// Text UI coach for human play via stdin
    Tui,
    /// Fixed script of calls (requires --script), then auto
    Scripted,
}

/// Verbosity level for game output (custom parser supporting both names and numbers)
#[derive(Debug, Clone, Copy)]
struct VerbosityArg(VerbosityLevel);

impl std::str::FromStr for VerbosityArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityArg(VerbosityLevel::Silent)),
            "minimal" | "1" => Ok(VerbosityArg(VerbosityLevel::Minimal)),
            "normal" | "2" => Ok(VerbosityArg(VerbosityLevel::Normal)),
            "verbose" | "3" => Ok(VerbosityArg(VerbosityLevel::Verbose)),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

#[derive(Parser)]
#[command(name = "gridiron")]
#[command(about = "Gridiron Sim - drive-based football simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game
    Play {
        /// Play bank JSON file (default: generate one from --seed)
        #[arg(long, value_name = "BANK_FILE")]
        bank: Option<PathBuf>,

        /// Seed for the generated bank and the random coach
        #[arg(long)]
        seed: Option<u64>,

        /// Coach for the controlled team
        #[arg(long, value_enum, default_value = "tui")]
        coach: CoachArg,

        /// Calls for the scripted coach (space or comma separated, e.g. "run pass go_run")
        #[arg(long, value_name = "CALLS")]
        script: Option<String>,

        /// Controlled team name
        #[arg(long, default_value = "Home")]
        home: String,

        /// Opponent name
        #[arg(long, default_value = "Away")]
        away: String,

        /// Verbosity level for game output (0=silent, 1=minimal, 2=normal, 3=verbose)
        #[arg(long, short = 'v')]
        verbosity: Option<VerbosityArg>,

        /// Simulation config JSON (policy and verbosity)
        #[arg(long, value_name = "CONFIG_FILE")]
        config: Option<PathBuf>,

        /// Write the completion payload JSON here when the game ends
        #[arg(long, value_name = "OUT_FILE")]
        out: Option<PathBuf>,

        /// Print a box score after the game
        #[arg(long)]
        box_score: bool,

        /// Use numeric-only choices in the text UI
        #[arg(long)]
        numeric_choices: bool,

        /// Stop after N plays and save a snapshot
        #[arg(long, value_name = "PLAYS")]
        stop_after: Option<usize>,

        /// Output file for the game snapshot
        #[arg(long, default_value = "game.snapshot.json")]
        snapshot_output: PathBuf,

        /// Resume a game from a snapshot file
        #[arg(long, value_name = "SNAPSHOT_FILE", conflicts_with = "bank")]
        start_from: Option<PathBuf>,
    },

    /// Generate a synthetic play bank
    GenBank {
        /// Output file
        #[arg(long, value_name = "OUT_FILE")]
        out: PathBuf,

        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Outcomes per team and play type
        #[arg(long, default_value_t = DEFAULT_BUCKET_SIZE)]
        per_bucket: usize,

        /// Id of the controlled team
        #[arg(long, default_value_t = 1)]
        home_id: u32,

        /// Id of the opponent
        #[arg(long, default_value_t = 2)]
        away_id: u32,
    },

    /// Simulate a slate of independent games in parallel
    Season {
        /// Number of games
        #[arg(long, short = 'g', default_value_t = 100)]
        games: usize,

        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Coach for the controlled team (zero or random)
        #[arg(long, value_enum, default_value = "random")]
        coach: CoachArg,

        /// Simulation config JSON
        #[arg(long, value_name = "CONFIG_FILE")]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            bank,
            seed,
            coach,
            script,
            home,
            away,
            verbosity,
            config,
            out,
            box_score,
            numeric_choices,
            stop_after,
            snapshot_output,
            start_from,
        } => {
            let options = PlayOptions {
                bank,
                seed: seed.unwrap_or_else(rand::random),
                coach,
                script,
                home,
                away,
                verbosity: verbosity.map(|v| v.0),
                config,
                out,
                box_score,
                numeric_choices,
                stop_after,
                snapshot_output,
                start_from,
            };
            run_play(options).await?
        }
        Commands::GenBank {
            out,
            seed,
            per_bucket,
            home_id,
            away_id,
        } => {
            let matchup = Matchup::new(Team::new(home_id, "Home"), Team::new(away_id, "Away"));
            let bank = generate_bank(&matchup, seed, per_bucket);
            save_bank(&bank, &out)
                .await
                .with_context(|| format!("writing bank to {}", out.display()))?;
            println!("Wrote play bank to {} ({per_bucket} outcomes per bucket)", out.display());
        }
        Commands::Season {
            games,
            seed,
            coach,
            config,
        } => {
            let config = load_config(config.as_ref())?;
            let coach = match coach {
                CoachArg::Zero => CoachType::Zero,
                CoachArg::Random => CoachType::Random,
                other => anyhow::bail!("coach {other:?} cannot run unattended in a season"),
            };
            let matchup = Matchup::new(Team::new(1, "Home"), Team::new(2, "Away"));
            println!("=== Gridiron Sim - Season ({games} games, seed {seed}) ===\n");
            let start = std::time::Instant::now();
            let summary = run_slate(&matchup, &config, games, seed, coach)?;
            println!("{summary}");
            println!("\nElapsed: {:.2}s", start.elapsed().as_secs_f64());
        }
    }

    Ok(())
}

struct PlayOptions {
    bank: Option<PathBuf>,
    seed: u64,
    coach: CoachArg,
    script: Option<String>,
    home: String,
    away: String,
    verbosity: Option<VerbosityLevel>,
    config: Option<PathBuf>,
    out: Option<PathBuf>,
    box_score: bool,
    numeric_choices: bool,
    stop_after: Option<usize>,
    snapshot_output: PathBuf,
    start_from: Option<PathBuf>,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<SimConfig> {
    match path {
        Some(path) => SimConfig::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(SimConfig::default()),
    }
}

/// Build the matchup from the bank's team ids, falling back to 1 and 2
fn matchup_for(bank: Option<&PlayBank>, home: &str, away: &str) -> Matchup {
    let id = |idx: usize, default: u32| {
        bank.and_then(|b| b.teams.get(idx))
            .map(|t| t.team.as_u32())
            .unwrap_or(default)
    };
    Matchup::new(Team::new(id(0, 1), home), Team::new(id(1, 2), away))
}

async fn run_play(options: PlayOptions) -> anyhow::Result<()> {
    let config = load_config(options.config.as_ref())?;
    let verbosity = options.verbosity.unwrap_or(config.verbosity);

    let mut engine = match &options.start_from {
        Some(path) => {
            let snapshot = GameSnapshot::load_from_file(path)
                .with_context(|| format!("loading snapshot {}", path.display()))?;
            println!(
                "Resuming from {} ({} plays already played)",
                path.display(),
                snapshot.plays_played()
            );
            snapshot.into_engine()?
        }
        None => {
            let bank = match &options.bank {
                Some(path) => load_bank(path)
                    .await
                    .with_context(|| format!("loading bank {}", path.display()))?,
                None => {
                    let matchup = matchup_for(None, &options.home, &options.away);
                    generate_bank(&matchup, options.seed, DEFAULT_BUCKET_SIZE)
                }
            };
            let matchup = matchup_for(Some(&bank), &options.home, &options.away);
            GameEngine::start(bank, matchup, config.policy)?
        }
    };
    log::info!("playing with seed {}", options.seed);

    let mut controller: Box<dyn CoachController> = match options.coach {
        CoachArg::Zero => Box::new(ZeroController::new()),
        CoachArg::Random => Box::new(RandomController::with_seed(options.seed)),
        CoachArg::Tui => Box::new(InteractiveController::with_numeric_choices(
            options.numeric_choices,
        )),
        CoachArg::Scripted => {
            let script = options
                .script
                .as_deref()
                .context("--coach scripted requires --script")?;
            Box::new(ScriptedController::parse(script).map_err(anyhow::Error::msg)?)
        }
    };

    let result = {
        let mut game_loop = GameLoop::new(&mut engine).with_verbosity(verbosity);
        match options.stop_after {
            Some(plays) => game_loop.run_plays(&mut *controller, plays)?,
            None => game_loop.run_game(&mut *controller)?,
        }
    };

    if result.end_reason == GameEndReason::Manual {
        GameSnapshot::capture(&engine).save_to_file(&options.snapshot_output)?;
        println!(
            "Stopped after {} plays; snapshot saved to {}",
            result.plays_played,
            options.snapshot_output.display()
        );
        return Ok(());
    }
    if result.end_reason == GameEndReason::PlayLimit {
        anyhow::bail!("game did not finish within the play limit");
    }

    if options.box_score {
        let state = engine.state();
        println!("\n{}", BoxScore::from_plays(state.matchup(), state.used_plays(), state.drives()));
    }

    if let Some(out) = &options.out {
        let payload = engine.complete()?;
        let json = serde_json::to_string_pretty(&payload)?;
        tokio::fs::write(out, json)
            .await
            .with_context(|| format!("writing result to {}", out.display()))?;
        println!("Result written to {}", out.display());
    }

    let signal = engine.exit();
    log::debug!("game released after {} plays", signal.plays_played);
    Ok(())
}
