// Draft assistant entry point.
//
// Startup sequence:
// 1. Initialize tracing (stderr; stdout carries the results)
// 2. Parse CLI arguments
// 3. Load config
// 4. Load the draft board, if one was given
// 5. Load projections
// 6. Run the requested subcommand

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use gridiron_draft_assistant::config;
use gridiron_draft_assistant::draft::board::DraftBoard;
use gridiron_draft_assistant::draft::position::Position;
use gridiron_draft_assistant::recommend::{recommend, RecommendationRequest, VorArgmaxPredictor};
use gridiron_draft_assistant::repository::PlayerRepository;
use gridiron_draft_assistant::valuation::scoring::ScoringMode;
use gridiron_draft_assistant::valuation::vor::rank_players;

#[derive(Parser)]
#[command(name = "gridiron", about = "Fantasy football draft assistant")]
struct Cli {
    /// Path to league.toml.
    #[arg(long, default_value = "config/league.toml")]
    config: PathBuf,

    /// Draft board JSON with the current slot assignments.
    #[arg(long)]
    board: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Recommend the next position and player for a team.
    Recommend {
        /// 1-based team number.
        #[arg(long)]
        team: usize,
        #[arg(long)]
        round: usize,
        #[arg(long)]
        pick: usize,
        #[arg(long, value_enum, default_value_t = ScoringArg::Standard)]
        scoring: ScoringArg,
    },
    /// Rank available players by value over replacement.
    Rankings {
        /// Restrict to one position (QB, RB, WR, TE, K, DST, or FLEX).
        #[arg(long)]
        position: Option<String>,
        #[arg(long, default_value_t = 50)]
        limit: usize,
        #[arg(long, value_enum, default_value_t = ScoringArg::Standard)]
        scoring: ScoringArg,
    },
    /// Show the completed picks derived from the draft board.
    Board,
}

#[derive(Clone, Copy, ValueEnum)]
enum ScoringArg {
    Standard,
    HalfPpr,
    Ppr,
}

impl From<ScoringArg> for ScoringMode {
    fn from(arg: ScoringArg) -> Self {
        match arg {
            ScoringArg::Standard => ScoringMode::Standard,
            ScoringArg::HalfPpr => ScoringMode::HalfPpr,
            ScoringArg::Ppr => ScoringMode::Ppr,
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let config = config::load_config(&cli.config).context("failed to load configuration")?;
    info!(
        "Config loaded: {} teams, {} roster slots, {} rounds",
        config.league.num_teams,
        config.league.roster.total(),
        config.league.total_rounds()
    );

    let board = match &cli.board {
        Some(path) => DraftBoard::load(path).context("failed to load draft board")?,
        None => DraftBoard::new(),
    };

    let mut repository = PlayerRepository::new(&config.data.projections_dir);
    repository.load_all();

    match cli.command {
        Command::Recommend {
            team,
            round,
            pick,
            scoring,
        } => {
            let request = RecommendationRequest {
                team,
                round,
                pick_number: pick,
                scoring: scoring.into(),
            };
            let rec = recommend(
                &request,
                &board,
                &config.league,
                &mut repository,
                &VorArgmaxPredictor,
            );
            println!(
                "Recommended position: {} ({})",
                rec.position,
                rec.rationale.display_str()
            );
            match &rec.player {
                Some(player) => {
                    println!(
                        "Best available player: {} ({:.1} projected points)",
                        player.name, player.projected_points
                    );
                }
                None => println!("No available players found at this position."),
            }
        }
        Command::Rankings {
            position,
            limit,
            scoring,
        } => {
            let mode: ScoringMode = scoring.into();
            let drafted = board.drafted_names();
            let avail = repository.available_players(mode, &drafted);
            let mut ranked = rank_players(&avail, &config.league, mode);

            if let Some(pos_str) = position {
                let pos = Position::from_str_pos(&pos_str)
                    .with_context(|| format!("unknown position: {pos_str}"))?;
                if pos == Position::Flex {
                    ranked.retain(|p| p.position.is_flex_eligible());
                } else {
                    ranked.retain(|p| p.position == pos);
                }
            }
            ranked.truncate(limit);

            println!(
                "{:<4} {:<24} {:<5} {:<5} {:>4} {:>10} {:>8}",
                "#", "Player", "Pos", "Team", "Bye", "Projected", "VOR"
            );
            for (i, p) in ranked.iter().enumerate() {
                println!(
                    "{:<4} {:<24} {:<5} {:<5} {:>4} {:>10.1} {:>8.1}",
                    i + 1,
                    p.name,
                    p.position.display_str(),
                    p.team.as_deref().unwrap_or("-"),
                    p.bye.map(|b| b.to_string()).unwrap_or_else(|| "-".into()),
                    p.projected,
                    p.vor
                );
            }
        }
        Command::Board => {
            let picks = board.picks(config.league.num_teams);
            if picks.is_empty() {
                println!("No picks recorded yet.");
            } else {
                println!(
                    "{:<6} {:<5} {:<5} {:<24} {:<5}",
                    "Round", "Pick", "Team", "Player", "Pos"
                );
                for entry in picks {
                    println!(
                        "{:<6} {:<5} {:<5} {:<24} {:<5}",
                        entry.round,
                        entry.pick,
                        entry.team,
                        entry.player,
                        entry.position.display_str()
                    );
                }
            }
        }
    }

    Ok(())
}

/// Initialize tracing to stderr so stdout stays clean for command output.
fn init_tracing() {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("gridiron_draft_assistant=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
