//! Binary entrypoint for the otherworld CLI.
//!
//! Commands:
//! - `play` - run an interactive game on the terminal
//! - `init` - create a starter `config.toml`
//! - `dump-world` - print the canonical world seed as JSON
//!
//! See the library crate docs for module-level details: `otherworld::`.
use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{debug, info};
use tokio::io::AsyncBufReadExt;

use otherworld::config::Config;
use otherworld::game::session::GameSession;
use otherworld::ui::TerminalUi;
use otherworld::world::seed::canonical_world;

#[derive(Parser)]
#[command(name = "otherworld")]
#[command(about = "A text adventure: find your way home from the World of Tomorrow")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive game
    Play,
    /// Initialize a new configuration file
    Init,
    /// Print the canonical world seed as JSON
    DumpWorld,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Missing config is fine for everything except Init (which writes it).
    let config = match cli.command {
        Commands::Init => None,
        _ => match Config::load(&cli.config).await {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("Warning: {e:#}; continuing with defaults.");
                None
            }
        },
    };
    let config = config.unwrap_or_default();
    init_logging(&config, cli.verbose);

    match cli.command {
        Commands::Play => {
            info!("Starting otherworld v{}", env!("CARGO_PKG_VERSION"));
            run_game(config).await?;
        }
        Commands::Init => {
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
        }
        Commands::DumpWorld => {
            let world = canonical_world();
            println!("{}", serde_json::to_string_pretty(&world)?);
        }
    }

    Ok(())
}

/// Reads one line per turn from stdin and feeds it to the session.
///
/// Teardown after quit/win is fire-and-forget: the timer always fires
/// once scheduled, and the loop keeps draining (ignored) input until it
/// does.
async fn run_game(config: Config) -> Result<()> {
    let mut session = GameSession::new(config.ui.fullscreen);
    let mut ui = TerminalUi::new(config.ui.fullscreen);
    ui.render(&session.welcome());

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    while let Some(input) = lines.next_line().await? {
        let updates = session.process_line(&input);
        if let Some(delay_secs) = ui.render(&updates) {
            schedule_shutdown(delay_secs);
        }
    }
    Ok(())
}

/// Schedules process termination without blocking the input loop. There
/// is no cancellation: once scheduled, the exit always happens.
fn schedule_shutdown(delay_secs: u64) {
    debug!("shutdown scheduled in {delay_secs}s");
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(delay_secs)).await;
        std::process::exit(0);
    });
}

fn init_logging(config: &Config, verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level.
    let level = match verbosity {
        0 => config
            .logging
            .level
            .parse()
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(level);

    if let Some(ref file) = config.logging.file {
        match std::fs::OpenOptions::new().create(true).append(true).open(file) {
            Ok(f) => {
                let sink = std::sync::Mutex::new(f);
                // Stdout carries the game transcript; when a log file is
                // configured, records go there and only there unless we
                // are attached to a terminal for debugging.
                let is_tty = atty::is(atty::Stream::Stderr);
                builder.format(move |fmt, record| {
                    let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                    let line = format!("{} [{}] {}", ts, record.level(), record.args());
                    if let Ok(mut guard) = sink.lock() {
                        let _ = writeln!(guard, "{line}");
                    }
                    if is_tty {
                        writeln!(fmt, "{line}")
                    } else {
                        Ok(())
                    }
                });
            }
            Err(e) => {
                eprintln!("Warning: could not open log file {file}: {e}");
                default_format(&mut builder);
            }
        }
    } else {
        default_format(&mut builder);
    }
    let _ = builder.try_init();
}

fn default_format(builder: &mut env_logger::Builder) {
    builder.format(|fmt, record| {
        writeln!(
            fmt,
            "{} [{}] {}",
            chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
            record.level(),
            record.args()
        )
    });
}
