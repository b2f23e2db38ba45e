// Rust guideline compliant 2026-02-06

//! Ayuda CLI Application
//!
//! Command-line front end for the aid-disbursement verification portal.

use ayuda_app::Portal;
use ayuda_cli::commands::session;
use ayuda_cli::interrupt::{cancel_on_interrupt, listen_for_interrupts};
use ayuda_cli::logging::init_tracing;
use ayuda_cli::terminal::stdin_is_tty;
use ayuda_cli::{create_formatter, execute, should_use_color, Command};
use ayuda_core::{Config, OutputFormat as ConfigFormat};
use clap::Parser;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;

#[derive(Parser, Debug)]
#[command(
    name = "ayuda",
    version,
    about = "Ayuda: aid-disbursement verification portal",
    long_about = "Ayuda runs the claiming counter of an aid-disbursement office: the beneficiary queue, supervisor review of flagged cases, the transaction log, and QR verification scans. One-shot commands act on freshly seeded data; use `ayuda session` to keep state between commands.",
    after_help = "Examples:\n  ayuda queue list\n  ayuda queue serve 3\n  ayuda cases decide FLAG-001 approve --notes \"verified by phone\"\n  ayuda transactions --query maria --status approved\n  ayuda scan --decision reject --notes \"ID mismatch\"\n  ayuda session\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Custom config file path (default: .ayuda/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug); overrides the config file
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Write logs as JSON lines to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    #[command(flatten)]
    Portal(Command),

    /// Start an interactive session that keeps state between commands
    Session,
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::load_file(path)?,
        None => Config::load(Path::new(".ayuda"))?,
    };
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let log_level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.log_level.clone());
    let guard = init_tracing(&log_level, cli.log_file.as_deref())?;

    let use_color = !cli.no_color && should_use_color();
    let format = match cli.format {
        Some(OutputFormat::Json) => "json",
        Some(OutputFormat::Table) => "table",
        Some(OutputFormat::Plain) => "plain",
        None if cli.json => "json",
        None => match config.output_format {
            ConfigFormat::Json => "json",
            ConfigFormat::Table => "table",
            ConfigFormat::Plain => "plain",
        },
    };
    let formatter = create_formatter(format, use_color);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let mut portal = Portal::seeded(config)?;

    match cli.command {
        Some(Commands::Session) => {
            runtime.block_on(session::run(
                &mut portal,
                formatter.as_ref(),
                BufReader::new(std::io::stdin()),
                stdin_is_tty(),
            ))?;
        }
        Some(Commands::Portal(command)) => {
            let result = runtime.block_on(async {
                let mut interrupts = listen_for_interrupts()?;
                let token = CancellationToken::new();
                anyhow::Ok(
                    cancel_on_interrupt(
                        execute(&mut portal, command, formatter.as_ref(), &token),
                        &token,
                        &mut interrupts,
                    )
                    .await,
                )
            })?;

            match result {
                Ok(output) => println!("{}", output.trim_end()),
                Err(err) => {
                    let rendered = formatter.format_error(&err);
                    if format == "json" {
                        println!("{}", rendered);
                    } else {
                        eprintln!("{}", rendered);
                    }
                    drop(guard);
                    std::process::exit(1);
                }
            }
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
