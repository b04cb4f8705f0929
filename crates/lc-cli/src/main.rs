use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use lc_cli::config::{AppConfig, LoggingConfig};
use lc_cli::{bootstrap, commands};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lc", about = "Sentiment annotation dataset curation pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to the configuration file.
    #[arg(short, long, default_value = "params.toml", global = true)]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Command {
    /// Generate synthetic samples and write annotation-tool tasks.
    Prepare,
    /// Convert the annotation-tool export into the canonical record set.
    Export,
    /// Score the labeled dataset and persist quality metrics.
    Validate,
    /// Validate the configuration file and exit.
    Check,
}

fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::from_file(&cli.config) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error reading config {}: {err}", cli.config.display());
            process::exit(1);
        }
    };

    let runtime = match bootstrap::into_runtime(config) {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("Config invalid: {err}");
            process::exit(1);
        }
    };

    init_tracing(&runtime.logging);

    let result = match cli.command {
        Command::Prepare => commands::prepare(&runtime),
        Command::Export => commands::export(&runtime),
        Command::Validate => commands::validate(&runtime),
        Command::Check => {
            println!("Config valid: {}", cli.config.display());
            Ok(())
        }
    };

    if let Err(err) = result {
        tracing::error!(error = %err, "command failed");
        process::exit(1);
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
