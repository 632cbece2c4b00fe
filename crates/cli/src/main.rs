//! Primer CLI - run object-model lessons from the command line
//!
//! Usage:
//! ```bash
//! primer list
//! primer run encapsulation
//! primer run all --format json
//! primer --config lessons.toml run polymorphism
//! primer singleton-check --threads 8
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use primer_core::{ConfigLoader, LessonConfig};
use std::path::PathBuf;
use tracing::Level;

mod commands;

use commands::{lesson, singleton};

/// Primer - object-oriented concepts and the Singleton pattern, in Rust
#[derive(Parser)]
#[command(name = "primer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// TOML file overriding the lesson values
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit debug logs (ignored deposits/withdrawals, singleton init) to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List available lessons
    List,

    /// Run one lesson, or `all`
    Run {
        /// Lesson name (encapsulation, inheritance, polymorphism, abstraction, singleton, all)
        lesson: String,
        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// Fetch the singleton from several threads and compare identities
    SingletonCheck {
        /// Number of threads
        #[arg(long, default_value_t = 4)]
        threads: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<LessonConfig> {
    match path {
        Some(path) => ConfigLoader::load_file(path)
            .with_context(|| format!("Failed to load config from {:?}", path)),
        None => Ok(LessonConfig::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    dispatch(cli)
}

/// Only `run` reads the lesson config; other commands ignore `--config`.
fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::List => {
            lesson::list();
        }

        Commands::Run { lesson, format } => {
            let config = load_config(cli.config.as_ref())?;
            lesson::run(&lesson, &config, format)?;
        }

        Commands::SingletonCheck { threads } => {
            singleton::check(threads)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_broken_config_only_affects_run() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "dog_name = ").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        assert!(dispatch(parse(&["primer", "--config", &path, "list"])).is_ok());
        assert!(dispatch(parse(&[
            "primer",
            "--config",
            &path,
            "singleton-check",
            "--threads",
            "2"
        ]))
        .is_ok());
        assert!(dispatch(parse(&["primer", "--config", &path, "run", "inheritance"])).is_err());
    }

    #[test]
    fn test_run_without_config_uses_defaults() {
        assert!(dispatch(parse(&["primer", "run", "all"])).is_ok());
    }
}
