use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{eyre, Context};
use commands::{config, count, duplicates};
use std::path::{Path, PathBuf};
use tally_config::{Config, InputMode, PathManager};

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Tally - count items and find the ones that repeat")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Configuration file (defaults to config.toml in the tally config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write logs to this file (rotated daily) instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputModeArg {
    Lines,
    Words,
    Column,
}

impl From<InputModeArg> for InputMode {
    fn from(mode: InputModeArg) -> Self {
        match mode {
            InputModeArg::Lines => InputMode::Lines,
            InputModeArg::Words => InputMode::Words,
            InputModeArg::Column => InputMode::Column,
        }
    }
}

/// Input selection shared by the counting commands
#[derive(Args, Debug, Clone)]
struct InputArgs {
    /// Files to read; stdin when none are given or for `-`
    #[arg(value_name = "FILES")]
    files: Vec<String>,

    /// How to split input into items
    #[arg(long, value_enum)]
    mode: Option<InputModeArg>,

    /// Zero-based field index (implies --mode column)
    #[arg(long)]
    column: Option<usize>,

    /// Field delimiter for column mode
    #[arg(long)]
    delimiter: Option<String>,

    /// Treat items that differ only in case as the same item
    #[arg(long, action = ArgAction::SetTrue)]
    ignore_case: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print items that occur more than once, in order of first occurrence
    #[command(long_about = "Read items from files or stdin and print every item that occurs more than once. Each duplicate is printed once, in the order it first appeared in the input.")]
    Duplicates {
        #[command(flatten)]
        input: InputArgs,

        /// Show occurrence counts and first positions
        #[arg(long, action = ArgAction::SetTrue)]
        counts: bool,
    },
    /// Print a frequency table, most common items first
    #[command(long_about = "Read items from files or stdin and print how often each distinct item occurs. Items with equal counts keep their first-seen order.")]
    Count {
        #[command(flatten)]
        input: InputArgs,

        /// Only show items seen at least this many times
        #[arg(long)]
        min_count: Option<usize>,

        /// Only show the N most common items
        #[arg(long)]
        top: Option<usize>,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
    /// Print the configuration file location
    Path,
}

/// Load the configuration file, or defaults when it does not exist
///
/// A broken file must not stop `config init --force` from replacing it.
fn load_config(command: &Commands, config_path: &Path) -> color_eyre::Result<Config> {
    match (command, Config::load_or_default(config_path)) {
        (Commands::Config { cmd: ConfigCommands::Init { force: true } }, Err(_)) => Ok(Config::default()),
        (_, loaded) => loaded.map_err(|e| eyre!("Failed to load config: {:#}", e)),
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathManager::default().config_file());
    let config = load_config(&cli.command, &config_path)?;

    let log_file = cli.log_file.clone().or_else(|| config.logging.file.clone());
    logging::init_logging_with_file(cli.verbose, cli.quiet, log_file)
        .map_err(|e| eyre!("{:#}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Duplicates { input, counts } => {
            duplicates::run_duplicates(&input, counts, config, &output)
                .wrap_err("duplicates command failed")
        }
        Commands::Count { input, min_count, top } => {
            count::run_count(&input, min_count, top, config, &output)
                .wrap_err("count command failed")
        }
        Commands::Config { cmd } => config::run_config(cmd, &config_path, &config, &output),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn broken_config() -> NamedTempFile {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "[report\nmin_count = ").unwrap();
        file
    }

    fn init(force: bool) -> Commands {
        Commands::Config {
            cmd: ConfigCommands::Init { force },
        }
    }

    #[test]
    fn test_broken_config_allowed_for_forced_init() {
        let file = broken_config();
        let config = load_config(&init(true), file.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_broken_config_rejected_otherwise() {
        let file = broken_config();
        assert!(load_config(&init(false), file.path()).is_err());

        let show = Commands::Config {
            cmd: ConfigCommands::Show,
        };
        let err = load_config(&show, file.path()).unwrap_err();
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&init(false), &dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_cli_parses_count_flags() {
        let cli = Cli::parse_from(["tally", "count", "--min-count", "2", "--top", "5", "items.txt"]);
        match cli.command {
            Commands::Count { input, min_count, top } => {
                assert_eq!(input.files, vec!["items.txt"]);
                assert_eq!(min_count, Some(2));
                assert_eq!(top, Some(5));
            }
            _ => panic!("expected count command"),
        }
    }
}
