//! Gridboard - CLI entry point
//!
//! This binary provides the command-line interface for the gridboard
//! terminal dashboard: running the TUI and managing the configuration file
//! and the persisted dashboard state.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use gridboard::config::{default, loader::ConfigLoader, xdg, Config, ConfigError};
use gridboard::logging;
use gridboard::storage::StateStore;
use gridboard::tui::app::App;

/// Terminal widget-grid dashboard
#[derive(Parser)]
#[command(name = "gbd")]
#[command(version, about = "Terminal widget-grid dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands for the gbd CLI
#[derive(Subcommand)]
enum Commands {
    /// Launch the dashboard (default when no subcommand is given)
    Tui {
        /// Path to a configuration file (defaults to the XDG location)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Directory holding the persisted dashboard state
        #[arg(long)]
        state_dir: Option<PathBuf>,
    },

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Manage persisted dashboard state
    State {
        #[command(subcommand)]
        action: StateAction,
    },
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration (creates backup)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate,
}

/// Actions for the `state` subcommand.
#[derive(Subcommand)]
enum StateAction {
    /// Show the persisted state file paths
    Path {
        /// Directory holding the persisted dashboard state
        #[arg(long)]
        state_dir: Option<PathBuf>,
    },
    /// Delete the persisted state, reverting to the built-in defaults
    Reset {
        /// Directory holding the persisted dashboard state
        #[arg(long)]
        state_dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Tui {
        config: None,
        state_dir: None,
    }) {
        Commands::Tui { config, state_dir } => run_tui(config.as_deref(), state_dir),
        Commands::Config { action } => run_config_command(action),
        Commands::State { action } => run_state_command(action),
    }
}

/// Loads configuration, initializes logging, and runs the TUI to completion.
fn run_tui(config_path: Option<&Path>, state_dir: Option<PathBuf>) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(&config.log);

    let store = state_dir
        .map(StateStore::new)
        .unwrap_or_else(StateStore::default_location);
    tracing::debug!("state directory: {}", store.dir().display());

    let rt = tokio::runtime::Runtime::new().expect("failed to create tokio runtime for TUI");
    if let Err(e) = rt.block_on(async {
        let mut app = App::new(&config, store);
        app.run().await
    }) {
        eprintln!("TUI error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => ConfigLoader::load_from_path(path),
        None => ConfigLoader::load_default(),
    }
}

fn run_config_command(action: ConfigAction) -> ExitCode {
    let result = match action {
        ConfigAction::Init { force } => match default::create_default_config(force) {
            Ok(path) => {
                println!("Created configuration at {}", path.display());
                Ok(())
            }
            Err(e) => Err(e),
        },
        ConfigAction::Path => {
            println!("{}", xdg::config_path().display());
            Ok(())
        }
        ConfigAction::Validate => {
            let path = xdg::config_path();
            if !path.exists() {
                println!("No configuration file at {} (defaults apply)", path.display());
                Ok(())
            } else {
                match ConfigLoader::load_from_path(&path) {
                    Ok(_) => {
                        println!("Configuration at {} is valid", path.display());
                        Ok(())
                    }
                    Err(e) => Err(e),
                }
            }
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_state_command(action: StateAction) -> ExitCode {
    let store_for = |dir: Option<PathBuf>| {
        dir.map(StateStore::new)
            .unwrap_or_else(StateStore::default_location)
    };

    match action {
        StateAction::Path { state_dir } => {
            let store = store_for(state_dir);
            println!("{}", store.layouts_path().display());
            println!("{}", store.widgets_path().display());
            ExitCode::SUCCESS
        }
        StateAction::Reset { state_dir } => {
            let store = store_for(state_dir);
            match store.reset() {
                Ok(()) => {
                    println!("Removed persisted state from {}", store.dir().display());
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}
