//! Posture Dashboard - CLI entry point
//!
//! This binary launches the security posture TUI and provides helper
//! subcommands for inspecting the widget catalog and managing the
//! configuration file.

use clap::{Parser, Subcommand};
use posture_dashboard::config::{default, loader::ConfigLoader, xdg, Config, LogLevel};
use posture_dashboard::tui::app::App;
use posture_dashboard::{logging, Catalog};
use std::path::PathBuf;
use std::process::ExitCode;

/// Security posture dashboard
#[derive(Parser)]
#[command(name = "pdash")]
#[command(version, about = "Security posture dashboard for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the pdash CLI
#[derive(Subcommand)]
enum Commands {
    /// Launch the terminal user interface
    Tui {
        /// Path to a configuration file (defaults to the XDG location)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Inspect the built-in widget catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Actions for the `catalog` subcommand.
#[derive(Subcommand)]
enum CatalogAction {
    /// List all widgets with their categories and renderer keys
    List,
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

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tui { config } => run_tui(config.as_deref()),
        Commands::Catalog { action } => {
            logging::init_stderr(LogLevel::Info);
            match action {
                CatalogAction::List => run_catalog_list(),
            }
        }
        Commands::Config { action } => {
            logging::init_stderr(LogLevel::Info);
            run_config_command(action)
        }
    }
}

/// Loads configuration, sets up logging, and runs the TUI to completion.
fn run_tui(config_path: Option<&std::path::Path>) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // File logging only: stderr belongs to the TUI while it runs
    if !config.log.file.is_empty() {
        let path = xdg::expand_tilde(&config.log.file);
        if let Err(e) = logging::init_file(config.log.level, &path) {
            eprintln!("Failed to open log file {}: {e}", path.display());
            return ExitCode::FAILURE;
        }
    }

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create tokio runtime: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = rt.block_on(async {
        let mut app = App::new(&config);
        app.run().await
    }) {
        eprintln!("TUI error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Loads from the given path, or the XDG default when no path is given.
fn load_config(path: Option<&std::path::Path>) -> Result<Config, posture_dashboard::config::ConfigError> {
    match path {
        Some(path) => ConfigLoader::load_from_path(path),
        None => ConfigLoader::load_default(),
    }
}

/// Prints the widget catalog as an aligned table.
fn run_catalog_list() -> ExitCode {
    let catalog = Catalog::builtin();

    let id_width = catalog
        .widgets()
        .iter()
        .map(|w| w.id.len())
        .max()
        .unwrap_or(0);
    let title_width = catalog
        .widgets()
        .iter()
        .map(|w| w.title.len())
        .max()
        .unwrap_or(0);

    println!(
        "{:id_width$}  {:title_width$}  {:8}  {}",
        "ID", "TITLE", "CATEGORY", "RENDERER"
    );
    for widget in catalog.widgets() {
        println!(
            "{:id_width$}  {:title_width$}  {:8}  {}",
            widget.id, widget.title, widget.category, widget.renderer_key
        );
    }
    ExitCode::SUCCESS
}

/// Handles `pdash config` actions.
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
        ConfigAction::Validate => match ConfigLoader::load_default() {
            Ok(config) => {
                println!("Configuration is valid");
                println!("{config:#?}");
                Ok(())
            }
            Err(e) => Err(e),
        },
    };
    if let Err(e) = result {
        eprintln!("Config error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
