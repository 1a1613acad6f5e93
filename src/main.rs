mod commands;
mod common;
mod ui;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::Session;
use crate::common::command_log::CommandLogger;
use crate::common::config::Config;
use crate::common::distro;
use crate::common::package::{SystemRunner, is_package_name};
use crate::ui::prelude::*;

/// Install the libraries DaVinci Resolve needs with the distribution's
/// package manager
#[derive(Parser, Debug)]
#[command(name = "davinci-helper", author, version, about, long_about = None)]
struct Cli {
    /// Activate debug mode (also records child processes to the command log)
    #[arg(short, long, global = true)]
    debug: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Read this file instead of the configured os-release descriptor
    #[arg(long, global = true, env = "DAVINCI_HELPER_OS_RELEASE", value_name = "PATH")]
    os_release: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the detected distribution family and package manager
    Detect,

    /// List installed packages
    List {
        /// Only show packages whose name contains this text
        #[arg(short, long)]
        filter: Option<String>,
        /// Print the package manager's output unparsed
        #[arg(long, conflicts_with = "filter")]
        raw: bool,
    },

    /// Install packages with the native package manager
    Install {
        /// Package names
        #[arg(required = true, num_args = 1.., value_parser = package_name)]
        packages: Vec<String>,
    },

    /// Show required libraries that are not installed
    Missing,

    /// Install every required library that is missing
    Setup {
        /// Only print what would be installed
        #[arg(long)]
        dry_run: bool,
    },

    /// Check that the package manager can be used
    Status,

    /// Configuration file commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the config file location
    Path,
    /// Write a config file with default values
    Init,
}

fn package_name(name: &str) -> Result<String, String> {
    if is_package_name(name) {
        Ok(name.to_string())
    } else {
        Err(format!("'{name}' is not a package name"))
    }
}

fn main() {
    let cli = Cli::parse();

    ui::init(cli.output, !cli.no_color);
    ui::set_debug_mode(cli.debug);

    if let Err(e) = run(cli) {
        emit(Level::Error, "error", &format!("Error: {e:#}"), None);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        emit(
            Level::Info,
            "usage",
            "davinci-helper: run with --help for usage",
            None,
        );
        return Ok(());
    };

    match command {
        // Config handling must work on any distribution
        Commands::Config { command } => commands::config::handle_config_command(command),
        Commands::Detect => commands::detect::handle_detect(&start_session(cli.os_release)?),
        Commands::List { filter, raw } => {
            commands::list::handle_list(&start_session(cli.os_release)?, filter.as_deref(), raw)
        }
        Commands::Install { packages } => {
            commands::install::handle_install(&start_session(cli.os_release)?, &packages)
        }
        Commands::Missing => commands::install::handle_missing(&start_session(cli.os_release)?),
        Commands::Setup { dry_run } => {
            commands::install::handle_setup(&start_session(cli.os_release)?, dry_run)
        }
        Commands::Status => commands::status::handle_status(&start_session(cli.os_release)?),
    }
}

/// Load config and select the backend. An unsupported distribution ends
/// the process with status 1.
fn start_session(os_release_override: Option<PathBuf>) -> anyhow::Result<Session> {
    let config = Config::load()?;
    let os_release_path = os_release_override.unwrap_or_else(|| config.os_release.clone());

    let detected = distro::detect_backend(&os_release_path, || system_runner(&config));
    let (os_release, backend) = match detected {
        Ok(detected) => detected,
        Err(e) => {
            emit(
                Level::Error,
                "detect.unsupported",
                &format!("davinci-helper: {e}."),
                None,
            );
            std::process::exit(1);
        }
    };
    emit(
        Level::Debug,
        "detect.family",
        &format!(
            "{} from {}",
            os_release.family(),
            os_release_path.display()
        ),
        None,
    );

    Ok(Session {
        os_release,
        backend,
        config,
    })
}

fn system_runner(config: &Config) -> SystemRunner {
    if !(ui::is_debug_enabled() && config.command_log) {
        return SystemRunner::new();
    }
    match CommandLogger::new() {
        Ok(logger) => {
            emit(
                Level::Debug,
                "command_log.path",
                &format!("Logging commands to {}", logger.path().display()),
                None,
            );
            SystemRunner::with_logger(logger)
        }
        Err(e) => {
            emit(
                Level::Warn,
                "command_log.unavailable",
                &format!("Warning: command log disabled: {e:#}"),
                None,
            );
            SystemRunner::new()
        }
    }
}
