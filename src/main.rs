//! Agent Selector - pick the active AI agent for a page

use agent_selector::agent;
use agent_selector::config::Config;
use agent_selector::location::{self, Location, QueryStore, agent_switch_target};
use agent_selector::paths;
use agent_selector::selection;
use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

/// Pick the active AI agent for a page location
#[derive(Parser)]
#[command(name = "agent-selector")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Location to open (absolute, or relative to the configured start URL)
    #[arg(long)]
    url: Option<String>,

    /// Read configuration from this file instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available agents
    List,
    /// Print the id of the agent selected by a location
    Resolve {
        /// Location to read (absolute, or relative to the start URL)
        #[arg(long)]
        url: Option<String>,
    },
    /// Print the location that selecting an agent navigates to
    Select {
        /// Agent id
        agent: String,
        /// Location to switch from (absolute, or relative to the start URL)
        #[arg(long)]
        url: Option<String>,
    },
}

fn main() -> Result<()> {
    let log_path = paths::log_path();

    // Clear the log file on startup
    if let Err(e) = std::fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        let dir = log_path.parent().unwrap_or_else(|| std::path::Path::new("."));
        let file_appender = tracing_appender::rolling::never(dir, "agent-selector.log");
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Some(Commands::List) => {
            cmd_list();
            Ok(())
        }
        Some(Commands::Resolve { url }) => cmd_resolve(&config, url.as_deref()),
        Some(Commands::Select { agent, url }) => cmd_select(&config, &agent, url.as_deref()),
        None => {
            let location = open_location(&config, cli.url.as_deref())?;
            info!(href = %location.href(), "starting");
            let final_url = agent_selector::tui::run(location, &config)?;
            println!("{final_url}");
            Ok(())
        }
    }
}

/// Resolve `input` against the configured start URL, or use the start URL itself.
fn open_location(config: &Config, input: Option<&str>) -> Result<Location> {
    let base = config.start_url()?;
    match input {
        Some(input) => Location::parse_relative(input, &base)
            .with_context(|| format!("Failed to open location {input:?}")),
        None => Ok(Location::new(base)),
    }
}

fn cmd_list() {
    for agent in agent::all() {
        println!("{:<16}{:<26}{}", agent.id, agent.name, agent.description);
    }
}

fn cmd_resolve(config: &Config, url: Option<&str>) -> Result<()> {
    let location = open_location(config, url)?;
    println!("{}", selection::current_agent(&location).id);
    Ok(())
}

fn cmd_select(config: &Config, agent_id: &str, url: Option<&str>) -> Result<()> {
    let current = open_location(config, url)?;
    if agent::find(agent_id).is_none() {
        return Err(location::Error::UnknownAgent(agent_id.to_string()).into());
    }
    let target = agent_switch_target(current.href(), agent_id);
    info!(agent = agent_id, %target, "switch target");
    println!("{target}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["agent-selector"]);
        assert!(cli.command.is_none());
        assert!(cli.url.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_url_and_config() {
        let cli = Cli::parse_from([
            "agent-selector",
            "--url",
            "?assistantId=visual-agent",
            "--config",
            "/tmp/custom.json",
        ]);
        assert_eq!(cli.url.as_deref(), Some("?assistantId=visual-agent"));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/custom.json")));
    }

    #[test]
    fn test_cli_select_command() -> Result<(), Box<dyn std::error::Error>> {
        let cli = Cli::parse_from([
            "agent-selector",
            "select",
            "socratic-agent",
            "--url",
            "http://localhost:3000/?threadId=1",
        ]);
        match cli.command {
            Some(Commands::Select { agent, url }) => {
                assert_eq!(agent, "socratic-agent");
                assert_eq!(url.as_deref(), Some("http://localhost:3000/?threadId=1"));
            }
            _ => return Err("Expected Select command".into()),
        }
        Ok(())
    }

    #[test]
    fn test_cli_select_requires_agent() {
        assert!(Cli::try_parse_from(["agent-selector", "select"]).is_err());
    }

    #[test]
    fn test_open_location_relative_to_start_url() -> Result<(), Box<dyn std::error::Error>> {
        let config = Config::default();
        let location = open_location(&config, Some("?assistantId=visual-agent"))?;
        assert_eq!(
            location.href().as_str(),
            "http://localhost:3000/?assistantId=visual-agent"
        );

        let location = open_location(&config, None)?;
        assert_eq!(location.href().as_str(), "http://localhost:3000/");
        Ok(())
    }

    #[test]
    fn test_select_unknown_agent_fails() {
        assert!(cmd_select(&Config::default(), "nope-agent", None).is_err());
    }
}
