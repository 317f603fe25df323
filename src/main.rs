use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::{debug, info};

use shuttle_agent::ai::{self, AgentType};
use shuttle_agent::config::{self, Config};
use shuttle_agent::game::{Action, GameState};
use shuttle_agent::logging;

/// Parsed command line options
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    agent: Option<String>,
    state_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    debug: bool,
    help: bool,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("shuttle-agent");
    let cli = parse_args(args.get(1..).unwrap_or_default())?;

    if cli.help {
        print_usage(program);
        return Ok(());
    }

    let loaded = match &cli.config_path {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => config::load_config().context("failed to load config")?,
    };
    logging::init(&loaded.config.logging.level, cli.debug);
    loaded.source.report();
    let config = loaded.config;

    let state = read_state(cli.state_path.as_deref())?;
    debug!(?state, "loaded snapshot");

    let kind = cli.agent.as_deref().unwrap_or(&config.agent.kind);
    let agent_type: AgentType = kind.parse()?;

    let action = decide(agent_type, &config, &state)?;
    println!("{}", serde_json::to_string(&action)?);
    Ok(())
}

/// Run one decision with a freshly built agent
fn decide(agent_type: AgentType, config: &Config, state: &GameState) -> Result<Action> {
    let mut agent = ai::create_agent(agent_type, &config.agent);
    info!(agent = agent.name(), "selecting action");
    let action = agent.select_action(state)?;
    Ok(action)
}

/// Parse command line arguments (program name already stripped)
fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut cli = CliArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--agent" | "-a" => {
                let Some(value) = iter.next() else {
                    bail!("--agent requires a value (base, random, easy, hard)");
                };
                cli.agent = Some(value.clone());
            }
            "--state" | "-s" => {
                let Some(value) = iter.next() else {
                    bail!("--state requires a file path");
                };
                cli.state_path = Some(PathBuf::from(value));
            }
            "--config" | "-c" => {
                let Some(value) = iter.next() else {
                    bail!("--config requires a file path");
                };
                cli.config_path = Some(PathBuf::from(value));
            }
            "--debug" | "-d" => cli.debug = true,
            "--help" | "-h" => cli.help = true,
            other => bail!("unknown argument: {}", other),
        }
    }

    Ok(cli)
}

/// Read a JSON snapshot from a file, or from stdin when no path is given
fn read_state(path: Option<&Path>) -> Result<GameState> {
    let json = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read state {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read state from stdin")?;
            buf
        }
    };

    serde_json::from_str(&json).context("state is not a valid snapshot")
}

fn print_usage(program: &str) {
    println!("shuttle-agent - pick the next action for a badminton match snapshot");
    println!();
    println!("Usage:");
    println!("  {} [--agent <kind>] [--state <file.json>] [--config <file.toml>] [--debug]", program);
    println!();
    println!("Agents:");
    for agent_type in AgentType::all() {
        println!("  {:<8} {}", agent_type.display_name().to_lowercase(), agent_type.description());
    }
    println!();
    println!("The snapshot is read from stdin when --state is omitted. Missing keys are unknown.");
    println!();
    println!("Example:");
    println!(
        "  echo '{{\"shuttle_zone\":{{\"side\":\"own\",\"depth\":\"rear\",\"lane\":\"left\"}},\"shuttle_height\":\"high\",\"power\":80}}' | {} --agent hard",
        program
    );
}
