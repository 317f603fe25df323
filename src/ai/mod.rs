// AI module for match agents

mod agent;
mod error;
mod heuristic_agent;
mod random_agent;

use std::fmt;
use std::str::FromStr;

pub use agent::{Agent, BaseAgent};
pub use error::{AgentError, UnknownAgentType};
pub use heuristic_agent::{HeuristicAgent, HeuristicAgentConfig};
pub use random_agent::RandomAgent;

use crate::config::AgentConfig;

/// Agent type selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentType {
    /// Placeholder with no strategy - always reports NotImplemented
    Base,
    /// Uniform random choice over every action
    Random,
    /// Heuristic with noisy self-perception
    Easy,
    /// Heuristic with exact self-perception
    Hard,
}

impl AgentType {
    /// Get display name for agent type
    pub fn display_name(&self) -> &str {
        match self {
            AgentType::Base => "Base",
            AgentType::Random => "Random",
            AgentType::Easy => "Easy",
            AgentType::Hard => "Hard",
        }
    }

    /// Get description for agent type
    pub fn description(&self) -> &str {
        match self {
            AgentType::Base => "No strategy - every decision fails",
            AgentType::Random => "Baseline - any action, any time",
            AgentType::Easy => "Rule-based, misjudges its own stamina and power",
            AgentType::Hard => "Rule-based, exact judgement",
        }
    }

    /// Get all available agent types
    pub fn all() -> Vec<AgentType> {
        vec![
            AgentType::Base,
            AgentType::Random,
            AgentType::Easy,
            AgentType::Hard,
        ]
    }
}

impl fmt::Display for AgentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for AgentType {
    type Err = UnknownAgentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgentType::all()
            .into_iter()
            .find(|t| t.display_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownAgentType(s.to_string()))
    }
}

/// Create an agent instance from an agent type
pub fn create_agent(agent_type: AgentType, config: &AgentConfig) -> Box<dyn Agent> {
    match agent_type {
        AgentType::Base => Box::new(BaseAgent::new()),
        AgentType::Random => match config.seed {
            Some(seed) => Box::new(RandomAgent::seeded(seed)),
            None => Box::new(RandomAgent::new()),
        },
        AgentType::Easy => Box::new(HeuristicAgent::from_config(HeuristicAgent::easy_config(), config)),
        AgentType::Hard => Box::new(HeuristicAgent::from_config(HeuristicAgent::hard_config(), config)),
    }
}
