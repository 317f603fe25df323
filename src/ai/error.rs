//! Errors raised while an agent picks an action

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AgentError {
    /// The agent has no decision policy; this is a wiring error, not a game situation
    #[error("agent '{agent}' does not implement select_action")]
    NotImplemented { agent: String },

    /// A field the strategy depends on has not been observed yet
    #[error("agent '{agent}' cannot decide: {field} is unknown")]
    MissingObservation { agent: String, field: &'static str },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown agent type '{0}' (expected base, random, easy or hard)")]
pub struct UnknownAgentType(pub String);
