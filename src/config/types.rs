// shuttle-agent configuration types
// All settings have defaults, so a partial file is always valid

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub agent: AgentConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AgentConfig {
    // Agent type: "base", "random", "easy", "hard"
    pub kind: String,

    // Fixed RNG seed for reproducible runs (unset = OS entropy)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    // Stamina below which only defensive shots are played
    pub low_stamina_threshold: f32,

    // Minimum power needed to attempt a smash
    pub smash_power_threshold: f32,

    // Distance from base (metres) that still counts as recovered
    pub recovery_radius: f32,

    // Opponent y (metres from our baseline) beyond which they count as deep
    pub opponent_deep_line: f32,

    // Perception noise on stamina/power (unset = the agent type's own value)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub judgement_error_stddev: Option<f32>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            kind: "hard".to_string(),
            seed: None,
            low_stamina_threshold: 25.0,
            smash_power_threshold: 60.0,
            recovery_radius: 0.75,
            opponent_deep_line: 10.5,
            judgement_error_stddev: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    // One of "error", "warn", "info", "debug", "trace"
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
