// Configuration module for shuttle-agent
// Handles loading agent and logging settings from a TOML file

pub mod loader;
pub mod types;

pub use loader::{
    create_default_config, get_config_path, load_config, load_config_from, ConfigSource,
    LoadedConfig,
};
pub use types::{AgentConfig, Config, LoggingConfig};
