// Configuration file loading and creation

use super::types::Config;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Get the path to the configuration file
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("shuttle-agent");
    path.push("config.toml");
    path
}

/// Where a loaded configuration came from
///
/// Loading happens before the log subscriber exists, so anything worth
/// telling the user is carried here and emitted later through [`ConfigSource::report`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    /// Parsed from an existing file
    File(PathBuf),
    /// No file existed; a commented default was written
    Created(PathBuf),
    /// The file could not be parsed; defaults are in use
    Fallback { path: PathBuf, error: String },
}

impl ConfigSource {
    /// Log how the configuration was obtained
    pub fn report(&self) {
        match self {
            ConfigSource::File(path) => {
                debug!(path = %path.display(), "loaded config file");
            }
            ConfigSource::Created(path) => {
                info!(path = %path.display(), "created default config file");
            }
            ConfigSource::Fallback { path, error } => {
                warn!(path = %path.display(), %error, "failed to parse config file, using defaults");
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}

/// Load configuration from the default location, creating it if missing
pub fn load_config() -> Result<LoadedConfig, io::Error> {
    let config_path = get_config_path();

    if config_path.exists() {
        load_config_from(&config_path)
    } else {
        if let Some(dir) = config_path.parent() {
            fs::create_dir_all(dir)?;
        }
        create_default_config(&config_path)?;
        Ok(LoadedConfig {
            config: Config::default(),
            source: ConfigSource::Created(config_path),
        })
    }
}

/// Load configuration from a specific file
///
/// A file that cannot be read is an error; a file that cannot be parsed
/// falls back to the defaults and is reported as [`ConfigSource::Fallback`].
pub fn load_config_from(path: &Path) -> Result<LoadedConfig, io::Error> {
    let contents = fs::read_to_string(path)?;
    let loaded = match toml::from_str(&contents) {
        Ok(config) => LoadedConfig {
            config,
            source: ConfigSource::File(path.to_path_buf()),
        },
        Err(e) => LoadedConfig {
            config: Config::default(),
            source: ConfigSource::Fallback {
                path: path.to_path_buf(),
                error: e.to_string(),
            },
        },
    };
    Ok(loaded)
}

/// Create a default configuration file with helpful comments
pub fn create_default_config(path: &Path) -> Result<(), io::Error> {
    let config = Config::default();
    let toml_string =
        toml::to_string_pretty(&config).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let commented_toml = format!(
        "# shuttle-agent configuration file\n\
         # Edit this file to tune how agents decide\n\
         #\n\
         # Agent kinds: \"base\", \"random\", \"easy\", \"hard\"\n\
         # Optional keys: seed (integer), judgement_error_stddev (float)\n\
         #\n\
         # Log levels: \"error\", \"warn\", \"info\", \"debug\", \"trace\"\n\n\
         {}",
        toml_string
    );

    fs::write(path, commented_toml)?;
    Ok(())
}
