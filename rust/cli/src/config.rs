//! Layered configuration: defaults, then a TOML file named by
//! `SOLITAIRE_CONFIG`, then individual environment overrides.

use serde::{Deserialize, Serialize};
use std::fs;

pub const ENV_CONFIG: &str = "SOLITAIRE_CONFIG";
pub const ENV_SEED: &str = "SOLITAIRE_SEED";
pub const ENV_LOG_LEVEL: &str = "SOLITAIRE_LOG_LEVEL";
pub const ENV_SYMBOLS: &str = "SOLITAIRE_SYMBOLS";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Seed used when a command is not given `--seed`.
    pub seed: Option<u64>,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Render suits as ♣♦♥♠ instead of C/D/H/S.
    pub symbols: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub log_level: ValueSource,
    pub symbols: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            log_level: ValueSource::Default,
            symbols: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            log_level: "warn".into(),
            symbols: false,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Like [`load`], reading variables through `env`.
pub fn load_from<F>(env: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    load_with_sources_from(env).map(|resolved| resolved.config)
}

/// Resolves the configuration from the process environment.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_with_sources_from(|key| std::env::var(key).ok())
}

/// Resolves the configuration reading variables through `env`.
pub fn load_with_sources_from<F>(env: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = env(ENV_CONFIG)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.log_level {
            cfg.log_level = v;
            sources.log_level = ValueSource::File;
        }
        if let Some(v) = f.symbols {
            cfg.symbols = v;
            sources.symbols = ValueSource::File;
        }
    }

    if let Some(seed) = env(ENV_SEED)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(level) = env(ENV_LOG_LEVEL)
        && !level.is_empty()
    {
        cfg.log_level = level.to_ascii_lowercase();
        sources.log_level = ValueSource::Env;
    }
    if let Some(sym) = env(ENV_SYMBOLS)
        && !sym.is_empty()
    {
        cfg.symbols =
            parse_bool(&sym).ok_or_else(|| ConfigError::Invalid("Invalid symbols".into()))?;
        sources.symbols = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    log_level: Option<String>,
    #[serde(default)]
    symbols: Option<bool>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !LOG_LEVELS.contains(&cfg.log_level.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "log_level must be one of {}",
            LOG_LEVELS.join(", ")
        )));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
