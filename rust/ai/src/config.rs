//! Strategy thresholds and layered configuration loading.
//!
//! Values resolve in order: built-in defaults, then the TOML file named by
//! `BOTNAUGHT_CONFIG`, then `BOTNAUGHT_*` environment variables.
//!
//! ```toml
//! strategy = "staged"
//! host = "0.0.0.0"
//! port = 9501
//!
//! [thresholds]
//! open_raise_fraction = 0.25
//! defend_rank = 4000
//! ```

use botnaught_engine::hand::WORST_RANK;
use botnaught_engine::player::ActionKind;
use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

use crate::DEFAULT_STRATEGY;

pub const CONFIG_ENV: &str = "BOTNAUGHT_CONFIG";
pub const STRATEGY_ENV: &str = "BOTNAUGHT_STRATEGY";
pub const HOST_ENV: &str = "BOTNAUGHT_HOST";
pub const PORT_ENV: &str = "BOTNAUGHT_PORT";

/// Every tunable number the staged strategy uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StrategyConfig {
    /// Pre-flop open size as a fraction of the hero's total chips.
    pub open_raise_fraction: f64,
    /// Pre-flop: keep calling while the bet is below this fraction of total chips.
    pub preflop_call_fraction: f64,
    pub all_in_rank_pct: f64,
    /// Minimum hand lead for the all-in, turn and river rules.
    pub lead_threshold: i32,
    pub flop_rank_pct: f64,
    pub turn_rank_pct: f64,
    pub river_rank_pct: f64,
    /// Leads above this scale the bet by `big_lead_multiplier`.
    pub big_lead: i32,
    pub big_lead_multiplier: f64,
    /// Ranked hands below this keep calling rather than folding.
    pub defend_rank: u16,
    /// Passive action when neither call nor check is offered.
    pub fallback_action: ActionKind,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            open_raise_fraction: 0.20,
            preflop_call_fraction: 0.60,
            all_in_rank_pct: 0.70,
            lead_threshold: 10,
            flop_rank_pct: 0.40,
            turn_rank_pct: 0.45,
            river_rank_pct: 0.50,
            big_lead: 500,
            big_lead_multiplier: 1.5,
            defend_rank: 5000,
            fallback_action: ActionKind::Check,
        }
    }
}

impl StrategyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fractions = [
            ("open_raise_fraction", self.open_raise_fraction),
            ("preflop_call_fraction", self.preflop_call_fraction),
            ("all_in_rank_pct", self.all_in_rank_pct),
            ("flop_rank_pct", self.flop_rank_pct),
            ("turn_rank_pct", self.turn_rank_pct),
            ("river_rank_pct", self.river_rank_pct),
        ];
        for (name, value) in fractions {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be between 0 and 1, got {value}"
                )));
            }
        }
        if !self.big_lead_multiplier.is_finite() || self.big_lead_multiplier < 1.0 {
            return Err(ConfigError::Invalid(format!(
                "big_lead_multiplier must be at least 1, got {}",
                self.big_lead_multiplier
            )));
        }
        if self.defend_rank == 0 || self.defend_rank > WORST_RANK {
            return Err(ConfigError::Invalid(format!(
                "defend_rank must be within 1..={WORST_RANK}, got {}",
                self.defend_rank
            )));
        }
        if !matches!(self.fallback_action, ActionKind::Call | ActionKind::Check) {
            return Err(ConfigError::Invalid(format!(
                "fallback_action must be call or check, got {}",
                self.fallback_action
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    pub strategy: String,
    pub host: String,
    pub port: u16,
    pub thresholds: StrategyConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: DEFAULT_STRATEGY.into(),
            host: "127.0.0.1".into(),
            port: 9501,
            thresholds: StrategyConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigSources {
    pub strategy: ValueSource,
    pub host: ValueSource,
    pub port: ValueSource,
    pub thresholds: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            strategy: ValueSource::Default,
            host: ValueSource::Default,
            port: ValueSource::Default,
            thresholds: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut resolved = ConfigResolved {
        config: Config::default(),
        sources: ConfigSources::default(),
    };

    if let Some(path) = env_value(CONFIG_ENV) {
        let text = fs::read_to_string(path)?;
        apply_file(&mut resolved, &text)?;
    }

    if let Some(strategy) = env_value(STRATEGY_ENV) {
        resolved.config.strategy = strategy;
        resolved.sources.strategy = ValueSource::Env;
    }
    if let Some(host) = env_value(HOST_ENV) {
        resolved.config.host = host;
        resolved.sources.host = ValueSource::Env;
    }
    if let Some(port) = env_value(PORT_ENV) {
        resolved.config.port = port
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid port: {port}")))?;
        resolved.sources.port = ValueSource::Env;
    }

    validate(&resolved.config)?;
    Ok(resolved)
}

/// Parse a TOML document on top of the defaults, without consulting the
/// environment.
pub fn load_from_str(text: &str) -> Result<ConfigResolved, ConfigError> {
    let mut resolved = ConfigResolved {
        config: Config::default(),
        sources: ConfigSources::default(),
    };
    apply_file(&mut resolved, text)?;
    validate(&resolved.config)?;
    Ok(resolved)
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    strategy: Option<String>,
    #[serde(default)]
    host: Option<String>,
    #[serde(default)]
    port: Option<u16>,
    #[serde(default)]
    thresholds: Option<StrategyConfig>,
}

fn apply_file(resolved: &mut ConfigResolved, text: &str) -> Result<(), ConfigError> {
    let file: FileConfig = toml::from_str(text)?;
    let ConfigResolved { config, sources } = resolved;
    if let Some(v) = file.strategy {
        config.strategy = v;
        sources.strategy = ValueSource::File;
    }
    if let Some(v) = file.host {
        config.host = v;
        sources.host = ValueSource::File;
    }
    if let Some(v) = file.port {
        config.port = v;
        sources.port = ValueSource::File;
    }
    if let Some(v) = file.thresholds {
        config.thresholds = v;
        sources.thresholds = ValueSource::File;
    }
    Ok(())
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.strategy.trim().is_empty() {
        return Err(ConfigError::Invalid("strategy cannot be empty".into()));
    }
    if cfg.host.trim().is_empty() {
        return Err(ConfigError::Invalid("host cannot be empty".into()));
    }
    cfg.thresholds.validate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        StrategyConfig::default().validate().expect("defaults validate");
    }

    #[test]
    fn partial_thresholds_keep_defaults() {
        let resolved = load_from_str(
            r#"
            port = 9600

            [thresholds]
            open_raise_fraction = 0.25
            fallback_action = "call"
            "#,
        )
        .expect("parse");
        assert_eq!(resolved.config.port, 9600);
        assert_eq!(resolved.sources.port, ValueSource::File);
        assert_eq!(resolved.sources.host, ValueSource::Default);
        assert_eq!(resolved.config.thresholds.open_raise_fraction, 0.25);
        assert_eq!(resolved.config.thresholds.fallback_action, ActionKind::Call);
        assert_eq!(resolved.config.thresholds.defend_rank, 5000);
    }

    #[test]
    fn rejects_out_of_range_thresholds() {
        let cfg = StrategyConfig {
            flop_rank_pct: 1.4,
            ..StrategyConfig::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = StrategyConfig {
            big_lead_multiplier: 0.5,
            ..StrategyConfig::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = StrategyConfig {
            fallback_action: ActionKind::Fold,
            ..StrategyConfig::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = StrategyConfig {
            defend_rank: 0,
            ..StrategyConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(matches!(
            load_from_str("[thresholds]\nopen_raise = 0.3\n"),
            Err(ConfigError::Parse(_))
        ));
    }
}
