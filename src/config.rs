use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },
    #[error("Temperature decay must be in (0, 1], got {0}")]
    InvalidDecay(f64),
    #[error("Initial temperature must be finite and non-negative, got {0}")]
    InvalidTemperature(f64),
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
}

/// How the age-proximity term treats candidates without an age target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeTargetFallback {
    /// Missing target means "same age as the requester": full bonus.
    #[default]
    MatchContext,
    /// Missing target earns no age bonus at all.
    NoBonus,
}

// Key point:
// Serializable
// Every field defaulted
// v0() is what the service ships with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub few_shot_k: usize,
    pub result_k: usize,
    pub iterations: usize,
    pub optimizer: OptimizerConfig,
    pub age_target_fallback: AgeTargetFallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    pub initial_temperature: f64,
    pub decay: f64,
    pub prior_amplitude: f64,
    pub prior_frequency: f64,
    /// Survivors per round.
    pub keep: usize,
}

impl EngineConfig {
    pub fn v0() -> Self {
        Self {
            few_shot_k: 5,
            result_k: 5,
            iterations: 6,
            optimizer: OptimizerConfig::default(),
            age_target_fallback: AgeTargetFallback::MatchContext,
        }
    }

    /// Parse a (possibly partial) JSON document and validate it.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.result_k == 0 {
            return Err(ConfigError::Zero { field: "result_k" });
        }
        if self.iterations == 0 {
            return Err(ConfigError::Zero { field: "iterations" });
        }
        self.optimizer.validate()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::v0()
    }
}

impl OptimizerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.keep == 0 {
            return Err(ConfigError::Zero { field: "optimizer.keep" });
        }
        if !(self.decay > 0.0 && self.decay <= 1.0) {
            return Err(ConfigError::InvalidDecay(self.decay));
        }
        if !self.initial_temperature.is_finite() || self.initial_temperature < 0.0 {
            return Err(ConfigError::InvalidTemperature(self.initial_temperature));
        }
        for (field, value) in [
            ("optimizer.prior_amplitude", self.prior_amplitude),
            ("optimizer.prior_frequency", self.prior_frequency),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        Ok(())
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 0.5,
            decay: 0.9,
            prior_amplitude: 0.05,
            prior_frequency: 0.5,
            keep: 5,
        }
    }
}
