//! Engine configuration
//!
//! Bundles the fraud and escalation reference tables with engine-level
//! thresholds. Defaults cover a standard deployment; individual values can be
//! overridden from `ENGINE_`-prefixed environment variables. Validation runs
//! once at build time and wires the fail-fast guarantee: a non-monotonic
//! threshold table never reaches scoring code.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use thiserror::Error;

use domain_escalation::{EscalationConfig, EscalationConfigError};
use domain_fraud::{FraudConfig, FraudConfigError};

/// Errors raised while loading or validating engine configuration
#[derive(Debug, Error)]
pub enum EngineConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error(transparent)]
    Fraud(#[from] FraudConfigError),

    #[error(transparent)]
    Escalation(#[from] EscalationConfigError),
}

/// Full engine configuration
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Fraud scoring reference tables
    pub fraud: FraudConfig,
    /// Escalation thresholds
    pub escalation: EscalationConfig,
    /// Estimated amounts above this derive a high-value trigger
    pub high_value_threshold: Decimal,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fraud: FraudConfig::default(),
            escalation: EscalationConfig::default(),
            high_value_threshold: dec!(25000),
        }
    }
}

/// Environment overrides, all optional
#[derive(Debug, Default, Deserialize)]
struct EngineOverrides {
    medium_breakpoint: Option<u32>,
    high_breakpoint: Option<u32>,
    critical_breakpoint: Option<u32>,
    escalation_threshold: Option<u32>,
    auto_deny_score: Option<u32>,
    investigate_score: Option<u32>,
    high_value_threshold: Option<Decimal>,
}

impl EngineConfig {
    /// Validates the nested threshold tables; fails fast, never at scoring time
    pub fn validate(&self) -> Result<(), EngineConfigError> {
        self.fraud.validate()?;
        self.escalation.validate()?;
        Ok(())
    }

    /// Loads configuration from the environment over defaults
    ///
    /// Recognized variables: `ENGINE_MEDIUM_BREAKPOINT`,
    /// `ENGINE_HIGH_BREAKPOINT`, `ENGINE_CRITICAL_BREAKPOINT`,
    /// `ENGINE_ESCALATION_THRESHOLD`, `ENGINE_AUTO_DENY_SCORE`,
    /// `ENGINE_INVESTIGATE_SCORE`, `ENGINE_HIGH_VALUE_THRESHOLD`.
    pub fn from_env() -> Result<Self, EngineConfigError> {
        let overrides: EngineOverrides = config::Config::builder()
            .add_source(config::Environment::with_prefix("ENGINE"))
            .build()?
            .try_deserialize()?;

        let mut engine_config = Self::default();
        if let Some(v) = overrides.medium_breakpoint {
            engine_config.fraud.breakpoints.medium = v;
        }
        if let Some(v) = overrides.high_breakpoint {
            engine_config.fraud.breakpoints.high = v;
        }
        if let Some(v) = overrides.critical_breakpoint {
            engine_config.fraud.breakpoints.critical = v;
        }
        if let Some(v) = overrides.escalation_threshold {
            engine_config.fraud.escalation_threshold = v;
        }
        if let Some(v) = overrides.auto_deny_score {
            engine_config.escalation.auto_deny_score = v;
        }
        if let Some(v) = overrides.investigate_score {
            engine_config.escalation.investigate_score = v;
        }
        if let Some(v) = overrides.high_value_threshold {
            engine_config.high_value_threshold = v;
        }

        engine_config.validate()?;
        Ok(engine_config)
    }
}
