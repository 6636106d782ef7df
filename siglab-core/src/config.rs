//! Engine configuration — immutable once constructed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from configuration validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("initial_capital must be positive and finite, got {0}")]
    InvalidInitialCapital(f64),
    #[error("transaction_cost_pct must be non-negative and finite, got {0}")]
    InvalidTransactionCost(f64),
    #[error("risk_free_rate must be finite, got {0}")]
    InvalidRiskFreeRate(f64),
}

/// Immutable configuration for a backtest engine.
///
/// A run never mutates the config, so one `EngineConfig` can back any number
/// of independent `run_backtest` calls, concurrently or in sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Starting account equity.
    pub initial_capital: f64,

    /// Proportional transaction cost, as a fraction of traded notional
    /// charged on every position change (0.001 = 10 bps per side).
    pub transaction_cost_pct: f64,

    /// Annual risk-free rate. Carried in the config but not subtracted in
    /// the Sharpe computation: the per-step P&L series is treated as already
    /// being excess returns.
    #[serde(default)]
    pub risk_free_rate: f64,
}

impl EngineConfig {
    /// Build a validated config.
    ///
    /// Fails if the initial capital is not positive, the cost rate is
    /// negative, or any value is non-finite.
    pub fn new(
        initial_capital: f64,
        transaction_cost_pct: f64,
        risk_free_rate: f64,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            initial_capital,
            transaction_cost_pct,
            risk_free_rate,
        };
        config.validate()?;
        Ok(config)
    }

    /// Re-check the field constraints (useful after deserializing).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.initial_capital.is_finite() || self.initial_capital <= 0.0 {
            return Err(ConfigError::InvalidInitialCapital(self.initial_capital));
        }
        if !self.transaction_cost_pct.is_finite() || self.transaction_cost_pct < 0.0 {
            return Err(ConfigError::InvalidTransactionCost(
                self.transaction_cost_pct,
            ));
        }
        if !self.risk_free_rate.is_finite() {
            return Err(ConfigError::InvalidRiskFreeRate(self.risk_free_rate));
        }
        Ok(())
    }
}
