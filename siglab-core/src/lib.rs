//! Siglab Core — single-asset signal backtesting engine.
//!
//! This crate contains the heart of the backtester:
//! - Immutable engine configuration with construction-time validation
//! - Step-wise account simulation (position changes, proportional costs,
//!   mark-to-market P&L)
//! - Performance statistics over the produced series (total return, max
//!   drawdown, annualized Sharpe)
//!
//! The caller supplies aligned `prices` and `signals` series plus a time-step
//! size; signal generation, data loading, and presentation live outside this
//! crate.

pub mod config;
pub mod engine;
pub mod metrics;
pub mod result;

pub use config::{ConfigError, EngineConfig};
pub use engine::run_backtest;
pub use result::BacktestResult;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: public types are Send + Sync, so a configured
    /// engine can be shared across worker threads without wrappers.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<EngineConfig>();
        require_sync::<EngineConfig>();
        require_send::<BacktestResult>();
        require_sync::<BacktestResult>();
        require_send::<ConfigError>();
        require_sync::<ConfigError>();
    }
}
