//! Backtest output — aligned series plus summary statistics.

use serde::{Deserialize, Serialize};

/// Complete result of a single backtest run.
///
/// The three series are always the same length: `prices.len()` on a valid
/// run, empty for degenerate inputs. Index 0 is the initialization point
/// (flat position, zero P&L, equity at the starting capital); from index 1
/// on, `position[i]` is the signal adopted at step i.
///
/// A result is produced whole by one `run_backtest` call and never mutated
/// afterward.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BacktestResult {
    /// Account equity at each step, starting at the initial capital.
    pub equity_curve: Vec<f64>,

    /// Per-step profit and loss, costs included. A step that changes
    /// position carries both the cost and the price-move component.
    pub pnl: Vec<f64>,

    /// Realized position held during each step (-1 short, 0 flat, +1 long).
    pub position: Vec<i32>,

    /// Final equity over initial capital, minus one.
    pub total_return: f64,

    /// Largest fractional decline from a running equity peak, in [0, 1]
    /// while equity stays positive.
    pub max_drawdown: f64,

    /// Annualized Sharpe ratio of the per-step P&L series.
    pub sharpe_ratio: f64,
}

impl BacktestResult {
    /// Number of steps in the run (0 for the degenerate result).
    pub fn len(&self) -> usize {
        self.equity_curve.len()
    }

    /// True for the degenerate result returned on malformed input arity.
    pub fn is_empty(&self) -> bool {
        self.equity_curve.is_empty()
    }

    /// Final account equity, if the run produced any steps.
    pub fn final_equity(&self) -> Option<f64> {
        self.equity_curve.last().copied()
    }
}
