//! Step-wise account simulation.
//!
//! One pass over the aligned price/signal series: adopt the signaled
//! position, charge the proportional cost on any change, mark the new
//! position to market against the step's price move, and record everything
//! into the result series. Statistics are computed after the loop from the
//! produced series.

use crate::config::EngineConfig;
use crate::metrics;
use crate::result::BacktestResult;

/// Run a backtest over aligned `prices` and `signals`.
///
/// Signal convention: -1 = short, 0 = flat, +1 = long. Values outside that
/// range are not rejected; they scale the traded notional and the
/// mark-to-market arithmetic as-is. `dt_in_years` is the calendar length of
/// one step (1/252 for daily bars) and only affects Sharpe annualization.
///
/// Degenerate inputs — empty series, a single step, or mismatched lengths —
/// return the default result (empty series, zero statistics) rather than an
/// error: there is nothing tradable in them.
///
/// The config is read-only here, so repeated runs against the same config
/// are independent and order-insensitive.
pub fn run_backtest(
    config: &EngineConfig,
    prices: &[f64],
    signals: &[i32],
    dt_in_years: f64,
) -> BacktestResult {
    let n = prices.len();
    if n <= 1 || signals.len() != n {
        return BacktestResult::default();
    }

    let mut equity_curve = vec![0.0; n];
    let mut pnl = vec![0.0; n];
    let mut position = vec![0; n];

    let mut equity = config.initial_capital;
    let mut current_pos: i32 = 0;

    // Step 0 is the initialization point: flat, no P&L, full capital.
    equity_curve[0] = equity;

    for i in 1..n {
        let desired_pos = signals[i];

        // Position change pays the proportional cost on the traded notional.
        // A -1 → +1 flip trades 2x the price, so the cost scales with the
        // magnitude of the change, not per trade.
        if desired_pos != current_pos {
            let traded_notional = (desired_pos - current_pos).abs() as f64 * prices[i];
            let cost = traded_notional * config.transaction_cost_pct;
            equity -= cost;
            pnl[i] -= cost;
            current_pos = desired_pos;
        }

        // Mark the new position to market: the position adopted this step
        // earns this step's price move.
        let price_change = prices[i] - prices[i - 1];
        let step_pnl = current_pos as f64 * price_change;
        equity += step_pnl;
        pnl[i] += step_pnl;

        position[i] = current_pos;
        equity_curve[i] = equity;
    }

    let total_return = metrics::total_return(&equity_curve);
    let max_drawdown = metrics::max_drawdown(&equity_curve);
    let sharpe_ratio = metrics::sharpe_ratio(&pnl, dt_in_years);

    BacktestResult {
        equity_curve,
        pnl,
        position,
        total_return,
        max_drawdown,
        sharpe_ratio,
    }
}
