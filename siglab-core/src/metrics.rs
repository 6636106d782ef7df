//! Performance metrics — pure functions that compute run statistics.
//!
//! Every metric is a pure function: series in, scalar out. No dependencies
//! on the engine or configuration, so each can be applied to any equity or
//! P&L series a caller holds.

// ─── Individual metric functions ────────────────────────────────────

/// Total return as a fraction: final / initial - 1.
///
/// The first element of a valid equity curve is the initial capital.
/// Returns 0.0 for curves shorter than 2 elements or a non-positive start.
pub fn total_return(equity_curve: &[f64]) -> f64 {
    if equity_curve.len() < 2 {
        return 0.0;
    }
    let initial = equity_curve[0];
    let final_eq = *equity_curve.last().unwrap();
    if initial <= 0.0 {
        return 0.0;
    }
    final_eq / initial - 1.0
}

/// Maximum drawdown as a positive fraction (0.15 = 15% decline).
///
/// Scans the curve once with a running peak; each value's drawdown is
/// `(peak - value) / peak`. Steps where the running peak is non-positive
/// contribute no drawdown sample, so the scan never divides by zero.
/// Returns 0.0 for an empty, constant, or monotonically rising curve.
pub fn max_drawdown(equity_curve: &[f64]) -> f64 {
    let mut peak = match equity_curve.first() {
        Some(&first) => first,
        None => return 0.0,
    };
    let mut max_dd = 0.0_f64;

    for &eq in equity_curve {
        if eq > peak {
            peak = eq;
        }
        if peak > 0.0 {
            let dd = (peak - eq) / peak;
            if dd > max_dd {
                max_dd = dd;
            }
        }
    }
    max_dd
}

/// Annualized Sharpe ratio of a per-step P&L series.
///
/// Sharpe = mean(pnl) / population_std(pnl) * sqrt(1 / dt_in_years), where
/// `dt_in_years` is the calendar length of one step (1/252 for daily data).
/// All elements enter the statistics, including the always-zero first step.
/// The P&L series is taken as already being excess returns; no risk-free
/// leg is subtracted.
///
/// Returns 0.0 for fewer than 2 steps, a non-positive `dt_in_years`, or a
/// zero-variance series (an all-flat strategy reports 0 rather than NaN).
pub fn sharpe_ratio(pnl: &[f64], dt_in_years: f64) -> f64 {
    if pnl.len() <= 1 || dt_in_years <= 0.0 {
        return 0.0;
    }
    let mean = mean(pnl);
    let std = population_std_dev(pnl);
    if std == 0.0 {
        return 0.0;
    }
    mean / std * (1.0 / dt_in_years).sqrt()
}

// ─── Helpers ────────────────────────────────────────────────────────

pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation: squared deviations divided by N, not N-1.
pub(crate) fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = mean(values);
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
