//! Property tests for engine invariants.
//!
//! Uses proptest to verify:
//! 1. Output series always share the input length
//! 2. Equity identity — each step's equity move equals that step's P&L
//! 3. Position adoption — position[i] mirrors signals[i] from step 1 on
//! 4. All-flat neutrality — zero signals leave the account untouched
//! 5. Drawdown stays a fraction in [0, 1] and is scale-invariant
//! 6. Flip cost is exactly double a single transition's cost

use proptest::collection::vec;
use proptest::prelude::*;
use siglab_core::{run_backtest, EngineConfig};

const DT_DAILY: f64 = 1.0 / 252.0;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_price() -> impl Strategy<Value = f64> {
    (10.0..500.0_f64).prop_map(|p| (p * 100.0).round() / 100.0)
}

fn arb_signal() -> impl Strategy<Value = i32> {
    -1..=1_i32
}

fn arb_series() -> impl Strategy<Value = (Vec<f64>, Vec<i32>)> {
    (2..120_usize).prop_flat_map(|n| (vec(arb_price(), n), vec(arb_signal(), n)))
}

fn default_config() -> EngineConfig {
    EngineConfig::new(100_000.0, 0.001, 0.0).unwrap()
}

// ── 1. Output shape ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn output_series_share_input_length((prices, signals) in arb_series()) {
        let result = run_backtest(&default_config(), &prices, &signals, DT_DAILY);
        prop_assert_eq!(result.equity_curve.len(), prices.len());
        prop_assert_eq!(result.pnl.len(), prices.len());
        prop_assert_eq!(result.position.len(), prices.len());
    }

    #[test]
    fn initialization_step_is_fixed((prices, signals) in arb_series()) {
        let result = run_backtest(&default_config(), &prices, &signals, DT_DAILY);
        prop_assert_eq!(result.position[0], 0);
        prop_assert_eq!(result.pnl[0], 0.0);
        prop_assert_eq!(result.equity_curve[0], 100_000.0);
    }
}

// ── 2. Equity identity ───────────────────────────────────────────────

proptest! {
    #[test]
    fn equity_delta_equals_step_pnl((prices, signals) in arb_series()) {
        let result = run_backtest(&default_config(), &prices, &signals, DT_DAILY);
        for i in 1..result.len() {
            let delta = result.equity_curve[i] - result.equity_curve[i - 1];
            prop_assert!((delta - result.pnl[i]).abs() < 1e-9);
        }
    }
}

// ── 3. Position adoption ─────────────────────────────────────────────

proptest! {
    #[test]
    fn position_mirrors_signals((prices, signals) in arb_series()) {
        let result = run_backtest(&default_config(), &prices, &signals, DT_DAILY);
        prop_assert_eq!(&result.position[1..], &signals[1..]);
    }
}

// ── 4. All-flat neutrality ───────────────────────────────────────────

proptest! {
    #[test]
    fn flat_signals_leave_account_untouched(prices in vec(arb_price(), 2..120)) {
        let signals = vec![0; prices.len()];
        let result = run_backtest(&default_config(), &prices, &signals, DT_DAILY);
        prop_assert!(result.pnl.iter().all(|&p| p == 0.0));
        prop_assert!(result.equity_curve.iter().all(|&e| e == 100_000.0));
        prop_assert_eq!(result.total_return, 0.0);
        prop_assert_eq!(result.max_drawdown, 0.0);
        prop_assert_eq!(result.sharpe_ratio, 0.0);
    }
}

// ── 5. Drawdown range and scale invariance ──────────────────────────

proptest! {
    #[test]
    fn drawdown_is_a_fraction_while_equity_positive((prices, signals) in arb_series()) {
        let result = run_backtest(&default_config(), &prices, &signals, DT_DAILY);
        // With 100k capital and bounded prices, equity stays positive here.
        prop_assert!(result.equity_curve.iter().all(|&e| e > 0.0));
        prop_assert!(result.max_drawdown >= 0.0);
        prop_assert!(result.max_drawdown <= 1.0);
    }

    #[test]
    fn drawdown_is_scale_invariant(
        (prices, signals) in arb_series(),
        scale in 0.1..50.0_f64,
    ) {
        let result = run_backtest(&default_config(), &prices, &signals, DT_DAILY);
        let scaled: Vec<f64> = result.equity_curve.iter().map(|e| e * scale).collect();
        let dd = siglab_core::metrics::max_drawdown(&result.equity_curve);
        let dd_scaled = siglab_core::metrics::max_drawdown(&scaled);
        prop_assert!((dd - dd_scaled).abs() < 1e-9);
    }
}

// ── 6. Flip cost doubling ────────────────────────────────────────────

proptest! {
    #[test]
    fn flip_cost_doubles_single_transition(price in arb_price()) {
        let config = default_config();
        let prices = vec![price; 3];

        let enter = run_backtest(&config, &prices, &[0, 1, 1], DT_DAILY);
        let flip = run_backtest(&config, &prices, &[0, -1, 1], DT_DAILY);

        // Flat prices isolate the cost terms.
        let enter_cost = -enter.pnl[1];
        let flip_cost = -flip.pnl[2];
        prop_assert!((flip_cost - 2.0 * enter_cost).abs() < 1e-9);
    }
}
