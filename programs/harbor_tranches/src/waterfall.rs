// programs/harbor_tranches/src/waterfall.rs
//
// PnL waterfall engine. Pure computation over tranche asset/loss pairs:
// callers apply the returned values, the engine never touches the safe.

use anchor_lang::prelude::*;

use crate::errors::TranchesError;
use crate::state::SeniorYieldTracker;
use harbor_core::{
    apply_bps, seconds_between, BPS_DENOMINATOR, JUNIOR_TRANCHE, SECONDS_IN_A_YEAR, SENIOR_TRANCHE,
};

/// Distribute a loss across the tranches, junior-first.
///
/// Junior absorbs up to its full asset value before any loss reaches senior.
/// Losses accumulate in a separate ledger so a later recovery can unwind
/// them; assets are reduced by exactly the absorbed amounts.
///
/// Fails with `LossExceedsPoolAssets` when the reported loss is larger than
/// the whole pool, surfacing upstream credit-layer bugs instead of clamping.
pub fn distribute_loss(
    loss: u64,
    mut assets: [u64; 2],
    mut losses: [u64; 2],
) -> Result<([u64; 2], [u64; 2])> {
    let total = assets[SENIOR_TRANCHE]
        .checked_add(assets[JUNIOR_TRANCHE])
        .ok_or(TranchesError::Overflow)?;
    require!(loss <= total, TranchesError::LossExceedsPoolAssets);

    let junior_absorbed = loss.min(assets[JUNIOR_TRANCHE]);
    let senior_absorbed = loss - junior_absorbed;

    assets[JUNIOR_TRANCHE] -= junior_absorbed;
    assets[SENIOR_TRANCHE] -= senior_absorbed;

    losses[JUNIOR_TRANCHE] = losses[JUNIOR_TRANCHE]
        .checked_add(junior_absorbed)
        .ok_or(TranchesError::Overflow)?;
    losses[SENIOR_TRANCHE] = losses[SENIOR_TRANCHE]
        .checked_add(senior_absorbed)
        .ok_or(TranchesError::Overflow)?;

    Ok((assets, losses))
}

/// Distribute a loss recovery across the tranches, senior-first.
///
/// The inverse order of loss absorption: senior capital is the last exposed
/// and the first made whole. Returns `(remaining, assets, losses)`; any
/// recovery beyond the outstanding losses is handed back to the caller
/// rather than injected into tranche assets.
pub fn distribute_loss_recovery(
    recovery: u64,
    mut assets: [u64; 2],
    mut losses: [u64; 2],
) -> Result<(u64, [u64; 2], [u64; 2])> {
    let senior_recovered = recovery.min(losses[SENIOR_TRANCHE]);
    losses[SENIOR_TRANCHE] -= senior_recovered;
    assets[SENIOR_TRANCHE] = assets[SENIOR_TRANCHE]
        .checked_add(senior_recovered)
        .ok_or(TranchesError::Overflow)?;

    let junior_recovered = (recovery - senior_recovered).min(losses[JUNIOR_TRANCHE]);
    losses[JUNIOR_TRANCHE] -= junior_recovered;
    assets[JUNIOR_TRANCHE] = assets[JUNIOR_TRANCHE]
        .checked_add(junior_recovered)
        .ok_or(TranchesError::Overflow)?;

    let remaining = recovery - senior_recovered - junior_recovered;

    Ok((remaining, assets, losses))
}

/// Split a profit event under the risk-adjusted policy.
///
/// Junior's pro-rata share is boosted by the configured risk adjustment,
/// then capped at `junior_profit_cap_bps` of the event; senior takes the
/// remainder. Floor division throughout. With no deployed assets the junior
/// tranche, as residual claimant, takes the whole event.
///
/// Returns `[senior_profit, junior_profit]`; the two always sum to `profit`.
pub fn distribute_profit_risk_adjusted(
    profit: u64,
    assets: [u64; 2],
    risk_adjustment_bps: u16,
    junior_profit_cap_bps: u16,
) -> [u64; 2] {
    let total = assets[SENIOR_TRANCHE] as u128 + assets[JUNIOR_TRANCHE] as u128;
    if total == 0 {
        return [0, profit];
    }

    let base_junior = (profit as u128 * assets[JUNIOR_TRANCHE] as u128 / total) as u64;
    let boost = apply_bps(base_junior, risk_adjustment_bps);
    let cap = apply_bps(profit, junior_profit_cap_bps);

    let junior_profit = base_junior.saturating_add(boost).min(cap).min(profit);

    [profit - junior_profit, junior_profit]
}

/// Yield entitlement accrued on the senior deployed-asset base over
/// `[last, next]` at `apr_bps`, annualized over a 365-day year.
///
/// `deployed * apr_bps * elapsed / (10000 * seconds_per_year)`, truncating.
/// Fails with `InvalidTimeRange` when `next` precedes `last`.
pub fn accrue_senior_yield(deployed: u64, apr_bps: u16, last: i64, next: i64) -> Result<u64> {
    let elapsed = seconds_between(last, next).ok_or(TranchesError::InvalidTimeRange)?;

    let accrued = deployed as u128 * apr_bps as u128 * elapsed as u128
        / (BPS_DENOMINATOR as u128 * SECONDS_IN_A_YEAR as u128);

    Ok(accrued as u64)
}

/// Split a profit event under the fixed-senior-yield policy.
///
/// Accrues the senior entitlement since `tracker.last_updated`, pays the
/// outstanding `unpaid_yield` down by `min(profit, unpaid_yield)` to senior,
/// and routes the remainder to junior. Advances `tracker.last_updated` to
/// `next_date`; this tracker is the engine's only mutable state.
///
/// Returns `[senior_profit, junior_profit]`; the two always sum to `profit`.
pub fn distribute_profit_fixed_yield(
    profit: u64,
    assets: [u64; 2],
    apr_bps: u16,
    tracker: &mut SeniorYieldTracker,
    next_date: i64,
) -> Result<[u64; 2]> {
    let accrued = accrue_senior_yield(
        assets[SENIOR_TRANCHE],
        apr_bps,
        tracker.last_updated,
        next_date,
    )?;

    tracker.unpaid_yield = tracker
        .unpaid_yield
        .checked_add(accrued)
        .ok_or(TranchesError::Overflow)?;

    let senior_profit = profit.min(tracker.unpaid_yield);
    tracker.unpaid_yield -= senior_profit;
    tracker.last_updated = next_date;

    Ok([senior_profit, profit - senior_profit])
}

// ==================== UNIT TESTS ====================

#[cfg(test)]
mod tests {
    use super::*;

    const SENIOR: usize = SENIOR_TRANCHE;
    const JUNIOR: usize = JUNIOR_TRANCHE;

    fn sum(pair: [u64; 2]) -> u64 {
        pair[0] + pair[1]
    }

    // ==================== LOSS DISTRIBUTION ====================

    #[test]
    fn loss_fully_absorbed_by_junior() {
        let (assets, losses) = distribute_loss(27_937, [300_000, 100_000], [0, 0]).unwrap();

        assert_eq!(assets[SENIOR], 300_000);
        assert_eq!(assets[JUNIOR], 72_063);
        assert_eq!(losses[SENIOR], 0);
        assert_eq!(losses[JUNIOR], 27_937);
    }

    #[test]
    fn loss_spills_into_senior_after_junior_wiped() {
        let (assets, losses) = distribute_loss(153_648, [300_000, 100_000], [0, 0]).unwrap();

        assert_eq!(assets[JUNIOR], 0);
        assert_eq!(losses[JUNIOR], 100_000);
        assert_eq!(assets[SENIOR], 246_352);
        assert_eq!(losses[SENIOR], 53_648);
    }

    #[test]
    fn loss_conserves_total_value() {
        for loss in [0u64, 1, 99_999, 100_000, 100_001, 400_000] {
            let (assets, _) = distribute_loss(loss, [300_000, 100_000], [0, 0]).unwrap();
            assert_eq!(sum(assets), 400_000 - loss);
        }
    }

    #[test]
    fn loss_equal_to_total_zeroes_both_tranches() {
        let (assets, losses) = distribute_loss(400_000, [300_000, 100_000], [0, 0]).unwrap();

        assert_eq!(assets, [0, 0]);
        assert_eq!(losses, [300_000, 100_000]);
    }

    #[test]
    fn loss_exceeding_total_is_rejected() {
        let result = distribute_loss(400_001, [300_000, 100_000], [0, 0]);
        assert!(result.is_err());
    }

    #[test]
    fn loss_accumulates_across_events() {
        let (assets, losses) = distribute_loss(27_937, [300_000, 100_000], [0, 0]).unwrap();
        let (assets, losses) = distribute_loss(72_063, assets, losses).unwrap();

        assert_eq!(assets[JUNIOR], 0);
        assert_eq!(losses[JUNIOR], 100_000);
        assert_eq!(assets[SENIOR], 300_000);
        assert_eq!(losses[SENIOR], 0);
    }

    #[test]
    fn zero_loss_is_a_no_op() {
        let (assets, losses) = distribute_loss(0, [300_000, 100_000], [5, 7]).unwrap();
        assert_eq!(assets, [300_000, 100_000]);
        assert_eq!(losses, [5, 7]);
    }

    // ==================== LOSS RECOVERY ====================

    #[test]
    fn recovery_pays_senior_before_junior() {
        // Continue from the 153_648 loss: senior loss 53_648, junior loss 100_000
        let (remaining, assets, losses) =
            distribute_loss_recovery(17_937, [246_352, 0], [53_648, 100_000]).unwrap();

        assert_eq!(remaining, 0);
        assert_eq!(losses[SENIOR], 35_711);
        assert_eq!(assets[SENIOR], 264_289);
        // Junior untouched while senior loss is outstanding
        assert_eq!(losses[JUNIOR], 100_000);
        assert_eq!(assets[JUNIOR], 0);
    }

    #[test]
    fn recovery_spills_into_junior_after_senior_whole() {
        let (remaining, assets, losses) =
            distribute_loss_recovery(80_000, [246_352, 0], [53_648, 100_000]).unwrap();

        assert_eq!(remaining, 0);
        assert_eq!(losses[SENIOR], 0);
        assert_eq!(assets[SENIOR], 300_000);
        assert_eq!(losses[JUNIOR], 100_000 - 26_352);
        assert_eq!(assets[JUNIOR], 26_352);
    }

    #[test]
    fn recovery_excess_is_returned_not_injected() {
        let (remaining, assets, losses) =
            distribute_loss_recovery(200_000, [246_352, 0], [53_648, 100_000]).unwrap();

        assert_eq!(remaining, 200_000 - 153_648);
        assert_eq!(losses, [0, 0]);
        assert_eq!(assets, [300_000, 100_000]);
    }

    #[test]
    fn recovery_with_no_outstanding_loss_passes_through() {
        let (remaining, assets, losses) =
            distribute_loss_recovery(5_000, [300_000, 100_000], [0, 0]).unwrap();

        assert_eq!(remaining, 5_000);
        assert_eq!(assets, [300_000, 100_000]);
        assert_eq!(losses, [0, 0]);
    }

    #[test]
    fn loss_then_equal_recovery_round_trips() {
        let initial = [300_000u64, 100_000u64];
        for loss in [1u64, 50_000, 100_000, 153_648, 400_000] {
            let (assets, losses) = distribute_loss(loss, initial, [0, 0]).unwrap();
            let (remaining, assets, losses) =
                distribute_loss_recovery(loss, assets, losses).unwrap();

            assert_eq!(remaining, 0);
            assert_eq!(assets, initial);
            assert_eq!(losses, [0, 0]);
        }
    }

    // ==================== RISK-ADJUSTED PROFIT ====================

    #[test]
    fn risk_adjusted_zero_adjustment_is_pro_rata() {
        let split = distribute_profit_risk_adjusted(40_000, [300_000, 100_000], 0, 10_000);

        assert_eq!(split, [30_000, 10_000]);
    }

    #[test]
    fn risk_adjusted_boost_shifts_profit_to_junior() {
        // 20% boost on junior's 10_000 pro-rata share
        let split = distribute_profit_risk_adjusted(40_000, [300_000, 100_000], 2_000, 10_000);

        assert_eq!(split[JUNIOR], 12_000);
        assert_eq!(split[SENIOR], 28_000);
    }

    #[test]
    fn risk_adjusted_cap_binds() {
        // Cap junior at 26% of the event; the boosted share (30%) exceeds it
        let split = distribute_profit_risk_adjusted(40_000, [300_000, 100_000], 2_000, 2_600);

        assert_eq!(split[JUNIOR], 10_400);
        assert_eq!(split[SENIOR], 29_600);
    }

    #[test]
    fn risk_adjusted_conserves_profit() {
        for (profit, assets, adj, cap) in [
            (40_000u64, [300_000u64, 100_000u64], 2_000u16, 10_000u16),
            (1, [300_000, 100_000], 2_000, 10_000),
            (7, [1, 2], 9_999, 10_000),
            (123_457, [999_999, 1], 0, 500),
        ] {
            let split = distribute_profit_risk_adjusted(profit, assets, adj, cap);
            assert_eq!(sum(split), profit);
        }
    }

    #[test]
    fn risk_adjusted_empty_pool_pays_junior() {
        let split = distribute_profit_risk_adjusted(40_000, [0, 0], 2_000, 10_000);
        assert_eq!(split, [0, 40_000]);
    }

    #[test]
    fn risk_adjusted_junior_never_exceeds_profit() {
        // All assets junior, full boost: share would overshoot without the
        // final clamp to the event size
        let split = distribute_profit_risk_adjusted(40_000, [0, 100_000], 10_000, 10_000);
        assert_eq!(split, [0, 40_000]);
    }

    // ==================== FIXED SENIOR YIELD ====================

    const YEAR: i64 = SECONDS_IN_A_YEAR as i64;

    #[test]
    fn yield_accrual_exact_full_year() {
        // 8% on 300_000 over one year
        let accrued = accrue_senior_yield(300_000, 800, 0, YEAR).unwrap();
        assert_eq!(accrued, 24_000);
    }

    #[test]
    fn yield_accrual_truncates() {
        // 8% on 300_000 over one second: 24_000 / 31_536_000 floors to zero
        let accrued = accrue_senior_yield(300_000, 800, 0, 1).unwrap();
        assert_eq!(accrued, 0);

        // At this rate one unit accrues every 1314 seconds; one second short
        // of the boundary still floors down
        assert_eq!(accrue_senior_yield(300_000, 800, 0, 1_313).unwrap(), 0);
        assert_eq!(accrue_senior_yield(300_000, 800, 0, 1_314).unwrap(), 1);
    }

    #[test]
    fn yield_accrual_rejects_reversed_range() {
        let result = accrue_senior_yield(300_000, 800, 100, 99);
        assert!(result.is_err());
    }

    #[test]
    fn yield_accrual_zero_elapsed_is_zero() {
        assert_eq!(accrue_senior_yield(300_000, 800, 500, 500).unwrap(), 0);
    }

    #[test]
    fn fixed_yield_pays_senior_entitlement_first() {
        let mut tracker = SeniorYieldTracker {
            last_updated: 0,
            unpaid_yield: 0,
        };

        // One year at 8% on 300_000 accrues 24_000; profit covers it
        let split =
            distribute_profit_fixed_yield(40_000, [300_000, 100_000], 800, &mut tracker, YEAR)
                .unwrap();

        assert_eq!(split[SENIOR], 24_000);
        assert_eq!(split[JUNIOR], 16_000);
        assert_eq!(tracker.unpaid_yield, 0);
        assert_eq!(tracker.last_updated, YEAR);
    }

    #[test]
    fn fixed_yield_shortfall_carries_forward() {
        let mut tracker = SeniorYieldTracker {
            last_updated: 0,
            unpaid_yield: 0,
        };

        // Entitlement 24_000, profit only 10_000: all of it goes senior
        let split =
            distribute_profit_fixed_yield(10_000, [300_000, 100_000], 800, &mut tracker, YEAR)
                .unwrap();

        assert_eq!(split, [10_000, 0]);
        assert_eq!(tracker.unpaid_yield, 14_000);

        // Next event with no elapsed time pays the carried shortfall
        let split =
            distribute_profit_fixed_yield(20_000, [300_000, 100_000], 800, &mut tracker, YEAR)
                .unwrap();

        assert_eq!(split, [14_000, 6_000]);
        assert_eq!(tracker.unpaid_yield, 0);
    }

    #[test]
    fn fixed_yield_reduction_never_exceeds_profit() {
        let mut tracker = SeniorYieldTracker {
            last_updated: 0,
            unpaid_yield: 50_000,
        };

        let before = tracker.unpaid_yield;
        let profit = 7_000;
        let split =
            distribute_profit_fixed_yield(profit, [300_000, 100_000], 800, &mut tracker, YEAR)
                .unwrap();

        assert_eq!(split[SENIOR], profit);
        // Accrual added 24_000, payout removed at most `profit`
        assert_eq!(tracker.unpaid_yield, before + 24_000 - profit);
    }

    #[test]
    fn fixed_yield_conserves_profit() {
        for profit in [0u64, 1, 10_000, 24_000, 100_000] {
            let mut tracker = SeniorYieldTracker {
                last_updated: 0,
                unpaid_yield: 3,
            };
            let split =
                distribute_profit_fixed_yield(profit, [300_000, 100_000], 800, &mut tracker, YEAR)
                    .unwrap();
            assert_eq!(sum(split), profit);
        }
    }

    #[test]
    fn fixed_yield_rejects_reversed_range_without_mutating() {
        let mut tracker = SeniorYieldTracker {
            last_updated: 1_000,
            unpaid_yield: 42,
        };

        let result = distribute_profit_fixed_yield(5_000, [300_000, 100_000], 800, &mut tracker, 999);

        assert!(result.is_err());
        assert_eq!(tracker.last_updated, 1_000);
        assert_eq!(tracker.unpaid_yield, 42);
    }

    #[test]
    fn fixed_yield_zero_rate_routes_all_to_junior() {
        let mut tracker = SeniorYieldTracker {
            last_updated: 0,
            unpaid_yield: 0,
        };

        let split =
            distribute_profit_fixed_yield(40_000, [300_000, 100_000], 0, &mut tracker, YEAR)
                .unwrap();

        assert_eq!(split, [0, 40_000]);
    }
}
