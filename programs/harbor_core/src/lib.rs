// programs/harbor_core/src/lib.rs
//
// Harbor Core - Shared Constants and Calendar Utilities
// =====================================================
//
// This module provides:
// - Tranche index constants (senior/junior ordering)
// - Basis-point math helpers
// - Day-count calendar used by the fixed-senior-yield policy
// - Cross-program shared constants

use anchor_lang::prelude::*;

declare_id!("HbCore11111111111111111111111111111111111111");

// =============================================================================
// SUBMODULES
// =============================================================================

/// Day-count and period-boundary calculations
pub mod calendar;

pub use calendar::{days_between, seconds_between};

// =============================================================================
// TRANCHE ORDERING
// =============================================================================

/// Index of the senior tranche in every persisted `[u64; NUM_TRANCHES]` pair.
/// The ordering is load-bearing: senior always precedes junior.
pub const SENIOR_TRANCHE: usize = 0;

/// Index of the junior tranche.
pub const JUNIOR_TRANCHE: usize = 1;

/// Harbor pools have exactly two tranches.
pub const NUM_TRANCHES: usize = 2;

// =============================================================================
// RATE AND TIME CONSTANTS
// =============================================================================

/// Basis-point denominator (10000 = 100%)
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Seconds in a non-leap year, the annualization base for yield accrual
pub const SECONDS_IN_A_YEAR: u64 = 365 * 24 * 60 * 60;

/// Seconds in a day
pub const SECONDS_IN_A_DAY: u64 = 24 * 60 * 60;

/// Days in the annualization year
pub const DAYS_IN_A_YEAR: u64 = 365;

// =============================================================================
// BASIS-POINT MATH
// =============================================================================

/// Apply a basis-point rate to an amount with floor division.
///
/// Truncation always rounds against the recipient, keeping cumulative
/// rounding bias in one direction.
pub fn apply_bps(amount: u64, bps: u16) -> u64 {
    (amount as u128 * bps as u128 / BPS_DENOMINATOR as u128) as u64
}

// ==================== UNIT TESTS ====================
