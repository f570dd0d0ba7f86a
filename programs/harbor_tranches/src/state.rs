// programs/harbor_tranches/src/state.rs

use anchor_lang::prelude::*;

use harbor_config::state::{PoolConfig, PoolConfigCache};
use harbor_core::{JUNIOR_TRANCHE, SENIOR_TRANCHE};

/// Profit-distribution strategy for one pool. The two are interchangeable
/// at the distribution call; loss and recovery handling is identical.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum TranchesPolicyKind {
    /// Profit split pro-rata by tranche assets, with the junior share
    /// boosted by the configured risk adjustment
    RiskAdjusted,
    /// Senior accrues a fixed target yield; junior takes the remainder
    FixedSeniorYield,
}

/// Accrual state for the fixed-senior-yield policy.
/// Updated exactly once per profit distribution.
#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace,
)]
pub struct SeniorYieldTracker {
    /// Unix timestamp of the last accrual
    pub last_updated: i64,

    /// Senior entitlement accrued but not yet paid out of profit
    pub unpaid_yield: u64,
}

/// Tranche accounting state for one pool
/// PDA seeds: ["tranches_state", pool_config] (initial registry binding)
#[account]
#[derive(InitSpace)]
pub struct TranchesState {
    /// Currently bound registry
    pub pool_config: Pubkey,

    /// Active profit-distribution strategy
    pub policy: TranchesPolicyKind,

    /// Tranche assets, senior first
    pub assets: [u64; 2],

    /// Cumulative unrecovered losses, senior first
    pub losses: [u64; 2],

    /// Fixed-senior-yield accrual state
    pub yield_tracker: SeniorYieldTracker,

    /// Cached from the registry: pool orchestrator permitted to distribute
    pub cached_pool: Pubkey,

    /// Cached from the registry: senior target yield (bps)
    pub fixed_senior_yield_bps: u16,

    /// Cached from the registry: junior profit-share boost (bps)
    pub tranches_risk_adjustment_bps: u16,

    /// Cached from the registry: cap on the junior profit share (bps)
    pub junior_profit_cap_bps: u16,

    /// Bump seed
    pub bump: u8,
}

impl TranchesState {
    pub const SEED_PREFIX: &'static [u8] = b"tranches_state";

    pub fn total_assets(&self) -> u64 {
        self.assets[SENIOR_TRANCHE].saturating_add(self.assets[JUNIOR_TRANCHE])
    }

    pub fn total_losses(&self) -> u64 {
        self.losses[SENIOR_TRANCHE].saturating_add(self.losses[JUNIOR_TRANCHE])
    }
}

impl PoolConfigCache for TranchesState {
    fn bound_config(&self) -> Pubkey {
        self.pool_config
    }

    fn set_bound_config(&mut self, config: Pubkey) {
        self.pool_config = config;
    }

    fn refresh(&mut self, config: &PoolConfig) -> bool {
        let fresh = (
            config.pool,
            config.fixed_senior_yield_bps,
            config.tranches_risk_adjustment_bps,
            config.junior_profit_cap_bps,
        );
        let current = (
            self.cached_pool,
            self.fixed_senior_yield_bps,
            self.tranches_risk_adjustment_bps,
            self.junior_profit_cap_bps,
        );
        if current == fresh {
            return false;
        }

        self.cached_pool = config.pool;
        self.fixed_senior_yield_bps = config.fixed_senior_yield_bps;
        self.tranches_risk_adjustment_bps = config.tranches_risk_adjustment_bps;
        self.junior_profit_cap_bps = config.junior_profit_cap_bps;
        true
    }
}

// ==================== UNIT TESTS ====================
