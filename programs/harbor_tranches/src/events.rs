use anchor_lang::prelude::*;

use crate::state::TranchesPolicyKind;

#[event]
pub struct TranchesInitialized {
    pub tranches_state: Pubkey,
    pub pool_config: Pubkey,
    pub policy: TranchesPolicyKind,
    pub timestamp: i64,
}

#[event]
pub struct ProfitDistributed {
    pub tranches_state: Pubkey,
    pub profit: u64,
    pub senior_profit: u64,
    pub junior_profit: u64,
    pub senior_assets: u64,
    pub junior_assets: u64,
    pub total_assets: u64,
    pub unpaid_senior_yield: u64,
    pub timestamp: i64,
}

#[event]
pub struct LossDistributed {
    pub tranches_state: Pubkey,
    pub loss: u64,
    pub senior_absorbed: u64,
    pub junior_absorbed: u64,
    pub senior_assets: u64,
    pub junior_assets: u64,
    pub senior_loss: u64,
    pub junior_loss: u64,
    pub total_assets: u64,
    pub timestamp: i64,
}

#[event]
pub struct LossRecoveryDistributed {
    pub tranches_state: Pubkey,
    pub recovery: u64,
    pub senior_recovered: u64,
    pub junior_recovered: u64,
    /// Recovery beyond outstanding losses, handed back to the pool
    pub remaining_recovery: u64,
    pub senior_assets: u64,
    pub junior_assets: u64,
    pub senior_loss: u64,
    pub junior_loss: u64,
    pub total_assets: u64,
    pub timestamp: i64,
}

#[event]
pub struct TrancheAssetsUpdated {
    pub tranches_state: Pubkey,
    pub old_senior_assets: u64,
    pub old_junior_assets: u64,
    pub senior_assets: u64,
    pub junior_assets: u64,
    pub timestamp: i64,
}

#[event]
pub struct PoolConfigCacheUpdated {
    pub tranches_state: Pubkey,
    pub pool_config: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct PoolConfigRebound {
    pub tranches_state: Pubkey,
    pub old_pool_config: Pubkey,
    pub new_pool_config: Pubkey,
    pub cache_updated: bool,
    pub timestamp: i64,
}
