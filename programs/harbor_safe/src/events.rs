use anchor_lang::prelude::*;

#[event]
pub struct PoolSafeInitialized {
    pub pool_safe: Pubkey,
    pub pool_config: Pubkey,
    pub vault: Pubkey,
    pub underlying_mint: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct LiquidityDeposited {
    pub pool_safe: Pubkey,
    pub from: Pubkey,
    pub amount: u64,
    pub total_balance: u64,
    pub timestamp: i64,
}

#[event]
pub struct LiquidityWithdrawn {
    pub pool_safe: Pubkey,
    pub caller: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
    pub total_balance: u64,
    pub timestamp: i64,
}

#[event]
pub struct UnprocessedProfitAdded {
    pub pool_safe: Pubkey,
    pub tranche: Pubkey,
    pub amount: u64,
    pub tranche_total: u64,
    pub timestamp: i64,
}

#[event]
pub struct UnprocessedProfitReset {
    pub pool_safe: Pubkey,
    pub tranche: Pubkey,
    pub amount_cleared: u64,
    pub timestamp: i64,
}

#[event]
pub struct FeeReserveUpdated {
    pub pool_safe: Pubkey,
    pub old_fee_reserve: u64,
    pub new_fee_reserve: u64,
    pub timestamp: i64,
}

#[event]
pub struct PoolConfigCacheUpdated {
    pub pool_safe: Pubkey,
    pub pool_config: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct PoolConfigRebound {
    pub pool_safe: Pubkey,
    pub old_pool_config: Pubkey,
    pub new_pool_config: Pubkey,
    pub cache_updated: bool,
    pub timestamp: i64,
}
