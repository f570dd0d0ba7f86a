use anchor_lang::prelude::*;

#[event]
pub struct PoolConfigInitialized {
    pub pool_config: Pubkey,
    pub pool_id: u64,
    pub owner: Pubkey,
    pub underlying_mint: Pubkey,
    pub fixed_senior_yield_bps: u16,
    pub tranches_risk_adjustment_bps: u16,
    pub liquidity_cap: u64,
    pub timestamp: i64,
}

#[event]
pub struct ContractAddressesUpdated {
    pub pool_config: Pubkey,
    pub pool: Pubkey,
    pub pool_safe: Pubkey,
    pub senior_tranche: Pubkey,
    pub junior_tranche: Pubkey,
    pub borrower_first_loss_cover: Pubkey,
    pub admin_first_loss_cover: Pubkey,
    pub credit: Pubkey,
    pub fee_manager: Pubkey,
    pub updater: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct YieldParamsUpdated {
    pub pool_config: Pubkey,
    pub old_fixed_senior_yield_bps: u16,
    pub new_fixed_senior_yield_bps: u16,
    pub timestamp: i64,
}

#[event]
pub struct RiskAdjustmentUpdated {
    pub pool_config: Pubkey,
    pub old_risk_adjustment_bps: u16,
    pub new_risk_adjustment_bps: u16,
    pub old_junior_profit_cap_bps: u16,
    pub new_junior_profit_cap_bps: u16,
    pub timestamp: i64,
}

#[event]
pub struct PoolSettingsUpdated {
    pub pool_config: Pubkey,
    pub old_liquidity_cap: u64,
    pub new_liquidity_cap: u64,
    pub old_max_senior_junior_ratio: u8,
    pub new_max_senior_junior_ratio: u8,
    pub timestamp: i64,
}

#[event]
pub struct OwnershipTransferred {
    pub pool_config: Pubkey,
    pub old_owner: Pubkey,
    pub new_owner: Pubkey,
    pub timestamp: i64,
}
