use anchor_lang::prelude::*;

use crate::errors::PoolConfigError;
use crate::events::{
    ContractAddressesUpdated, OwnershipTransferred, PoolSettingsUpdated, RiskAdjustmentUpdated,
    YieldParamsUpdated,
};
use crate::state::PoolConfig;
use harbor_core::BPS_DENOMINATOR;

#[derive(Accounts)]
pub struct UpdatePoolConfig<'info> {
    #[account(
        mut,
        seeds = [PoolConfig::SEED_PREFIX, &pool_config.pool_id.to_le_bytes()],
        bump = pool_config.bump,
        has_one = owner @ PoolConfigError::Unauthorized,
    )]
    pub pool_config: Account<'info, PoolConfig>,

    pub owner: Signer<'info>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct UpdateContractAddressesParams {
    pub pool: Pubkey,
    pub pool_safe: Pubkey,
    pub senior_tranche: Pubkey,
    pub junior_tranche: Pubkey,
    pub borrower_first_loss_cover: Pubkey,
    pub admin_first_loss_cover: Pubkey,
    pub credit: Pubkey,
    pub fee_manager: Pubkey,
}

/// Repoint collaborator addresses. Dependent components pick the change up
/// on their next cache sync.
pub fn update_contract_addresses(
    ctx: Context<UpdatePoolConfig>,
    params: UpdateContractAddressesParams,
) -> Result<()> {
    for key in [
        &params.pool,
        &params.pool_safe,
        &params.senior_tranche,
        &params.junior_tranche,
        &params.borrower_first_loss_cover,
        &params.admin_first_loss_cover,
        &params.credit,
        &params.fee_manager,
    ] {
        require!(
            *key != Pubkey::default(),
            PoolConfigError::ZeroAddressProvided
        );
    }

    let config = &mut ctx.accounts.pool_config;
    let clock = Clock::get()?;

    config.pool = params.pool;
    config.pool_safe = params.pool_safe;
    config.senior_tranche = params.senior_tranche;
    config.junior_tranche = params.junior_tranche;
    config.borrower_first_loss_cover = params.borrower_first_loss_cover;
    config.admin_first_loss_cover = params.admin_first_loss_cover;
    config.credit = params.credit;
    config.fee_manager = params.fee_manager;

    emit!(ContractAddressesUpdated {
        pool_config: config.key(),
        pool: config.pool,
        pool_safe: config.pool_safe,
        senior_tranche: config.senior_tranche,
        junior_tranche: config.junior_tranche,
        borrower_first_loss_cover: config.borrower_first_loss_cover,
        admin_first_loss_cover: config.admin_first_loss_cover,
        credit: config.credit,
        fee_manager: config.fee_manager,
        updater: ctx.accounts.owner.key(),
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

pub fn update_yield_params(
    ctx: Context<UpdatePoolConfig>,
    new_fixed_senior_yield_bps: u16,
) -> Result<()> {
    let config = &mut ctx.accounts.pool_config;
    let clock = Clock::get()?;

    let old_bps = config.fixed_senior_yield_bps;
    config.fixed_senior_yield_bps = new_fixed_senior_yield_bps;

    emit!(YieldParamsUpdated {
        pool_config: config.key(),
        old_fixed_senior_yield_bps: old_bps,
        new_fixed_senior_yield_bps,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Senior yield updated: {} -> {} bps",
        old_bps,
        new_fixed_senior_yield_bps
    );

    Ok(())
}

pub fn update_risk_adjustment(
    ctx: Context<UpdatePoolConfig>,
    new_risk_adjustment_bps: u16,
    new_junior_profit_cap_bps: u16,
) -> Result<()> {
    require!(
        new_risk_adjustment_bps as u64 <= BPS_DENOMINATOR,
        PoolConfigError::InvalidBasisPoints
    );
    require!(
        new_junior_profit_cap_bps as u64 <= BPS_DENOMINATOR,
        PoolConfigError::InvalidBasisPoints
    );

    let config = &mut ctx.accounts.pool_config;
    let clock = Clock::get()?;

    let old_risk = config.tranches_risk_adjustment_bps;
    let old_cap = config.junior_profit_cap_bps;
    config.tranches_risk_adjustment_bps = new_risk_adjustment_bps;
    config.junior_profit_cap_bps = new_junior_profit_cap_bps;

    emit!(RiskAdjustmentUpdated {
        pool_config: config.key(),
        old_risk_adjustment_bps: old_risk,
        new_risk_adjustment_bps,
        old_junior_profit_cap_bps: old_cap,
        new_junior_profit_cap_bps,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

pub fn update_pool_settings(
    ctx: Context<UpdatePoolConfig>,
    new_liquidity_cap: u64,
    new_max_senior_junior_ratio: u8,
) -> Result<()> {
    require!(new_liquidity_cap > 0, PoolConfigError::ZeroLiquidityCap);
    require!(
        new_max_senior_junior_ratio > 0,
        PoolConfigError::ZeroSeniorJuniorRatio
    );

    let config = &mut ctx.accounts.pool_config;
    let clock = Clock::get()?;

    let old_cap = config.liquidity_cap;
    let old_ratio = config.max_senior_junior_ratio;
    config.liquidity_cap = new_liquidity_cap;
    config.max_senior_junior_ratio = new_max_senior_junior_ratio;

    emit!(PoolSettingsUpdated {
        pool_config: config.key(),
        old_liquidity_cap: old_cap,
        new_liquidity_cap,
        old_max_senior_junior_ratio: old_ratio,
        new_max_senior_junior_ratio,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

pub fn transfer_ownership(ctx: Context<UpdatePoolConfig>, new_owner: Pubkey) -> Result<()> {
    require!(
        new_owner != Pubkey::default(),
        PoolConfigError::ZeroAddressProvided
    );

    let config = &mut ctx.accounts.pool_config;
    let clock = Clock::get()?;

    let old_owner = config.owner;
    config.owner = new_owner;

    emit!(OwnershipTransferred {
        pool_config: config.key(),
        old_owner,
        new_owner,
        timestamp: clock.unix_timestamp,
    });

    msg!("Registry owner: {} -> {}", old_owner, new_owner);

    Ok(())
}
