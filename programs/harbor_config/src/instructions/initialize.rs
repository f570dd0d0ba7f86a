use anchor_lang::prelude::*;

use crate::errors::PoolConfigError;
use crate::events::PoolConfigInitialized;
use crate::state::PoolConfig;
use harbor_core::BPS_DENOMINATOR;

/// Create the registry for one pool
#[derive(Accounts)]
#[instruction(params: InitializePoolConfigParams)]
pub struct InitializePoolConfig<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + PoolConfig::INIT_SPACE,
        seeds = [PoolConfig::SEED_PREFIX, &params.pool_id.to_le_bytes()],
        bump
    )]
    pub pool_config: Account<'info, PoolConfig>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct InitializePoolConfigParams {
    pub pool_id: u64,

    pub underlying_mint: Pubkey,

    /// Collaborator addresses; every one must be set at creation
    pub pool: Pubkey,
    pub pool_safe: Pubkey,
    pub senior_tranche: Pubkey,
    pub junior_tranche: Pubkey,
    pub borrower_first_loss_cover: Pubkey,
    pub admin_first_loss_cover: Pubkey,
    pub credit: Pubkey,
    pub fee_manager: Pubkey,

    /// Target annualized senior yield (basis points)
    pub fixed_senior_yield_bps: u16,

    /// Junior profit-share boost (basis points, at most 10000)
    pub tranches_risk_adjustment_bps: u16,

    /// Cap on the junior share of a profit event (basis points, at most 10000)
    pub junior_profit_cap_bps: u16,

    pub liquidity_cap: u64,

    pub max_senior_junior_ratio: u8,
}

fn require_not_zero(key: &Pubkey) -> Result<()> {
    require!(
        *key != Pubkey::default(),
        PoolConfigError::ZeroAddressProvided
    );
    Ok(())
}

pub fn handler(
    ctx: Context<InitializePoolConfig>,
    params: InitializePoolConfigParams,
) -> Result<()> {
    require_not_zero(&params.underlying_mint)?;
    require_not_zero(&params.pool)?;
    require_not_zero(&params.pool_safe)?;
    require_not_zero(&params.senior_tranche)?;
    require_not_zero(&params.junior_tranche)?;
    require_not_zero(&params.borrower_first_loss_cover)?;
    require_not_zero(&params.admin_first_loss_cover)?;
    require_not_zero(&params.credit)?;
    require_not_zero(&params.fee_manager)?;

    require!(
        params.tranches_risk_adjustment_bps as u64 <= BPS_DENOMINATOR,
        PoolConfigError::InvalidBasisPoints
    );
    require!(
        params.junior_profit_cap_bps as u64 <= BPS_DENOMINATOR,
        PoolConfigError::InvalidBasisPoints
    );
    require!(params.liquidity_cap > 0, PoolConfigError::ZeroLiquidityCap);
    require!(
        params.max_senior_junior_ratio > 0,
        PoolConfigError::ZeroSeniorJuniorRatio
    );

    let config = &mut ctx.accounts.pool_config;
    let clock = Clock::get()?;

    config.pool_id = params.pool_id;
    config.owner = ctx.accounts.owner.key();
    config.underlying_mint = params.underlying_mint;
    config.pool = params.pool;
    config.pool_safe = params.pool_safe;
    config.senior_tranche = params.senior_tranche;
    config.junior_tranche = params.junior_tranche;
    config.borrower_first_loss_cover = params.borrower_first_loss_cover;
    config.admin_first_loss_cover = params.admin_first_loss_cover;
    config.credit = params.credit;
    config.fee_manager = params.fee_manager;
    config.fixed_senior_yield_bps = params.fixed_senior_yield_bps;
    config.tranches_risk_adjustment_bps = params.tranches_risk_adjustment_bps;
    config.junior_profit_cap_bps = params.junior_profit_cap_bps;
    config.liquidity_cap = params.liquidity_cap;
    config.max_senior_junior_ratio = params.max_senior_junior_ratio;
    config.bump = ctx.bumps.pool_config;

    emit!(PoolConfigInitialized {
        pool_config: config.key(),
        pool_id: config.pool_id,
        owner: config.owner,
        underlying_mint: config.underlying_mint,
        fixed_senior_yield_bps: config.fixed_senior_yield_bps,
        tranches_risk_adjustment_bps: config.tranches_risk_adjustment_bps,
        liquidity_cap: config.liquidity_cap,
        timestamp: clock.unix_timestamp,
    });

    msg!("Pool config {} initialized", params.pool_id);

    Ok(())
}
