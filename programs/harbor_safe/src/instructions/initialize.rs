use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::errors::PoolSafeError;
use crate::events::PoolSafeInitialized;
use crate::state::PoolSafeState;
use harbor_config::state::{PoolConfig, PoolConfigCache};

/// Create the custodial safe for one pool
#[derive(Accounts)]
pub struct InitializePoolSafe<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + PoolSafeState::INIT_SPACE,
        seeds = [PoolSafeState::SEED_PREFIX, pool_config.key().as_ref()],
        bump
    )]
    pub pool_safe: Account<'info, PoolSafeState>,

    #[account(
        constraint = pool_config.owner == owner.key() @ PoolSafeError::Unauthorized,
    )]
    pub pool_config: Account<'info, PoolConfig>,

    /// CHECK: data-less PDA that owns the custodial vault
    #[account(
        seeds = [PoolSafeState::VAULT_AUTHORITY_SEED, pool_safe.key().as_ref()],
        bump
    )]
    pub vault_authority: AccountInfo<'info>,

    #[account(
        init,
        payer = owner,
        token::mint = underlying_mint,
        token::authority = vault_authority,
        seeds = [PoolSafeState::VAULT_SEED, pool_safe.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        constraint = underlying_mint.key() == pool_config.underlying_mint
            @ PoolSafeError::InvalidMint
    )]
    pub underlying_mint: Account<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn handler(ctx: Context<InitializePoolSafe>) -> Result<()> {
    let clock = Clock::get()?;
    let config = &ctx.accounts.pool_config;

    let safe = &mut ctx.accounts.pool_safe;
    safe.pool_config = config.key();
    safe.underlying_mint = ctx.accounts.underlying_mint.key();
    safe.vault = ctx.accounts.vault.key();
    safe.total_balance = 0;
    safe.unprocessed_profit = [0, 0];
    safe.fee_reserve = 0;
    safe.bump = ctx.bumps.pool_safe;
    safe.vault_authority_bump = ctx.bumps.vault_authority;

    // Populate the capability whitelist at construction
    safe.refresh(config);

    emit!(PoolSafeInitialized {
        pool_safe: safe.key(),
        pool_config: config.key(),
        vault: safe.vault,
        underlying_mint: safe.underlying_mint,
        timestamp: clock.unix_timestamp,
    });

    msg!("Pool safe initialized for pool config {}", config.key());

    Ok(())
}
