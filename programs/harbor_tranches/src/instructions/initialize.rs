use anchor_lang::prelude::*;

use crate::errors::TranchesError;
use crate::events::TranchesInitialized;
use crate::state::{TranchesPolicyKind, TranchesState};
use harbor_config::state::{PoolConfig, PoolConfigCache};

/// Create the tranche accounting state for one pool
#[derive(Accounts)]
pub struct InitializeTranches<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + TranchesState::INIT_SPACE,
        seeds = [TranchesState::SEED_PREFIX, pool_config.key().as_ref()],
        bump
    )]
    pub tranches_state: Account<'info, TranchesState>,

    #[account(
        constraint = pool_config.owner == owner.key() @ TranchesError::Unauthorized,
    )]
    pub pool_config: Account<'info, PoolConfig>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeTranches>, policy: TranchesPolicyKind) -> Result<()> {
    let state = &mut ctx.accounts.tranches_state;
    let config = &ctx.accounts.pool_config;
    let clock = Clock::get()?;

    state.pool_config = config.key();
    state.policy = policy;
    state.assets = [0, 0];
    state.losses = [0, 0];
    state.yield_tracker.last_updated = clock.unix_timestamp;
    state.yield_tracker.unpaid_yield = 0;
    state.bump = ctx.bumps.tranches_state;

    // Populate the cache at construction
    state.refresh(config);

    emit!(TranchesInitialized {
        tranches_state: state.key(),
        pool_config: config.key(),
        policy,
        timestamp: clock.unix_timestamp,
    });

    msg!("Tranches state initialized for pool config {}", config.key());

    Ok(())
}
