use anchor_lang::prelude::*;

use crate::errors::TranchesError;
use crate::events::{PoolConfigCacheUpdated, PoolConfigRebound};
use crate::state::TranchesState;
use harbor_config::state::{rebind_cache, PoolConfig, PoolConfigCache};

#[derive(Accounts)]
pub struct SyncPoolConfig<'info> {
    #[account(mut)]
    pub tranches_state: Account<'info, TranchesState>,

    #[account(
        constraint = pool_config.key() == tranches_state.pool_config
            @ TranchesError::InvalidRegistry,
        constraint = pool_config.owner == authority.key() @ TranchesError::Unauthorized,
    )]
    pub pool_config: Account<'info, PoolConfig>,

    pub authority: Signer<'info>,
}

/// Re-read the cached registry fields from the bound pool config.
/// Silently no-ops when nothing changed.
pub fn sync_pool_config(ctx: Context<SyncPoolConfig>) -> Result<()> {
    let state = &mut ctx.accounts.tranches_state;

    if state.refresh(&ctx.accounts.pool_config) {
        emit!(PoolConfigCacheUpdated {
            tranches_state: state.key(),
            pool_config: ctx.accounts.pool_config.key(),
            timestamp: Clock::get()?.unix_timestamp,
        });
    }

    Ok(())
}

#[derive(Accounts)]
pub struct RebindPoolConfig<'info> {
    #[account(mut)]
    pub tranches_state: Account<'info, TranchesState>,

    #[account(
        constraint = new_pool_config.owner == authority.key() @ TranchesError::Unauthorized,
    )]
    pub new_pool_config: Account<'info, PoolConfig>,

    pub authority: Signer<'info>,
}

/// Repoint this component at a different registry instance and refresh the
/// cache from it.
pub fn rebind_pool_config(ctx: Context<RebindPoolConfig>, new_registry: Pubkey) -> Result<()> {
    require!(
        new_registry != Pubkey::default(),
        TranchesError::ZeroAddressProvided
    );
    require_keys_eq!(
        new_registry,
        ctx.accounts.new_pool_config.key(),
        TranchesError::InvalidRegistry
    );

    let state = &mut ctx.accounts.tranches_state;
    let (old_config, cache_updated) = rebind_cache(
        &mut **state,
        new_registry,
        &ctx.accounts.new_pool_config,
    )?;

    emit!(PoolConfigRebound {
        tranches_state: state.key(),
        old_pool_config: old_config,
        new_pool_config: new_registry,
        cache_updated,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Registry rebound: {} -> {}", old_config, new_registry);

    Ok(())
}
