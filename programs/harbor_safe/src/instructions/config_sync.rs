use anchor_lang::prelude::*;

use crate::errors::PoolSafeError;
use crate::events::{PoolConfigCacheUpdated, PoolConfigRebound};
use crate::state::PoolSafeState;
use harbor_config::state::{rebind_cache, PoolConfig, PoolConfigCache};

#[derive(Accounts)]
pub struct SyncPoolConfig<'info> {
    #[account(mut)]
    pub pool_safe: Account<'info, PoolSafeState>,

    #[account(
        constraint = pool_config.key() == pool_safe.pool_config
            @ PoolSafeError::InvalidRegistry,
        constraint = pool_config.owner == authority.key() @ PoolSafeError::Unauthorized,
    )]
    pub pool_config: Account<'info, PoolConfig>,

    pub authority: Signer<'info>,
}

/// Re-read the capability whitelist from the bound pool config.
/// Silently no-ops when nothing changed.
pub fn sync_pool_config(ctx: Context<SyncPoolConfig>) -> Result<()> {
    let safe = &mut ctx.accounts.pool_safe;

    if safe.refresh(&ctx.accounts.pool_config) {
        emit!(PoolConfigCacheUpdated {
            pool_safe: safe.key(),
            pool_config: ctx.accounts.pool_config.key(),
            timestamp: Clock::get()?.unix_timestamp,
        });
    }

    Ok(())
}

#[derive(Accounts)]
pub struct RebindPoolConfig<'info> {
    #[account(mut)]
    pub pool_safe: Account<'info, PoolSafeState>,

    #[account(
        constraint = new_pool_config.owner == authority.key() @ PoolSafeError::Unauthorized,
    )]
    pub new_pool_config: Account<'info, PoolConfig>,

    pub authority: Signer<'info>,
}

/// Repoint this component at a different registry instance and refresh the
/// cache from it.
pub fn rebind_pool_config(ctx: Context<RebindPoolConfig>, new_registry: Pubkey) -> Result<()> {
    require!(
        new_registry != Pubkey::default(),
        PoolSafeError::ZeroAddressProvided
    );
    require_keys_eq!(
        new_registry,
        ctx.accounts.new_pool_config.key(),
        PoolSafeError::InvalidRegistry
    );

    let safe = &mut ctx.accounts.pool_safe;
    let (old_config, cache_updated) =
        rebind_cache(&mut **safe, new_registry, &ctx.accounts.new_pool_config)?;

    emit!(PoolConfigRebound {
        pool_safe: safe.key(),
        old_pool_config: old_config,
        new_pool_config: new_registry,
        cache_updated,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Registry rebound: {} -> {}", old_config, new_registry);

    Ok(())
}
