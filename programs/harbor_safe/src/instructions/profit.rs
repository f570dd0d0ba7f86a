use anchor_lang::prelude::*;

use crate::errors::PoolSafeError;
use crate::events::{FeeReserveUpdated, UnprocessedProfitAdded, UnprocessedProfitReset};
use crate::state::PoolSafeState;

/// Pool-only: credit profit to a tranche ahead of its share-price update
#[derive(Accounts)]
pub struct AddUnprocessedProfit<'info> {
    #[account(mut)]
    pub pool_safe: Account<'info, PoolSafeState>,

    /// Pool orchestrator; must match the cached pool address
    pub pool: Signer<'info>,
}

pub fn add_unprocessed_profit(
    ctx: Context<AddUnprocessedProfit>,
    tranche: Pubkey,
    amount: u64,
) -> Result<()> {
    let safe = &mut ctx.accounts.pool_safe;

    require_keys_eq!(
        ctx.accounts.pool.key(),
        safe.cached.pool,
        PoolSafeError::Unauthorized
    );

    let index = safe
        .cached
        .tranche_index_of(&tranche)
        .ok_or(PoolSafeError::InvalidTranche)?;

    safe.unprocessed_profit[index] = safe.unprocessed_profit[index]
        .checked_add(amount)
        .ok_or(PoolSafeError::Overflow)?;

    emit!(UnprocessedProfitAdded {
        pool_safe: safe.key(),
        tranche,
        amount,
        tranche_total: safe.unprocessed_profit[index],
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

/// A tranche vault clears its own unprocessed-profit accumulator after
/// folding the profit into its share price
#[derive(Accounts)]
pub struct ResetUnprocessedProfit<'info> {
    #[account(mut)]
    pub pool_safe: Account<'info, PoolSafeState>,

    /// The tranche vault acting on itself
    pub tranche_vault: Signer<'info>,
}

pub fn reset_unprocessed_profit(ctx: Context<ResetUnprocessedProfit>) -> Result<()> {
    let safe = &mut ctx.accounts.pool_safe;
    let caller = ctx.accounts.tranche_vault.key();

    let index = safe
        .cached
        .tranche_index_of(&caller)
        .ok_or(PoolSafeError::Unauthorized)?;

    let amount_cleared = safe.unprocessed_profit[index];
    safe.unprocessed_profit[index] = 0;

    emit!(UnprocessedProfitReset {
        pool_safe: safe.key(),
        tranche: caller,
        amount_cleared,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

/// Fee-manager-only: record the current fee reserve carved out of the
/// pool-available balance
#[derive(Accounts)]
pub struct UpdateFeeReserve<'info> {
    #[account(mut)]
    pub pool_safe: Account<'info, PoolSafeState>,

    /// Fee manager; must match the cached fee-manager address
    pub fee_manager: Signer<'info>,
}

pub fn update_fee_reserve(ctx: Context<UpdateFeeReserve>, total_fees: u64) -> Result<()> {
    let safe = &mut ctx.accounts.pool_safe;

    require_keys_eq!(
        ctx.accounts.fee_manager.key(),
        safe.cached.fee_manager,
        PoolSafeError::Unauthorized
    );

    let old_fee_reserve = safe.fee_reserve;
    safe.fee_reserve = total_fees;

    emit!(FeeReserveUpdated {
        pool_safe: safe.key(),
        old_fee_reserve,
        new_fee_reserve: total_fees,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
