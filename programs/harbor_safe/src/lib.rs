use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("HbSafe11111111111111111111111111111111111111");

/// Harbor Credit Protocol - Pool Safe Program
///
/// Custodial ledger for one pool: sole holder of pool value and the single
/// point of truth for how much can safely be withdrawn. Every balance
/// mutation is gated by a capability whitelist cached from the pool config
/// registry; all failures are immediate, fail-closed rejections with no
/// partial-apply path.
///
/// ## Key Features
///
/// - SPL vault custody behind a program-derived authority
/// - Recorded balance mirrors the vault token balance 1:1
/// - Per-tranche unprocessed-profit accounting
/// - Fee-reserve carve-out for the availability queries
/// - Registry cache sync/rebind
///
/// ## Integration Points
///
/// - Tranche vaults, first-loss covers, credit, fee manager: whitelisted
///   value movers
/// - Pool: credits unprocessed tranche profit
/// - Pool Config: source of the cached whitelist
#[program]
pub mod harbor_safe {
    use super::*;

    /// Create the custodial safe for one pool
    pub fn initialize_pool_safe(ctx: Context<InitializePoolSafe>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Move value into the safe (custodians only)
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::liquidity::deposit(ctx, amount)
    }

    /// Move value out of the safe (custodians only, never below zero)
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::liquidity::withdraw(ctx, amount)
    }

    /// Credit profit to a tranche ahead of its share-price update (pool only)
    pub fn add_unprocessed_profit(
        ctx: Context<AddUnprocessedProfit>,
        tranche: Pubkey,
        amount: u64,
    ) -> Result<()> {
        instructions::profit::add_unprocessed_profit(ctx, tranche, amount)
    }

    /// Clear the calling tranche vault's own unprocessed-profit accumulator
    pub fn reset_unprocessed_profit(ctx: Context<ResetUnprocessedProfit>) -> Result<()> {
        instructions::profit::reset_unprocessed_profit(ctx)
    }

    /// Record the fee manager's reserve (fee manager only)
    pub fn update_fee_reserve(ctx: Context<UpdateFeeReserve>, total_fees: u64) -> Result<()> {
        instructions::profit::update_fee_reserve(ctx, total_fees)
    }

    /// Refresh the cached whitelist from the bound pool config
    pub fn sync_pool_config(ctx: Context<SyncPoolConfig>) -> Result<()> {
        instructions::config_sync::sync_pool_config(ctx)
    }

    /// Repoint this component at a different registry instance
    pub fn rebind_pool_config(
        ctx: Context<RebindPoolConfig>,
        new_registry: Pubkey,
    ) -> Result<()> {
        instructions::config_sync::rebind_pool_config(ctx, new_registry)
    }
}
