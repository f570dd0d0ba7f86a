use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod waterfall;

use instructions::*;
use state::TranchesPolicyKind;

declare_id!("HbTranches1111111111111111111111111111111111");

/// Harbor Credit Protocol - Tranches Program
///
/// Tranche asset/loss accounting and the PnL waterfall engine: the rules
/// that take a single profit, loss, or loss-recovery event and split it
/// deterministically across the senior and junior tranches while conserving
/// value.
///
/// ## Waterfall Ordering
///
/// - Losses: junior absorbs first, senior only after junior is wiped
/// - Recoveries: senior is made whole first, junior after
/// - Profit: policy-dependent (risk-adjusted pro-rata or fixed senior yield)
///
/// The asymmetry preserves subordination: senior capital is the last exposed
/// and the first made whole.
///
/// ## Key Features
///
/// - Pure distribution functions in `waterfall`; instructions only apply
///   returned values and emit events
/// - Two interchangeable profit policies selected per pool at initialization
/// - Pool-gated distribution; registry-owner-gated cache sync/rebind
///
/// ## Integration Points
///
/// - Pool: forwards credit-layer PnL events, applies safe-side effects
/// - Pool Config: source of the cached pool address and rate parameters
#[program]
pub mod harbor_tranches {
    use super::*;

    /// Create the tranche accounting state for one pool
    pub fn initialize_tranches(
        ctx: Context<InitializeTranches>,
        policy: TranchesPolicyKind,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, policy)
    }

    /// Split a profit event across the tranches under the active policy
    pub fn distribute_profit(
        ctx: Context<Distribute>,
        profit: u64,
        next_date: i64,
    ) -> Result<()> {
        instructions::distribution::distribute_profit(ctx, profit, next_date)
    }

    /// Absorb a credit loss, junior-first
    pub fn distribute_loss(ctx: Context<Distribute>, loss: u64) -> Result<()> {
        instructions::distribution::distribute_loss(ctx, loss)
    }

    /// Apply a loss recovery, senior-first
    pub fn distribute_loss_recovery(ctx: Context<Distribute>, recovery: u64) -> Result<()> {
        instructions::distribution::distribute_loss_recovery(ctx, recovery)
    }

    /// Overwrite tranche assets after external deposit/redeem settlement
    pub fn update_tranche_assets(
        ctx: Context<Distribute>,
        senior_assets: u64,
        junior_assets: u64,
    ) -> Result<()> {
        instructions::distribution::update_tranche_assets(ctx, senior_assets, junior_assets)
    }

    /// Refresh cached registry fields from the bound pool config
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
