use anchor_lang::prelude::*;

use crate::errors::TranchesError;
use crate::events::{
    LossDistributed, LossRecoveryDistributed, ProfitDistributed, TrancheAssetsUpdated,
};
use crate::state::{TranchesPolicyKind, TranchesState};
use crate::waterfall;
use harbor_core::{JUNIOR_TRANCHE, SENIOR_TRANCHE};

/// A single profit/loss/recovery event forwarded by the pool orchestrator
#[derive(Accounts)]
pub struct Distribute<'info> {
    #[account(mut)]
    pub tranches_state: Account<'info, TranchesState>,

    /// Pool orchestrator; must match the cached pool address
    pub pool: Signer<'info>,
}

fn check_pool(state: &TranchesState, pool: &Pubkey) -> Result<()> {
    require_keys_eq!(*pool, state.cached_pool, TranchesError::Unauthorized);
    Ok(())
}

/// Split a profit event across the tranches under the active policy and
/// apply it to tranche assets.
pub fn distribute_profit(ctx: Context<Distribute>, profit: u64, next_date: i64) -> Result<()> {
    let state = &mut ctx.accounts.tranches_state;
    check_pool(state, &ctx.accounts.pool.key())?;
    let clock = Clock::get()?;

    let split = match state.policy {
        TranchesPolicyKind::RiskAdjusted => waterfall::distribute_profit_risk_adjusted(
            profit,
            state.assets,
            state.tranches_risk_adjustment_bps,
            state.junior_profit_cap_bps,
        ),
        TranchesPolicyKind::FixedSeniorYield => {
            let mut tracker = state.yield_tracker;
            let split = waterfall::distribute_profit_fixed_yield(
                profit,
                state.assets,
                state.fixed_senior_yield_bps,
                &mut tracker,
                next_date,
            )?;
            state.yield_tracker = tracker;
            split
        }
    };

    state.assets[SENIOR_TRANCHE] = state.assets[SENIOR_TRANCHE]
        .checked_add(split[SENIOR_TRANCHE])
        .ok_or(TranchesError::Overflow)?;
    state.assets[JUNIOR_TRANCHE] = state.assets[JUNIOR_TRANCHE]
        .checked_add(split[JUNIOR_TRANCHE])
        .ok_or(TranchesError::Overflow)?;

    emit!(ProfitDistributed {
        tranches_state: state.key(),
        profit,
        senior_profit: split[SENIOR_TRANCHE],
        junior_profit: split[JUNIOR_TRANCHE],
        senior_assets: state.assets[SENIOR_TRANCHE],
        junior_assets: state.assets[JUNIOR_TRANCHE],
        total_assets: state.total_assets(),
        unpaid_senior_yield: state.yield_tracker.unpaid_yield,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Profit {} distributed: senior {}, junior {}",
        profit,
        split[SENIOR_TRANCHE],
        split[JUNIOR_TRANCHE]
    );

    Ok(())
}

/// Absorb a credit loss across the tranches, junior-first.
pub fn distribute_loss(ctx: Context<Distribute>, loss: u64) -> Result<()> {
    let state = &mut ctx.accounts.tranches_state;
    check_pool(state, &ctx.accounts.pool.key())?;
    let clock = Clock::get()?;

    let prior_assets = state.assets;
    let (assets, losses) = waterfall::distribute_loss(loss, state.assets, state.losses)?;
    state.assets = assets;
    state.losses = losses;

    let junior_absorbed = prior_assets[JUNIOR_TRANCHE] - assets[JUNIOR_TRANCHE];
    let senior_absorbed = prior_assets[SENIOR_TRANCHE] - assets[SENIOR_TRANCHE];

    emit!(LossDistributed {
        tranches_state: state.key(),
        loss,
        senior_absorbed,
        junior_absorbed,
        senior_assets: state.assets[SENIOR_TRANCHE],
        junior_assets: state.assets[JUNIOR_TRANCHE],
        senior_loss: state.losses[SENIOR_TRANCHE],
        junior_loss: state.losses[JUNIOR_TRANCHE],
        total_assets: state.total_assets(),
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Loss {} absorbed: junior {}, senior {}",
        loss,
        junior_absorbed,
        senior_absorbed
    );

    Ok(())
}

/// Apply a loss recovery across the tranches, senior-first. Any recovery
/// beyond outstanding losses is reported back to the pool via the event for
/// crediting elsewhere.
pub fn distribute_loss_recovery(ctx: Context<Distribute>, recovery: u64) -> Result<()> {
    let state = &mut ctx.accounts.tranches_state;
    check_pool(state, &ctx.accounts.pool.key())?;
    let clock = Clock::get()?;

    let prior_losses = state.losses;
    let (remaining, assets, losses) =
        waterfall::distribute_loss_recovery(recovery, state.assets, state.losses)?;
    state.assets = assets;
    state.losses = losses;

    let senior_recovered = prior_losses[SENIOR_TRANCHE] - losses[SENIOR_TRANCHE];
    let junior_recovered = prior_losses[JUNIOR_TRANCHE] - losses[JUNIOR_TRANCHE];

    emit!(LossRecoveryDistributed {
        tranches_state: state.key(),
        recovery,
        senior_recovered,
        junior_recovered,
        remaining_recovery: remaining,
        senior_assets: state.assets[SENIOR_TRANCHE],
        junior_assets: state.assets[JUNIOR_TRANCHE],
        senior_loss: state.losses[SENIOR_TRANCHE],
        junior_loss: state.losses[JUNIOR_TRANCHE],
        total_assets: state.total_assets(),
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Recovery {} applied: senior {}, junior {}, remaining {}",
        recovery,
        senior_recovered,
        junior_recovered,
        remaining
    );

    Ok(())
}

/// Overwrite tranche assets after external deposit/redeem settlement.
pub fn update_tranche_assets(
    ctx: Context<Distribute>,
    senior_assets: u64,
    junior_assets: u64,
) -> Result<()> {
    let state = &mut ctx.accounts.tranches_state;
    check_pool(state, &ctx.accounts.pool.key())?;
    let clock = Clock::get()?;

    let old = state.assets;
    state.assets = [senior_assets, junior_assets];

    emit!(TrancheAssetsUpdated {
        tranches_state: state.key(),
        old_senior_assets: old[SENIOR_TRANCHE],
        old_junior_assets: old[JUNIOR_TRANCHE],
        senior_assets,
        junior_assets,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
