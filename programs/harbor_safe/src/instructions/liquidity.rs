use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount};

use crate::errors::PoolSafeError;
use crate::events::{LiquidityDeposited, LiquidityWithdrawn};
use crate::state::PoolSafeState;

/// Move value into the safe. Only whitelisted custodians may deposit.
#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub pool_safe: Account<'info, PoolSafeState>,

    #[account(
        mut,
        constraint = vault.key() == pool_safe.vault @ PoolSafeError::InvalidVault,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Token account value is pulled from; must be owned by the depositor
    #[account(
        mut,
        constraint = source.mint == pool_safe.underlying_mint @ PoolSafeError::InvalidMint,
    )]
    pub source: Account<'info, TokenAccount>,

    pub depositor: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    require!(
        ctx.accounts
            .pool_safe
            .cached
            .is_custodian(&ctx.accounts.depositor.key()),
        PoolSafeError::Unauthorized
    );

    // Zero deposits succeed but emit no balance-change notification
    if amount == 0 {
        return Ok(());
    }

    let clock = Clock::get()?;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            token::Transfer {
                from: ctx.accounts.source.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.depositor.to_account_info(),
            },
        ),
        amount,
    )?;

    let safe = &mut ctx.accounts.pool_safe;
    safe.total_balance = safe
        .total_balance
        .checked_add(amount)
        .ok_or(PoolSafeError::Overflow)?;

    emit!(LiquidityDeposited {
        pool_safe: safe.key(),
        from: ctx.accounts.depositor.key(),
        amount,
        total_balance: safe.total_balance,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

/// Move value out of the safe. Only whitelisted custodians may withdraw,
/// and never more than the recorded custodial balance.
#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub pool_safe: Account<'info, PoolSafeState>,

    /// CHECK: data-less PDA that owns the custodial vault
    #[account(
        seeds = [PoolSafeState::VAULT_AUTHORITY_SEED, pool_safe.key().as_ref()],
        bump = pool_safe.vault_authority_bump
    )]
    pub vault_authority: AccountInfo<'info>,

    #[account(
        mut,
        constraint = vault.key() == pool_safe.vault @ PoolSafeError::InvalidVault,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Token account receiving the withdrawal
    #[account(
        mut,
        constraint = receiver.mint == pool_safe.underlying_mint @ PoolSafeError::InvalidMint,
    )]
    pub receiver: Account<'info, TokenAccount>,

    pub caller: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let safe = &ctx.accounts.pool_safe;

    require!(
        safe.cached.is_custodian(&ctx.accounts.caller.key()),
        PoolSafeError::Unauthorized
    );
    require!(
        ctx.accounts.receiver.key() != Pubkey::default(),
        PoolSafeError::ZeroAddressProvided
    );
    require!(
        amount <= safe.total_balance,
        PoolSafeError::InsufficientBalance
    );

    if amount == 0 {
        return Ok(());
    }

    let clock = Clock::get()?;
    let safe_key = ctx.accounts.pool_safe.key();

    let seeds = &[
        PoolSafeState::VAULT_AUTHORITY_SEED,
        safe_key.as_ref(),
        &[ctx.accounts.pool_safe.vault_authority_bump],
    ];
    let signer_seeds = &[&seeds[..]];

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            token::Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.receiver.to_account_info(),
                authority: ctx.accounts.vault_authority.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    let safe = &mut ctx.accounts.pool_safe;
    safe.total_balance -= amount;

    emit!(LiquidityWithdrawn {
        pool_safe: safe.key(),
        caller: ctx.accounts.caller.key(),
        to: ctx.accounts.receiver.key(),
        amount,
        total_balance: safe.total_balance,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
