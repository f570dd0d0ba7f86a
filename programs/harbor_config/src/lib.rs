use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("HbCfg111111111111111111111111111111111111111");

/// Harbor Credit Protocol - Pool Config Registry
///
/// Single source of truth for every collaborator address and tunable
/// parameter of a pool: tranche vaults, first-loss covers, the credit
/// program, the fee manager, yield and risk-adjustment rates, and liquidity
/// limits.
///
/// ## Key Features
///
/// - One `PoolConfig` account per pool, owner-gated updates
/// - Typed getters for the capability whitelist and tranche indices
/// - The `PoolConfigCache` trait dependent programs implement to keep a
///   local, refreshable snapshot of registry values
///
/// ## Integration Points
///
/// - Pool Safe: caches the custodian whitelist
/// - Tranches: caches the pool address and distribution parameters
#[program]
pub mod harbor_config {
    use super::*;

    /// Create the registry for one pool
    pub fn initialize_pool_config(
        ctx: Context<InitializePoolConfig>,
        params: InitializePoolConfigParams,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, params)
    }

    /// Repoint collaborator addresses
    pub fn update_contract_addresses(
        ctx: Context<UpdatePoolConfig>,
        params: UpdateContractAddressesParams,
    ) -> Result<()> {
        instructions::update::update_contract_addresses(ctx, params)
    }

    /// Update the fixed-senior-yield target rate
    pub fn update_yield_params(
        ctx: Context<UpdatePoolConfig>,
        new_fixed_senior_yield_bps: u16,
    ) -> Result<()> {
        instructions::update::update_yield_params(ctx, new_fixed_senior_yield_bps)
    }

    /// Update the risk-adjusted policy parameters
    pub fn update_risk_adjustment(
        ctx: Context<UpdatePoolConfig>,
        new_risk_adjustment_bps: u16,
        new_junior_profit_cap_bps: u16,
    ) -> Result<()> {
        instructions::update::update_risk_adjustment(
            ctx,
            new_risk_adjustment_bps,
            new_junior_profit_cap_bps,
        )
    }

    /// Update liquidity cap and tranche ratio limits
    pub fn update_pool_settings(
        ctx: Context<UpdatePoolConfig>,
        new_liquidity_cap: u64,
        new_max_senior_junior_ratio: u8,
    ) -> Result<()> {
        instructions::update::update_pool_settings(
            ctx,
            new_liquidity_cap,
            new_max_senior_junior_ratio,
        )
    }

    /// Hand the registry to a new owner authority
    pub fn transfer_ownership(ctx: Context<UpdatePoolConfig>, new_owner: Pubkey) -> Result<()> {
        instructions::update::transfer_ownership(ctx, new_owner)
    }
}
