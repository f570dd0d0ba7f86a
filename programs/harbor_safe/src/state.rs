// programs/harbor_safe/src/state.rs

use anchor_lang::prelude::*;

use harbor_config::state::{CachedPoolAddresses, PoolConfig, PoolConfigCache};
use harbor_core::{JUNIOR_TRANCHE, SENIOR_TRANCHE};

/// Custodial ledger for one pool - sole holder of pool value and the single
/// point of truth for how much can safely be withdrawn.
/// PDA seeds: ["pool_safe", pool_config] (initial registry binding)
#[account]
#[derive(InitSpace)]
pub struct PoolSafeState {
    /// Currently bound registry
    pub pool_config: Pubkey,

    /// Mint of the custodied asset
    pub underlying_mint: Pubkey,

    /// Custodial token account
    pub vault: Pubkey,

    /// Capability whitelist cached from the registry
    pub cached: CachedPoolAddresses,

    /// Recorded custodial value; mirrors the vault token balance 1:1
    pub total_balance: u64,

    /// Profit credited to a tranche but not yet reflected in its share
    /// price, senior first
    pub unprocessed_profit: [u64; 2],

    /// Fee manager's reserve, recorded on its push; carved out of the
    /// pool-available balance
    pub fee_reserve: u64,

    /// Bump seed
    pub bump: u8,

    /// Bump of the vault authority PDA
    pub vault_authority_bump: u8,
}

impl PoolSafeState {
    pub const SEED_PREFIX: &'static [u8] = b"pool_safe";
    pub const VAULT_SEED: &'static [u8] = b"safe_vault";
    pub const VAULT_AUTHORITY_SEED: &'static [u8] = b"safe_vault_authority";

    /// Balance the pool may draw on, net of the fee reserve. Never negative.
    pub fn available_balance_for_pool(&self) -> u64 {
        self.total_balance.saturating_sub(self.fee_reserve)
    }

    /// Headroom the fee manager may draw on. Returns the recorded reserve,
    /// clamped to what is actually held.
    pub fn available_balance_for_fees(&self) -> u64 {
        self.fee_reserve.min(self.total_balance)
    }

    pub fn total_unprocessed_profit(&self) -> u64 {
        self.unprocessed_profit[SENIOR_TRANCHE]
            .saturating_add(self.unprocessed_profit[JUNIOR_TRANCHE])
    }
}

impl PoolConfigCache for PoolSafeState {
    fn bound_config(&self) -> Pubkey {
        self.pool_config
    }

    fn set_bound_config(&mut self, config: Pubkey) {
        self.pool_config = config;
    }

    fn refresh(&mut self, config: &PoolConfig) -> bool {
        let fresh = config.addresses();
        if self.cached == fresh {
            return false;
        }
        self.cached = fresh;
        true
    }
}

// ==================== UNIT TESTS ====================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> PoolSafeState {
        PoolSafeState {
            pool_config: Pubkey::new_from_array([1; 32]),
            underlying_mint: Pubkey::new_from_array([2; 32]),
            vault: Pubkey::new_from_array([3; 32]),
            cached: CachedPoolAddresses {
                pool: Pubkey::new_from_array([4; 32]),
                senior_tranche: Pubkey::new_from_array([5; 32]),
                junior_tranche: Pubkey::new_from_array([6; 32]),
                borrower_first_loss_cover: Pubkey::new_from_array([7; 32]),
                admin_first_loss_cover: Pubkey::new_from_array([8; 32]),
                credit: Pubkey::new_from_array([9; 32]),
                fee_manager: Pubkey::new_from_array([10; 32]),
            },
            total_balance: 1_000_000,
            unprocessed_profit: [40_000, 15_000],
            fee_reserve: 25_000,
            bump: 255,
            vault_authority_bump: 254,
        }
    }

    #[test]
    fn test_available_balance_for_pool() {
        let state = test_state();
        assert_eq!(state.available_balance_for_pool(), 975_000);
    }

    #[test]
    fn test_available_balance_for_pool_reserve_exceeds_balance() {
        let mut state = test_state();
        state.fee_reserve = 2_000_000;
        assert_eq!(state.available_balance_for_pool(), 0);
    }

    #[test]
    fn test_available_balance_for_fees() {
        let state = test_state();
        assert_eq!(state.available_balance_for_fees(), 25_000);

        let mut state = test_state();
        state.fee_reserve = 2_000_000;
        assert_eq!(state.available_balance_for_fees(), 1_000_000);
    }

    #[test]
    fn test_total_unprocessed_profit() {
        let state = test_state();
        assert_eq!(state.total_unprocessed_profit(), 55_000);
    }

    #[test]
    fn test_custodian_check_through_cache() {
        let state = test_state();
        assert!(state.cached.is_custodian(&state.cached.senior_tranche));
        assert!(state.cached.is_custodian(&state.cached.credit));
        assert!(!state.cached.is_custodian(&state.cached.pool));
        assert!(!state.cached.is_custodian(&Pubkey::new_from_array([99; 32])));
    }

    #[test]
    fn test_tranche_index_through_cache() {
        let state = test_state();
        assert_eq!(
            state.cached.tranche_index_of(&state.cached.senior_tranche),
            Some(SENIOR_TRANCHE)
        );
        assert_eq!(
            state.cached.tranche_index_of(&state.cached.junior_tranche),
            Some(JUNIOR_TRANCHE)
        );
        assert_eq!(state.cached.tranche_index_of(&state.cached.fee_manager), None);
    }
}
