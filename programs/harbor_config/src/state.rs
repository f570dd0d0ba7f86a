// programs/harbor_config/src/state.rs

use anchor_lang::prelude::*;

use crate::errors::PoolConfigError;
use harbor_core::{JUNIOR_TRANCHE, SENIOR_TRANCHE};

/// Pool configuration registry - single source of truth for every collaborator
/// address and tunable parameter of one Harbor pool.
/// PDA seeds: ["pool_config", pool_id]
#[account]
#[derive(InitSpace)]
pub struct PoolConfig {
    /// Pool identifier, part of the PDA seeds
    pub pool_id: u64,

    /// Owner authority permitted to update the registry and to drive
    /// dependent-cache synchronization
    pub owner: Pubkey,

    /// Mint of the pool's underlying asset
    pub underlying_mint: Pubkey,

    /// Pool orchestrator
    pub pool: Pubkey,

    /// Custodial ledger (pool safe)
    pub pool_safe: Pubkey,

    /// Senior tranche vault
    pub senior_tranche: Pubkey,

    /// Junior tranche vault
    pub junior_tranche: Pubkey,

    /// Borrower-posted first-loss cover
    pub borrower_first_loss_cover: Pubkey,

    /// Admin-posted first-loss cover
    pub admin_first_loss_cover: Pubkey,

    /// Credit program reporting profit/loss/recovery per period
    pub credit: Pubkey,

    /// Pool fee manager
    pub fee_manager: Pubkey,

    /// Target annualized senior yield in basis points
    /// (fixed-senior-yield policy only)
    pub fixed_senior_yield_bps: u16,

    /// Risk adjustment boosting the junior tranche's profit share (bps)
    pub tranches_risk_adjustment_bps: u16,

    /// Maximum share of a single profit event the junior tranche may take (bps)
    pub junior_profit_cap_bps: u16,

    /// Total deposit cap across both tranches
    pub liquidity_cap: u64,

    /// Maximum senior:junior asset ratio allowed at deposit time
    pub max_senior_junior_ratio: u8,

    /// Bump seed
    pub bump: u8,
}

impl PoolConfig {
    pub const SEED_PREFIX: &'static [u8] = b"pool_config";

    /// 100% = junior share of a profit event is uncapped
    pub const DEFAULT_JUNIOR_PROFIT_CAP_BPS: u16 = 10_000;

    pub const DEFAULT_MAX_SENIOR_JUNIOR_RATIO: u8 = 4;

    pub fn is_tranche_vault(&self, key: &Pubkey) -> bool {
        self.tranche_index_of(key).is_some()
    }

    /// Maps a tranche vault address onto its persisted-pair index.
    pub fn tranche_index_of(&self, key: &Pubkey) -> Option<usize> {
        if *key == self.senior_tranche {
            Some(SENIOR_TRANCHE)
        } else if *key == self.junior_tranche {
            Some(JUNIOR_TRANCHE)
        } else {
            None
        }
    }

    /// Snapshot of the address fields dependent components cache locally.
    pub fn addresses(&self) -> CachedPoolAddresses {
        CachedPoolAddresses {
            pool: self.pool,
            senior_tranche: self.senior_tranche,
            junior_tranche: self.junior_tranche,
            borrower_first_loss_cover: self.borrower_first_loss_cover,
            admin_first_loss_cover: self.admin_first_loss_cover,
            credit: self.credit,
            fee_manager: self.fee_manager,
        }
    }
}

/// Local copy of the registry's address fields, embedded in every dependent
/// component's state. Mutated only by the sync/rebind operations.
#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace,
)]
pub struct CachedPoolAddresses {
    pub pool: Pubkey,
    pub senior_tranche: Pubkey,
    pub junior_tranche: Pubkey,
    pub borrower_first_loss_cover: Pubkey,
    pub admin_first_loss_cover: Pubkey,
    pub credit: Pubkey,
    pub fee_manager: Pubkey,
}

impl CachedPoolAddresses {
    /// Capability whitelist for custodial balance mutation: the tranche
    /// vaults, both first-loss covers, the credit program, and the fee
    /// manager. The pool itself moves value only indirectly.
    pub fn is_custodian(&self, key: &Pubkey) -> bool {
        *key == self.senior_tranche
            || *key == self.junior_tranche
            || *key == self.borrower_first_loss_cover
            || *key == self.admin_first_loss_cover
            || *key == self.credit
            || *key == self.fee_manager
    }

    pub fn tranche_index_of(&self, key: &Pubkey) -> Option<usize> {
        if *key == self.senior_tranche {
            Some(SENIOR_TRANCHE)
        } else if *key == self.junior_tranche {
            Some(JUNIOR_TRANCHE)
        } else {
            None
        }
    }
}

/// The config-cache capability, implemented once by every component that
/// keeps a local copy of registry values.
pub trait PoolConfigCache {
    /// Key of the currently bound registry account.
    fn bound_config(&self) -> Pubkey;

    fn set_bound_config(&mut self, config: Pubkey);

    /// Re-read every cached field from the registry. Returns true when any
    /// cached value actually changed.
    fn refresh(&mut self, config: &PoolConfig) -> bool;
}

/// Repoint a component at a different registry and refresh its cache.
///
/// The zero-key check runs before any write, so a rejected rebind leaves the
/// prior binding and cache untouched. Returns the previously bound registry
/// key and whether the refresh changed any cached field.
pub fn rebind_cache<C: PoolConfigCache>(
    cache: &mut C,
    new_key: Pubkey,
    new_config: &PoolConfig,
) -> Result<(Pubkey, bool)> {
    require!(
        new_key != Pubkey::default(),
        PoolConfigError::ZeroAddressProvided
    );
    let old_key = cache.bound_config();
    cache.set_bound_config(new_key);
    let changed = cache.refresh(new_config);
    Ok((old_key, changed))
}

// ==================== UNIT TESTS ====================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> PoolConfig {
        PoolConfig {
            pool_id: 1,
            owner: Pubkey::new_from_array([1; 32]),
            underlying_mint: Pubkey::new_from_array([2; 32]),
            pool: Pubkey::new_from_array([3; 32]),
            pool_safe: Pubkey::new_from_array([4; 32]),
            senior_tranche: Pubkey::new_from_array([5; 32]),
            junior_tranche: Pubkey::new_from_array([6; 32]),
            borrower_first_loss_cover: Pubkey::new_from_array([7; 32]),
            admin_first_loss_cover: Pubkey::new_from_array([8; 32]),
            credit: Pubkey::new_from_array([9; 32]),
            fee_manager: Pubkey::new_from_array([10; 32]),
            fixed_senior_yield_bps: 800,
            tranches_risk_adjustment_bps: 2_000,
            junior_profit_cap_bps: PoolConfig::DEFAULT_JUNIOR_PROFIT_CAP_BPS,
            liquidity_cap: 10_000_000_000_000,
            max_senior_junior_ratio: 4,
            bump: 255,
        }
    }

    /// Minimal cache-bearing component for exercising the trait helpers.
    struct TestCache {
        bound: Pubkey,
        addresses: CachedPoolAddresses,
    }

    impl PoolConfigCache for TestCache {
        fn bound_config(&self) -> Pubkey {
            self.bound
        }

        fn set_bound_config(&mut self, config: Pubkey) {
            self.bound = config;
        }

        fn refresh(&mut self, config: &PoolConfig) -> bool {
            let fresh = config.addresses();
            let changed = self.addresses != fresh;
            self.addresses = fresh;
            changed
        }
    }

    #[test]
    fn test_tranche_index_of() {
        let config = test_config();
        assert_eq!(
            config.tranche_index_of(&config.senior_tranche),
            Some(SENIOR_TRANCHE)
        );
        assert_eq!(
            config.tranche_index_of(&config.junior_tranche),
            Some(JUNIOR_TRANCHE)
        );
        assert_eq!(config.tranche_index_of(&config.credit), None);
        assert_eq!(config.tranche_index_of(&Pubkey::default()), None);
    }

    #[test]
    fn test_custodian_whitelist() {
        let addrs = test_config().addresses();
        assert!(addrs.is_custodian(&addrs.senior_tranche));
        assert!(addrs.is_custodian(&addrs.junior_tranche));
        assert!(addrs.is_custodian(&addrs.borrower_first_loss_cover));
        assert!(addrs.is_custodian(&addrs.admin_first_loss_cover));
        assert!(addrs.is_custodian(&addrs.credit));
        assert!(addrs.is_custodian(&addrs.fee_manager));

        // The pool orchestrator is deliberately not a custodian
        assert!(!addrs.is_custodian(&addrs.pool));
        assert!(!addrs.is_custodian(&Pubkey::new_from_array([99; 32])));
    }

    #[test]
    fn test_refresh_reports_change_once() {
        let config = test_config();
        let mut cache = TestCache {
            bound: Pubkey::new_from_array([42; 32]),
            addresses: CachedPoolAddresses::default(),
        };

        assert!(cache.refresh(&config));
        // Second refresh against the same registry is a no-op
        assert!(!cache.refresh(&config));
        assert_eq!(cache.addresses, config.addresses());
    }

    #[test]
    fn test_rebind_to_zero_key_rejected_and_cache_untouched() {
        let config = test_config();
        let original_bound = Pubkey::new_from_array([42; 32]);
        let mut cache = TestCache {
            bound: original_bound,
            addresses: config.addresses(),
        };

        let result = rebind_cache(&mut cache, Pubkey::default(), &config);
        assert!(result.is_err());
        assert_eq!(cache.bound, original_bound);
        assert_eq!(cache.addresses, config.addresses());
    }

    #[test]
    fn test_rebind_swaps_registry_and_refreshes() {
        let config = test_config();
        let mut other = test_config();
        other.fee_manager = Pubkey::new_from_array([77; 32]);

        let old_bound = Pubkey::new_from_array([42; 32]);
        let new_bound = Pubkey::new_from_array([43; 32]);
        let mut cache = TestCache {
            bound: old_bound,
            addresses: config.addresses(),
        };

        let (returned_old, changed) = rebind_cache(&mut cache, new_bound, &other).unwrap();
        assert_eq!(returned_old, old_bound);
        assert!(changed);
        assert_eq!(cache.bound, new_bound);
        assert_eq!(cache.addresses.fee_manager, other.fee_manager);
    }

    #[test]
    fn test_rebind_to_identical_registry_reports_no_change() {
        let config = test_config();
        let new_bound = Pubkey::new_from_array([43; 32]);
        let mut cache = TestCache {
            bound: Pubkey::new_from_array([42; 32]),
            addresses: config.addresses(),
        };

        let (_, changed) = rebind_cache(&mut cache, new_bound, &config).unwrap();
        assert!(!changed);
        assert_eq!(cache.bound, new_bound);
    }
}
