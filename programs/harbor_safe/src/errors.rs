use anchor_lang::prelude::*;

#[error_code]
pub enum PoolSafeError {
    #[msg("Unauthorized: caller is not on the custodian whitelist")]
    Unauthorized,

    #[msg("Address argument is the zero address")]
    ZeroAddressProvided,

    #[msg("Address is not a tranche vault of this pool")]
    InvalidTranche,

    #[msg("Withdrawal exceeds the custodial balance")]
    InsufficientBalance,

    #[msg("Registry account does not match the bound pool config")]
    InvalidRegistry,

    #[msg("Token mint does not match the pool's underlying asset")]
    InvalidMint,

    #[msg("Token account is not the custodial vault")]
    InvalidVault,

    #[msg("Arithmetic overflow")]
    Overflow,
}
