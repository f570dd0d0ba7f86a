use anchor_lang::prelude::*;

#[error_code]
pub enum TranchesError {
    #[msg("Unauthorized: caller is not permitted to perform this operation")]
    Unauthorized,

    #[msg("Registry account does not match the bound pool config")]
    InvalidRegistry,

    #[msg("Address argument is the zero address")]
    ZeroAddressProvided,

    #[msg("Distribution end time precedes the tracker's last update")]
    InvalidTimeRange,

    #[msg("Reported loss exceeds total pool assets")]
    LossExceedsPoolAssets,

    #[msg("Arithmetic overflow")]
    Overflow,
}
