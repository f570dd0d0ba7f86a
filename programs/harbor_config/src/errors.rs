use anchor_lang::prelude::*;

#[error_code]
pub enum PoolConfigError {
    #[msg("Unauthorized: caller is not the registry owner")]
    Unauthorized,

    #[msg("Address argument is the zero address")]
    ZeroAddressProvided,

    #[msg("Basis-point parameter exceeds 10000")]
    InvalidBasisPoints,

    #[msg("Liquidity cap must be greater than zero")]
    ZeroLiquidityCap,

    #[msg("Maximum senior:junior ratio must be greater than zero")]
    ZeroSeniorJuniorRatio,
}
