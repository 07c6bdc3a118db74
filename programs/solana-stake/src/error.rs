use anchor_lang::prelude::*;

#[error_code]
pub enum StakeError {
    #[msg("Amount must be greater than zero.")]
    InvalidAmount,
    #[msg("Unstake amount exceeds staked balance.")]
    InsufficientStake,
    #[msg("Unauthorized action.")]
    Unauthorized,
    #[msg("Stake account does not exist.")]
    NotFound,
    #[msg("Stake account already exists.")]
    AlreadyExists,
    #[msg("Insufficient Funds Provided.")]
    InsufficientExternalFunds,
    #[msg("Arithmetic overflow.")]
    ArithmeticOverflow,
    #[msg("Owner identity is not valid.")]
    InvalidOwner,
    #[msg("Mint does not match the stake account.")]
    MintMismatch,
    #[msg("Mint decimals are not supported.")]
    UnsupportedMint,
}
