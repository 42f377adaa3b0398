use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Caller lacks the required role for this operation")]
    Unauthorized,

    #[msg("Staking program is frozen")]
    ProgramFrozen,

    #[msg("Not exceed lock end date")]
    LockNotExpired,

    #[msg("Requested amount exceeds entitlement or wallet funds")]
    InsufficientBalance,

    #[msg("Share debit exceeds held shares")]
    InsufficientShares,

    #[msg("Staking pool is already initialized")]
    AlreadyInitialized,

    #[msg("Supplied accounts do not match the expected derivation")]
    InvalidAccountDerivation,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Deposit amount is too small - would not receive any xToken")]
    DepositTooSmall,

    #[msg("Math operation overflowed or underflowed")]
    MathOverflow,

    #[msg("Redeemable value fell below the recorded deposit")]
    InvariantViolation,

    #[msg("Token-2022 mint extension is not supported")]
    NotSupportMint,

    #[msg("Vault balance did not move by the transferred amount")]
    VaultBalanceMismatch,
}
