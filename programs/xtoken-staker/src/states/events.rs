use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// Events: Emitted for off-chain indexers/clients to track pool state changes
// ──────────────────────────────────────────────────────────────────────────────
//

/// Emitted once when a staking pool is created.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct PoolInitialized {
    /// Administrator of the new pool.
    pub initializer: Pubkey,
    /// Base token mint.
    pub mint: Pubkey,
    /// Vault token account holding staked tokens.
    pub vault: Pubkey,
    /// Initial lock end date (UNIX seconds).
    pub lock_end_date: i64,
}

/// Emitted whenever the exchange rate may have moved (stake or unstake).
///
/// Prices are token per xToken, both as a ×10⁹ fixed-point integer and as a
/// decimal string.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct PriceChange {
    pub old_token_per_xtoken_e9: u64,
    pub old_token_per_xtoken: String,
    pub new_token_per_xtoken_e9: u64,
    pub new_token_per_xtoken: String,
}

/// Current price, reported by `emit_price`.
#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct Price {
    pub token_per_xtoken_e9: u64,
    pub token_per_xtoken: String,
}

/// Deposit and unrealized gain of one account, reported by `emit_reward`.
#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct Reward {
    /// Base tokens recorded as deposited.
    pub deposit: u64,
    /// Redeemable value minus `deposit`.
    pub reward: u64,
}

/// Emitted when a user stakes base tokens.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct Staked {
    pub owner: Pubkey,
    /// Base tokens moved into the vault.
    pub amount: u64,
    /// xToken credited.
    pub x_token_minted: u64,
    pub vault_balance: u64,
    pub total_x_token: u64,
}

/// Emitted when xToken are redeemed, by the owner or by the initializer.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct Unstaked {
    /// Owner of the redeemed xToken.
    pub owner: Pubkey,
    /// Signer that authorized the redemption.
    pub authority: Pubkey,
    /// `true` when redeemed through `unstake_admin`.
    pub admin: bool,
    /// Base tokens paid out of the vault.
    pub amount: u64,
    /// xToken burned.
    pub x_token_burned: u64,
    pub vault_balance: u64,
    pub total_x_token: u64,
}

#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct LockEndDateUpdated {
    pub initializer: Pubkey,
    pub old_lock_end_date: i64,
    pub new_lock_end_date: i64,
}

#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct FreezeToggled {
    pub initializer: Pubkey,
    pub freeze_program: bool,
}
