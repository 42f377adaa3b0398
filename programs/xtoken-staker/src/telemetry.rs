//! Read-only reporting over the pool: current price and per-account reward.
//!
//! Nothing here writes to a record, so calling these any number of times
//! leaves the pool exactly as it was.

use crate::curve::{format_price, ExchangeRate};
use crate::error::ErrorCode;
use crate::staking::Transition;
use crate::states::{Price, PriceChange, Reward, StakingPool, UserStakingAccount};
use anchor_lang::prelude::*;

fn price_of(rate: &ExchangeRate) -> Result<Price> {
    let token_per_xtoken_e9 = rate.price_e9().ok_or(ErrorCode::MathOverflow)?;
    Ok(Price {
        token_per_xtoken_e9,
        token_per_xtoken: format_price(token_per_xtoken_e9),
    })
}

/// Token per xToken at the current vault balance.
pub fn price(pool: &StakingPool, vault_balance: u64) -> Result<Price> {
    price_of(&pool.exchange_rate(vault_balance))
}

/// Recorded deposit of `account` and how much its xToken have gained on top.
///
/// A redeemable value below the recorded deposit is reported as
/// [`ErrorCode::InvariantViolation`] rather than clamped to zero.
pub fn reward(
    pool: &StakingPool,
    account: &UserStakingAccount,
    vault_balance: u64,
) -> Result<Reward> {
    let redeemable = pool
        .exchange_rate(vault_balance)
        .base_for_shares(account.x_token_amount)
        .ok_or(ErrorCode::MathOverflow)?;
    let reward = redeemable
        .checked_sub(account.amount)
        .ok_or(ErrorCode::InvariantViolation)?;
    Ok(Reward {
        deposit: account.amount,
        reward,
    })
}

/// Price before and after a stake or unstake.
pub fn price_change(transition: &Transition) -> Result<PriceChange> {
    let old = price_of(&transition.before)?;
    let new = price_of(&transition.after)?;
    Ok(PriceChange {
        old_token_per_xtoken_e9: old.token_per_xtoken_e9,
        old_token_per_xtoken: old.token_per_xtoken,
        new_token_per_xtoken_e9: new.token_per_xtoken_e9,
        new_token_per_xtoken: new.token_per_xtoken,
    })
}
