//! Token <-> xToken exchange rate.
//!
//! The price of one xToken is `vault_balance / shares_outstanding`. All
//! conversions widen to `u128` before multiplying, and round in the vault's
//! favour: minting and redeeming floor, burning-for-an-exact-amount ceils.

use crate::curve::RoundDirection;
use crate::utils::{to_u64, CheckedCeilDiv};

/// Fixed-point scale of the reported price (token per xToken × 10⁹).
pub const PRICE_SCALE: u128 = 1_000_000_000;
const PRICE_DECIMALS: usize = 9;

/// Snapshot of the two totals every conversion is priced against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExchangeRate {
    /// Base tokens currently held by the vault (includes airdrops).
    pub vault_balance: u64,
    /// xToken outstanding across every user staking account.
    pub shares_outstanding: u64,
}

impl ExchangeRate {
    pub fn new(vault_balance: u64, shares_outstanding: u64) -> Self {
        Self {
            vault_balance,
            shares_outstanding,
        }
    }

    /// An empty share supply, or a vault drained to zero, prices at 1:1.
    /// Anything already sitting in the vault accrues to the next depositor.
    pub fn is_unpriced(&self) -> bool {
        self.shares_outstanding == 0 || self.vault_balance == 0
    }

    /// `amount * numerator / denominator` in `u128`, rounded as requested.
    pub fn convert(
        amount: u64,
        numerator: u64,
        denominator: u64,
        round_direction: RoundDirection,
    ) -> Option<u64> {
        let product = (amount as u128).checked_mul(numerator as u128)?;
        let result = match round_direction {
            RoundDirection::Floor => product.checked_div(denominator as u128)?,
            RoundDirection::Ceiling => product.checked_ceil_div(denominator as u128)?,
        };
        to_u64(result)
    }

    /// xToken minted for a deposit of `deposit_amount` base tokens (floor).
    pub fn shares_to_mint(&self, deposit_amount: u64) -> Option<u64> {
        if self.is_unpriced() {
            return Some(deposit_amount);
        }
        Self::convert(
            deposit_amount,
            self.shares_outstanding,
            self.vault_balance,
            RoundDirection::Floor,
        )
    }

    /// Base tokens redeemable for `share_amount` xToken (floor).
    pub fn base_for_shares(&self, share_amount: u64) -> Option<u64> {
        if self.shares_outstanding == 0 {
            return Some(share_amount);
        }
        Self::convert(
            share_amount,
            self.vault_balance,
            self.shares_outstanding,
            RoundDirection::Floor,
        )
    }

    /// xToken that must be burned to withdraw exactly `amount` base tokens
    /// (ceiling, so a withdrawal never pays out more than it burns).
    pub fn shares_to_burn(&self, amount: u64) -> Option<u64> {
        if self.is_unpriced() {
            return Some(amount);
        }
        Self::convert(
            amount,
            self.shares_outstanding,
            self.vault_balance,
            RoundDirection::Ceiling,
        )
    }

    /// Token per xToken scaled by [`PRICE_SCALE`].
    pub fn price_e9(&self) -> Option<u64> {
        if self.shares_outstanding == 0 {
            return to_u64(PRICE_SCALE);
        }
        let price = (self.vault_balance as u128)
            .checked_mul(PRICE_SCALE)?
            .checked_div(self.shares_outstanding as u128)?;
        to_u64(price)
    }

    pub fn after_deposit(&self, amount: u64, shares_minted: u64) -> Option<Self> {
        Some(Self {
            vault_balance: self.vault_balance.checked_add(amount)?,
            shares_outstanding: self.shares_outstanding.checked_add(shares_minted)?,
        })
    }

    pub fn after_withdrawal(&self, amount: u64, shares_burned: u64) -> Option<Self> {
        Some(Self {
            vault_balance: self.vault_balance.checked_sub(amount)?,
            shares_outstanding: self.shares_outstanding.checked_sub(shares_burned)?,
        })
    }
}

/// Render a ×10⁹ fixed-point price as a decimal string, e.g. `1.2`.
pub fn format_price(price_e9: u64) -> String {
    let scale = PRICE_SCALE as u64;
    let whole = price_e9 / scale;
    let fraction = price_e9 % scale;
    if fraction == 0 {
        return whole.to_string();
    }
    let digits = format!("{:0width$}", fraction, width = PRICE_DECIMALS);
    format!("{}.{}", whole, digits.trim_end_matches('0'))
}
