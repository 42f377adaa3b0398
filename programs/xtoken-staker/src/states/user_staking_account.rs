use crate::curve::ExchangeRate;
use crate::error::ErrorCode;
use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// UserStakingAccount Account
// ──────────────────────────────────────────────────────────────────────────────
//

/// PDA seed string used to derive each user's staking account
/// (`"user_staking" + pool + owner`).
pub const USER_STAKING_SEED: &str = "user_staking";

/// Per-principal staking record.
///
/// Created lazily on the owner's first stake and never closed; the balances
/// may fall back to zero.
#[account]
#[derive(Default, Debug)]
pub struct UserStakingAccount {
    /// PDA bump for this account.
    pub bump: u8,

    /// Staking pool this record belongs to.
    pub pool: Pubkey,

    /// Principal that owns the xToken recorded here.
    pub owner: Pubkey,

    /// Base tokens deposited, kept for reward reporting only. Payouts are
    /// always priced from `x_token_amount`.
    pub amount: u64,

    /// xToken currently held.
    pub x_token_amount: u64,
}

impl UserStakingAccount {
    /// Fixed serialized size of the account (for allocation at initialization).
    ///
    /// Breakdown:
    /// - 8: account discriminator
    /// - 1: bump
    /// - 32 * 2: pool and owner
    /// - 8 * 2: deposit amount and xToken amount
    pub const LEN: usize = 8 + 1 + 32 * 2 + 8 * 2;

    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    /// Bind a freshly allocated record to its pool and owner. Calling this on
    /// an existing record only checks that it belongs to the same pair.
    pub fn get_or_init(&mut self, pool: Pubkey, owner: Pubkey, bump: u8) -> Result<()> {
        if !self.is_initialized() {
            self.bump = bump;
            self.pool = pool;
            self.owner = owner;
            return Ok(());
        }
        require_keys_eq!(self.pool, pool, ErrorCode::InvalidAccountDerivation);
        require_keys_eq!(self.owner, owner, ErrorCode::InvalidAccountDerivation);
        Ok(())
    }

    pub fn credit_shares(&mut self, delta: u64) -> Result<()> {
        self.x_token_amount = self
            .x_token_amount
            .checked_add(delta)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    pub fn debit_shares(&mut self, delta: u64) -> Result<()> {
        require!(delta <= self.x_token_amount, ErrorCode::InsufficientShares);
        self.x_token_amount -= delta;
        Ok(())
    }

    pub fn record_deposit(&mut self, amount: u64) -> Result<()> {
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    /// Lower the reported deposit to what the held xToken redeem for at
    /// `rate`, if that is less. Keeps `reward = redeemable - amount` from
    /// going negative through floor rounding.
    pub fn cap_deposit(&mut self, rate: &ExchangeRate) -> Result<()> {
        let redeemable = rate
            .base_for_shares(self.x_token_amount)
            .ok_or(ErrorCode::MathOverflow)?;
        self.amount = self.amount.min(redeemable);
        Ok(())
    }

    /// Re-base the reported deposit after a withdrawal priced at `rate`
    /// (the totals left once the withdrawal is applied). An emptied pool
    /// clears it; otherwise it never exceeds what the remaining xToken redeem.
    pub fn record_withdrawal(&mut self, rate: &ExchangeRate) -> Result<()> {
        if rate.vault_balance == 0 || rate.shares_outstanding == 0 {
            self.amount = 0;
            return Ok(());
        }
        self.cap_deposit(rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_error;

    fn account() -> UserStakingAccount {
        let mut account = UserStakingAccount::default();
        account
            .get_or_init(Pubkey::new_unique(), Pubkey::new_unique(), 7)
            .unwrap();
        account
    }

    #[test]
    fn get_or_init_binds_once() {
        let mut account = account();
        let (pool, owner) = (account.pool, account.owner);
        account.credit_shares(10).unwrap();

        account.get_or_init(pool, owner, 99).unwrap();
        assert_eq!(account.bump, 7);
        assert_eq!(account.x_token_amount, 10);

        let result = account.get_or_init(pool, Pubkey::new_unique(), 7);
        assert_error(result, ErrorCode::InvalidAccountDerivation);
        let result = account.get_or_init(Pubkey::new_unique(), owner, 7);
        assert_error(result, ErrorCode::InvalidAccountDerivation);
    }

    #[test]
    fn debit_more_than_held_fails_without_change() {
        let mut account = account();
        account.credit_shares(5).unwrap();
        assert_error(account.debit_shares(6), ErrorCode::InsufficientShares);
        assert_eq!(account.x_token_amount, 5);
        account.debit_shares(5).unwrap();
        assert_eq!(account.x_token_amount, 0);
    }

    #[test]
    fn credit_and_deposit_overflow_is_an_error() {
        let mut account = account();
        account.credit_shares(u64::MAX).unwrap();
        assert_error(account.credit_shares(1), ErrorCode::MathOverflow);
        account.record_deposit(u64::MAX).unwrap();
        assert_error(account.record_deposit(1), ErrorCode::MathOverflow);
    }

    #[test]
    fn withdrawal_rebases_the_reported_deposit() {
        let mut account = account();
        account.record_deposit(5_000).unwrap();
        account.credit_shares(4_000).unwrap();

        // Remaining 4_000 xToken redeem for 6_000: deposit stays as is.
        account
            .record_withdrawal(&ExchangeRate::new(15_000, 10_000))
            .unwrap();
        assert_eq!(account.amount, 5_000);

        // Remaining 4_000 xToken redeem for 3_000: deposit drops to match.
        account
            .record_withdrawal(&ExchangeRate::new(3_000, 4_000))
            .unwrap();
        assert_eq!(account.amount, 3_000);

        account.record_withdrawal(&ExchangeRate::new(0, 0)).unwrap();
        assert_eq!(account.amount, 0);
    }

    #[test]
    fn cap_deposit_only_lowers() {
        let mut account = account();
        account.record_deposit(2).unwrap();
        account.credit_shares(1).unwrap();

        // 1 xToken of 3 backed by 5 tokens redeems for 1.
        account.cap_deposit(&ExchangeRate::new(5, 3)).unwrap();
        assert_eq!(account.amount, 1);

        // Price rose: the deposit is not raised back.
        account.cap_deposit(&ExchangeRate::new(30, 3)).unwrap();
        assert_eq!(account.amount, 1);
    }
}
