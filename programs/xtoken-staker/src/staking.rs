//! Stake / unstake transitions over a pool record and one user record.
//!
//! The freeze flag is checked before anything else. All validation and
//! arithmetic run before the first write; user records are updated as a whole
//! (clone, mutate, write back) so a failed transition leaves both records
//! untouched. Moving the tokens is left to the caller, which must apply the
//! returned [`Transition`] to the ledger within the same atomic unit.

use crate::curve::ExchangeRate;
use crate::error::ErrorCode;
use crate::states::{StakingPool, UserStakingAccount};
use anchor_lang::prelude::*;

/// Outcome of one stake or unstake.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Base tokens moved into (stake) or out of (unstake) the vault.
    pub amount: u64,
    /// xToken minted (stake) or burned (unstake).
    pub shares: u64,
    /// Totals the transition was priced against.
    pub before: ExchangeRate,
    /// Totals once the token transfer has settled.
    pub after: ExchangeRate,
}

/// Deposit `amount` base tokens and credit freshly minted xToken.
///
/// `vault_balance` is the vault's balance before the deposit and
/// `wallet_balance` the depositor's spendable base tokens.
pub fn stake(
    pool: &mut StakingPool,
    account: &mut UserStakingAccount,
    vault_balance: u64,
    wallet_balance: u64,
    amount: u64,
) -> Result<Transition> {
    pool.ensure_not_frozen()?;
    require!(amount > 0, ErrorCode::InvalidAmount);
    require!(amount <= wallet_balance, ErrorCode::InsufficientBalance);

    let before = pool.exchange_rate(vault_balance);
    let shares = before
        .shares_to_mint(amount)
        .ok_or(ErrorCode::MathOverflow)?;
    require!(shares > 0, ErrorCode::DepositTooSmall);
    let after = before
        .after_deposit(amount, shares)
        .ok_or(ErrorCode::MathOverflow)?;

    let mut record = account.clone();
    record.credit_shares(shares)?;
    record.record_deposit(amount)?;
    record.cap_deposit(&after)?;

    pool.total_x_token = after.shares_outstanding;
    *account = record;

    Ok(Transition {
        amount,
        shares,
        before,
        after,
    })
}

/// Self-service withdrawal of `amount` base tokens by the account owner.
pub fn unstake(
    pool: &mut StakingPool,
    account: &mut UserStakingAccount,
    caller: &Pubkey,
    vault_balance: u64,
    now: i64,
    amount: u64,
) -> Result<Transition> {
    pool.ensure_not_frozen()?;
    require_keys_eq!(account.owner, *caller, ErrorCode::Unauthorized);
    pool.ensure_lock_expired(now)?;
    withdraw(pool, account, vault_balance, amount)
}

/// Withdrawal on behalf of `account` by the pool initializer, paid to
/// `destination`.
///
/// The lock end date is not enforced and the owner's consent is not
/// required: the initializer can redeem any account at any time while the
/// pool is not frozen. The vault itself is not a valid destination.
pub fn unstake_admin(
    pool: &mut StakingPool,
    account: &mut UserStakingAccount,
    admin: &Pubkey,
    destination: &Pubkey,
    vault_balance: u64,
    amount: u64,
) -> Result<Transition> {
    pool.ensure_not_frozen()?;
    pool.ensure_initializer(admin)?;
    require_keys_neq!(
        *destination,
        pool.vault,
        ErrorCode::InvalidAccountDerivation
    );
    withdraw(pool, account, vault_balance, amount)
}

/// Check the vault balance read back after the token transfer against the
/// balance the transition was priced for.
pub fn ensure_vault_settled(transition: &Transition, vault_balance: u64) -> Result<()> {
    require_eq!(
        vault_balance,
        transition.after.vault_balance,
        ErrorCode::VaultBalanceMismatch
    );
    Ok(())
}

fn withdraw(
    pool: &mut StakingPool,
    account: &mut UserStakingAccount,
    vault_balance: u64,
    amount: u64,
) -> Result<Transition> {
    require!(amount > 0, ErrorCode::InvalidAmount);

    let before = pool.exchange_rate(vault_balance);
    let entitled = before
        .base_for_shares(account.x_token_amount)
        .ok_or(ErrorCode::MathOverflow)?;
    require!(amount <= entitled, ErrorCode::InsufficientBalance);

    let shares = before
        .shares_to_burn(amount)
        .ok_or(ErrorCode::MathOverflow)?;
    let after = before
        .after_withdrawal(amount, shares)
        .ok_or(ErrorCode::MathOverflow)?;

    let mut record = account.clone();
    record.debit_shares(shares)?;
    record.record_withdrawal(&after)?;

    pool.total_x_token = after.shares_outstanding;
    *account = record;

    Ok(Transition {
        amount,
        shares,
        before,
        after,
    })
}
