use crate::error::ErrorCode;
use crate::states::{
    StakingPool, Unstaked, UserStakingAccount, STAKING_POOL_SEED, USER_STAKING_SEED,
};
use crate::utils::transfer_from_pool_vault_to_user;
use crate::{staking, telemetry};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use std::ops::DerefMut;

/// Redeem xToken for `amount` base tokens, by the account owner, once the
/// pool's lock end date has passed.
///
/// The xToken burned are `amount * total_x_token / vault_balance` rounded up,
/// so the vault keeps any rounding dust.
#[derive(Accounts)]
pub struct Unstake<'info> {
    /// Pool record (derived by STAKING_POOL_SEED + mint). Declared first so a
    /// frozen pool is reported before any other account check fails.
    #[account(
        mut,
        constraint = !staking_pool.freeze_program @ ErrorCode::ProgramFrozen,
        seeds = [
            STAKING_POOL_SEED.as_bytes(),
            token_mint.key().as_ref()
        ],
        bump = staking_pool.bump,
        constraint = staking_pool.mint == token_mint.key() @ ErrorCode::InvalidAccountDerivation,
    )]
    pub staking_pool: Account<'info, StakingPool>,

    /// Owner of the staking record.
    pub owner: Signer<'info>,

    /// Base token mint of the pool.
    #[account(mint::token_program = token_program)]
    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Pool vault; pays out the withdrawal.
    #[account(mut, address = staking_pool.vault @ ErrorCode::InvalidAccountDerivation)]
    pub token_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Staking record being redeemed. Ownership is checked in the handler so
    /// a foreign record fails with `Unauthorized`.
    #[account(
        mut,
        seeds = [
            USER_STAKING_SEED.as_bytes(),
            staking_pool.key().as_ref(),
            user_staking_account.owner.as_ref()
        ],
        bump = user_staking_account.bump,
        constraint = user_staking_account.pool == staking_pool.key() @ ErrorCode::InvalidAccountDerivation,
    )]
    pub user_staking_account: Account<'info, UserStakingAccount>,

    /// Owner's token account receiving the base tokens.
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub token_to: Box<InterfaceAccount<'info, TokenAccount>>,

    /// SPL Token / Token-2022 interface program.
    pub token_program: Interface<'info, TokenInterface>,
}

/// Steps:
/// 1) Reject if frozen, if the caller is not the owner, or if still locked.
/// 2) Check the entitlement, burn xToken and re-base the recorded deposit.
/// 3) Move the base tokens out of the vault, signed by the pool PDA.
/// 4) Emit `Unstaked` and `PriceChange`.
pub fn unstake(ctx: Context<Unstake>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let owner = ctx.accounts.owner.key();

    // --- 1-2) Pure transition over the two records ---
    let vault_balance = ctx.accounts.token_vault.amount;
    let transition = staking::unstake(
        ctx.accounts.staking_pool.deref_mut(),
        ctx.accounts.user_staking_account.deref_mut(),
        &owner,
        vault_balance,
        now,
        amount,
    )?;

    // --- 3) Vault -> owner ---
    let staking_pool = &ctx.accounts.staking_pool;
    let seeds = staking_pool.signer_seeds();
    transfer_from_pool_vault_to_user(
        staking_pool.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.token_to.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        &[&seeds[..]],
    )?;

    msg!(
        "Unstaked {} for {} xToken, vault {}, supply {}",
        amount,
        transition.shares,
        transition.after.vault_balance,
        transition.after.shares_outstanding
    );

    // --- 4) Events ---
    emit!(Unstaked {
        owner,
        authority: owner,
        admin: false,
        amount,
        x_token_burned: transition.shares,
        vault_balance: transition.after.vault_balance,
        total_x_token: transition.after.shares_outstanding,
    });
    emit!(telemetry::price_change(&transition)?);

    Ok(())
}
