use crate::error::ErrorCode;
use crate::states::{
    StakingPool, Unstaked, UserStakingAccount, STAKING_POOL_SEED, USER_STAKING_SEED,
};
use crate::utils::transfer_from_pool_vault_to_user;
use crate::{staking, telemetry};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use std::ops::DerefMut;

/// Redeem `amount` base tokens from any user's staking record on the
/// initializer's authority.
///
/// Neither the lock end date nor the owner's signature is required, and the
/// payout goes to whichever token account of the pool mint the initializer
/// supplies. Holders therefore trust the initializer with their stake; only
/// the freeze flag stops this path.
#[derive(Accounts)]
pub struct UnstakeAdmin<'info> {
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

    /// Must be the pool initializer; checked in the handler after the freeze flag.
    pub admin: Signer<'info>,

    /// Base token mint of the pool.
    #[account(mint::token_program = token_program)]
    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Pool vault; pays out the withdrawal.
    #[account(mut, address = staking_pool.vault @ ErrorCode::InvalidAccountDerivation)]
    pub token_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Staking record being redeemed (derived by USER_STAKING_SEED + pool + owner).
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

    /// Destination chosen by the initializer; any account of the pool mint
    /// other than the vault.
    #[account(
        mut,
        token::mint = token_mint,
        token::token_program = token_program,
    )]
    pub token_to: Box<InterfaceAccount<'info, TokenAccount>>,

    /// SPL Token / Token-2022 interface program.
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn unstake_admin(ctx: Context<UnstakeAdmin>, amount: u64) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let owner = ctx.accounts.user_staking_account.owner;

    let vault_balance = ctx.accounts.token_vault.amount;
    let transition = staking::unstake_admin(
        ctx.accounts.staking_pool.deref_mut(),
        ctx.accounts.user_staking_account.deref_mut(),
        &admin,
        &ctx.accounts.token_to.key(),
        vault_balance,
        amount,
    )?;

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
        "Admin unstaked {} of {} for {} xToken to {}",
        amount,
        owner,
        transition.shares,
        ctx.accounts.token_to.key()
    );

    emit!(Unstaked {
        owner,
        authority: admin,
        admin: true,
        amount,
        x_token_burned: transition.shares,
        vault_balance: transition.after.vault_balance,
        total_x_token: transition.after.shares_outstanding,
    });
    emit!(telemetry::price_change(&transition)?);

    Ok(())
}
