use crate::error::ErrorCode;
use crate::states::{
    Staked, StakingPool, UserStakingAccount, STAKING_POOL_SEED, USER_STAKING_SEED,
};
use crate::utils::transfer_from_user_to_pool_vault;
use crate::{staking, telemetry};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use std::ops::DerefMut;

/// Deposit base tokens into the vault in exchange for xToken.
///
/// xToken are minted at the price before the deposit:
/// `minted = amount * total_x_token / vault_balance` (floor), or 1:1 while
/// the pool holds no xToken. The user's staking record is created on the
/// first stake.
#[derive(Accounts)]
pub struct Stake<'info> {
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

    /// Depositor; pays for the staking record if it does not exist yet.
    #[account(mut)]
    pub user: Signer<'info>,

    /// Base token mint of the pool.
    #[account(mint::token_program = token_program)]
    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Pool vault; receives the deposit.
    #[account(mut, address = staking_pool.vault @ ErrorCode::InvalidAccountDerivation)]
    pub token_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Depositor's token account the base tokens are taken from.
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = user,
        token::token_program = token_program,
    )]
    pub user_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Per-user staking record (derived by USER_STAKING_SEED + pool + owner).
    #[account(
        init_if_needed,
        payer = user,
        space = UserStakingAccount::LEN,
        seeds = [
            USER_STAKING_SEED.as_bytes(),
            staking_pool.key().as_ref(),
            user.key().as_ref()
        ],
        bump,
    )]
    pub user_staking_account: Account<'info, UserStakingAccount>,

    /// SPL Token / Token-2022 interface program.
    pub token_program: Interface<'info, TokenInterface>,

    /// System Program (for rent).
    pub system_program: Program<'info, System>,
}

/// Steps:
/// 1) Reject if the pool is frozen.
/// 2) Bind a freshly created staking record to this pool and user.
/// 3) Price the deposit and update both records.
/// 4) Move the base tokens into the vault and check it received all of them.
/// 5) Emit `Staked` and `PriceChange`.
pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
    // --- 1) Freeze before anything else ---
    ctx.accounts.staking_pool.ensure_not_frozen()?;

    // --- 2) Lazy init of the staking record ---
    let staking_pool_key = ctx.accounts.staking_pool.key();
    let user_key = ctx.accounts.user.key();
    ctx.accounts.user_staking_account.get_or_init(
        staking_pool_key,
        user_key,
        ctx.bumps.user_staking_account,
    )?;

    // --- 3) Pure transition over the two records ---
    let vault_balance = ctx.accounts.token_vault.amount;
    let wallet_balance = ctx.accounts.user_token_account.amount;
    let transition = staking::stake(
        ctx.accounts.staking_pool.deref_mut(),
        ctx.accounts.user_staking_account.deref_mut(),
        vault_balance,
        wallet_balance,
        amount,
    )?;

    // --- 4) User -> vault, settled in full ---
    transfer_from_user_to_pool_vault(
        ctx.accounts.user.to_account_info(),
        ctx.accounts.user_token_account.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
    )?;
    ctx.accounts.token_vault.reload()?;
    staking::ensure_vault_settled(&transition, ctx.accounts.token_vault.amount)?;

    msg!(
        "Staked {} for {} xToken, vault {}, supply {}",
        amount,
        transition.shares,
        transition.after.vault_balance,
        transition.after.shares_outstanding
    );

    // --- 5) Events ---
    emit!(Staked {
        owner: user_key,
        amount,
        x_token_minted: transition.shares,
        vault_balance: transition.after.vault_balance,
        total_x_token: transition.after.shares_outstanding,
    });
    emit!(telemetry::price_change(&transition)?);

    Ok(())
}
