use crate::error::ErrorCode;
use crate::states::{PoolInitialized, StakingPool, STAKING_POOL_SEED, TOKEN_VAULT_SEED};
use crate::utils::is_supported_mint;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use std::ops::DerefMut;

/// Create the staking pool for one base token mint.
///
/// Accounts:
/// - `staking_pool`: PDA `["staking", mint]`, holds the initializer, lock end
///   date, freeze flag and xToken supply.
/// - `token_vault`: PDA `["token_vault", mint]`, owned by `staking_pool`.
///
/// Both are created with `init_if_needed` so a second call reaches the
/// handler and fails with `AlreadyInitialized` instead of an allocation error.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Becomes the pool administrator; pays for both accounts.
    #[account(mut)]
    pub initializer: Signer<'info>,

    /// Base token mint accepted by the pool. Token-2022 mints with extensions
    /// that alter transfer amounts are rejected.
    #[account(mint::token_program = token_program)]
    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Pool record (derived by STAKING_POOL_SEED + mint).
    #[account(
        init_if_needed,
        seeds = [
            STAKING_POOL_SEED.as_bytes(),
            token_mint.key().as_ref()
        ],
        bump,
        payer = initializer,
        space = StakingPool::LEN
    )]
    pub staking_pool: Account<'info, StakingPool>,

    /// Vault holding every staked base token (derived by TOKEN_VAULT_SEED + mint).
    #[account(
        init_if_needed,
        seeds = [
            TOKEN_VAULT_SEED.as_bytes(),
            token_mint.key().as_ref()
        ],
        bump,
        payer = initializer,
        token::mint = token_mint,
        token::authority = staking_pool,
        token::token_program = token_program,
    )]
    pub token_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// SPL Token / Token-2022 interface program.
    pub token_program: Interface<'info, TokenInterface>,

    /// System Program (for rent).
    pub system_program: Program<'info, System>,
}

pub fn initialize(ctx: Context<Initialize>, lock_end_date: i64) -> Result<()> {
    require!(
        is_supported_mint(&ctx.accounts.token_mint)?,
        ErrorCode::NotSupportMint
    );

    let staking_pool = ctx.accounts.staking_pool.deref_mut();
    staking_pool.initialize(
        ctx.accounts.initializer.key(),
        ctx.accounts.token_mint.key(),
        ctx.accounts.token_vault.key(),
        lock_end_date,
        ctx.bumps.staking_pool,
        ctx.bumps.token_vault,
    )?;

    msg!(
        "Staking pool initialized for mint {}, lock end date {}",
        staking_pool.mint,
        lock_end_date
    );

    emit!(PoolInitialized {
        initializer: staking_pool.initializer,
        mint: staking_pool.mint,
        vault: staking_pool.vault,
        lock_end_date,
    });

    Ok(())
}
