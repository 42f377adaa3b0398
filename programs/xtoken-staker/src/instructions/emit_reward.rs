use crate::error::ErrorCode;
use crate::states::{StakingPool, UserStakingAccount, STAKING_POOL_SEED, USER_STAKING_SEED};
use crate::telemetry;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::TokenAccount;

#[derive(Accounts)]
pub struct EmitReward<'info> {
    /// Pool record (derived by STAKING_POOL_SEED + its mint).
    #[account(
        seeds = [
            STAKING_POOL_SEED.as_bytes(),
            staking_pool.mint.as_ref()
        ],
        bump = staking_pool.bump,
    )]
    pub staking_pool: Account<'info, StakingPool>,

    /// Pool vault; its balance prices the xToken.
    #[account(address = staking_pool.vault @ ErrorCode::InvalidAccountDerivation)]
    pub token_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Staking record to report on (derived by USER_STAKING_SEED + pool + owner).
    #[account(
        seeds = [
            USER_STAKING_SEED.as_bytes(),
            staking_pool.key().as_ref(),
            user_staking_account.owner.as_ref()
        ],
        bump = user_staking_account.bump,
        constraint = user_staking_account.pool == staking_pool.key() @ ErrorCode::InvalidAccountDerivation,
    )]
    pub user_staking_account: Account<'info, UserStakingAccount>,
}

/// Emit the recorded deposit of one staking record and its gain since, and
/// return the gain. Nothing is written.
pub fn emit_reward(ctx: Context<EmitReward>) -> Result<u64> {
    let reward = telemetry::reward(
        &ctx.accounts.staking_pool,
        &ctx.accounts.user_staking_account,
        ctx.accounts.token_vault.amount,
    )?;
    msg!(
        "Deposit {}, reward {} for {}",
        reward.deposit,
        reward.reward,
        ctx.accounts.user_staking_account.owner
    );

    let amount = reward.reward;
    emit!(reward);
    Ok(amount)
}
