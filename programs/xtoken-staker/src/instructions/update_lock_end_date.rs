use crate::error::ErrorCode;
use crate::states::{LockEndDateUpdated, StakingPool, STAKING_POOL_SEED};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct UpdateLockEndDate<'info> {
    /// Must be the pool initializer.
    pub initializer: Signer<'info>,

    /// Pool record (derived by STAKING_POOL_SEED + its mint).
    #[account(
        mut,
        seeds = [
            STAKING_POOL_SEED.as_bytes(),
            staking_pool.mint.as_ref()
        ],
        bump = staking_pool.bump,
        constraint = staking_pool.is_initialized() @ ErrorCode::InvalidAccountDerivation,
    )]
    pub staking_pool: Account<'info, StakingPool>,
}

/// Replace the lock end date. Earlier and later dates are both accepted,
/// including dates already in the past.
pub fn update_lock_end_date(ctx: Context<UpdateLockEndDate>, new_lock_end_date: i64) -> Result<()> {
    let initializer = ctx.accounts.initializer.key();
    let old_lock_end_date = ctx
        .accounts
        .staking_pool
        .update_lock_end_date(&initializer, new_lock_end_date)?;

    msg!(
        "Lock end date updated from {} to {}",
        old_lock_end_date,
        new_lock_end_date
    );

    emit!(LockEndDateUpdated {
        initializer,
        old_lock_end_date,
        new_lock_end_date,
    });

    Ok(())
}
