use crate::error::ErrorCode;
use crate::states::{FreezeToggled, StakingPool, STAKING_POOL_SEED};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct ToggleFreezeProgram<'info> {
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

/// Flip `freeze_program`. While set, stake, unstake and unstake_admin fail
/// for every caller; reads and admin controls keep working.
pub fn toggle_freeze_program(ctx: Context<ToggleFreezeProgram>) -> Result<()> {
    let initializer = ctx.accounts.initializer.key();
    let freeze_program = ctx
        .accounts
        .staking_pool
        .toggle_freeze_program(&initializer)?;

    msg!("Freeze program set to {}", freeze_program);

    emit!(FreezeToggled {
        initializer,
        freeze_program,
    });

    Ok(())
}
