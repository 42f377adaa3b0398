use anchor_lang::prelude::*;

declare_id!("J9z9v5ZMEZoxHNhVHw2QkJvWCjYTqQhCL1KFmYt3wKVC");

pub mod curve;
pub mod error;
pub mod instructions;
pub mod staking;
pub mod states;
pub mod telemetry;
pub mod utils;

#[cfg(test)]
pub mod test_utils;

use instructions::*;

#[program]
pub mod xtoken_staker {

    use super::*;

    pub fn initialize(ctx: Context<Initialize>, lock_end_date: i64) -> Result<()> {
        instructions::initialize(ctx, lock_end_date)
    }

    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        instructions::stake(ctx, amount)
    }

    pub fn unstake(ctx: Context<Unstake>, amount: u64) -> Result<()> {
        instructions::unstake(ctx, amount)
    }

    pub fn unstake_admin(ctx: Context<UnstakeAdmin>, amount: u64) -> Result<()> {
        instructions::unstake_admin(ctx, amount)
    }

    pub fn update_lock_end_date(
        ctx: Context<UpdateLockEndDate>,
        new_lock_end_date: i64,
    ) -> Result<()> {
        instructions::update_lock_end_date(ctx, new_lock_end_date)
    }

    pub fn toggle_freeze_program(ctx: Context<ToggleFreezeProgram>) -> Result<()> {
        instructions::toggle_freeze_program(ctx)
    }

    pub fn emit_price(ctx: Context<EmitPrice>) -> Result<u64> {
        instructions::emit_price(ctx)
    }

    pub fn emit_reward(ctx: Context<EmitReward>) -> Result<u64> {
        instructions::emit_reward(ctx)
    }
}
