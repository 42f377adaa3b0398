use crate::error::ErrorCode;
use crate::states::{StakingPool, STAKING_POOL_SEED};
use crate::telemetry;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::TokenAccount;

#[derive(Accounts)]
pub struct EmitPrice<'info> {
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
}

/// Emit the current token-per-xToken price and return it scaled by 10⁹.
/// Nothing is written.
pub fn emit_price(ctx: Context<EmitPrice>) -> Result<u64> {
    let price = telemetry::price(&ctx.accounts.staking_pool, ctx.accounts.token_vault.amount)?;
    msg!("Token per xToken {}", price.token_per_xtoken);

    let token_per_xtoken_e9 = price.token_per_xtoken_e9;
    emit!(price);
    Ok(token_per_xtoken_e9)
}
