use crate::curve::ExchangeRate;
use crate::error::ErrorCode;
use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// StakingPool Account
// ──────────────────────────────────────────────────────────────────────────────
//

/// PDA seed string used to derive the staking pool account (`"staking" + mint`).
pub const STAKING_POOL_SEED: &str = "staking";

/// PDA seed string used to derive the vault token account (`"token_vault" + mint`).
pub const TOKEN_VAULT_SEED: &str = "token_vault";

/// Singleton pool record for one mint + vault pair.
///
/// Created once by `initialize`. The `initializer` is the only principal
/// allowed to change `lock_end_date` or `freeze_program`, and to redeem on
/// behalf of a user through `unstake_admin`.
#[account]
#[derive(Default, Debug)]
pub struct StakingPool {
    /// PDA bump for this account; also signs vault outflows.
    pub bump: u8,

    /// PDA bump of the vault token account.
    pub vault_bump: u8,

    /// Administrator of the pool, immutable after initialization.
    pub initializer: Pubkey,

    /// Base token mint staked into the pool.
    pub mint: Pubkey,

    /// Program-owned token account holding every staked base token.
    pub vault: Pubkey,

    /// UNIX timestamp (seconds) before which self-service unstake is rejected.
    pub lock_end_date: i64,

    /// xToken outstanding; always equals the sum of every
    /// `UserStakingAccount::x_token_amount` of this pool.
    pub total_x_token: u64,

    /// When `true`, stake and unstake are rejected for everyone.
    pub freeze_program: bool,
}

impl StakingPool {
    /// Fixed serialized size of the account (for allocation at initialization).
    ///
    /// Breakdown:
    /// - 8: account discriminator
    /// - 1 + 1: bumps
    /// - 32 * 3: three Pubkeys
    /// - 8 + 8: lock end date and xToken supply
    /// - 1: freeze flag
    pub const LEN: usize = 8 + 1 + 1 + 32 * 3 + 8 + 8 + 1;

    pub fn is_initialized(&self) -> bool {
        self.initializer != Pubkey::default()
    }

    /// One-time setup. A second call fails rather than resetting the pool.
    pub fn initialize(
        &mut self,
        initializer: Pubkey,
        mint: Pubkey,
        vault: Pubkey,
        lock_end_date: i64,
        bump: u8,
        vault_bump: u8,
    ) -> Result<()> {
        require!(!self.is_initialized(), ErrorCode::AlreadyInitialized);
        require_keys_neq!(
            initializer,
            Pubkey::default(),
            ErrorCode::InvalidAccountDerivation
        );

        self.bump = bump;
        self.vault_bump = vault_bump;
        self.initializer = initializer;
        self.mint = mint;
        self.vault = vault;
        self.lock_end_date = lock_end_date;
        self.total_x_token = 0;
        self.freeze_program = false;
        Ok(())
    }

    pub fn exchange_rate(&self, vault_balance: u64) -> ExchangeRate {
        ExchangeRate::new(vault_balance, self.total_x_token)
    }

    pub fn ensure_not_frozen(&self) -> Result<()> {
        require!(!self.freeze_program, ErrorCode::ProgramFrozen);
        Ok(())
    }

    pub fn ensure_initializer(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(self.initializer, *caller, ErrorCode::Unauthorized);
        Ok(())
    }

    pub fn ensure_lock_expired(&self, now: i64) -> Result<()> {
        require!(now >= self.lock_end_date, ErrorCode::LockNotExpired);
        Ok(())
    }

    /// Replace the lock end date unconditionally; returns the previous date.
    /// The new date may be earlier or later than the current time.
    pub fn update_lock_end_date(&mut self, caller: &Pubkey, new_lock_end_date: i64) -> Result<i64> {
        self.ensure_initializer(caller)?;
        let old_lock_end_date = self.lock_end_date;
        self.lock_end_date = new_lock_end_date;
        Ok(old_lock_end_date)
    }

    /// Flip the freeze flag; returns the new value.
    pub fn toggle_freeze_program(&mut self, caller: &Pubkey) -> Result<bool> {
        self.ensure_initializer(caller)?;
        self.freeze_program = !self.freeze_program;
        Ok(self.freeze_program)
    }

    /// Signer seeds for CPIs where the pool PDA acts as vault authority.
    pub fn signer_seeds(&self) -> [&[u8]; 3] {
        [
            STAKING_POOL_SEED.as_bytes(),
            self.mint.as_ref(),
            std::slice::from_ref(&self.bump),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_error;

    fn pool(initializer: Pubkey) -> StakingPool {
        let mut pool = StakingPool::default();
        pool.initialize(initializer, Pubkey::new_unique(), Pubkey::new_unique(), 1_000, 254, 253)
            .unwrap();
        pool
    }

    #[test]
    fn initialize_records_the_initializer() {
        let admin = Pubkey::new_unique();
        let pool = pool(admin);
        assert!(pool.is_initialized());
        assert_eq!(pool.initializer, admin);
        assert_eq!(pool.lock_end_date, 1_000);
        assert_eq!(pool.total_x_token, 0);
        assert!(!pool.freeze_program);
        assert_eq!(pool.bump, 254);
        assert_eq!(pool.vault_bump, 253);
    }

    #[test]
    fn second_initialize_fails() {
        let admin = Pubkey::new_unique();
        let mut pool = pool(admin);
        pool.lock_end_date = 77;
        let result = pool.initialize(admin, pool.mint, pool.vault, 5, 1, 1);
        assert_error(result, ErrorCode::AlreadyInitialized);
        assert_eq!(pool.lock_end_date, 77);
    }

    #[test]
    fn lock_end_date_moves_both_ways() {
        let admin = Pubkey::new_unique();
        let mut pool = pool(admin);
        assert_eq!(pool.update_lock_end_date(&admin, 10).unwrap(), 1_000);
        assert_eq!(pool.lock_end_date, 10);
        assert_eq!(pool.update_lock_end_date(&admin, 5_000).unwrap(), 10);
        assert_eq!(pool.lock_end_date, 5_000);
    }

    #[test]
    fn admin_controls_reject_other_callers() {
        let admin = Pubkey::new_unique();
        let stranger = Pubkey::new_unique();
        let mut pool = pool(admin);

        assert_error(pool.update_lock_end_date(&stranger, 0), ErrorCode::Unauthorized);
        assert_error(pool.toggle_freeze_program(&stranger), ErrorCode::Unauthorized);
        assert_eq!(pool.lock_end_date, 1_000);
        assert!(!pool.freeze_program);
    }

    #[test]
    fn toggle_only_flips_the_flag() {
        let admin = Pubkey::new_unique();
        let mut pool = pool(admin);
        pool.total_x_token = 42;
        let before = pool.clone();

        assert!(pool.toggle_freeze_program(&admin).unwrap());
        assert_error(pool.ensure_not_frozen(), ErrorCode::ProgramFrozen);
        assert!(!pool.toggle_freeze_program(&admin).unwrap());
        assert!(pool.ensure_not_frozen().is_ok());

        assert_eq!(pool.total_x_token, before.total_x_token);
        assert_eq!(pool.lock_end_date, before.lock_end_date);
        assert_eq!(pool.initializer, before.initializer);
    }

    #[test]
    fn lock_expires_at_the_end_date() {
        let pool = pool(Pubkey::new_unique());
        assert_error(pool.ensure_lock_expired(999), ErrorCode::LockNotExpired);
        assert!(pool.ensure_lock_expired(1_000).is_ok());
        assert!(pool.ensure_lock_expired(1_001).is_ok());
    }
}
