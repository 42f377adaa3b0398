//! In-memory stand-in for the token ledger and account storage.
//!
//! Token balances live in a map keyed by principal, staking records in a map
//! created on first stake. Every operation reads the record, runs the
//! transition on a copy, and writes the copy back only when it succeeds,
//! the same commit-or-nothing behavior a transaction gives on chain.
#![allow(dead_code)]

use anchor_lang::error::Error;
use anchor_lang::prelude::*;
use std::collections::HashMap;
use std::fmt::Debug;
use xtoken_staker::error::ErrorCode;
use xtoken_staker::staking::{self, Transition};
use xtoken_staker::states::{Price, Reward, StakingPool, UserStakingAccount};
use xtoken_staker::telemetry;

pub const E9: u64 = 1_000_000_000;

pub struct Ledger {
    pub admin: Pubkey,
    pub pool_key: Pubkey,
    pub pool: StakingPool,
    pub vault: u64,
    pub wallets: HashMap<Pubkey, u64>,
    pub records: HashMap<Pubkey, UserStakingAccount>,
    pub now: i64,
}

impl Ledger {
    pub fn new(now: i64, lock_end_date: i64) -> Self {
        let admin = Pubkey::new_unique();
        let mut pool = StakingPool::default();
        pool.initialize(
            admin,
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            lock_end_date,
            255,
            255,
        )
        .unwrap();
        Self {
            admin,
            pool_key: Pubkey::new_unique(),
            pool,
            vault: 0,
            wallets: HashMap::new(),
            records: HashMap::new(),
            now,
        }
    }

    pub fn fund(&mut self, who: Pubkey, amount: u64) {
        *self.wallets.entry(who).or_default() += amount;
    }

    /// Tokens sent straight to the vault, bypassing `stake`.
    pub fn airdrop(&mut self, amount: u64) {
        self.vault += amount;
    }

    pub fn balance(&self, who: &Pubkey) -> u64 {
        self.wallets.get(who).copied().unwrap_or_default()
    }

    pub fn shares(&self, who: &Pubkey) -> u64 {
        self.records
            .get(who)
            .map(|record| record.x_token_amount)
            .unwrap_or_default()
    }

    pub fn deposit(&self, who: &Pubkey) -> u64 {
        self.records
            .get(who)
            .map(|record| record.amount)
            .unwrap_or_default()
    }

    pub fn total_shares(&self) -> u64 {
        self.records.values().map(|r| r.x_token_amount).sum()
    }

    pub fn redeemable(&self, who: &Pubkey) -> u64 {
        self.pool
            .exchange_rate(self.vault)
            .base_for_shares(self.shares(who))
            .unwrap()
    }

    fn record(&self, who: Pubkey) -> UserStakingAccount {
        match self.records.get(&who) {
            Some(record) => record.clone(),
            None => {
                let mut record = UserStakingAccount::default();
                record.get_or_init(self.pool_key, who, 254).unwrap();
                record
            }
        }
    }

    pub fn stake(&mut self, who: Pubkey, amount: u64) -> Result<Transition> {
        let mut record = self.record(who);
        let wallet = self.balance(&who);
        let transition =
            staking::stake(&mut self.pool, &mut record, self.vault, wallet, amount)?;
        *self.wallets.entry(who).or_default() -= amount;
        self.vault += amount;
        self.records.insert(who, record);
        Ok(transition)
    }

    pub fn unstake(&mut self, who: Pubkey, amount: u64) -> Result<Transition> {
        self.unstake_as(who, who, amount)
    }

    /// Self-service unstake of `owner`'s record, signed by `caller`.
    pub fn unstake_as(&mut self, caller: Pubkey, owner: Pubkey, amount: u64) -> Result<Transition> {
        let mut record = self.record(owner);
        let transition = staking::unstake(
            &mut self.pool,
            &mut record,
            &caller,
            self.vault,
            self.now,
            amount,
        )?;
        self.vault -= amount;
        *self.wallets.entry(owner).or_default() += amount;
        self.records.insert(owner, record);
        Ok(transition)
    }

    pub fn unstake_admin(
        &mut self,
        caller: Pubkey,
        owner: Pubkey,
        to: Pubkey,
        amount: u64,
    ) -> Result<Transition> {
        let mut record = self.record(owner);
        let transition =
            staking::unstake_admin(&mut self.pool, &mut record, &caller, &to, self.vault, amount)?;
        self.vault -= amount;
        *self.wallets.entry(to).or_default() += amount;
        self.records.insert(owner, record);
        Ok(transition)
    }

    pub fn toggle_freeze(&mut self) -> bool {
        let admin = self.admin;
        self.pool.toggle_freeze_program(&admin).unwrap()
    }

    pub fn price(&self) -> Result<Price> {
        telemetry::price(&self.pool, self.vault)
    }

    pub fn reward(&self, who: &Pubkey) -> Result<Reward> {
        telemetry::reward(&self.pool, &self.record(*who), self.vault)
    }
}

pub fn assert_error<T: Debug>(result: Result<T>, expected: ErrorCode) {
    match result {
        Err(Error::AnchorError(err)) => assert_eq!(
            err.error_code_number,
            u32::from(expected),
            "expected {:?}, got {}",
            expected,
            err.error_name
        ),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}
