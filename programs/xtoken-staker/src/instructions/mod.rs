pub mod initialize;
pub use initialize::*;

pub mod stake;
pub use stake::*;

pub mod unstake;
pub use unstake::*;

pub mod unstake_admin;
pub use unstake_admin::*;

pub mod update_lock_end_date;
pub use update_lock_end_date::*;

pub mod toggle_freeze_program;
pub use toggle_freeze_program::*;

pub mod emit_price;
pub use emit_price::*;

pub mod emit_reward;
pub use emit_reward::*;
