pub mod events;
pub use events::*;

pub mod staking_pool;
pub use staking_pool::*;

pub mod user_staking_account;
pub use user_staking_account::*;
