pub mod exchange_rate;
pub use exchange_rate::*;

/// The direction to round. Used for token to xToken conversions so that
/// rounding dust always stays in the vault.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RoundDirection {
    /// Floor the value, ie. 1.9 => 1, 1.1 => 1, 1.5 => 1
    Floor,
    /// Ceiling the value, ie. 1.9 => 2, 1.1 => 2, 1.5 => 2
    Ceiling,
}
