//! Checked integer helpers shared by the exchange-rate curve.

/// Ceiling division that returns `None` on a zero divisor or overflow.
pub trait CheckedCeilDiv: Sized {
    fn checked_ceil_div(&self, rhs: Self) -> Option<Self>;
}

impl CheckedCeilDiv for u128 {
    fn checked_ceil_div(&self, rhs: Self) -> Option<Self> {
        let quotient = self.checked_div(rhs)?;
        let remainder = self.checked_rem(rhs)?;
        if remainder > 0 {
            quotient.checked_add(1)
        } else {
            Some(quotient)
        }
    }
}

/// Narrow a `u128` intermediate back into token units.
pub fn to_u64(value: u128) -> Option<u64> {
    u64::try_from(value).ok()
}
