//!
//! FlowRateLike trait for generics of Flow amount
//!
//! usize and f64 implements FlowRateLike
//!

use super::solver::DEFAULT_DEMAND;
use std::ops::{Add, Sub};

///
/// generic FlowRate
///
/// The solver only moves whole demand units around, so any numeric type that
/// can represent `0` and `D` exactly and be read as `f64` for cost evaluation
/// will do.
///
pub trait FlowRateLike:
    Copy
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Default
    + std::fmt::Debug
    + std::fmt::Display
{
    /// zero value = 0
    fn zero() -> Self;
    /// demand unit used when no demand is configured (`D = 10`)
    fn default_demand() -> Self;
    /// cast to f64
    fn to_f64(self) -> f64;
    /// `|self - rhs|` as f64, without underflow for unsigned types
    fn abs_diff_f64(self, rhs: Self) -> f64 {
        (self.to_f64() - rhs.to_f64()).abs()
    }
}

impl FlowRateLike for usize {
    fn zero() -> usize {
        0
    }
    fn default_demand() -> usize {
        DEFAULT_DEMAND as usize
    }
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl FlowRateLike for f64 {
    fn zero() -> Self {
        0.0
    }
    fn default_demand() -> Self {
        DEFAULT_DEMAND
    }
    fn to_f64(self) -> f64 {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abs_diff_of_unsigned_does_not_underflow() {
        assert_eq!(0usize.abs_diff_f64(10), 10.0);
        assert_eq!(10usize.abs_diff_f64(0), 10.0);
        assert_eq!(2.5f64.abs_diff_f64(10.0), 7.5);
    }

    #[test]
    fn default_demand_is_ten() {
        assert_eq!(usize::default_demand(), 10);
        assert_eq!(f64::default_demand(), 10.0);
        assert_eq!(usize::zero(), 0);
    }
}
