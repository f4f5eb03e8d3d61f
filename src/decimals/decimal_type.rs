use std::{
    fmt::Debug,
    ops::{Add, Neg, Sub},
};

/// Numeric type usable as both a price and a quantity on a ladder.
///
/// Prices only need a total order. Quantities are signed: deltas may be negative, and
/// an aggregate that reaches zero or below is evicted from the ladder.
pub trait DecimalType: Copy + Ord + Debug + Add<Output = Self> + Sub<Output = Self> + Neg<Output = Self> {
    const ZERO: Self;

    #[inline(always)]
    #[must_use]
    fn is_positive(self) -> bool {
        self > Self::ZERO
    }

    #[inline(always)]
    #[must_use]
    fn is_negative(self) -> bool {
        self < Self::ZERO
    }

    /// `None` when the sum is not representable
    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn checked_sub(self, rhs: Self) -> Option<Self>;
    fn checked_neg(self) -> Option<Self>;
}

macro_rules! impl_decimal_type_for_int {
    ($($t:ty),+) => {
        $(
            impl DecimalType for $t {
                const ZERO: Self = 0;

                #[inline(always)]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                #[inline(always)]
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_sub(self, rhs)
                }

                #[inline(always)]
                fn checked_neg(self) -> Option<Self> {
                    <$t>::checked_neg(self)
                }
            }
        )+
    };
}

impl_decimal_type_for_int!(i32, i64, i128);

#[cfg(feature = "rust_decimal")]
impl DecimalType for rust_decimal::Decimal {
    const ZERO: Self = rust_decimal::Decimal::ZERO;

    #[inline(always)]
    fn checked_add(self, rhs: Self) -> Option<Self> {
        rust_decimal::Decimal::checked_add(self, rhs)
    }

    #[inline(always)]
    fn checked_sub(self, rhs: Self) -> Option<Self> {
        rust_decimal::Decimal::checked_sub(self, rhs)
    }

    // Sign-magnitude: negation cannot overflow
    #[inline(always)]
    fn checked_neg(self) -> Option<Self> {
        Some(-self)
    }
}
