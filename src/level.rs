use crate::decimals::decimal_type::DecimalType;

/// A price and the aggregate quantity resting there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level<V: DecimalType> {
    pub price: V,
    pub qty: V,
}

impl<V: DecimalType> Level<V> {
    #[inline(always)]
    #[must_use]
    pub const fn new(price: V, qty: V) -> Self {
        Self { price, qty }
    }

    /// A level only belongs on a ladder while its quantity is strictly positive.
    #[inline(always)]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.qty.is_positive()
    }
}

impl<V: DecimalType> From<(V, V)> for Level<V> {
    #[inline(always)]
    fn from((price, qty): (V, V)) -> Self {
        Self { price, qty }
    }
}
