use crate::{decimals::decimal_type::DecimalType, event_kind::EventKind, side::Side};

/// One price-level event from the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event<V: DecimalType> {
    /// `qty` is the new total resting at `price`.
    AbsoluteUpdate { side: Side, price: V, qty: V },
    /// `delta` is added to (or, when negative, removed from) the level at `price`.
    DeltaMutation { side: Side, price: V, delta: V },
    /// `prev_qty` is withdrawn from `prev_price` and `qty` is added at `price`. A missing
    /// `prev_price` means the contribution stays at `price`.
    ModifyMutation { side: Side, price: V, qty: V, prev_price: Option<V>, prev_qty: Option<V> },
}

impl<V: DecimalType> Event<V> {
    #[inline(always)]
    #[must_use]
    pub const fn update(side: Side, price: V, qty: V) -> Self {
        Self::AbsoluteUpdate { side, price, qty }
    }

    #[inline(always)]
    #[must_use]
    pub const fn mutation(side: Side, price: V, delta: V) -> Self {
        Self::DeltaMutation { side, price, delta }
    }

    #[inline(always)]
    #[must_use]
    pub const fn modify(side: Side, price: V, qty: V, prev_price: V, prev_qty: V) -> Self {
        Self::ModifyMutation { side, price, qty, prev_price: Some(prev_price), prev_qty: Some(prev_qty) }
    }

    #[inline(always)]
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::AbsoluteUpdate { .. } => EventKind::AbsoluteUpdate,
            Self::DeltaMutation { .. } => EventKind::DeltaMutation,
            Self::ModifyMutation { .. } => EventKind::ModifyMutation,
        }
    }

    #[inline(always)]
    #[must_use]
    pub const fn side(&self) -> Side {
        match self {
            Self::AbsoluteUpdate { side, .. } | Self::DeltaMutation { side, .. } | Self::ModifyMutation { side, .. } => {
                *side
            }
        }
    }

    #[inline(always)]
    #[must_use]
    pub fn price(&self) -> V {
        match self {
            Self::AbsoluteUpdate { price, .. }
            | Self::DeltaMutation { price, .. }
            | Self::ModifyMutation { price, .. } => *price,
        }
    }
}
