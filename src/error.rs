use thiserror::Error;

use crate::{config::BookMode, event_kind::EventKind};

/// Reasons an event is rejected. Every rejection happens before any ladder is touched, so the
/// book is left exactly as it was before the offending event.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    #[error(
        "modify event must carry both prev_price and prev_qty or neither \
         (prev_price present: {prev_price_present}, prev_qty present: {prev_qty_present})"
    )]
    MalformedModify { prev_price_present: bool, prev_qty_present: bool },

    #[error("absolute update quantity must not be negative, got {qty}")]
    NegativeAbsoluteQuantity { qty: String },

    #[error("cannot remove {requested} at price {price}: only {available} available")]
    Underflow { price: String, available: String, requested: String },

    #[error("quantity at price {price} overflows the value type")]
    Overflow { price: String },

    #[error("cannot remove quantity at price {price}: level not found")]
    MissingLevel { price: String },

    #[error("{kind} events are not accepted in {mode} mode")]
    ModeMismatch { mode: BookMode, kind: EventKind },

    #[error("missing value for required field `{field}`")]
    MissingValue { field: &'static str },

    #[error("depth must be at least 1")]
    InvalidDepth,
}

impl BookError {
    pub(crate) fn underflow<V: std::fmt::Debug>(price: V, available: V, requested: V) -> Self {
        Self::Underflow {
            price: format!("{price:?}"),
            available: format!("{available:?}"),
            requested: format!("{requested:?}"),
        }
    }

    pub(crate) fn missing_level<V: std::fmt::Debug>(price: V) -> Self {
        Self::MissingLevel { price: format!("{price:?}") }
    }

    pub(crate) fn overflow<V: std::fmt::Debug>(price: V) -> Self {
        Self::Overflow { price: format!("{price:?}") }
    }

    pub(crate) fn negative_absolute<V: std::fmt::Debug>(qty: V) -> Self {
        Self::NegativeAbsoluteQuantity { qty: format!("{qty:?}") }
    }
}

#[cfg(test)]
mod tests {
    use super::BookError;
    use crate::{config::BookMode, event_kind::EventKind};

    #[test]
    fn messages() {
        let err = BookError::MalformedModify { prev_price_present: true, prev_qty_present: false };
        assert_eq!(
            err.to_string(),
            "modify event must carry both prev_price and prev_qty or neither \
             (prev_price present: true, prev_qty present: false)"
        );
        assert_eq!(
            BookError::underflow(6i64, 2, 4).to_string(),
            "cannot remove 4 at price 6: only 2 available"
        );
        assert_eq!(
            BookError::ModeMismatch { mode: BookMode::Update, kind: EventKind::DeltaMutation }.to_string(),
            "delta mutation events are not accepted in update mode"
        );
        assert_eq!(BookError::overflow(10i64).to_string(), "quantity at price 10 overflows the value type");
        assert_eq!(BookError::MissingValue { field: "is_bid" }.to_string(), "missing value for required field `is_bid`");
    }
}
