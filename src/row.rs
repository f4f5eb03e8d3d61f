use crate::{
    config::BookMode, decimals::decimal_type::DecimalType, error::BookError, event::Event, event_kind::EventKind,
    side::Side,
};

/// One input row as a columnar host hands it over: every column may be null.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawRow<V: DecimalType> {
    pub price: Option<V>,
    pub qty: Option<V>,
    pub is_bid: Option<bool>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub prev_price: Option<V>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub prev_qty: Option<V>,
}

impl<V: DecimalType> RawRow<V> {
    #[inline]
    #[must_use]
    pub const fn new(price: V, qty: V, is_bid: bool) -> Self {
        Self { price: Some(price), qty: Some(qty), is_bid: Some(is_bid), prev_price: None, prev_qty: None }
    }

    #[inline]
    #[must_use]
    pub fn with_prev(self, prev_price: Option<V>, prev_qty: Option<V>) -> Self {
        Self { prev_price, prev_qty, ..self }
    }

    /// Turn the row into a typed event for a stream in `mode`.
    ///
    /// In mutation mode the presence of previous-level fields selects a modify; exactly one of
    /// them is malformed. Update mode rows must not carry previous-level fields at all.
    pub fn into_event(self, mode: BookMode) -> Result<Event<V>, BookError> {
        let price = self.price.ok_or(BookError::MissingValue { field: "price" })?;
        let qty = self.qty.ok_or(BookError::MissingValue { field: "qty" })?;
        let side = Side::from_is_bid(self.is_bid.ok_or(BookError::MissingValue { field: "is_bid" })?);

        match (mode, self.prev_price, self.prev_qty) {
            (BookMode::Update, None, None) => Ok(Event::update(side, price, qty)),
            (BookMode::Update, _, _) => Err(BookError::ModeMismatch { mode, kind: EventKind::ModifyMutation }),
            (BookMode::Mutation, None, None) => Ok(Event::mutation(side, price, qty)),
            (BookMode::Mutation, Some(prev_price), Some(prev_qty)) => Ok(Event::modify(side, price, qty, prev_price, prev_qty)),
            (BookMode::Mutation, prev_price, prev_qty) => Err(BookError::MalformedModify {
                prev_price_present: prev_price.is_some(),
                prev_qty_present: prev_qty.is_some(),
            }),
        }
    }
}
