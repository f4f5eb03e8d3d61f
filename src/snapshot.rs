use crate::{books::interface::PriceLadder, decimals::decimal_type::DecimalType, level::Level};

/// The top `n` levels of each side after an event, best first. Every slot is either a full
/// level or `None`, and `None` only follows populated slots.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot<V: DecimalType> {
    pub bids: Vec<Option<Level<V>>>,
    pub asks: Vec<Option<Level<V>>>,
}

/// Read the top `n` of both ladders. Pure: the same state always yields the same snapshot.
#[inline]
pub fn emit<V, L>(bids: &L, asks: &L, n: usize) -> Snapshot<V>
where
    V: DecimalType,
    L: PriceLadder<V>,
{
    Snapshot { bids: bids.best_n(n), asks: asks.best_n(n) }
}

impl<V: DecimalType> Snapshot<V> {
    /// Number of slots per side
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.bids.len()
    }

    #[inline]
    #[must_use]
    pub fn best_bid(&self) -> Option<Level<V>> {
        self.bids.first().copied().flatten()
    }

    #[inline]
    #[must_use]
    pub fn best_ask(&self) -> Option<Level<V>> {
        self.asks.first().copied().flatten()
    }

    pub fn bid_prices(&self) -> impl Iterator<Item = Option<V>> + '_ {
        self.bids.iter().map(|level| level.map(|l| l.price))
    }

    pub fn bid_qtys(&self) -> impl Iterator<Item = Option<V>> + '_ {
        self.bids.iter().map(|level| level.map(|l| l.qty))
    }

    pub fn ask_prices(&self) -> impl Iterator<Item = Option<V>> + '_ {
        self.asks.iter().map(|level| level.map(|l| l.price))
    }

    pub fn ask_qtys(&self) -> impl Iterator<Item = Option<V>> + '_ {
        self.asks.iter().map(|level| level.map(|l| l.qty))
    }

    /// The four output columns named by [`column_names`], each holding one entry per level.
    #[must_use]
    pub fn columns(&self) -> [Vec<Option<V>>; 4] {
        [self.bid_prices().collect(), self.bid_qtys().collect(), self.ask_prices().collect(), self.ask_qtys().collect()]
    }

    /// Values laid out positionally to match [`flat_column_names`]: bid price, bid qty, ask
    /// price, ask qty for level 1, then level 2, and so on.
    #[must_use]
    pub fn flatten(&self) -> Vec<Option<V>> {
        let mut row = Vec::with_capacity(self.depth() * 4);
        for (bid, ask) in self.bids.iter().zip(&self.asks) {
            row.push(bid.map(|l| l.price));
            row.push(bid.map(|l| l.qty));
            row.push(ask.map(|l| l.price));
            row.push(ask.map(|l| l.qty));
        }
        row
    }
}

/// Names of the four output columns for a book reporting `n` levels per side. A single level
/// is reported as scalar `*_1` columns; deeper books report one fixed-size array per column.
#[must_use]
pub const fn column_names(n: usize) -> [&'static str; 4] {
    if n > 1 {
        ["bid_px", "bid_qty", "ask_px", "ask_qty"]
    } else {
        ["bid_price_1", "bid_qty_1", "ask_price_1", "ask_qty_1"]
    }
}

/// One scalar column name per value of [`Snapshot::flatten`].
#[must_use]
pub fn flat_column_names(n: usize) -> Vec<String> {
    (1..=n)
        .flat_map(|i| [format!("bid_price_{i}"), format!("bid_qty_{i}"), format!("ask_price_{i}"), format!("ask_qty_{i}")])
        .collect()
}
