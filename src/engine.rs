use std::fmt;

use tracing::{debug, trace};

use crate::{
    books::{btree_ladder::BTreeLadder, interface::PriceLadder},
    config::BookConfig,
    decimals::decimal_type::DecimalType,
    error::BookError,
    event::Event,
    interpreter::interpret,
    side::Side,
    snapshot::{emit, Snapshot},
};

/// Descriptive state of a book. Nothing guards the transitions; any event can move between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookState {
    /// Both ladders are empty
    Empty,
    /// At least one ladder holds a level
    Populated,
}

/// Folds a stream of events into a two-sided book and reports the top levels after each one.
///
/// The two ladders are the whole state: there is no event log and no undo. Events must be fed
/// in arrival order; a rejected event leaves the book untouched and produces no snapshot.
pub struct OrderBookEngine<V, L = BTreeLadder<V>>
where
    V: DecimalType,
    L: PriceLadder<V>,
{
    bids: L,
    asks: L,
    config: BookConfig,
    _price: std::marker::PhantomData<V>,
}

impl<V, L> fmt::Debug for OrderBookEngine<V, L>
where
    V: DecimalType,
    L: PriceLadder<V>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderBookEngine")
            .field("config", &self.config)
            .field("bids", &self.bids.levels())
            .field("asks", &self.asks.levels())
            .finish()
    }
}

impl<V, L> OrderBookEngine<V, L>
where
    V: DecimalType,
    L: PriceLadder<V>,
{
    pub fn new(config: BookConfig) -> Result<Self, BookError> {
        config.validate()?;
        Ok(Self { bids: L::new(Side::Bid), asks: L::new(Side::Ask), config, _price: std::marker::PhantomData })
    }

    /// Apply one event and return the snapshot of the resulting book.
    pub fn apply(&mut self, event: Event<V>) -> Result<Snapshot<V>, BookError> {
        trace!(?event, "applying event");
        if let Err(err) = self.mutate(&event) {
            debug!(?event, %err, "event rejected");
            return Err(err);
        }
        Ok(self.snapshot())
    }

    /// Apply events in order, stopping at the first rejection. Snapshots for events applied
    /// before the rejection are discarded along with the error; the book keeps their effects.
    pub fn apply_all<I>(&mut self, events: I) -> Result<Vec<Snapshot<V>>, BookError>
    where
        I: IntoIterator<Item = Event<V>>,
    {
        let events = events.into_iter();
        let mut snapshots = Vec::with_capacity(events.size_hint().0);
        for event in events {
            snapshots.push(self.apply(event)?);
        }
        Ok(snapshots)
    }

    fn mutate(&mut self, event: &Event<V>) -> Result<(), BookError> {
        let kind = event.kind();
        if !self.config.mode.accepts(kind) {
            return Err(BookError::ModeMismatch { mode: self.config.mode, kind });
        }
        let interpretation = interpret(event)?;
        let ladder = match interpretation.side {
            Side::Bid => &mut self.bids,
            Side::Ask => &mut self.asks,
        };
        interpretation.apply_to(ladder, self.config.underflow)
    }

    /// The top levels of the current book. Reading never changes state.
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<V> {
        emit(&self.bids, &self.asks, self.config.depth)
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> BookState {
        if self.bids.is_empty() && self.asks.is_empty() {
            BookState::Empty
        } else {
            BookState::Populated
        }
    }

    #[inline]
    pub fn bids(&self) -> &L {
        &self.bids
    }

    #[inline]
    pub fn asks(&self) -> &L {
        &self.asks
    }

    #[inline]
    pub fn config(&self) -> &BookConfig {
        &self.config
    }

    /// Drop every level on both sides, keeping the configuration.
    pub fn reset(&mut self) {
        self.bids.clear();
        self.asks.clear();
    }
}
