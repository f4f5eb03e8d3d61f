use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::{
    books::{btree_ladder::BTreeLadder, interface::PriceLadder},
    config::BookConfig,
    decimals::decimal_type::DecimalType,
    engine::OrderBookEngine,
    error::BookError,
    event::Event,
    snapshot::Snapshot,
};

/// Independent books keyed by partition (usually the instrument symbol).
///
/// Each key owns its engine outright; books never see each other's events. A book is created
/// empty the first time its key appears, using the shared configuration.
#[derive(Debug)]
pub struct PartitionedBooks<K, V, L = BTreeLadder<V>>
where
    K: Eq + Hash,
    V: DecimalType,
    L: PriceLadder<V>,
{
    config: BookConfig,
    books: FxHashMap<K, OrderBookEngine<V, L>>,
}

impl<K, V, L> PartitionedBooks<K, V, L>
where
    K: Eq + Hash,
    V: DecimalType,
    L: PriceLadder<V>,
{
    pub fn new(config: BookConfig) -> Result<Self, BookError> {
        config.validate()?;
        Ok(Self { config, books: FxHashMap::default() })
    }

    /// Route `event` to the book for `key`.
    pub fn apply(&mut self, key: K, event: Event<V>) -> Result<Snapshot<V>, BookError> {
        let book = match self.books.entry(key) {
            std::collections::hash_map::Entry::Occupied(entry) => entry.into_mut(),
            std::collections::hash_map::Entry::Vacant(entry) => entry.insert(OrderBookEngine::new(self.config)?),
        };
        book.apply(event)
    }

    #[inline]
    pub fn get(&self, key: &K) -> Option<&OrderBookEngine<V, L>> {
        self.books.get(key)
    }

    /// Drop the book for `key`, e.g. when its stream ends.
    pub fn remove(&mut self, key: &K) -> Option<OrderBookEngine<V, L>> {
        self.books.remove(key)
    }

    /// Empty every book but keep the keys, e.g. at a session boundary.
    pub fn reset_all(&mut self) {
        for book in self.books.values_mut() {
            book.reset();
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.books.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::PartitionedBooks;
    use crate::{config::BookConfig, engine::BookState, error::BookError, event::Event, level::Level, side::Side};

    #[test]
    fn books_are_isolated_per_key() {
        let mut books: PartitionedBooks<&str, i64> = PartitionedBooks::new(BookConfig::new(1)).unwrap();
        books.apply("AAPL", Event::mutation(Side::Bid, 100, 5)).unwrap();
        let msft = books.apply("MSFT", Event::mutation(Side::Bid, 300, 1)).unwrap();
        assert_eq!(msft.best_bid(), Some(Level::new(300, 1)));

        let aapl = books.apply("AAPL", Event::mutation(Side::Bid, 100, -5)).unwrap();
        assert_eq!(aapl.best_bid(), None);
        assert_eq!(books.get(&"AAPL").map(|b| b.state()), Some(BookState::Empty));
        assert_eq!(books.get(&"MSFT").map(|b| b.state()), Some(BookState::Populated));
        assert_eq!(books.len(), 2);

        books.reset_all();
        assert_eq!(books.get(&"MSFT").map(|b| b.state()), Some(BookState::Empty));

        assert!(books.remove(&"AAPL").is_some());
        assert_eq!(books.keys().collect::<Vec<_>>(), vec![&"MSFT"]);
    }

    #[test]
    fn rejection_in_one_book_does_not_touch_others() {
        let mut books: PartitionedBooks<u32, i64> = PartitionedBooks::new(BookConfig::new(1)).unwrap();
        books.apply(1, Event::mutation(Side::Ask, 10, 1)).unwrap();
        let malformed = Event::ModifyMutation { side: Side::Ask, price: 9, qty: 1, prev_price: Some(10), prev_qty: None };
        assert!(matches!(books.apply(2, malformed), Err(BookError::MalformedModify { .. })));
        assert_eq!(books.get(&1).map(|b| b.snapshot().best_ask()), Some(Some(Level::new(10, 1))));
        assert!(PartitionedBooks::<u32, i64>::new(BookConfig::new(0)).is_err());
    }
}
