use std::cmp::Ordering;

use crate::{
    books::interface::{LadderStorage, PriceLadder},
    decimals::decimal_type::DecimalType,
    level::Level,
    side::Side,
};

/// Ladder kept as a contiguous vector sorted best first.
///
/// Lookups are a binary search; inserts and removals shift the tail, so this suits books that
/// stay a few hundred levels deep and are read far more often than they grow.
#[derive(Debug, Clone)]
pub struct VecLadder<V: DecimalType> {
    side: Side,
    levels: Vec<Level<V>>,
}

impl<V: DecimalType> VecLadder<V> {
    #[must_use]
    pub fn with_capacity(side: Side, capacity: usize) -> Self {
        Self { side, levels: Vec::with_capacity(capacity) }
    }

    /// `Ok(index)` of the level at `price`, or `Err(index)` where it would be inserted.
    #[inline(always)]
    fn find_index(&self, price: V) -> Result<usize, usize> {
        // Fast path for the top of book, where most updates land
        match self.levels.first() {
            None => return Err(0),
            Some(first) if first.price == price => return Ok(0),
            Some(first) if self.side.is_better(&price, &first.price) => return Err(0),
            Some(_) => {}
        }

        let is_bid = self.side.is_bid();
        self.levels.binary_search_by(|level| match level.price.cmp(&price) {
            Ordering::Equal => Ordering::Equal,
            Ordering::Greater if is_bid => Ordering::Less,
            Ordering::Less if is_bid => Ordering::Greater,
            ord => ord,
        })
    }
}

impl<V: DecimalType> LadderStorage<V> for VecLadder<V> {
    #[inline]
    fn set(&mut self, price: V, qty: V) {
        debug_assert!(qty.is_positive(), "ladder levels must hold a positive quantity");
        match self.find_index(price) {
            Ok(index) => self.levels[index].qty = qty,
            Err(index) => self.levels.insert(index, Level::new(price, qty)),
        }
    }

    #[inline]
    fn remove(&mut self, price: V) -> Option<V> {
        self.find_index(price).ok().map(|index| self.levels.remove(index).qty)
    }
}

impl<V: DecimalType> PriceLadder<V> for VecLadder<V> {
    fn new(side: Side) -> Self {
        Self { side, levels: Vec::new() }
    }

    #[inline]
    fn side(&self) -> Side {
        self.side
    }

    #[inline]
    fn get(&self, price: V) -> Option<V> {
        self.find_index(price).ok().map(|index| self.levels[index].qty)
    }

    #[inline]
    fn len(&self) -> usize {
        self.levels.len()
    }

    fn clear(&mut self) {
        self.levels.clear();
    }

    #[inline]
    fn best(&self) -> Option<Level<V>> {
        self.levels.first().copied()
    }

    fn top(&self, n: usize) -> Vec<Level<V>> {
        self.levels[..n.min(self.levels.len())].to_vec()
    }
}
