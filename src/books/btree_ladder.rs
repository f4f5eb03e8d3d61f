use std::collections::BTreeMap;

use crate::{
    books::interface::{LadderStorage, PriceLadder},
    decimals::decimal_type::DecimalType,
    level::Level,
    side::Side,
};

/// Ladder backed by a `BTreeMap`: O(log L) per mutation, O(n) for the top `n`.
///
/// Prices are stored in ascending order for both sides; bids are read from the back.
#[derive(Debug, Clone)]
pub struct BTreeLadder<V: DecimalType> {
    side: Side,
    levels: BTreeMap<V, V>,
}

impl<V: DecimalType> LadderStorage<V> for BTreeLadder<V> {
    #[inline]
    fn set(&mut self, price: V, qty: V) {
        debug_assert!(qty.is_positive(), "ladder levels must hold a positive quantity");
        self.levels.insert(price, qty);
    }

    #[inline]
    fn remove(&mut self, price: V) -> Option<V> {
        self.levels.remove(&price)
    }
}

impl<V: DecimalType> PriceLadder<V> for BTreeLadder<V> {
    fn new(side: Side) -> Self {
        Self { side, levels: BTreeMap::new() }
    }

    #[inline]
    fn side(&self) -> Side {
        self.side
    }

    #[inline]
    fn get(&self, price: V) -> Option<V> {
        self.levels.get(&price).copied()
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
        let best = match self.side {
            Side::Bid => self.levels.iter().next_back(),
            Side::Ask => self.levels.iter().next(),
        };
        best.map(|(&price, &qty)| Level::new(price, qty))
    }

    fn top(&self, n: usize) -> Vec<Level<V>> {
        let mut levels = Vec::with_capacity(n.min(self.levels.len()));
        match self.side {
            Side::Bid => levels.extend(self.levels.iter().rev().take(n).map(|(&price, &qty)| Level::new(price, qty))),
            Side::Ask => levels.extend(self.levels.iter().take(n).map(|(&price, &qty)| Level::new(price, qty))),
        }
        levels
    }
}
