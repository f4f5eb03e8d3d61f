use tracing::debug;

use crate::{config::UnderflowPolicy, decimals::decimal_type::DecimalType, error::BookError, level::Level, side::Side};

pub(crate) use sealed::LadderStorage;

mod sealed {
    use crate::decimals::decimal_type::DecimalType;

    /// Raw level storage. Not nameable outside the crate, so levels only change through the
    /// mutation rules on [`super::PriceLadder`].
    pub trait LadderStorage<V: DecimalType> {
        /// Insert or overwrite a level. Callers guarantee `qty` is strictly positive.
        fn set(&mut self, price: V, qty: V);
        /// Remove a level, returning its quantity
        fn remove(&mut self, price: V) -> Option<V>;
    }
}

/// One side of the book: unique prices mapped to strictly positive aggregate quantities,
/// ordered by side priority (bids highest first, asks lowest first).
///
/// Implementations provide the storage primitives; the mutation rules live in the provided
/// methods so every ladder evicts, floors and replaces in exactly the same way. The trait is
/// sealed: only ladders in this crate can implement it, and levels cannot be written directly.
///
/// ```compile_fail
/// use topbook::{BTreeLadder, PriceLadder, Side};
///
/// let mut bids = BTreeLadder::<i64>::new(Side::Bid);
/// bids.set(10, -5);
/// ```
///
/// ```
/// use topbook::{BTreeLadder, PriceLadder, Side};
///
/// let mut bids = BTreeLadder::<i64>::new(Side::Bid);
/// bids.apply_absolute(10, -5);
/// assert!(bids.is_empty());
/// ```
pub trait PriceLadder<V: DecimalType>: LadderStorage<V> {
    /// Create an empty ladder for `side`
    fn new(side: Side) -> Self
    where
        Self: Sized;
    fn side(&self) -> Side;
    /// Quantity resting at `price`, if any
    fn get(&self, price: V) -> Option<V>;
    fn len(&self) -> usize;
    fn clear(&mut self);
    /// The highest priority level
    fn best(&self) -> Option<Level<V>>;
    /// Up to `n` levels in priority order, without padding
    fn top(&self, n: usize) -> Vec<Level<V>>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Exactly `n` slots in priority order; slots past the ladder's depth are `None`.
    fn best_n(&self, n: usize) -> Vec<Option<Level<V>>> {
        let mut levels: Vec<Option<Level<V>>> = self.top(n).into_iter().map(Some).collect();
        levels.resize(n, None);
        levels
    }

    /// Add `delta` to the level at `price` and return the resulting quantity (zero when the
    /// level is gone). A level that reaches zero or below is evicted; a non-positive delta at
    /// an unknown price does nothing. A sum that does not fit in `V` fails with
    /// [`BookError::Overflow`] and leaves the ladder unchanged.
    fn apply_delta(&mut self, price: V, delta: V) -> Result<V, BookError> {
        match self.get(price) {
            Some(current) => {
                let qty = current.checked_add(delta).ok_or_else(|| BookError::overflow(price))?;
                if qty.is_positive() {
                    self.set(price, qty);
                    Ok(qty)
                } else {
                    if qty.is_negative() {
                        debug!(side = %self.side(), ?price, ?current, ?delta, "removal exceeds level, evicting");
                    }
                    self.remove(price);
                    Ok(V::ZERO)
                }
            }
            None if delta.is_positive() => {
                self.set(price, delta);
                Ok(delta)
            }
            None => {
                if delta.is_negative() {
                    debug!(side = %self.side(), ?price, ?delta, "removal at unknown price ignored");
                }
                Ok(V::ZERO)
            }
        }
    }

    /// Replace the level at `price` with `qty`; zero removes it.
    fn apply_absolute(&mut self, price: V, qty: V) {
        if qty.is_positive() {
            self.set(price, qty);
        } else {
            self.remove(price);
        }
    }

    /// Check whether `apply_delta(price, delta)` is allowed under `policy` without mutating.
    /// Overflow is rejected under every policy.
    fn check_delta(&self, price: V, delta: V, policy: UnderflowPolicy) -> Result<(), BookError> {
        let Some(current) = self.get(price) else {
            return match policy {
                UnderflowPolicy::Reject if delta.is_negative() => Err(BookError::missing_level(price)),
                _ => Ok(()),
            };
        };
        let remaining = current.checked_add(delta).ok_or_else(|| BookError::overflow(price))?;
        if policy == UnderflowPolicy::Reject && remaining.is_negative() {
            let requested = delta.checked_neg().ok_or_else(|| BookError::overflow(price))?;
            return Err(BookError::underflow(price, current, requested));
        }
        Ok(())
    }

    /// Levels in priority order, for inspection and tests.
    fn levels(&self) -> Vec<Level<V>> {
        self.top(self.len())
    }
}
