use crate::{
    books::interface::PriceLadder, config::UnderflowPolicy, decimals::decimal_type::DecimalType, error::BookError,
    event::Event, side::Side,
};

/// A single mutation against one ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LadderOp<V: DecimalType> {
    Delta { price: V, delta: V },
    Absolute { price: V, qty: V },
}

impl<V: DecimalType> LadderOp<V> {
    /// Fail if this op is not allowed against `ladder` under `policy`. Does not mutate.
    pub fn check<L: PriceLadder<V>>(&self, ladder: &L, policy: UnderflowPolicy) -> Result<(), BookError> {
        match *self {
            Self::Delta { price, delta } => ladder.check_delta(price, delta, policy),
            Self::Absolute { .. } => Ok(()),
        }
    }

    pub fn apply<L: PriceLadder<V>>(&self, ladder: &mut L) -> Result<(), BookError> {
        match *self {
            Self::Delta { price, delta } => ladder.apply_delta(price, delta).map(|_| ()),
            Self::Absolute { price, qty } => {
                ladder.apply_absolute(price, qty);
                Ok(())
            }
        }
    }
}

/// The ops an event expands to, in application order. Both ops of a price move target the
/// same side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interpretation<V: DecimalType> {
    pub side: Side,
    first: LadderOp<V>,
    second: Option<LadderOp<V>>,
}

impl<V: DecimalType> Interpretation<V> {
    #[inline]
    fn single(side: Side, op: LadderOp<V>) -> Self {
        Self { side, first: op, second: None }
    }

    #[inline]
    pub fn ops(&self) -> impl Iterator<Item = LadderOp<V>> + '_ {
        std::iter::once(self.first).chain(self.second)
    }

    /// Validate every op before applying any of them, so a rejected event leaves the ladder as
    /// it was. The two ops of a price move never share a price, so checking each against the
    /// unmodified ladder is exact.
    pub fn apply_to<L: PriceLadder<V>>(&self, ladder: &mut L, policy: UnderflowPolicy) -> Result<(), BookError> {
        debug_assert_eq!(ladder.side(), self.side);
        for op in self.ops() {
            op.check(ladder, policy)?;
        }
        for op in self.ops() {
            op.apply(ladder)?;
        }
        Ok(())
    }
}

/// Classify an event and expand it into ladder ops.
///
/// A modify whose previous price is missing or equal to the new price collapses into one net
/// delta; otherwise the previous contribution is withdrawn before the new one is added. A net
/// or withdrawn quantity that does not fit in `V` is rejected as [`BookError::Overflow`].
pub fn interpret<V: DecimalType>(event: &Event<V>) -> Result<Interpretation<V>, BookError> {
    match *event {
        Event::AbsoluteUpdate { side, price, qty } => {
            if qty.is_negative() {
                return Err(BookError::negative_absolute(qty));
            }
            Ok(Interpretation::single(side, LadderOp::Absolute { price, qty }))
        }
        Event::DeltaMutation { side, price, delta } => Ok(Interpretation::single(side, LadderOp::Delta { price, delta })),
        Event::ModifyMutation { side, price, qty, prev_price, prev_qty } => {
            let (prev_price, prev_qty) = match (prev_price, prev_qty) {
                (Some(prev_price), Some(prev_qty)) => (prev_price, prev_qty),
                (None, None) => return Ok(Interpretation::single(side, LadderOp::Delta { price, delta: qty })),
                (prev_price, prev_qty) => {
                    return Err(BookError::MalformedModify {
                        prev_price_present: prev_price.is_some(),
                        prev_qty_present: prev_qty.is_some(),
                    })
                }
            };
            if prev_price == price {
                let delta = qty.checked_sub(prev_qty).ok_or_else(|| BookError::overflow(price))?;
                return Ok(Interpretation::single(side, LadderOp::Delta { price, delta }));
            }
            let withdrawn = prev_qty.checked_neg().ok_or_else(|| BookError::overflow(prev_price))?;
            Ok(Interpretation {
                side,
                first: LadderOp::Delta { price: prev_price, delta: withdrawn },
                second: Some(LadderOp::Delta { price, delta: qty }),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{interpret, LadderOp};
    use crate::{error::BookError, event::Event, side::Side};

    fn ops(event: Event<i64>) -> Vec<LadderOp<i64>> {
        interpret(&event).unwrap().ops().collect()
    }

    #[test]
    fn single_op_events() {
        assert_eq!(ops(Event::update(Side::Bid, 10, 100)), vec![LadderOp::Absolute { price: 10, qty: 100 }]);
        assert_eq!(ops(Event::mutation(Side::Ask, 6, -6)), vec![LadderOp::Delta { price: 6, delta: -6 }]);
    }

    #[test]
    fn modify_at_same_price_is_net_delta() {
        assert_eq!(ops(Event::modify(Side::Bid, 100, 20, 100, 10)), vec![LadderOp::Delta { price: 100, delta: 10 }]);
        let without_prev_price = Event::ModifyMutation { side: Side::Bid, price: 100, qty: 20, prev_price: None, prev_qty: None };
        assert_eq!(ops(without_prev_price), vec![LadderOp::Delta { price: 100, delta: 20 }]);
    }

    #[test]
    fn modify_across_prices_withdraws_then_adds() {
        let interpretation = interpret(&Event::modify(Side::Bid, 2, 2, 1, 1)).unwrap();
        assert_eq!(interpretation.side, Side::Bid);
        assert_eq!(
            interpretation.ops().collect::<Vec<_>>(),
            vec![LadderOp::Delta { price: 1, delta: -1 }, LadderOp::Delta { price: 2, delta: 2 }]
        );
    }

    #[test]
    fn half_specified_modify_is_rejected() {
        let event = Event::ModifyMutation { side: Side::Ask, price: 5, qty: 1, prev_price: Some(4), prev_qty: None };
        assert_eq!(
            interpret(&event),
            Err(BookError::MalformedModify { prev_price_present: true, prev_qty_present: false })
        );
        let event = Event::ModifyMutation { side: Side::Ask, price: 5, qty: 1, prev_price: None, prev_qty: Some(1) };
        assert_eq!(
            interpret(&event),
            Err(BookError::MalformedModify { prev_price_present: false, prev_qty_present: true })
        );
    }

    #[test]
    fn negative_absolute_is_rejected() {
        assert_eq!(interpret(&Event::update(Side::Bid, 10, -1)), Err(BookError::negative_absolute(-1i64)));
    }

    #[test]
    fn unrepresentable_modify_is_rejected() {
        assert_eq!(interpret(&Event::modify(Side::Bid, 11, 1, 10, i64::MIN)), Err(BookError::overflow(10i64)));
        assert_eq!(interpret(&Event::modify(Side::Ask, 10, i64::MAX, 10, -1)), Err(BookError::overflow(10i64)));
        assert_eq!(ops(Event::modify(Side::Ask, 10, 0, 10, i64::MAX)), vec![LadderOp::Delta { price: 10, delta: -i64::MAX }]);
    }
}
