//! Batch entry points for hosts that hand over whole columns at once.
//!
//! Each row produces exactly one snapshot, in input order. The first rejected row fails the
//! whole batch, matching how a columnar expression either yields a full output column or an
//! error.

use tracing::debug;

use crate::{
    books::{btree_ladder::BTreeLadder, interface::PriceLadder},
    config::{BookConfig, BookMode},
    decimals::decimal_type::DecimalType,
    engine::OrderBookEngine,
    error::BookError,
    row::RawRow,
    snapshot::Snapshot,
};

/// Fold `rows` through a fresh book configured by `config`.
pub fn calculate_bbo<V, L, I>(rows: I, config: BookConfig) -> Result<Vec<Snapshot<V>>, BookError>
where
    V: DecimalType,
    L: PriceLadder<V>,
    I: IntoIterator<Item = RawRow<V>>,
{
    let mut book = OrderBookEngine::<V, L>::new(config)?;
    let rows = rows.into_iter();
    let mut snapshots = Vec::with_capacity(rows.size_hint().0);
    for (index, row) in rows.enumerate() {
        let snapshot = row.into_event(config.mode).and_then(|event| book.apply(event)).map_err(|err| {
            debug!(index, %err, "batch aborted");
            err
        })?;
        snapshots.push(snapshot);
    }
    Ok(snapshots)
}

/// Top `n` levels per side from signed quantity changes, with optional previous price and
/// quantity columns selecting modifies.
pub fn top_n_levels_from_price_mutations<V, I>(rows: I, n: usize) -> Result<Vec<Snapshot<V>>, BookError>
where
    V: DecimalType,
    I: IntoIterator<Item = RawRow<V>>,
{
    calculate_bbo::<V, BTreeLadder<V>, I>(rows, BookConfig::new(n).with_mode(BookMode::Mutation))
}

/// Top `n` levels per side from absolute level snapshots, where each quantity replaces the
/// previous one and zero removes the level.
pub fn top_n_levels_from_price_updates<V, I>(rows: I, n: usize) -> Result<Vec<Snapshot<V>>, BookError>
where
    V: DecimalType,
    I: IntoIterator<Item = RawRow<V>>,
{
    calculate_bbo::<V, BTreeLadder<V>, I>(rows, BookConfig::new(n).with_mode(BookMode::Update))
}
