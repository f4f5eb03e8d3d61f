//! Top-of-book reconstruction from price-level event streams.
//!
//! An [`OrderBookEngine`] keeps one price ladder per side and, after every event, reports the
//! best `n` levels of each. Events come in two dialects: signed mutations (optionally moving a
//! contribution from a previous price) and absolute updates that replace a level outright.
//!
//! ```
//! use topbook::{BookConfig, Event, Level, OrderBookEngine, Side};
//!
//! let mut book: OrderBookEngine<i64> = OrderBookEngine::new(BookConfig::new(1)).unwrap();
//! book.apply(Event::mutation(Side::Bid, 1, 1)).unwrap();
//! let snapshot = book.apply(Event::mutation(Side::Bid, 3, 3)).unwrap();
//! assert_eq!(snapshot.best_bid(), Some(Level::new(3, 3)));
//! assert_eq!(snapshot.best_ask(), None);
//! ```

pub mod books {
    pub mod btree_ladder;
    pub mod interface;
    pub mod vec_ladder;
}
pub mod config;
pub mod decimals {
    pub mod decimal_type;
}
pub mod engine;
pub mod error;
pub mod event;
pub mod event_kind;
pub mod interpreter;
pub mod level;
pub mod partition;
pub mod row;
pub mod side;
pub mod snapshot;
pub mod stream;

pub use books::{btree_ladder::BTreeLadder, interface::PriceLadder, vec_ladder::VecLadder};
pub use config::{BookConfig, BookMode, UnderflowPolicy};
pub use decimals::decimal_type::DecimalType;
pub use engine::{BookState, OrderBookEngine};
pub use error::BookError;
pub use event::Event;
pub use event_kind::EventKind;
pub use level::Level;
pub use partition::PartitionedBooks;
pub use row::RawRow;
pub use side::Side;
pub use snapshot::Snapshot;
