#![forbid(unsafe_code)]

//! Roost public facade crate.
//!
//! Re-exports the two containers and their support types: [`PairMap`], an
//! associative map keyed by an ordered pair of independent keys, and
//! [`WatchList`], a list that reports every mutation to watcher callbacks.

pub use roost_pairmap::{DuplicateKey, PairMap};
pub use roost_watchlist::{IndexOutOfBounds, Subscription, WatchList};

pub mod prelude {
    pub use roost_pairmap as pairmap;
    pub use roost_watchlist as watchlist;
}
