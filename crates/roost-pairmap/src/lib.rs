#![forbid(unsafe_code)]

//! Pair-keyed associative map for `roost`.
//!
//! [`PairMap`] stores values under an ordered pair of independent keys and
//! answers point lookups, row/column projections over either key component,
//! and whole-table enumeration. Inserts are strict: an already-mapped pair is
//! rejected with [`DuplicateKey`] rather than overwritten, and bulk
//! population via [`PairMap::fill`] commits all of its cross product or none
//! of it.
//!
//! Hashing uses `ahash` throughout. Enable the `tracing` feature for
//! structured debug events on rejected inserts and fill commits.

pub mod map;

pub use map::{DuplicateKey, IntoIter, Iter, PairMap};
