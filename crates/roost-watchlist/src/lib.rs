#![forbid(unsafe_code)]

//! Mutation-observable list for `roost`.
//!
//! [`WatchList`] is a growable list that reports every mutation to watcher
//! callbacks, synchronously and in registration order: insertions, removals,
//! and in-place updates each have their own channel. Watchers hold a
//! [`Subscription`] guard that cancels on drop, or stay attached forever via
//! [`Subscription::detach`].
//!
//! Out-of-range access answers [`IndexOutOfBounds`] (except `remove_at`,
//! which treats a bad index as a silent no-op). The list is single-threaded
//! by construction; watcher storage uses `Rc`.
//!
//! Enable the `tracing` feature for structured debug events on mutations and
//! rejected indexes.

pub mod list;
pub mod subscribe;

pub use list::{ChangedFn, IndexOutOfBounds, InsertedFn, RemovedFn, WatchList};
pub use subscribe::Subscription;
