#![forbid(unsafe_code)]

//! Watched list storage and its mutation-report channels.
//!
//! # Invariants
//!
//! 1. Every mutation made through the list API is reported on exactly one
//!    channel: insertions (`push`, `insert`, `extend`), removals (`remove`,
//!    `remove_at`, `clear`), or in-place updates (`set`).
//! 2. Callbacks run synchronously on the mutating call, in registration
//!    order within their channel.
//! 3. Insertions and updates are reported after the list has mutated, as are
//!    `remove_at` and `clear`. `remove` is the one pre-report: watchers hear
//!    about the removal while the element is still in place.
//! 4. A dropped [`Subscription`] never fires again; a detached one lives as
//!    long as the list.
//! 5. Watchers are not part of a list's value: cloning copies elements only,
//!    seeding constructors report nothing, and equality compares elements.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Out-of-range `get`/`set` | `index >= len` | `Err(IndexOutOfBounds)`, no report |
//! | Out-of-range `insert` | `index > len` | `Err(IndexOutOfBounds)`, no report |
//! | Out-of-range `remove_at` | `index >= len` | `None`, no report (not an error) |
//! | `remove` of an absent element | no equal element | `false`, no report |
//! | Callback panic | watcher code | propagates to the mutator, skipping the rest of that cycle; a post-report mutation stands, a panic during `remove`'s pre-report leaves the element in place |
//!
//! # Usage
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use roost_watchlist::WatchList;
//!
//! let mut list = WatchList::new();
//! let seen = Rc::new(Cell::new(0u32));
//!
//! let seen_by_watcher = Rc::clone(&seen);
//! let watcher = list.on_inserted(move |_, element, index| {
//!     seen_by_watcher.set(seen_by_watcher.get() + element + index as u32);
//! });
//!
//! list.push(10); // element 10, index 0
//! list.push(20); // element 20, index 1
//! assert_eq!(seen.get(), 31);
//!
//! drop(watcher);
//! list.push(30); // nobody listening
//! assert_eq!(seen.get(), 31);
//! ```

use std::fmt;
use std::rc::Rc;

use crate::subscribe::{Registry, Subscription};

/// Rejected index: outside the list's bounds at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The offending index.
    pub index: usize,
    /// List length at the time of the call.
    pub len: usize,
}

impl fmt::Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} out of bounds for list of length {}",
            self.index, self.len
        )
    }
}

impl std::error::Error for IndexOutOfBounds {}

/// Watcher callback for insertions: `(list, element, index)`.
pub type InsertedFn<T> = dyn Fn(&WatchList<T>, &T, usize);
/// Watcher callback for removals: `(list, element, index)`.
pub type RemovedFn<T> = dyn Fn(&WatchList<T>, &T, usize);
/// Watcher callback for in-place updates: `(list, new, old, index)`.
pub type ChangedFn<T> = dyn Fn(&WatchList<T>, &T, &T, usize);

/// A growable list that reports every mutation to registered watchers.
///
/// Three independent channels cover the mutation vocabulary: insertions,
/// removals, and in-place updates. Watchers attach through
/// [`WatchList::on_inserted`], [`WatchList::on_removed`], and
/// [`WatchList::on_changed`] and stay attached until their [`Subscription`]
/// guard is dropped (or forever, after [`Subscription::detach`]).
///
/// Callbacks receive the list itself as their first argument, behind a
/// shared reference. That is the re-entrancy story: a callback can read the
/// list freely and even register further watchers, but every mutating method
/// takes `&mut self`, so mutation from inside a callback does not compile.
///
/// Watcher storage uses `Rc`, so the list is single-threaded: neither `Send`
/// nor `Sync`.
pub struct WatchList<T> {
    items: Vec<T>,
    inserted: Registry<InsertedFn<T>>,
    removed: Registry<RemovedFn<T>>,
    changed: Registry<ChangedFn<T>>,
}

impl<T> WatchList<T> {
    /// Create an empty list with no watchers.
    #[must_use]
    pub fn new() -> Self {
        Self::from(Vec::new())
    }

    /// Create an empty list with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from(Vec::with_capacity(capacity))
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }

    /// Iterate over the elements in order.
    ///
    /// The iterator borrows the list, so mutating while an iteration is
    /// live does not compile; there is no concurrent-modification case to
    /// define away.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Bounds-checked element access.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfBounds`] when `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.items
            .get(index)
            .ok_or_else(|| self.out_of_bounds(index))
    }

    /// Append an element and report it on the insertion channel.
    pub fn push(&mut self, element: T) {
        self.items.push(element);
        self.notify_inserted(self.items.len() - 1);
    }

    /// Insert an element at `index`, shifting the tail right, and report it
    /// on the insertion channel. `index == len` appends.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfBounds`] when `index > len`; nothing is inserted
    /// and nothing is reported.
    pub fn insert(&mut self, index: usize, element: T) -> Result<(), IndexOutOfBounds> {
        if index > self.items.len() {
            return Err(self.out_of_bounds(index));
        }
        self.items.insert(index, element);
        self.notify_inserted(index);
        Ok(())
    }

    /// Replace the element at `index`, report `(new, old, index)` on the
    /// update channel, and hand the old element back.
    ///
    /// Watchers run after the replacement, so reading the list inside the
    /// callback observes the new element.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfBounds`] when `index >= len`; nothing changes and
    /// nothing is reported.
    pub fn set(&mut self, index: usize, element: T) -> Result<T, IndexOutOfBounds> {
        if index >= self.items.len() {
            return Err(self.out_of_bounds(index));
        }
        let old = std::mem::replace(&mut self.items[index], element);
        self.notify_changed(&old, index);
        Ok(old)
    }

    /// Remove the element at `index`, report it, and hand it back.
    ///
    /// An out-of-range index is a silent no-op answering `None`, not an
    /// error. Watchers run after the element has left the list.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                message = "watchlist.remove_at.ignored",
                index,
                len = self.items.len()
            );
            return None;
        }
        let element = self.items.remove(index);
        self.notify_removed(&element, index);
        Some(element)
    }

    /// Remove the first element equal to `item`. Answers whether anything
    /// was removed.
    ///
    /// This is the one pre-reporting mutation: watchers run while the
    /// element is still in place, then it leaves the list.
    pub fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        let Some(index) = self.index_of(item) else {
            return false;
        };
        self.notify_removed(&self.items[index], index);
        self.items.remove(index);
        true
    }

    /// Remove every element, reporting each one individually.
    ///
    /// Drains from the front: every report carries index 0 and the
    /// then-current head, in original element order.
    pub fn clear(&mut self) {
        while self.remove_at(0).is_some() {}
    }

    /// Index of the first element equal to `item`, if any. Linear scan.
    #[must_use]
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().position(|candidate| candidate == item)
    }

    /// Whether any element equals `item`.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(item).is_some()
    }

    /// Clone elements into `target` starting at `offset`, truncating at the
    /// destination's end. Answers how many elements were copied; slots
    /// outside the written window are left untouched. Pure read: nothing is
    /// reported.
    pub fn copy_into(&self, target: &mut [T], offset: usize) -> usize
    where
        T: Clone,
    {
        let Some(room) = target.len().checked_sub(offset) else {
            return 0;
        };
        let count = self.items.len().min(room);
        target[offset..offset + count].clone_from_slice(&self.items[..count]);
        count
    }

    /// Watch the insertion channel. The callback receives
    /// `(list, element, index)` for every `push`, `insert`, and `extend`
    /// element.
    pub fn on_inserted(
        &self,
        callback: impl Fn(&WatchList<T>, &T, usize) + 'static,
    ) -> Subscription {
        self.inserted.subscribe(Rc::new(callback))
    }

    /// Watch the removal channel. The callback receives
    /// `(list, element, index)` for every `remove`, `remove_at`, and `clear`
    /// element.
    pub fn on_removed(
        &self,
        callback: impl Fn(&WatchList<T>, &T, usize) + 'static,
    ) -> Subscription {
        self.removed.subscribe(Rc::new(callback))
    }

    /// Watch the update channel. The callback receives
    /// `(list, new, old, index)` for every `set`.
    pub fn on_changed(
        &self,
        callback: impl Fn(&WatchList<T>, &T, &T, usize) + 'static,
    ) -> Subscription {
        self.changed.subscribe(Rc::new(callback))
    }

    fn notify_inserted(&self, index: usize) {
        #[cfg(feature = "tracing")]
        tracing::trace!(message = "watchlist.inserted", index, len = self.items.len());
        self.inserted.notify(|cb| cb(self, &self.items[index], index));
    }

    fn notify_removed(&self, element: &T, index: usize) {
        #[cfg(feature = "tracing")]
        tracing::trace!(message = "watchlist.removed", index, len = self.items.len());
        self.removed.notify(|cb| cb(self, element, index));
    }

    fn notify_changed(&self, old: &T, index: usize) {
        #[cfg(feature = "tracing")]
        tracing::trace!(message = "watchlist.changed", index);
        self.changed.notify(|cb| cb(self, &self.items[index], old, index));
    }

    fn out_of_bounds(&self, index: usize) -> IndexOutOfBounds {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "watchlist.out_of_bounds",
            index,
            len = self.items.len()
        );
        IndexOutOfBounds {
            index,
            len: self.items.len(),
        }
    }
}

impl<T> Default for WatchList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for WatchList<T> {
    /// Clones the elements only. The clone starts with no watchers.
    fn clone(&self) -> Self {
        Self::from(self.items.clone())
    }
}

impl<T: fmt::Debug> fmt::Debug for WatchList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

/// Element-wise equality; watchers are not part of a list's value.
impl<T: PartialEq> PartialEq for WatchList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for WatchList<T> {}

impl<T> From<Vec<T>> for WatchList<T> {
    /// Seed the list from existing elements. Nothing is reported; no
    /// watcher can be attached before the list exists.
    fn from(items: Vec<T>) -> Self {
        Self {
            items,
            inserted: Registry::new(),
            removed: Registry::new(),
            changed: Registry::new(),
        }
    }
}

impl<T> FromIterator<T> for WatchList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> Extend<T> for WatchList<T> {
    /// Push each element in turn, reporting every insertion individually.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}

/// Panicking index sugar for reads. The fallible path is
/// [`WatchList::get`]; there is no `IndexMut`, since writes must go through
/// [`WatchList::set`] to reach the update channel.
impl<T> std::ops::Index<usize> for WatchList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a WatchList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for WatchList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Consume the list into its elements. Watchers die with the list;
    /// nothing is reported.
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
