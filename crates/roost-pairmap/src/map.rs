#![forbid(unsafe_code)]

//! Pair-keyed map storage, projections, and bulk population.
//!
//! # Invariants
//!
//! 1. A `(row, col)` pair identifies at most one entry; [`PairMap::insert`]
//!    rejects collisions instead of overwriting.
//! 2. Entries are created only through `insert` and `fill`; nothing removes
//!    an individual entry, so the table never shrinks.
//! 3. [`PairMap::fill`] is all-or-nothing: either every cross-product entry
//!    lands, or the map is left untouched.
//! 4. Enumeration order is the hash table's internal order: unspecified, but
//!    stable for one instance while no mutation happens in between. It is
//!    not insertion order.
//! 5. Equality ignores enumeration order — two maps are equal exactly when
//!    their entry sets are equal.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Duplicate insert | `(row, col)` already present | `Err(DuplicateKey)`, map unchanged |
//! | Colliding fill | generated pair hits an existing or staged entry | `Err(DuplicateKey)`, map unchanged |
//! | Absent lookup | pair never inserted | `None` (not an error) |
//!
//! # Usage
//!
//! ```rust
//! use roost_pairmap::PairMap;
//!
//! let mut grades: PairMap<&str, &str, u32> = PairMap::new();
//! grades.insert("ada", "math", 97).unwrap();
//! grades.insert("ada", "physics", 91).unwrap();
//! grades.insert("brin", "math", 84).unwrap();
//!
//! assert_eq!(grades.get(&"ada", &"math"), Some(&97));
//! assert_eq!(grades.get(&"brin", &"physics"), None);
//! assert_eq!(grades.row(&"ada").count(), 2);
//! assert_eq!(grades.column(&"math").count(), 2);
//!
//! // A second insert for the same pair is rejected, never overwritten.
//! assert!(grades.insert("ada", "math", 0).is_err());
//! assert_eq!(grades.get(&"ada", &"math"), Some(&97));
//! ```

use std::collections::hash_map;
use std::fmt;
use std::hash::Hash;

use ahash::AHashMap;

/// Storage identity of one entry: both key components, compared and hashed
/// structurally. Never exposed; the public surface speaks in loose
/// `(row, col)` pairs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct PairKey<R, C> {
    row: R,
    col: C,
}

/// Rejected strict insert: the `(row, col)` pair is already mapped.
///
/// The offending keys travel back to the caller so they are not lost when an
/// owned insert fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateKey<R, C> {
    /// First key component of the rejected pair.
    pub row: R,
    /// Second key component of the rejected pair.
    pub col: C,
}

impl<R: fmt::Debug, C: fmt::Debug> fmt::Display for DuplicateKey<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "duplicate entry for key pair ({:?}, {:?})",
            self.row, self.col
        )
    }
}

impl<R: fmt::Debug, C: fmt::Debug> std::error::Error for DuplicateKey<R, C> {}

/// An associative container keyed by an ordered pair of independent key
/// types, with row/column projections over either component.
///
/// `PairMap` is a strict-insert map: mapping an already-mapped pair is an
/// error, never an upsert. There is no per-entry removal; the map only grows
/// until it is dropped.
///
/// Key types must supply consistent `Eq`/`Hash` (`a == b` implies equal
/// hashes) and `Clone`. Lookups probe the hash table with an owned composite
/// key built from cloned components; with the usual small key types (ints,
/// short strings, enums) the clone is negligible.
pub struct PairMap<R, C, V> {
    entries: AHashMap<PairKey<R, C>, V>,
}

impl<R, C, V> PairMap<R, C, V> {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: AHashMap::new(),
        }
    }

    /// Create an empty map with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: AHashMap::with_capacity(capacity),
        }
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over every `(row, col, value)` triple in internal order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, R, C, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }
}

impl<R, C, V> PairMap<R, C, V>
where
    R: Eq + Hash + Clone,
    C: Eq + Hash + Clone,
{
    /// Point lookup. `None` means the pair is unmapped; absence is an
    /// ordinary outcome, not a failure. Never creates an entry.
    #[must_use]
    pub fn get(&self, row: &R, col: &C) -> Option<&V> {
        let probe = PairKey {
            row: row.clone(),
            col: col.clone(),
        };
        self.entries.get(&probe)
    }

    /// Whether the `(row, col)` pair is mapped.
    #[must_use]
    pub fn contains_pair(&self, row: &R, col: &C) -> bool {
        self.get(row, col).is_some()
    }

    /// Insert a new entry.
    ///
    /// Strict insert: if the pair is already mapped the existing value is
    /// kept and the rejected keys come back inside [`DuplicateKey`].
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateKey`] when `(row, col)` is already present.
    pub fn insert(&mut self, row: R, col: C, value: V) -> Result<(), DuplicateKey<R, C>> {
        let key = PairKey { row, col };
        if self.entries.contains_key(&key) {
            #[cfg(feature = "tracing")]
            tracing::debug!(message = "pairmap.insert.duplicate", len = self.entries.len());
            let PairKey { row, col } = key;
            return Err(DuplicateKey { row, col });
        }
        self.entries.insert(key, value);
        #[cfg(feature = "tracing")]
        tracing::trace!(message = "pairmap.insert", len = self.entries.len());
        Ok(())
    }

    /// All entries whose first key equals `row`, as `(col, value)` pairs.
    ///
    /// Linear scan over the whole table; order follows [`PairMap::iter`].
    pub fn row<'a>(&'a self, row: &'a R) -> impl Iterator<Item = (&'a C, &'a V)> {
        self.entries
            .iter()
            .filter_map(move |(key, value)| (key.row == *row).then_some((&key.col, value)))
    }

    /// All entries whose second key equals `col`, as `(row, value)` pairs.
    ///
    /// Symmetric to [`PairMap::row`], fixing the second component.
    pub fn column<'a>(&'a self, col: &'a C) -> impl Iterator<Item = (&'a R, &'a V)> {
        self.entries
            .iter()
            .filter_map(move |(key, value)| (key.col == *col).then_some((&key.row, value)))
    }

    /// Populate every pair in the cross product of `rows` and `cols` with
    /// `generator(&row, &col)`.
    ///
    /// Generation runs `rows` outer, `cols` inner. All generated entries are
    /// staged first and committed only when none of them collides with an
    /// existing entry or with another staged pair, so a failed fill leaves
    /// the map exactly as it was. Repeated keys within `rows` or within
    /// `cols` therefore always fail: they collide inside the cross product
    /// itself.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateKey`] with the first colliding pair encountered.
    pub fn fill<I, J, F>(
        &mut self,
        rows: I,
        cols: J,
        mut generator: F,
    ) -> Result<(), DuplicateKey<R, C>>
    where
        I: IntoIterator<Item = R>,
        J: IntoIterator<Item = C>,
        F: FnMut(&R, &C) -> V,
    {
        let cols: Vec<C> = cols.into_iter().collect();
        let mut staged: AHashMap<PairKey<R, C>, V> = AHashMap::new();
        for row in rows {
            for col in &cols {
                let value = generator(&row, col);
                let key = PairKey {
                    row: row.clone(),
                    col: col.clone(),
                };
                if self.entries.contains_key(&key) || staged.contains_key(&key) {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        message = "pairmap.fill.duplicate",
                        staged = staged.len(),
                        len = self.entries.len()
                    );
                    let PairKey { row, col } = key;
                    return Err(DuplicateKey { row, col });
                }
                staged.insert(key, value);
            }
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(message = "pairmap.fill.commit", inserted = staged.len());
        self.entries.reserve(staged.len());
        self.entries.extend(staged);
        Ok(())
    }
}

impl<R, C, V> Default for PairMap<R, C, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Clone, C: Clone, V: Clone> Clone for PairMap<R, C, V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

/// Entry-set equality: same pairs mapped to equal values, independent of
/// enumeration order.
impl<R, C, V> PartialEq for PairMap<R, C, V>
where
    R: Eq + Hash,
    C: Eq + Hash,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .all(|(key, value)| other.entries.get(key) == Some(value))
    }
}

impl<R, C, V> Eq for PairMap<R, C, V>
where
    R: Eq + Hash,
    C: Eq + Hash,
    V: Eq,
{
}

impl<R: fmt::Debug, C: fmt::Debug, V: fmt::Debug> fmt::Debug for PairMap<R, C, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(key, value)| ((&key.row, &key.col), value)))
            .finish()
    }
}

/// Human-readable dump: one `row, col, value` line per entry, in internal
/// order.
impl<R: fmt::Display, C: fmt::Display, V: fmt::Display> fmt::Display for PairMap<R, C, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.entries {
            writeln!(f, "{}, {}, {}", key.row, key.col, value)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Iterators
// ---------------------------------------------------------------------------

/// Borrowing iterator over `(row, col, value)` triples.
pub struct Iter<'a, R, C, V> {
    inner: hash_map::Iter<'a, PairKey<R, C>, V>,
}

impl<'a, R, C, V> Iterator for Iter<'a, R, C, V> {
    type Item = (&'a R, &'a C, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(key, value)| (&key.row, &key.col, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<R, C, V> ExactSizeIterator for Iter<'_, R, C, V> {}

/// Owning iterator over `(row, col, value)` triples.
pub struct IntoIter<R, C, V> {
    inner: hash_map::IntoIter<PairKey<R, C>, V>,
}

impl<R, C, V> Iterator for IntoIter<R, C, V> {
    type Item = (R, C, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(key, value)| (key.row, key.col, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<R, C, V> ExactSizeIterator for IntoIter<R, C, V> {}

impl<'a, R, C, V> IntoIterator for &'a PairMap<R, C, V> {
    type Item = (&'a R, &'a C, &'a V);
    type IntoIter = Iter<'a, R, C, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<R, C, V> IntoIterator for PairMap<R, C, V> {
    type Item = (R, C, V);
    type IntoIter = IntoIter<R, C, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.entries.into_iter(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
