//! Order-preserving set algebra over sequences.
//!
//! Every operation is an adapter on a *source* iterator. Surviving items keep
//! their original relative order; [`differenced`](SequenceAlgebra::differenced)
//! and [`intersected`](SequenceAlgebra::intersected) also keep duplicates from the
//! source, while the `filtering_duplicates` adapters keep only the first member of
//! each equivalence class.
//!
//! | operation | predicate path | hash path (`std`) |
//! |---|---|---|
//! | difference | [`differenced_by`](SequenceAlgebra::differenced_by), O(N·M) | [`differenced`](SequenceAlgebra::differenced), O(N + M) |
//! | intersection | [`intersected_by`](SequenceAlgebra::intersected_by), O(N·M) | [`intersected`](SequenceAlgebra::intersected), O(N + M) |
//! | deduplication | [`filtering_duplicates_by`](SequenceAlgebra::filtering_duplicates_by), O(N²) | [`filtering_duplicates`](SequenceAlgebra::filtering_duplicates), O(N) |
//!
//! The predicate path compares a source item against `other` elements of a possibly
//! different type, so it needs `other` as a slice it can scan repeatedly. The
//! predicate is assumed to be an equivalence relation; if it is not, results are
//! unspecified but nothing panics. Both paths yield the very same sequence whenever
//! both apply (with `==` as the predicate).

mod accumulate;
mod dedup;
mod difference;
mod intersection;

pub use accumulate::Accumulated;
pub use dedup::FilteringDuplicatesBy;
pub use difference::DifferencedBy;
pub use intersection::IntersectedBy;

#[cfg(feature = "std")]
pub use dedup::FilteringDuplicates;
#[cfg(feature = "std")]
pub use difference::Differenced;
#[cfg(feature = "std")]
pub use intersection::Intersected;

use alloc::vec::Vec;
#[cfg(feature = "std")]
use core::hash::Hash;
use rand::Rng;

use crate::shuffle::SliceShuffle;

/// An extension trait for iterators, providing order-preserving set algebra.
///
/// Implemented for every [`Iterator`].
pub trait SequenceAlgebra: Iterator {
    /// Keeps the items for which no element of `other` satisfies `predicate`.
    ///
    /// Each item is compared against every element of `other`, so the whole
    /// operation is O(N·M).
    ///
    /// # Examples
    ///
    /// ```
    /// use seqalg::prelude::*;
    ///
    /// let diff: Vec<i32> = [1, 1, 2, 2, 3, 3]
    ///     .into_iter()
    ///     .differenced_by(&["1", "2"], |&n, s| s.parse() == Ok(n))
    ///     .collect();
    /// assert_eq!(diff, [3, 3]);
    /// ```
    fn differenced_by<'o, U, P>(self, other: &'o [U], predicate: P) -> DifferencedBy<'o, Self, U, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item, &U) -> bool,
    {
        DifferencedBy::new(self, other, predicate)
    }

    /// Keeps the items for which at least one element of `other` satisfies
    /// `predicate`.
    ///
    /// Each item is compared against `other` until the first match, so the whole
    /// operation is O(N·M).
    ///
    /// # Examples
    ///
    /// ```
    /// use seqalg::prelude::*;
    ///
    /// let common: Vec<i32> = [1, 1, 2, 2, 3, 3]
    ///     .into_iter()
    ///     .intersected_by(&["1", "2"], |&n, s| s.parse() == Ok(n))
    ///     .collect();
    /// assert_eq!(common, [1, 1, 2, 2]);
    /// ```
    fn intersected_by<'o, U, P>(self, other: &'o [U], predicate: P) -> IntersectedBy<'o, Self, U, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item, &U) -> bool,
    {
        IntersectedBy::new(self, other, predicate)
    }

    /// Keeps only the first item of every class of items that `predicate` deems
    /// equivalent.
    ///
    /// Each item is compared against the items kept so far, so the whole operation
    /// is O(N²). A clone of every kept item is remembered for those comparisons.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqalg::prelude::*;
    ///
    /// let words = ["Apple", "apple", "Pear", "APPLE", "pear", "fig"];
    /// let unique: Vec<&str> = words
    ///     .into_iter()
    ///     .filtering_duplicates_by(|a, b| a.eq_ignore_ascii_case(b))
    ///     .collect();
    /// assert_eq!(unique, ["Apple", "Pear", "fig"]);
    /// ```
    fn filtering_duplicates_by<P>(self, predicate: P) -> FilteringDuplicatesBy<Self, P>
    where
        Self: Sized,
        Self::Item: Clone,
        P: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        FilteringDuplicatesBy::new(self, predicate)
    }

    /// Keeps the items that do not occur in `other`.
    ///
    /// `other` is gathered into a hash set up front; each item then costs one
    /// lookup. An empty `other` lets every item through without hashing it.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqalg::prelude::*;
    ///
    /// let diff: Vec<_> = [1, 1, 2, 2, 3, 3].into_iter().differenced([1, 2]).collect();
    /// assert_eq!(diff, [3, 3]);
    /// ```
    #[cfg(feature = "std")]
    fn differenced<O>(self, other: O) -> Differenced<Self>
    where
        Self: Sized,
        Self::Item: Hash + Eq,
        O: IntoIterator<Item = Self::Item>,
    {
        Differenced::new(self, other)
    }

    /// Keeps the items that also occur in `other`.
    ///
    /// `other` is gathered into a hash set up front; each item then costs one
    /// lookup. An empty `other` yields nothing without pulling the source.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqalg::prelude::*;
    ///
    /// let mine = ["ant", "bee", "ant", "cat"];
    /// let yours = ["cat", "ant"];
    /// let shared: Vec<_> = mine.iter().intersected(&yours).collect();
    /// assert_eq!(shared, [&"ant", &"ant", &"cat"]);
    /// ```
    #[cfg(feature = "std")]
    fn intersected<O>(self, other: O) -> Intersected<Self>
    where
        Self: Sized,
        Self::Item: Hash + Eq,
        O: IntoIterator<Item = Self::Item>,
    {
        Intersected::new(self, other)
    }

    /// Keeps only the first occurrence of every item.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqalg::prelude::*;
    ///
    /// let unique: Vec<_> = [4, 1, 4, 2, 3, 4].into_iter().filtering_duplicates().collect();
    /// assert_eq!(unique, [4, 1, 2, 3]);
    /// ```
    #[cfg(feature = "std")]
    fn filtering_duplicates(self) -> FilteringDuplicates<Self>
    where
        Self: Sized,
        Self::Item: Hash + Eq + Clone,
    {
        FilteringDuplicates::new(self)
    }

    /// Folds the items like [`Iterator::fold`], but yields every intermediate
    /// result instead of only the last.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqalg::prelude::*;
    ///
    /// let running: Vec<_> = [1, 2, 3, 4].into_iter().accumulated(0, |sum, x| sum + x).collect();
    /// assert_eq!(running, [1, 3, 6, 10]);
    /// ```
    fn accumulated<B, F>(self, initial: B, f: F) -> Accumulated<Self, B, F>
    where
        Self: Sized,
        B: Clone,
        F: FnMut(B, Self::Item) -> B,
    {
        Accumulated::new(self, initial, f)
    }

    /// Collects the items into a `Vec` in a uniformly random order.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqalg::prelude::*;
    ///
    /// let mut rng = rand::thread_rng();
    /// let mut drawn = (1..=5).shuffled_with(&mut rng);
    /// drawn.sort();
    /// assert_eq!(drawn, [1, 2, 3, 4, 5]);
    /// ```
    fn shuffled_with<R: Rng + ?Sized>(self, rng: &mut R) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        let mut items: Vec<Self::Item> = self.collect();
        items.shuffle_with(rng);
        items
    }
}

impl<I: Iterator> SequenceAlgebra for I {}
