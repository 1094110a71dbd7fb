use alloc::vec::Vec;
use core::fmt::{self, Debug};
use core::iter::FusedIterator;

#[cfg(feature = "std")]
use crate::polyfill::HashSet;
#[cfg(feature = "std")]
use core::hash::Hash;

/// A lazy iterator producing the first item of every equivalence class of a
/// sequence, according to a predicate.
///
/// This `struct` is created by the [`filtering_duplicates_by`] method on
/// [`SequenceAlgebra`]. See its documentation for more.
///
/// [`filtering_duplicates_by`]: super::SequenceAlgebra::filtering_duplicates_by
/// [`SequenceAlgebra`]: super::SequenceAlgebra
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct FilteringDuplicatesBy<I: Iterator, P> {
    iter: I,
    // clones of the items yielded so far, in order
    seen: Vec<I::Item>,
    predicate: P,
}

impl<I: Iterator, P> FilteringDuplicatesBy<I, P> {
    pub(super) fn new(iter: I, predicate: P) -> Self {
        FilteringDuplicatesBy { iter, seen: Vec::new(), predicate }
    }
}

impl<I, P> Debug for FilteringDuplicatesBy<I, P>
where
    I: Iterator + Debug,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilteringDuplicatesBy")
            .field("iter", &self.iter)
            .field("seen", &self.seen)
            .finish()
    }
}

impl<I, P> Clone for FilteringDuplicatesBy<I, P>
where
    I: Iterator + Clone,
    I::Item: Clone,
    P: Clone,
{
    fn clone(&self) -> Self {
        FilteringDuplicatesBy {
            iter: self.iter.clone(),
            seen: self.seen.clone(),
            predicate: self.predicate.clone(),
        }
    }
}

impl<I, P> Iterator for FilteringDuplicatesBy<I, P>
where
    I: Iterator,
    I::Item: Clone,
    P: FnMut(&I::Item, &I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let predicate = &mut self.predicate;
        loop {
            let next = self.iter.next()?;
            if !self.seen.iter().any(|seen| predicate(&next, seen)) {
                self.seen.push(next.clone());
                return Some(next);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        // A first item can never be a duplicate.
        (if self.seen.is_empty() { lower.min(1) } else { 0 }, upper)
    }
}

impl<I, P> FusedIterator for FilteringDuplicatesBy<I, P>
where
    I: FusedIterator,
    I::Item: Clone,
    P: FnMut(&I::Item, &I::Item) -> bool,
{
}

/// A lazy iterator producing the first occurrence of every distinct item of a
/// sequence.
///
/// This `struct` is created by the [`filtering_duplicates`] method on
/// [`SequenceAlgebra`]. See its documentation for more.
///
/// [`filtering_duplicates`]: super::SequenceAlgebra::filtering_duplicates
/// [`SequenceAlgebra`]: super::SequenceAlgebra
#[cfg(feature = "std")]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct FilteringDuplicates<I: Iterator> {
    iter: I,
    seen: HashSet<I::Item>,
}

#[cfg(feature = "std")]
impl<I: Iterator> FilteringDuplicates<I> {
    pub(super) fn new(iter: I) -> Self {
        FilteringDuplicates { iter, seen: HashSet::new() }
    }
}

#[cfg(feature = "std")]
impl<I> Debug for FilteringDuplicates<I>
where
    I: Iterator + Debug,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilteringDuplicates")
            .field("iter", &self.iter)
            .field("seen", &self.seen)
            .finish()
    }
}

#[cfg(feature = "std")]
impl<I> Clone for FilteringDuplicates<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        FilteringDuplicates { iter: self.iter.clone(), seen: self.seen.clone() }
    }
}

#[cfg(feature = "std")]
impl<I> Iterator for FilteringDuplicates<I>
where
    I: Iterator,
    I::Item: Hash + Eq + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let next = self.iter.next()?;
            if !self.seen.contains(&next) {
                self.seen.insert(next.clone());
                return Some(next);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (if self.seen.is_empty() { lower.min(1) } else { 0 }, upper)
    }
}

#[cfg(feature = "std")]
impl<I> FusedIterator for FilteringDuplicates<I>
where
    I: FusedIterator,
    I::Item: Hash + Eq + Clone,
{
}
