use core::fmt::{self, Debug};
use core::iter::FusedIterator;

#[cfg(feature = "std")]
use crate::polyfill::HashSet;
#[cfg(feature = "std")]
use core::hash::Hash;

/// A lazy iterator producing the items of a sequence that some element of another
/// sequence matches, according to a predicate.
///
/// This `struct` is created by the [`intersected_by`] method on
/// [`SequenceAlgebra`]. See its documentation for more.
///
/// [`intersected_by`]: super::SequenceAlgebra::intersected_by
/// [`SequenceAlgebra`]: super::SequenceAlgebra
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct IntersectedBy<'o, I, U, P> {
    iter: I,
    other: &'o [U],
    predicate: P,
}

impl<'o, I, U, P> IntersectedBy<'o, I, U, P> {
    pub(super) fn new(iter: I, other: &'o [U], predicate: P) -> Self {
        IntersectedBy { iter, other, predicate }
    }
}

impl<I: Debug, U: Debug, P> Debug for IntersectedBy<'_, I, U, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntersectedBy")
            .field("iter", &self.iter)
            .field("other", &self.other)
            .finish()
    }
}

impl<I, U, P> Iterator for IntersectedBy<'_, I, U, P>
where
    I: Iterator,
    P: FnMut(&I::Item, &U) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.other.is_empty() {
            return None;
        }

        let predicate = &mut self.predicate;
        loop {
            let next = self.iter.next()?;
            if self.other.iter().any(|other| predicate(&next, other)) {
                return Some(next);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.other.is_empty() {
            (0, Some(0))
        } else {
            (0, self.iter.size_hint().1)
        }
    }
}

impl<I, U, P> FusedIterator for IntersectedBy<'_, I, U, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item, &U) -> bool,
{
}

/// A lazy iterator producing the items of a sequence that also occur in another
/// sequence.
///
/// This `struct` is created by the [`intersected`] method on [`SequenceAlgebra`].
/// See its documentation for more.
///
/// [`intersected`]: super::SequenceAlgebra::intersected
/// [`SequenceAlgebra`]: super::SequenceAlgebra
#[cfg(feature = "std")]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Intersected<I: Iterator> {
    inner: IntersectedInner<I>,
}

#[cfg(feature = "std")]
enum IntersectedInner<I: Iterator> {
    Search {
        // iterate the source, look up in the other set
        iter: I,
        other_set: HashSet<I::Item>,
    },
    Empty, // the other set is empty, so is the intersection
}

#[cfg(feature = "std")]
impl<I> Intersected<I>
where
    I: Iterator,
    I::Item: Hash + Eq,
{
    pub(super) fn new<O>(iter: I, other: O) -> Self
    where
        O: IntoIterator<Item = I::Item>,
    {
        let other_set: HashSet<I::Item> = other.into_iter().collect();
        Intersected {
            inner: if other_set.is_empty() {
                IntersectedInner::Empty
            } else {
                IntersectedInner::Search { iter, other_set }
            },
        }
    }
}

// Explicit Debug impl necessary because of issue #26925
#[cfg(feature = "std")]
impl<I> Debug for IntersectedInner<I>
where
    I: Iterator + Debug,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntersectedInner::Search { iter, other_set } => f
                .debug_struct("Search")
                .field("iter", iter)
                .field("other_set", other_set)
                .finish(),
            IntersectedInner::Empty => f.write_str("Empty"),
        }
    }
}

#[cfg(feature = "std")]
impl<I> Debug for Intersected<I>
where
    I: Iterator + Debug,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Intersected").field(&self.inner).finish()
    }
}

#[cfg(feature = "std")]
impl<I> Clone for Intersected<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Intersected {
            inner: match &self.inner {
                IntersectedInner::Search { iter, other_set } => {
                    IntersectedInner::Search { iter: iter.clone(), other_set: other_set.clone() }
                }
                IntersectedInner::Empty => IntersectedInner::Empty,
            },
        }
    }
}

#[cfg(feature = "std")]
impl<I> Iterator for Intersected<I>
where
    I: Iterator,
    I::Item: Hash + Eq,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        match &mut self.inner {
            IntersectedInner::Search { iter, other_set } => loop {
                let next = iter.next()?;
                if other_set.contains(&next) {
                    return Some(next);
                }
            },
            IntersectedInner::Empty => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            IntersectedInner::Search { iter, .. } => (0, iter.size_hint().1),
            IntersectedInner::Empty => (0, Some(0)),
        }
    }
}

#[cfg(feature = "std")]
impl<I> FusedIterator for Intersected<I>
where
    I: FusedIterator,
    I::Item: Hash + Eq,
{
}
