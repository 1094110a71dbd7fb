use core::fmt::{self, Debug};
use core::iter::FusedIterator;

#[cfg(feature = "std")]
use crate::polyfill::HashSet;
#[cfg(feature = "std")]
use core::hash::Hash;

/// A lazy iterator producing the items of a sequence that no element of another
/// sequence matches, according to a predicate.
///
/// This `struct` is created by the [`differenced_by`] method on
/// [`SequenceAlgebra`]. See its documentation for more.
///
/// [`differenced_by`]: super::SequenceAlgebra::differenced_by
/// [`SequenceAlgebra`]: super::SequenceAlgebra
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct DifferencedBy<'o, I, U, P> {
    iter: I,
    other: &'o [U],
    predicate: P,
}

impl<'o, I, U, P> DifferencedBy<'o, I, U, P> {
    pub(super) fn new(iter: I, other: &'o [U], predicate: P) -> Self {
        DifferencedBy { iter, other, predicate }
    }
}

impl<I: Debug, U: Debug, P> Debug for DifferencedBy<'_, I, U, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DifferencedBy")
            .field("iter", &self.iter)
            .field("other", &self.other)
            .finish()
    }
}

impl<I, U, P> Iterator for DifferencedBy<'_, I, U, P>
where
    I: Iterator,
    P: FnMut(&I::Item, &U) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let predicate = &mut self.predicate;
        loop {
            let next = self.iter.next()?;
            if !self.other.iter().any(|other| predicate(&next, other)) {
                return Some(next);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        if self.other.is_empty() {
            (lower, upper)
        } else {
            (0, upper)
        }
    }
}

impl<I, U, P> FusedIterator for DifferencedBy<'_, I, U, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item, &U) -> bool,
{
}

/// A lazy iterator producing the items of a sequence that do not occur in another
/// sequence.
///
/// This `struct` is created by the [`differenced`] method on [`SequenceAlgebra`].
/// See its documentation for more.
///
/// [`differenced`]: super::SequenceAlgebra::differenced
/// [`SequenceAlgebra`]: super::SequenceAlgebra
#[cfg(feature = "std")]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Differenced<I: Iterator> {
    inner: DifferencedInner<I>,
}

#[cfg(feature = "std")]
enum DifferencedInner<I: Iterator> {
    Search {
        // iterate the source, look up in the other set
        iter: I,
        other_set: HashSet<I::Item>,
    },
    Iterate(I), // nothing to remove, simply produce all items
}

#[cfg(feature = "std")]
impl<I> Differenced<I>
where
    I: Iterator,
    I::Item: Hash + Eq,
{
    pub(super) fn new<O>(iter: I, other: O) -> Self
    where
        O: IntoIterator<Item = I::Item>,
    {
        let other_set: HashSet<I::Item> = other.into_iter().collect();
        Differenced {
            inner: if other_set.is_empty() {
                DifferencedInner::Iterate(iter)
            } else {
                DifferencedInner::Search { iter, other_set }
            },
        }
    }
}

// Explicit Debug impl necessary because of issue #26925
#[cfg(feature = "std")]
impl<I> Debug for DifferencedInner<I>
where
    I: Iterator + Debug,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifferencedInner::Search { iter, other_set } => f
                .debug_struct("Search")
                .field("iter", iter)
                .field("other_set", other_set)
                .finish(),
            DifferencedInner::Iterate(iter) => f.debug_tuple("Iterate").field(iter).finish(),
        }
    }
}

#[cfg(feature = "std")]
impl<I> Debug for Differenced<I>
where
    I: Iterator + Debug,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Differenced").field(&self.inner).finish()
    }
}

#[cfg(feature = "std")]
impl<I> Clone for Differenced<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Differenced {
            inner: match &self.inner {
                DifferencedInner::Search { iter, other_set } => {
                    DifferencedInner::Search { iter: iter.clone(), other_set: other_set.clone() }
                }
                DifferencedInner::Iterate(iter) => DifferencedInner::Iterate(iter.clone()),
            },
        }
    }
}

#[cfg(feature = "std")]
impl<I> Iterator for Differenced<I>
where
    I: Iterator,
    I::Item: Hash + Eq,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        match &mut self.inner {
            DifferencedInner::Search { iter, other_set } => loop {
                let next = iter.next()?;
                if !other_set.contains(&next) {
                    return Some(next);
                }
            },
            DifferencedInner::Iterate(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            DifferencedInner::Search { iter, .. } => (0, iter.size_hint().1),
            DifferencedInner::Iterate(iter) => iter.size_hint(),
        }
    }
}

#[cfg(feature = "std")]
impl<I> FusedIterator for Differenced<I>
where
    I: FusedIterator,
    I::Item: Hash + Eq,
{
}
