use core::fmt::{self, Debug};
use core::iter::FusedIterator;

/// An iterator yielding the running results of a fold.
///
/// This `struct` is created by the [`accumulated`] method on [`SequenceAlgebra`].
/// See its documentation for more.
///
/// [`accumulated`]: super::SequenceAlgebra::accumulated
/// [`SequenceAlgebra`]: super::SequenceAlgebra
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Accumulated<I, B, F> {
    iter: I,
    // only `None` while `f` runs
    running: Option<B>,
    f: F,
}

impl<I, B, F> Accumulated<I, B, F> {
    pub(super) fn new(iter: I, initial: B, f: F) -> Self {
        Accumulated { iter, running: Some(initial), f }
    }
}

impl<I: Debug, B: Debug, F> Debug for Accumulated<I, B, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accumulated")
            .field("iter", &self.iter)
            .field("running", &self.running)
            .finish()
    }
}

impl<I, B, F> Iterator for Accumulated<I, B, F>
where
    I: Iterator,
    B: Clone,
    F: FnMut(B, I::Item) -> B,
{
    type Item = B;

    fn next(&mut self) -> Option<B> {
        let next = self.iter.next()?;
        let running = (self.f)(self.running.take()?, next);
        self.running = Some(running.clone());
        Some(running)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, B, F> ExactSizeIterator for Accumulated<I, B, F>
where
    I: ExactSizeIterator,
    B: Clone,
    F: FnMut(B, I::Item) -> B,
{
}

impl<I, B, F> FusedIterator for Accumulated<I, B, F>
where
    I: FusedIterator,
    B: Clone,
    F: FnMut(B, I::Item) -> B,
{
}
