//! Unbiased shuffling of slices.

use alloc::vec::Vec;
use rand::Rng;

use crate::random::BoundedRandom;

/// An extension trait for slices, providing Fisher–Yates shuffling and uniform
/// sampling of indices and elements.
///
/// All randomness is drawn through [`BoundedRandom`], so every swap index is
/// uniform as long as the slice is shorter than [`UNIFORM_SPAN_MAX`] elements.
///
/// [`UNIFORM_SPAN_MAX`]: crate::random::UNIFORM_SPAN_MAX
pub trait SliceShuffle {
    /// The element type of the slice.
    type Item;

    /// Shuffles the slice in place, so that every permutation is equally likely.
    ///
    /// Walks the slice from the front; at every position a partner is chosen
    /// uniformly from the not-yet-fixed tail (the position itself included) and
    /// the two are swapped.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqalg::SliceShuffle;
    ///
    /// let mut rng = rand::thread_rng();
    /// let mut cards = [1, 2, 3, 4, 5];
    /// cards.shuffle_with(&mut rng);
    ///
    /// cards.sort();
    /// assert_eq!(cards, [1, 2, 3, 4, 5]);
    /// ```
    fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R);

    /// Shuffles the slice in place using the thread-local generator.
    #[cfg(feature = "std")]
    fn shuffle(&mut self) {
        self.shuffle_with(&mut crate::polyfill::default_rng())
    }

    /// Returns a shuffled copy of the slice, leaving the slice untouched.
    fn shuffled_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Self::Item>
    where
        Self::Item: Clone;

    /// Returns a shuffled copy of the slice using the thread-local generator.
    ///
    /// ```
    /// use seqalg::SliceShuffle;
    ///
    /// let deck = ['a', 'b', 'c'];
    /// let mut hand = deck.shuffled();
    /// hand.sort();
    /// assert_eq!(hand, deck);
    /// ```
    #[cfg(feature = "std")]
    fn shuffled(&self) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        self.shuffled_with(&mut crate::polyfill::default_rng())
    }

    /// Returns a uniformly chosen index, or `None` if the slice is empty.
    fn random_index_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize>;

    /// Returns a reference to a uniformly chosen element, or `None` if the slice is
    /// empty.
    fn random_element_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Self::Item>;
}

impl<T> SliceShuffle for [T] {
    type Item = T;

    fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let last = match self.len().checked_sub(1) {
            Some(last) => last,
            None => return,
        };

        for current in 0..last {
            let random = usize::random_in(rng, current, last);
            if random != current {
                self.swap(current, random);
            }
        }
    }

    fn shuffled_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<T>
    where
        T: Clone,
    {
        let mut clone = self.to_vec();
        clone.shuffle_with(rng);
        clone
    }

    fn random_index_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        let last = self.len().checked_sub(1)?;
        Some(usize::random_in(rng, 0, last))
    }

    fn random_element_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T> {
        self.random_index_with(rng).map(|index| &self[index])
    }
}

#[cfg(test)]
mod tests;
