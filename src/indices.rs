//! Index-oriented helpers for slices and vectors.

use alloc::vec::Vec;

/// An extension trait for slices, locating extreme elements by index.
pub trait SliceIndices {
    /// The element type of the slice.
    type Item;

    /// Returns the index of the first minimal element, or `None` if the slice is
    /// empty.
    ///
    /// Elements that are incomparable with the current minimum (such as `NaN`) never
    /// replace it, although a leading one is kept. Complexity: O(n).
    ///
    /// ```
    /// use seqalg::SliceIndices;
    ///
    /// assert_eq!([3, 1, 2, 1].min_index(), Some(1));
    /// assert_eq!(<[u8]>::min_index(&[]), None);
    /// ```
    fn min_index(&self) -> Option<usize>
    where
        Self::Item: PartialOrd;

    /// Returns the index of the first maximal element, or `None` if the slice is
    /// empty.
    ///
    /// ```
    /// use seqalg::SliceIndices;
    ///
    /// assert_eq!([3, 9, 2, 9].max_index(), Some(1));
    /// ```
    fn max_index(&self) -> Option<usize>
    where
        Self::Item: PartialOrd;
}

impl<T> SliceIndices for [T] {
    type Item = T;

    fn min_index(&self) -> Option<usize>
    where
        T: PartialOrd,
    {
        extreme_index(self, |candidate, best| candidate < best)
    }

    fn max_index(&self) -> Option<usize>
    where
        T: PartialOrd,
    {
        extreme_index(self, |candidate, best| candidate > best)
    }
}

// Only a strictly better candidate replaces the current best, so ties keep the
// earliest index.
fn extreme_index<T, F>(slice: &[T], mut better: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    if slice.is_empty() {
        return None;
    }

    let mut best = 0;
    for (index, candidate) in slice.iter().enumerate().skip(1) {
        if better(candidate, &slice[best]) {
            best = index;
        }
    }
    Some(best)
}

/// An extension trait for vectors, removing several positions at once.
pub trait RemoveIndices {
    /// Removes the elements at every listed index, keeping the order of the rest.
    ///
    /// Indices refer to positions before any removal. Repeated indices remove a
    /// single element, and indices past the end are ignored. Complexity:
    /// O(n + k log k) for `k` indices.
    ///
    /// ```
    /// use seqalg::RemoveIndices;
    ///
    /// let mut v = vec!['a', 'b', 'c', 'd', 'e'];
    /// v.remove_indices(&[3, 0, 3, 42]);
    /// assert_eq!(v, ['b', 'c', 'e']);
    /// ```
    fn remove_indices(&mut self, indices: &[usize]);
}

impl<T> RemoveIndices for Vec<T> {
    fn remove_indices(&mut self, indices: &[usize]) {
        if indices.is_empty() {
            return;
        }

        let mut doomed = indices.to_vec();
        doomed.sort_unstable();
        doomed.dedup();

        let mut index = 0;
        let mut doomed = doomed.into_iter().peekable();
        self.retain(|_| {
            let remove = doomed.next_if_eq(&index).is_some();
            index += 1;
            !remove
        });
    }
}

#[cfg(test)]
mod tests;
