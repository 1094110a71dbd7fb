//! Order-preserving algebra over sequences.
//!
//! `seqalg` offers three independent tools:
//!
//! * [`random`](mod@random): a uniform integer in an inclusive range that never panics,
//!   degrading to the lower bound on empty, inverted or overflowing ranges;
//! * [`shuffle`](mod@shuffle): an unbiased Fisher–Yates shuffle of slices, in place or
//!   into a fresh `Vec`;
//! * [`algebra`]: difference, intersection and deduplication of sequences that keep
//!   the source order (and, for difference and intersection, the source duplicates).
//!
//! The set operations come in two flavours. The `*_by` methods accept an arbitrary
//! equivalence predicate, possibly across two different element types, and cost
//! O(N·M). When the items are [`Hash`] + [`Eq`], the unsuffixed methods build a hash
//! set instead and run in O(N + M); both flavours yield identical sequences.
//!
//! ```
//! use seqalg::prelude::*;
//!
//! let numbers = [1, 1, 2, 2, 3, 3];
//! let remove = ["1", "2"];
//!
//! let diff: Vec<i32> = numbers
//!     .into_iter()
//!     .differenced_by(&remove, |&n, s| s.parse() == Ok(n))
//!     .collect();
//! assert_eq!(diff, [3, 3]);
//! ```
//!
//! Without the default `std` feature the crate is `no_std` (it still needs `alloc`);
//! the hash-backed operations and the thread-RNG conveniences are then unavailable.
//!
//! [`Hash`]: core::hash::Hash
//! [`Eq`]: core::cmp::Eq
#![cfg_attr(not(any(feature = "std", test)), no_std)]
// documentation controls
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![deny(missing_docs)]
#![cfg_attr(
    test,
    allow(
        clippy::bool_assert_comparison,
        clippy::needless_range_loop,
        clippy::redundant_clone,
        clippy::useless_vec,
    )
)]

extern crate alloc;

mod polyfill;

pub mod algebra;
pub mod indices;
pub mod random;
pub mod shuffle;

pub use algebra::SequenceAlgebra;
pub use indices::{RemoveIndices, SliceIndices};
pub use random::{random_float_with, random_with, BoundedRandom};
pub use shuffle::SliceShuffle;

#[cfg(feature = "std")]
pub use random::random;

/// The recommended prelude for this crate.
pub mod prelude {
    pub use crate::{
        algebra::SequenceAlgebra as _,
        indices::{RemoveIndices as _, SliceIndices as _},
        random::BoundedRandom,
        shuffle::SliceShuffle as _,
    };
}
