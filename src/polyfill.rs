#![allow(unused_imports)]

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "std")] {
        pub(crate) use std::collections::HashSet;

        /// Generator used by the conveniences that do not take an explicit `rng`.
        #[inline]
        pub(crate) fn default_rng() -> rand::rngs::ThreadRng {
            rand::thread_rng()
        }
    }
}
