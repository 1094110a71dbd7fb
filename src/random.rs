//! Uniformly distributed integers drawn from an inclusive range.
//!
//! Every draw goes through a single 32-bit primitive (`gen_range` over `u32`), so a
//! range is only served when its span fits in `0..=u32::MAX - 1`. Anything that
//! cannot be served degrades to the lower bound instead of panicking:
//!
//! * `min == max` returns `min` without consuming randomness;
//! * `max < min` returns `min`;
//! * a span that overflows the integer type, or that is wider than the 32-bit
//!   primitive allows, returns `min`.
//!
//! ```
//! use seqalg::{random_with, BoundedRandom};
//!
//! let mut rng = rand::thread_rng();
//!
//! let die: u8 = random_with(&mut rng, 1, 6);
//! assert!((1..=6).contains(&die));
//!
//! assert_eq!(i32::random_in(&mut rng, 5, 5), 5);
//! assert_eq!(i32::random_in(&mut rng, 9, 3), 9);
//! assert_eq!(i8::random_in(&mut rng, -100, 100), -100);
//! ```

use rand::Rng;

/// The widest span a single draw can cover.
///
/// The primitive draws `0..=span`; keeping `u32::MAX` out of reach mirrors an
/// exclusive-bound 32-bit generator, whose bound cannot exceed `u32::MAX`.
pub const UNIFORM_SPAN_MAX: u32 = u32::MAX - 1;

/// Integer types that can be drawn uniformly from an inclusive range.
///
/// Implemented for every primitive integer type.
pub trait BoundedRandom: Copy + PartialOrd {
    /// The lower bound used when none is given.
    const ZERO: Self;

    /// The upper bound used when none is given: [`UNIFORM_SPAN_MAX`], saturated to
    /// the largest value of the type.
    const DEFAULT_MAX: Self;

    /// Returns a value uniformly drawn from `min..=max`, or `min` if that range is
    /// empty, degenerate or too wide to be served (see the [module
    /// documentation](crate::random)).
    ///
    /// # Examples
    ///
    /// ```
    /// use seqalg::BoundedRandom;
    ///
    /// let mut rng = rand::thread_rng();
    /// let x = i64::random_in(&mut rng, -3, 3);
    /// assert!((-3..=3).contains(&x));
    /// ```
    fn random_in<R: Rng + ?Sized>(rng: &mut R, min: Self, max: Self) -> Self;

    /// Returns a value uniformly drawn from `0..=max`.
    #[inline]
    fn random_up_to<R: Rng + ?Sized>(rng: &mut R, max: Self) -> Self {
        Self::random_in(rng, Self::ZERO, max)
    }

    /// Returns a value uniformly drawn from `0..=DEFAULT_MAX`.
    #[inline]
    fn random_default<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::random_in(rng, Self::ZERO, Self::DEFAULT_MAX)
    }
}

macro_rules! bounded_random {
    // end of recursion
    () => {};

    // implement type and recurse
    ($t:ty $(, $($rest:tt)*)?) => {
        impl BoundedRandom for $t {
            const ZERO: Self = 0;

            const DEFAULT_MAX: Self = if (<$t>::MAX as u128) < UNIFORM_SPAN_MAX as u128 {
                <$t>::MAX
            } else {
                UNIFORM_SPAN_MAX as $t
            };

            // `span <= 0` is only reachable for signed types.
            #[allow(unused_comparisons, clippy::absurd_extreme_comparisons)]
            fn random_in<R: Rng + ?Sized>(rng: &mut R, min: Self, max: Self) -> Self {
                if min == max {
                    return min;
                }

                let span = match max.checked_sub(min) {
                    Some(span) => span,
                    None => return min,
                };
                if span <= 0 {
                    return min;
                }

                let span = match u32::try_from(span) {
                    Ok(span) if span <= UNIFORM_SPAN_MAX => span,
                    _ => return min,
                };

                let offset = rng.gen_range(0..=span);
                match <$t>::try_from(offset) {
                    // `offset <= max - min`, so this cannot overflow.
                    Ok(offset) => min + offset,
                    Err(_) => min,
                }
            }
        }

        $(bounded_random!($($rest)*);)?
    };
}

bounded_random! {
    i8, u8,
    i16, u16,
    i32, u32,
    i64, u64,
    i128, u128,
    isize, usize,
}

/// Returns a value uniformly drawn from `min..=max` using `rng`.
///
/// Shorthand for [`BoundedRandom::random_in`].
#[inline]
pub fn random_with<T, R>(rng: &mut R, min: T, max: T) -> T
where
    T: BoundedRandom,
    R: Rng + ?Sized,
{
    T::random_in(rng, min, max)
}

/// Returns a value uniformly drawn from `min..=max` using the thread-local generator.
///
/// ```
/// assert_eq!(seqalg::random(5, 5), 5);
///
/// let x: u16 = seqalg::random(10, 20);
/// assert!((10..=20).contains(&x));
/// ```
#[cfg(feature = "std")]
#[inline]
pub fn random<T: BoundedRandom>(min: T, max: T) -> T {
    T::random_in(&mut crate::polyfill::default_rng(), min, max)
}

/// Returns a float uniformly drawn from `min..max`.
///
/// Returns `min` when the range is empty or inverted, when either bound is not
/// finite, or when the width of the range overflows `f64`.
///
/// ```
/// let mut rng = rand::thread_rng();
///
/// let x = seqalg::random_float_with(&mut rng, -1.0, 1.0);
/// assert!((-1.0..1.0).contains(&x));
/// assert_eq!(seqalg::random_float_with(&mut rng, 2.5, 2.5), 2.5);
/// ```
pub fn random_float_with<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    if !(min.is_finite() && max.is_finite()) || max <= min {
        return min;
    }

    let value = min + rng.gen::<f64>() * (max - min);
    if value.is_finite() && value < max {
        value
    } else {
        min
    }
}
