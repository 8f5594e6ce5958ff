use serde::{Deserialize, Serialize};

use crate::reporter::MAX_LIMIT;

/// Computes the nth Fibonacci number by naive double recursion.
///
/// Fibonacci sequence: 0, 1, 1, 2, 3, 5, 8, 13, 21, ...
/// No intermediate results are cached, so the cost grows as O(φ^n).
///
/// # Panics
///
/// Overflows `u64` for `n >= 94`, which panics in debug builds.
///
/// # Examples
///
/// ```
/// use gowest_core::fibonacci::fib;
///
/// assert_eq!(fib(0), 0);
/// assert_eq!(fib(1), 1);
/// assert_eq!(fib(10), 55);
/// ```
pub fn fib(n: u64) -> u64 {
    if n <= 1 {
        return n;
    }
    fib(n - 1) + fib(n - 2)
}

/// Same values as [`fib`], computed in a single pass.
///
/// # Panics
///
/// In debug builds, when `n` is not below [`MAX_LIMIT`].
///
/// ```
/// use gowest_core::fibonacci::fib_iterative;
///
/// assert_eq!(fib_iterative(93), 12200160415121876738);
/// ```
pub fn fib_iterative(n: u64) -> u64 {
    debug_assert!(n < MAX_LIMIT, "fib({n}) does not fit in u64");
    if n == 0 {
        return 0;
    }
    // (fib(k), fib(k + 1)) after k steps
    (1..n).fold((0u64, 1u64), |(a, b), _| (b, a + b)).1
}

/// Strategy used to compute each reported value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Unmemoized binary recursion
    #[default]
    Recursive,
    /// Single-pass fold
    Iterative,
}

impl Algorithm {
    pub fn compute(self, n: u64) -> u64 {
        match self {
            Algorithm::Recursive => fib(n),
            Algorithm::Iterative => fib_iterative(n),
        }
    }
}
