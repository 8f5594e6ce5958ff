//! Sequential Fibonacci reporter.
//!
//! Walks indices `0..limit` in ascending order and hands each computed
//! value to the caller before moving on to the next index.

use std::fmt;

use crate::error::CoreError;
use crate::fibonacci::Algorithm;

/// Exclusive upper bound on the limit; `fib(93)` is the last value that fits in `u64`.
pub const MAX_LIMIT: u64 = 94;

/// One reported value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub index: u64,
    pub value: u64,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fib({}) = {}", self.index, self.value)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    limit: u64,
    algorithm: Algorithm,
}

impl Reporter {
    /// Create a reporter for indices `0..limit`.
    pub fn new(limit: u64, algorithm: Algorithm) -> Result<Self, CoreError> {
        if limit > MAX_LIMIT {
            return Err(CoreError::LimitTooLarge {
                limit,
                max: MAX_LIMIT,
            });
        }
        Ok(Self { limit, algorithm })
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Lazily computes entries in ascending index order.
    pub fn entries(&self) -> impl Iterator<Item = Entry> {
        let algorithm = self.algorithm;
        (0..self.limit).map(move |index| Entry {
            index,
            value: algorithm.compute(index),
        })
    }

    /// Computes every entry and passes it to `emit` before computing the next.
    ///
    /// Returns the number of entries emitted.
    pub fn run<F>(&self, mut emit: F) -> usize
    where
        F: FnMut(Entry),
    {
        let mut count = 0;
        for entry in self.entries() {
            emit(entry);
            count += 1;
        }
        count
    }
}
