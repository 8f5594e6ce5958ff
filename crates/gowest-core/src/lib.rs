//! Core of the gowest Fibonacci reporter.

pub mod error;
pub mod fibonacci;
pub mod math;
pub mod reporter;

pub use error::CoreError;
pub use fibonacci::{fib, fib_iterative, Algorithm};
pub use math::add;
pub use reporter::{Entry, Reporter, MAX_LIMIT};
