//! Error types for the B+ tree crate.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write
/// `Result<T>`. This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in this crate.
///
/// The taxonomy is deliberately small: looking up or deleting an absent
/// key is reported as `None`, not as an error, and the tree has no I/O.
/// The one failure mode left is a bad configuration handed to a
/// constructor.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The requested node capacity cannot form a valid occupancy band.
    ///
    /// Capacities must be even integers of at least 2.
    #[error("invalid capacity {0}: must be an even integer >= 2")]
    InvalidCapacity(usize),
}
