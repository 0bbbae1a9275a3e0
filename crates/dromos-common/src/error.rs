//! Error types shared across the Dromos workspace.
//!
//! Only I/O problems and malformed input records surface as errors. Lookup
//! misses (`Graph::vertex`, `Graph::edge`) and unreachable destinations are
//! ordinary `Option` outcomes and never pass through here.

use thiserror::Error;

/// Errors that can occur while loading or querying a network.
#[derive(Debug, Error)]
pub enum Error {
    /// Underlying I/O failure while reading a network file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record in the network file did not parse as `<left> <right> <weight>`.
    ///
    /// A partially loaded graph may remain after this error; callers must
    /// not assume it is consistent.
    #[error("line {line}: malformed record: {reason}")]
    MalformedRecord {
        /// 1-based line number of the offending record.
        line: usize,
        /// What was wrong with the record.
        reason: String,
    },

    /// A node name falls outside the configured naming range.
    #[error("node name {0:?} is out of range for this network")]
    NodeOutOfRange(char),

    /// The network file contained no edges.
    #[error("network is empty")]
    EmptyNetwork,
}

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
