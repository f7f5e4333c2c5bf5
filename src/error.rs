//! The `error` module defines the error and result types used throughout
//! the crate.

/// An error that prevents successful encoding or decoding of a brainwire
/// stream.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The decoder requested bits past the end of the bit buffer.
    #[error("unexpected end of stream: requested {requested} bits at position {position}, \
             but the buffer holds only {available} bits")]
    UnexpectedEndOfStream {
        /// The bit position at which the read was attempted.
        position: usize,
        /// The number of bits the read requested.
        requested: u32,
        /// The number of bits actually available from `position` onward.
        available: usize,
    },

    /// The input to `encode` was not mono 16-bit PCM.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An I/O failure from the surrounding file collaborator.
    #[error("I/O failure: {0}")]
    IoFailure(#[from] std::io::Error),

    /// A failure reported by the WAV (hound) collaborator.
    #[error("WAV I/O failure: {0}")]
    WavFailure(#[from] hound::Error),
}

/// Either `T` on success, or an [`Error`] on failure.
pub type Result<T> = std::result::Result<T, Error>;
