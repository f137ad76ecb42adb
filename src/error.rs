use thiserror::Error;

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, Error>;

/// The engine's error taxonomy.
///
/// `Interrupted` and `Shutdown` are ordinary lifecycle conditions for a
/// blocked caller and never update the engine's `last_error` surfaced by
/// [`stats`](crate::engine::Engine::stats). The other variants do.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A configuration value was out of range or an unrecognized token.
    #[error("invalid configuration value")]
    Invalid,

    /// The consumer-supplied buffer is smaller than a [`Sample`](crate::record::Sample).
    #[error("buffer too small for a sample record")]
    BufferTooSmall,

    /// Delivery to the consumer failed mid-copy.
    #[error("transport failure delivering sample to consumer")]
    Transport,

    /// The blocking wait was cancelled before a new sample arrived.
    #[error("read interrupted before a new sample was available")]
    Interrupted,

    /// The engine was stopped while the caller was waiting.
    #[error("engine shut down while read was pending")]
    Shutdown,

    /// Session state could not be allocated.
    #[error("failed to allocate session state")]
    NoMemory,
}

impl Error {
    /// The signed code used in the `last_error=<E>` line of [`stats`](crate::engine::Engine::stats).
    ///
    /// 0 means "no error" and is never produced by this type directly;
    /// callers encode the no-error case themselves (see `Engine::stats`).
    pub fn code(self) -> i32 {
        match self {
            Error::Invalid => -1,
            Error::BufferTooSmall => -2,
            Error::Transport => -3,
            Error::Interrupted => -4,
            Error::Shutdown => -5,
            Error::NoMemory => -6,
        }
    }
}
