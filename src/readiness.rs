//! Bits returned by [`Engine::poll_ready`](crate::engine::Engine::poll_ready),
//! independent like [`crate::record::flags`]: both, either, or neither may
//! be set.

/// A new sample is waiting (`sample_seq != session.last_seq`).
pub const READABLE: u32 = 1 << 0;
/// The alert polarity has flipped since this session last looked.
pub const PRIORITY: u32 = 1 << 1;
