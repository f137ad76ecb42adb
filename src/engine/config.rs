use crate::mode::Mode;

use super::state::{INITIAL_PERIOD_MS, INITIAL_THRESHOLD_MC};

/// Initial knobs for a new [`super::Engine`].
///
/// A plain `Default`-able struct handed to the constructor, rather than a
/// sequence of setter calls before the engine exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    pub period_ms: u32,
    pub threshold_mc: i32,
    pub mode: Mode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            period_ms: INITIAL_PERIOD_MS,
            threshold_mc: INITIAL_THRESHOLD_MC,
            mode: Mode::Normal,
        }
    }
}
