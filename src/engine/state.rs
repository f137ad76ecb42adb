use std::collections::HashMap;

use crate::error::Error;
use crate::mode::Mode;
use crate::session::{Session, SessionId};

/// Initial reading: 44000 mC.
pub(super) const INITIAL_CURRENT_MC: i32 = 44_000;
/// Initial period: 100ms.
pub(super) const INITIAL_PERIOD_MS: u32 = 100;
/// Initial threshold: 45000 mC.
pub(super) const INITIAL_THRESHOLD_MC: i32 = 45_000;

pub(super) const PERIOD_MS_RANGE: std::ops::RangeInclusive<u32> = 1..=10_000;
pub(super) const THRESHOLD_MC_RANGE: std::ops::RangeInclusive<i32> = -20_000..=60_000;

/// The single source of truth for the engine, guarded end to end
/// by one [`std::sync::Mutex`] in [`super::Engine`].
pub(super) struct EngineState {
    pub current_mc: i32,
    pub sample_seq: u32,
    pub period_ms: u32,
    pub threshold_mc: i32,
    pub mode: Mode,
    pub ramp_direction: i32,

    pub updates: u64,
    pub alerts: u64,
    pub last_error: Option<Error>,

    /// Set by `Engine::stop`; every waiter re-checks this on each wakeup.
    pub shutdown: bool,
    pub sessions: HashMap<SessionId, Session>,
}

impl EngineState {
    pub fn new(period_ms: u32, threshold_mc: i32, mode: Mode) -> Self {
        EngineState {
            current_mc: INITIAL_CURRENT_MC,
            sample_seq: 0,
            period_ms,
            threshold_mc,
            mode,
            ramp_direction: 1,
            updates: 0,
            alerts: 0,
            last_error: None,
            shutdown: false,
            sessions: HashMap::new(),
        }
    }

    /// `current_mc >= threshold_mc`.
    pub fn alert_polarity(&self) -> bool {
        self.current_mc >= self.threshold_mc
    }

    /// Creates the session if it isn't already present, with the cursor
    /// initialized to the current sequence/polarity.
    pub fn ensure_session(&mut self, id: SessionId) {
        if !self.sessions.contains_key(&id) {
            let seq = self.sample_seq;
            let alert = self.alert_polarity();
            self.sessions.insert(id, Session::new(seq, alert));
        }
    }
}
