use uuid::Uuid;

/// Identifies one open consumer session.
///
/// Opaque on purpose — callers pass it back into [`crate::engine::Engine`]
/// entry points but never construct or inspect one themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionId(Uuid);

impl SessionId {
    pub(crate) fn new() -> Self {
        SessionId(Uuid::new_v4())
    }
}

/// Per-consumer view cursor.
///
/// Owned solely by the engine's session table; a session is created on
/// first use and destroyed on [`Engine::close_session`](crate::engine::Engine::close_session),
/// never leaked across reconfiguration.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Session {
    /// The `sample_seq` this session has already consumed.
    pub last_seq: u32,
    /// The alert polarity (`current_mc >= threshold_mc`) last observed.
    pub last_alert: bool,
}

impl Session {
    pub(crate) fn new(current_seq: u32, current_alert: bool) -> Self {
        Session {
            last_seq: current_seq,
            last_alert: current_alert,
        }
    }
}
