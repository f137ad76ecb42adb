//! The sampling engine: a mutex-guarded [`state::EngineState`],
//! a [`Condvar`] wakeup broadcast paired with it, and a [`Scheduler`] driving
//! ticks. This is the crate's core; everything else (record encoding,
//! session bookkeeping, the generator, the timer trait) exists to serve
//! `Engine`'s entry points.

mod config;
mod state;

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;

pub use config::EngineConfig;
use state::EngineState;

use crate::error::{Error, Result};
use crate::mode::Mode;
use crate::record::{Sample, RECORD_SIZE};
use crate::readiness;
use crate::session::SessionId;
use crate::timer::{Scheduler, ThreadTimer};
use crate::{ffi, generator};

/// How long a blocked reader waits between re-checks of the shutdown flag
/// and the caller's cancellation token.
const WAIT_POLL: Duration = Duration::from_millis(20);

struct Inner {
    state: Mutex<EngineState>,
    cv: Condvar,
}

/// The sampling engine and its consumer-facing surface.
///
/// Cheap to share: clone the `Arc` you get from [`Engine::new`] (or wrap it
/// in one yourself) to hand the same engine to multiple consumer threads —
/// every entry point takes `&self`.
pub struct Engine {
    inner: Arc<Inner>,
    timer: Mutex<Box<dyn Scheduler>>,
    armed: AtomicBool,
}

impl Engine {
    /// Builds a stopped engine with the default [`ThreadTimer`]. No sample is
    /// produced and no thread is spawned until [`Engine::start`].
    pub fn new(config: EngineConfig) -> Self {
        Self::with_scheduler(config, Box::new(ThreadTimer::new()))
    }

    /// Builds a stopped engine with a caller-supplied [`Scheduler`], so the
    /// tick path never depends on a specific OS timer facility (and tests
    /// can drive ticks deterministically).
    pub fn with_scheduler(config: EngineConfig, scheduler: Box<dyn Scheduler>) -> Self {
        let state = EngineState::new(config.period_ms, config.threshold_mc, config.mode);
        Engine {
            inner: Arc::new(Inner {
                state: Mutex::new(state),
                cv: Condvar::new(),
            }),
            timer: Mutex::new(scheduler),
            armed: AtomicBool::new(false),
        }
    }

    /// Arms the timer. Idempotent-safe: calling `start` while already
    /// started is rejected with [`Error::Invalid`] and changes nothing.
    pub fn start(&self) -> Result<()> {
        if self.armed.swap(true, Ordering::AcqRel) {
            return Err(Error::Invalid);
        }

        {
            let mut st = self.inner.state.lock().unwrap();
            st.shutdown = false;
        }

        let period_inner = Arc::clone(&self.inner);
        let period_ms: Arc<dyn Fn() -> u64 + Send + Sync> =
            Arc::new(move || period_inner.state.lock().unwrap().period_ms as u64);

        let tick_inner = Arc::clone(&self.inner);
        let on_tick: Arc<dyn Fn() + Send + Sync> = Arc::new(move || Self::tick(&tick_inner));

        self.timer.lock().unwrap().arm(period_ms, on_tick);
        Ok(())
    }

    /// Cancels the timer and wakes every blocked reader with
    /// [`Error::Shutdown`]. Safe to call whether or not the engine is
    /// currently started.
    pub fn stop(&self) {
        {
            let mut st = self.inner.state.lock().unwrap();
            st.shutdown = true;
        }
        self.inner.cv.notify_all();
        self.timer.lock().unwrap().cancel();
        self.armed.store(false, Ordering::Release);
    }

    /// Whether [`Engine::start`] has been called without a matching
    /// [`Engine::stop`] since.
    pub fn is_running(&self) -> bool {
        self.armed.load(Ordering::Acquire)
    }

    fn tick(inner: &Arc<Inner>) {
        {
            let mut st = inner.state.lock().unwrap();
            let mut rng = rand::thread_rng();
            generator::step(st.mode, &mut st.current_mc, &mut st.ramp_direction, &mut rng);
            st.updates += 1;
            st.sample_seq = st.sample_seq.wrapping_add(1);
        }
        inner.cv.notify_all();
    }

    // --- sessions ---------------------------------

    /// Opens a fresh consumer session, cursor initialized to the current
    /// sequence and alert polarity, so the first read on it blocks for the
    /// *next* tick rather than returning a stale already-present sample.
    pub fn open_session(&self) -> SessionId {
        let id = SessionId::new();
        self.inner.state.lock().unwrap().ensure_session(id);
        id
    }

    /// Destroys a session. A no-op if it doesn't exist or was already
    /// closed.
    pub fn close_session(&self, id: SessionId) {
        self.inner.state.lock().unwrap().sessions.remove(&id);
    }

    // --- read protocol --------------------------------------

    /// Blocks until a sample strictly newer than `session`'s cursor exists,
    /// then writes its encoded bytes into `dest` and returns the decoded
    /// value.
    ///
    /// `cancel` is polled alongside the shutdown flag on every wakeup; set
    /// it from another thread to make an in-flight read return
    /// [`Error::Interrupted`] without touching session state.
    ///
    /// A failure writing to `dest` is reported as [`Error::Transport`]
    /// without advancing the session.
    pub fn read<W: Write>(&self, session: SessionId, dest: &mut W, cancel: &AtomicBool) -> Result<Sample> {
        let (sample, new_seq, alert) = self.wait_and_snapshot(session, cancel)?;

        if dest.write_all(&sample.to_bytes()).is_err() {
            self.set_last_error(Error::Transport);
            return Err(Error::Transport);
        }

        self.commit_session(session, new_seq, alert);
        Ok(sample)
    }

    /// Convenience form of [`Engine::read`] for a fixed-size destination
    /// buffer: fails with [`Error::BufferTooSmall`] without advancing the
    /// session if `buf` is smaller than [`RECORD_SIZE`].
    pub fn read_into(&self, session: SessionId, buf: &mut [u8], cancel: &AtomicBool) -> Result<Sample> {
        let (sample, new_seq, alert) = self.wait_and_snapshot(session, cancel)?;

        if buf.len() < RECORD_SIZE {
            self.set_last_error(Error::BufferTooSmall);
            return Err(Error::BufferTooSmall);
        }
        sample.write_into(buf).expect("buffer length checked above");

        self.commit_session(session, new_seq, alert);
        Ok(sample)
    }

    /// Obtains or lazily creates the session, waits for a strictly newer
    /// sequence, snapshots the reading, and accounts the edge if the alert
    /// polarity flipped. Does not touch `session.last_seq`/`last_alert` —
    /// that's the caller's job via [`Engine::commit_session`] once delivery
    /// has actually succeeded.
    fn wait_and_snapshot(&self, session: SessionId, cancel: &AtomicBool) -> Result<(Sample, u32, bool)> {
        let mut st = self.inner.state.lock().unwrap();
        st.ensure_session(session);
        let prev_seq = st.sessions[&session].last_seq;

        loop {
            if st.shutdown {
                return Err(Error::Shutdown);
            }
            if cancel.load(Ordering::Acquire) {
                return Err(Error::Interrupted);
            }
            if st.sample_seq != prev_seq {
                break;
            }
            let (guard, _) = self.inner.cv.wait_timeout(st, WAIT_POLL).unwrap();
            st = guard;
        }

        let timestamp_ns = ffi::now_ns();
        let temp_mc = st.current_mc;
        let alert = st.alert_polarity();
        let new_seq = st.sample_seq;

        let had_alert = st.sessions[&session].last_alert;
        if alert != had_alert {
            st.alerts += 1;
        }

        Ok((Sample::new(timestamp_ns, temp_mc, alert), new_seq, alert))
    }

    /// The commit point. Only reached after delivery to the consumer has
    /// actually succeeded.
    fn commit_session(&self, session: SessionId, new_seq: u32, alert: bool) {
        let mut st = self.inner.state.lock().unwrap();
        if let Some(s) = st.sessions.get_mut(&session) {
            s.last_seq = new_seq;
            s.last_alert = alert;
        }
    }

    fn set_last_error(&self, err: Error) {
        self.inner.state.lock().unwrap().last_error = Some(err);
    }

    // --- readiness protocol ---------------------------------

    /// Non-blocking probe: does `session` have a new sample waiting, has its
    /// alert polarity flipped, or both? Never mutates `session`. An unknown
    /// (never opened, or already closed) session reports neither bit set.
    ///
    /// Registration for the next wakeup is implicit: every reader shares the
    /// same [`Condvar`], so a subsequent blocking [`Engine::read`] on this
    /// session already observes whatever this probe just saw.
    pub fn poll_ready(&self, session: SessionId) -> u32 {
        let st = self.inner.state.lock().unwrap();
        let Some(s) = st.sessions.get(&session) else {
            return 0;
        };
        let mut mask = 0;
        if st.sample_seq != s.last_seq {
            mask |= readiness::READABLE;
        }
        if st.alert_polarity() != s.last_alert {
            mask |= readiness::PRIORITY;
        }
        mask
    }

    // --- configuration surface ------------------------------

    /// Validated setter: accepts `1..=10000`, otherwise rejects with
    /// [`Error::Invalid`] and leaves `period_ms` unchanged.
    pub fn set_period_ms(&self, v: u32) -> Result<()> {
        if !state::PERIOD_MS_RANGE.contains(&v) {
            self.set_last_error(Error::Invalid);
            return Err(Error::Invalid);
        }
        self.inner.state.lock().unwrap().period_ms = v;
        Ok(())
    }

    pub fn period_ms(&self) -> u32 {
        self.inner.state.lock().unwrap().period_ms
    }

    /// Validated setter: accepts `-20000..=60000`, otherwise rejects with
    /// [`Error::Invalid`] and leaves `threshold_mc` unchanged.
    pub fn set_threshold_mc(&self, v: i32) -> Result<()> {
        if !state::THRESHOLD_MC_RANGE.contains(&v) {
            self.set_last_error(Error::Invalid);
            return Err(Error::Invalid);
        }
        self.inner.state.lock().unwrap().threshold_mc = v;
        Ok(())
    }

    pub fn threshold_mc(&self) -> i32 {
        self.inner.state.lock().unwrap().threshold_mc
    }

    /// Validated setter: accepts exactly `"normal"`, `"noisy"`, `"ramp"`
    /// (case-sensitive, one trailing `\n` stripped), otherwise rejects with
    /// [`Error::Invalid`] and leaves `mode` unchanged.
    pub fn set_mode(&self, token: &str) -> Result<()> {
        let mode = Mode::parse(token).inspect_err(|&e| self.set_last_error(e))?;
        self.inner.state.lock().unwrap().mode = mode;
        Ok(())
    }

    pub fn mode(&self) -> Mode {
        self.inner.state.lock().unwrap().mode
    }

    /// `updates=<N>\nalerts=<A>\nlast_error=<E>\n`; `<E>` is 0
    /// when no error has occurred, otherwise the negative code from
    /// [`Error::code`].
    pub fn stats(&self) -> String {
        let st = self.inner.state.lock().unwrap();
        let code = st.last_error.map(Error::code).unwrap_or(0);
        format!("updates={}\nalerts={}\nlast_error={}\n", st.updates, st.alerts, code)
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.stop();
    }
}
