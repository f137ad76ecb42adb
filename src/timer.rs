//! The timer is modeled as a trait so the tick path never depends on a
//! specific OS scheduling primitive: `arm` hands over a
//! tick-callback and a period supplier, `cancel` tears it down. The engine
//! itself owns re-arming semantics — it is the `period_ms` closure, called
//! fresh before every sleep, that lets a live period change apply starting
//! on the next tick without the `Scheduler` impl knowing
//! anything about reconfiguration.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Upper bound on how long a single sleep slice waits before re-checking
/// cancellation, so `cancel` returns promptly even mid-period.
const POLL_SLICE_MS: u64 = 20;

/// A periodic scheduler: arm it with a callback, cancel it to stop.
pub trait Scheduler: Send {
    /// Starts calling `on_tick` roughly every `period_ms()` milliseconds,
    /// re-reading `period_ms()` before each wait. Replaces any previous
    /// arming.
    fn arm(&mut self, period_ms: Arc<dyn Fn() -> u64 + Send + Sync>, on_tick: Arc<dyn Fn() + Send + Sync>);

    /// Cancels the timer. A no-op if not armed. Blocks until any in-flight
    /// tick callback has returned.
    fn cancel(&mut self);
}

/// Default [`Scheduler`]: one dedicated `std::thread` per armed timer.
pub struct ThreadTimer {
    cancel: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl ThreadTimer {
    pub fn new() -> Self {
        ThreadTimer {
            cancel: Arc::new(AtomicBool::new(false)),
            handle: None,
        }
    }
}

impl Default for ThreadTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for ThreadTimer {
    fn arm(&mut self, period_ms: Arc<dyn Fn() -> u64 + Send + Sync>, on_tick: Arc<dyn Fn() + Send + Sync>) {
        self.cancel();
        self.cancel.store(false, Ordering::SeqCst);
        let cancel = Arc::clone(&self.cancel);

        self.handle = Some(thread::spawn(move || {
            while !cancel.load(Ordering::Acquire) {
                let target = Duration::from_millis(period_ms());
                let mut waited = Duration::ZERO;
                while waited < target {
                    if cancel.load(Ordering::Acquire) {
                        return;
                    }
                    let slice = Duration::from_millis(POLL_SLICE_MS).min(target - waited);
                    thread::sleep(slice);
                    waited += slice;
                }
                if cancel.load(Ordering::Acquire) {
                    return;
                }
                on_tick();
            }
        }));
    }

    fn cancel(&mut self) {
        self.cancel.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for ThreadTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod test;
