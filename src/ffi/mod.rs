//! Thin wrapper around the one raw syscall the engine needs: reading the
//! monotonic clock for [`Sample::timestamp_ns`](crate::record::Sample::timestamp_ns).
//!
//! Kept isolated the same way the rest of the crate isolates its OS
//! primitives, so nothing outside this module touches `libc` directly.

use std::mem::MaybeUninit;

/// Current value of `CLOCK_MONOTONIC`, in nanoseconds.
pub fn now_ns() -> u64 {
    let mut ts = MaybeUninit::<libc::timespec>::uninit();
    // CLOCK_MONOTONIC never fails for a valid pointer on any Linux/Android
    // target we support; an error here would indicate a libc/ABI mismatch
    // this crate cannot recover from.
    let rc = unsafe { libc::clock_gettime(libc::CLOCK_MONOTONIC, ts.as_mut_ptr()) };
    assert_eq!(rc, 0, "clock_gettime(CLOCK_MONOTONIC) failed");
    let ts = unsafe { ts.assume_init() };
    ts.tv_sec as u64 * 1_000_000_000 + ts.tv_nsec as u64
}
