use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use super::*;

#[test]
fn ticks_fire_repeatedly() {
    let mut timer = ThreadTimer::new();
    let count = Arc::new(AtomicU64::new(0));
    let count2 = Arc::clone(&count);

    timer.arm(
        Arc::new(|| 5u64),
        Arc::new(move || {
            count2.fetch_add(1, Ordering::SeqCst);
        }),
    );

    thread::sleep(Duration::from_millis(60));
    timer.cancel();

    assert!(count.load(Ordering::SeqCst) >= 3, "expected several ticks to fire");
}

#[test]
fn cancel_stops_further_ticks() {
    let mut timer = ThreadTimer::new();
    let count = Arc::new(AtomicU64::new(0));
    let count2 = Arc::clone(&count);

    timer.arm(Arc::new(|| 5u64), Arc::new(move || { count2.fetch_add(1, Ordering::SeqCst); }));
    thread::sleep(Duration::from_millis(30));
    timer.cancel();
    let observed = count.load(Ordering::SeqCst);

    thread::sleep(Duration::from_millis(60));
    assert_eq!(count.load(Ordering::SeqCst), observed);
}

#[test]
fn rearming_replaces_previous_timer() {
    let mut timer = ThreadTimer::new();
    let count_a = Arc::new(AtomicU64::new(0));
    let count_b = Arc::new(AtomicU64::new(0));

    {
        let count_a = Arc::clone(&count_a);
        timer.arm(Arc::new(|| 1000u64), Arc::new(move || { count_a.fetch_add(1, Ordering::SeqCst); }));
    }
    {
        let count_b = Arc::clone(&count_b);
        timer.arm(Arc::new(|| 5u64), Arc::new(move || { count_b.fetch_add(1, Ordering::SeqCst); }));
    }

    thread::sleep(Duration::from_millis(40));
    timer.cancel();

    assert_eq!(count_a.load(Ordering::SeqCst), 0);
    assert!(count_b.load(Ordering::SeqCst) >= 2);
}
