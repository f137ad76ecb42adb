use super::*;

#[test]
fn normal_advances_by_ten_and_wraps() {
    let mut rng = rand::thread_rng();
    let mut current = 44_000;
    let mut dir = 1;
    for _ in 0..200 {
        step(Mode::Normal, &mut current, &mut dir, &mut rng);
        assert!((LOW..=46_010).contains(&current), "out of bounds: {current}");
    }
}

#[test]
fn normal_wraps_exactly_at_overshoot() {
    let mut rng = rand::thread_rng();
    let mut current = 46_000;
    let mut dir = 1;
    step(Mode::Normal, &mut current, &mut dir, &mut rng);
    assert_eq!(current, LOW);
}

#[test]
fn noisy_stays_within_bounds() {
    let mut rng = rand::thread_rng();
    let mut current = 45_000;
    let mut dir = 1;
    for _ in 0..2000 {
        step(Mode::Noisy, &mut current, &mut dir, &mut rng);
        assert!((LOW..=NOISY_HIGH).contains(&current), "out of bounds: {current}");
    }
}

#[test]
fn ramp_triangular_wave_stays_within_bounds_and_reverses() {
    let mut rng = rand::thread_rng();
    let mut current = LOW;
    let mut dir = 1;
    let mut saw_low = false;
    let mut saw_high = false;
    for _ in 0..400 {
        step(Mode::Ramp, &mut current, &mut dir, &mut rng);
        assert!((LOW..=RAMP_HIGH).contains(&current), "out of bounds: {current}");
        saw_low |= current == LOW;
        saw_high |= current == RAMP_HIGH;
    }
    assert!(saw_low && saw_high);
}

#[test]
fn ramp_continues_from_current_value_on_mode_switch() {
    // One NORMAL tick lands on 44010; switching to RAMP continues from
    // there rather than resetting to 44000.
    let mut rng = rand::thread_rng();
    let mut current = 44_000;
    let mut dir = 1;
    step(Mode::Normal, &mut current, &mut dir, &mut rng);
    assert_eq!(current, 44_010);

    step(Mode::Ramp, &mut current, &mut dir, &mut rng);
    assert_eq!(current, 44_060);
    step(Mode::Ramp, &mut current, &mut dir, &mut rng);
    assert_eq!(current, 44_110);
}
