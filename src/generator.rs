//! Pure step functions for the temperature generator.
//!
//! Each function mutates only `current_mc` (and, for [`Mode::Ramp`],
//! `ramp_direction`). None of them touch the mutex, the sequence counter, or
//! any counter — that bookkeeping belongs to the tick path in
//! [`crate::engine`].

use rand::Rng;

use crate::mode::Mode;

const LOW: i32 = 44_000;
const NORMAL_HIGH: i32 = 46_000;
const RAMP_HIGH: i32 = 46_000;
const NOISY_HIGH: i32 = 46_000;

const NORMAL_STEP: i32 = 10;
const RAMP_STEP: i32 = 50;
const NOISY_JITTER: i32 = 100;

/// Advances `current_mc`/`ramp_direction` by one tick under `mode`.
///
/// `mode` is a closed [`Mode`] enum validated once at the setter boundary
/// ([`Mode::parse`](crate::mode::Mode::parse)), so every arm below is
/// reachable and there is no invalid-tag fallthrough to handle here — the
/// tick still counts as produced regardless of which arm runs.
pub fn step(mode: Mode, current_mc: &mut i32, ramp_direction: &mut i32, rng: &mut impl Rng) {
    match mode {
        Mode::Normal => {
            let next = *current_mc + NORMAL_STEP;
            *current_mc = if next > NORMAL_HIGH { LOW } else { next };
        }
        Mode::Noisy => {
            let jitter = rng.gen_range(-NOISY_JITTER..=NOISY_JITTER);
            *current_mc = (*current_mc + jitter).clamp(LOW, NOISY_HIGH);
        }
        Mode::Ramp => {
            let next = *current_mc + *ramp_direction * RAMP_STEP;
            if next >= RAMP_HIGH {
                *ramp_direction = -1;
            } else if next <= LOW {
                *ramp_direction = 1;
            }
            *current_mc = next;
        }
    }
}

#[cfg(test)]
mod test;
