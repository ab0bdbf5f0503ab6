//! Divisibility gate applied to digest matches.
//!
//! A candidate fails when some divisor in `[DIVISOR_MIN, DIVISOR_MAX]` divides it evenly.
//! Candidates below `DIVISOR_MIN` (0 included) always pass, candidates inside the range fail
//! because they divide themselves.

pub const DIVISOR_MIN: u64 = 1_000_000;
pub const DIVISOR_MAX: u64 = 1_500_000;

pub fn passes(candidate: u64) -> bool {
    if candidate < DIVISOR_MIN {
        return true;
    }
    // d | c with d in [MIN, MAX] iff c / d is an integer q in [ceil(c / MAX), floor(c / MIN)]
    let lo = candidate.div_ceil(DIVISOR_MAX);
    let hi = candidate / DIVISOR_MIN;
    // walk whichever side is shorter, quotients only win below ~1.5e12
    if hi - lo > DIVISOR_MAX - DIVISOR_MIN {
        !(DIVISOR_MIN..=DIVISOR_MAX).any(|d| candidate % d == 0)
    } else {
        !(lo..=hi).any(|q| candidate % q == 0)
    }
}
