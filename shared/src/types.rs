use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::NSOLUTIONS;

/// Target value a candidate's digest prefix must equal.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge(pub u16);

impl Challenge {
    pub fn value(&self) -> u16 {
        self.0
    }
}

impl From<u16> for Challenge {
    fn from(value: u16) -> Self {
        Challenge(value)
    }
}

impl Display for Challenge {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of one challenge search.
///
/// `solutions` holds only the accepted candidates, in discovery order. Printed reports pad the
/// remaining slots with `0`, which is indistinguishable from an accepted candidate `0` in the
/// text form; `found` carries the real count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeReport {
    pub challenge: Challenge,
    pub solutions: Vec<u64>,
}

impl ChallengeReport {
    pub fn new(challenge: Challenge, solutions: Vec<u64>) -> Self {
        debug_assert!(solutions.len() <= NSOLUTIONS);
        Self {
            challenge,
            solutions,
        }
    }

    pub fn found(&self) -> usize {
        self.solutions.len()
    }

    /// All slots, unfilled ones set to the `0` sentinel.
    pub fn slots(&self) -> [u64; NSOLUTIONS] {
        let mut slots = [0; NSOLUTIONS];
        for (slot, value) in slots.iter_mut().zip(&self.solutions) {
            *slot = *value;
        }
        slots
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&JsonReport {
            challenge: self.challenge.value(),
            solutions: self.slots(),
            found: self.found(),
        })
    }
}

#[derive(Serialize)]
struct JsonReport {
    challenge: u16,
    solutions: [u64; NSOLUTIONS],
    found: usize,
}

impl Display for ChallengeReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.challenge)?;
        for value in self.slots() {
            write!(f, " {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_line_pads_unfilled_slots() {
        let report = ChallengeReport::new(Challenge(12), vec![41, 7]);
        assert_eq!(report.to_string(), "12 41 7 0 0 0 0 0 0");
        assert_eq!(report.found(), 2);
    }

    #[test]
    fn empty_report_prints_eight_zeros() {
        let report = ChallengeReport::new(Challenge(65535), vec![]);
        assert_eq!(report.to_string(), "65535 0 0 0 0 0 0 0 0");
    }

    #[test]
    fn json_keeps_found_count() {
        let report = ChallengeReport::new(Challenge(3), vec![0]);
        assert_eq!(
            report.to_json().unwrap(),
            r#"{"challenge":3,"solutions":[0,0,0,0,0,0,0,0],"found":1}"#
        );
    }
}
