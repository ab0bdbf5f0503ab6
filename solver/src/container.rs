use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
    PoisonError,
};

use shared::NSOLUTIONS;
use tracing::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceptance {
    Accepted,
    /// Shares its last decimal digit with an accepted solution
    DuplicateDigit,
    /// Registry is at capacity, the caller must stop searching
    Full,
}

/// Fixed-capacity, discovery-ordered set of accepted solutions for one challenge.
pub struct Container {
    solutions: Mutex<Vec<u64>>,
    // set under the lock once capacity is reached or on `close()`, no push happens after it
    closed: AtomicBool,
    capacity: usize,
}

impl Default for Container {
    fn default() -> Self {
        Self::new(NSOLUTIONS)
    }
}

impl Container {
    pub fn new(capacity: usize) -> Self {
        Self {
            solutions: Mutex::new(Vec::with_capacity(capacity)),
            closed: AtomicBool::new(capacity == 0),
            capacity,
        }
    }

    pub fn try_accept(&self, candidate: u64) -> Acceptance {
        let mut guard = self.solutions.lock().unwrap_or_else(PoisonError::into_inner);

        if self.closed.load(Ordering::Acquire) || guard.len().ge(&self.capacity) {
            return Acceptance::Full;
        }

        let digit = candidate % 10;
        if guard.iter().any(|solution| solution % 10 == digit) {
            trace!("candidate {candidate} rejected, digit {digit} taken");
            return Acceptance::DuplicateDigit;
        }

        guard.push(candidate);
        debug!("solution {}/{}: {candidate}", guard.len(), self.capacity);

        if guard.len() == self.capacity {
            self.closed.store(true, Ordering::Release);
        }
        Acceptance::Accepted
    }

    /// Lock-free check workers poll once per candidate.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Stop all workers without accepting anything else.
    pub fn close(&self) {
        let _guard = self.solutions.lock().unwrap_or_else(PoisonError::into_inner);
        self.closed.store(true, Ordering::Release);
    }

    pub fn len(&self) -> usize {
        self.solutions.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn snapshot(&self) -> Vec<u64> {
        self.solutions.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Accepted solutions in discovery order.
    pub fn into_solutions(self) -> Vec<u64> {
        self.solutions.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, sync::Arc, thread};

    use rand::Rng;

    use super::*;

    #[test]
    fn accepts_in_discovery_order() {
        let container = Container::default();
        assert_eq!(container.try_accept(13), Acceptance::Accepted);
        assert_eq!(container.try_accept(0), Acceptance::Accepted);
        assert_eq!(container.try_accept(7), Acceptance::Accepted);
        assert_eq!(container.into_solutions(), vec![13, 0, 7]);
    }

    #[test]
    fn rejects_shared_last_digit() {
        let container = Container::default();
        assert_eq!(container.try_accept(21), Acceptance::Accepted);
        assert_eq!(container.try_accept(1), Acceptance::DuplicateDigit);
        assert_eq!(container.try_accept(999_991), Acceptance::DuplicateDigit);
        assert_eq!(container.len(), 1);
    }

    #[test]
    fn ninth_match_is_rejected_as_full() {
        let container = Container::default();
        for candidate in 10..18 {
            assert_eq!(container.try_accept(candidate), Acceptance::Accepted);
        }
        assert!(container.is_full());

        // digit 8 is still free, capacity wins
        assert_eq!(container.try_accept(18), Acceptance::Full);
        assert_eq!(container.try_accept(19), Acceptance::Full);
        assert_eq!(container.into_solutions(), (10..18).collect::<Vec<_>>());
    }

    #[test]
    fn close_stops_before_capacity() {
        let container = Container::default();
        container.try_accept(5);
        assert!(!container.is_full());
        container.close();
        assert!(container.is_full());

        // a worker that polled before the close still cannot push
        assert_eq!(container.try_accept(6), Acceptance::Full);
        assert_eq!(container.into_solutions(), vec![5]);
    }

    #[test]
    fn concurrent_accepts_keep_invariants() {
        let container = Arc::new(Container::default());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let container = container.clone();
                thread::spawn(move || {
                    let mut rng = rand::thread_rng();
                    let mut accepted = 0;
                    for _ in 0..1_000 {
                        if container.try_accept(rng.gen_range(0..1_000_000_000)) == Acceptance::Accepted {
                            accepted += 1;
                        }
                    }
                    accepted
                })
            })
            .collect();

        let accepted: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

        let container = Arc::into_inner(container).unwrap();
        let solutions = container.into_solutions();
        assert_eq!(accepted, solutions.len());
        assert!(solutions.len() <= NSOLUTIONS);

        let digits: HashSet<_> = solutions.iter().map(|s| s % 10).collect();
        assert_eq!(digits.len(), solutions.len());
    }
}
