use std::{
    ops::Range,
    sync::{Arc, Mutex, PoisonError},
};

use clap::ValueEnum;
use serde::Deserialize;

/// How candidates are handed to workers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Contiguous slice of the space per worker, fixed at spawn time
    #[default]
    Static,
    /// One shared cursor, one candidate per claim
    Dynamic,
}

/// Half-open range of worker `ordinal` out of `workers` over `[0, space)`.
///
/// The last worker absorbs the remainder of the integer division.
pub fn partition(ordinal: usize, workers: usize, space: u64) -> Range<u64> {
    debug_assert!(workers > 0 && ordinal < workers);
    let chunk = space / workers as u64;
    let start = chunk * ordinal as u64;
    let end = if ordinal == workers - 1 {
        space
    } else {
        start + chunk
    };
    start..end
}

/// Shared, monotonically increasing next-candidate counter.
#[derive(Debug)]
pub struct SearchCursor {
    next: Mutex<u64>,
    space: u64,
}

impl SearchCursor {
    pub fn new(space: u64) -> Self {
        Self {
            next: Mutex::new(0),
            space,
        }
    }

    /// Claim the next unexamined candidate, `None` once the space is exhausted.
    pub fn claim(&self) -> Option<u64> {
        let mut next = self.next.lock().unwrap_or_else(PoisonError::into_inner);
        if next.ge(&self.space) {
            return None;
        }
        let claimed = *next;
        *next += 1;
        Some(claimed)
    }

    pub fn position(&self) -> u64 {
        *self.next.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Where one worker takes its candidates from.
#[derive(Debug)]
pub enum WorkSource {
    Range(Range<u64>),
    Cursor(Arc<SearchCursor>),
}

impl WorkSource {
    pub fn next_candidate(&mut self) -> Option<u64> {
        match self {
            WorkSource::Range(range) => range.next(),
            WorkSource::Cursor(cursor) => cursor.claim(),
        }
    }
}
