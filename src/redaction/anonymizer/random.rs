//! Random number sources for the randomized anonymizers
//!
//! Email and medical-record-number replacements draw a fresh number per
//! match. The source is injected so tests and reproducible runs can pin it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Source of uniformly drawn integers
pub trait RandomSource: Send + Sync {
    /// Draw a value from `range`; an empty range yields `range.start`
    fn next_in_range(&self, range: Range<u64>) -> u64;
}

/// Thread-local entropy, a fresh draw every call
#[derive(Debug, Default, Clone, Copy)]
pub struct EntropySource;

impl RandomSource for EntropySource {
    fn next_in_range(&self, range: Range<u64>) -> u64 {
        if range.is_empty() {
            return range.start;
        }
        rand::thread_rng().gen_range(range)
    }
}

/// Seeded `StdRng`, reproducible across runs
pub struct SeededSource {
    rng: Mutex<StdRng>,
}

impl SeededSource {
    /// Create a source from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededSource {
    fn next_in_range(&self, range: Range<u64>) -> u64 {
        if range.is_empty() {
            return range.start;
        }
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(range)
    }
}

/// Replays a fixed sequence, cycling when exhausted
///
/// Values outside the requested range are folded into it.
#[derive(Debug, Default)]
pub struct SequenceSource {
    values: Vec<u64>,
    cursor: AtomicUsize,
}

impl SequenceSource {
    /// Create a source replaying `values`
    pub fn new(values: impl Into<Vec<u64>>) -> Self {
        Self {
            values: values.into(),
            cursor: AtomicUsize::new(0),
        }
    }
}

impl RandomSource for SequenceSource {
    fn next_in_range(&self, range: Range<u64>) -> u64 {
        if range.is_empty() || self.values.is_empty() {
            return range.start;
        }
        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % self.values.len();
        let value = self.values[index];
        if range.contains(&value) {
            value
        } else {
            range.start + value % (range.end - range.start)
        }
    }
}
