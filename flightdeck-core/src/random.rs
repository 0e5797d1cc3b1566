use std::sync::atomic::{AtomicUsize, Ordering};

/// Uniform integer source used wherever a lookup needs to pick something.
pub trait RandomSource: Send + Sync {
    /// Returns a value in `[low, high)`. `high` must be greater than `low`.
    fn next_in_range(&self, low: u32, high: u32) -> u32;

    /// Uniform index into a collection of `len` elements.
    fn pick_index(&self, len: usize) -> usize {
        let len = u32::try_from(len).unwrap_or(u32::MAX);
        self.next_in_range(0, len) as usize
    }
}

/// Replays a fixed cycle of raw values, folded into the requested range.
///
/// Each raw value `v` yields `low + v % (high - low)`, so tests can write the
/// offsets they want directly.
#[derive(Debug)]
pub struct SequenceRandom {
    values: Vec<u32>,
    cursor: AtomicUsize,
}

impl SequenceRandom {
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            values,
            cursor: AtomicUsize::new(0),
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_in_range(&self, low: u32, high: u32) -> u32 {
        if self.values.is_empty() || high <= low {
            return low;
        }
        let i = self.cursor.fetch_add(1, Ordering::Relaxed) % self.values.len();
        low + self.values[i] % (high - low)
    }
}
