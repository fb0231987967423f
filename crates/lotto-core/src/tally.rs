use serde::{Serialize, Serializer};
use tracing::debug;

/// Highest number that can be drawn. Numbers run from 1 to `MAX_NUMBER`.
pub const MAX_NUMBER: usize = 42;

/// Per-number occurrence counts. Index `i` holds the count for number `i + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedCounts {
    counts: [u64; MAX_NUMBER],
}

impl ObservedCounts {
    pub fn from_counts(counts: [u64; MAX_NUMBER]) -> Self {
        Self { counts }
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.counts
    }

    /// Count for `number` (1-based). Out-of-range numbers have no bin.
    pub fn get(&self, number: usize) -> Option<u64> {
        number
            .checked_sub(1)
            .and_then(|i| self.counts.get(i))
            .copied()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn max(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

// serde only derives arrays up to 32 elements.
impl Serialize for ObservedCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.counts.iter())
    }
}

/// Whether `value` is a drawable number: integral and within 1..=MAX_NUMBER.
///
/// Anything else is dropped from the tally without error.
pub fn is_valid_draw(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0 && (1.0..=MAX_NUMBER as f64).contains(&value)
}

/// Count occurrences of each valid number in `values`.
pub fn tally(values: &[f64]) -> ObservedCounts {
    let mut counts = [0u64; MAX_NUMBER];
    let mut discarded = 0usize;

    for &v in values {
        if is_valid_draw(v) {
            counts[v as usize - 1] += 1;
        } else {
            discarded += 1;
        }
    }

    if discarded > 0 {
        debug!("discarded {discarded} values outside 1..={MAX_NUMBER}");
    }

    ObservedCounts { counts }
}
