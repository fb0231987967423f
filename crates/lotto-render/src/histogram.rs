//! Equal-width bucketing of per-number counts for the distribution chart.

/// One histogram bar. `lo` is inclusive; `hi` is exclusive except for the last
/// bucket, which also takes values equal to the maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bucket {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

/// Split `values` into `buckets` equal-width bins spanning `[min, max]`.
///
/// A degenerate span (all values equal) is widened to `[v - 0.5, v + 0.5]`.
pub fn bucket_counts(values: &[u64], buckets: usize) -> Vec<Bucket> {
    if values.is_empty() || buckets == 0 {
        return Vec::new();
    }

    let min = values.iter().copied().min().unwrap_or(0) as f64;
    let max = values.iter().copied().max().unwrap_or(0) as f64;
    let (lo, hi) = if min == max {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    };
    let width = (hi - lo) / buckets as f64;

    let mut out: Vec<Bucket> = (0..buckets)
        .map(|i| Bucket {
            lo: lo + i as f64 * width,
            hi: if i + 1 == buckets {
                hi
            } else {
                lo + (i + 1) as f64 * width
            },
            count: 0,
        })
        .collect();

    for &v in values {
        let idx = (((v as f64 - lo) / width) as usize).min(buckets - 1);
        out[idx].count += 1;
    }
    out
}
