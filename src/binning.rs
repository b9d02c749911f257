//! Turning raw observations into bin values for a histogram widget.
//!
//! [`bin_counts`] follows numpy's `histogram` convention: bins are half-open
//! `[e_i, e_{i+1})` except the last, which also includes its right edge.
//! Samples outside the edges are dropped.
//!
//! Categorical observations such as an agent's strongest belief (`"A"`,
//! `"b"`, ...) map to numbers with [`letter_index`] first.

use log::trace;

use crate::error::{Error, Result};

/// Edges `0, 1, ..., n - 1`, i.e. `n - 1` unit-wide bins.
#[must_use]
pub fn integer_edges(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64).collect()
}

/// Count samples per bin.
///
/// # Errors
///
/// Returns [`Error::InvalidBinEdges`] if there are fewer than two edges, or
/// the edges are not finite and strictly increasing.
///
/// # Example
///
/// ```
/// use histogram_widget::binning::bin_counts;
///
/// let counts = bin_counts(&[0.0, 1.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 2.0, 3.0]).unwrap();
/// assert_eq!(counts, vec![1, 2, 2]);
/// ```
pub fn bin_counts(samples: &[f64], edges: &[f64]) -> Result<Vec<u32>> {
    validate_edges(edges)?;
    let bins = edges.len() - 1;
    let (first, last) = (edges[0], edges[bins]);

    let mut counts = vec![0u32; bins];
    for &sample in samples {
        if !sample.is_finite() || sample < first || sample > last {
            continue;
        }
        let bin = if sample == last {
            bins - 1
        } else {
            edges.partition_point(|&e| e <= sample) - 1
        };
        counts[bin] += 1;
    }
    trace!("binned {} samples into {bins} bins", samples.len());
    Ok(counts)
}

/// Position of a single-letter label in the alphabet, ignoring case:
/// `"a"` and `"A"` are 0, `"c"` is 2. Anything else is `None`.
#[must_use]
pub fn letter_index(label: &str) -> Option<usize> {
    let mut chars = label.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => {
            Some(usize::from(c.to_ascii_lowercase() as u8 - b'a'))
        }
        _ => None,
    }
}

/// Count categorical beliefs per bin: each label goes through
/// [`letter_index`], unrecognised labels are skipped.
pub fn belief_counts<I, S>(beliefs: I, edges: &[f64]) -> Result<Vec<u32>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let samples: Vec<f64> = beliefs
        .into_iter()
        .filter_map(|b| letter_index(b.as_ref()))
        .map(|i| i as f64)
        .collect();
    bin_counts(&samples, edges)
}

fn validate_edges(edges: &[f64]) -> Result<()> {
    if edges.len() < 2 {
        return Err(Error::InvalidBinEdges(format!(
            "need at least 2 edges, got {}",
            edges.len()
        )));
    }
    if edges.iter().any(|e| !e.is_finite()) {
        return Err(Error::InvalidBinEdges("edges must be finite".to_string()));
    }
    if edges.windows(2).any(|w| w[0] >= w[1]) {
        return Err(Error::InvalidBinEdges(
            "edges must be strictly increasing".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_edges() {
        assert_eq!(integer_edges(4), vec![0.0, 1.0, 2.0, 3.0]);
        assert!(integer_edges(0).is_empty());
    }

    #[test]
    fn test_last_bin_is_closed() {
        let counts = bin_counts(&[3.0, 3.0, 2.5], &integer_edges(4)).unwrap();
        assert_eq!(counts, vec![0, 0, 3]);
    }

    #[test]
    fn test_out_of_range_samples_dropped() {
        let counts = bin_counts(&[-1.0, 0.5, 4.0, f64::NAN], &[0.0, 1.0, 2.0]).unwrap();
        assert_eq!(counts, vec![1, 0]);
    }

    #[test]
    fn test_uneven_edges() {
        let counts = bin_counts(&[0.1, 0.9, 5.0, 9.99], &[0.0, 1.0, 10.0]).unwrap();
        assert_eq!(counts, vec![2, 2]);
    }

    #[test]
    fn test_invalid_edges() {
        assert!(matches!(bin_counts(&[], &[1.0]), Err(Error::InvalidBinEdges(_))));
        assert!(bin_counts(&[], &[0.0, 0.0]).is_err());
        assert!(bin_counts(&[], &[2.0, 1.0]).is_err());
        assert!(bin_counts(&[], &[0.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn test_letter_index() {
        assert_eq!(letter_index("A"), Some(0));
        assert_eq!(letter_index("b"), Some(1));
        assert_eq!(letter_index(" C "), Some(2));
        assert_eq!(letter_index("AB"), None);
        assert_eq!(letter_index("1"), None);
        assert_eq!(letter_index(""), None);
    }

    #[test]
    fn test_belief_counts() {
        let beliefs = ["A", "B", "B", "C", "c", "?"];
        let counts = belief_counts(beliefs, &integer_edges(4)).unwrap();
        // "C" and "c" both map to 2; "?" is skipped
        assert_eq!(counts, vec![1, 2, 2]);
    }
}
