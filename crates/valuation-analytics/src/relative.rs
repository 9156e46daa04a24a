//! Relative valuation against a peer group.
//!
//! Compares a target multiple with the median of its peers. The result is a
//! tentative signal only: a discount to peers may be justified by weaker
//! growth or higher risk.

use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;
use std::cmp::Ordering;
use std::fmt;

use valuation_core::types::PeerMultipleSet;

/// Where the target sits relative to the peer median.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Below the median: possibly undervalued.
    Below,
    /// Exactly at the median.
    Equal,
    /// Above the median: possibly overvalued.
    Above,
}

impl Classification {
    /// Short interpretation for display.
    pub fn signal(&self) -> &'static str {
        match self {
            Classification::Below => "below peer median (may be undervalued)",
            Classification::Equal => "in line with peer median",
            Classification::Above => "above peer median (may be overvalued)",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Classification::Below => "below",
            Classification::Equal => "equal",
            Classification::Above => "above",
        };
        write!(f, "{name}")
    }
}

/// Peer statistics and the target's classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelativeComparison {
    /// Target multiple.
    pub target: f64,
    /// Median of the peer multiples.
    pub median: f64,
    /// Population standard deviation of the peer multiples.
    pub std_dev: f64,
    /// Three-way comparison of target against median.
    pub classification: Classification,
}

/// Median of the peers; the mean of the two middle values for even counts.
pub fn median(peers: &PeerMultipleSet) -> f64 {
    let sorted = peers.sorted();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Population (not sample) standard deviation of the peers.
pub fn population_std_dev(peers: &PeerMultipleSet) -> f64 {
    peers.as_slice().population_std_dev()
}

/// Strict three-way classification of `target` against `median`.
pub fn classify(target: f64, median: f64) -> Classification {
    match target.partial_cmp(&median) {
        Some(Ordering::Less) => Classification::Below,
        Some(Ordering::Equal) => Classification::Equal,
        _ => Classification::Above,
    }
}

/// Compares a target multiple with its peer group.
///
/// # Example
///
/// ```rust
/// use valuation_analytics::relative::{compare, Classification};
/// use valuation_core::PeerMultipleSet;
///
/// let peers = PeerMultipleSet::new(vec![12.0, 12.0, 12.0]).unwrap();
/// let cmp = compare(10.0, &peers);
/// assert_eq!(cmp.median, 12.0);
/// assert_eq!(cmp.classification, Classification::Below);
/// ```
pub fn compare(target: f64, peers: &PeerMultipleSet) -> RelativeComparison {
    let median = median(peers);
    let std_dev = population_std_dev(peers);
    let classification = classify(target, median);
    log::debug!(
        "relative: target={target} peers={} median={median} std_dev={std_dev} -> {classification}",
        peers.len()
    );
    RelativeComparison {
        target,
        median,
        std_dev,
        classification,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn peers(values: &[f64]) -> PeerMultipleSet {
        PeerMultipleSet::new(values.to_vec()).unwrap()
    }

    #[test]
    fn test_identical_peers() {
        let cmp = compare(10.0, &peers(&[12.0, 12.0, 12.0]));
        assert_relative_eq!(cmp.median, 12.0);
        assert_relative_eq!(cmp.std_dev, 0.0);
        assert_eq!(cmp.classification, Classification::Below);
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_relative_eq!(median(&peers(&[15.0, 9.0, 12.0])), 12.0);
        assert_relative_eq!(median(&peers(&[15.0, 9.0, 12.0, 10.0])), 11.0);
        assert_relative_eq!(median(&peers(&[7.5])), 7.5);
    }

    #[test]
    fn test_population_std_dev() {
        // Population variance of {2, 4, 4, 4, 5, 5, 7, 9} is 4.
        let set = peers(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_relative_eq!(population_std_dev(&set), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_single_peer_has_zero_spread() {
        let cmp = compare(15.0, &peers(&[10.0]));
        assert_relative_eq!(cmp.std_dev, 0.0);
        assert_eq!(cmp.classification, Classification::Above);
    }

    #[test]
    fn test_classification_is_strict() {
        assert_eq!(classify(12.0, 12.0), Classification::Equal);
        assert_eq!(classify(11.999, 12.0), Classification::Below);
        assert_eq!(classify(12.001, 12.0), Classification::Above);
    }

    #[test]
    fn test_signal_text() {
        assert!(Classification::Below.signal().contains("undervalued"));
        assert!(Classification::Above.signal().contains("overvalued"));
        assert_eq!(Classification::Equal.to_string(), "equal");
    }

    #[test]
    fn test_idempotent() {
        let set = peers(&[14.0, 9.5, 12.0, 18.0]);
        let a = compare(13.0, &set);
        let b = compare(13.0, &set);
        assert_eq!(a, b);
        assert_eq!(a.std_dev.to_bits(), b.std_dev.to_bits());
    }
}
