//! Peer group multiples for relative valuation.

use serde::{Deserialize, Serialize};

use crate::error::ValuationResult;
use crate::guards::require_non_empty;

/// A non-empty set of comparable-company multiples (P/E, EV/EBITDA, ...).
///
/// Input order is kept for display; statistics over the set ignore it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct PeerMultipleSet {
    multiples: Vec<f64>,
}

impl PeerMultipleSet {
    /// Creates a peer set.
    ///
    /// # Errors
    ///
    /// Returns `ValuationError::InvalidParameters` if `multiples` is empty.
    pub fn new(multiples: Vec<f64>) -> ValuationResult<Self> {
        require_non_empty(multiples.len(), "peer multiple set")?;
        Ok(Self { multiples })
    }

    /// Number of peers.
    pub fn len(&self) -> usize {
        self.multiples.len()
    }

    /// Always false; kept for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.multiples.is_empty()
    }

    /// Multiples in input order.
    pub fn as_slice(&self) -> &[f64] {
        &self.multiples
    }

    /// Multiples sorted ascending (NaN-free inputs assumed).
    pub fn sorted(&self) -> Vec<f64> {
        let mut sorted = self.multiples.clone();
        sorted.sort_by(f64::total_cmp);
        sorted
    }
}

impl TryFrom<Vec<f64>> for PeerMultipleSet {
    type Error = crate::error::ValuationError;

    fn try_from(multiples: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(multiples)
    }
}

impl From<PeerMultipleSet> for Vec<f64> {
    fn from(set: PeerMultipleSet) -> Self {
        set.multiples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty() {
        assert!(PeerMultipleSet::new(Vec::new()).is_err());
    }

    #[test]
    fn test_preserves_input_order() {
        let peers = PeerMultipleSet::new(vec![15.0, 9.0, 12.0]).unwrap();
        assert_eq!(peers.as_slice(), &[15.0, 9.0, 12.0]);
        assert_eq!(peers.sorted(), vec![9.0, 12.0, 15.0]);
        assert_eq!(peers.len(), 3);
        assert!(!peers.is_empty());
    }
}
