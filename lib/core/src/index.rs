use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::vector::Vector;

/// Exact inner-product nearest-neighbor index.
///
/// Stores one unit-normalized vector per catalogue record, at the same
/// ordinal. Inner product on unit vectors equals cosine similarity, so
/// search scores fall in [-1, 1]. Vectors are re-normalized here at build
/// time regardless of what the encoder produced; mixing normalized and
/// unnormalized rows across builds would make scores silently incomparable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlatIpIndex {
    dim: usize,
    vectors: Vec<Vector>,
}

impl FlatIpIndex {
    /// Build an index from embedding vectors, ordinal-aligned with their
    /// catalogue. All vectors must share one dimension.
    pub fn from_vectors(vectors: Vec<Vector>) -> Result<Self> {
        assert!(!vectors.is_empty(), "cannot build an index from zero vectors");

        let dim = vectors[0].dim();
        for vector in &vectors {
            if vector.dim() != dim {
                return Err(Error::InvalidDimension {
                    expected: dim,
                    actual: vector.dim(),
                });
            }
        }

        let vectors = vectors.into_iter().map(|v| v.normalized()).collect();
        Ok(Self { dim, vectors })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    #[must_use]
    pub fn vectors(&self) -> &[Vector] {
        &self.vectors
    }

    /// Return the `k` nearest vectors to `query` as `(ordinal, score)` pairs,
    /// ordered by descending score, ties broken by ascending ordinal.
    ///
    /// Returns fewer than `k` results when the index holds fewer vectors.
    /// Read-only; safe for concurrent callers against the same index.
    ///
    /// # Panics
    ///
    /// Panics when `k` is zero; that is a caller bug, not a data condition.
    pub fn search(&self, query: &Vector, k: usize) -> Result<Vec<(usize, f32)>> {
        assert!(k > 0, "k must be a positive integer");

        if query.dim() != self.dim {
            return Err(Error::InvalidDimension {
                expected: self.dim,
                actual: query.dim(),
            });
        }

        let query = query.normalized();
        let mut scored: Vec<(usize, f32)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(ordinal, vector)| (ordinal, vector.dot(&query)))
            .collect();

        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        scored.truncate(k);
        Ok(scored)
    }
}
