use crate::error::Result;
use crate::vector::Vector;

/// Boundary to the external embedding service.
///
/// Implementations turn a batch of texts into unit-normalized vectors, one
/// per input, in input order, all with the same dimension for a given
/// deployment. A failure for any single text fails the whole batch; partial
/// results are discarded rather than silently padded.
pub trait TextEncoder: Send + Sync {
    fn encode(&self, texts: &[String]) -> Result<Vec<Vector>>;

    /// Encode a single text. Convenience wrapper over [`TextEncoder::encode`].
    fn encode_one(&self, text: &str) -> Result<Vector> {
        let mut vectors = self.encode(&[text.to_string()])?;
        vectors.pop().ok_or_else(|| {
            crate::error::Error::Encoding(format!("encoder returned no vector for {text:?}"))
        })
    }
}
