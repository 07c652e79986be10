use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::{debug, info};

use reelvec_core::{build_documents, Catalogue, Error, FlatIpIndex, Result, TextEncoder, Vector};

use crate::artifacts::{read_artifact, write_artifact, BundlePaths};

/// Registry of datasets plus the persisted bundle for each.
///
/// Catalogues are registered explicitly; nothing is computed at load time.
/// The expensive work (encoding every document and building the index)
/// happens lazily, on the first [`IndexStore::ensure`] for a dataset, and the
/// resulting artifacts are reused from disk afterwards.
pub struct IndexStore {
    data_dir: PathBuf,
    encoder: Arc<dyn TextEncoder>,
    catalogues: RwLock<HashMap<String, Catalogue>>,
    build_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl IndexStore {
    pub fn new<P: AsRef<Path>>(data_dir: P, encoder: Arc<dyn TextEncoder>) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&data_dir)?;

        Ok(Self {
            data_dir,
            encoder,
            catalogues: RwLock::new(HashMap::new()),
            build_locks: Mutex::new(HashMap::new()),
        })
    }

    /// Register a catalogue under a dataset name, replacing any previous
    /// registration for that name. Registration alone performs no encoding.
    pub fn register(&self, name: impl Into<String>, catalogue: Catalogue) {
        self.catalogues.write().insert(name.into(), catalogue);
    }

    #[must_use]
    pub fn is_registered(&self, name: &str) -> bool {
        self.catalogues.read().contains_key(name)
    }

    #[must_use]
    pub fn registered_datasets(&self) -> Vec<String> {
        let mut names: Vec<String> = self.catalogues.read().keys().cloned().collect();
        names.sort();
        names
    }

    #[inline]
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    #[inline]
    #[must_use]
    pub fn encoder(&self) -> &Arc<dyn TextEncoder> {
        &self.encoder
    }

    fn registered(&self, name: &str) -> Result<Catalogue> {
        self.catalogues
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UnknownDataset(name.to_string()))
    }

    /// Per-dataset build gate: at most one builder at a time per name.
    /// Concurrent builders racing on the same files could interleave writes
    /// and break the ordinal alignment between artifacts.
    fn build_lock(&self, name: &str) -> Arc<Mutex<()>> {
        self.build_locks
            .lock()
            .entry(name.to_string())
            .or_default()
            .clone()
    }

    /// Make sure the persisted bundle for `name` exists, building it if any
    /// artifact is missing. Returns `true` when a build was performed.
    ///
    /// A bundle with only some artifacts present is rebuilt wholesale; the
    /// three files are only ever regenerated together.
    pub fn ensure(&self, name: &str) -> Result<bool> {
        let catalogue = self.registered(name)?;

        let lock = self.build_lock(name);
        let _guard = lock.lock();

        let paths = BundlePaths::for_dataset(&self.data_dir, name);
        if paths.all_exist() {
            debug!(dataset = name, "bundle already persisted");
            return Ok(false);
        }

        info!(dataset = name, "artifacts missing, building index");
        self.build_bundle(name, &catalogue)?;
        Ok(true)
    }

    /// Unconditionally recompute and persist the bundle for `name`:
    /// encode every document, construct a fresh index, and write vectors,
    /// index and catalogue as one set.
    pub fn build(&self, name: &str) -> Result<()> {
        let catalogue = self.registered(name)?;

        let lock = self.build_lock(name);
        let _guard = lock.lock();

        self.build_bundle(name, &catalogue)
    }

    fn build_bundle(&self, name: &str, catalogue: &Catalogue) -> Result<()> {
        let documents = build_documents(catalogue);
        let vectors = self.encoder.encode(&documents)?;
        let index = FlatIpIndex::from_vectors(vectors)?;

        // from_vectors holds the normalized rows; persist those, not the
        // encoder output, so the stored matrix matches the index exactly.
        let vectors: Vec<Vector> = index.vectors().to_vec();

        let paths = BundlePaths::for_dataset(&self.data_dir, name);
        write_artifact(&paths.vectors, &vectors)?;
        write_artifact(&paths.index, &index)?;
        write_artifact(&paths.catalogue, catalogue)?;

        info!(
            dataset = name,
            records = catalogue.len(),
            dim = index.dim(),
            "bundle built and persisted"
        );
        Ok(())
    }

    /// Load the persisted catalogue for `name`.
    pub fn load_catalogue(&self, name: &str) -> Result<Catalogue> {
        let paths = BundlePaths::for_dataset(&self.data_dir, name);
        read_artifact(&paths.catalogue)
    }

    /// Load the persisted similarity index for `name`.
    pub fn load_index(&self, name: &str) -> Result<FlatIpIndex> {
        let paths = BundlePaths::for_dataset(&self.data_dir, name);
        read_artifact(&paths.index)
    }

    /// Load the persisted embedding matrix for `name`, row-aligned with the
    /// catalogue.
    pub fn load_vectors(&self, name: &str) -> Result<Vec<Vector>> {
        let paths = BundlePaths::for_dataset(&self.data_dir, name);
        read_artifact(&paths.vectors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelvec_core::TitleRecord;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Deterministic encoder for tests: hashes each text into a fixed-dim
    /// vector and counts how many batches it has served.
    struct StubEncoder {
        calls: AtomicUsize,
    }

    impl StubEncoder {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl TextEncoder for StubEncoder {
        fn encode(&self, texts: &[String]) -> Result<Vec<Vector>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(texts
                .iter()
                .map(|text| {
                    let mut hash = 17u64;
                    for byte in text.bytes() {
                        hash = hash.wrapping_mul(31).wrapping_add(u64::from(byte));
                    }
                    let mut vector = Vector::new(vec![
                        (hash % 97) as f32 + 1.0,
                        (hash % 89) as f32 + 1.0,
                        (hash % 83) as f32 + 1.0,
                        (hash % 79) as f32 + 1.0,
                    ]);
                    vector.normalize();
                    vector
                })
                .collect())
        }
    }

    fn sample_catalogue() -> Catalogue {
        Catalogue::from_records(vec![
            TitleRecord::new("Alpha", "Drama", "Cast A", "First plot."),
            TitleRecord::new("Beta", "Comedy", "Unknown", "Second plot."),
            TitleRecord::new("Gamma", "Sci-Fi", "Cast C", "Third plot."),
        ])
    }

    fn store_with_stub(dir: &Path) -> (IndexStore, Arc<StubEncoder>) {
        let encoder = Arc::new(StubEncoder::new());
        let store = IndexStore::new(dir, encoder.clone()).unwrap();
        (store, encoder)
    }

    #[test]
    fn test_ensure_unknown_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let (store, _) = store_with_stub(dir.path());
        let result = store.ensure("netflix");
        assert!(matches!(result, Err(Error::UnknownDataset(_))));
    }

    #[test]
    fn test_ensure_builds_then_reuses() {
        let dir = tempfile::tempdir().unwrap();
        let (store, encoder) = store_with_stub(dir.path());
        store.register("netflix", sample_catalogue());

        assert!(store.ensure("netflix").unwrap());
        assert_eq!(encoder.calls(), 1);

        // Second ensure is a no-op; no further encoding happens.
        assert!(!store.ensure("netflix").unwrap());
        assert_eq!(encoder.calls(), 1);
    }

    #[test]
    fn test_bundle_round_trip_preserves_alignment() {
        let dir = tempfile::tempdir().unwrap();
        let (store, _) = store_with_stub(dir.path());
        let catalogue = sample_catalogue();
        store.register("hulu", catalogue.clone());
        store.ensure("hulu").unwrap();

        let restored = store.load_catalogue("hulu").unwrap();
        let vectors = store.load_vectors("hulu").unwrap();
        let index = store.load_index("hulu").unwrap();

        assert_eq!(restored, catalogue);
        assert_eq!(vectors.len(), catalogue.len());
        assert_eq!(index.len(), catalogue.len());
        assert_eq!(index.vectors(), vectors.as_slice());
    }

    #[test]
    fn test_persisted_vectors_unit_norm() {
        let dir = tempfile::tempdir().unwrap();
        let (store, _) = store_with_stub(dir.path());
        store.register("disney", sample_catalogue());
        store.ensure("disney").unwrap();

        for vector in store.load_vectors("disney").unwrap() {
            assert!((vector.norm() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_partial_bundle_triggers_rebuild() {
        let dir = tempfile::tempdir().unwrap();
        let (store, encoder) = store_with_stub(dir.path());
        store.register("amazon", sample_catalogue());
        store.ensure("amazon").unwrap();

        let paths = BundlePaths::for_dataset(dir.path(), "amazon");
        std::fs::remove_file(&paths.index).unwrap();

        assert!(store.ensure("amazon").unwrap());
        assert_eq!(encoder.calls(), 2);
        assert!(paths.all_exist());
    }

    #[test]
    fn test_load_before_build_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let (store, _) = store_with_stub(dir.path());
        store.register("netflix", sample_catalogue());

        assert!(matches!(
            store.load_index("netflix"),
            Err(Error::NotFound(_))
        ));
        assert!(matches!(
            store.load_catalogue("netflix"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_build_recomputes_unconditionally() {
        let dir = tempfile::tempdir().unwrap();
        let (store, encoder) = store_with_stub(dir.path());
        store.register("all", sample_catalogue());

        store.build("all").unwrap();
        store.build("all").unwrap();
        assert_eq!(encoder.calls(), 2);
    }
}
