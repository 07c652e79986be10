//! On-disk artifact layout and serialization helpers.
//!
//! Per dataset name `<n>` the store keeps three bincode files, all
//! ordinal-aligned and always written as a set:
//!
//! - `<n>_vectors.bin` - raw embedding matrix, row-aligned with the catalogue
//! - `<n>.index` - flat inner-product index
//! - `<n>.catalogue` - structured catalogue records

use std::io::Write as _;
use std::path::{Path, PathBuf};

use atomicwrites::{AtomicFile, OverwriteBehavior::AllowOverwrite};
use serde::de::DeserializeOwned;
use serde::Serialize;

use reelvec_core::{Error, Result};

/// Paths of one dataset's persisted bundle.
#[derive(Debug, Clone)]
pub struct BundlePaths {
    pub vectors: PathBuf,
    pub index: PathBuf,
    pub catalogue: PathBuf,
}

impl BundlePaths {
    #[must_use]
    pub fn for_dataset(data_dir: &Path, name: &str) -> Self {
        Self {
            vectors: data_dir.join(format!("{name}_vectors.bin")),
            index: data_dir.join(format!("{name}.index")),
            catalogue: data_dir.join(format!("{name}.catalogue")),
        }
    }

    /// True only when every artifact of the bundle is present. A partial
    /// bundle is treated as missing so that all three regenerate together.
    #[must_use]
    pub fn all_exist(&self) -> bool {
        self.vectors.exists() && self.index.exists() && self.catalogue.exists()
    }
}

/// Serialize `value` and write it atomically: the bytes land in a temporary
/// file that is renamed over `path`, so an interrupted write leaves any
/// previous artifact untouched.
pub fn write_artifact<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let bytes =
        bincode::serialize(value).map_err(|e| Error::Serialization(e.to_string()))?;
    AtomicFile::new(path, AllowOverwrite)
        .write(|file| file.write_all(&bytes))
        .map_err(|e| Error::Storage(format!("failed to write {}: {e}", path.display())))?;
    Ok(())
}

/// Read and deserialize one artifact. A missing file is [`Error::NotFound`].
pub fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(Error::NotFound(path.display().to_string()));
    }
    let bytes = std::fs::read(path)?;
    bincode::deserialize(&bytes).map_err(|e| Error::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelvec_core::Vector;

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_vectors.bin");

        let vectors = vec![Vector::new(vec![1.0, 0.0]), Vector::new(vec![0.0, 1.0])];
        write_artifact(&path, &vectors).unwrap();

        let restored: Vec<Vector> = read_artifact(&path).unwrap();
        assert_eq!(restored, vectors);
    }

    #[test]
    fn test_read_missing_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.index");
        let result: Result<Vec<Vector>> = read_artifact(&path);
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_partial_bundle_counts_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        let paths = BundlePaths::for_dataset(dir.path(), "netflix");
        assert!(!paths.all_exist());

        write_artifact(&paths.vectors, &vec![Vector::new(vec![1.0])]).unwrap();
        write_artifact(&paths.index, &vec![Vector::new(vec![1.0])]).unwrap();
        assert!(!paths.all_exist());

        write_artifact(&paths.catalogue, &vec![Vector::new(vec![1.0])]).unwrap();
        assert!(paths.all_exist());
    }
}
