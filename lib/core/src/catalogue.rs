use serde::{Deserialize, Serialize};

/// Cast value recorded when the source catalogue has no cast information.
pub const UNKNOWN_CAST: &str = "Unknown";

/// One movie or show from a platform catalogue.
///
/// Fields missing in the source data are empty strings, except `cast`,
/// which ingestion normalizes to [`UNKNOWN_CAST`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleRecord {
    pub title: String,
    pub genre: String,
    pub cast: String,
    pub plot: String,
}

impl TitleRecord {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        genre: impl Into<String>,
        cast: impl Into<String>,
        plot: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            genre: genre.into(),
            cast: cast.into(),
            plot: plot.into(),
        }
    }

    /// Canonical descriptive document for this record.
    ///
    /// Deterministic for a given record so re-embedding is reproducible.
    #[must_use]
    pub fn document(&self) -> String {
        format!(
            "{} | {} | Cast: {} | {}",
            self.title, self.genre, self.cast, self.plot
        )
    }
}

/// An ordered catalogue of title records.
///
/// A record's zero-based position (its ordinal) is the alignment key between
/// metadata, embedding vectors and index entries. The catalogue is always
/// serialized as structured records, never as joined strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalogue {
    records: Vec<TitleRecord>,
}

impl Catalogue {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn from_records(records: Vec<TitleRecord>) -> Self {
        Self { records }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn push(&mut self, record: TitleRecord) {
        self.records.push(record);
    }

    /// Append all records of `other`, preserving their relative order.
    /// Used to assemble the combined "all" catalogue from per-platform ones.
    pub fn extend_from(&mut self, other: &Catalogue) {
        self.records.extend(other.records.iter().cloned());
    }

    #[inline]
    #[must_use]
    pub fn get(&self, ordinal: usize) -> Option<&TitleRecord> {
        self.records.get(ordinal)
    }

    #[inline]
    #[must_use]
    pub fn records(&self) -> &[TitleRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TitleRecord> {
        self.records.iter()
    }

    /// Ordinal of the first record whose title matches `title` exactly.
    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Option<usize> {
        self.records.iter().position(|r| r.title == title)
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type Item = &'a TitleRecord;
    type IntoIter = std::slice::Iter<'a, TitleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
