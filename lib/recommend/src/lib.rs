//! # reelvec Recommend
//!
//! The query surface of reelvec. A [`Recommender`] composes the text encoder,
//! the index store and the similarity search into the two entry points a
//! front end needs: [`Recommender::ensure_index`] and
//! [`Recommender::recommend`].

use std::sync::Arc;

use tracing::{debug, info};

use reelvec_core::{Error, Result, TextEncoder as _, TitleRecord};
use reelvec_storage::IndexStore;

/// One recommended title with its similarity score and full metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// Position of the record within its catalogue.
    pub ordinal: usize,
    /// Cosine similarity to the query, in [-1, 1].
    pub score: f32,
    pub record: TitleRecord,
}

impl Recommendation {
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.record.title
    }
}

/// Recommendation service over an [`IndexStore`].
pub struct Recommender {
    store: Arc<IndexStore>,
}

impl Recommender {
    #[must_use]
    pub fn new(store: Arc<IndexStore>) -> Self {
        Self { store }
    }

    #[inline]
    #[must_use]
    pub fn store(&self) -> &Arc<IndexStore> {
        &self.store
    }

    /// Make sure the dataset's bundle is built and persisted. Returns `true`
    /// when a build was performed, so callers can surface the slow first-use
    /// path instead of presenting it as silent latency.
    pub fn ensure_index(&self, name: &str) -> Result<bool> {
        self.store.ensure(name)
    }

    /// Return the `k` titles most similar to `query` within dataset `name`.
    ///
    /// When `query` exactly matches a catalogue title, the search uses that
    /// record's full canonical document rather than the bare title, and the
    /// record itself is excluded from the results. Free text is embedded
    /// as-is. The first use of a dataset triggers a full index build.
    pub fn recommend(&self, name: &str, query: &str, k: usize) -> Result<Vec<Recommendation>> {
        assert!(k > 0, "k must be a positive integer");

        let query = query.trim();
        if query.is_empty() {
            return Err(Error::EmptySelection);
        }

        if self.store.ensure(name)? {
            info!(dataset = name, "index built on first use");
        }

        let catalogue = self.store.load_catalogue(name)?;

        // Selecting an existing title searches with its enriched document.
        let selected = catalogue.find_by_title(query);
        let query_text = match selected {
            Some(ordinal) => {
                debug!(dataset = name, ordinal, "query resolved to catalogue record");
                catalogue
                    .get(ordinal)
                    .map(TitleRecord::document)
                    .unwrap_or_else(|| query.to_string())
            }
            None => query.to_string(),
        };

        let query_vector = self.store.encoder().encode_one(&query_text)?;
        let index = self.store.load_index(name)?;

        // Over-fetch by one so a self-match can be dropped without
        // shortening the result list.
        let hits = index.search(&query_vector, k + 1)?;

        let results: Vec<Recommendation> = hits
            .into_iter()
            .filter(|(ordinal, _)| match selected {
                Some(own) => *ordinal != own,
                None => catalogue.get(*ordinal).map_or(true, |r| r.title != query),
            })
            .take(k)
            .filter_map(|(ordinal, score)| {
                catalogue.get(ordinal).map(|record| Recommendation {
                    ordinal,
                    score,
                    record: record.clone(),
                })
            })
            .collect();

        Ok(results)
    }
}
