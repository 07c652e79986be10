//! # reelvec
//!
//! A multi-platform movie catalogue embedding and similarity engine.
//!
//! reelvec turns heterogeneous catalogue CSVs (Netflix, Amazon Prime, Hulu,
//! Disney+) into per-title text embeddings, indexes them for exact cosine
//! nearest-neighbor search, persists the artifacts per dataset, and serves
//! "recommend similar titles" queries with lazy index construction.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use reelvec::prelude::*;
//!
//! // Load a platform catalogue and register it.
//! let catalogue = reelvec::ingest::load_platform_csv("netflix_titles.csv").unwrap();
//!
//! let encoder = Arc::new(OllamaEncoder::new(EncoderConfig::default()).unwrap());
//! let store = Arc::new(IndexStore::new("./data", encoder).unwrap());
//! store.register("netflix", catalogue);
//!
//! // First query builds the index; later queries reuse it from disk.
//! let recommender = Recommender::new(store);
//! let hits = recommender
//!     .recommend("netflix", "dream-heist sci-fi with layered realities", 3)
//!     .unwrap();
//! for hit in hits {
//!     println!("{:.3}  {}", hit.score, hit.title());
//! }
//! ```
//!
//! ## Crate Structure
//!
//! - `reelvec-core` - catalogue records, document corpus, flat inner-product index
//! - `reelvec-encoder` - blocking client for the external embedding service
//! - `reelvec-storage` - lazily built, atomically persisted dataset bundles
//! - `reelvec-recommend` - the query surface composing the pieces above

pub mod ingest;

// Re-export core types
pub use reelvec_core::{
    build_documents, Catalogue, Error, FlatIpIndex, Result, TextEncoder, TitleRecord, Vector,
};

// Re-export the encoder
pub use reelvec_encoder::{EncoderConfig, OllamaEncoder};

// Re-export storage
pub use reelvec_storage::IndexStore;

// Re-export the recommendation service
pub use reelvec_recommend::{Recommendation, Recommender};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        build_documents, Catalogue, EncoderConfig, Error, FlatIpIndex, IndexStore, OllamaEncoder,
        Recommendation, Recommender, Result, TextEncoder, TitleRecord, Vector,
    };
}
