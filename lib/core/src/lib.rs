//! # reelvec Core
//!
//! Core library for the reelvec recommendation engine.
//!
//! This crate provides the fundamental data structures and algorithms:
//!
//! - [`Vector`] - Dense embedding vector with normalization and inner product
//! - [`TitleRecord`] / [`Catalogue`] - Ordered catalogue of movie metadata
//! - [`build_documents`] - Canonical document corpus derived from a catalogue
//! - [`FlatIpIndex`] - Exact inner-product (cosine) nearest-neighbor index
//! - [`TextEncoder`] - Trait boundary for the external embedding service
//!
//! ## Example
//!
//! ```rust
//! use reelvec_core::{Catalogue, TitleRecord, FlatIpIndex, Vector, build_documents};
//!
//! let catalogue = Catalogue::from_records(vec![
//!     TitleRecord::new("Inception", "Sci-Fi", "Leonardo DiCaprio", "A dream heist."),
//!     TitleRecord::new("Paprika", "Animation", "Megumi Hayashibara", "Dreams leak into reality."),
//! ]);
//!
//! let documents = build_documents(&catalogue);
//! assert_eq!(documents.len(), catalogue.len());
//!
//! // Vectors normally come from a TextEncoder; here they are hand-rolled.
//! let index = FlatIpIndex::from_vectors(vec![
//!     Vector::new(vec![1.0, 0.0]),
//!     Vector::new(vec![0.0, 1.0]),
//! ]).unwrap();
//!
//! let hits = index.search(&Vector::new(vec![1.0, 0.0]), 1).unwrap();
//! assert_eq!(hits[0].0, 0);
//! ```

pub mod catalogue;
pub mod corpus;
pub mod encoder;
pub mod error;
pub mod index;
pub mod vector;

pub use catalogue::{Catalogue, TitleRecord};
pub use corpus::build_documents;
pub use encoder::TextEncoder;
pub use error::{Error, Result};
pub use index::FlatIpIndex;
pub use vector::Vector;
