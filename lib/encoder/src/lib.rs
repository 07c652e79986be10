//! # reelvec Encoder
//!
//! Blocking client for the external embedding service. Speaks the Ollama
//! `/api/embeddings` wire shape: one prompt per request, fixed-length float
//! vector per response. Every row of the returned matrix is L2-normalized so
//! that inner product equals cosine similarity downstream.
//!
//! Requests are sequential per text. Each call is a remote service request;
//! there is no caching at this layer.

pub mod ollama;

pub use ollama::{EncoderConfig, OllamaEncoder};
