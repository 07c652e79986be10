//! # reelvec Storage
//!
//! Persistence layer for reelvec. An [`IndexStore`] maps registered dataset
//! names to their persisted bundle of artifacts (embedding vectors, flat
//! inner-product index, catalogue metadata) and rebuilds a bundle lazily on
//! first use.

pub mod artifacts;
pub mod store;

pub use store::IndexStore;
