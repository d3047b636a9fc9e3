//! # spamsieve
//!
//! A small spam/ham message classification library and service.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Deterministic text analysis pipeline (normalize, tokenize, stop words)
//! - TF-IDF feature extraction over a fixed vocabulary
//! - Multinomial Naive Bayes classification with proper posteriors
//! - Pluggable artifact storage (file or memory backends)
//! - JSON HTTP endpoint for synchronous classification

pub mod analysis;
pub mod detector;
pub mod error;
pub mod model;
pub mod server;
pub mod storage;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
