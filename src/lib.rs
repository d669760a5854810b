//! # Nearest Search
//!
//! Exact top-k nearest vector search over in-memory collections.
//!
//! This library provides:
//! - An immutable f64 `Vector` type
//! - Cosine similarity with zero-magnitude and dimension guards
//! - A bounded `TopK` accumulator for streaming (item, score) pairs
//! - Serial and rayon-sharded linear-scan search over record collections
//!
//! ## Example
//!
//! ```rust
//! use nearest_search::{search, Record, Vector};
//!
//! let records = vec![
//!     Record::new("doc-1", Vector::new(vec![1.0, 0.0])),
//!     Record::new("doc-2", Vector::new(vec![0.0, 1.0])),
//!     Record::without_vector("doc-3"),
//! ];
//!
//! let query = Vector::new(vec![1.0, 0.2]);
//! let results = search(&records, &query, 2).unwrap();
//! assert_eq!(*results[0].item, "doc-1");
//! ```

pub mod error;
pub mod search;
pub mod similarity;
pub mod topk;
pub mod vector;

pub use error::{Result, SearchError};
pub use search::{search, search_sharded, Record, DEFAULT_LIMIT};
pub use similarity::{cosine_similarity, MAGNITUDE_EPSILON};
pub use topk::{Scored, TopK};
pub use vector::Vector;
