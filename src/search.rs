//! Linear-scan nearest-neighbor search over a record collection

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};
use crate::similarity::cosine_similarity;
use crate::topk::{Scored, TopK};
use crate::vector::Vector;

/// Default number of results returned by a search.
pub const DEFAULT_LIMIT: usize = 50;

/// A collection item: an opaque payload with an optional embedding.
///
/// Records without a vector are silently skipped during search; real
/// collections often contain entries that have not been embedded yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record<T> {
    payload: T,
    vector: Option<Vector>,
}

impl<T> Record<T> {
    /// Create a record with an embedding.
    pub fn new(payload: T, vector: Vector) -> Self {
        Self {
            payload,
            vector: Some(vector),
        }
    }

    /// Create a record that has no embedding yet.
    pub fn without_vector(payload: T) -> Self {
        Self {
            payload,
            vector: None,
        }
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn vector(&self) -> Option<&Vector> {
        self.vector.as_ref()
    }
}

fn validate(query: &Vector, limit: usize) -> Result<()> {
    if limit == 0 {
        return Err(SearchError::InvalidArgument {
            reason: "limit must be a positive integer".to_string(),
        });
    }
    if query.dimension() == 0 {
        return Err(SearchError::InvalidQuery {
            reason: "query vector is empty".to_string(),
        });
    }
    if !query.is_finite() {
        return Err(SearchError::InvalidQuery {
            reason: "query vector contains non-finite components".to_string(),
        });
    }
    Ok(())
}

fn scan<'a, T>(
    records: impl IntoIterator<Item = &'a Record<T>>,
    query: &Vector,
    limit: usize,
) -> Result<TopK<&'a T>> {
    let mut acc = TopK::new(limit);
    for record in records {
        let vector = match record.vector() {
            Some(v) => v,
            None => continue,
        };
        let score = cosine_similarity(query, vector)?;
        acc.offer(record.payload(), score);
    }
    Ok(acc)
}

/// Search `records` for the `limit` payloads most similar to `query`.
///
/// Performs a single read-only linear scan; the collection is never
/// mutated. Returns results sorted by descending cosine similarity,
/// at most `limit` of them. A record with a vector of the wrong
/// dimension aborts the search with `DimensionMismatch`: a malformed
/// dataset entry is a data-integrity problem the caller should see.
pub fn search<'a, T, I>(records: I, query: &Vector, limit: usize) -> Result<Vec<Scored<&'a T>>>
where
    I: IntoIterator<Item = &'a Record<T>>,
{
    validate(query, limit)?;
    Ok(scan(records, query, limit)?.drain())
}

/// Parallel variant of [`search`]: splits `records` into disjoint shards,
/// scans each with a private accumulator on the rayon pool, then merges
/// the per-shard top-k lists through one final accumulator so the merge
/// applies the same strict tie-break rule as the scans.
///
/// The result set matches [`search`] for the same input, though entries
/// with equal scores may rank in a different relative order.
pub fn search_sharded<'a, T: Sync>(
    records: &'a [Record<T>],
    query: &Vector,
    limit: usize,
) -> Result<Vec<Scored<&'a T>>> {
    validate(query, limit)?;
    if records.is_empty() {
        return Ok(Vec::new());
    }

    let threads = rayon::current_num_threads().max(1);
    let shard_size = (records.len() + threads - 1) / threads;

    let shards: Vec<TopK<&T>> = records
        .par_chunks(shard_size)
        .map(|chunk| scan(chunk, query, limit))
        .collect::<Result<Vec<_>>>()?;

    let mut merged = TopK::new(limit);
    for shard in shards {
        for entry in shard.drain() {
            merged.offer(entry.item, entry.score);
        }
    }
    Ok(merged.drain())
}
