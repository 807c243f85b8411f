//! Preferential Attachment: well-connected concepts attract new links.
//!
//! Raw score: `(degree(a) + 1) * (degree(b) + 1)`. The `+ 1` keeps isolated
//! concepts in the ranking. Confidence is the raw score over
//! [`NORMALIZATION`], capped at 1.0, so hub pairs saturate.

use qlink_core::types::ConceptId;
use qlink_runtime::query::AdjacencyIndex;

pub const NAME: &str = "Preferential Attachment";
pub const DESCRIPTION: &str =
    "Predicts links from node degrees: score = (degree(u) + 1) x (degree(v) + 1)";

/// Raw score at which confidence reaches 1.0.
pub const NORMALIZATION: f64 = 100.0;

pub fn score(index: &AdjacencyIndex<'_>, a: &ConceptId, b: &ConceptId) -> f64 {
    ((index.degree(a) + 1) * (index.degree(b) + 1)) as f64
}

pub fn confidence(raw: f64) -> f64 {
    (raw / NORMALIZATION).clamp(0.0, 1.0)
}

pub fn explain(raw: f64) -> String {
    format!("Preferential attachment score {} from the product of (degree + 1)", raw as u64)
}
