//! Common Neighbors: concepts that share many neighbors probably belong together.
//!
//! Raw score: the number of distinct concepts adjacent to both endpoints.
//! Confidence saturates at [`SATURATION`] shared neighbors.

use qlink_core::types::ConceptId;
use qlink_runtime::query::AdjacencyIndex;

pub const NAME: &str = "Common Neighbors";
pub const DESCRIPTION: &str =
    "Predicts links based on the number of common neighbors between concepts";

/// Shared-neighbor count at which confidence reaches 1.0.
pub const SATURATION: f64 = 5.0;

pub fn score(index: &AdjacencyIndex<'_>, a: &ConceptId, b: &ConceptId) -> f64 {
    index.common_neighbors(a, b) as f64
}

pub fn confidence(raw: f64) -> f64 {
    (raw / SATURATION).clamp(0.0, 1.0)
}

pub fn explain(raw: f64) -> String {
    format!("Has {} common neighbor(s)", raw as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_saturates_at_five() {
        assert!((confidence(1.0) - 0.2).abs() < f64::EPSILON);
        assert_eq!(confidence(5.0), 1.0);
        assert_eq!(confidence(12.0), 1.0);
    }

    #[test]
    fn explanation_embeds_count() {
        assert_eq!(explain(3.0), "Has 3 common neighbor(s)");
    }
}
