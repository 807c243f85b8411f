//! Jaccard Coefficient: shared neighbors relative to all neighbors.
//!
//! Raw score: `|N(a) ∩ N(b)| / |N(a) ∪ N(b)|` over distinct neighbor sets,
//! zero when both sets are empty. The score is already a confidence.

use qlink_core::types::ConceptId;
use qlink_runtime::query::AdjacencyIndex;

pub const NAME: &str = "Jaccard Coefficient";
pub const DESCRIPTION: &str =
    "Predicts links using the Jaccard coefficient: |intersection| / |union| of neighbor sets";

pub fn score(index: &AdjacencyIndex<'_>, a: &ConceptId, b: &ConceptId) -> f64 {
    let union = index.union_size(a, b);
    if union == 0 {
        return 0.0;
    }
    index.common_neighbors(a, b) as f64 / union as f64
}

pub fn confidence(raw: f64) -> f64 {
    raw.clamp(0.0, 1.0)
}

pub fn explain(raw: f64) -> String {
    format!(
        "Jaccard coefficient {:.3}: {:.0}% of their combined neighbors are shared",
        raw,
        raw * 100.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use qlink_core::types::{Concept, Relationship};
    use qlink_runtime::store::GraphStore;

    #[test]
    fn half_overlap() {
        // a: {x, y}, b: {x}  ->  1 / 2
        let mut store = GraphStore::new();
        for id in ["a", "b", "x", "y"] {
            store.add_concept(Concept::with_id(id, id, ""));
        }
        store.add_relationship(Relationship::new("a", "x"));
        store.add_relationship(Relationship::new("a", "y"));
        store.add_relationship(Relationship::new("b", "x"));
        let index = store.query().adjacency();

        assert!((score(&index, &"a".into(), &"b".into()) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_neighborhoods_score_zero() {
        let index = AdjacencyIndex::default();
        assert_eq!(score(&index, &"a".into(), &"b".into()), 0.0);
    }

    #[test]
    fn explanation_embeds_score() {
        assert!(explain(0.25).starts_with("Jaccard coefficient 0.250"));
    }
}
