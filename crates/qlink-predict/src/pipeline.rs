//! Shared candidate ranking for every algorithm.
//!
//! Candidates are all pairs `(i, j)` with `i < j` over the distinct concept
//! ids in insertion order (a repeated id from a bulk load counts once) that
//! are not joined by a relationship in either direction. Pairs scoring `<= 0` are dropped. The rest are sorted by raw
//! score, descending, with a stable sort so equal scores keep discovery order.

use crate::algorithm::Algorithm;
use qlink_core::topology::ConceptGraph;
use qlink_core::types::{relationship_types, Concept, ConceptId, LinkSuggestion};
use qlink_runtime::query::AdjacencyIndex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::debug;

/// A candidate pair with its raw, unnormalized score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPair {
    pub source: ConceptId,
    pub target: ConceptId,
    pub score: f64,
}

struct Candidate<'g> {
    source: &'g ConceptId,
    target: &'g ConceptId,
    raw: f64,
}

fn candidates<'g, G: ConceptGraph + ?Sized>(
    algorithm: Algorithm,
    graph: &'g G,
    index: &AdjacencyIndex<'g>,
) -> Vec<Candidate<'g>> {
    let mut seen = HashSet::new();
    let ids: Vec<&'g ConceptId> = graph
        .concepts()
        .iter()
        .map(Concept::id)
        .filter(|id| seen.insert(*id))
        .collect();

    let mut out = Vec::new();
    for (i, &source) in ids.iter().enumerate() {
        for &target in &ids[i + 1..] {
            if index.is_linked(source, target) {
                continue;
            }
            let raw = algorithm.raw_score(index, source, target);
            if raw > 0.0 {
                out.push(Candidate { source, target, raw });
            }
        }
    }
    out.sort_by(|x, y| y.raw.partial_cmp(&x.raw).unwrap_or(Ordering::Equal));
    out
}

pub(crate) fn score_pairs<G: ConceptGraph + ?Sized>(algorithm: Algorithm, graph: &G) -> Vec<ScoredPair> {
    let index = AdjacencyIndex::build(graph);
    candidates(algorithm, graph, &index)
        .into_iter()
        .map(|c| ScoredPair {
            source: c.source.clone(),
            target: c.target.clone(),
            score: c.raw,
        })
        .collect()
}

pub(crate) fn rank<G: ConceptGraph + ?Sized>(
    algorithm: Algorithm,
    graph: &G,
    max_suggestions: usize,
) -> Vec<LinkSuggestion> {
    if max_suggestions == 0 || graph.concept_count() < 2 {
        return Vec::new();
    }

    let index = AdjacencyIndex::build(graph);
    let ranked = candidates(algorithm, graph, &index);
    let total = ranked.len();

    let suggestions: Vec<LinkSuggestion> = ranked
        .into_iter()
        .take(max_suggestions)
        .map(|c| {
            LinkSuggestion::new(
                c.source.clone(),
                c.target.clone(),
                relationship_types::RELATES_TO,
                algorithm.confidence(c.raw),
                algorithm.explain(c.raw),
                algorithm.name(),
            )
        })
        .collect();

    debug!(
        algorithm = algorithm.name(),
        candidates = total,
        returned = suggestions.len(),
        "link prediction finished"
    );
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use qlink_core::types::{Concept, Relationship};
    use qlink_runtime::store::GraphStore;

    fn path_graph() -> GraphStore {
        // a - b - c - d
        let mut store = GraphStore::new();
        for id in ["a", "b", "c", "d"] {
            store.add_concept(Concept::with_id(id, id.to_uppercase(), ""));
        }
        store.add_relationship(Relationship::new("a", "b"));
        store.add_relationship(Relationship::new("b", "c"));
        store.add_relationship(Relationship::new("c", "d"));
        store
    }

    #[test]
    fn connected_pairs_are_never_candidates() {
        let store = path_graph();
        let pairs = Algorithm::PreferentialAttachment.score_pairs(&store);
        // 6 pairs total, 3 already linked.
        assert_eq!(pairs.len(), 3);
        for pair in &pairs {
            assert!(!store.query().are_adjacent(&pair.source, &pair.target));
        }
    }

    #[test]
    fn directed_relationship_blocks_both_orientations() {
        let mut store = GraphStore::new();
        store.add_concept(Concept::with_id("a", "A", ""));
        store.add_concept(Concept::with_id("b", "B", ""));
        store.add_relationship(Relationship::new("b", "a").directed(true));
        assert!(Algorithm::PreferentialAttachment.predict_links(&store, 10).is_empty());
    }

    #[test]
    fn ties_keep_discovery_order() {
        let mut store = GraphStore::new();
        for id in ["a", "b", "c"] {
            store.add_concept(Concept::with_id(id, id, ""));
        }
        let suggestions = Algorithm::PreferentialAttachment.predict_links(&store, 10);
        let pairs: Vec<(&str, &str)> = suggestions
            .iter()
            .map(|s| (s.source.as_str(), s.target.as_str()))
            .collect();
        assert_eq!(pairs, vec![("a", "b"), ("a", "c"), ("b", "c")]);
    }

    #[test]
    fn repeated_ids_from_bulk_load_are_scored_once() {
        let store = GraphStore::from_parts(
            "imported",
            vec![
                Concept::with_id("a", "A", ""),
                Concept::with_id("a", "A again", ""),
                Concept::with_id("b", "B", ""),
                Concept::with_id("x", "X", ""),
            ],
            vec![Relationship::new("a", "a"), Relationship::new("b", "x")],
        );

        let suggestions = Algorithm::PreferentialAttachment.predict_links(&store, 10);
        let pairs: Vec<(&str, &str)> = suggestions
            .iter()
            .map(|s| (s.source.as_str(), s.target.as_str()))
            .collect();
        assert_eq!(pairs, vec![("a", "b"), ("a", "x")]);
        assert!(suggestions.iter().all(|s| (s.confidence - 0.04).abs() < 1e-9));
        assert_eq!(Algorithm::PreferentialAttachment.score_pairs(&store).len(), 2);
    }

    #[test]
    fn zero_scores_are_dropped() {
        let store = path_graph();
        // a-c and b-d share a neighbor; a-d shares none.
        let pairs = Algorithm::CommonNeighbors.score_pairs(&store);
        assert_eq!(pairs.len(), 2);
        assert!(pairs.iter().all(|p| p.score == 1.0));
    }

    #[test]
    fn zero_max_or_tiny_graph_yields_nothing() {
        let store = path_graph();
        assert!(Algorithm::PreferentialAttachment.predict_links(&store, 0).is_empty());

        let mut single = GraphStore::new();
        single.add_concept(Concept::with_id("a", "A", ""));
        assert!(Algorithm::PreferentialAttachment.predict_links(&single, 10).is_empty());
    }

    #[test]
    fn suggestions_carry_algorithm_metadata() {
        let store = path_graph();
        let suggestions = Algorithm::CommonNeighbors.predict_links(&store, 1);
        assert_eq!(suggestions.len(), 1);
        let s = &suggestions[0];
        assert_eq!(s.algorithm, "Common Neighbors");
        assert_eq!(s.suggested_type, relationship_types::RELATES_TO);
        assert_eq!(s.explanation, "Has 1 common neighbor(s)");
        assert!((s.confidence - 0.2).abs() < 1e-9);
    }
}
