//! The closed set of link prediction algorithms.
//!
//! Each variant shares the same contract: rank unconnected concept pairs
//! by a raw score, keep the best `max_suggestions`, and turn each raw
//! score into a confidence in `[0, 1]` plus a human-readable explanation.

use crate::pipeline::{self, ScoredPair};
use crate::{common_neighbors, jaccard, preferential};
use qlink_core::topology::ConceptGraph;
use qlink_core::types::{ConceptId, LinkSuggestion};
use qlink_runtime::query::AdjacencyIndex;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A selector string that names no known algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown prediction algorithm: {0} (expected common_neighbors, jaccard, preferential or combined)")]
pub struct UnknownAlgorithm(pub String);

/// A link prediction algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    CommonNeighbors,
    JaccardCoefficient,
    PreferentialAttachment,
}

impl Algorithm {
    const ALL: [Algorithm; 3] = [
        Algorithm::CommonNeighbors,
        Algorithm::JaccardCoefficient,
        Algorithm::PreferentialAttachment,
    ];

    /// Every algorithm, in the order the combined predictor runs them.
    pub fn all() -> &'static [Algorithm] {
        &Self::ALL
    }

    /// Display name, also recorded on every suggestion this algorithm makes.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CommonNeighbors => common_neighbors::NAME,
            Self::JaccardCoefficient => jaccard::NAME,
            Self::PreferentialAttachment => preferential::NAME,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::CommonNeighbors => common_neighbors::DESCRIPTION,
            Self::JaccardCoefficient => jaccard::DESCRIPTION,
            Self::PreferentialAttachment => preferential::DESCRIPTION,
        }
    }

    /// Short machine name accepted by [`FromStr`].
    pub fn selector(&self) -> &'static str {
        match self {
            Self::CommonNeighbors => "common_neighbors",
            Self::JaccardCoefficient => "jaccard",
            Self::PreferentialAttachment => "preferential",
        }
    }

    /// Suggest up to `max_suggestions` links between concepts that are not
    /// yet connected, best first.
    pub fn predict_links<G: ConceptGraph + ?Sized>(
        &self,
        graph: &G,
        max_suggestions: usize,
    ) -> Vec<LinkSuggestion> {
        pipeline::rank(*self, graph, max_suggestions)
    }

    /// Every candidate pair with a positive raw score, best first.
    pub fn score_pairs<G: ConceptGraph + ?Sized>(&self, graph: &G) -> Vec<ScoredPair> {
        pipeline::score_pairs(*self, graph)
    }

    pub(crate) fn raw_score(&self, index: &AdjacencyIndex<'_>, a: &ConceptId, b: &ConceptId) -> f64 {
        match self {
            Self::CommonNeighbors => common_neighbors::score(index, a, b),
            Self::JaccardCoefficient => jaccard::score(index, a, b),
            Self::PreferentialAttachment => preferential::score(index, a, b),
        }
    }

    pub(crate) fn confidence(&self, raw: f64) -> f64 {
        match self {
            Self::CommonNeighbors => common_neighbors::confidence(raw),
            Self::JaccardCoefficient => jaccard::confidence(raw),
            Self::PreferentialAttachment => preferential::confidence(raw),
        }
    }

    pub(crate) fn explain(&self, raw: f64) -> String {
        match self {
            Self::CommonNeighbors => common_neighbors::explain(raw),
            Self::JaccardCoefficient => jaccard::explain(raw),
            Self::PreferentialAttachment => preferential::explain(raw),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Accepts the selector, the snake_case variant name, or the display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "common_neighbors" | "cn" => Ok(Self::CommonNeighbors),
            "jaccard" | "jaccard_coefficient" => Ok(Self::JaccardCoefficient),
            "preferential" | "preferential_attachment" | "pa" => Ok(Self::PreferentialAttachment),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}
