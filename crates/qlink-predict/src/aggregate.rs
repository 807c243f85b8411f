//! Combined prediction over several algorithms.
//!
//! Suggestions for the same unordered pair are folded into one whose
//! confidence is the mean of the contributing confidences. Merged
//! suggestions below the threshold are discarded.

use crate::algorithm::Algorithm;
use qlink_core::topology::ConceptGraph;
use qlink_core::types::{relationship_types, ConceptId, LinkSuggestion};
use std::collections::HashMap;
use tracing::debug;

/// Algorithm label on merged suggestions.
pub const COMBINED_ALGORITHM_NAME: &str = "Combined Algorithms";

struct Merged {
    source: ConceptId,
    target: ConceptId,
    confidence_sum: f64,
    contributions: usize,
    explanation: String,
}

/// Runs a set of algorithms and merges their suggestions per concept pair.
#[derive(Debug, Clone)]
pub struct SuggestionAggregator {
    algorithms: Vec<Algorithm>,
    min_confidence: f64,
}

impl Default for SuggestionAggregator {
    fn default() -> Self {
        Self::all()
    }
}

impl SuggestionAggregator {
    pub fn new(algorithms: impl IntoIterator<Item = Algorithm>) -> Self {
        Self {
            algorithms: algorithms.into_iter().collect(),
            min_confidence: 0.0,
        }
    }

    /// Aggregate every known algorithm.
    pub fn all() -> Self {
        Self::new(Algorithm::all().iter().copied())
    }

    /// Drop merged suggestions whose mean confidence is below `threshold`.
    pub fn with_min_confidence(mut self, threshold: f64) -> Self {
        self.min_confidence = threshold;
        self
    }

    pub fn algorithms(&self) -> &[Algorithm] {
        &self.algorithms
    }

    pub fn min_confidence(&self) -> f64 {
        self.min_confidence
    }

    /// Run each algorithm with `max_per_algorithm` and merge the results.
    pub fn aggregate<G: ConceptGraph + ?Sized>(
        &self,
        graph: &G,
        max_per_algorithm: usize,
    ) -> Vec<LinkSuggestion> {
        let batches = self
            .algorithms
            .iter()
            .map(|algorithm| algorithm.predict_links(graph, max_per_algorithm));
        self.merge(batches)
    }

    /// Merge already-computed batches of suggestions.
    ///
    /// Output is sorted by confidence, descending; equal confidences are
    /// ordered by pair key so the result does not depend on batch order.
    pub fn merge<I>(&self, batches: I) -> Vec<LinkSuggestion>
    where
        I: IntoIterator<Item = Vec<LinkSuggestion>>,
    {
        let mut slots: HashMap<(ConceptId, ConceptId), usize> = HashMap::new();
        let mut merged: Vec<Merged> = Vec::new();
        let mut input = 0usize;

        for suggestion in batches.into_iter().flatten() {
            input += 1;
            let line = format!("- {}: {}\n", suggestion.algorithm, suggestion.explanation);
            let key = suggestion.pair_key();
            match slots.get(&key) {
                Some(&slot) => {
                    let entry = &mut merged[slot];
                    entry.confidence_sum += suggestion.confidence;
                    entry.contributions += 1;
                    entry.explanation.push_str(&line);
                }
                None => {
                    slots.insert(key, merged.len());
                    merged.push(Merged {
                        source: suggestion.source,
                        target: suggestion.target,
                        confidence_sum: suggestion.confidence,
                        contributions: 1,
                        explanation: format!(
                            "Combined prediction from multiple algorithms:\n{line}"
                        ),
                    });
                }
            }
        }

        let mut out: Vec<LinkSuggestion> = merged
            .into_iter()
            .map(|m| {
                LinkSuggestion::new(
                    m.source,
                    m.target,
                    relationship_types::PREDICTED_RELATIONSHIP,
                    m.confidence_sum / m.contributions as f64,
                    m.explanation,
                    COMBINED_ALGORITHM_NAME,
                )
            })
            .filter(|s| s.confidence >= self.min_confidence)
            .collect();

        out.sort_by(|a, b| {
            b.confidence
                .total_cmp(&a.confidence)
                .then_with(|| a.pair_key().cmp(&b.pair_key()))
        });

        debug!(
            input,
            merged = slots.len(),
            kept = out.len(),
            min_confidence = self.min_confidence,
            "suggestions aggregated"
        );
        out
    }
}
