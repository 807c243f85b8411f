//! Prediction requests: which algorithm to run and how to filter it.

use crate::aggregate::SuggestionAggregator;
use crate::algorithm::{Algorithm, UnknownAlgorithm};
use qlink_core::topology::ConceptGraph;
use qlink_core::types::LinkSuggestion;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.5;
pub const DEFAULT_MAX_SUGGESTIONS: usize = 10;

/// Which predictor a request runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selector {
    Single(Algorithm),
    #[default]
    Combined,
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(algorithm) => f.write_str(algorithm.selector()),
            Self::Combined => f.write_str("combined"),
        }
    }
}

impl FromStr for Selector {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "combined" | "all" => Ok(Self::Combined),
            _ => s.parse().map(Self::Single),
        }
    }
}

impl From<Algorithm> for Selector {
    fn from(algorithm: Algorithm) -> Self {
        Self::Single(algorithm)
    }
}

/// A prediction request: selector, confidence threshold and result cap.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRequest {
    pub selector: Selector,
    /// Inclusive lower bound on returned confidences.
    pub min_confidence: f64,
    pub max_suggestions: usize,
}

impl Default for PredictionRequest {
    fn default() -> Self {
        Self {
            selector: Selector::Combined,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

impl PredictionRequest {
    pub fn new(selector: impl Into<Selector>) -> Self {
        Self {
            selector: selector.into(),
            ..Self::default()
        }
    }

    pub fn with_min_confidence(mut self, threshold: f64) -> Self {
        self.min_confidence = threshold;
        self
    }

    pub fn with_max_suggestions(mut self, max: usize) -> Self {
        self.max_suggestions = max;
        self
    }

    /// Run the request against a graph.
    ///
    /// A single algorithm ranks its top `max_suggestions` and then drops
    /// those below the threshold. The combined selector merges each
    /// algorithm's top `max_suggestions`, filters, and truncates the merged
    /// list back to `max_suggestions`.
    pub fn run<G: ConceptGraph + ?Sized>(&self, graph: &G) -> Vec<LinkSuggestion> {
        match self.selector {
            Selector::Single(algorithm) => {
                let mut suggestions = algorithm.predict_links(graph, self.max_suggestions);
                suggestions.retain(|s| s.confidence >= self.min_confidence);
                suggestions
            }
            Selector::Combined => {
                let mut suggestions = SuggestionAggregator::all()
                    .with_min_confidence(self.min_confidence)
                    .aggregate(graph, self.max_suggestions);
                suggestions.truncate(self.max_suggestions);
                suggestions
            }
        }
    }
}

/// Run `request` against `graph`.
pub fn predict<G: ConceptGraph + ?Sized>(graph: &G, request: &PredictionRequest) -> Vec<LinkSuggestion> {
    request.run(graph)
}
