//! QLink Predict Prelude — convenient imports for common usage.
//!
//! ```rust
//! use qlink_predict::prelude::*;
//! ```

pub use crate::aggregate::{SuggestionAggregator, COMBINED_ALGORITHM_NAME};
pub use crate::algorithm::{Algorithm, UnknownAlgorithm};
pub use crate::pipeline::ScoredPair;
pub use crate::request::{
    predict, PredictionRequest, Selector, DEFAULT_MAX_SUGGESTIONS, DEFAULT_MIN_CONFIDENCE,
};

pub use qlink_runtime::prelude::*;
