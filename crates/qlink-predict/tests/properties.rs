//! Property-based checks for every predictor on random graphs.

use proptest::prelude::*;
use qlink_predict::prelude::*;

/// Strategy for a graph of up to 12 concepts with random, possibly
/// directed, possibly self-looping relationships.
fn arb_graph() -> impl Strategy<Value = GraphStore> {
    (0usize..12).prop_flat_map(|n| {
        let edge = (0..n.max(1), 0..n.max(1), any::<bool>());
        prop::collection::vec(edge, 0..(n * 2 + 1)).prop_map(move |edges| {
            let mut store = GraphStore::new();
            for i in 0..n {
                store.add_concept(Concept::with_id(format!("c{i:02}"), format!("C{i}"), ""));
            }
            for (s, t, directed) in edges {
                store.add_relationship(
                    Relationship::new(format!("c{s:02}"), format!("c{t:02}")).directed(directed),
                );
            }
            store
        })
    })
}

fn arb_algorithm() -> impl Strategy<Value = Algorithm> {
    prop_oneof![
        Just(Algorithm::CommonNeighbors),
        Just(Algorithm::JaccardCoefficient),
        Just(Algorithm::PreferentialAttachment),
    ]
}

proptest! {
    #[test]
    fn suggestions_are_well_formed(
        store in arb_graph(),
        algorithm in arb_algorithm(),
        k in 0usize..20,
    ) {
        let query = store.query();
        let suggestions = algorithm.predict_links(&store, k);

        prop_assert!(suggestions.len() <= k);
        for s in &suggestions {
            prop_assert_ne!(&s.source, &s.target);
            prop_assert!(!query.are_adjacent(&s.source, &s.target));
            prop_assert!((0.0..=1.0).contains(&s.confidence));
            prop_assert_eq!(&s.algorithm, algorithm.name());
        }
    }

    #[test]
    fn returned_set_is_the_top_k(
        store in arb_graph(),
        algorithm in arb_algorithm(),
        k in 1usize..10,
    ) {
        let suggestions = algorithm.predict_links(&store, k);
        let scored = algorithm.score_pairs(&store);

        prop_assert_eq!(suggestions.len(), scored.len().min(k));
        for (s, pair) in suggestions.iter().zip(&scored) {
            prop_assert_eq!(&s.source, &pair.source);
            prop_assert_eq!(&s.target, &pair.target);
        }
        if let Some(cutoff) = scored.get(k.saturating_sub(1)) {
            for excluded in scored.iter().skip(k) {
                prop_assert!(excluded.score <= cutoff.score);
            }
        }
    }

    #[test]
    fn prediction_is_repeatable(store in arb_graph(), algorithm in arb_algorithm()) {
        let first = algorithm.predict_links(&store, 10);
        let second = algorithm.predict_links(&store, 10);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn combined_respects_threshold_and_cap(
        store in arb_graph(),
        min_confidence in 0.0f64..1.0,
        max in 0usize..15,
    ) {
        let request = PredictionRequest::default()
            .with_min_confidence(min_confidence)
            .with_max_suggestions(max);
        let suggestions = predict(&store, &request);

        prop_assert!(suggestions.len() <= max);
        for s in &suggestions {
            prop_assert!(s.confidence >= min_confidence);
            prop_assert_eq!(s.algorithm.as_str(), COMBINED_ALGORITHM_NAME);
        }
        prop_assert!(suggestions.windows(2).all(|w| w[0].confidence >= w[1].confidence));
    }
}
