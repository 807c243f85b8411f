//! Store scenarios
//!
//! End-to-end behavior of the store through its public API:
//! 1. Removing a concept cascades to every relationship touching it
//! 2. Empty and singleton graphs answer every query without dividing by zero
//! 3. Observers see exactly the mutations that succeeded

use qlink_runtime::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

fn concept(store: &mut GraphStore, name: &str) -> ConceptId {
    let c = Concept::new(name, "");
    let id = c.id().clone();
    assert!(store.add_concept(c));
    id
}

#[test]
fn removing_a_concept_cascades_to_its_relationships() {
    let mut store = GraphStore::new();
    let x = concept(&mut store, "X");
    let a = concept(&mut store, "A");
    let b = concept(&mut store, "B");
    let c = concept(&mut store, "C");

    store.add_relationship(Relationship::new(x.clone(), a.clone()));
    store.add_relationship(Relationship::new(b.clone(), x.clone()).directed(true));
    store.add_relationship(Relationship::new(x.clone(), c.clone()).with_type("causes"));
    store.add_relationship(Relationship::new(a.clone(), b.clone()));
    let before = store.relationship_count();
    assert_eq!(before, 4);

    let removed = store.remove_concept(&x).expect("X exists");
    assert_eq!(removed.name(), "X");

    assert_eq!(store.relationship_count(), before - 3);
    assert!(store.relationships().iter().all(|rel| !rel.touches(&x)));
    assert!(store.concept(&x).is_none());
    assert!(store.query().is_valid());
    assert!(store.query().are_connected(&a, &b));
}

#[test]
fn empty_graph_queries_are_well_defined() {
    let store = GraphStore::new();
    let q = store.query();

    assert!(q.orphaned_concepts().is_empty());
    let stats = q.statistics();
    assert_eq!(stats.concept_count, 0);
    assert_eq!(stats.relationship_count, 0);
    assert_eq!(stats.orphaned_concept_count, 0);
    assert_eq!(stats.average_connections, 0.0);
    assert_eq!(stats.min_connections, 0);
    assert_eq!(stats.max_connections, 0);
    assert!(q.is_valid());
    assert!(store.is_empty());
}

#[test]
fn singleton_graph_queries_are_well_defined() {
    let mut store = GraphStore::new();
    let only = concept(&mut store, "Only");
    let q = store.query();

    assert_eq!(q.orphaned_concepts().len(), 1);
    let stats = q.statistics();
    assert_eq!(stats.concept_count, 1);
    assert_eq!(stats.orphaned_concept_count, 1);
    assert_eq!(stats.average_connections, 0.0);
    assert_eq!(stats.min_connections, 0);
    assert_eq!(q.importance(&only), 0.0);
    assert_eq!(q.shortest_path(&only, &only), vec![only.clone()]);
}

#[test]
fn observer_tracks_modified_flag() {
    let mut store = GraphStore::new();
    let dirty = Rc::new(RefCell::new(false));
    let flag = Rc::clone(&dirty);
    store.subscribe(move |_: &ModelChangeEvent| *flag.borrow_mut() = true);

    store.add_relationship(Relationship::new("nobody", "nowhere"));
    assert!(!*dirty.borrow(), "rejected insert must not mark the model dirty");

    concept(&mut store, "A");
    assert!(*dirty.borrow());
}

#[test]
fn cascade_emits_one_event_per_relationship_then_concept() {
    let mut store = GraphStore::new();
    let hub = concept(&mut store, "Hub");
    for i in 0..3 {
        let spoke = concept(&mut store, &format!("Spoke{i}"));
        store.add_relationship(Relationship::new(hub.clone(), spoke));
    }

    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    store.subscribe(move |e: &ModelChangeEvent| sink.borrow_mut().push(e.kind));

    store.remove_concept(&hub);
    assert_eq!(
        *events.borrow(),
        vec![
            ChangeKind::RelationshipRemoved,
            ChangeKind::RelationshipRemoved,
            ChangeKind::RelationshipRemoved,
            ChangeKind::ConceptRemoved,
        ]
    );
}

#[test]
fn large_graph_keeps_lookup_consistent() {
    let mut store = GraphStore::new();
    let ids: Vec<ConceptId> = (0..1000).map(|i| concept(&mut store, &format!("C{i}"))).collect();
    for pair in ids.windows(2) {
        store.add_relationship(Relationship::new(pair[0].clone(), pair[1].clone()));
    }

    for id in ids.iter().step_by(7) {
        store.remove_concept(id);
    }

    for concept in store.concepts() {
        assert_eq!(store.concept(concept.id()).map(|c| c.name()), Some(concept.name()));
    }
    for rel in store.relationships() {
        assert!(store.concept(rel.source()).is_some());
        assert!(store.concept(rel.target()).is_some());
        assert_eq!(store.relationship(rel.id()).map(Relationship::id), Some(rel.id()));
    }
}
