//! Derived read-only queries over a concept graph.
//!
//! Everything here is recomputed from the current relationships on each
//! call; nothing is cached between calls. For repeated neighbor lookups
//! (the link predictors score every concept pair) build an
//! [`AdjacencyIndex`] once and query that instead.

use qlink_core::error::GraphError;
use qlink_core::topology::ConceptGraph;
use qlink_core::types::*;
use std::collections::{HashMap, HashSet, VecDeque};

/// Structural queries over any [`ConceptGraph`].
pub struct GraphQueryEngine<'g, G: ConceptGraph + ?Sized> {
    graph: &'g G,
}

impl<'g, G: ConceptGraph + ?Sized> GraphQueryEngine<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// Whether some relationship connects `a` to `b`.
    ///
    /// Directed relationships only connect source to target; undirected
    /// ones connect both orders.
    pub fn are_connected(&self, a: &ConceptId, b: &ConceptId) -> bool {
        self.graph.relationships().iter().any(|rel| rel.connects(a, b))
    }

    /// Whether a relationship joins `a` and `b` in either direction.
    pub fn are_adjacent(&self, a: &ConceptId, b: &ConceptId) -> bool {
        self.are_connected(a, b) || self.are_connected(b, a)
    }

    /// Ids one relationship away from `id`, source side and target side,
    /// with one entry per relationship.
    pub fn neighbors_of(&self, id: &ConceptId) -> Vec<ConceptId> {
        self.graph
            .relationships()
            .iter()
            .filter_map(|rel| rel.other_endpoint(id))
            .cloned()
            .collect()
    }

    /// Number of relationships attached to `id`. Parallel relationships count individually.
    pub fn degree(&self, id: &ConceptId) -> usize {
        self.graph
            .relationships()
            .iter()
            .filter(|rel| rel.touches(id))
            .count()
    }

    /// Breadth-first shortest path from `start` to `end`, both inclusive.
    ///
    /// Direction is ignored for pathing. Returns `[start]` whenever
    /// `start == end`, even if the graph does not contain `start`.
    /// Otherwise an unknown `start` or an unreachable `end` gives an empty
    /// vector. Among equally short paths the first one discovered in
    /// relationship order wins.
    pub fn shortest_path(&self, start: &ConceptId, end: &ConceptId) -> Vec<ConceptId> {
        if start == end {
            return vec![start.clone()];
        }

        let adjacency = self.undirected_adjacency();
        let mut queue = VecDeque::new();
        let mut parent: HashMap<&ConceptId, &ConceptId> = HashMap::new();
        let mut visited: HashSet<&ConceptId> = HashSet::new();

        let Some(start) = self.graph.concept(start).map(Concept::id) else {
            return Vec::new();
        };
        queue.push_back(start);
        visited.insert(start);

        while let Some(current) = queue.pop_front() {
            if current == end {
                let mut path = vec![current.clone()];
                let mut node = current;
                while let Some(&prev) = parent.get(node) {
                    path.push(prev.clone());
                    node = prev;
                }
                path.reverse();
                return path;
            }

            for &next in adjacency.get(current).into_iter().flatten() {
                if visited.insert(next) {
                    parent.insert(next, current);
                    queue.push_back(next);
                }
            }
        }

        Vec::new()
    }

    /// Concepts with no relationships at all.
    pub fn orphaned_concepts(&self) -> Vec<&'g Concept> {
        let degrees = self.degree_map();
        self.graph
            .concepts()
            .iter()
            .filter(|c| !degrees.contains_key(c.id()))
            .collect()
    }

    /// Sum of incident relationship weights divided by the number of concepts.
    ///
    /// A crude centrality proxy: 0.0 when the concept has no relationships
    /// or the graph has no concepts.
    pub fn importance(&self, id: &ConceptId) -> f64 {
        let concept_count = self.graph.concept_count();
        if concept_count == 0 {
            return 0.0;
        }
        let mut attached = self
            .graph
            .relationships()
            .iter()
            .filter(|rel| rel.touches(id))
            .peekable();
        if attached.peek().is_none() {
            return 0.0;
        }
        let total: f64 = attached.map(Relationship::weight).sum();
        total / concept_count as f64
    }

    /// Whether every relationship endpoint exists and all ids are unique.
    pub fn is_valid(&self) -> bool {
        self.validation_errors().is_empty()
    }

    /// Every integrity violation in the graph.
    ///
    /// Dangling references come first, in relationship order (source
    /// before target), followed by repeated concept ids and repeated
    /// relationship ids.
    pub fn validation_errors(&self) -> Vec<GraphError> {
        let mut errors = Vec::new();

        for rel in self.graph.relationships() {
            if !self.graph.contains_concept(rel.source()) {
                errors.push(GraphError::missing_source(rel.id(), rel.source()));
            }
            if !self.graph.contains_concept(rel.target()) {
                errors.push(GraphError::missing_target(rel.id(), rel.target()));
            }
        }

        let mut seen_concepts = HashSet::new();
        for concept in self.graph.concepts() {
            if !seen_concepts.insert(concept.id()) {
                errors.push(GraphError::DuplicateConcept(concept.id().clone()));
            }
        }

        let mut seen_relationships = HashSet::new();
        for rel in self.graph.relationships() {
            if !seen_relationships.insert(rel.id()) {
                errors.push(GraphError::DuplicateRelationship(rel.id().clone()));
            }
        }

        errors
    }

    /// Aggregate connection statistics, computed in one pass over the concepts.
    pub fn statistics(&self) -> ModelStatistics {
        let concepts = self.graph.concepts();
        let mut stats = ModelStatistics {
            concept_count: concepts.len(),
            relationship_count: self.graph.relationship_count(),
            ..ModelStatistics::default()
        };
        if concepts.is_empty() {
            return stats;
        }

        let degrees = self.degree_map();
        let mut total = 0usize;
        stats.min_connections = usize::MAX;
        for concept in concepts {
            let connections = degrees.get(concept.id()).copied().unwrap_or(0);
            total += connections;
            if connections == 0 {
                stats.orphaned_concept_count += 1;
            }
            stats.max_connections = stats.max_connections.max(connections);
            stats.min_connections = stats.min_connections.min(connections);
        }
        stats.average_connections = total as f64 / concepts.len() as f64;
        stats
    }

    /// Number of connected components, ignoring direction. Orphans count as their own component.
    pub fn connected_components(&self) -> usize {
        let adjacency = self.undirected_adjacency();
        let mut visited: HashSet<&ConceptId> = HashSet::new();
        let mut components = 0;

        for concept in self.graph.concepts() {
            if !visited.insert(concept.id()) {
                continue;
            }
            components += 1;
            let mut queue = VecDeque::from([concept.id()]);
            while let Some(current) = queue.pop_front() {
                for &next in adjacency.get(current).into_iter().flatten() {
                    if visited.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
        }

        components
    }

    /// Precomputed neighbor sets and degrees for the whole graph.
    pub fn adjacency(&self) -> AdjacencyIndex<'g> {
        AdjacencyIndex::build(self.graph)
    }

    fn degree_map(&self) -> HashMap<&'g ConceptId, usize> {
        let mut degrees = HashMap::new();
        for rel in self.graph.relationships() {
            *degrees.entry(rel.source()).or_insert(0) += 1;
            if rel.target() != rel.source() {
                *degrees.entry(rel.target()).or_insert(0) += 1;
            }
        }
        degrees
    }

    /// Neighbor lists over relationships whose endpoints both exist, in relationship order.
    fn undirected_adjacency(&self) -> HashMap<&'g ConceptId, Vec<&'g ConceptId>> {
        let mut adjacency: HashMap<&ConceptId, Vec<&ConceptId>> = HashMap::new();
        for rel in self.graph.relationships() {
            let (Some(source), Some(target)) =
                (self.graph.concept(rel.source()), self.graph.concept(rel.target()))
            else {
                continue;
            };
            adjacency.entry(source.id()).or_default().push(target.id());
            adjacency.entry(target.id()).or_default().push(source.id());
        }
        adjacency
    }
}

/// Neighbor sets and degrees for every concept, built in one pass.
///
/// Neighbor sets ignore direction and collapse parallel relationships;
/// degrees count every attached relationship.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex<'g> {
    neighbors: HashMap<&'g ConceptId, HashSet<&'g ConceptId>>,
    degrees: HashMap<&'g ConceptId, usize>,
}

impl<'g> AdjacencyIndex<'g> {
    pub fn build<G: ConceptGraph + ?Sized>(graph: &'g G) -> Self {
        let mut index = Self::default();
        for rel in graph.relationships() {
            let (source, target) = (rel.source(), rel.target());
            index.neighbors.entry(source).or_default().insert(target);
            index.neighbors.entry(target).or_default().insert(source);
            *index.degrees.entry(source).or_insert(0) += 1;
            if target != source {
                *index.degrees.entry(target).or_insert(0) += 1;
            }
        }
        index
    }

    /// Distinct neighbors of `id`.
    pub fn neighbors(&self, id: &ConceptId) -> impl Iterator<Item = &'g ConceptId> + '_ {
        self.neighbors.get(id).into_iter().flatten().copied()
    }

    pub fn neighbor_count(&self, id: &ConceptId) -> usize {
        self.neighbors.get(id).map_or(0, HashSet::len)
    }

    pub fn degree(&self, id: &ConceptId) -> usize {
        self.degrees.get(id).copied().unwrap_or(0)
    }

    /// Whether a relationship joins `a` and `b` in either direction.
    pub fn is_linked(&self, a: &ConceptId, b: &ConceptId) -> bool {
        self.neighbors.get(a).is_some_and(|set| set.contains(b))
    }

    /// Size of the intersection of the two neighbor sets.
    pub fn common_neighbors(&self, a: &ConceptId, b: &ConceptId) -> usize {
        let (Some(na), Some(nb)) = (self.neighbors.get(a), self.neighbors.get(b)) else {
            return 0;
        };
        let (small, large) = if na.len() <= nb.len() { (na, nb) } else { (nb, na) };
        small.iter().filter(|id| large.contains(*id)).count()
    }

    /// Size of the union of the two neighbor sets.
    pub fn union_size(&self, a: &ConceptId, b: &ConceptId) -> usize {
        self.neighbor_count(a) + self.neighbor_count(b) - self.common_neighbors(a, b)
    }
}
