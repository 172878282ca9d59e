//! Exhaustive bijection search between matrix positions and graph nodes.
//!
//! Given the adjacency structure of an interactively built graph and the
//! adjacency structure of an independently filled matrix, the solver
//! enumerates every bijection from matrix positions to node labels under
//! which the relabeled matrix structure equals the graph structure
//! exactly. The search is deliberately brute force: all n! permutations
//! of the sorted node labels are tried, lazily and in lexicographic
//! order, which is acceptable because n is bounded by what a person draws
//! interactively.

mod bijection;

pub use crate::bijection::Bijection;

use adjmatch_model::AdjacencyStructure;
use itertools::Itertools;
use tracing::debug;

/// Read-only search over a graph structure and a matrix structure.
///
/// Borrows both inputs for the duration of the search and never mutates
/// either; each solve call re-derives everything it needs, so models may
/// change freely between calls.
pub struct IsomorphismSolver<'g, 'm> {
    graph: &'g AdjacencyStructure,
    matrix: &'m AdjacencyStructure,
}

impl<'g, 'm> IsomorphismSolver<'g, 'm> {
    /// Creates a solver over the two structures.
    #[must_use]
    pub const fn new(graph: &'g AdjacencyStructure, matrix: &'m AdjacencyStructure) -> Self {
        Self { graph, matrix }
    }

    /// Enumerates every valid bijection.
    ///
    /// An empty input on either side, or differing cardinalities, yields
    /// an empty result set; both are normal outcomes, not failures. The
    /// result is complete (no early exit) and deterministic: solutions
    /// appear in lexicographic order of the accepted label permutations.
    #[must_use]
    pub fn solve_all(&self) -> Vec<Bijection> {
        let graph_labels = self.graph.labels_sorted();
        let position_labels = position_labels_sorted(self.matrix);

        if graph_labels.is_empty() || position_labels.is_empty() {
            debug!("empty input, no bijections to enumerate");
            return Vec::new();
        }
        if graph_labels.len() != position_labels.len() {
            debug!(
                "cardinality mismatch ({} nodes vs {} positions), no bijections",
                graph_labels.len(),
                position_labels.len()
            );
            return Vec::new();
        }

        let n = graph_labels.len();
        let mut solutions = Vec::new();
        let mut candidates = 0_u64;

        for permutation in graph_labels.iter().permutations(n) {
            candidates += 1;

            let mut mapping = Bijection::new();
            for (position, label) in position_labels.iter().zip(permutation) {
                mapping.insert(position, label);
            }

            let relabeled = self.matrix.relabeled(mapping.position_to_label());
            if relabeled == *self.graph {
                solutions.push(mapping);
            }
        }

        debug!(
            "tried {} candidate bijections, {} solutions",
            candidates,
            solutions.len()
        );
        solutions
    }
}

/// Enumerates every bijection under which the relabeled matrix structure
/// equals the graph structure.
#[must_use]
pub fn enumerate_bijections(
    graph: &AdjacencyStructure,
    matrix: &AdjacencyStructure,
) -> Vec<Bijection> {
    IsomorphismSolver::new(graph, matrix).solve_all()
}

/// Position labels in numeric order ("1", "2", …, "10"), not the
/// lexicographic order their string form would give.
fn position_labels_sorted(structure: &AdjacencyStructure) -> Vec<String> {
    let mut labels = structure.labels_sorted();
    labels.sort_by_key(|label| label.parse::<u64>().ok());
    labels
}
