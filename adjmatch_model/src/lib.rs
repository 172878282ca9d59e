//! Shared data models for the adjmatch workspace.
//!
//! This crate provides the graph and matrix models an exercise is built
//! from, the adjacency structure both models flatten into for comparison,
//! and the persisted exercise format used across the adjmatch project.

mod adjacency;
mod chain;
mod exercise;
mod graph;
mod matrix;

pub use crate::adjacency::AdjacencyStructure;
pub use crate::chain::ChainBuilder;
pub use crate::exercise::{EdgeRecord, Exercise, ExerciseError, GraphRecord, NodeRecord};
pub use crate::graph::{Edge, GraphModel, MIN_NODE_DISTANCE, Node, NodeId};
pub use crate::matrix::MatrixModel;
