use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::graph::{GraphModel, NodeId};
use crate::matrix::MatrixModel;

/// Persisted node entry: file-local id, label, and canvas position.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NodeRecord {
    pub id: u32,
    pub name: String,
    pub x: f64,
    pub y: f64,
}

/// Persisted edge entry, referencing two file-local node ids.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub u: u32,
    pub v: u32,
}

/// Persisted graph section: nodes, edges, and the next value of the
/// label-generation counter.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GraphRecord {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
    pub counter: u64,
}

/// A complete persisted exercise: the graph section plus the row-major
/// matrix table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Exercise {
    pub graph: GraphRecord,
    pub matrix: Vec<Vec<String>>,
}

/// Failures while reading or writing an exercise file.
#[derive(Error, Debug)]
pub enum ExerciseError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed exercise file: {0}")]
    Format(#[from] serde_json::Error),
}

impl Exercise {
    /// Snapshots live models into the persisted form.
    ///
    /// File-local node ids are assigned 0..n in label-sorted order, and
    /// each undirected edge is recorded once.
    #[must_use]
    pub fn capture(graph: &GraphModel, matrix: &MatrixModel) -> Self {
        let mut nodes: Vec<_> = graph.nodes().collect();
        nodes.sort_by(|a, b| a.name().cmp(b.name()));

        let id_map: HashMap<NodeId, u32> = nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (node.id(), index as u32))
            .collect();

        let node_records = nodes
            .iter()
            .enumerate()
            .map(|(index, node)| NodeRecord {
                id: index as u32,
                name: node.name().to_string(),
                x: node.x(),
                y: node.y(),
            })
            .collect();

        let edge_records = graph
            .edges()
            .filter_map(|edge| {
                let (u, v) = edge.endpoints();
                Some(EdgeRecord {
                    u: *id_map.get(&u)?,
                    v: *id_map.get(&v)?,
                })
            })
            .collect();

        Self {
            graph: GraphRecord {
                nodes: node_records,
                edges: edge_records,
                counter: graph.counter(),
            },
            matrix: matrix.rows(),
        }
    }

    /// Rebuilds live models from the persisted form.
    ///
    /// Edges referencing unknown node ids are skipped. The label counter
    /// is restored to the persisted value, since the file records the next
    /// counter value to use.
    #[must_use]
    pub fn apply(&self) -> (GraphModel, MatrixModel) {
        let mut graph = GraphModel::new();
        let mut id_map: HashMap<u32, NodeId> = HashMap::new();

        for record in &self.graph.nodes {
            let id = graph.add_node(record.x, record.y, Some(record.name.clone()));
            id_map.insert(record.id, id);
        }
        for record in &self.graph.edges {
            if let (Some(&u), Some(&v)) = (id_map.get(&record.u), id_map.get(&record.v)) {
                graph.add_edge(u, v);
            }
        }
        graph.set_counter(self.graph.counter);

        let mut matrix = MatrixModel::new();
        matrix.load(self.matrix.clone());

        debug!(
            "Exercise::apply {} nodes, {} edges, {}x{} matrix",
            graph.node_count(),
            graph.edge_count(),
            matrix.size(),
            matrix.size()
        );
        (graph, matrix)
    }

    /// Parses an exercise from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, ExerciseError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the exercise to indented JSON.
    pub fn to_json(&self) -> Result<String, ExerciseError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads and parses an exercise file.
    pub fn load_path(path: impl AsRef<Path>) -> Result<Self, ExerciseError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ExerciseError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Serializes and writes the exercise to a file.
    pub fn save_path(&self, path: impl AsRef<Path>) -> Result<(), ExerciseError> {
        let path = path.as_ref();
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| ExerciseError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}
