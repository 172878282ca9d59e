#![allow(missing_docs)]

use adjmatch_model::{Exercise, ExerciseError, GraphModel, MatrixModel};

fn build_exercise_models() -> (GraphModel, MatrixModel) {
    let mut graph = GraphModel::new();
    let a = graph.add_node(10.0, 20.0, None);
    let b = graph.add_node(60.0, 20.0, None);
    let c = graph.add_node(110.0, 20.0, None);
    graph.add_edge(a, b);
    graph.add_edge(b, c);

    let mut matrix = MatrixModel::with_size(3);
    matrix.set_cell(1, 2, "1");
    matrix.set_cell(2, 3, "4");

    (graph, matrix)
}

#[test]
fn capture_assigns_ids_in_label_order() {
    let (graph, matrix) = build_exercise_models();
    let exercise = Exercise::capture(&graph, &matrix);

    let names: Vec<&str> = exercise
        .graph
        .nodes
        .iter()
        .map(|n| n.name.as_str())
        .collect();
    assert_eq!(names, vec!["A", "B", "C"]);

    let ids: Vec<u32> = exercise.graph.nodes.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![0, 1, 2]);

    // One record per undirected edge.
    assert_eq!(exercise.graph.edges.len(), 2);
    assert_eq!(exercise.graph.counter, 3);
}

#[test]
fn apply_rebuilds_equivalent_models() {
    let (graph, matrix) = build_exercise_models();
    let exercise = Exercise::capture(&graph, &matrix);

    let (rebuilt_graph, rebuilt_matrix) = exercise.apply();

    assert_eq!(rebuilt_graph.node_count(), 3);
    assert_eq!(rebuilt_graph.edge_count(), 2);
    assert_eq!(rebuilt_graph.counter(), graph.counter());
    assert_eq!(
        rebuilt_graph.adjacency_structure(),
        graph.adjacency_structure()
    );
    assert_eq!(
        rebuilt_matrix.adjacency_structure(),
        matrix.adjacency_structure()
    );
}

#[test]
fn apply_skips_edges_with_unknown_ids() {
    let (graph, matrix) = build_exercise_models();
    let mut exercise = Exercise::capture(&graph, &matrix);
    exercise.graph.edges.push(adjmatch_model::EdgeRecord { u: 0, v: 99 });

    let (rebuilt_graph, _) = exercise.apply();
    assert_eq!(rebuilt_graph.edge_count(), 2);
}

#[test]
fn json_round_trip_preserves_the_exercise() {
    let (graph, matrix) = build_exercise_models();
    let exercise = Exercise::capture(&graph, &matrix);

    let json = exercise.to_json().expect("serialization should succeed");
    let parsed = Exercise::from_json(&json).expect("round trip should parse");

    assert_eq!(parsed, exercise);
}

#[test]
fn file_round_trip_preserves_the_exercise() {
    let (graph, matrix) = build_exercise_models();
    let exercise = Exercise::capture(&graph, &matrix);

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("exercise.json");

    exercise.save_path(&path).expect("save should succeed");
    let loaded = Exercise::load_path(&path).expect("load should succeed");

    assert_eq!(loaded, exercise);
}

#[test]
fn loading_a_missing_file_reports_the_path() {
    let err = Exercise::load_path("/nonexistent/exercise.json").unwrap_err();
    match err {
        ExerciseError::Io { path, .. } => assert!(path.contains("exercise.json")),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn malformed_json_is_a_format_error() {
    let err = Exercise::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ExerciseError::Format(_)));
}

#[test]
fn fixed_schema_documents_are_accepted() {
    let json = r#"{
        "graph": {
            "nodes": [
                { "id": 0, "name": "A", "x": 10.0, "y": 20.0 },
                { "id": 1, "name": "B", "x": 60.0, "y": 20.0 }
            ],
            "edges": [ { "u": 0, "v": 1 } ],
            "counter": 2
        },
        "matrix": [ [ "", "1" ], [ "1", "" ] ]
    }"#;

    let exercise = Exercise::from_json(json).expect("schema document should parse");
    let (graph, matrix) = exercise.apply();

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.counter(), 2);
    assert!(matrix.is_symmetric());
}
