//! Adjmatch CLI
//!
//! Entry point for the adjmatch command-line tool. Loads a saved exercise
//! (a drawn graph plus an independently filled adjacency matrix) and lists
//! every bijection between matrix positions and node labels under which the
//! two structures coincide.

mod args;

use clap::Parser;
use tracing::{info, warn};

use adjmatch_model::Exercise;
use adjmatch_solver::IsomorphismSolver;

use args::Args;

/// Executes the adjmatch solver.
///
/// This function:
/// 1. Initializes logging
/// 2. Parses command-line arguments
/// 3. Loads the exercise and rebuilds both models
/// 4. Runs the exhaustive bijection search
/// 5. Renders the solution listing
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    info!("Loading exercise: {}", args.exercise.display());
    let exercise = Exercise::load_path(&args.exercise)?;
    let (graph, matrix) = exercise.apply();

    if !matrix.is_symmetric() {
        if args.strict_symmetry {
            return Err("loaded matrix is asymmetric".into());
        }
        warn!("loaded matrix is asymmetric; solving over the data as-is");
    }

    let graph_structure = graph.adjacency_structure();
    let matrix_structure = matrix.adjacency_structure();

    info!(
        "Solving: {} nodes vs {} positions",
        graph_structure.len(),
        matrix_structure.len()
    );
    let solutions = IsomorphismSolver::new(&graph_structure, &matrix_structure).solve_all();

    if solutions.is_empty() {
        println!("No solutions found.");
        println!("Either the graph structure differs from the marked matrix cells,");
        println!("or the vertex counts differ.");
    } else {
        println!("Found {} solutions", solutions.len());
        for (i, solution) in solutions.iter().enumerate() {
            println!("#{}: {}", i + 1, solution);
        }
    }

    Ok(())
}
