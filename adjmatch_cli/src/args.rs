use std::path::PathBuf;

use clap::Parser;

/// Adjmatch - reconcile a drawn graph with an adjacency matrix
#[derive(Parser, Debug)]
#[command(name = "adjmatch")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the exercise file (JSON)
    pub exercise: PathBuf,

    /// Fail instead of warning when the loaded matrix is asymmetric
    #[arg(long, default_value_t = false)]
    pub strict_symmetry: bool,
}
