//! Command-line interface for computing minimum spanning forests.
//!
//! `run` loads an edge-list file and `example` uses the built-in reference
//! graph. Both render the forest as plain text or JSON.

mod commands;
mod render;

pub use commands::{
    Cli, CliError, Command, ExampleCommand, ExecutionSummary, Forest, IndexingArg, OutputFormat,
    RunCommand, WeightKind, reference_graph, run_cli,
};
pub use render::render_summary;
