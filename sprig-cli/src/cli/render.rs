//! Rendering of execution summaries to stdout.

use std::io::{self, Write};

use serde::Serialize;
use sprig_core::{Edge, MinimumSpanningForest, Weight};

use super::commands::{ExecutionSummary, Forest, OutputFormat};

/// JSON document written for `--format json`.
#[derive(Serialize)]
#[serde(bound(serialize = "W: Serialize, W::Total: Serialize"))]
struct JsonReport<'a, W: Weight> {
    vertex_count: usize,
    component_count: usize,
    is_tree: bool,
    total_weight: W::Total,
    edges: &'a [Edge<W>],
}

/// Writes `summary` in its requested format.
///
/// # Errors
/// Returns any error raised by `writer`.
///
/// # Examples
/// ```
/// use sprig_cli::cli::{Cli, Command, ExampleCommand, OutputFormat, render_summary, run_cli};
///
/// let cli = Cli {
///     command: Command::Example(ExampleCommand {
///         format: OutputFormat::Human,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// let mut out = Vec::new();
/// render_summary(&summary, &mut out)?;
/// let text = String::from_utf8(out)?;
/// assert!(text.ends_with("total weight: 7\ncomponents: 1\n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_summary(summary: &ExecutionSummary, writer: impl Write) -> io::Result<()> {
    match &summary.forest {
        Forest::Integer(forest) => render_forest(forest, summary.format, writer),
        Forest::Float(forest) => render_forest(forest, summary.format, writer),
    }
}

fn render_forest<W>(
    forest: &MinimumSpanningForest<W>,
    format: OutputFormat,
    mut writer: impl Write,
) -> io::Result<()>
where
    W: Weight + Serialize,
    W::Total: Serialize,
{
    match format {
        OutputFormat::Human => {
            for edge in forest.edges() {
                writeln!(writer, "{} {} {}", edge.source(), edge.target(), edge.weight())?;
            }
            writeln!(writer, "total weight: {}", forest.total_weight())?;
            writeln!(writer, "components: {}", forest.component_count())?;
            if !forest.is_tree() {
                writeln!(writer, "note: graph is disconnected")?;
            }
        }
        OutputFormat::Json => {
            let report = JsonReport {
                vertex_count: forest.vertex_count(),
                component_count: forest.component_count(),
                is_tree: forest.is_tree(),
                total_weight: forest.total_weight(),
                edges: forest.edges(),
            };
            serde_json::to_writer(&mut writer, &report)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
