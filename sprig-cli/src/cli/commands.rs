//! Command implementations and argument parsing for the sprig CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use sprig_core::{Edge, KruskalBuilder, MinimumSpanningForest, MstError, VertexIndexing, Weight};
use sprig_providers_edgelist::{EdgeList, EdgeListError};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "sprig",
    version,
    about = "Compute minimum spanning trees with Kruskal's algorithm."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute the minimum spanning forest of an edge-list file.
    Run(RunCommand),
    /// Compute the minimum spanning tree of the built-in four-vertex graph.
    Example(ExampleCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Edge-list file with one `source target weight` triple per line.
    pub path: PathBuf,

    /// Vertex count, overriding any `vertices N` directive in the file.
    #[arg(long)]
    pub vertices: Option<usize>,

    /// Vertex identifier convention used by the file.
    #[arg(long, value_enum, default_value_t = IndexingArg::OneBased)]
    pub indexing: IndexingArg,

    /// How to parse the weight column.
    #[arg(long, value_enum, default_value_t = WeightKind::Integer)]
    pub weights: WeightKind,

    /// Output format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Options accepted by the `example` command.
#[derive(Debug, Args, Clone)]
pub struct ExampleCommand {
    /// Output format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Vertex identifier conventions selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IndexingArg {
    /// Identifiers run from `1` to `n`.
    OneBased,
    /// Identifiers run from `0` to `n - 1`.
    ZeroBased,
}

impl From<IndexingArg> for VertexIndexing {
    fn from(value: IndexingArg) -> Self {
        match value {
            IndexingArg::OneBased => Self::OneBased,
            IndexingArg::ZeroBased => Self::ZeroBased,
        }
    }
}

/// Weight column interpretations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WeightKind {
    /// Signed 64-bit integers, summed exactly.
    Integer,
    /// 64-bit floats; NaN and infinities are rejected.
    Float,
}

/// Output renderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One edge per line followed by summary lines.
    Human,
    /// A single JSON object.
    Json,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The edge-list file could not be read or parsed.
    #[error(transparent)]
    EdgeList(#[from] EdgeListError),
    /// The spanning forest computation rejected the input.
    #[error(transparent)]
    Core(#[from] MstError),
}

impl CliError {
    /// Stable code of the underlying failure, logged on exit.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EdgeList(error) => error.code(),
            Self::Core(error) => error.code().as_str(),
        }
    }
}

/// Forest computed for one of the supported weight kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Forest {
    /// Forest over integer weights.
    Integer(MinimumSpanningForest<i64>),
    /// Forest over floating-point weights.
    Float(MinimumSpanningForest<f64>),
}

impl Forest {
    /// Number of connected components in the forest.
    #[must_use]
    pub const fn component_count(&self) -> usize {
        match self {
            Self::Integer(forest) => forest.component_count(),
            Self::Float(forest) => forest.component_count(),
        }
    }

    /// Number of accepted edges.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Integer(forest) => forest.len(),
            Self::Float(forest) => forest.len(),
        }
    }

    /// Returns `true` when no edge was accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Outcome of a CLI command, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionSummary {
    /// Where the graph came from: a file path or `example`.
    pub source: String,
    /// Requested output format.
    pub format: OutputFormat,
    /// The computed forest.
    pub forest: Forest,
}

/// Vertex count and edges of the built-in reference graph.
///
/// # Examples
/// ```
/// use sprig_cli::cli::reference_graph;
///
/// let (vertices, edges) = reference_graph();
/// assert_eq!(vertices, 4);
/// assert_eq!(edges.len(), 5);
/// ```
#[must_use]
pub fn reference_graph() -> (usize, Vec<Edge<i64>>) {
    let edges = [(1, 2, 1), (2, 3, 2), (2, 4, 4), (1, 4, 5), (1, 3, 3)]
        .into_iter()
        .map(Edge::from)
        .collect();
    (4, edges)
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be loaded or the computation
/// rejects it.
///
/// # Examples
/// ```
/// use sprig_cli::cli::{Cli, Command, ExampleCommand, Forest, OutputFormat, run_cli};
///
/// let cli = Cli {
///     command: Command::Example(ExampleCommand {
///         format: OutputFormat::Human,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// let Forest::Integer(forest) = summary.forest else {
///     unreachable!("example graph uses integer weights");
/// };
/// assert_eq!(forest.total_weight(), 7);
/// # Ok::<(), sprig_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    let summary = match cli.command {
        Command::Run(run) => {
            span.record("command", "run");
            run_command(run)?
        }
        Command::Example(example) => {
            span.record("command", "example");
            run_example(&example)?
        }
    };

    info!(
        source = summary.source.as_str(),
        edges = summary.forest.len(),
        components = summary.forest.component_count(),
        "command completed"
    );
    Ok(summary)
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(
        path = %command.path.display(),
        indexing = field::Empty,
        weights = ?command.weights,
    ),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let indexing = VertexIndexing::from(command.indexing);
    Span::current().record("indexing", field::display(indexing));

    let forest = match command.weights {
        WeightKind::Integer => Forest::Integer(load_and_run(&command, indexing)?),
        WeightKind::Float => Forest::Float(load_and_run(&command, indexing)?),
    };

    Ok(ExecutionSummary {
        source: command.path.display().to_string(),
        format: command.format,
        forest,
    })
}

fn load_and_run<W>(
    command: &RunCommand,
    indexing: VertexIndexing,
) -> Result<MinimumSpanningForest<W>, CliError>
where
    W: Weight + std::str::FromStr,
    W::Err: std::fmt::Display,
{
    let list = EdgeList::<W>::from_path(&command.path)?;
    let vertex_count = command
        .vertices
        .unwrap_or_else(|| list.vertex_count(indexing));
    let kruskal = KruskalBuilder::new().with_indexing(indexing).build();
    Ok(kruskal.run(vertex_count, list.edges())?)
}

fn run_example(command: &ExampleCommand) -> Result<ExecutionSummary, CliError> {
    let (vertex_count, edges) = reference_graph();
    let forest = KruskalBuilder::new().build().run(vertex_count, &edges)?;
    Ok(ExecutionSummary {
        source: "example".to_owned(),
        format: command.format,
        forest: Forest::Integer(forest),
    })
}
