//! Command implementations and argument parsing for the wayfinder CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{Span, field, info, instrument};
use wayfinder_core::{
    GraphError, Orientation, TopologicalOrder, bfs_shortest, count_components,
    count_components_with_union_find, dijkstra, topo_sort,
};
use wayfinder_providers_edgelist::{EdgeList, EdgeListError};

use crate::logging::LogFormat;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "wayfinder",
    about = "Run graph traversal algorithms over edge-list files."
)]
pub struct Cli {
    /// Diagnostics format on stderr. Falls back to `WAYFINDER_LOG_FORMAT`,
    /// then `human`.
    #[arg(long, global = true, value_enum, value_name = "FORMAT")]
    pub log_format: Option<LogFormat>,
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Hop distances from a source node by breadth-first search.
    Bfs(BfsArgs),
    /// Connected components of the undirected graph.
    Components(InputArgs),
    /// Topological order of the directed graph, or the cycle preventing one.
    Topo(InputArgs),
    /// Minimum path weights from a source node by Dijkstra's algorithm.
    Dijkstra(DijkstraArgs),
    /// Number of connected components computed with union-find.
    UnionFind(InputArgs),
}

impl Command {
    /// Subcommand name as typed on the command line.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bfs(_) => "bfs",
            Self::Components(_) => "components",
            Self::Topo(_) => "topo",
            Self::Dijkstra(_) => "dijkstra",
            Self::UnionFind(_) => "union-find",
        }
    }
}

/// Input file shared by every command.
#[derive(Debug, Args, Clone)]
pub struct InputArgs {
    /// Edge-list file: `tail head [weight]` per line, `#` starts a comment.
    pub path: PathBuf,
}

/// Arguments of the `bfs` command.
#[derive(Debug, Args, Clone)]
pub struct BfsArgs {
    /// Input file.
    #[command(flatten)]
    pub input: InputArgs,

    /// Label of the node to search from.
    #[arg(long)]
    pub source: String,

    /// Follow edges only from the first label to the second.
    #[arg(long)]
    pub directed: bool,
}

/// Arguments of the `dijkstra` command.
#[derive(Debug, Args, Clone)]
pub struct DijkstraArgs {
    /// Input file. Every edge must carry a weight.
    #[command(flatten)]
    pub input: InputArgs,

    /// Label of the node to search from.
    #[arg(long)]
    pub source: String,

    /// Treat every edge as traversable in both directions.
    #[arg(long)]
    pub undirected: bool,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The requested source label does not occur in the input.
    #[error("source node `{label}` does not appear in the input")]
    UnknownSource {
        /// Label passed via `--source`.
        label: String,
    },
    /// Edge-list parsing or conversion failed.
    #[error(transparent)]
    EdgeList(#[from] EdgeListError),
    /// A graph algorithm rejected its input.
    #[error(transparent)]
    Core(#[from] GraphError),
}

impl CliError {
    /// Core error behind this failure, if any.
    #[must_use]
    pub const fn graph_error(&self) -> Option<&GraphError> {
        match self {
            Self::Core(err) | Self::EdgeList(EdgeListError::Graph(err)) => Some(err),
            _ => None,
        }
    }
}

/// Distance of one node from the search source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceEntry {
    /// Node label.
    pub label: String,
    /// Hop count or path weight; `None` when unreachable.
    pub distance: Option<u64>,
}

/// Members of one connected component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentGroup {
    /// Component index, numbered by the earliest node in input order.
    pub id: usize,
    /// Labels in input order.
    pub members: Vec<String>,
}

/// Algorithm output with node ids translated back to labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Output of `bfs` and `dijkstra`.
    Distances {
        /// Label of the search source.
        source: String,
        /// One entry per node in input order.
        entries: Vec<DistanceEntry>,
    },
    /// Output of `components`.
    Components {
        /// Groups ordered by id.
        groups: Vec<ComponentGroup>,
    },
    /// Output of `topo` for an acyclic graph.
    Order {
        /// Every label, each edge pointing forward.
        order: Vec<String>,
    },
    /// Output of `topo` when a cycle blocks the ordering.
    Cycle {
        /// Labels released before the search stalled.
        ordered: Vec<String>,
        /// Labels on or downstream of a cycle.
        unresolved: Vec<String>,
    },
    /// Output of `union-find`.
    ComponentCount {
        /// Number of connected components.
        count: usize,
    },
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Command that produced the report.
    pub command: &'static str,
    /// Input name derived from the file stem.
    pub input: String,
    /// Nodes in the loaded graph.
    pub nodes: usize,
    /// Edges in the loaded graph.
    pub edges: usize,
    /// Algorithm output.
    pub report: Report,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading the input or running the algorithm
/// fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use wayfinder_cli::cli::{Cli, Command, InputArgs, Report, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "a b\nb c\nd e\n")?;
/// let cli = Cli {
///     log_format: None,
///     command: Command::UnionFind(InputArgs {
///         path: file.path().to_path_buf(),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.report, Report::ComponentCount { count: 2 });
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let command = cli.command.name();
    Span::current().record("command", field::display(command));

    let (input, list, report) = match cli.command {
        Command::Bfs(args) => {
            let list = load_edge_list(&args.input.path)?;
            let report = run_bfs(&list, &args)?;
            (args.input, list, report)
        }
        Command::Components(args) => {
            let list = load_edge_list(&args.path)?;
            let report = run_components(&list)?;
            (args, list, report)
        }
        Command::Topo(args) => {
            let list = load_edge_list(&args.path)?;
            let report = run_topo(&list)?;
            (args, list, report)
        }
        Command::Dijkstra(args) => {
            let list = load_edge_list(&args.input.path)?;
            let report = run_dijkstra(&list, &args)?;
            (args.input, list, report)
        }
        Command::UnionFind(args) => {
            let list = load_edge_list(&args.path)?;
            let report = run_union_find(&list)?;
            (args, list, report)
        }
    };

    let summary = ExecutionSummary {
        command,
        input: derive_input_name(&input.path),
        nodes: list.node_count(),
        edges: list.edge_count(),
        report,
    };
    info!(
        command,
        input = summary.input.as_str(),
        nodes = summary.nodes,
        edges = summary.edges,
        "command completed"
    );
    Ok(summary)
}

#[instrument(name = "cli.load", err, fields(path = field::Empty))]
pub(super) fn load_edge_list(path: &Path) -> Result<EdgeList, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(EdgeList::from_reader(BufReader::new(file))?)
}

fn resolve_source(list: &EdgeList, label: &str) -> Result<usize, CliError> {
    list.id_of(label).ok_or_else(|| CliError::UnknownSource {
        label: label.to_owned(),
    })
}

fn label(list: &EdgeList, id: usize) -> String {
    list.label_of(id).unwrap_or_default().to_owned()
}

fn labels(list: &EdgeList, ids: &[usize]) -> Vec<String> {
    ids.iter().map(|&id| label(list, id)).collect()
}

fn distance_entries(
    list: &EdgeList,
    distances: impl Iterator<Item = Option<u64>>,
) -> Vec<DistanceEntry> {
    distances
        .enumerate()
        .map(|(id, distance)| DistanceEntry {
            label: label(list, id),
            distance,
        })
        .collect()
}

#[instrument(
    name = "cli.bfs",
    err,
    skip(list, args),
    fields(source = args.source.as_str(), directed = args.directed),
)]
pub(super) fn run_bfs(list: &EdgeList, args: &BfsArgs) -> Result<Report, CliError> {
    let orientation = if args.directed {
        Orientation::Directed
    } else {
        Orientation::Undirected
    };
    let graph = list.to_graph(orientation)?;
    let source = resolve_source(list, &args.source)?;
    let paths = bfs_shortest(&graph, source)?;
    let distances = paths
        .distances()
        .iter()
        .map(|distance| distance.and_then(|hops| u64::try_from(hops).ok()));
    Ok(Report::Distances {
        source: args.source.clone(),
        entries: distance_entries(list, distances),
    })
}

#[instrument(
    name = "cli.dijkstra",
    err,
    skip(list, args),
    fields(source = args.source.as_str(), undirected = args.undirected),
)]
pub(super) fn run_dijkstra(list: &EdgeList, args: &DijkstraArgs) -> Result<Report, CliError> {
    let orientation = if args.undirected {
        Orientation::Undirected
    } else {
        Orientation::Directed
    };
    let graph = list.to_weighted_graph(orientation)?;
    let source = resolve_source(list, &args.source)?;
    let paths = dijkstra(&graph, source)?;
    Ok(Report::Distances {
        source: args.source.clone(),
        entries: distance_entries(list, paths.distances().iter().copied()),
    })
}

#[instrument(name = "cli.components", err, skip(list))]
pub(super) fn run_components(list: &EdgeList) -> Result<Report, CliError> {
    let graph = list.to_graph(Orientation::Undirected)?;
    let components = count_components(&graph);
    let mut groups: Vec<ComponentGroup> = (0..components.count())
        .map(|id| ComponentGroup {
            id,
            members: Vec::new(),
        })
        .collect();
    for (node, id) in components.labels().iter().enumerate() {
        groups[id.get()].members.push(label(list, node));
    }
    Ok(Report::Components { groups })
}

#[instrument(name = "cli.topo", err, skip(list))]
pub(super) fn run_topo(list: &EdgeList) -> Result<Report, CliError> {
    let graph = list.to_graph(Orientation::Directed)?;
    let report = match topo_sort(&graph) {
        TopologicalOrder::Complete(order) => Report::Order {
            order: labels(list, &order),
        },
        TopologicalOrder::Cycle {
            ordered,
            unresolved,
        } => Report::Cycle {
            ordered: labels(list, &ordered),
            unresolved: labels(list, &unresolved),
        },
    };
    Ok(report)
}

#[instrument(name = "cli.union_find", err, skip(list))]
pub(super) fn run_union_find(list: &EdgeList) -> Result<Report, CliError> {
    let count = count_components_with_union_find(list.node_count(), list.pairs())?;
    Ok(Report::ComponentCount { count })
}

pub(super) fn derive_input_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "input".to_owned())
}

/// Renders `summary` to `writer` as tab-separated text.
///
/// Unreachable distances print as `INF`.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use wayfinder_cli::cli::{DistanceEntry, ExecutionSummary, Report, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     command: "bfs",
///     input: "demo".into(),
///     nodes: 2,
///     edges: 0,
///     report: Report::Distances {
///         source: "a".into(),
///         entries: vec![
///             DistanceEntry { label: "a".into(), distance: Some(0) },
///             DistanceEntry { label: "b".into(), distance: None },
///         ],
///     },
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "input: demo (2 nodes, 0 edges)\nbfs from a\na\t0\nb\tINF\n"
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "input: {} ({} nodes, {} edges)",
        summary.input, summary.nodes, summary.edges
    )?;
    match &summary.report {
        Report::Distances { source, entries } => {
            writeln!(writer, "{} from {source}", summary.command)?;
            for entry in entries {
                match entry.distance {
                    Some(distance) => writeln!(writer, "{}\t{distance}", entry.label)?,
                    None => writeln!(writer, "{}\tINF", entry.label)?,
                }
            }
        }
        Report::Components { groups } => {
            writeln!(writer, "components: {}", groups.len())?;
            for group in groups {
                writeln!(writer, "{}\t{}", group.id, group.members.join(" "))?;
            }
        }
        Report::Order { order } => {
            writeln!(writer, "order: {}", order.join(" "))?;
        }
        Report::Cycle {
            ordered,
            unresolved,
        } => {
            writeln!(writer, "cycle detected")?;
            writeln!(writer, "ordered: {}", ordered.join(" "))?;
            writeln!(writer, "unresolved: {}", unresolved.join(" "))?;
        }
        Report::ComponentCount { count } => {
            writeln!(writer, "components: {count}")?;
        }
    }
    Ok(())
}
