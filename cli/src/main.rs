//! Grafo CLI: command-line interface for graph analysis
//!
//! Every command works on the flat graph file given by `--file`. Mutating
//! commands load the file, apply the change and write it back; `shell` keeps
//! one graph in memory until it is explicitly saved.

mod render;
mod shell;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use grafo::graph::{Graph, Orientation, VertexId};
use grafo::persistence::{self, LoaderConfig, DEFAULT_GRAPH_FILE, FIELD_SEPARATOR};
use grafo::algo;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grafo-cli", version, about = "Grafo graph analysis CLI")]
struct Cli {
    /// Graph file
    #[arg(long, default_value = DEFAULT_GRAPH_FILE, global = true, env = "GRAFO_FILE")]
    file: PathBuf,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    /// Treat the graph as directed or undirected regardless of its kind code
    #[arg(long, global = true)]
    orientation: Option<OrientationArg>,

    /// Skip edges whose endpoints are not declared instead of creating them
    #[arg(long, global = true)]
    strict_endpoints: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OrientationArg {
    Directed,
    Undirected,
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Directed => Orientation::Directed,
            OrientationArg::Undirected => Orientation::Undirected,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Reload the graph from the file
    Load,
    /// Write the graph to the file
    Save,
    /// Show the file content with line numbers
    Raw,
    /// Show the adjacency list
    Show,
    /// Show every vertex degree
    Degrees,
    /// Insert a vertex
    AddVertex {
        id: u64,
        label: String,
        /// Metadata fields, comma separated
        #[arg(long, value_delimiter = ',')]
        meta: Vec<String>,
    },
    /// Insert an edge (mirrored for undirected graphs)
    AddEdge {
        origin: u64,
        destination: u64,
        /// Free-form weight, e.g. "1.2 km"
        #[arg(long)]
        weight: Option<String>,
    },
    /// Remove a vertex and every incident edge
    RemoveVertex { id: u64 },
    /// Remove every edge from origin to destination
    RemoveEdge { origin: u64, destination: u64 },
    /// Connectivity, or strongly connected components and reduced graph
    Structure,
    /// Check for an Eulerian cycle
    Euler,
    /// Check Dirac/Ore conditions for a Hamiltonian cycle
    Hamilton,
    /// Start an interactive shell
    Shell,
}

/// One graph bound to its file and output settings
pub struct Session {
    pub path: PathBuf,
    pub config: LoaderConfig,
    pub format: OutputFormat,
    pub graph: Graph,
}

impl Session {
    fn open(path: PathBuf, config: LoaderConfig, format: OutputFormat) -> Result<Self> {
        let graph = persistence::load(&path, &config)
            .with_context(|| format!("failed to load {}", path.display()))?;
        Ok(Self {
            path,
            config,
            format,
            graph,
        })
    }

    fn reload(&mut self) -> Result<()> {
        self.graph = persistence::load(&self.path, &self.config)
            .with_context(|| format!("failed to load {}", self.path.display()))?;
        Ok(())
    }

    fn save(&self) -> Result<()> {
        persistence::save(&self.graph, &self.path)
            .with_context(|| format!("failed to save {}", self.path.display()))
    }
}

/// Whether a command changed the in-memory graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    ReadOnly,
    Mutated,
}

/// Run one command against a session
pub fn execute(session: &mut Session, command: Commands) -> Result<Effect> {
    let format = session.format;
    match command {
        Commands::Load => {
            session.reload()?;
            render::summary(&session.graph, format)?;
        }
        Commands::Save => {
            session.save()?;
            println!("Graph saved to {}", session.path.display());
        }
        Commands::Raw => render::raw(&session.path, persistence::raw_dump(&session.path)?),
        Commands::Show => render::adjacency(&session.graph, format)?,
        Commands::Degrees => render::degrees(&session.graph, format)?,
        Commands::AddVertex { id, label, meta } => {
            if label.contains(FIELD_SEPARATOR) {
                bail!(
                    "label {:?} contains {:?}, which the graph file uses as its field separator",
                    label,
                    FIELD_SEPARATOR
                );
            }
            let meta = meta.into_iter().map(|m| m.trim().to_string()).collect();
            session.graph.add_vertex(VertexId::new(id), label, meta)?;
            println!("Vertex {} added.", id);
            return Ok(Effect::Mutated);
        }
        Commands::AddEdge {
            origin,
            destination,
            weight,
        } => {
            session
                .graph
                .add_edge(VertexId::new(origin), VertexId::new(destination), weight)?;
            println!("Edge {} -> {} added.", origin, destination);
            return Ok(Effect::Mutated);
        }
        Commands::RemoveVertex { id } => {
            session.graph.remove_vertex(VertexId::new(id))?;
            println!("Vertex {} removed (with its incident edges).", id);
            return Ok(Effect::Mutated);
        }
        Commands::RemoveEdge {
            origin,
            destination,
        } => {
            let removed = session
                .graph
                .remove_edge(VertexId::new(origin), VertexId::new(destination))?;
            println!("{} edge(s) {} -> {} removed.", removed, origin, destination);
            return Ok(Effect::Mutated);
        }
        Commands::Structure => render::structure(&algo::structure_report(&session.graph), format)?,
        Commands::Euler => render::euler(&algo::eulerian_cycle(&session.graph), format)?,
        Commands::Hamilton => render::hamilton(&algo::hamiltonian_cycle(&session.graph), format)?,
        Commands::Shell => bail!("already in a shell"),
    }
    Ok(Effect::ReadOnly)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = LoaderConfig {
        auto_create_endpoints: !cli.strict_endpoints,
        orientation: cli.orientation.map(Orientation::from),
        ..LoaderConfig::default()
    };
    let mut session = Session::open(cli.file, config, cli.format)?;
    info!(
        "Graph kind {} with {} vertices and {} edges",
        session.graph.kind(),
        session.graph.vertex_count(),
        session.graph.edge_count()
    );

    match cli.command {
        Commands::Shell => shell::run_shell(&mut session),
        command => {
            if execute(&mut session, command)? == Effect::Mutated {
                session.save()?;
            }
            Ok(())
        }
    }
}
