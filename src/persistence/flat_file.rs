//! Flat-file graph format
//!
//! ```text
//! <kind code>
//! <vertex count N>
//! id, label[, meta...]        (N lines)
//! <edge count M>
//! origin, destination[, weight] (M lines)
//! ```
//!
//! Blank lines are ignored everywhere and fields are trimmed. There is no
//! escaping: a label or metadata field that contains the separator comes
//! back split into several fields.

use super::{LoaderConfig, PersistenceError, PersistenceResult};
use crate::graph::{Graph, GraphError, GraphKind, VertexId};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Non-blank lines paired with their 1-based line number in the source
struct Lines<'a> {
    inner: Vec<(usize, &'a str)>,
    pos: usize,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        let inner = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| (idx + 1, line))
            .collect();
        Lines { inner, pos: 0 }
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn next(&mut self, expected: &'static str) -> PersistenceResult<(usize, &'a str)> {
        let line = self
            .inner
            .get(self.pos)
            .copied()
            .ok_or(PersistenceError::UnexpectedEof { expected })?;
        self.pos += 1;
        Ok(line)
    }

    fn next_number<T: FromStr>(&mut self, expected: &'static str) -> PersistenceResult<T> {
        let (line, text) = self.next(expected)?;
        parse_field(line, text, expected)
    }
}

fn parse_field<T: FromStr>(line: usize, text: &str, what: &str) -> PersistenceResult<T> {
    text.trim().parse().map_err(|_| PersistenceError::Parse {
        line,
        reason: format!("invalid {}: {:?}", what, text.trim()),
    })
}

/// Field separator on vertex and edge lines
pub const FIELD_SEPARATOR: char = ',';

fn split_fields(text: &str) -> Vec<&str> {
    text.split(FIELD_SEPARATOR).map(str::trim).collect()
}

/// Parse a graph from the flat-file text.
///
/// Empty input yields an empty graph with the default kind.
pub fn parse_graph(text: &str, config: &LoaderConfig) -> PersistenceResult<Graph> {
    let mut lines = Lines::new(text);
    if lines.is_empty() {
        return Ok(Graph::new(kind_for(0, config)));
    }

    let code: i64 = lines.next_number("kind code")?;
    let mut graph = Graph::new(kind_for(code, config));

    let vertex_count: usize = lines.next_number("vertex count")?;
    for _ in 0..vertex_count {
        let (line, text) = lines.next("vertex line")?;
        let fields = split_fields(text);
        let id = VertexId::new(parse_field(line, fields[0], "vertex id")?);
        let label = match fields.get(1) {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => config.placeholder_label(id),
        };
        let metadata = fields.iter().skip(2).map(|f| f.to_string()).collect();

        if let Err(err) = graph.add_vertex(id, label, metadata) {
            debug!(line, %err, "skipping vertex line");
        }
    }

    let edge_count: usize = lines.next_number("edge count")?;
    for _ in 0..edge_count {
        let (line, text) = lines.next("edge line")?;
        let fields = split_fields(text);
        if fields.len() < 2 {
            return Err(PersistenceError::Parse {
                line,
                reason: format!("edge needs origin and destination: {:?}", text.trim()),
            });
        }
        let origin = VertexId::new(parse_field(line, fields[0], "edge origin")?);
        let destination = VertexId::new(parse_field(line, fields[1], "edge destination")?);
        let weight = (fields.len() > 2).then(|| fields[2..].join(", "));

        for endpoint in [origin, destination] {
            if !graph.has_vertex(endpoint) && config.auto_create_endpoints {
                debug!(line, vertex = %endpoint, "creating undeclared endpoint");
                graph.add_vertex(endpoint, config.placeholder_label(endpoint), Vec::new())?;
            }
        }

        match graph.add_edge(origin, destination, weight) {
            Ok(()) => {}
            Err(err @ GraphError::UnknownVertex(_)) => {
                warn!(line, %err, "skipping edge with undeclared endpoint");
            }
            Err(err) => debug!(line, %err, "skipping edge line"),
        }
    }

    Ok(graph)
}

fn kind_for(code: i64, config: &LoaderConfig) -> GraphKind {
    match config.orientation {
        Some(orientation) => GraphKind::with_orientation(code, orientation),
        None => GraphKind::new(code),
    }
}

/// Render a graph in the flat-file format.
///
/// Vertices are written ascending by id, edges as reported by
/// [`Graph::all_edges`], so undirected pairs appear once.
pub fn render_graph(graph: &Graph) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, "{}", graph.kind().code());
    let _ = writeln!(out, "{}", graph.vertex_count());
    for vertex in graph.vertices() {
        if vertex.label.as_str().contains(FIELD_SEPARATOR) {
            warn!(vertex = %vertex.id, "label contains the field separator and will not reload intact");
        }
        let _ = write!(out, "{}, {}", vertex.id, vertex.label);
        if vertex.has_metadata() {
            let _ = write!(out, ", {}", vertex.metadata.join(", "));
        }
        out.push('\n');
    }

    let edges: Vec<_> = graph.all_edges().collect();
    let _ = writeln!(out, "{}", edges.len());
    for edge in edges {
        match &edge.weight {
            Some(weight) => {
                let _ = writeln!(out, "{}, {}, {}", edge.origin, edge.destination, weight);
            }
            None => {
                let _ = writeln!(out, "{}, {}", edge.origin, edge.destination);
            }
        }
    }
    out
}

/// Load a graph from `path`.
///
/// A missing file is not an error: it yields an empty graph.
pub fn load(path: impl AsRef<Path>, config: &LoaderConfig) -> PersistenceResult<Graph> {
    let path = path.as_ref();
    if !path.exists() {
        warn!("Graph file {:?} not found, starting with an empty graph", path);
        return Ok(Graph::new(kind_for(0, config)));
    }

    let text = fs::read_to_string(path)?;
    let graph = parse_graph(&text, config)?;
    info!(
        "Loaded graph from {:?}: kind {}, {} vertices, {} edges",
        path,
        graph.kind(),
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Write a graph to `path`, replacing any previous content
pub fn save(graph: &Graph, path: impl AsRef<Path>) -> PersistenceResult<()> {
    let path = path.as_ref();
    fs::write(path, render_graph(graph))?;
    info!("Saved graph to {:?}", path);
    Ok(())
}

/// The file's lines numbered `001: ...`, or `None` if it does not exist
pub fn raw_dump(path: impl AsRef<Path>) -> PersistenceResult<Option<Vec<String>>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    let text = fs::read_to_string(path)?;
    let lines = text
        .lines()
        .enumerate()
        .map(|(idx, line)| format!("{:03}: {}", idx + 1, line.trim_end()))
        .collect();
    Ok(Some(lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, Orientation};

    const SAMPLE: &str = "\
3
3
1, Cafe Central, 4.5, cafe, Main St 10
2, Bakery

3, Library, public
2
1, 2, 1.2 km
2, 3
";

    #[test]
    fn test_parse_sample() {
        let graph = parse_graph(SAMPLE, &LoaderConfig::default()).unwrap();

        assert!(graph.is_undirected());
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.stored_edge_count(), 4);

        let cafe = graph.vertex(VertexId::new(1)).unwrap();
        assert_eq!(cafe.label.as_str(), "Cafe Central");
        assert_eq!(cafe.metadata, vec!["4.5", "cafe", "Main St 10"]);
        assert_eq!(
            graph.outgoing(VertexId::new(2))[0],
            Edge::new(VertexId::new(2), VertexId::new(1), Some("1.2 km".into()))
        );
    }

    #[test]
    fn test_empty_input() {
        let graph = parse_graph("\n\n", &LoaderConfig::default()).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.kind().code(), 0);
    }

    #[test]
    fn test_id_only_vertex_gets_placeholder_label() {
        let graph = parse_graph("0\n1\n5\n0\n", &LoaderConfig::default()).unwrap();
        assert_eq!(graph.vertex(VertexId::new(5)).unwrap().label.as_str(), "V5");
    }

    #[test]
    fn test_undeclared_endpoints_auto_created() {
        let graph = parse_graph("1\n0\n1\n4, 9, x\n", &LoaderConfig::default()).unwrap();

        assert_eq!(graph.vertex(VertexId::new(9)).unwrap().label.as_str(), "V9");
        assert!(graph.is_adjacent(VertexId::new(4), VertexId::new(9)));
    }

    #[test]
    fn test_undeclared_endpoints_skipped_when_disabled() {
        let config = LoaderConfig {
            auto_create_endpoints: false,
            ..LoaderConfig::default()
        };
        let graph = parse_graph("1\n1\n4, A\n1\n4, 9\n", &config).unwrap();

        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_duplicates_skipped() {
        let text = "0\n2\n1, A\n1, B\n2\n1, 1\n1, 1\n";
        let graph = parse_graph(text, &LoaderConfig::default()).unwrap();

        assert_eq!(graph.vertex(VertexId::new(1)).unwrap().label.as_str(), "A");
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_parse_errors_report_line() {
        let err = parse_graph("0\n1\nabc, A\n0\n", &LoaderConfig::default()).unwrap_err();
        assert!(matches!(err, PersistenceError::Parse { line: 3, .. }));

        let err = parse_graph("0\n2\n1, A\n", &LoaderConfig::default()).unwrap_err();
        assert!(matches!(err, PersistenceError::UnexpectedEof { expected: "vertex line" }));
    }

    #[test]
    fn test_orientation_override() {
        let config = LoaderConfig {
            orientation: Some(Orientation::Undirected),
            ..LoaderConfig::default()
        };
        let graph = parse_graph("1\n0\n1\n1, 2\n", &config).unwrap();

        assert_eq!(graph.kind().code(), 1);
        assert!(graph.is_undirected());
        assert!(graph.is_adjacent(VertexId::new(2), VertexId::new(1)));
    }

    #[test]
    fn test_render_round_trip() {
        let graph = parse_graph(SAMPLE, &LoaderConfig::default()).unwrap();
        let text = render_graph(&graph);

        assert_eq!(
            text,
            "3\n3\n1, Cafe Central, 4.5, cafe, Main St 10\n2, Bakery\n3, Library, public\n2\n1, 2, 1.2 km\n2, 3\n"
        );
        let reparsed = parse_graph(&text, &LoaderConfig::default()).unwrap();
        assert_eq!(reparsed.snapshot(), graph.snapshot());
    }
}
