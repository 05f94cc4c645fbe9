//! Presentation of graphs and analysis results

use crate::OutputFormat;
use anyhow::Result;
use comfy_table::{ContentArrangement, Table};
use grafo::algo::{Analysis, EulerResult, HamiltonResult, StructureReport};
use grafo::graph::Graph;
use serde::Serialize;
use std::path::Path;

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header.to_vec());
    table
}

pub fn summary(graph: &Graph, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "kind": graph.kind(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "stored_edges": graph.stored_edge_count(),
        })),
        OutputFormat::Table => {
            println!(
                "Graph loaded (kind {}). Vertices: {}. Edges: {}.",
                graph.kind(),
                graph.vertex_count(),
                graph.edge_count()
            );
            Ok(())
        }
    }
}

pub fn raw(path: &Path, lines: Option<Vec<String>>) {
    println!("File content ({}):", path.display());
    println!("{}", "-".repeat(40));
    match lines {
        Some(lines) => lines.iter().for_each(|line| println!("{}", line)),
        None => println!("File does not exist."),
    }
    println!("{}", "-".repeat(40));
}

pub fn adjacency(graph: &Graph, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&graph.snapshot()),
        OutputFormat::Table => {
            let mut table = new_table(&["id", "label", "metadata", "neighbors"]);
            for vertex in graph.vertices() {
                let neighbors: Vec<String> = graph
                    .outgoing(vertex.id)
                    .iter()
                    .map(|e| match &e.weight {
                        Some(w) => format!("{}({})", e.destination, w),
                        None => e.destination.to_string(),
                    })
                    .collect();
                table.add_row(vec![
                    vertex.id.to_string(),
                    vertex.label.to_string(),
                    vertex.metadata.join(", "),
                    format!("[{}]", neighbors.join(", ")),
                ]);
            }
            println!("{}", table);
            println!(
                "{} vertices, {} edges ({}, kind {})",
                graph.vertex_count(),
                graph.edge_count(),
                graph.orientation(),
                graph.kind().code()
            );
            Ok(())
        }
    }
}

pub fn degrees(graph: &Graph, format: OutputFormat) -> Result<()> {
    let degrees = graph.degree_sequence();
    match format {
        OutputFormat::Json => print_json(&degrees),
        OutputFormat::Table => {
            let mut table = new_table(&["id", "degree"]);
            for (id, degree) in &degrees {
                table.add_row(vec![id.to_string(), degree.to_string()]);
            }
            println!("{}", table);
            Ok(())
        }
    }
}

pub fn structure(report: &StructureReport, format: OutputFormat) -> Result<()> {
    if let OutputFormat::Json = format {
        return print_json(report);
    }
    match report {
        StructureReport::Undirected { connected } => {
            let verdict = if *connected { "connected" } else { "disconnected" };
            println!("Undirected graph => {}", verdict);
        }
        StructureReport::Directed {
            components,
            category,
            condensation,
        } => {
            println!(
                "Directed graph. Strongly connected components: {}",
                components.len()
            );
            let mut table = new_table(&["component", "vertices"]);
            for (idx, members) in components.iter().enumerate() {
                let ids: Vec<String> = members.iter().map(u64::to_string).collect();
                table.add_row(vec![idx.to_string(), format!("[{}]", ids.join(", "))]);
            }
            println!("{}", table);
            println!("Category: {}", category);

            println!("\nReduced graph:");
            for from in 0..condensation.component_count {
                let targets: Vec<String> =
                    condensation.successors(from).map(|c| c.to_string()).collect();
                if !targets.is_empty() {
                    println!("  Comp{} -> [{}]", from, targets.join(", "));
                }
            }
        }
    }
    Ok(())
}

pub fn euler(result: &Analysis<EulerResult>, format: OutputFormat) -> Result<()> {
    if let OutputFormat::Json = format {
        return print_json(result);
    }
    match result {
        Analysis::NotApplicable(reason) => println!("Eulerian cycle: not applicable, {}.", reason),
        Analysis::Applicable(EulerResult::HasCycle) => {
            println!("Yes: the graph has an Eulerian cycle (connected, every degree even).")
        }
        Analysis::Applicable(EulerResult::Disconnected) => {
            println!("No Eulerian cycle: the graph is not connected.")
        }
        Analysis::Applicable(EulerResult::OddDegree(odd)) => {
            let ids: Vec<String> = odd.iter().map(u64::to_string).collect();
            println!(
                "No Eulerian cycle: {} vertices with odd degree: [{}]",
                odd.len(),
                ids.join(", ")
            );
        }
    }
    Ok(())
}

pub fn hamilton(result: &Analysis<HamiltonResult>, format: OutputFormat) -> Result<()> {
    if let OutputFormat::Json = format {
        return print_json(result);
    }
    match result {
        Analysis::NotApplicable(reason) => {
            println!("Hamiltonian cycle: not applicable, {}.", reason)
        }
        Analysis::Applicable(HamiltonResult::Dirac) => {
            println!("Yes: every degree is at least n/2 (Dirac), a Hamiltonian cycle exists.")
        }
        Analysis::Applicable(HamiltonResult::Ore) => {
            println!("Yes: every non-adjacent pair has degree sum at least n (Ore), a Hamiltonian cycle exists.")
        }
        Analysis::Applicable(HamiltonResult::Indeterminate { u, v }) => {
            println!(
                "Indeterminate: Dirac fails and Ore fails for non-adjacent vertices {} and {}.",
                u, v
            );
            println!("These conditions are sufficient, not necessary; no conclusion is drawn.");
        }
    }
    Ok(())
}
