//! Decodes an adjacency-list file (one star graph JSON record per line) and
//! prints a summary of each vertex.
//!
//! ```text
//! RUST_LOG=star_graph=debug cargo run --example decode_file -- data/modern.jsonl
//! ```

use std::fs;

use star_graph::{Direction, Record, StarEdge, decode_star_graph_attached, validate_star_graph};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/data/modern.jsonl").to_string());

    println!("Reading: {}", path);
    let text = fs::read_to_string(&path).expect("Failed to read file");

    let mut vertices = 0usize;
    let mut edges = 0usize;
    let mut failures = 0usize;

    for (line_no, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let record = match Record::from_json_str(line) {
            Ok(record) => record,
            Err(err) => {
                eprintln!("line {}: {}", line_no + 1, err);
                failures += 1;
                continue;
            }
        };

        let mut count_edge = |_: &StarEdge| -> Result<(), star_graph::DecodeError> {
            edges += 1;
            Ok(())
        };
        let graph = match decode_star_graph_attached(&record, &mut count_edge) {
            Ok(graph) => graph,
            Err(err) => {
                eprintln!("line {}: {}", line_no + 1, err);
                failures += 1;
                continue;
            }
        };
        if let Err(err) = validate_star_graph(&graph) {
            eprintln!("line {}: invalid star graph: {}", line_no + 1, err);
            failures += 1;
            continue;
        }
        vertices += 1;

        let Some(vertex) = graph.vertex() else {
            continue;
        };
        println!("\n=== Vertex {} ({}) ===", vertex.id(), vertex.label());
        for (key, values) in vertex.iter_properties() {
            let rendered: Vec<String> = values.iter().map(|p| p.value().to_string()).collect();
            let marker = if values.len() > 1 { " [list]" } else { "" };
            println!("  {}{} = {}", key, marker, rendered.join(", "));
            for property in values {
                for (meta_key, meta_value) in property.properties().iter() {
                    println!("    @{} {} = {}", property.id(), meta_key, meta_value);
                }
            }
        }

        for direction in Direction::ALL {
            let mut labels: Vec<&str> = graph.edge_labels(direction).collect();
            labels.sort_unstable();
            for label in labels {
                for edge in graph.edges(direction, label) {
                    let arrow = match direction {
                        Direction::Out => "->",
                        Direction::In => "<-",
                    };
                    println!(
                        "  {} {} {} (edge {}, {} properties)",
                        arrow,
                        label,
                        edge.other_vertex_id(),
                        edge.id(),
                        edge.properties().len()
                    );
                }
            }
        }
    }

    println!("\n=== Summary ===");
    println!("Vertices: {}", vertices);
    println!("Edges:    {}", edges);
    println!("Failures: {}", failures);
}
