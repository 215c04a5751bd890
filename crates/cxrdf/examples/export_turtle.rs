//! Export a small CX network under each policy and print the Turtle.
//!
//! Run with: `cargo run -p cxrdf --example export_turtle [policy]`

use cxrdf::{cx_to_rdf_report, ExportConfig, Policy, RdfFormat};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cx_json = json!([
        {"@context": [{"hgnc": "https://identifiers.org/hgnc.symbol:"}]},
        {"networkAttributes": [{"n": "name", "v": "MAPK signaling"}]},
        {"nodes": [
            {"@id": 0, "n": "MAP2K1", "r": "hgnc:MAP2K1"},
            {"@id": 1, "n": "MAPK1", "r": "hgnc:MAPK1"}
        ]},
        {"edges": [{"@id": 0, "s": 0, "t": 1, "i": "phosphorylates"}]},
        {"citations": [{"@id": 0, "dc:identifier": "pmid:12345", "dc:title": "Kinase cascade"}]},
        {"edgeCitations": [{"po": [0], "citations": [0]}]},
        {"edgeAttributes": [{"po": 0, "n": "confidence", "v": 0.9, "d": "double"}]}
    ]);

    let policies = match std::env::args().nth(1) {
        Some(name) => vec![name.parse::<Policy>()?],
        None => Policy::ALL.to_vec(),
    };

    for policy in policies {
        let (graph, stats) = cx_to_rdf_report(&cx_json, &ExportConfig::for_policy(policy))?;
        println!("# {policy}: {} triples", stats.triple_count);
        println!("{}", cxrdf_graph::serialize(&graph, RdfFormat::Turtle)?);
    }

    Ok(())
}
