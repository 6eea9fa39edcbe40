//! Unit tests for DOT and JSON export.

use virus_genealogy::export::{export_dot, export_dot_styled, export_json, DotOptions};
use virus_genealogy::{SimpleVirus, VirusGenealogy};

fn sample() -> VirusGenealogy<SimpleVirus<String>> {
    let stem = "root".to_string();
    let mut genealogy = VirusGenealogy::new(stem.clone());
    genealogy.create("a".to_string(), &stem).unwrap();
    genealogy.create("b".to_string(), &stem).unwrap();
    genealogy
        .create_with_parents("c\"quoted\"".to_string(), &["a".to_string(), "b".to_string()])
        .unwrap();
    genealogy
}

#[test]
fn test_export_dot_structure() {
    let dot = export_dot(&sample());

    assert!(dot.starts_with("digraph genealogy {\n"));
    assert!(dot.ends_with("}\n"));
    assert!(dot.contains("rankdir=TB;"));
    // ids sort as: a, b, c"quoted", root
    assert!(dot.contains("v3 [label=\"root\", fillcolor=\"#FFE082\"];"));
    assert!(dot.contains("v2 [label=\"c\\\"quoted\\\"\", fillcolor=\"#90CAF9\"];"));
    assert!(dot.contains("v3 -> v0;"));
    assert!(dot.contains("v3 -> v1;"));
    assert!(dot.contains("v0 -> v2;"));
    assert!(dot.contains("v1 -> v2;"));
    assert_eq!(dot.matches("->").count(), 4);
}

#[test]
fn test_export_dot_styled() {
    let options = DotOptions {
        rankdir: "LR".to_string(),
        shape: "box".to_string(),
        ..Default::default()
    };
    let dot = export_dot_styled(&sample(), &options);

    assert!(dot.contains("rankdir=LR;"));
    assert!(dot.contains("shape=box"));
}

#[test]
fn test_export_json() {
    let json = export_json(&sample()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["stem"], "root");
    assert_eq!(value["nodes"].as_array().unwrap().len(), 4);
    assert_eq!(value["links"].as_array().unwrap().len(), 4);

    let links: Vec<(String, String)> = value["links"]
        .as_array()
        .unwrap()
        .iter()
        .map(|link| {
            (
                link["source"].as_str().unwrap().to_string(),
                link["target"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert!(links.contains(&("a".to_string(), "c\"quoted\"".to_string())));
    assert!(links.contains(&("root".to_string(), "b".to_string())));
}
