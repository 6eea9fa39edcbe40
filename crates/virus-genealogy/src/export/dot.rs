//! DOT format export for Graphviz visualization.
//!
//! Generates a `digraph` with one vertex per virus and one arrow per
//! parent-child edge, pointing from parent to child.

use crate::virus::Virus;
use crate::VirusGenealogy;
use std::collections::BTreeMap;
use std::fmt::Display;

/// Options for styling DOT export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotOptions {
    /// Graph layout direction: LR, TB, RL, BT
    pub rankdir: String,
    /// Node shape (box, ellipse, ...)
    pub shape: String,
    /// Fill color of the stem (hex color code)
    pub stem_color: String,
    /// Fill color of every other virus (hex color code)
    pub virus_color: String,
}

impl Default for DotOptions {
    fn default() -> Self {
        DotOptions {
            rankdir: "TB".to_string(),
            shape: "ellipse".to_string(),
            stem_color: "#FFE082".to_string(),
            virus_color: "#90CAF9".to_string(),
        }
    }
}

/// Export genealogy to Graphviz DOT format
pub fn export_dot<V>(genealogy: &VirusGenealogy<V>) -> String
where
    V: Virus,
    V::Id: Display,
{
    export_dot_styled(genealogy, &DotOptions::default())
}

/// Export genealogy to Graphviz DOT format with custom styling
pub fn export_dot_styled<V>(genealogy: &VirusGenealogy<V>, options: &DotOptions) -> String
where
    V: Virus,
    V::Id: Display,
{
    let store = genealogy.store();
    let mut output = String::new();

    // Header
    output.push_str("digraph genealogy {\n");
    output.push_str(&format!("    rankdir={};\n", options.rankdir));
    output.push_str(&format!(
        "    node [style=filled, shape={}];\n\n",
        options.shape
    ));

    // Vertices are named by position so any identifier renders safely
    let positions: BTreeMap<&V::Id, usize> = store
        .ids()
        .enumerate()
        .map(|(index, id)| (id, index))
        .collect();

    for (id, index) in &positions {
        let color = if *id == genealogy.stem_id() {
            &options.stem_color
        } else {
            &options.virus_color
        };
        output.push_str(&format!(
            "    v{index} [label=\"{}\", fillcolor=\"{color}\"];\n",
            escape_dot_label(&id.to_string())
        ));
    }

    output.push('\n');

    for (id, node) in store.iter() {
        for child_id in &node.children {
            if let (Some(from), Some(to)) = (positions.get(id), positions.get(child_id)) {
                output.push_str(&format!("    v{from} -> v{to};\n"));
            }
        }
    }

    output.push_str("}\n");

    output
}

/// Escape special characters for DOT labels
fn escape_dot_label(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
