//! JSON format export for D3.js and web visualization tools.
//!
//! Generates JSON with "nodes" and "links" arrays compatible with D3.js
//! force-directed layouts. Links point from parent to child.

use crate::error::{GenealogyError, Result};
use crate::virus::Virus;
use crate::VirusGenealogy;
use serde::Serialize;

#[derive(Serialize)]
struct JsonGenealogy<'a, Id> {
    stem: &'a Id,
    nodes: Vec<JsonNode<'a, Id>>,
    links: Vec<JsonLink<'a, Id>>,
}

#[derive(Serialize)]
struct JsonNode<'a, Id> {
    id: &'a Id,
    stem: bool,
    parents: usize,
    children: usize,
}

#[derive(Serialize)]
struct JsonLink<'a, Id> {
    source: &'a Id,
    target: &'a Id,
}

/// Export genealogy to D3.js-compatible JSON format
///
/// # Errors
///
/// Returns [`GenealogyError::Serialization`] if an identifier cannot be
/// represented in JSON.
pub fn export_json<V>(genealogy: &VirusGenealogy<V>) -> Result<String, V::Id>
where
    V: Virus,
    V::Id: Serialize,
{
    let store = genealogy.store();
    let stem = genealogy.stem_id();

    let mut nodes = Vec::with_capacity(store.len());
    let mut links = Vec::new();

    for (id, node) in store.iter() {
        nodes.push(JsonNode {
            id,
            stem: id == stem,
            parents: node.parents.len(),
            children: node.children.len(),
        });
        links.extend(node.children.iter().map(|child| JsonLink {
            source: id,
            target: child,
        }));
    }

    let document = JsonGenealogy { stem, nodes, links };
    serde_json::to_string_pretty(&document)
        .map_err(|e| GenealogyError::serialization("Failed to serialize genealogy", Some(e)))
}
