//! Lineage traversal over parent and child edges.

use super::VirusGenealogy;
use crate::error::Result;
use crate::virus::Virus;
use std::collections::{BTreeSet, VecDeque};

/// Which edges a traversal follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Follow edges to children (towards descendants)
    Children,
    /// Follow edges to parents (towards ancestors)
    Parents,
}

/// Breadth-First Search from a starting virus.
///
/// Neighbors at each level are visited in ascending identifier order, so the
/// result is deterministic.
///
/// # Parameters
/// - `genealogy`: The genealogy to traverse
/// - `start`: Starting virus
/// - `direction`: Follow child or parent edges
/// - `max_depth`: Optional maximum depth (None for unlimited, `Some(1)` for direct neighbors)
///
/// # Returns
/// Vec of reachable identifiers (excluding the start)
///
/// # Errors
///
/// Returns [`GenealogyError::VirusNotFound`](crate::GenealogyError::VirusNotFound)
/// if `start` doesn't exist.
pub fn bfs<V: Virus>(
    genealogy: &VirusGenealogy<V>,
    start: &V::Id,
    direction: Direction,
    max_depth: Option<usize>,
) -> Result<Vec<V::Id>, V::Id> {
    let store = genealogy.store();
    store.require(start)?;

    let mut visited = BTreeSet::new();
    let mut queue = VecDeque::new();
    let mut result = Vec::new();

    visited.insert(start.clone());
    queue.push_back((start.clone(), 0)); // (id, depth)

    while let Some((current, depth)) = queue.pop_front() {
        if let Some(max) = max_depth {
            if depth >= max {
                continue;
            }
        }

        let Some(node) = store.get(&current) else {
            continue;
        };
        let neighbors = match direction {
            Direction::Children => &node.children,
            Direction::Parents => &node.parents,
        };

        for neighbor in neighbors {
            if visited.insert(neighbor.clone()) {
                result.push(neighbor.clone());
                queue.push_back((neighbor.clone(), depth + 1));
            }
        }
    }

    Ok(result)
}
