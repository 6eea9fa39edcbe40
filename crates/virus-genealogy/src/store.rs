//! Identifier-keyed arena that owns every virus node.
//!
//! Adjacency inside a node refers to other nodes by identifier only, so the
//! store is the single source of truth for whether a virus is alive.

use crate::error::{GenealogyError, Result};
use crate::graph::VirusNode;
use crate::virus::Virus;
use std::collections::BTreeMap;

/// Owner of all nodes of one genealogy, ordered by identifier.
#[derive(Debug)]
pub(crate) struct NodeStore<V: Virus> {
    nodes: BTreeMap<V::Id, VirusNode<V>>,
}

impl<V: Virus> NodeStore<V> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn contains(&self, id: &V::Id) -> bool {
        self.nodes.contains_key(id)
    }

    pub(crate) fn get(&self, id: &V::Id) -> Option<&VirusNode<V>> {
        self.nodes.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &V::Id) -> Option<&mut VirusNode<V>> {
        self.nodes.get_mut(id)
    }

    /// Like [`get`](Self::get), failing with `VirusNotFound`.
    pub(crate) fn require(&self, id: &V::Id) -> Result<&VirusNode<V>, V::Id> {
        self.nodes
            .get(id)
            .ok_or_else(|| GenealogyError::VirusNotFound { id: id.clone() })
    }

    pub(crate) fn require_mut(&mut self, id: &V::Id) -> Result<&mut VirusNode<V>, V::Id> {
        self.nodes
            .get_mut(id)
            .ok_or_else(|| GenealogyError::VirusNotFound { id: id.clone() })
    }

    /// Insert a node under its own identifier, returning any node it replaced.
    pub(crate) fn insert(&mut self, node: VirusNode<V>) -> Option<VirusNode<V>> {
        self.nodes.insert(node.id().clone(), node)
    }

    pub(crate) fn remove(&mut self, id: &V::Id) -> Option<VirusNode<V>> {
        self.nodes.remove(id)
    }

    pub(crate) fn ids(&self) -> impl DoubleEndedIterator<Item = &V::Id> + '_ {
        self.nodes.keys()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&V::Id, &VirusNode<V>)> + '_ {
        self.nodes.iter()
    }
}
