//! Main VirusGenealogy interface for genealogy operations.

use super::algorithms::{self, Direction};
use super::children::Children;
use super::node::VirusNode;
use crate::config::{EmptyParentsPolicy, GenealogyConfig};
use crate::error::{GenealogyError, Result};
use crate::store::NodeStore;
use crate::virus::Virus;
use log::{debug, info, trace, warn};
use std::collections::BTreeSet;
use std::ops::Index;
use std::sync::Arc;

/// A genealogy of viruses rooted at a stem virus.
///
/// Viruses are created from existing parents, may gain parents later through
/// [`connect`](Self::connect), and are removed together with every
/// descendant that would otherwise be left without a parent.
///
/// The genealogy is deliberately not `Clone`: nodes refer to each other and
/// there is no meaningful copy semantics for that web.
pub struct VirusGenealogy<V: Virus> {
    store: NodeStore<V>,
    stem_id: V::Id,
    config: GenealogyConfig,
}

impl<V: Virus> VirusGenealogy<V> {
    /// Create a genealogy holding only the stem virus `stem_id`.
    pub fn new(stem_id: V::Id) -> Self {
        Self::with_config(stem_id, GenealogyConfig::default())
    }

    /// Create a genealogy with an explicit configuration.
    pub fn with_config(stem_id: V::Id, config: GenealogyConfig) -> Self {
        info!("Creating genealogy with stem {stem_id:?}");
        let mut store = NodeStore::new();
        store.insert(VirusNode::new(stem_id.clone()));

        Self {
            store,
            stem_id,
            config,
        }
    }

    /// The configuration this genealogy was built with.
    pub fn config(&self) -> &GenealogyConfig {
        &self.config
    }

    /// Identifier of the stem virus.
    pub fn stem_id(&self) -> &V::Id {
        &self.stem_id
    }

    /// Whether a virus with this identifier is alive.
    pub fn exists(&self, id: &V::Id) -> bool {
        self.store.contains(id)
    }

    /// Get a virus by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`GenealogyError::VirusNotFound`] if the virus doesn't exist.
    pub fn get(&self, id: &V::Id) -> Result<&V, V::Id> {
        Ok(self.store.require(id)?.virus())
    }

    /// Get a shared handle to a virus.
    ///
    /// The handle stays valid after the virus is removed from the genealogy.
    ///
    /// # Errors
    ///
    /// Returns [`GenealogyError::VirusNotFound`] if the virus doesn't exist.
    pub fn get_shared(&self, id: &V::Id) -> Result<Arc<V>, V::Id> {
        Ok(self.store.require(id)?.shared())
    }

    /// Identifiers of the direct parents of a virus, in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`GenealogyError::VirusNotFound`] if the virus doesn't exist.
    pub fn get_parents(&self, id: &V::Id) -> Result<Vec<V::Id>, V::Id> {
        Ok(self.store.require(id)?.parents.iter().cloned().collect())
    }

    /// Iterate over the direct children of a virus, in ascending identifier order.
    ///
    /// # Errors
    ///
    /// Returns [`GenealogyError::VirusNotFound`] if the virus doesn't exist.
    pub fn children(&self, id: &V::Id) -> Result<Children<'_, V>, V::Id> {
        let node = self.store.require(id)?;
        Ok(Children::new(node, &self.store))
    }

    /// Identifiers of the direct children of a virus, in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`GenealogyError::VirusNotFound`] if the virus doesn't exist.
    pub fn child_ids(&self, id: &V::Id) -> Result<Vec<V::Id>, V::Id> {
        Ok(self.store.require(id)?.children.iter().cloned().collect())
    }

    /// Number of live viruses, the stem included.
    pub fn virus_count(&self) -> usize {
        self.store.len()
    }

    /// Number of parent-child edges.
    pub fn edge_count(&self) -> usize {
        self.store.iter().map(|(_, node)| node.children.len()).sum()
    }

    /// Identifiers of all live viruses, in ascending order.
    pub fn ids(&self) -> impl DoubleEndedIterator<Item = &V::Id> + '_ {
        self.store.ids()
    }

    /// Create virus `id` descending from `parent_id`.
    ///
    /// # Errors
    ///
    /// - [`GenealogyError::VirusAlreadyCreated`] if `id` is taken.
    /// - [`GenealogyError::VirusNotFound`] if the parent doesn't exist.
    pub fn create(&mut self, id: V::Id, parent_id: &V::Id) -> Result<(), V::Id> {
        self.create_with_parents(id, std::slice::from_ref(parent_id))
    }

    /// Create virus `id` descending from every virus in `parent_ids`.
    ///
    /// Every parent is checked before anything changes: either the virus and
    /// all of its edges are created, or nothing is. Repeated parents collapse
    /// into a single edge.
    ///
    /// An empty `parent_ids` is handled according to
    /// [`GenealogyConfig::empty_parents`].
    ///
    /// # Errors
    ///
    /// - [`GenealogyError::VirusAlreadyCreated`] if `id` is taken.
    /// - [`GenealogyError::VirusNotFound`] naming the first missing parent.
    /// - [`GenealogyError::NoParents`] for an empty list under [`EmptyParentsPolicy::Reject`].
    pub fn create_with_parents(&mut self, id: V::Id, parent_ids: &[V::Id]) -> Result<(), V::Id> {
        debug!("Creating virus {id:?} with parents {parent_ids:?}");
        if self.store.contains(&id) {
            return Err(GenealogyError::VirusAlreadyCreated { id });
        }

        if let Some(missing) = parent_ids.iter().find(|p| !self.store.contains(p)) {
            return Err(GenealogyError::VirusNotFound {
                id: missing.clone(),
            });
        }

        if parent_ids.is_empty() {
            match self.config.empty_parents {
                EmptyParentsPolicy::Reject => return Err(GenealogyError::NoParents { id }),
                EmptyParentsPolicy::Allow => {
                    warn!("Virus {id:?} created without parents; connect it before relying on it")
                }
            }
        }

        // Validation is complete; nothing below can fail.
        let parents: BTreeSet<V::Id> = parent_ids.iter().cloned().collect();
        for parent_id in &parents {
            if let Some(parent) = self.store.get_mut(parent_id) {
                parent.children.insert(id.clone());
            }
        }

        trace!("Virus {id:?} linked to {} parent(s)", parents.len());
        self.store.insert(VirusNode::with_parents(id, parents));

        Ok(())
    }

    /// Add the edge `parent_id -> child_id` between two existing viruses.
    ///
    /// Adding an edge that already exists changes nothing. The caller must
    /// not close a cycle; only self-loops and edges into the stem are refused.
    ///
    /// # Errors
    ///
    /// - [`GenealogyError::VirusNotFound`] if either virus doesn't exist (child checked first).
    /// - [`GenealogyError::SelfLoop`] if both identifiers are the same.
    /// - [`GenealogyError::StemHasNoParents`] if the child is the stem.
    pub fn connect(&mut self, child_id: &V::Id, parent_id: &V::Id) -> Result<(), V::Id> {
        debug!("Connecting virus {child_id:?} to parent {parent_id:?}");
        self.store.require(child_id)?;
        self.store.require(parent_id)?;

        if child_id == parent_id {
            return Err(GenealogyError::SelfLoop {
                id: child_id.clone(),
            });
        }

        if *child_id == self.stem_id {
            return Err(GenealogyError::StemHasNoParents {
                parent: parent_id.clone(),
            });
        }

        let added = self
            .store
            .require_mut(parent_id)?
            .children
            .insert(child_id.clone());
        self.store
            .require_mut(child_id)?
            .parents
            .insert(parent_id.clone());

        if !added {
            trace!("Edge {parent_id:?} -> {child_id:?} already present");
        }

        Ok(())
    }

    /// Remove a virus and every descendant left without a parent.
    ///
    /// The cascade runs on an explicit work-list, so deep genealogies do not
    /// grow the call stack. A descendant that keeps at least one parent
    /// outside the removed set survives.
    ///
    /// # Returns
    ///
    /// Identifiers of every removed virus, in ascending order.
    ///
    /// # Errors
    ///
    /// - [`GenealogyError::VirusNotFound`] if the virus doesn't exist.
    /// - [`GenealogyError::TriedToRemoveStemVirus`] if `id` is the stem.
    pub fn remove(&mut self, id: &V::Id) -> Result<Vec<V::Id>, V::Id> {
        debug!("Removing virus {id:?}");
        self.store.require(id)?;
        if *id == self.stem_id {
            return Err(GenealogyError::TriedToRemoveStemVirus { id: id.clone() });
        }

        let mut pending = vec![id.clone()];
        let mut removed = Vec::new();

        while let Some(current) = pending.pop() {
            // Taking the node out snapshots its adjacency.
            let Some(node) = self.store.remove(&current) else {
                continue;
            };

            for child_id in &node.children {
                let Some(child) = self.store.get_mut(child_id) else {
                    continue;
                };
                child.parents.remove(&current);
                if child.parents.is_empty() && *child_id != self.stem_id {
                    trace!("Virus {child_id:?} lost its last parent {current:?}");
                    pending.push(child_id.clone());
                }
            }

            for parent_id in &node.parents {
                if let Some(parent) = self.store.get_mut(parent_id) {
                    parent.children.remove(&current);
                }
            }

            removed.push(current);
        }

        removed.sort();
        if removed.len() > self.config.cascade_report_threshold {
            info!(
                "Removing virus {id:?} cascaded to {} viruses",
                removed.len()
            );
        }
        trace!("Removed {} virus(es) starting at {id:?}", removed.len());

        Ok(removed)
    }

    /// Ancestors of a virus in breadth-first order, nearest first.
    ///
    /// See [`algorithms::bfs`] for the meaning of `max_depth`.
    pub fn ancestors(&self, id: &V::Id, max_depth: Option<usize>) -> Result<Vec<V::Id>, V::Id> {
        algorithms::bfs(self, id, Direction::Parents, max_depth)
    }

    /// Descendants of a virus in breadth-first order, nearest first.
    ///
    /// See [`algorithms::bfs`] for the meaning of `max_depth`.
    pub fn descendants(&self, id: &V::Id, max_depth: Option<usize>) -> Result<Vec<V::Id>, V::Id> {
        algorithms::bfs(self, id, Direction::Children, max_depth)
    }

    pub(crate) fn store(&self) -> &NodeStore<V> {
        &self.store
    }

    #[cfg(test)]
    pub(crate) fn store_mut(&mut self) -> &mut NodeStore<V> {
        &mut self.store
    }
}

impl<V: Virus> Index<&V::Id> for VirusGenealogy<V> {
    type Output = V;

    /// # Panics
    ///
    /// Panics if the virus doesn't exist; use [`VirusGenealogy::get`] to handle that case.
    fn index(&self, id: &V::Id) -> &V {
        match self.get(id) {
            Ok(virus) => virus,
            Err(err) => panic!("{err}"),
        }
    }
}
