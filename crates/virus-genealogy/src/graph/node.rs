//! A single virus together with its adjacency.

use crate::virus::Virus;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Node record held by the store.
///
/// Children and parents are identifier sets, so edges are unique and come
/// back in identifier order.
#[derive(Debug)]
pub(crate) struct VirusNode<V: Virus> {
    payload: Arc<V>,
    pub(crate) children: BTreeSet<V::Id>,
    pub(crate) parents: BTreeSet<V::Id>,
}

impl<V: Virus> VirusNode<V> {
    /// Build the payload for `id`, with no edges yet.
    pub(crate) fn new(id: V::Id) -> Self {
        Self {
            payload: Arc::new(V::new(id)),
            children: BTreeSet::new(),
            parents: BTreeSet::new(),
        }
    }

    pub(crate) fn with_parents(id: V::Id, parents: BTreeSet<V::Id>) -> Self {
        Self {
            parents,
            ..Self::new(id)
        }
    }

    pub(crate) fn id(&self) -> &V::Id {
        self.payload.id()
    }

    pub(crate) fn virus(&self) -> &V {
        &self.payload
    }

    pub(crate) fn shared(&self) -> Arc<V> {
        Arc::clone(&self.payload)
    }
}
