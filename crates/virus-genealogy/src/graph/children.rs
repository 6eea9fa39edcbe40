//! Ordered iteration over the direct children of a virus.

use super::VirusNode;
use crate::store::NodeStore;
use crate::virus::Virus;
use std::collections::btree_set;
use std::iter::FusedIterator;

/// Iterator over the children of one virus, in ascending identifier order.
///
/// Both ends can be consumed: [`next`](Iterator::next) walks forward from
/// the first child, [`next_back`](DoubleEndedIterator::next_back) walks
/// backward from the last. The iterator borrows the genealogy, so the child
/// set cannot change underneath it. Ask for a new one to start over.
pub struct Children<'a, V: Virus> {
    ids: btree_set::Iter<'a, V::Id>,
    store: &'a NodeStore<V>,
}

impl<'a, V: Virus> Children<'a, V> {
    pub(crate) fn new(node: &'a VirusNode<V>, store: &'a NodeStore<V>) -> Self {
        Self {
            ids: node.children.iter(),
            store,
        }
    }
}

impl<V: Virus> Clone for Children<'_, V> {
    fn clone(&self) -> Self {
        Self {
            ids: self.ids.clone(),
            store: self.store,
        }
    }
}

impl<'a, V: Virus> Iterator for Children<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        let store = self.store;
        self.ids
            .find_map(|id| store.get(id))
            .map(VirusNode::virus)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<'a, V: Virus> DoubleEndedIterator for Children<'a, V> {
    fn next_back(&mut self) -> Option<&'a V> {
        let store = self.store;
        self.ids
            .by_ref()
            .rev()
            .find_map(|id| store.get(id))
            .map(VirusNode::virus)
    }
}

// Every child id resolves in the store while adjacency is consistent.
impl<V: Virus> ExactSizeIterator for Children<'_, V> {}

impl<V: Virus> FusedIterator for Children<'_, V> {}
