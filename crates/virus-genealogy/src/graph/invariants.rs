//! Structural self-check of a genealogy.

use super::VirusGenealogy;
use crate::virus::Virus;
use std::fmt::Debug;
use thiserror::Error;

/// A broken structural rule found by [`VirusGenealogy::check_invariants`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation<Id: Debug> {
    /// The stem is not in the store
    #[error("stem {stem:?} is missing")]
    MissingStem {
        /// Stem identifier
        stem: Id,
    },

    /// The stem has parents
    #[error("stem {stem:?} has parents {parents:?}")]
    StemHasParents {
        /// Stem identifier
        stem: Id,
        /// Parents found on the stem
        parents: Vec<Id>,
    },

    /// A non-stem virus has no parents
    #[error("virus {id:?} has no parents")]
    Orphan {
        /// The orphaned virus
        id: Id,
    },

    /// A virus lists itself as parent or child
    #[error("virus {id:?} is its own relative")]
    SelfLoop {
        /// The looping virus
        id: Id,
    },

    /// An adjacency entry names a virus that is not in the store
    #[error("virus {id:?} refers to missing virus {missing:?}")]
    Dangling {
        /// Virus holding the reference
        id: Id,
        /// Identifier with no virus behind it
        missing: Id,
    },

    /// An edge recorded on only one of its two ends
    #[error("edge {parent:?} -> {child:?} is recorded on one side only")]
    OneSidedEdge {
        /// Parent end of the edge
        parent: Id,
        /// Child end of the edge
        child: Id,
    },
}

impl<V: Virus> VirusGenealogy<V> {
    /// Check every structural rule of the genealogy.
    ///
    /// Returns an empty list for every genealogy built through the public
    /// API, with one exception: a virus created without parents under
    /// [`EmptyParentsPolicy::Allow`](crate::EmptyParentsPolicy::Allow) shows
    /// up as [`InvariantViolation::Orphan`] until it is connected.
    pub fn check_invariants(&self) -> Vec<InvariantViolation<V::Id>> {
        let store = self.store();
        let stem = self.stem_id();
        let mut violations = Vec::new();

        if !store.contains(stem) {
            violations.push(InvariantViolation::MissingStem { stem: stem.clone() });
        }

        for (id, node) in store.iter() {
            if id == stem {
                if !node.parents.is_empty() {
                    violations.push(InvariantViolation::StemHasParents {
                        stem: id.clone(),
                        parents: node.parents.iter().cloned().collect(),
                    });
                }
            } else if node.parents.is_empty() {
                violations.push(InvariantViolation::Orphan { id: id.clone() });
            }

            if node.children.contains(id) || node.parents.contains(id) {
                violations.push(InvariantViolation::SelfLoop { id: id.clone() });
            }

            for child_id in &node.children {
                match store.get(child_id) {
                    None => violations.push(InvariantViolation::Dangling {
                        id: id.clone(),
                        missing: child_id.clone(),
                    }),
                    Some(child) if !child.parents.contains(id) => {
                        violations.push(InvariantViolation::OneSidedEdge {
                            parent: id.clone(),
                            child: child_id.clone(),
                        })
                    }
                    Some(_) => {}
                }
            }

            for parent_id in &node.parents {
                match store.get(parent_id) {
                    None => violations.push(InvariantViolation::Dangling {
                        id: id.clone(),
                        missing: parent_id.clone(),
                    }),
                    Some(parent) if !parent.children.contains(id) => {
                        violations.push(InvariantViolation::OneSidedEdge {
                            parent: parent_id.clone(),
                            child: id.clone(),
                        })
                    }
                    Some(_) => {}
                }
            }
        }

        violations
    }
}
