//! The payload contract for viruses kept in a genealogy.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// An entity that can live in a [`VirusGenealogy`](crate::VirusGenealogy).
///
/// The genealogy only ever builds a virus from its identifier and reads that
/// identifier back. Every other field belongs to the application.
pub trait Virus {
    /// Identifier type. Its ordering drives every ordered query.
    type Id: Ord + Clone + Debug;

    /// Build a fresh virus for `id`.
    fn new(id: Self::Id) -> Self;

    /// The identifier this virus was built with.
    fn id(&self) -> &Self::Id;
}

/// A virus that carries nothing but its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SimpleVirus<Id> {
    id: Id,
}

impl<Id: Ord + Clone + Debug> Virus for SimpleVirus<Id> {
    type Id = Id;

    fn new(id: Id) -> Self {
        Self { id }
    }

    fn id(&self) -> &Id {
        &self.id
    }
}
