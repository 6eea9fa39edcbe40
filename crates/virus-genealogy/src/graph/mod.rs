//! Core genealogy types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`VirusGenealogy`]: The genealogy interface
//! - [`Children`]: Ordered iteration over a virus's children
//! - [`algorithms`]: Lineage traversal (ancestors, descendants)

mod children;
mod genealogy;
mod invariants;
mod node;
pub mod algorithms;

pub use algorithms::Direction;
pub use children::Children;
pub use genealogy::VirusGenealogy;
pub use invariants::InvariantViolation;
pub(crate) use node::VirusNode;
