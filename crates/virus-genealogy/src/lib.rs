//! # virus-genealogy
//!
//! An in-memory genealogy of viruses: a directed acyclic graph where every
//! virus may descend from several parents and give rise to several children,
//! all of it rooted at a single stem virus that can never be removed.
//!
//! ## Core Principles
//!
//! - **Stem First**: the stem exists from construction until the genealogy is dropped
//! - **No Orphans**: a virus that loses its last parent is removed with it
//! - **All or Nothing**: a failed call leaves the genealogy untouched
//! - **Deterministic**: parents and children always come back in identifier order
//!
//! ## Architecture
//!
//! ```text
//! Application (payload type, identifiers)
//!     ↓
//! VirusGenealogy (create, connect, remove, queries)
//!     ↓
//! Traversal & Export (ancestors, descendants, DOT, JSON)
//!     ↓
//! Node Store (identifier-keyed arena of virus nodes)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use virus_genealogy::{SimpleVirus, VirusGenealogy};
//!
//! # fn example() -> virus_genealogy::Result<(), u32> {
//! let mut genealogy: VirusGenealogy<SimpleVirus<u32>> = VirusGenealogy::new(0);
//! genealogy.create(1, &0)?;
//! genealogy.create(2, &0)?;
//! genealogy.create_with_parents(3, &[1, 2])?;
//!
//! assert_eq!(genealogy.get_parents(&3)?, vec![1, 2]);
//!
//! // 3 survives: it still descends from 2.
//! genealogy.remove(&1)?;
//! assert!(genealogy.exists(&3));
//!
//! // Removing 2 takes 3 with it.
//! assert_eq!(genealogy.remove(&2)?, vec![2, 3]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod export;
pub mod graph;
mod store;
pub mod virus;

// Re-export main types
pub use config::{EmptyParentsPolicy, GenealogyConfig};
pub use error::{GenealogyError, Result};
pub use graph::{Children, Direction, InvariantViolation, VirusGenealogy};
pub use virus::{SimpleVirus, Virus};
