//! Error types for genealogy operations.
//!
//! Every fallible operation returns [`Result<T, Id>`] where `Id` is the
//! identifier type of the genealogy, so the offending identifier travels
//! with the error.

use thiserror::Error;

/// Result type alias for genealogy operations.
///
/// The identifier defaults to `String` for failures that do not involve a
/// genealogy at all, such as parsing a configuration.
pub type Result<T, Id = String> = std::result::Result<T, GenealogyError<Id>>;

/// Error type for all genealogy operations.
///
/// Validation happens before mutation, so receiving any of these means the
/// genealogy is exactly as it was before the call.
#[derive(Error, Debug)]
pub enum GenealogyError<Id = String> {
    /// A referenced virus is not in the genealogy
    #[error("Virus not found: {id:?}")]
    VirusNotFound {
        /// Identifier that has no virus
        id: Id,
    },

    /// Creation requested for an identifier that is already taken
    #[error("Virus already created: {id:?}")]
    VirusAlreadyCreated {
        /// Identifier that is already in use
        id: Id,
    },

    /// Removal requested for the stem virus
    #[error("Tried to remove stem virus: {id:?}")]
    TriedToRemoveStemVirus {
        /// The stem identifier
        id: Id,
    },

    /// Creation with an empty parent list while the policy rejects it
    #[error("Virus {id:?} must be created with at least one parent")]
    NoParents {
        /// Identifier of the virus that was not created
        id: Id,
    },

    /// An edge from a virus to itself
    #[error("Virus {id:?} cannot be its own parent")]
    SelfLoop {
        /// The virus named on both ends of the edge
        id: Id,
    },

    /// An edge that would give the stem a parent
    #[error("Stem virus cannot have parents (attempted parent: {parent:?})")]
    StemHasNoParents {
        /// The virus that was offered as the stem's parent
        parent: Id,
    },

    /// Configuration could not be read
    #[error("Configuration error: {message}")]
    Config {
        /// Detailed error message
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Serialization error during export
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl<Id> GenealogyError<Id> {
    /// Create a configuration error from a message and optional source.
    pub fn config<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// The identifier this error is about, if any.
    pub fn id(&self) -> Option<&Id> {
        match self {
            Self::VirusNotFound { id }
            | Self::VirusAlreadyCreated { id }
            | Self::TriedToRemoveStemVirus { id }
            | Self::NoParents { id }
            | Self::SelfLoop { id } => Some(id),
            Self::StemHasNoParents { parent } => Some(parent),
            Self::Config { .. } | Self::Serialization { .. } => None,
        }
    }
}
