//! Registration errors.

use thiserror::Error;

/// A case that cannot be added to a [`CaseRegistry`](crate::CaseRegistry).
///
/// All variants are fatal: a rejected case means the catalog itself is wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("duplicate case name `{name}`")]
    DuplicateCaseName { name: String },

    #[error("case `{name}` slugifies to `{slug}`, already used by case `{existing}`")]
    SlugCollision {
        name: String,
        existing: String,
        slug: String,
    },

    #[error("case `{name}` has no letters or digits to build a slug from")]
    EmptySlug { name: String },
}

impl RegistryError {
    /// Name of the case whose registration failed.
    pub fn case_name(&self) -> &str {
        match self {
            RegistryError::DuplicateCaseName { name }
            | RegistryError::SlugCollision { name, .. }
            | RegistryError::EmptySlug { name } => name,
        }
    }
}
