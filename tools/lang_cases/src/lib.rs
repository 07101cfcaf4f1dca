//! Lang Case Catalog
//!
//! The single source of truth for Lang source snippets. Every snippet is
//! registered once under a human-readable name; fixture files, generated unit
//! tests and generated benchmarks are all derived from the same registry.
//!
//! # Architecture
//!
//! ```text
//! name ──► slugify() ──► slug      (file stem + identifier)
//!   │
//!   └───► Outcome::classify() ──► Pass | Fail
//!
//! CaseRegistry::register(name, source)
//!     │  rejects duplicate names, slug collisions, empty slugs
//!     ▼
//! CaseRegistry::cases() ──► &TestCase in the registry's OrderPolicy
//! ```
//!
//! The registry is built once (see [`catalog::builtin`]) and only read
//! afterwards. Slug and outcome are computed at registration and stored on the
//! case, so consumers never re-derive them.

pub mod case;
pub mod catalog;
pub mod error;
pub mod outcome;
pub mod registry;
pub mod slug;

pub use case::TestCase;
pub use error::RegistryError;
pub use outcome::{Outcome, FAILURE_SUFFIX};
pub use registry::{CaseRegistry, Cases, OrderPolicy};
pub use slug::slugify;
