//! A single registered case.

use serde::Serialize;

use crate::outcome::Outcome;
use crate::slug::slugify;

/// A named Lang snippet with its derived slug and expected outcome.
///
/// Only [`CaseRegistry`](crate::CaseRegistry) creates these, so the slug is
/// always unique within the registry that owns the case.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TestCase {
    name: String,
    slug: String,
    expected: Outcome,
    #[serde(skip)]
    source: String,
}

impl TestCase {
    pub(crate) fn new(name: String, source: String) -> Self {
        let slug = slugify(&name);
        let expected = Outcome::classify(&name);
        TestCase {
            name,
            slug,
            expected,
            source,
        }
    }

    /// Human-readable name, the registry key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lang source text. Opaque to this crate.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// File stem and function name derived from [`name`](Self::name).
    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn expected(&self) -> Outcome {
        self.expected
    }
}
