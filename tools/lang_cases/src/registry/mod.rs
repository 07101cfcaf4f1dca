//! The case registry.
//!
//! Cases live in a `Vec` in authoring order. Two indices sit beside it:
//! a `BTreeMap` keyed by name (duplicate detection and lexicographic
//! iteration) and an `FxHashMap` keyed by slug (collision detection).
//! Iteration order is chosen once per registry by its [`OrderPolicy`] and is
//! the same for every consumer.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::iter::FusedIterator;
use std::slice;

use rustc_hash::FxHashMap;

use crate::case::TestCase;
use crate::error::RegistryError;

/// Order in which [`CaseRegistry::cases`] yields cases.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OrderPolicy {
    /// Registration order.
    #[default]
    Insertion,
    /// Byte-wise ascending order of case names.
    Lexicographic,
}

/// Ordered, name-keyed collection of [`TestCase`]s with unique slugs.
#[derive(Clone, Debug, Default)]
pub struct CaseRegistry {
    order: OrderPolicy,
    cases: Vec<TestCase>,
    by_name: BTreeMap<String, usize>,
    by_slug: FxHashMap<String, usize>,
}

impl CaseRegistry {
    /// Create an empty registry with the given iteration order.
    pub fn new(order: OrderPolicy) -> Self {
        CaseRegistry {
            order,
            ..Self::default()
        }
    }

    /// Build a registry from `(name, source)` pairs, stopping at the first
    /// rejected case.
    pub fn from_cases<I, N, S>(order: OrderPolicy, cases: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<String>,
    {
        let mut registry = CaseRegistry::new(order);
        for (name, source) in cases {
            registry.register(name, source)?;
        }
        Ok(registry)
    }

    /// Add a case.
    ///
    /// Rejects a name that is already registered, a name whose slug is empty,
    /// and a name whose slug is already taken by a different case. A rejected
    /// case leaves the registry unchanged.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        source: impl Into<String>,
    ) -> Result<&TestCase, RegistryError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(RegistryError::DuplicateCaseName { name });
        }

        let case = TestCase::new(name, source.into());
        if case.slug().is_empty() {
            return Err(RegistryError::EmptySlug {
                name: case.name().to_owned(),
            });
        }
        if let Some(&existing) = self.by_slug.get(case.slug()) {
            return Err(RegistryError::SlugCollision {
                name: case.name().to_owned(),
                existing: self.cases[existing].name().to_owned(),
                slug: case.slug().to_owned(),
            });
        }

        let index = self.cases.len();
        self.by_name.insert(case.name().to_owned(), index);
        self.by_slug.insert(case.slug().to_owned(), index);
        self.cases.push(case);
        Ok(&self.cases[index])
    }

    /// Iterate over every case in this registry's [`OrderPolicy`].
    ///
    /// Each call starts a fresh pass.
    pub fn cases(&self) -> Cases<'_> {
        let inner = match self.order {
            OrderPolicy::Insertion => CasesInner::Insertion(self.cases.iter()),
            OrderPolicy::Lexicographic => CasesInner::Lexicographic {
                cases: &self.cases,
                names: self.by_name.values(),
            },
        };
        Cases { inner }
    }

    /// Look up a case by name.
    pub fn get(&self, name: &str) -> Option<&TestCase> {
        self.by_name.get(name).map(|&index| &self.cases[index])
    }

    /// Look up a case by slug.
    pub fn get_by_slug(&self, slug: &str) -> Option<&TestCase> {
        self.by_slug.get(slug).map(|&index| &self.cases[index])
    }

    pub fn order(&self) -> OrderPolicy {
        self.order
    }

    /// The same cases iterated under a different policy.
    #[must_use]
    pub fn with_order(mut self, order: OrderPolicy) -> Self {
        self.order = order;
        self
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

impl<'a> IntoIterator for &'a CaseRegistry {
    type Item = &'a TestCase;
    type IntoIter = Cases<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases()
    }
}

/// Iterator returned by [`CaseRegistry::cases`].
#[derive(Clone, Debug)]
pub struct Cases<'a> {
    inner: CasesInner<'a>,
}

#[derive(Clone, Debug)]
enum CasesInner<'a> {
    Insertion(slice::Iter<'a, TestCase>),
    Lexicographic {
        cases: &'a [TestCase],
        names: btree_map::Values<'a, String, usize>,
    },
}

impl<'a> Iterator for Cases<'a> {
    type Item = &'a TestCase;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            CasesInner::Insertion(iter) => iter.next(),
            CasesInner::Lexicographic { cases, names } => {
                let cases: &'a [TestCase] = *cases;
                names.next().map(|&index| &cases[index])
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            CasesInner::Insertion(iter) => iter.size_hint(),
            CasesInner::Lexicographic { names, .. } => names.size_hint(),
        }
    }
}

impl ExactSizeIterator for Cases<'_> {}

impl FusedIterator for Cases<'_> {}
