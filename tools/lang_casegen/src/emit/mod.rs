//! Artifact emitters.
//!
//! Each emitter reads a [`CaseRegistry`](lang_cases::CaseRegistry) and
//! produces one artifact:
//! - `files`: one fixture file per case on disk
//! - `test_module`: a `#[cfg(test)]` module with one `#[test]` per case
//! - `bench_module`: a criterion bench target with one benchmark per case
//! - `manifest`: a JSON index of names, slugs and expected outcomes
//!
//! The module renderers are pure and return `String`; only `files` touches the
//! filesystem.

mod bench_module;
mod files;
mod manifest;
mod test_module;

pub use bench_module::render_bench_module;
pub use files::{fixture_contents, fixture_path, write_fixtures, FixtureReport};
pub use manifest::render_manifest;
pub use test_module::render_test_module;
