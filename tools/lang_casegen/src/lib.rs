//! Lang Case Generator
//!
//! Derives three artifacts from the [`lang_cases`] catalog:
//!
//! ```text
//! CaseRegistry
//!     ├──► write_fixtures()       ──► <dir>/<slug>.lang
//!     ├──► render_test_module()   ──► #[cfg(test)] mod tests { ... }
//!     └──► render_bench_module()  ──► criterion_group!/criterion_main!
//! ```
//!
//! Renderers are pure functions over an immutable registry; rendering twice
//! gives byte-identical output.
//!
//! # Tracing
//!
//! Enable with `RUST_LOG=lang_casegen=debug`. Output goes to stderr.

pub mod cli;
pub mod config;
pub mod emit;
pub mod emitter;
pub mod error;
pub mod generate;
pub mod literal;
pub mod tracing_setup;

pub use config::{BenchMode, FixtureConfig, GenerateConfig, ModuleConfig};
pub use emit::{
    fixture_contents, fixture_path, render_bench_module, render_manifest, render_test_module,
    write_fixtures, FixtureReport,
};
pub use error::{EmitError, GenerateError};
pub use generate::{generate, generate_from};
pub use tracing_setup::init_tracing;
