//! Generator configuration.
//!
//! Defaults reproduce the layout the Lang repository expects: fixtures in
//! `scripts/*.lang`, tests and benches calling `lang::lang::Lang`.

use std::path::PathBuf;

use lang_cases::OrderPolicy;

/// First line of every generated artifact.
pub const GENERATED_HEADER: &str =
    "// This file is auto-generated. Please do not edit it manually.";

/// Fixture directory used when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "scripts";

/// Lang source file extension.
pub const DEFAULT_EXTENSION: &str = "lang";

/// Path of the interpreter type in generated code.
pub const DEFAULT_INTERPRETER: &str = "lang::lang::Lang";

/// Name of the `criterion_group!` in the generated bench module.
pub const DEFAULT_BENCH_GROUP: &str = "lang_benches";

/// Name of the generated `#[cfg(test)]` module.
pub const DEFAULT_TEST_MODULE: &str = "tests";

/// Fixture file settings.
#[derive(Clone, Debug)]
pub struct FixtureConfig {
    pub header: String,
    /// Extension without the leading dot.
    pub extension: String,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        FixtureConfig {
            header: GENERATED_HEADER.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

/// What a generated benchmark measures.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum BenchMode {
    /// `Lang::new(..)` only.
    #[default]
    Construct,
    /// `Lang::new(..)` followed by `run()`.
    ConstructAndRun,
}

/// Settings shared by the test and bench module renderers.
#[derive(Clone, Debug)]
pub struct ModuleConfig {
    pub header: String,
    /// Fully qualified interpreter type, e.g. `lang::lang::Lang`.
    pub interpreter: String,
    pub test_module: String,
    pub bench_group: String,
    pub bench_mode: BenchMode,
}

impl ModuleConfig {
    /// Last path segment of [`interpreter`](Self::interpreter).
    pub fn interpreter_type(&self) -> &str {
        self.interpreter
            .rsplit("::")
            .next()
            .unwrap_or(&self.interpreter)
    }
}

impl Default for ModuleConfig {
    fn default() -> Self {
        ModuleConfig {
            header: GENERATED_HEADER.to_string(),
            interpreter: DEFAULT_INTERPRETER.to_string(),
            test_module: DEFAULT_TEST_MODULE.to_string(),
            bench_group: DEFAULT_BENCH_GROUP.to_string(),
            bench_mode: BenchMode::default(),
        }
    }
}

/// Everything one generator invocation needs.
#[derive(Clone, Debug)]
pub struct GenerateConfig {
    pub order: OrderPolicy,
    /// Write fixtures here, if set.
    pub output_dir: Option<PathBuf>,
    pub print_tests: bool,
    pub print_benches: bool,
    pub print_manifest: bool,
    pub fixtures: FixtureConfig,
    pub modules: ModuleConfig,
}

impl GenerateConfig {
    /// `true` if at least one artifact was requested.
    pub fn has_work(&self) -> bool {
        self.output_dir.is_some() || self.print_tests || self.print_benches || self.print_manifest
    }
}

impl Default for GenerateConfig {
    fn default() -> Self {
        GenerateConfig {
            order: OrderPolicy::default(),
            output_dir: None,
            print_tests: false,
            print_benches: false,
            print_manifest: false,
            fixtures: FixtureConfig::default(),
            modules: ModuleConfig::default(),
        }
    }
}
