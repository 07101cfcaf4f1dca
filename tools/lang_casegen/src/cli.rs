//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use lang_cases::OrderPolicy;

use crate::config::{
    BenchMode, FixtureConfig, GenerateConfig, ModuleConfig, DEFAULT_EXTENSION, DEFAULT_INTERPRETER,
    DEFAULT_OUTPUT_DIR,
};

/// Generate Lang fixtures, tests and benchmarks from the case catalog.
#[derive(Debug, Parser)]
#[command(name = "lang-casegen", version)]
#[command(about = "Generate Lang fixtures, tests and benchmarks from the case catalog")]
#[expect(
    clippy::struct_excessive_bools,
    reason = "Cli has standard CLI flag bool fields"
)]
pub struct Cli {
    /// Write one fixture file per case into the output directory.
    #[arg(long, alias = "generate_files")]
    pub generate_files: bool,

    /// Print the generated unit test module to stdout.
    #[arg(long, alias = "print_tests")]
    pub print_tests: bool,

    /// Print the generated criterion bench target to stdout.
    #[arg(long, alias = "print_lang_benches")]
    pub print_benches: bool,

    /// Print a JSON manifest of case names, slugs and expected outcomes.
    #[arg(long)]
    pub print_manifest: bool,

    /// Fixture output directory.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Order of cases in every artifact.
    #[arg(long, value_enum, default_value_t = OrderArg::Insertion)]
    pub order: OrderArg,

    /// What each generated benchmark measures.
    #[arg(long, value_enum, default_value_t = BenchModeArg::Construct)]
    pub bench_mode: BenchModeArg,

    /// Fixture file extension.
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Interpreter type used by generated tests and benches.
    #[arg(long, default_value = DEFAULT_INTERPRETER)]
    pub interpreter: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// Authoring order of the catalog.
    Insertion,
    /// Sorted by case name.
    Lexicographic,
}

impl From<OrderArg> for OrderPolicy {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Insertion => OrderPolicy::Insertion,
            OrderArg::Lexicographic => OrderPolicy::Lexicographic,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BenchModeArg {
    /// Measure interpreter construction.
    Construct,
    /// Measure construction and a full run.
    ConstructAndRun,
}

impl From<BenchModeArg> for BenchMode {
    fn from(arg: BenchModeArg) -> Self {
        match arg {
            BenchModeArg::Construct => BenchMode::Construct,
            BenchModeArg::ConstructAndRun => BenchMode::ConstructAndRun,
        }
    }
}

impl Cli {
    pub fn into_config(self) -> GenerateConfig {
        GenerateConfig {
            order: self.order.into(),
            output_dir: self.generate_files.then_some(self.output_dir),
            print_tests: self.print_tests,
            print_benches: self.print_benches,
            print_manifest: self.print_manifest,
            fixtures: FixtureConfig {
                extension: self.extension,
                ..FixtureConfig::default()
            },
            modules: ModuleConfig {
                interpreter: self.interpreter,
                bench_mode: self.bench_mode.into(),
                ..ModuleConfig::default()
            },
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> GenerateConfig {
        let argv = std::iter::once("lang-casegen").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap().into_config()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_flags_means_no_work() {
        let config = parse(&[]);
        assert!(!config.has_work());
        assert_eq!(config.order, OrderPolicy::Insertion);
    }

    #[test]
    fn generate_files_uses_default_dir() {
        let config = parse(&["--generate-files"]);
        assert_eq!(config.output_dir, Some(PathBuf::from("scripts")));
    }

    #[test]
    fn output_dir_alone_writes_nothing() {
        let config = parse(&["--output-dir", "out"]);
        assert_eq!(config.output_dir, None);
    }

    #[test]
    fn flags_combine() {
        let config = parse(&[
            "--print-tests",
            "--print-benches",
            "--generate-files",
            "--output-dir",
            "fixtures",
            "--order",
            "lexicographic",
            "--bench-mode",
            "construct-and-run",
        ]);
        assert!(config.print_tests);
        assert!(config.print_benches);
        assert!(!config.print_manifest);
        assert_eq!(config.output_dir, Some(PathBuf::from("fixtures")));
        assert_eq!(config.order, OrderPolicy::Lexicographic);
        assert_eq!(config.modules.bench_mode, BenchMode::ConstructAndRun);
    }

    #[test]
    fn legacy_underscore_flags() {
        let config = parse(&["--print_tests", "--print_lang_benches", "--generate_files"]);
        assert!(config.print_tests);
        assert!(config.print_benches);
        assert!(config.output_dir.is_some());
    }

    #[test]
    fn unknown_order_is_rejected() {
        let argv = ["lang-casegen", "--order", "random"];
        assert!(Cli::try_parse_from(argv).is_err());
    }
}
