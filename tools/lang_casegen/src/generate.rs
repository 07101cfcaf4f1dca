//! One generator run: build the catalog, then emit what was asked for.

use std::io::Write;

use lang_cases::{catalog, CaseRegistry};

use crate::config::GenerateConfig;
use crate::emit::{
    render_bench_module, render_manifest, render_test_module, write_fixtures, FixtureReport,
};
use crate::error::GenerateError;

/// Run the generator over the builtin catalog.
///
/// Printed modules are written to `out`. Returns the fixture report when
/// fixtures were requested.
pub fn generate(
    config: &GenerateConfig,
    out: &mut impl Write,
) -> Result<Option<FixtureReport>, GenerateError> {
    let registry = catalog::builtin(config.order)?;
    generate_from(&registry, config, out)
}

/// Run the generator over an arbitrary registry.
///
/// Fixtures are written first so a filesystem failure aborts before anything
/// reaches `out`. When several modules are requested they are printed in a
/// fixed order: tests, benches, manifest.
pub fn generate_from(
    registry: &CaseRegistry,
    config: &GenerateConfig,
    out: &mut impl Write,
) -> Result<Option<FixtureReport>, GenerateError> {
    tracing::debug!(cases = registry.len(), order = ?registry.order(), "generating");

    let report = match &config.output_dir {
        Some(dir) => Some(write_fixtures(dir, registry, &config.fixtures)?),
        None => None,
    };

    if config.print_tests {
        out.write_all(render_test_module(registry, &config.modules).as_bytes())?;
    }
    if config.print_benches {
        out.write_all(render_bench_module(registry, &config.modules).as_bytes())?;
    }
    if config.print_manifest {
        out.write_all(render_manifest(registry)?.as_bytes())?;
    }
    out.flush()?;

    Ok(report)
}
