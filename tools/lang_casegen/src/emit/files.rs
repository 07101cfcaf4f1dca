//! Fixture file emission.
//!
//! Writes `<dir>/<slug>.<ext>` for every case: the generated header line,
//! then the case source verbatim. The directory is created if missing.
//! Anything else already in the directory is left alone.

use std::fs;
use std::path::{Path, PathBuf};

use lang_cases::{CaseRegistry, TestCase};

use crate::config::FixtureConfig;
use crate::error::EmitError;

/// Fixture files written by [`write_fixtures`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixtureReport {
    pub dir: PathBuf,
    /// Written paths, in registry order.
    pub written: Vec<PathBuf>,
    /// Whether `dir` had to be created.
    pub created_dir: bool,
}

/// Path of the fixture file for `case` inside `dir`.
pub fn fixture_path(dir: &Path, case: &TestCase, config: &FixtureConfig) -> PathBuf {
    dir.join(format!("{}.{}", case.slug(), config.extension))
}

/// Full contents of the fixture file for `case`.
pub fn fixture_contents(case: &TestCase, config: &FixtureConfig) -> String {
    let mut contents = String::with_capacity(config.header.len() + 1 + case.source().len());
    contents.push_str(&config.header);
    contents.push('\n');
    contents.push_str(case.source());
    contents
}

/// Write one fixture file per case into `dir`.
///
/// Stops at the first case that cannot be written; the error names it.
/// Re-running over an existing directory rewrites the same files with the
/// same bytes.
#[tracing::instrument(level = "debug", skip_all, fields(dir = %dir.display(), cases = registry.len()))]
pub fn write_fixtures(
    dir: &Path,
    registry: &CaseRegistry,
    config: &FixtureConfig,
) -> Result<FixtureReport, EmitError> {
    let created_dir = !dir.is_dir();
    if created_dir {
        tracing::info!(dir = %dir.display(), "creating fixture directory");
    }
    fs::create_dir_all(dir).map_err(|source| EmitError::DirectoryCreation {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(registry.len());
    for case in registry.cases() {
        let path = fixture_path(dir, case, config);
        fs::write(&path, fixture_contents(case, config)).map_err(|source| {
            EmitError::FileWrite {
                case: case.name().to_string(),
                path: path.clone(),
                source,
            }
        })?;
        tracing::debug!(
            case = case.name(),
            expected = %case.expected(),
            path = %path.display(),
            "wrote fixture"
        );
        written.push(path);
    }

    tracing::info!(count = written.len(), dir = %dir.display(), "fixtures written");
    Ok(FixtureReport {
        dir: dir.to_path_buf(),
        written,
        created_dir,
    })
}
