//! End-to-end generator runs over small registries and the builtin catalog.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::fs;
use std::path::PathBuf;

use lang_cases::{catalog, CaseRegistry, OrderPolicy, RegistryError};
use lang_casegen::{generate_from, GenerateConfig, GenerateError};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn run(registry: &CaseRegistry, config: &GenerateConfig) -> String {
    let mut out = Vec::new();
    generate_from(registry, config, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn print_everything() -> GenerateConfig {
    GenerateConfig {
        print_tests: true,
        print_benches: true,
        print_manifest: true,
        ..GenerateConfig::default()
    }
}

#[test]
fn single_passing_case_end_to_end() {
    let dir = tempdir().unwrap();
    let registry = CaseRegistry::from_cases(
        OrderPolicy::Insertion,
        [("i64 Variable declaration and assignment", "let i: i64 = 0;")],
    )
    .unwrap();
    let config = GenerateConfig {
        output_dir: Some(dir.path().to_path_buf()),
        ..print_everything()
    };

    let mut out = Vec::new();
    let report = generate_from(&registry, &config, &mut out)
        .unwrap()
        .expect("fixtures were requested");
    let printed = String::from_utf8(out).unwrap();

    let fixture = dir.path().join("i64_variable_declaration_and_assignment.lang");
    assert_eq!(report.written, vec![fixture.clone()]);
    assert_eq!(
        fs::read_to_string(fixture).unwrap(),
        "// This file is auto-generated. Please do not edit it manually.\nlet i: i64 = 0;"
    );
    assert!(printed.contains("fn i64_variable_declaration_and_assignment() {"));
    assert!(printed.contains("assert_eq!(result.is_ok(), true);"));
    assert!(printed.contains("fn i64_variable_declaration_and_assignment(c: &mut Criterion) {"));
}

#[test]
fn failure_case_asserts_failed_run() {
    let registry = CaseRegistry::from_cases(
        OrderPolicy::Insertion,
        [("i64 Variable re-assignment failure", "let i: i64 = 0;\ni = 100.00;")],
    )
    .unwrap();
    let config = GenerateConfig {
        print_tests: true,
        ..GenerateConfig::default()
    };

    let printed = run(&registry, &config);

    assert!(printed.contains("assert_eq!(result.is_ok(), false);"));
    assert!(!printed.contains("assert_eq!(result.is_ok(), true);"));
}

#[test]
fn slug_collision_fails_registration_not_emission() {
    let mut registry = CaseRegistry::new(OrderPolicy::Insertion);
    registry.register("A B", "1").unwrap();

    let err = registry.register("a-b", "2").unwrap_err();

    assert!(matches!(err, RegistryError::SlugCollision { .. }));
    // The registry still emits the surviving case.
    let printed = run(
        &registry,
        &GenerateConfig {
            print_tests: true,
            ..GenerateConfig::default()
        },
    );
    assert_eq!(printed.matches("#[test]").count(), 1);
}

#[test]
fn empty_registry_emits_scaffolding_only() {
    let dir = tempdir().unwrap();
    let registry = CaseRegistry::new(OrderPolicy::Insertion);
    let config = GenerateConfig {
        output_dir: Some(dir.path().join("scripts")),
        ..print_everything()
    };

    let mut out = Vec::new();
    let report = generate_from(&registry, &config, &mut out).unwrap().unwrap();
    let printed = String::from_utf8(out).unwrap();

    assert!(report.written.is_empty());
    assert!(report.dir.is_dir());
    assert!(printed.contains("mod tests {}"));
    assert!(printed.contains("criterion_main!(lang_benches);"));
    assert!(printed.ends_with("[]\n"));
    assert_eq!(printed.matches("#[test]").count(), 0);
}

#[test]
fn existing_directory_keeps_unrelated_content() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("keep")).unwrap();
    fs::write(dir.path().join("keep").join("old.lang"), "old").unwrap();
    fs::write(dir.path().join("README"), "hello").unwrap();

    let registry = catalog::builtin(OrderPolicy::Insertion).unwrap();
    let config = GenerateConfig {
        output_dir: Some(dir.path().to_path_buf()),
        ..GenerateConfig::default()
    };

    let mut out: Vec<u8> = Vec::new();
    let report = generate_from(&registry, &config, &mut out).unwrap().unwrap();

    assert!(out.is_empty());
    assert_eq!(report.written.len(), registry.len());
    assert_eq!(fs::read_to_string(dir.path().join("README")).unwrap(), "hello");
    assert_eq!(
        fs::read_to_string(dir.path().join("keep").join("old.lang")).unwrap(),
        "old"
    );
    let entries = fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, registry.len() + 2);
}

#[test]
fn fixture_count_matches_catalog() {
    let dir = tempdir().unwrap();
    let registry = catalog::builtin(OrderPolicy::Lexicographic).unwrap();
    let config = GenerateConfig {
        output_dir: Some(dir.path().to_path_buf()),
        ..GenerateConfig::default()
    };

    let report = generate_from(&registry, &config, &mut Vec::<u8>::new())
        .unwrap()
        .unwrap();

    let mut on_disk: Vec<PathBuf> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    on_disk.sort();
    let mut written = report.written.clone();
    written.sort();
    assert_eq!(on_disk, written);
    assert_eq!(written.len(), catalog::CASES.len());
}

#[test]
fn regenerating_is_byte_identical() {
    let first_dir = tempdir().unwrap();
    let second_dir = tempdir().unwrap();

    for order in [OrderPolicy::Insertion, OrderPolicy::Lexicographic] {
        let registry = catalog::builtin(order).unwrap();
        let outputs: Vec<_> = [first_dir.path(), second_dir.path()]
            .iter()
            .map(|dir| {
                let config = GenerateConfig {
                    order,
                    output_dir: Some(dir.to_path_buf()),
                    ..print_everything()
                };
                let mut out = Vec::new();
                let report = generate_from(&registry, &config, &mut out).unwrap().unwrap();
                let files: Vec<(PathBuf, Vec<u8>)> = report
                    .written
                    .iter()
                    .map(|path| {
                        (
                            path.strip_prefix(dir).unwrap().to_path_buf(),
                            fs::read(path).unwrap(),
                        )
                    })
                    .collect();
                (String::from_utf8(out).unwrap(), files)
            })
            .collect();

        assert_eq!(outputs[0], outputs[1]);
    }
}

#[test]
fn printed_modules_follow_fixed_order() {
    let registry = catalog::builtin(OrderPolicy::Insertion).unwrap();

    let printed = run(&registry, &print_everything());

    let tests_at = printed.find("#[cfg(test)]").unwrap();
    let benches_at = printed.find("criterion_main!").unwrap();
    let manifest_at = printed.find("\"slug\"").unwrap();
    assert!(tests_at < benches_at);
    assert!(benches_at < manifest_at);
}

#[test]
fn write_failure_surfaces_as_generate_error() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("scripts");
    fs::write(&blocker, "file in the way").unwrap();

    let registry = catalog::builtin(OrderPolicy::Insertion).unwrap();
    let config = GenerateConfig {
        output_dir: Some(blocker),
        print_tests: true,
        ..GenerateConfig::default()
    };

    let mut out: Vec<u8> = Vec::new();
    let err = generate_from(&registry, &config, &mut out).unwrap_err();

    assert!(matches!(err, GenerateError::Emit(_)));
    assert!(err.to_string().starts_with("cannot create output directory"));
    // Nothing is printed once fixture emission has failed.
    assert!(out.is_empty());
}
