//! Criterion bench target rendering.
//!
//! One benchmark function per case, named by its slug and labelled with the
//! case name, followed by a single `criterion_group!`/`criterion_main!` pair
//! that registers all of them. The case source always goes through
//! `black_box` so the measured call cannot be folded away.

use lang_cases::{CaseRegistry, TestCase};

use crate::config::{BenchMode, ModuleConfig};
use crate::emitter::{Emitter, StringEmitter};
use crate::literal::{ident, string_literal};

/// Registered when the catalog is empty, since `criterion_group!` needs at
/// least one target.
const EMPTY_BENCH: &str = "empty_catalog";

/// Names the rendered module defines or imports besides the benchmarks.
const MODULE_NAMES: &[&str] = &["black_box", "main", "criterion_group", "criterion_main"];

/// Render the bench target for every case in `registry`.
pub fn render_bench_module(registry: &CaseRegistry, config: &ModuleConfig) -> String {
    let mut out = StringEmitter::with_capacity(512 + registry.len() * 256);
    out.emit_line(0, &config.header);
    out.emit_blank();

    if registry.is_empty() {
        out.emit_line(0, "use criterion::{criterion_group, criterion_main, Criterion};");
        out.emit_blank();
        out.emit_line(0, &format!("fn {EMPTY_BENCH}(_c: &mut Criterion) {{}}"));
        out.emit_blank();
        emit_entry_point(&mut out, &config.bench_group, &[EMPTY_BENCH.to_string()]);
        out.ensure_trailing_newline();
        return out.output();
    }

    out.emit_line(0, "use std::hint::black_box;");
    out.emit_blank();
    out.emit_line(0, "use criterion::{criterion_group, criterion_main, Criterion};");
    out.emit_line(0, &format!("use {};", config.interpreter));

    let mut reserved: Vec<&str> = MODULE_NAMES.to_vec();
    reserved.push(config.bench_group.as_str());
    reserved.push(config.interpreter_type());

    let mut targets = Vec::with_capacity(registry.len());
    for case in registry.cases() {
        out.emit_blank();
        targets.push(emit_bench(&mut out, case, config, &reserved));
    }

    out.emit_blank();
    emit_entry_point(&mut out, &config.bench_group, &targets);
    out.ensure_trailing_newline();
    out.output()
}

/// Emit one benchmark function and return its identifier.
fn emit_bench(
    out: &mut impl Emitter,
    case: &TestCase,
    config: &ModuleConfig,
    reserved: &[&str],
) -> String {
    let name = ident(case.slug(), reserved);
    let interpreter = config.interpreter_type();
    let source = string_literal(case.source());

    out.emit_line(0, &format!("fn {name}(c: &mut Criterion) {{"));
    out.emit_line(
        1,
        &format!(
            "c.bench_function({}, |b| {{",
            string_literal(case.name())
        ),
    );
    match config.bench_mode {
        BenchMode::Construct => {
            out.emit_line(
                2,
                &format!("b.iter(|| {interpreter}::new(black_box(Some({source}))));"),
            );
        }
        BenchMode::ConstructAndRun => {
            out.emit_line(2, "b.iter(|| {");
            out.emit_line(
                3,
                &format!("let mut lang = {interpreter}::new(black_box(Some({source})));"),
            );
            out.emit_line(3, "black_box(lang.run())");
            out.emit_line(2, "});");
        }
    }
    out.emit_line(1, "});");
    out.emit_line(0, "}");
    name
}

fn emit_entry_point(out: &mut impl Emitter, group: &str, targets: &[String]) {
    out.emit_line(0, "criterion_group!(");
    out.emit_line(1, &format!("{group},"));
    for target in targets {
        out.emit_line(1, &format!("{target},"));
    }
    out.emit_line(0, ");");
    out.emit_line(0, &format!("criterion_main!({group});"));
}
