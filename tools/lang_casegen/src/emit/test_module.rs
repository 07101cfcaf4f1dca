//! Unit test module rendering.
//!
//! Output shape, one `#[test]` per case:
//!
//! ```text
//! // This file is auto-generated. Please do not edit it manually.
//!
//! #[cfg(test)]
//! mod tests {
//!     use lang::lang::Lang;
//!
//!     #[test]
//!     fn i64_variable_declaration() {
//!         let mut lang = Lang::new(Some("let i: i64;"));
//!         let result = lang.run();
//!         if let Err(ref error) = result {
//!             println!("{}", error);
//!         }
//!         assert_eq!(result.is_ok(), true);
//!     }
//! }
//! ```

use lang_cases::{CaseRegistry, TestCase};

use crate::config::ModuleConfig;
use crate::emitter::{Emitter, StringEmitter};
use crate::literal::{ident, string_literal};

/// Render the test module for every case in `registry`.
pub fn render_test_module(registry: &CaseRegistry, config: &ModuleConfig) -> String {
    let mut out = StringEmitter::with_capacity(256 + registry.len() * 320);
    out.emit_line(0, &config.header);
    out.emit_blank();
    out.emit_line(0, "#[cfg(test)]");

    if registry.is_empty() {
        out.emit_line(0, &format!("mod {} {{}}", config.test_module));
        out.ensure_trailing_newline();
        return out.output();
    }

    out.emit_line(0, &format!("mod {} {{", config.test_module));
    out.emit_line(1, &format!("use {};", config.interpreter));
    for case in registry.cases() {
        out.emit_blank();
        emit_test(&mut out, case, config.interpreter_type());
    }
    out.emit_line(0, "}");
    out.ensure_trailing_newline();
    out.output()
}

fn emit_test(out: &mut impl Emitter, case: &TestCase, interpreter: &str) {
    out.emit_line(1, "#[test]");
    out.emit_line(1, &format!("fn {}() {{", ident(case.slug(), &[interpreter])));
    out.emit_line(
        2,
        &format!(
            "let mut lang = {interpreter}::new(Some({}));",
            string_literal(case.source())
        ),
    );
    out.emit_line(2, "let result = lang.run();");
    out.emit_line(2, "if let Err(ref error) = result {");
    out.emit_line(3, "println!(\"{}\", error);");
    out.emit_line(2, "}");
    out.emit_line(
        2,
        &format!(
            "assert_eq!(result.is_ok(), {});",
            case.expected().expects_success()
        ),
    );
    out.emit_line(1, "}");
}
