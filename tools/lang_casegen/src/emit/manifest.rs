//! JSON case manifest.
//!
//! Lists `name`, `slug` and `expected` for every case, in registry order, so
//! external tooling can map fixture files back to case names and outcomes
//! without linking against the catalog.

use lang_cases::{CaseRegistry, TestCase};

/// Render the manifest as pretty-printed JSON with a trailing newline.
pub fn render_manifest(registry: &CaseRegistry) -> Result<String, serde_json::Error> {
    let cases: Vec<&TestCase> = registry.cases().collect();
    let mut json = serde_json::to_string_pretty(&cases)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use lang_cases::OrderPolicy;
    use pretty_assertions::assert_eq;

    #[test]
    fn manifest_lists_cases_in_order() {
        let registry = CaseRegistry::from_cases(
            OrderPolicy::Lexicographic,
            [("b failure", "x"), ("a", "y")],
        )
        .unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&render_manifest(&registry).unwrap()).unwrap();

        assert_eq!(
            json,
            serde_json::json!([
                { "name": "a", "slug": "a", "expected": "pass" },
                { "name": "b failure", "slug": "b_failure", "expected": "fail" },
            ])
        );
    }

    #[test]
    fn empty_manifest() {
        let registry = CaseRegistry::new(OrderPolicy::Insertion);
        assert_eq!(render_manifest(&registry).unwrap(), "[]\n");
    }
}
