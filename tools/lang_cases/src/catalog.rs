//! The builtin Lang case catalog.
//!
//! Cases are listed in authoring order, grouped by the language feature they
//! exercise. A case whose name ends in `failure` must be rejected by the
//! interpreter.

use crate::error::RegistryError;
use crate::registry::{CaseRegistry, OrderPolicy};

/// `(name, source)` pairs of the builtin catalog.
pub const CASES: &[(&str, &str)] = &[
    // Primitives
    ("i64 Variable declaration", "let i: i64;"),
    ("i64 Variable declaration and assignment", "let i: i64 = 0;"),
    ("i64 Variable re-assignment", "let i: i64 = 0;\ni = 100;"),
    ("i64 Variable re-assignment failure", "let i: i64 = 0;\ni = 100.00;"),
    ("f64 Variable declaration", "let i: f64;"),
    ("f64 Variable declaration and assignment", "let i: f64 = 0.00;"),
    ("f64 Variable re-assignment", "let i: f64 = 0.00;\ni = 100.00;"),
    ("f64 Variable re-assignment failure", "let i: f64 = 0;\ni = 100;"),
    // Arrays
    ("Array<i64> Variable declaration", "let i: Array<i64>;"),
    ("Array<i64> Variable declaration empty", "let i: Array<i64> = [];"),
    (
        "Array<i64> Variable declaration and assignment",
        "let i: Array<i64> = [0, 1, 2];",
    ),
    (
        "Array<i64> Variable re-assignment",
        "let i: Array<i64> = [];\ni = [0, 1, 2];",
    ),
    (
        "Array<i64> Variable re-assignment failure",
        "let i: Array<i64> = [];\ni = [0.00, 1.00, 2.00];",
    ),
    // Structs
    ("Struct declaration", "struct TestStruct {}"),
    ("Struct declaration failure", "struct TestStruct {{}"),
    (
        "Struct declaration with fields",
        r"struct TestStruct {
    field0: i64,
    field1: f64,
    field2: bool
}
",
    ),
    (
        "Struct with fields instatiation",
        r"struct TestStruct {
    field0: i64,
    field1: f64,
    field2: bool
}

let instance: TestStruct = TestStruct();
",
    ),
    (
        "Struct with fields instatiation and field assignment",
        r"struct TestStruct {
    field0: i64,
    field1: f64,
    field2: bool
}

let instance: TestStruct = TestStruct();
instance.field0 = 0;
instance.field1 = 1.00;
instance.field2 = false;
",
    ),
    (
        "Struct with field access failure",
        r"struct TestStruct {}

let instance: TestStruct = TestStruct();
instance.field_doesnt_exist;
",
    ),
    (
        "Struct with impl",
        r#"struct TestStruct {
}

impl TestStruct {
    fn hello() -> () {
        print "Hello world";
    }
}

let instance: TestStruct = TestStruct();
instance.hello();
"#,
    ),
    (
        "Struct with method call failure",
        r"struct TestStruct {
}

impl TestStruct {
}

let instance: TestStruct = TestStruct();
instance.hello();
",
    ),
];

/// Build the builtin catalog as a registry iterated in `order`.
pub fn builtin(order: OrderPolicy) -> Result<CaseRegistry, RegistryError> {
    CaseRegistry::from_cases(order, CASES.iter().copied())
}
