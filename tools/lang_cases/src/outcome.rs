//! Expected run outcome of a case.

use std::fmt;

use serde::Serialize;

/// Name suffix marking a case that the interpreter must reject.
pub const FAILURE_SUFFIX: &str = "failure";

/// Whether running a case is expected to succeed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
}

impl Outcome {
    /// Classify a case by its name.
    ///
    /// `Fail` iff `name` ends with [`FAILURE_SUFFIX`]. The match is a
    /// case-sensitive suffix match with no word-boundary check, so
    /// `"not a failure"` and `"Xfailure"` are both `Fail` while
    /// `"failure mode"` and `"Failure"` are `Pass`.
    pub fn classify(name: &str) -> Self {
        if name.ends_with(FAILURE_SUFFIX) {
            Outcome::Fail
        } else {
            Outcome::Pass
        }
    }

    /// `true` when the interpreter run should return `Ok`.
    pub fn expects_success(self) -> bool {
        self == Outcome::Pass
    }
}

/// Same spelling as the serialized form.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Pass => f.write_str("pass"),
            Outcome::Fail => f.write_str("fail"),
        }
    }
}
