//! Recipe validation engine.
//!
//! Judges one candidate record (untyped JSON) against the closed recipe
//! schema. Four checks run on every call, none of them short-circuiting:
//! allowed keys, required keys, canonical key order, and typed shape.
//! A single verdict can therefore report several problems at once, which
//! keeps batch runs over large recipe files reviewable in one pass.
//!
//! The engine is a pure function over the record: no mutation, no I/O, no
//! state across calls. Malformed input is the expected failure mode and
//! comes back as diagnostics, never as a panic or error.

use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;
use serde_json::{json, Value};

use crate::types::{allowed_keys, required_keys};

/// Compiled shape validator for recipe records.
///
/// Keeps `required` and `additionalProperties: false`, so shape diagnostics
/// can overlap the key checks on the same record; the checks stay
/// independent either way.
static RECIPE_SHAPE: LazyLock<jsonschema::Validator> = LazyLock::new(|| {
    jsonschema::validator_for(&json!({
        "type": "object",
        "properties": {
            "id": {"type": "integer", "minimum": 1},
            "name": {"type": "string", "minLength": 1},
            "output_item_id": {"type": "integer", "minimum": 1},
            "output_item_count": {"type": "number", "minimum": 0},
            "ingredients": {
                "type": "array",
                "minItems": 1,
                "items": {
                    "type": "object",
                    "properties": {
                        "item_id": {"type": "integer", "minimum": 1},
                        "count": {"type": "integer"}
                    },
                    "required": ["item_id", "count"]
                }
            },
            "min_rating": {"type": "integer"},
            "disciplines": {
                "type": "array",
                "minItems": 1,
                "items": {"type": "string", "minLength": 1}
            }
        },
        "required": ["name", "output_item_id", "output_item_count", "ingredients", "disciplines"],
        "additionalProperties": false
    }))
    .expect("Invalid recipe shape schema")
});

/// A single constraint violation found by the shape check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// JSON Pointer to the violating value, `/` for the record itself.
    pub path: String,
    pub message: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// One failed check, carrying everything that check found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Field names outside the recipe schema, in record order.
    UnrecognizedFields { names: Vec<String> },
    /// Required field names absent from the record, in canonical order.
    MissingRequiredFields { names: Vec<String> },
    /// Present fields out of canonical order; both sequences verbatim.
    KeyOrderMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },
    /// Shape violations, all of them, anywhere in the structure.
    SchemaViolations { violations: Vec<FieldViolation> },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnrecognizedFields { names } => {
                writeln!(f, "not allowed keys")?;
                writeln!(f, "\t{}", names.join(", "))
            }
            Diagnostic::MissingRequiredFields { names } => {
                writeln!(f, "missing required keys")?;
                writeln!(f, "\t{}", names.join(", "))
            }
            Diagnostic::KeyOrderMismatch { expected, actual } => {
                writeln!(f, "wrong key order")?;
                writeln!(f, "\texpected: {expected:?}")?;
                writeln!(f, "\tactual:   {actual:?}")
            }
            Diagnostic::SchemaViolations { violations } => {
                writeln!(f, "schema validation failed")?;
                for violation in violations {
                    writeln!(f, "\t{violation}")?;
                }
                Ok(())
            }
        }
    }
}

/// The outcome of validating one record.
///
/// The label is an opaque annotation (a source line, an index); it never
/// influences which diagnostics are produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub label: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl Verdict {
    /// True when every check passed.
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for diagnostic in &self.diagnostics {
            write!(f, "Recipe {}: {}", self.label, diagnostic)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Validate one candidate recipe record.
///
/// All four checks run regardless of earlier failures; diagnostics appear
/// in fixed check order. A non-object record simply has no keys, so the
/// required-keys and shape checks carry the failure.
pub fn validate_recipe(record: &Value, label: &str) -> Verdict {
    let keys = record_keys(record);
    let mut diagnostics = Vec::new();

    // Keys outside the recipe schema
    let unrecognized: Vec<String> = keys
        .iter()
        .filter(|key| !allowed_keys().any(|allowed| allowed == key.as_str()))
        .cloned()
        .collect();
    if !unrecognized.is_empty() {
        diagnostics.push(Diagnostic::UnrecognizedFields {
            names: unrecognized,
        });
    }

    // Required keys that are absent
    let missing: Vec<String> = required_keys()
        .filter(|required| !keys.iter().any(|key| key == required))
        .map(str::to_string)
        .collect();
    if !missing.is_empty() {
        diagnostics.push(Diagnostic::MissingRequiredFields { names: missing });
    }

    // Canonical order filtered to the present keys, compared element-wise
    // against the actual sequence
    let expected: Vec<String> = allowed_keys()
        .filter(|allowed| keys.iter().any(|key| key == allowed))
        .map(str::to_string)
        .collect();
    if expected != keys {
        diagnostics.push(Diagnostic::KeyOrderMismatch {
            expected,
            actual: keys,
        });
    }

    // Typed shape, greedy: collect every violation rather than the first
    let violations: Vec<FieldViolation> = RECIPE_SHAPE
        .iter_errors(record)
        .map(|error| FieldViolation {
            path: pointer_or_root(&error.instance_path.to_string()),
            message: error.to_string(),
        })
        .collect();
    if !violations.is_empty() {
        diagnostics.push(Diagnostic::SchemaViolations { violations });
    }

    Verdict {
        label: label.to_string(),
        diagnostics,
    }
}

/// Field names as they occur on the record; empty for non-objects.
fn record_keys(record: &Value) -> Vec<String> {
    match record.as_object() {
        Some(map) => map.keys().cloned().collect(),
        None => Vec::new(),
    }
}

fn pointer_or_root(pointer: &str) -> String {
    if pointer.is_empty() {
        "/".to_string()
    } else {
        pointer.to_string()
    }
}
