//! Input validation — turns a raw form submission into a `ParameterVector`.
//!
//! Two modes, both required by the UI:
//! - `validate_field` is fail-fast and powers inline per-field feedback.
//! - `Validator::validate` is fail-complete: it walks every spec of the
//!   disease in catalog order, collects all errors, and only on a clean
//!   pass emits the positional vector the engine consumes.
//!
//! Raw values arrive as `serde_json::Value`s because browser forms post
//! strings while API clients post numbers; both are accepted.

use std::sync::Arc;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::catalog::{DiseaseCatalog, DiseaseId, ParameterSpec};

/// Raw field map as submitted: spec id -> JSON string or number.
pub type RawFields = Map<String, Value>;

/// Ordered numeric values, one per `ParameterSpec`, in catalog order.
/// Created fresh per submission and owned by the scoring call.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterVector(Vec<f64>);

impl ParameterVector {
    pub fn from_values(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldErrorKind {
    Missing,
    NotANumber,
    BelowMinimum(f64),
    AboveMaximum(f64),
}

/// Validation failure for one field. `Display` renders the message shown
/// under the offending input.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub param: String,
    pub label: String,
    pub kind: FieldErrorKind,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            FieldErrorKind::Missing => write!(f, "{} is required", self.label),
            FieldErrorKind::NotANumber => write!(f, "{} must be a valid number", self.label),
            FieldErrorKind::BelowMinimum(min) => {
                write!(f, "{} must be at least {}", self.label, min)
            }
            FieldErrorKind::AboveMaximum(max) => {
                write!(f, "{} must be no more than {}", self.label, max)
            }
        }
    }
}

impl std::error::Error for FieldError {}

/// Whole-form failure: every failing field, in catalog order.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Validation failed for {} field(s)", .0.len())]
pub struct ValidationErrors(pub Vec<FieldError>);

/// What a raw JSON value amounts to as numeric input.
enum RawNumber {
    Absent,
    Unparsable,
    Parsed(f64),
}

fn read_raw(raw: Option<&Value>) -> RawNumber {
    match raw {
        None | Some(Value::Null) => RawNumber::Absent,
        Some(Value::Number(n)) => match n.as_f64() {
            Some(v) => RawNumber::Parsed(v),
            None => RawNumber::Unparsable,
        },
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                RawNumber::Absent
            } else {
                match s.parse::<f64>() {
                    Ok(v) if v.is_finite() => RawNumber::Parsed(v),
                    _ => RawNumber::Unparsable,
                }
            }
        }
        Some(_) => RawNumber::Unparsable,
    }
}

/// Fail-fast check of a single field against its spec.
///
/// Required fields hard-fail on absence, unparsable input, and bound
/// violations. Non-required fields coerce absence and unparsable input to
/// `0.0` and pass parsed values through unchecked: only required fields
/// block a submission.
pub fn validate_field(spec: &ParameterSpec, raw: Option<&Value>) -> Result<f64, FieldError> {
    let fail = |kind| FieldError {
        param: spec.id.clone(),
        label: spec.label.clone(),
        kind,
    };

    let value = match read_raw(raw) {
        RawNumber::Absent => {
            return if spec.required {
                Err(fail(FieldErrorKind::Missing))
            } else {
                Ok(0.0)
            };
        }
        RawNumber::Unparsable => {
            return if spec.required {
                Err(fail(FieldErrorKind::NotANumber))
            } else {
                Ok(0.0)
            };
        }
        RawNumber::Parsed(v) => v,
    };

    if spec.required {
        if let Some(min) = spec.min {
            if value < min {
                return Err(fail(FieldErrorKind::BelowMinimum(min)));
            }
        }
        if let Some(max) = spec.max {
            if value > max {
                return Err(fail(FieldErrorKind::AboveMaximum(max)));
            }
        }
    }

    Ok(value)
}

/// Fail-complete form validator. Holds the catalog for parameter ordering.
#[derive(Debug, Clone)]
pub struct Validator {
    catalog: Arc<DiseaseCatalog>,
}

impl Validator {
    pub fn new(catalog: Arc<DiseaseCatalog>) -> Self {
        Self { catalog }
    }

    /// Validate a whole submission. Collects every field error; on success
    /// the returned vector is positionally aligned with the catalog specs.
    pub fn validate(
        &self,
        disease: DiseaseId,
        fields: &RawFields,
    ) -> Result<ParameterVector, ValidationErrors> {
        let specs = &self.catalog.get(disease).parameters;
        let mut values = Vec::with_capacity(specs.len());
        let mut errors = Vec::new();

        for spec in specs {
            match validate_field(spec, fields.get(&spec.id)) {
                Ok(value) => values.push(value),
                Err(err) => errors.push(err),
            }
        }

        if errors.is_empty() {
            Ok(ParameterVector::from_values(values))
        } else {
            Err(ValidationErrors(errors))
        }
    }
}
