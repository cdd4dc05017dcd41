//! Boundary to the rule evaluation engine.
//!
//! The adapter never interprets rule expressions. It hands a record to a
//! [`RuleEngine`] and gets back either a usage error or a list of failures.

use rvalidator_core::{
    DEFAULT_TEMPLATE, EngineError, FieldFailure, FieldPath, RecordSchema, render_template,
};
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

/// Evaluates declared rules against a record.
pub trait RuleEngine: Send + Sync {
    /// Runs every rule on `record`.
    ///
    /// Returns the failures in reporting order, an empty vector when all
    /// rules pass, or an [`EngineError`] when the rules cannot be evaluated.
    /// `schema` describes the record and fixes the reporting order.
    fn evaluate(
        &self,
        record: &dyn Validate,
        schema: &RecordSchema,
    ) -> Result<Vec<FieldFailure>, EngineError>;
}

/// Engine backed by the `validator` crate's derived rules.
///
/// Failures are reported in field declaration order. Fields the schema does
/// not list come last, sorted by name. Within a field, failures keep the
/// order of the rule attributes and list entries are reported by ascending
/// index.
#[derive(Debug, Clone)]
pub struct DeriveEngine {
    template: String,
}

impl DeriveEngine {
    /// Creates an engine with the standard default message template.
    pub fn new() -> Self {
        Self::with_template(DEFAULT_TEMPLATE)
    }

    /// Creates an engine with a custom default message template.
    pub fn with_template(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Flattens the engine's nested error map into ordered failures.
    fn collect(
        &self,
        errors: &ValidationErrors,
        prefix: Option<&FieldPath>,
        schema: Option<&RecordSchema>,
        out: &mut Vec<FieldFailure>,
    ) {
        let mut entries: Vec<(String, &ValidationErrorsKind)> = errors
            .errors()
            .iter()
            .map(|(name, kind)| (name.to_string(), kind))
            .collect();

        entries.sort_by(|(a, _), (b, _)| {
            let rank = |name: &str| schema.and_then(|s| s.position(name)).unwrap_or(usize::MAX);
            rank(a).cmp(&rank(b)).then_with(|| a.cmp(b))
        });

        for (name, kind) in entries {
            let path = match prefix {
                Some(prefix) => prefix.join_field(&name),
                None => FieldPath::root(&name),
            };
            let nested = schema
                .and_then(|s| s.field(&name))
                .and_then(|f| f.nested_schema());

            match kind {
                ValidationErrorsKind::Field(field_errors) => {
                    out.extend(field_errors.iter().map(|e| self.failure(&path, e)));
                }
                ValidationErrorsKind::Struct(inner) => {
                    self.collect(inner, Some(&path), nested, out);
                }
                ValidationErrorsKind::List(items) => {
                    // BTreeMap iterates indices in ascending order
                    for (index, inner) in items {
                        self.collect(inner, Some(&path.join_index(*index)), nested, out);
                    }
                }
            }
        }
    }

    fn failure(&self, path: &FieldPath, error: &ValidationError) -> FieldFailure {
        let rule = error.code.to_string();
        let rule_message = error.message.as_ref().map(|m| m.to_string());
        let default_message = match &rule_message {
            Some(message) => message.clone(),
            None => render_template(&self.template, &path.to_string(), &rule),
        };

        let mut failure = FieldFailure::new(path.clone(), rule, default_message);
        failure.rule_message = rule_message;
        failure.params = error
            .params
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect();
        failure
    }
}

impl Default for DeriveEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleEngine for DeriveEngine {
    fn evaluate(
        &self,
        record: &dyn Validate,
        schema: &RecordSchema,
    ) -> Result<Vec<FieldFailure>, EngineError> {
        let errors = match record.validate() {
            Ok(()) => return Ok(Vec::new()),
            Err(errors) => errors,
        };

        let mut failures = Vec::new();
        self.collect(&errors, None, Some(schema), &mut failures);
        Ok(failures)
    }
}
