//! Rule failures as reported by the validation engine.

use crate::RECORD_LEVEL_KEY;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// One step in a failure path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Named field
    Field(String),
    /// Position inside a list field
    Index(usize),
}

/// Location of a failure inside a record, e.g. `items[2].sku`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    /// Path to a top-level field.
    pub fn root(field: impl Into<String>) -> Self {
        Self(vec![PathSegment::Field(field.into())])
    }

    /// Returns a copy of this path extended by a field.
    pub fn join_field(&self, field: impl Into<String>) -> Self {
        let mut path = self.clone();
        path.0.push(PathSegment::Field(field.into()));
        path
    }

    /// Returns a copy of this path extended by a list index.
    pub fn join_index(&self, index: usize) -> Self {
        let mut path = self.clone();
        path.0.push(PathSegment::Index(index));
        path
    }

    /// Field names along the path, skipping list indices.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().filter_map(|segment| match segment {
            PathSegment::Field(name) => Some(name.as_str()),
            PathSegment::Index(_) => None,
        })
    }

    /// Last field name.
    pub fn leaf(&self) -> Option<&str> {
        self.field_names().last()
    }

    /// Whether this failure belongs to a record-level rule.
    pub fn is_record_level(&self) -> bool {
        self.leaf() == Some(RECORD_LEVEL_KEY)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if i == 0 => write!(f, "{name}")?,
                PathSegment::Field(name) => write!(f, ".{name}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A single violated rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldFailure {
    /// Where the failing value sits
    pub path: FieldPath,
    /// Rule code, e.g. `length` or `email`
    pub rule: String,
    /// Message declared on the rule attribute itself, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_message: Option<String>,
    /// Rule parameters and the offending value, as the engine reports them
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, serde_json::Value>,
    /// Engine-formatted fallback text
    pub default_message: String,
}

impl FieldFailure {
    /// Creates a failure without rule message or parameters.
    pub fn new(
        path: FieldPath,
        rule: impl Into<String>,
        default_message: impl Into<String>,
    ) -> Self {
        Self {
            path,
            rule: rule.into(),
            rule_message: None,
            params: BTreeMap::new(),
            default_message: default_message.into(),
        }
    }

    pub fn with_rule_message(mut self, message: impl Into<String>) -> Self {
        self.rule_message = Some(message.into());
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.params.insert(key.into(), value);
        self
    }

    /// Name of the failing field (the last field in the path).
    pub fn field(&self) -> &str {
        self.path.leaf().unwrap_or_default()
    }
}
