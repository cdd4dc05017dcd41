//! Builder pattern for record schemas.

use crate::{FieldSpec, RecordSchema};

/// Builder for creating a [`RecordSchema`].
///
/// # Example
///
/// ```rust
/// use rvalidator_core::{FieldSpec, RecordSchema};
///
/// let schema = RecordSchema::builder("Signup")
///     .field(FieldSpec::new("name").message("name is required"))
///     .field("email")
///     .record_message("signup form is inconsistent")
///     .build();
///
/// assert_eq!(schema.name(), "Signup");
/// assert_eq!(schema.fields().len(), 2);
/// ```
#[derive(Debug)]
pub struct RecordSchemaBuilder {
    name: String,
    fields: Vec<FieldSpec>,
    record_message: Option<String>,
    exhaustive: bool,
}

impl RecordSchemaBuilder {
    /// Creates a builder for the named record type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            record_message: None,
            exhaustive: false,
        }
    }

    /// Adds a field.
    ///
    /// Declaring a name twice replaces the earlier `FieldSpec` but keeps its
    /// position, so the later declaration wins.
    pub fn field(mut self, field: impl Into<FieldSpec>) -> Self {
        let field = field.into();
        match self.fields.iter_mut().find(|f| f.name() == field.name()) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        self
    }

    /// Adds multiple fields.
    pub fn fields<I, F>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<FieldSpec>,
    {
        fields.into_iter().fold(self, |builder, f| builder.field(f))
    }

    /// Sets the message for record-level rule failures.
    pub fn record_message(mut self, message: impl Into<String>) -> Self {
        self.record_message = Some(message.into());
        self
    }

    /// Declares that the listed fields are all the fields of the record.
    pub fn exhaustive(mut self) -> Self {
        self.exhaustive = true;
        self
    }

    /// Builds the schema.
    pub fn build(self) -> RecordSchema {
        RecordSchema {
            name: self.name,
            fields: self.fields,
            record_message: self.record_message,
            exhaustive: self.exhaustive,
        }
    }
}
