//! Record descriptors.
//!
//! A record carries two kinds of field metadata. Rule expressions live in the
//! `#[validate(...)]` attributes and belong to the validation engine. Custom
//! messages live in a [`RecordSchema`] built once per type and are only read
//! by the adapter.

use crate::RecordSchemaBuilder;
use serde::Serialize;
use validator::Validate;

/// Key the engine uses for record-level (struct-level) rule failures.
pub const RECORD_LEVEL_KEY: &str = "__all__";

/// A structured value the adapter can validate.
///
/// Implementors derive [`Validate`] for their rules and describe their fields
/// through [`Record::schema`]. The schema is expected to be built once and
/// cached, which [`static_schema!`](crate::static_schema) does.
///
/// # Example
///
/// ```rust
/// use rvalidator_core::{static_schema, FieldSpec, Record, RecordSchema};
/// use validator::Validate;
///
/// #[derive(Validate)]
/// struct Signup {
///     #[validate(length(min = 1))]
///     name: String,
///     #[validate(email)]
///     email: String,
/// }
///
/// impl Record for Signup {
///     fn schema() -> &'static RecordSchema {
///         static_schema!(
///             RecordSchema::builder("Signup")
///                 .field(FieldSpec::new("name").message("name is required"))
///                 .field("email")
///                 .build()
///         )
///     }
/// }
///
/// assert_eq!(Signup::schema().fields().len(), 2);
/// ```
pub trait Record: Validate + 'static {
    /// Returns the field descriptor for this record type.
    fn schema() -> &'static RecordSchema;
}

/// Builds a schema once and hands out a `&'static` reference to it.
///
/// Expands to a function-local `OnceLock`, so it must be used inside a
/// non-generic function such as a [`Record::schema`] implementation.
/// Generic record types share one static across all instantiations and should
/// cache their schemas by hand.
#[macro_export]
macro_rules! static_schema {
    ($schema:expr) => {{
        static SCHEMA: ::std::sync::OnceLock<$crate::RecordSchema> = ::std::sync::OnceLock::new();
        SCHEMA.get_or_init(|| $schema)
    }};
}

/// Description of one record type: its name and its fields in declaration order.
///
/// A schema may list only the fields that carry adapter metadata. Fields it
/// omits resolve to the engine's default text. An exhaustive schema lists
/// every field of the record, so a failure naming anything else is a
/// mismatch between the schema and the record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordSchema {
    pub(crate) name: String,
    pub(crate) fields: Vec<FieldSpec>,
    pub(crate) record_message: Option<String>,
    pub(crate) exhaustive: bool,
}

impl RecordSchema {
    /// Starts building a schema for the named record type.
    pub fn builder(name: impl Into<String>) -> RecordSchemaBuilder {
        RecordSchemaBuilder::new(name)
    }

    /// Record type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Declaration index of a field.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Whether the schema lists every field of the record.
    pub fn is_exhaustive(&self) -> bool {
        self.exhaustive
    }

    /// Message used for record-level rule failures, if one is set and non-empty.
    pub fn record_message(&self) -> Option<&str> {
        self.record_message.as_deref().filter(|m| !m.is_empty())
    }
}

/// One field of a record schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    name: String,
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    nested: Option<&'static RecordSchema>,
}

impl FieldSpec {
    /// Creates a field with no custom message.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: None,
            nested: None,
        }
    }

    /// Sets the message reported in place of the engine's default text.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attaches the schema of a nested record validated with `#[validate(nested)]`.
    pub fn nested(mut self, schema: &'static RecordSchema) -> Self {
        self.nested = Some(schema);
        self
    }

    /// Field name as the engine reports it.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Custom message, treating an empty string as absent.
    pub fn custom_message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }

    /// Schema of the nested record, if any.
    pub fn nested_schema(&self) -> Option<&'static RecordSchema> {
        self.nested
    }
}

impl From<&str> for FieldSpec {
    fn from(name: &str) -> Self {
        FieldSpec::new(name)
    }
}

impl From<String> for FieldSpec {
    fn from(name: String) -> Self {
        FieldSpec::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Validate)]
    struct Address {
        #[validate(length(min = 1))]
        city: String,
    }

    impl Record for Address {
        fn schema() -> &'static RecordSchema {
            static_schema!(RecordSchema::builder("Address").field("city").build())
        }
    }

    #[test]
    fn test_empty_message_is_absent() {
        let field = FieldSpec::new("name").message("");
        assert_eq!(field.custom_message(), None);

        let field = FieldSpec::new("name").message("name is required");
        assert_eq!(field.custom_message(), Some("name is required"));
    }

    #[test]
    fn test_field_lookup_and_position() {
        let schema = RecordSchema::builder("User")
            .field("id")
            .field(FieldSpec::new("name").message("bad name"))
            .build();

        assert_eq!(schema.position("name"), Some(1));
        assert_eq!(schema.position("missing"), None);
        assert_eq!(
            schema.field("name").and_then(FieldSpec::custom_message),
            Some("bad name")
        );
    }

    #[test]
    fn test_static_schema_is_built_once() {
        let first = Address::schema() as *const RecordSchema;
        let second = Address::schema() as *const RecordSchema;
        assert_eq!(first, second);
        assert_eq!(Address::schema().name(), "Address");
    }

    #[test]
    fn test_nested_schema_is_attached() {
        let field = FieldSpec::new("address").nested(Address::schema());
        assert_eq!(field.nested_schema().map(RecordSchema::name), Some("Address"));
    }

    #[test]
    fn test_schema_serializes_to_json() {
        let schema = RecordSchema::builder("User")
            .field(FieldSpec::new("name").message("name is required"))
            .build();

        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(json["name"], "User");
        assert_eq!(json["fields"][0]["message"], "name is required");
    }
}
