//! Resolution of rule failures to display messages.

use rvalidator_core::{
    FieldFailure, MessageConfig, MessageSource, RECORD_LEVEL_KEY, RecordSchema, ResolvedMessage,
};
use tracing::{trace, warn};

/// Picks the display message for a failure.
///
/// The failure path is walked through `schema`:
///
/// - the first field on the path with a non-empty custom message wins, so a
///   message on an outer field overrides anything declared beneath it
/// - a field the schema does not list has no custom message
/// - otherwise the engine's default message is used
///
/// A name absent from an exhaustive schema is a mismatch between the schema
/// and the record and yields the unknown field sentinel.
///
/// Record-level failures use the schema's record message when one is set.
pub fn resolve(
    failure: &FieldFailure,
    schema: &RecordSchema,
    config: &MessageConfig,
) -> ResolvedMessage {
    let mut current = schema;
    let mut names = failure.path.field_names().peekable();

    while let Some(name) = names.next() {
        if name == RECORD_LEVEL_KEY {
            if let Some(message) = current.record_message() {
                return custom(failure, message);
            }
            break;
        }

        let Some(field) = current.field(name) else {
            if !current.is_exhaustive() {
                break;
            }
            warn!(
                record = schema.name(),
                path = %failure.path,
                "failure names a field the record schema does not describe"
            );
            return ResolvedMessage::new(
                failure.path.clone(),
                &failure.rule,
                &config.unknown_field_message,
                MessageSource::UnknownField,
            );
        };

        if let Some(message) = field.custom_message() {
            return custom(failure, message);
        }

        if names.peek().is_none() {
            break;
        }

        match field.nested_schema() {
            Some(nested) => current = nested,
            None => break,
        }
    }

    trace!(path = %failure.path, rule = %failure.rule, "using default message");
    ResolvedMessage::new(
        failure.path.clone(),
        &failure.rule,
        &failure.default_message,
        MessageSource::Default,
    )
}

/// Like [`resolve`], keeping only the text.
pub fn resolve_message(
    failure: &FieldFailure,
    schema: &RecordSchema,
    config: &MessageConfig,
) -> String {
    resolve(failure, schema, config).into_message()
}

fn custom(failure: &FieldFailure, message: &str) -> ResolvedMessage {
    trace!(path = %failure.path, rule = %failure.rule, "using custom message");
    ResolvedMessage::new(
        failure.path.clone(),
        &failure.rule,
        message,
        MessageSource::Custom,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rvalidator_core::{FieldPath, FieldSpec, Record, static_schema};
    use validator::Validate;

    #[derive(Validate)]
    struct Address {
        #[validate(length(min = 1))]
        city: String,
        #[validate(length(min = 5))]
        zip: String,
    }

    impl Record for Address {
        fn schema() -> &'static RecordSchema {
            static_schema!(
                RecordSchema::builder("Address")
                    .field(FieldSpec::new("city").message("city is required"))
                    .field("zip")
                    .record_message("address is inconsistent")
                    .exhaustive()
                    .build()
            )
        }
    }

    fn customer() -> RecordSchema {
        RecordSchema::builder("Customer")
            .field(FieldSpec::new("name").message("name is required"))
            .field("email")
            .field(FieldSpec::new("home").nested(Address::schema()))
            .field(
                FieldSpec::new("office")
                    .message("office address is invalid")
                    .nested(Address::schema()),
            )
            .exhaustive()
            .build()
    }

    fn failure(path: FieldPath) -> FieldFailure {
        let default = format!("Field validation for '{path}' failed on the 'length' tag");
        FieldFailure::new(path, "length", default)
    }

    #[test]
    fn test_custom_message_is_verbatim() {
        let resolved = resolve(
            &failure(FieldPath::root("name")),
            &customer(),
            &MessageConfig::default(),
        );
        assert_eq!(resolved.message, "name is required");
        assert_eq!(resolved.source, MessageSource::Custom);
    }

    #[test]
    fn test_default_message_without_custom() {
        let message = resolve_message(
            &failure(FieldPath::root("email")),
            &customer(),
            &MessageConfig::default(),
        );
        assert_eq!(
            message,
            "Field validation for 'email' failed on the 'length' tag"
        );
    }

    #[test]
    fn test_unknown_field_sentinel() {
        let resolved = resolve(
            &failure(FieldPath::root("phone")),
            &customer(),
            &MessageConfig::default(),
        );
        assert_eq!(resolved.message, "Unknown field");
        assert_eq!(resolved.source, MessageSource::UnknownField);

        let config = MessageConfig::default().with_unknown_field_message("??");
        let message = resolve_message(&failure(FieldPath::root("phone")), &customer(), &config);
        assert_eq!(message, "??");
    }

    #[test]
    fn test_unlisted_field_in_partial_schema_gets_default() {
        let schema = RecordSchema::builder("Signup")
            .field(FieldSpec::new("name").message("name is required"))
            .build();

        let resolved = resolve(
            &failure(FieldPath::root("nickname")),
            &schema,
            &MessageConfig::default(),
        );
        assert_eq!(
            resolved.message,
            "Field validation for 'nickname' failed on the 'length' tag"
        );
        assert_eq!(resolved.source, MessageSource::Default);
    }

    #[test]
    fn test_nested_field_uses_inner_schema() {
        let config = MessageConfig::default();
        let schema = customer();

        let city = failure(FieldPath::root("home").join_field("city"));
        assert_eq!(resolve_message(&city, &schema, &config), "city is required");

        let zip = failure(FieldPath::root("home").join_field("zip"));
        assert_eq!(
            resolve_message(&zip, &schema, &config),
            "Field validation for 'home.zip' failed on the 'length' tag"
        );

        let street = failure(FieldPath::root("home").join_field("street"));
        assert_eq!(resolve_message(&street, &schema, &config), "Unknown field");
    }

    #[test]
    fn test_outer_message_overrides_inner() {
        let city = failure(FieldPath::root("office").join_field("city"));
        assert_eq!(
            resolve_message(&city, &customer(), &MessageConfig::default()),
            "office address is invalid"
        );
    }

    #[test]
    fn test_record_level_message() {
        let config = MessageConfig::default();

        let nested = failure(FieldPath::root("home").join_field(RECORD_LEVEL_KEY));
        assert_eq!(
            resolve_message(&nested, &customer(), &config),
            "address is inconsistent"
        );

        let top = failure(FieldPath::root(RECORD_LEVEL_KEY));
        let resolved = resolve(&top, &customer(), &config);
        assert_eq!(resolved.source, MessageSource::Default);
    }

    #[test]
    fn test_list_indices_are_skipped() {
        let schema = RecordSchema::builder("Book")
            .field(FieldSpec::new("addresses").nested(Address::schema()))
            .build();

        let city = failure(FieldPath::root("addresses").join_index(3).join_field("city"));
        assert_eq!(
            resolve_message(&city, &schema, &MessageConfig::default()),
            "city is required"
        );
    }
}
