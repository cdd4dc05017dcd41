//! The validation adapter.

use crate::{DeriveEngine, RecordRegistry, RuleEngine, resolve};
use rvalidator_core::{
    AdapterError, MessageConfig, Record, RecordSchema, ResolvedMessage, Result,
};
use std::any::{Any, type_name};
use tracing::debug;
use validator::Validate;

/// Runs a record's rules and returns one display message per violation.
///
/// Uses a fresh [`MessageValidator`] with default settings. Rule violations
/// are returned as messages, never as errors; an empty vector means the
/// record is valid.
///
/// # Example
///
/// ```rust
/// use rvalidator::validate;
/// use rvalidator_core::{static_schema, FieldSpec, Record, RecordSchema};
/// use validator::Validate;
///
/// #[derive(Validate)]
/// struct Signup {
///     #[validate(length(min = 1))]
///     name: String,
/// }
///
/// impl Record for Signup {
///     fn schema() -> &'static RecordSchema {
///         static_schema!(
///             RecordSchema::builder("Signup")
///                 .field(FieldSpec::new("name").message("name is required"))
///                 .build()
///         )
///     }
/// }
///
/// let messages = validate(&Signup { name: String::new() }).unwrap();
/// assert_eq!(messages, vec!["name is required".to_string()]);
/// ```
pub fn validate<T: Record>(record: &T) -> Result<Vec<String>> {
    MessageValidator::new().validate_record(record)
}

/// Validation adapter: delegates rules to a [`RuleEngine`] and resolves each
/// failure to a custom or default message.
///
/// The adapter holds no per-call state and can be shared between threads.
///
/// # Example
///
/// ```rust
/// use rvalidator::MessageValidator;
/// # use rvalidator_core::{static_schema, Record, RecordSchema};
/// # use validator::Validate;
/// # #[derive(Validate)]
/// # struct Login {
/// #     #[validate(length(min = 3))]
/// #     user: String,
/// # }
/// # impl Record for Login {
/// #     fn schema() -> &'static RecordSchema {
/// #         static_schema!(RecordSchema::builder("Login").field("user").build())
/// #     }
/// # }
///
/// let validator = MessageValidator::new().register::<Login>();
///
/// let messages = validator.validate(&Login { user: "al".into() }).unwrap();
/// assert_eq!(
///     messages,
///     vec!["Field validation for 'user' failed on the 'length' tag".to_string()]
/// );
///
/// assert!(validator.validate(&42).unwrap_err().is_invalid_input());
/// ```
#[derive(Debug, Clone)]
pub struct MessageValidator<E = DeriveEngine> {
    engine: E,
    registry: RecordRegistry,
    config: MessageConfig,
}

impl MessageValidator<DeriveEngine> {
    /// Creates an adapter with default settings.
    pub fn new() -> Self {
        Self::with_config(MessageConfig::default())
    }

    /// Creates an adapter whose engine formats defaults with
    /// `config.default_template`.
    pub fn with_config(config: MessageConfig) -> Self {
        let engine = DeriveEngine::with_template(config.default_template.clone());
        Self::with_engine(engine, config)
    }
}

impl Default for MessageValidator<DeriveEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: RuleEngine> MessageValidator<E> {
    /// Creates an adapter around a custom engine.
    pub fn with_engine(engine: E, config: MessageConfig) -> Self {
        Self {
            engine,
            registry: RecordRegistry::new(),
            config,
        }
    }

    /// Registers a record type for the dynamic [`validate`](Self::validate) entry point.
    pub fn register<T: Record>(mut self) -> Self {
        self.registry.register::<T>();
        self
    }

    /// Validates a value of any type.
    ///
    /// Only registered record types count as records. Anything else, such as
    /// a scalar, a collection, an `Option`, or a box or reference around a
    /// record, fails with [`AdapterError::InvalidInputKind`].
    pub fn validate<T: Any>(&self, value: &T) -> Result<Vec<String>> {
        Ok(into_messages(self.validate_detailed(value)?))
    }

    /// Like [`validate`](Self::validate), keeping the path, rule and source
    /// of each message.
    pub fn validate_detailed<T: Any>(&self, value: &T) -> Result<Vec<ResolvedMessage>> {
        let Some((schema, record)) = self.registry.lookup(value) else {
            debug!(input = type_name::<T>(), "rejecting non-record input");
            return Err(AdapterError::invalid_input(type_name::<T>()));
        };
        self.run(record, schema)
    }

    /// Validates a record type known at compile time. No registration needed.
    pub fn validate_record<T: Record>(&self, record: &T) -> Result<Vec<String>> {
        Ok(into_messages(self.validate_record_detailed(record)?))
    }

    /// Like [`validate_record`](Self::validate_record), keeping the path, rule
    /// and source of each message.
    pub fn validate_record_detailed<T: Record>(&self, record: &T) -> Result<Vec<ResolvedMessage>> {
        self.run(record, T::schema())
    }

    fn run(&self, record: &dyn Validate, schema: &RecordSchema) -> Result<Vec<ResolvedMessage>> {
        let failures = self.engine.evaluate(record, schema)?;

        debug!(
            record = schema.name(),
            violations = failures.len(),
            "validated record"
        );

        Ok(failures
            .iter()
            .map(|failure| resolve(failure, schema, &self.config))
            .collect())
    }
}

fn into_messages(resolved: Vec<ResolvedMessage>) -> Vec<String> {
    resolved
        .into_iter()
        .map(ResolvedMessage::into_message)
        .collect()
}
