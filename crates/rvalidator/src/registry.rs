//! Registry of record types accepted by the dynamic entry point.

use rvalidator_core::{Record, RecordSchema};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use validator::Validate;

type Downcast = for<'a> fn(&'a (dyn Any + 'static)) -> Option<&'a dyn Validate>;

#[derive(Debug, Clone, Copy)]
struct Registration {
    schema: &'static RecordSchema,
    downcast: Downcast,
}

/// Maps record types to their schemas so that type-erased values can be
/// recognised as records.
///
/// Anything not registered, including references, boxes and options wrapping
/// a registered record, is not a record as far as the registry is concerned.
#[derive(Debug, Default, Clone)]
pub struct RecordRegistry {
    records: HashMap<TypeId, Registration>,
}

impl RecordRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a record type. Registering twice is a no-op.
    pub fn register<T: Record>(&mut self) {
        self.records
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Registration {
                schema: T::schema(),
                downcast: downcast::<T>,
            });
    }

    /// Whether `T` has been registered.
    pub fn contains<T: Any>(&self) -> bool {
        self.records.contains_key(&TypeId::of::<T>())
    }

    /// Number of registered record types.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the schema and rule view of `value` if its type is registered.
    pub fn lookup<'a, T: Any>(
        &self,
        value: &'a T,
    ) -> Option<(&'static RecordSchema, &'a dyn Validate)> {
        let registration = self.records.get(&TypeId::of::<T>())?;
        let record = (registration.downcast)(value)?;
        Some((registration.schema, record))
    }
}

fn downcast<'a, T: Record>(value: &'a (dyn Any + 'static)) -> Option<&'a dyn Validate> {
    value.downcast_ref::<T>().map(|record| record as &dyn Validate)
}
