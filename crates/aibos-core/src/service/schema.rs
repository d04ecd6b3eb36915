//! Service schemas.
//!
//! A [`Validator`] checks a raw JSON value and returns the coerced value the
//! handler (or caller) should see. [`TypedSchema`] derives a validator from a
//! serde type: deserializing applies `#[serde(default)]` values and drops
//! unknown fields, [`Validate`] adds value rules, and the result is
//! reserialized.
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::manifest::{ValidationError, ValidationIssue};

pub trait Validator: Send + Sync {
    fn validate(&self, raw: Value) -> Result<Value, ValidationError>;
}

/// Value rules a typed payload checks after it has been decoded.
pub trait Validate {
    fn validate(&self) -> Vec<ValidationIssue> {
        Vec::new()
    }
}

impl Validate for Value {}

pub struct TypedSchema<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> TypedSchema<T>
where
    T: DeserializeOwned + Serialize + Validate,
{
    pub fn new() -> Self {
        Self { _marker: PhantomData }
    }

    /// Decode and check `raw`, returning the typed value.
    pub fn parse(&self, raw: Value) -> Result<T, ValidationError> {
        let typed: T = serde_json::from_value(raw).map_err(|e| ValidationError::single("", e.to_string()))?;
        check(&typed)?;
        Ok(typed)
    }
}

impl<T> Default for TypedSchema<T>
where
    T: DeserializeOwned + Serialize + Validate,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Validator for TypedSchema<T>
where
    T: DeserializeOwned + Serialize + Validate,
{
    fn validate(&self, raw: Value) -> Result<Value, ValidationError> {
        let typed = self.parse(raw)?;
        serde_json::to_value(&typed).map_err(|e| ValidationError::single("", e.to_string()))
    }
}

/// Shared schema for `T`, ready to put on a [`ServiceDef`](crate::manifest::ServiceDef).
pub fn schema<T>() -> Arc<dyn Validator>
where
    T: DeserializeOwned + Serialize + Validate + 'static,
{
    Arc::new(TypedSchema::<T>::new())
}

/// Run the value rules of an already typed payload.
pub fn check<T: Validate>(value: &T) -> Result<(), ValidationError> {
    let issues = value.validate();
    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(issues))
    }
}

/// Validator backed by a closure.
pub struct FnValidator<F>(F);

impl<F> Validator for FnValidator<F>
where
    F: Fn(Value) -> Result<Value, ValidationError> + Send + Sync,
{
    fn validate(&self, raw: Value) -> Result<Value, ValidationError> {
        (self.0)(raw)
    }
}

pub fn validator_fn<F>(f: F) -> Arc<dyn Validator>
where
    F: Fn(Value) -> Result<Value, ValidationError> + Send + Sync + 'static,
{
    Arc::new(FnValidator(f))
}
