use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::error::ServiceError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Executes a service call after its input has been validated.
#[async_trait]
pub trait ServiceHandler: Send + Sync {
    async fn handle(&self, input: Value) -> Result<Value, ServiceError>;
}

struct SyncHandler<F> {
    f: F,
}

#[async_trait]
impl<F> ServiceHandler for SyncHandler<F>
where
    F: Fn(Value) -> Result<Value, ServiceError> + Send + Sync,
{
    async fn handle(&self, input: Value) -> Result<Value, ServiceError> {
        (self.f)(input)
    }
}

struct AsyncHandler<F> {
    f: F,
}

#[async_trait]
impl<F> ServiceHandler for AsyncHandler<F>
where
    F: Fn(Value) -> BoxFuture<'static, Result<Value, ServiceError>> + Send + Sync,
{
    async fn handle(&self, input: Value) -> Result<Value, ServiceError> {
        (self.f)(input).await
    }
}

/// Wrap a synchronous closure as a service handler.
pub fn sync_service_handler<F>(f: F) -> Arc<dyn ServiceHandler>
where
    F: Fn(Value) -> Result<Value, ServiceError> + Send + Sync + 'static,
{
    Arc::new(SyncHandler { f })
}

/// Wrap an async closure as a service handler.
pub fn async_service_handler<F, Fut>(f: F) -> Arc<dyn ServiceHandler>
where
    F: Fn(Value) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Value, ServiceError>> + Send + 'static,
{
    Arc::new(AsyncHandler {
        f: move |input: Value| -> BoxFuture<'static, Result<Value, ServiceError>> { Box::pin(f(input)) },
    })
}

/// Wrap a synchronous closure working on typed input and output.
///
/// The input is decoded from the (already schema-checked) JSON value and the
/// output is encoded back; a decode failure is reported as a handler error.
pub fn typed_handler<I, O, F>(f: F) -> Arc<dyn ServiceHandler>
where
    I: DeserializeOwned + 'static,
    O: Serialize + 'static,
    F: Fn(I) -> Result<O, ServiceError> + Send + Sync + 'static,
{
    sync_service_handler(move |input| {
        let typed: I = serde_json::from_value(input)
            .map_err(|e| ServiceError::handler(format!("invalid payload: {e}")))?;
        let output = f(typed)?;
        serde_json::to_value(output).map_err(|e| ServiceError::handler(format!("unencodable result: {e}")))
    })
}
