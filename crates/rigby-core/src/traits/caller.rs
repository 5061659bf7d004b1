//! The RPC caller trait.

use async_trait::async_trait;
use serde_json::Value;

use crate::Result;

/// Something that can perform one authenticated RPC call.
///
/// Route groups are generic over this trait, so the HTTP client and test
/// doubles are interchangeable.
#[async_trait]
pub trait Caller: Send + Sync {
    /// POST `{"json": payload}` to the endpoint named by `path` and return
    /// the unwrapped result.
    ///
    /// An empty `path` fails with [`crate::Error::InvalidCall`] without any
    /// network activity.
    async fn call(&self, path: &[&str], payload: Value) -> Result<Value>;
}

#[async_trait]
impl<C: Caller + ?Sized> Caller for &C {
    async fn call(&self, path: &[&str], payload: Value) -> Result<Value> {
        (**self).call(path, payload).await
    }
}

#[async_trait]
impl<C: Caller + ?Sized> Caller for std::sync::Arc<C> {
    async fn call(&self, path: &[&str], payload: Value) -> Result<Value> {
        (**self).call(path, payload).await
    }
}
