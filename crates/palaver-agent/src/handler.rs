//! Action handler type erasure.
//!
//! Handlers are async functions taking the per-request [`RequestScope`] and
//! the bound parameter values, returning an optional [`Fulfillment`]:
//!
//! ```rust,ignore
//! async fn greet(scope: Arc<RequestScope>, args: Vec<Value>) -> Option<Fulfillment> {
//!     Some(Fulfillment::from(Message::text("Hello!")))
//! }
//! ```
//!
//! [`HandlerFn`] wraps such functions behind the object-safe
//! [`ErasedHandler`] trait so the registry can store them uniformly.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::Value;

use palaver_core::Fulfillment;

use crate::scope::RequestScope;

/// A type alias for a boxed, pinned future that is `Send`.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Type-erased handler trait for dynamic dispatch.
pub trait ErasedHandler: Send + Sync {
    /// Invokes the handler with the request scope and bound argument values.
    ///
    /// Arguments arrive in the order the handler declared its parameter
    /// names at registration; names absent from the request bind
    /// [`Value::Null`].
    fn call(&self, scope: Arc<RequestScope>, args: Vec<Value>)
    -> BoxFuture<'static, Option<Fulfillment>>;
}

/// A type-erased handler that can be stored in collections.
pub type BoxedHandler = Arc<dyn ErasedHandler>;

/// A wrapper that adapts an async function into an [`ErasedHandler`].
pub struct HandlerFn<F> {
    f: F,
}

impl<F> HandlerFn<F> {
    /// Creates a new handler function wrapper.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F, Fut> ErasedHandler for HandlerFn<F>
where
    F: Fn(Arc<RequestScope>, Vec<Value>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Option<Fulfillment>> + Send + 'static,
{
    fn call(
        &self,
        scope: Arc<RequestScope>,
        args: Vec<Value>,
    ) -> BoxFuture<'static, Option<Fulfillment>> {
        Box::pin((self.f)(scope, args))
    }
}

/// Converts a handler function into a boxed handler.
pub fn into_handler<F, Fut>(f: F) -> BoxedHandler
where
    F: Fn(Arc<RequestScope>, Vec<Value>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Option<Fulfillment>> + Send + 'static,
{
    Arc::new(HandlerFn::new(f))
}
