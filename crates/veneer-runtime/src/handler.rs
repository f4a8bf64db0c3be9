//! The interceptor handler.
//!
//! A proxy's entire behavior is one caller-supplied callback of a
//! fixed shape. Every generated forwarding method invokes it with the
//! proxy instance, the resolved method token, the materialized
//! argument list, and the generic type arguments supplied at the call
//! site; whatever the callback returns becomes the method's result.

use std::any::Any;
use std::sync::Arc;

use crate::token::MethodToken;
use crate::value::{CallArgs, CallValue, TypeArgs};

/// The fixed callback shape behind every proxied method.
///
/// Arguments: the proxy instance itself (downcastable to the concrete
/// generated type), the method token identifying the declared
/// containing interface, the ordered argument values, and the generic
/// type argument list (empty for non-generic methods).
pub type InterceptorFn =
    dyn Fn(&dyn Any, &'static MethodToken, CallArgs, TypeArgs) -> CallValue + Send + Sync;

/// Shared, cloneable handle to an interceptor callback.
///
/// Cloning is cheap; all clones dispatch to the same callback. The
/// handle is non-null by construction; activation paths that accept
/// an optional handler reject absence before any proxy is built.
#[derive(Clone)]
pub struct InterceptorHandler(Arc<InterceptorFn>);

impl InterceptorHandler {
    /// Wrap a callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&dyn Any, &'static MethodToken, CallArgs, TypeArgs) -> CallValue
            + Send
            + Sync
            + 'static,
    {
        InterceptorHandler(Arc::new(callback))
    }

    /// Invoke the callback.
    ///
    /// Failures signalled by the callback (panics, domain errors baked
    /// into the returned value) propagate unmodified.
    pub fn invoke(
        &self,
        instance: &dyn Any,
        token: &'static MethodToken,
        args: CallArgs,
        type_args: TypeArgs,
    ) -> CallValue {
        (self.0)(instance, token, args, type_args)
    }
}

impl std::fmt::Debug for InterceptorHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("InterceptorHandler(..)")
    }
}
