//! Activation error types.

/// Errors raised by the proxy locator and activator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActivationError {
    /// No handler was supplied to an activation call.
    #[error("interceptor handler must not be null")]
    NullHandler,

    /// No generated proxy is registered for the requested interface.
    #[error("there is no generated proxy for interface {interface}; ensure the interface is marked for proxy generation and its generated register function was called")]
    NoProxyFound {
        /// Qualified name of the requested interface.
        interface: String,
    },

    /// A registered factory produced an instance of an unexpected
    /// concrete type.
    #[error("proxy registered for interface {interface} is not of the requested type {expected}")]
    ProxyTypeMismatch {
        /// Qualified name of the requested interface.
        interface: String,
        /// The concrete type the caller requested.
        expected: &'static str,
    },
}
