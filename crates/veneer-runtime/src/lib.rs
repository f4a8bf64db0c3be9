//! Runtime support for veneer-generated proxies.
//!
//! Generated proxy types link against this crate alone. It provides
//! the pieces a forwarding body needs at call time and the activation
//! layer callers use to obtain live proxies:
//!
//! - [`MethodToken`] / [`InterfaceToken`]: interface-scoped method
//!   identity, embedded in the generated static token tables
//! - [`CallValue`] / [`TypeArg`]: materialized arguments and generic
//!   type arguments crossing the interceptor boundary
//! - [`InterceptorHandler`]: the single caller-supplied callback that
//!   implements every proxied method
//! - [`ProxyRegistry`]: locator and activator with a compiled-factory
//!   cache, plus the process-wide [`global`] registry
//!
//! # Example
//!
//! ```ignore
//! use veneer_runtime::{CallValue, InterceptorHandler};
//!
//! let handler = InterceptorHandler::new(|_instance, token, mut args, _type_args| {
//!     match token.name() {
//!         "add5_to" => CallValue::new(args.remove(0).take::<i32>() + 5),
//!         other => panic!("unrecognised method: {other}"),
//!     }
//! });
//! let calc: CalcProxy = veneer_runtime::instantiate(handler)?;
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod handler;
pub mod registry;
pub mod token;
pub mod value;

pub use error::ActivationError;
pub use handler::{InterceptorFn, InterceptorHandler};
pub use registry::{global, instantiate, locate, ProxyBinding, ProxyLocation, ProxyRegistry};
pub use token::{InterfaceToken, MethodToken};
pub use value::{CallArgs, CallValue, TypeArg, TypeArgs};
