//! Proxy registry, locator, and activator.
//!
//! Generated proxy types register themselves here (directly or through
//! their emitted `register_*` functions). Activation then goes through
//! a compiled-factory cache: locating a registration and wrapping its
//! constructor is done at most once per interface identity, and every
//! later activation reuses the cached factory, paying only allocation
//! cost.
//!
//! ## Concurrency
//!
//! Both maps are sharded (`DashMap`); readers of already-cached
//! entries never block on unrelated keys, and the vacant-entry path
//! guarantees a single winning factory per key even under concurrent
//! first-time requests.

use std::any::Any;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use once_cell::sync::Lazy;

use crate::error::ActivationError;
use crate::handler::InterceptorHandler;
use crate::token::InterfaceToken;

/// Compiled factory: handler in, boxed proxy instance out.
type ProxyFactory = Arc<dyn Fn(InterceptorHandler) -> Box<dyn Any> + Send + Sync>;

/// Trait implemented by every generated proxy type.
///
/// Couples the concrete type to the identity of the interface it was
/// generated for and to the single supported construction path: one
/// interceptor handler, nothing else.
pub trait ProxyBinding: Any {
    /// Identity of the proxied interface (per arity, not per
    /// instantiation).
    const INTERFACE: InterfaceToken;

    /// Construct an instance bound to `interceptor`.
    fn bind(interceptor: InterceptorHandler) -> Self
    where
        Self: Sized;
}

/// A located registration: the generated type that will serve an
/// interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyLocation {
    /// The interface identity that was requested.
    pub interface: InterfaceToken,
    /// Concrete name of the generated proxy type.
    pub type_name: &'static str,
}

struct RegisteredProxy {
    type_name: &'static str,
    ctor: ProxyFactory,
}

/// Registry of generated proxy types with a per-interface factory
/// cache.
///
/// Registrations live for the process lifetime and are never
/// invalidated; interfaces are assumed static for the duration.
#[derive(Default)]
pub struct ProxyRegistry {
    entries: DashMap<InterfaceToken, RegisteredProxy>,
    factories: DashMap<InterfaceToken, ProxyFactory>,
    factories_compiled: AtomicUsize,
}

impl ProxyRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the generated proxy type `P` under its interface
    /// identity.
    ///
    /// Re-registering an identity replaces the previous entry; the
    /// emitted register functions call this once per type.
    pub fn register<P: ProxyBinding>(&self) {
        self.entries.insert(
            P::INTERFACE,
            RegisteredProxy {
                type_name: std::any::type_name::<P>(),
                ctor: Arc::new(|interceptor| Box::new(P::bind(interceptor)) as Box<dyn Any>),
            },
        );
    }

    /// Number of registered proxy types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no proxy types are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Locate the generated proxy type for an interface identity.
    pub fn locate(&self, interface: &InterfaceToken) -> Result<ProxyLocation, ActivationError> {
        let entry = self
            .entries
            .get(interface)
            .ok_or_else(|| ActivationError::NoProxyFound {
                interface: interface.qualified(),
            })?;
        Ok(ProxyLocation {
            interface: *interface,
            type_name: entry.type_name,
        })
    }

    /// Instantiate the proxy registered for `P`'s interface, bound to
    /// `handler`.
    pub fn instantiate<P: ProxyBinding>(
        &self,
        handler: InterceptorHandler,
    ) -> Result<P, ActivationError> {
        let factory = self.factory_for(P::INTERFACE)?;
        match factory(handler).downcast::<P>() {
            Ok(proxy) => Ok(*proxy),
            Err(_) => Err(ActivationError::ProxyTypeMismatch {
                interface: P::INTERFACE.qualified(),
                expected: std::any::type_name::<P>(),
            }),
        }
    }

    /// Instantiate by interface identity alone.
    ///
    /// This is the nullable activation surface: an absent handler is
    /// an argument error, reported before any lookup happens.
    pub fn instantiate_dyn(
        &self,
        interface: &InterfaceToken,
        handler: Option<InterceptorHandler>,
    ) -> Result<Box<dyn Any>, ActivationError> {
        let handler = handler.ok_or(ActivationError::NullHandler)?;
        let factory = self.factory_for(*interface)?;
        Ok(factory(handler))
    }

    /// Number of factories compiled so far (at most one per interface
    /// identity, however many activations happened).
    pub fn factories_compiled(&self) -> usize {
        self.factories_compiled.load(Ordering::Relaxed)
    }

    /// Fetch the cached factory for `interface`, compiling it on first
    /// use.
    fn factory_for(&self, interface: InterfaceToken) -> Result<ProxyFactory, ActivationError> {
        if let Some(factory) = self.factories.get(&interface) {
            return Ok(Arc::clone(&factory));
        }
        match self.factories.entry(interface) {
            Entry::Occupied(occupied) => Ok(Arc::clone(occupied.get())),
            Entry::Vacant(vacant) => {
                let registered =
                    self.entries
                        .get(&interface)
                        .ok_or_else(|| ActivationError::NoProxyFound {
                            interface: interface.qualified(),
                        })?;
                let factory = Arc::clone(&registered.ctor);
                drop(registered);
                self.factories_compiled.fetch_add(1, Ordering::Relaxed);
                vacant.insert(Arc::clone(&factory));
                Ok(factory)
            }
        }
    }
}

static GLOBAL_REGISTRY: Lazy<ProxyRegistry> = Lazy::new(ProxyRegistry::new);

/// The process-wide default registry.
pub fn global() -> &'static ProxyRegistry {
    &GLOBAL_REGISTRY
}

/// Locate a proxy type in the process-wide registry.
pub fn locate(interface: &InterfaceToken) -> Result<ProxyLocation, ActivationError> {
    global().locate(interface)
}

/// Instantiate a proxy from the process-wide registry.
pub fn instantiate<P: ProxyBinding>(handler: InterceptorHandler) -> Result<P, ActivationError> {
    global().instantiate(handler)
}
