//! Interface and method tokens.
//!
//! A token is the interface-scoped identity of a method, distinct from
//! any concrete type's local implementation slot. Generated proxies
//! embed one `static` table of tokens per satisfied interface; every
//! forwarding body passes `&'static MethodToken` to the interceptor,
//! so the handler always sees which interface's method was called,
//! even when merged interfaces declare same-named methods.

use std::fmt;

/// Identity of an interface: module path, name, and generic arity.
///
/// Const-constructible so generated code can embed tokens in statics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InterfaceToken {
    module: &'static str,
    name: &'static str,
    arity: usize,
}

impl InterfaceToken {
    /// Create an interface token.
    pub const fn new(module: &'static str, name: &'static str, arity: usize) -> Self {
        InterfaceToken {
            module,
            name,
            arity,
        }
    }

    /// Enclosing module path.
    pub const fn module(&self) -> &'static str {
        self.module
    }

    /// Bare interface name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Number of generic type parameters.
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Fully qualified interface path (`module::Name`).
    pub fn qualified(&self) -> String {
        format!("{}::{}", self.module, self.name)
    }
}

impl fmt::Display for InterfaceToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.module, self.name)
    }
}

/// Interface-scoped identity of one method.
///
/// The slot is the method's index within its declaring interface's
/// token table; `(interface, slot)` is unique across a generated
/// proxy, regardless of name collisions between merged interfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MethodToken {
    interface: InterfaceToken,
    name: &'static str,
    slot: u32,
}

impl MethodToken {
    /// Create a method token.
    pub const fn new(interface: InterfaceToken, name: &'static str, slot: u32) -> Self {
        MethodToken {
            interface,
            name,
            slot,
        }
    }

    /// The declaring interface.
    pub const fn interface(&self) -> &InterfaceToken {
        &self.interface
    }

    /// Method name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Index within the declaring interface's token table.
    pub const fn slot(&self) -> u32 {
        self.slot
    }

    /// Whether this token belongs to the named interface.
    pub fn declared_by(&self, module: &str, name: &str) -> bool {
        self.interface.module == module && self.interface.name == name
    }
}

impl fmt::Display for MethodToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.interface, self.name)
    }
}
