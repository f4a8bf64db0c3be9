//! Interface identity and generated-type naming.

use std::fmt;

/// Fixed suffix appended to an interface name to form its proxy type name.
pub const PROXY_SUFFIX: &str = "Proxy";

/// Identity of an interface: enclosing module path, bare name, and
/// generic arity.
///
/// Arity is part of the identity so that generic interfaces are keyed
/// per parameter-list shape, not per instantiation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InterfaceId {
    /// Enclosing module path (e.g. `myapp::services`). Never empty:
    /// extraction rejects declarations without one.
    pub module: String,
    /// Bare interface name (e.g. `Calc`).
    pub name: String,
    /// Number of generic type parameters.
    pub arity: usize,
}

impl InterfaceId {
    /// Create an identity for a non-generic interface.
    pub fn new(module: impl Into<String>, name: impl Into<String>) -> Self {
        Self::with_arity(module, name, 0)
    }

    /// Create an identity with an explicit generic arity.
    pub fn with_arity(module: impl Into<String>, name: impl Into<String>, arity: usize) -> Self {
        InterfaceId {
            module: module.into(),
            name: name.into(),
            arity,
        }
    }

    /// Fully qualified path to the interface (`module::Name`).
    pub fn qualified(&self) -> String {
        format!("{}::{}", self.module, self.name)
    }

    /// Name of the generated proxy type for this interface.
    ///
    /// The fixed suffix keeps lookup deterministic; the arity digits
    /// keep distinct generic arities from colliding on one emitted
    /// name (`Cache` arity 2 becomes `CacheProxy2`).
    pub fn proxy_type_name(&self) -> String {
        if self.arity == 0 {
            format!("{}{}", self.name, PROXY_SUFFIX)
        } else {
            format!("{}{}{}", self.name, PROXY_SUFFIX, self.arity)
        }
    }
}

impl fmt::Display for InterfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.module, self.name)
    }
}
