//! Raw manifest declarations.
//!
//! A manifest lists the statically declared types the generator can
//! see, in the form the user writes them: module, name, generics,
//! inherited interfaces, methods, and the optional proxy annotation.
//! These are syntactic inputs; [`crate::descriptor`] normalizes them.
//!
//! Non-interface declarations (`kind = "record"`) may appear so that
//! merge-list entries naming them can be rejected explicitly instead
//! of failing on a silent type cast.

use serde::{Deserialize, Serialize};

use crate::ty::{GenericParam, MethodSig, Param};

/// A full interface manifest: the generator's input source set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    /// All declared types, in declaration order.
    #[serde(default)]
    pub types: Vec<TypeDecl>,
}

/// Kind of a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclKind {
    /// An interface: only these can be proxied or merged.
    Interface,
    /// A plain data record; valid in signatures, invalid in merge lists.
    Record,
}

impl Default for DeclKind {
    fn default() -> Self {
        DeclKind::Interface
    }
}

/// The proxy-generation annotation on an interface.
///
/// Marks the interface for generation and optionally lists additional
/// interfaces to merge into the generated type's conformance set. The
/// merge list accepts zero or more interface references, bare
/// (`"Audit"`, resolved in the declaring module) or qualified
/// (`"myapp::Audit"`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProxyAnnotation {
    /// Additional interfaces to merge, in annotation order.
    #[serde(default)]
    pub merge: Vec<String>,
}

/// One declared type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeDecl {
    /// Declaration kind.
    #[serde(default)]
    pub kind: DeclKind,
    /// Enclosing module path. Optional in the syntax; interfaces
    /// marked for proxying must have one (the generated type needs a
    /// resolvable location).
    #[serde(default)]
    pub module: Option<String>,
    /// Type name.
    pub name: String,
    /// Generic type parameters with their constraints.
    #[serde(default)]
    pub generics: Vec<GenericParam>,
    /// Directly inherited interfaces, by reference.
    #[serde(default)]
    pub extends: Vec<String>,
    /// Declared methods, in declaration order.
    #[serde(default)]
    pub methods: Vec<MethodSig>,
    /// Declared properties. Parsed for completeness and ignored by
    /// extraction: only plain methods are proxied.
    #[serde(default)]
    pub properties: Vec<Param>,
    /// The proxy annotation, when present.
    #[serde(default)]
    pub proxy: Option<ProxyAnnotation>,
}

impl TypeDecl {
    /// Create an interface declaration with the given module and name.
    pub fn interface(module: impl Into<String>, name: impl Into<String>) -> Self {
        TypeDecl {
            kind: DeclKind::Interface,
            module: Some(module.into()),
            name: name.into(),
            generics: Vec::new(),
            extends: Vec::new(),
            methods: Vec::new(),
            properties: Vec::new(),
            proxy: None,
        }
    }

    /// Create a record declaration.
    pub fn record(module: impl Into<String>, name: impl Into<String>) -> Self {
        TypeDecl {
            kind: DeclKind::Record,
            ..TypeDecl::interface(module, name)
        }
    }

    /// Add a method.
    pub fn method(mut self, sig: MethodSig) -> Self {
        self.methods.push(sig);
        self
    }

    /// Add a generic parameter.
    pub fn generic(mut self, param: GenericParam) -> Self {
        self.generics.push(param);
        self
    }

    /// Add an inherited interface reference.
    pub fn extends(mut self, name: impl Into<String>) -> Self {
        self.extends.push(name.into());
        self
    }

    /// Mark for proxy generation with the given merge list.
    pub fn proxied(mut self, merge: &[&str]) -> Self {
        self.proxy = Some(ProxyAnnotation {
            merge: merge.iter().map(|s| s.to_string()).collect(),
        });
        self
    }

    /// Whether this declaration carries the proxy annotation.
    pub fn is_proxied(&self) -> bool {
        self.proxy.is_some()
    }
}
