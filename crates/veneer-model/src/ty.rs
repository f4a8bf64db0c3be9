//! Type references, generic constraints, and method signatures.

use serde::{Deserialize, Serialize};

use crate::ident::InterfaceId;

/// Opaque textual reference to a Rust type (e.g. `i32`, `Vec<T>`).
///
/// The generator renders type references verbatim; it never inspects
/// their structure. Signature types must denote owned `'static` types,
/// since argument and return values cross the interceptor boundary as
/// boxed call values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRef(pub String);

impl TypeRef {
    /// Create a type reference from its textual form.
    pub fn new(text: impl Into<String>) -> Self {
        TypeRef(text.into())
    }

    /// Textual form of the reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TypeRef {
    fn from(s: &str) -> Self {
        TypeRef(s.to_string())
    }
}

/// Constraint on a generic type parameter.
///
/// The five kinds carried by the descriptor model. How each kind maps
/// to a Rust bound is the synthesizer's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    /// Parameter must be a reference type.
    ReferenceType,
    /// Parameter must be a value type.
    ValueType,
    /// Parameter must not be nullable.
    NotNull,
    /// Parameter must be an unmanaged value type.
    Unmanaged,
    /// Parameter must implement the named interface or trait.
    Implements(TypeRef),
}

/// A generic type parameter with its constraint set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericParam {
    /// Parameter name (e.g. `T`).
    pub name: String,
    /// Constraints on the parameter, in declaration order.
    #[serde(default)]
    pub constraints: Vec<Constraint>,
}

impl GenericParam {
    /// Create an unconstrained parameter.
    pub fn new(name: impl Into<String>) -> Self {
        GenericParam {
            name: name.into(),
            constraints: Vec::new(),
        }
    }

    /// Add a constraint.
    pub fn constrained(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }
}

/// A method parameter: name plus declared type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    /// Parameter name.
    pub name: String,
    /// Declared type.
    pub ty: TypeRef,
}

impl Param {
    /// Create a parameter.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Param {
            name: name.into(),
            ty: TypeRef::new(ty),
        }
    }
}

/// A declared method signature.
///
/// A method's generic parameters are independent of its interface's;
/// both are re-declared verbatim on the generated type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSig {
    /// Method name.
    pub name: String,
    /// The method's own generic parameters.
    #[serde(default)]
    pub generics: Vec<GenericParam>,
    /// Ordered parameter list.
    #[serde(default)]
    pub params: Vec<Param>,
    /// Declared return type; `None` means the method returns no value.
    #[serde(default)]
    pub returns: Option<TypeRef>,
}

impl MethodSig {
    /// Create a signature with no parameters and no return value.
    pub fn new(name: impl Into<String>) -> Self {
        MethodSig {
            name: name.into(),
            generics: Vec::new(),
            params: Vec::new(),
            returns: None,
        }
    }

    /// Add a parameter.
    pub fn param(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.params.push(Param::new(name, ty));
        self
    }

    /// Add a generic parameter.
    pub fn generic(mut self, param: GenericParam) -> Self {
        self.generics.push(param);
        self
    }

    /// Set the return type.
    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.returns = Some(TypeRef::new(ty));
        self
    }
}

/// A method paired with the identity of the interface that declares it.
///
/// Uniqueness is keyed by `(declared_by, sig.name)`, never by name
/// alone: two interfaces may legally declare a same-named method, and
/// both must be forwarded separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    /// The declared signature.
    pub sig: MethodSig,
    /// Identity of the declaring interface.
    pub declared_by: InterfaceId,
}
