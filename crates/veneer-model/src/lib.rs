//! Interface descriptor model for the veneer proxy generator.
//!
//! This crate defines the language-neutral shape of a proxied interface
//! and turns raw manifest declarations into normalized descriptors:
//!
//! - [`decl`]: manifest declarations as they are written by the user
//!   (serde-deserializable, annotation included)
//! - [`ident`]: interface identity and deterministic proxy-type naming
//! - [`ty`]: type references, generic parameters and constraints,
//!   method signatures
//! - [`descriptor`]: the declaration index and the extraction pass
//!   producing [`InterfaceDescriptor`]s
//!
//! Extraction is the only fallible step; its errors
//! ([`ExtractError`]) are configuration errors in the sense of the
//! generator's error taxonomy: fatal for the affected interface,
//! harmless for its siblings.

pub mod decl;
pub mod descriptor;
pub mod error;
pub mod ident;
pub mod ty;

pub use decl::{DeclKind, Manifest, ProxyAnnotation, TypeDecl};
pub use descriptor::{extract, DeclIndex, InterfaceDescriptor};
pub use error::ExtractError;
pub use ident::InterfaceId;
pub use ty::{Constraint, GenericParam, MethodDescriptor, MethodSig, Param, TypeRef};
