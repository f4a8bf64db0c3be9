//! Synthesis error types.

/// Errors raised while planning or rendering a proxy type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodegenError {
    /// An interface in the conformance union has no declaration in the
    /// index. Extraction normally rules this out; it can only surface
    /// when a descriptor is paired with the wrong index.
    #[error("interface {interface} is not present in the declaration index")]
    UnknownInterface {
        /// Qualified name of the missing interface.
        interface: String,
    },

    /// A generic interface in the conformance union declares more type
    /// parameters than the proxied interface provides. Inherited and
    /// merged interfaces share the proxied interface's parameters
    /// positionally, so they cannot require more of them.
    #[error("interface {face} has {face_arity} generic parameters but proxied interface {interface} declares only {arity}")]
    FaceArityMismatch {
        /// Qualified name of the proxied interface.
        interface: String,
        /// Qualified name of the offending union member.
        face: String,
        /// Generic arity of the proxied interface.
        arity: usize,
        /// Generic arity of the union member.
        face_arity: usize,
    },
}
