//! Extraction error types.

/// Configuration errors raised while extracting an interface
/// descriptor.
///
/// Each error is fatal for the affected interface only; sibling
/// interfaces in the same manifest still extract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    /// The interface has no enclosing module, so the generated type
    /// has no resolvable location.
    #[error("interface {interface} has no enclosing module; the generated proxy type needs a resolvable location")]
    MissingModule {
        /// Name of the offending interface.
        interface: String,
    },

    /// A merge-list entry resolved to a declaration that is not an
    /// interface.
    #[error("merge entry {entry} on interface {interface} is not an interface type")]
    MergeNotAnInterface {
        /// The interface carrying the annotation.
        interface: String,
        /// The offending merge-list entry.
        entry: String,
    },

    /// A referenced type could not be resolved in the declaration set.
    #[error("unknown type {reference} referenced by interface {interface}")]
    UnknownType {
        /// The interface holding the reference.
        interface: String,
        /// The unresolved reference text.
        reference: String,
    },

    /// Two declarations share one qualified name.
    #[error("duplicate declaration of {qualified}")]
    DuplicateDecl {
        /// The colliding qualified name.
        qualified: String,
    },

    /// The declaration passed for extraction is not an interface.
    #[error("{qualified} is not an interface and cannot be proxied")]
    NotAnInterface {
        /// Qualified name of the declaration.
        qualified: String,
    },
}
