//! Forwarding-code synthesizer for veneer proxies.
//!
//! Turns extracted interface descriptors into self-contained Rust
//! source files. The pipeline has three stages:
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | Enumerate | [`slots`] | Ordered method slots keyed by declaring interface |
//! | Plan | [`plan`] | Type name, generics, conformance union |
//! | Render | [`emit`] | One source file per proxy, plus the registration module |
//!
//! Rendering is deterministic: the same descriptor and options always
//! produce byte-identical output, so generated files can be committed
//! and diffed.

#![warn(missing_docs)]

pub mod emit;
pub mod error;
pub mod options;
pub mod plan;
pub mod slots;

pub use emit::{emit_proxy, generate, registration_module, GeneratedProxy};
pub use error::CodegenError;
pub use options::{CodegenOptions, DispatchMode};
pub use plan::{plan, ProxyTypeDescriptor};
pub use slots::{MethodSlot, SlotTable};
