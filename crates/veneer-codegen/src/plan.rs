//! Per-interface synthesis plan.
//!
//! A plan pins down everything the emitter needs for one proxy type:
//! the emitted type name, the generic parameters re-declared on it,
//! the full conformance union (trait impls to render), and the slot
//! enumeration.

use veneer_model::{DeclIndex, GenericParam, InterfaceDescriptor, InterfaceId};

use crate::error::CodegenError;
use crate::slots::SlotTable;

/// Synthesis plan for one proxy type.
#[derive(Debug, Clone)]
pub struct ProxyTypeDescriptor {
    /// The proxied interface.
    pub interface: InterfaceId,
    /// Name of the emitted type.
    pub type_name: String,
    /// Generic parameters re-declared on the emitted type.
    pub generics: Vec<GenericParam>,
    /// Every interface the emitted type satisfies: the proxied
    /// interface first, then inherited, then merged.
    pub satisfies: Vec<InterfaceId>,
    /// The slot enumeration.
    pub slots: SlotTable,
}

/// Build the synthesis plan for one extracted descriptor.
///
/// Generic interfaces in the union share the proxied interface's type
/// parameters positionally; a member needing more parameters than the
/// proxied interface declares is rejected here rather than surfacing
/// as broken emitted code.
pub fn plan(
    descriptor: &InterfaceDescriptor,
    index: &DeclIndex,
) -> Result<ProxyTypeDescriptor, CodegenError> {
    let slots = SlotTable::build(descriptor, index)?;

    let mut satisfies = Vec::with_capacity(1 + descriptor.inherited.len() + descriptor.merged.len());
    satisfies.push(descriptor.id.clone());
    satisfies.extend(descriptor.inherited.iter().cloned());
    satisfies.extend(descriptor.merged.iter().cloned());

    for face in &satisfies[1..] {
        if face.arity > descriptor.id.arity {
            return Err(CodegenError::FaceArityMismatch {
                interface: descriptor.id.qualified(),
                face: face.qualified(),
                arity: descriptor.id.arity,
                face_arity: face.arity,
            });
        }
    }

    Ok(ProxyTypeDescriptor {
        interface: descriptor.id.clone(),
        type_name: descriptor.id.proxy_type_name(),
        generics: descriptor.generics.clone(),
        satisfies,
        slots,
    })
}
