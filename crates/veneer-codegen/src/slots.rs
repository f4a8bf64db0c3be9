//! Method enumeration and slot identity.
//!
//! A slot is one forwarded method: a declared signature paired with
//! the interface that declares it. Slots are keyed by `(owner, name)`,
//! never by name alone, so two interfaces in one conformance union may
//! declare the same method name and both get forwarded separately.
//!
//! Enumeration order is fixed: the proxied interface's own methods in
//! declaration order, then each inherited interface in flattened
//! traversal order, then each merged interface in annotation order.
//! The first duplicate `(owner, name)` pair wins; later ones are
//! dropped.

use rustc_hash::FxHashSet;

use veneer_model::{DeclIndex, InterfaceDescriptor, InterfaceId, MethodSig};

use crate::error::CodegenError;

/// One forwarded method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSlot {
    /// Position in the overall enumeration order.
    pub index: usize,
    /// Identity of the declaring interface.
    pub owner: InterfaceId,
    /// Row of the owner in the emitted token table.
    pub owner_table: usize,
    /// Position within the owner's token row.
    pub local_index: u32,
    /// The declared signature.
    pub sig: MethodSig,
}

/// The full slot enumeration for one proxy type.
///
/// `interfaces` holds the token-table rows: every interface that
/// contributes at least one slot, in order of first contribution.
/// Interfaces whose every method was shadowed get no row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotTable {
    /// Token-table rows, in first-contribution order.
    pub interfaces: Vec<InterfaceId>,
    /// All slots, in enumeration order.
    pub slots: Vec<MethodSlot>,
}

impl SlotTable {
    /// Enumerate the slots of a descriptor's conformance union.
    pub fn build(
        descriptor: &InterfaceDescriptor,
        index: &DeclIndex,
    ) -> Result<Self, CodegenError> {
        let mut sources: Vec<(InterfaceId, Vec<MethodSig>)> =
            vec![(descriptor.id.clone(), descriptor.methods.clone())];
        for face in descriptor.inherited.iter().chain(descriptor.merged.iter()) {
            let methods =
                index
                    .methods_of(face)
                    .ok_or_else(|| CodegenError::UnknownInterface {
                        interface: face.qualified(),
                    })?;
            sources.push((face.clone(), methods.to_vec()));
        }

        let mut interfaces: Vec<InterfaceId> = Vec::new();
        let mut next_local: Vec<u32> = Vec::new();
        let mut slots: Vec<MethodSlot> = Vec::new();
        let mut seen: FxHashSet<(String, String)> = FxHashSet::default();

        for (owner, methods) in sources {
            for sig in methods {
                if !seen.insert((owner.qualified(), sig.name.clone())) {
                    continue;
                }
                let owner_table = match interfaces.iter().position(|face| *face == owner) {
                    Some(row) => row,
                    None => {
                        interfaces.push(owner.clone());
                        next_local.push(0);
                        interfaces.len() - 1
                    }
                };
                let local_index = next_local[owner_table];
                next_local[owner_table] += 1;
                slots.push(MethodSlot {
                    index: slots.len(),
                    owner: owner.clone(),
                    owner_table,
                    local_index,
                    sig,
                });
            }
        }

        Ok(SlotTable { interfaces, slots })
    }

    /// Slots declared by one interface, in local order.
    pub fn slots_of<'a>(
        &'a self,
        face: &'a InterfaceId,
    ) -> impl Iterator<Item = &'a MethodSlot> + 'a {
        self.slots.iter().filter(move |slot| slot.owner == *face)
    }
}
