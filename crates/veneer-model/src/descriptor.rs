//! Declaration index and descriptor extraction.
//!
//! [`DeclIndex`] plays the role of the host compiler's semantic model:
//! it resolves textual type references against the manifest's
//! declaration set. [`extract`] normalizes one annotated interface
//! into an [`InterfaceDescriptor`], flattening its transitive
//! inheritance chain and validating its merge list.

use rustc_hash::FxHashMap;

use crate::decl::{DeclKind, Manifest, TypeDecl};
use crate::error::ExtractError;
use crate::ident::InterfaceId;
use crate::ty::{GenericParam, MethodSig};

/// Index over a manifest's declarations, keyed by qualified name.
#[derive(Debug, Default)]
pub struct DeclIndex {
    decls: FxHashMap<String, TypeDecl>,
}

impl DeclIndex {
    /// Build an index from a manifest.
    ///
    /// Fails on colliding qualified names; everything else is checked
    /// lazily during extraction.
    pub fn from_manifest(manifest: &Manifest) -> Result<Self, ExtractError> {
        let mut decls = FxHashMap::default();
        for decl in &manifest.types {
            let qualified = Self::qualified_name_of(decl);
            if decls.insert(qualified.clone(), decl.clone()).is_some() {
                return Err(ExtractError::DuplicateDecl { qualified });
            }
        }
        Ok(DeclIndex { decls })
    }

    /// Qualified name of a declaration, module-less decls included.
    pub fn qualified_name_of(decl: &TypeDecl) -> String {
        match &decl.module {
            Some(module) => format!("{}::{}", module, decl.name),
            None => decl.name.clone(),
        }
    }

    /// Look up a declaration by its qualified name.
    pub fn decl(&self, qualified: &str) -> Option<&TypeDecl> {
        self.decls.get(qualified)
    }

    /// Look up the declaration backing an interface identity.
    pub fn decl_for(&self, id: &InterfaceId) -> Option<&TypeDecl> {
        self.decls.get(&id.qualified())
    }

    /// Declared methods of an interface identity, if known.
    pub fn methods_of(&self, id: &InterfaceId) -> Option<&[MethodSig]> {
        self.decl_for(id).map(|d| d.methods.as_slice())
    }

    /// All declarations carrying the proxy annotation, sorted by
    /// qualified name so generation order is deterministic.
    pub fn proxied(&self) -> Vec<&TypeDecl> {
        let mut found: Vec<(&String, &TypeDecl)> = self
            .decls
            .iter()
            .filter(|(_, d)| d.is_proxied())
            .collect();
        found.sort_by(|a, b| a.0.cmp(b.0));
        found.into_iter().map(|(_, d)| d).collect()
    }

    /// Resolve a textual reference relative to a declaring module.
    ///
    /// Qualified references (`a::B`) are looked up directly; bare
    /// references are tried in the declaring module first, then as a
    /// module-less global.
    pub fn resolve(&self, reference: &str, context_module: Option<&str>) -> Option<&TypeDecl> {
        if reference.contains("::") {
            return self.decls.get(reference);
        }
        if let Some(module) = context_module {
            if let Some(decl) = self.decls.get(&format!("{}::{}", module, reference)) {
                return Some(decl);
            }
        }
        self.decls.get(reference)
    }
}

/// Normalized descriptor of an interface marked for proxy generation.
///
/// Created once per annotated interface; immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDescriptor {
    /// Interface identity.
    pub id: InterfaceId,
    /// The interface's generic parameters with constraints.
    pub generics: Vec<GenericParam>,
    /// Its own declared methods, in declaration order.
    pub methods: Vec<MethodSig>,
    /// Transitively inherited interfaces, flattened in first-seen
    /// depth-first order.
    pub inherited: Vec<InterfaceId>,
    /// Explicitly merged additional interfaces, in annotation order,
    /// minus any that the inheritance chain already covers.
    pub merged: Vec<InterfaceId>,
}

/// Identity of a declared interface (module + name + arity).
fn id_of(decl: &TypeDecl) -> Result<InterfaceId, ExtractError> {
    let module = decl.module.as_deref().ok_or_else(|| ExtractError::MissingModule {
        interface: decl.name.clone(),
    })?;
    Ok(InterfaceId::with_arity(
        module,
        decl.name.clone(),
        decl.generics.len(),
    ))
}

/// Extract the normalized descriptor for one annotated interface.
///
/// Only method members are carried over from the interface and every
/// interface in its union; properties are ignored by design.
pub fn extract(decl: &TypeDecl, index: &DeclIndex) -> Result<InterfaceDescriptor, ExtractError> {
    if decl.kind != DeclKind::Interface {
        return Err(ExtractError::NotAnInterface {
            qualified: DeclIndex::qualified_name_of(decl),
        });
    }
    let id = id_of(decl)?;

    let mut inherited = Vec::new();
    collect_inherited(decl, &id, index, &mut inherited)?;

    let mut merged = Vec::new();
    if let Some(annotation) = &decl.proxy {
        for entry in &annotation.merge {
            let target = index
                .resolve(entry, decl.module.as_deref())
                .ok_or_else(|| ExtractError::UnknownType {
                    interface: id.qualified(),
                    reference: entry.clone(),
                })?;
            if target.kind != DeclKind::Interface {
                return Err(ExtractError::MergeNotAnInterface {
                    interface: id.qualified(),
                    entry: entry.clone(),
                });
            }
            let target_id = id_of(target)?;
            if target_id != id && !inherited.contains(&target_id) && !merged.contains(&target_id) {
                merged.push(target_id);
            }
        }
    }

    Ok(InterfaceDescriptor {
        id,
        generics: decl.generics.clone(),
        methods: decl.methods.clone(),
        inherited,
        merged,
    })
}

/// Depth-first, first-seen flattening of the inheritance chain.
fn collect_inherited(
    decl: &TypeDecl,
    root: &InterfaceId,
    index: &DeclIndex,
    out: &mut Vec<InterfaceId>,
) -> Result<(), ExtractError> {
    for reference in &decl.extends {
        let parent = index
            .resolve(reference, decl.module.as_deref())
            .ok_or_else(|| ExtractError::UnknownType {
                interface: root.qualified(),
                reference: reference.clone(),
            })?;
        if parent.kind != DeclKind::Interface {
            return Err(ExtractError::NotAnInterface {
                qualified: DeclIndex::qualified_name_of(parent),
            });
        }
        let parent_id = id_of(parent)?;
        if parent_id != *root && !out.contains(&parent_id) {
            out.push(parent_id);
            collect_inherited(parent, root, index, out)?;
        }
    }
    Ok(())
}
