//! Synthesis options.

/// How callers reach the forwarded methods of a generated proxy type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchMode {
    /// Trait impls only; callers go through the interface traits.
    ExplicitOnly,
    /// Trait impls plus inherent public aliases, so callers holding
    /// the concrete proxy type can invoke methods without importing
    /// the traits. Where two interfaces in the union declare the same
    /// method name, the alias forwards to the first-declared slot.
    #[default]
    ExplicitPlusPublic,
}

/// Options applied to every proxy rendered in one run.
#[derive(Debug, Clone)]
pub struct CodegenOptions {
    /// Dispatch surface of the generated types.
    pub dispatch: DispatchMode,
    /// Path prefix used for every runtime reference in emitted code.
    /// Emitted files carry no `use` items, so this must resolve from
    /// wherever the output is placed.
    pub runtime_path: String,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        CodegenOptions {
            dispatch: DispatchMode::default(),
            runtime_path: "veneer_runtime".to_string(),
        }
    }
}
