//! Forwarding-code synthesis.
//!
//! Renders one self-contained Rust source file per planned proxy
//! type: the struct, its static token table, the activation plumbing,
//! one trait impl per satisfied interface, and (mode permitting)
//! public forwarding aliases. Emitted code references the runtime
//! crate by fully qualified path only and carries no `use` items, so
//! the output compiles wherever it is placed.
//!
//! Rendering is a pure function of the plan and options; emitting the
//! same plan twice yields byte-identical text.

use std::fmt::Write as _;

use rustc_hash::FxHashSet;

use veneer_model::{Constraint, GenericParam, InterfaceId, MethodSig};

use crate::options::{CodegenOptions, DispatchMode};
use crate::plan::ProxyTypeDescriptor;
use crate::slots::MethodSlot;

/// One emitted proxy source file plus the metadata the module emitter
/// needs.
#[derive(Debug, Clone)]
pub struct GeneratedProxy {
    /// File stem of the output (`calc_proxy` for `CalcProxy`).
    pub file_stem: String,
    /// Name of the emitted type.
    pub type_name: String,
    /// Whether the file carries a zero-argument register function.
    /// Generic proxies do not: their concrete instantiations are
    /// registered by the caller that knows the type arguments.
    pub auto_registered: bool,
    /// Complete file contents.
    pub contents: String,
}

/// Render one planned proxy type into a generated file.
pub fn generate(plan: &ProxyTypeDescriptor, options: &CodegenOptions) -> GeneratedProxy {
    GeneratedProxy {
        file_stem: snake_case(&plan.type_name),
        type_name: plan.type_name.clone(),
        auto_registered: plan.generics.is_empty(),
        contents: emit_proxy(plan, options),
    }
}

/// Render the complete text of one proxy source file.
pub fn emit_proxy(plan: &ProxyTypeDescriptor, options: &CodegenOptions) -> String {
    let rt = options.runtime_path.as_str();
    let tokens_name = tokens_static_name(&plan.type_name);

    let mut sections: Vec<String> = Vec::new();
    sections.push(header_section(plan));
    sections.push(struct_section(plan, rt));
    sections.push(tokens_section(plan, rt, &tokens_name));
    sections.push(new_section(plan, rt));
    sections.push(binding_section(plan, rt));
    for face in &plan.satisfies {
        sections.push(trait_impl_section(plan, face, rt, &tokens_name));
    }
    if options.dispatch == DispatchMode::ExplicitPlusPublic {
        if let Some(aliases) = aliases_section(plan) {
            sections.push(aliases);
        }
    }
    if plan.generics.is_empty() {
        sections.push(register_section(plan, rt));
    }
    sections.join("\n")
}

/// Render the registration module tying a generation run together:
/// one `pub mod` and one re-export per emitted file, plus a
/// `register_all` covering every non-generic proxy.
pub fn registration_module(proxies: &[GeneratedProxy]) -> String {
    let mut s = String::new();
    writeln!(s, "// Generated by veneer; do not edit.").unwrap();
    writeln!(s).unwrap();
    for proxy in proxies {
        writeln!(s, "pub mod {};", proxy.file_stem).unwrap();
    }
    writeln!(s).unwrap();
    for proxy in proxies {
        writeln!(s, "pub use {}::{};", proxy.file_stem, proxy.type_name).unwrap();
    }
    writeln!(s).unwrap();
    writeln!(s, "/// Register every non-generic generated proxy type in the").unwrap();
    writeln!(s, "/// process-wide registry.").unwrap();
    writeln!(s, "pub fn register_all() {{").unwrap();
    for proxy in proxies.iter().filter(|p| p.auto_registered) {
        writeln!(s, "    {}::register_{}();", proxy.file_stem, proxy.file_stem).unwrap();
    }
    writeln!(s, "}}").unwrap();
    s
}

// ============================================================================
// Sections
// ============================================================================

fn header_section(plan: &ProxyTypeDescriptor) -> String {
    let mut s = String::new();
    writeln!(s, "// Generated by veneer; do not edit.").unwrap();
    writeln!(s, "// Source interface: {}", plan.interface.qualified()).unwrap();
    s
}

fn struct_section(plan: &ProxyTypeDescriptor, rt: &str) -> String {
    let mut s = String::new();
    writeln!(s, "/// Generated proxy for `{}`.", plan.interface.qualified()).unwrap();
    writeln!(
        s,
        "pub struct {}{} {{",
        plan.type_name,
        generic_decl(&plan.generics)
    )
    .unwrap();
    writeln!(s, "    interceptor: {}::InterceptorHandler,", rt).unwrap();
    if !plan.generics.is_empty() {
        writeln!(
            s,
            "    _marker: ::std::marker::PhantomData<fn() -> ({})>,",
            param_names(&plan.generics)
        )
        .unwrap();
    }
    writeln!(s, "}}").unwrap();
    s
}

fn tokens_section(plan: &ProxyTypeDescriptor, rt: &str, tokens_name: &str) -> String {
    let mut s = String::new();
    writeln!(s, "static {}: &[&[{}::MethodToken]] = &[", tokens_name, rt).unwrap();
    for (row, face) in plan.slots.interfaces.iter().enumerate() {
        writeln!(s, "    &[").unwrap();
        for slot in plan.slots.slots.iter().filter(|slot| slot.owner_table == row) {
            writeln!(s, "        {}::MethodToken::new(", rt).unwrap();
            writeln!(
                s,
                "            {}::InterfaceToken::new(\"{}\", \"{}\", {}),",
                rt, face.module, face.name, face.arity
            )
            .unwrap();
            writeln!(s, "            \"{}\",", slot.sig.name).unwrap();
            writeln!(s, "            {},", slot.local_index).unwrap();
            writeln!(s, "        ),").unwrap();
        }
        writeln!(s, "    ],").unwrap();
    }
    writeln!(s, "];").unwrap();
    s
}

fn new_section(plan: &ProxyTypeDescriptor, rt: &str) -> String {
    let mut s = String::new();
    writeln!(
        s,
        "impl{} {}{} {{",
        generic_decl(&plan.generics),
        plan.type_name,
        generic_args(&plan.generics)
    )
    .unwrap();
    writeln!(s, "    /// Construct a proxy bound to `interceptor`.").unwrap();
    writeln!(
        s,
        "    pub fn new(interceptor: {}::InterceptorHandler) -> Self {{",
        rt
    )
    .unwrap();
    if plan.generics.is_empty() {
        writeln!(s, "        {} {{ interceptor }}", plan.type_name).unwrap();
    } else {
        writeln!(s, "        {} {{", plan.type_name).unwrap();
        writeln!(s, "            interceptor,").unwrap();
        writeln!(s, "            _marker: ::std::marker::PhantomData,").unwrap();
        writeln!(s, "        }}").unwrap();
    }
    writeln!(s, "    }}").unwrap();
    writeln!(s, "}}").unwrap();
    s
}

fn binding_section(plan: &ProxyTypeDescriptor, rt: &str) -> String {
    let mut s = String::new();
    writeln!(
        s,
        "impl{} {}::ProxyBinding for {}{} {{",
        generic_decl(&plan.generics),
        rt,
        plan.type_name,
        generic_args(&plan.generics)
    )
    .unwrap();
    writeln!(s, "    const INTERFACE: {}::InterfaceToken =", rt).unwrap();
    writeln!(
        s,
        "        {}::InterfaceToken::new(\"{}\", \"{}\", {});",
        rt, plan.interface.module, plan.interface.name, plan.interface.arity
    )
    .unwrap();
    writeln!(s).unwrap();
    writeln!(
        s,
        "    fn bind(interceptor: {}::InterceptorHandler) -> Self {{",
        rt
    )
    .unwrap();
    writeln!(s, "        Self::new(interceptor)").unwrap();
    writeln!(s, "    }}").unwrap();
    writeln!(s, "}}").unwrap();
    s
}

fn trait_impl_section(
    plan: &ProxyTypeDescriptor,
    face: &InterfaceId,
    rt: &str,
    tokens_name: &str,
) -> String {
    let mut s = String::new();
    writeln!(
        s,
        "impl{} {} for {}{} {{",
        generic_decl(&plan.generics),
        face_path(plan, face),
        plan.type_name,
        generic_args(&plan.generics)
    )
    .unwrap();
    for (i, slot) in plan.slots.slots_of(face).enumerate() {
        if i > 0 {
            writeln!(s).unwrap();
        }
        emit_method(&mut s, slot, rt, tokens_name);
    }
    writeln!(s, "}}").unwrap();
    s
}

fn emit_method(s: &mut String, slot: &MethodSlot, rt: &str, tokens_name: &str) {
    let sig = &slot.sig;
    writeln!(s, "    fn {} {{", signature(sig)).unwrap();
    writeln!(
        s,
        "        let token = &{}[{}][{}];",
        tokens_name, slot.owner_table, slot.local_index
    )
    .unwrap();

    let args_expr = if sig.params.is_empty() {
        "Vec::new()"
    } else {
        writeln!(s, "        let args = vec![").unwrap();
        for param in &sig.params {
            writeln!(s, "            {}::CallValue::new({}),", rt, param.name).unwrap();
        }
        writeln!(s, "        ];").unwrap();
        "args"
    };
    let type_args_expr = if sig.generics.is_empty() {
        "Vec::new()"
    } else {
        writeln!(s, "        let type_args = vec![").unwrap();
        for generic in &sig.generics {
            writeln!(s, "            {}::TypeArg::of::<{}>(),", rt, generic.name).unwrap();
        }
        writeln!(s, "        ];").unwrap();
        "type_args"
    };

    match &sig.returns {
        Some(ret) => {
            writeln!(s, "        self.interceptor").unwrap();
            writeln!(
                s,
                "            .invoke(self, token, {}, {})",
                args_expr, type_args_expr
            )
            .unwrap();
            writeln!(s, "            .take::<{}>()", ret.as_str()).unwrap();
        }
        None => {
            writeln!(
                s,
                "        let _ = self.interceptor.invoke(self, token, {}, {});",
                args_expr, type_args_expr
            )
            .unwrap();
        }
    }
    writeln!(s, "    }}").unwrap();
}

/// Inherent public aliases: one per distinct method name, forwarding
/// to the first-declared slot. A method named `new` would shadow the
/// constructor and is skipped.
fn aliases_section(plan: &ProxyTypeDescriptor) -> Option<String> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let aliased: Vec<&MethodSlot> = plan
        .slots
        .slots
        .iter()
        .filter(|slot| slot.sig.name != "new" && seen.insert(slot.sig.name.as_str()))
        .collect();
    if aliased.is_empty() {
        return None;
    }

    let mut s = String::new();
    writeln!(
        s,
        "impl{} {}{} {{",
        generic_decl(&plan.generics),
        plan.type_name,
        generic_args(&plan.generics)
    )
    .unwrap();
    for (i, slot) in aliased.iter().enumerate() {
        if i > 0 {
            writeln!(s).unwrap();
        }
        writeln!(s, "    pub fn {} {{", signature(&slot.sig)).unwrap();
        let turbofish = if slot.sig.generics.is_empty() {
            String::new()
        } else {
            format!("::<{}>", param_names(&slot.sig.generics))
        };
        let mut call = format!(
            "        <Self as {}>::{}{}(self",
            face_path(plan, &slot.owner),
            slot.sig.name,
            turbofish
        );
        for param in &slot.sig.params {
            call.push_str(", ");
            call.push_str(&param.name);
        }
        call.push(')');
        writeln!(s, "{}", call).unwrap();
        writeln!(s, "    }}").unwrap();
    }
    writeln!(s, "}}").unwrap();
    Some(s)
}

fn register_section(plan: &ProxyTypeDescriptor, rt: &str) -> String {
    let mut s = String::new();
    writeln!(
        s,
        "/// Register the generated proxy for `{}`.",
        plan.interface.qualified()
    )
    .unwrap();
    writeln!(s, "pub fn register_{}() {{", snake_case(&plan.type_name)).unwrap();
    writeln!(s, "    {}::global().register::<{}>();", rt, plan.type_name).unwrap();
    writeln!(s, "}}").unwrap();
    s
}

// ============================================================================
// Rendering helpers
// ============================================================================

/// Method signature without the leading `fn`:
/// `add5_to(&self, start_val: i32) -> i32`.
fn signature(sig: &MethodSig) -> String {
    let mut out = format!("{}{}(&self", sig.name, generic_decl(&sig.generics));
    for param in &sig.params {
        write!(out, ", {}: {}", param.name, param.ty.as_str()).unwrap();
    }
    out.push(')');
    if let Some(ret) = &sig.returns {
        write!(out, " -> {}", ret.as_str()).unwrap();
    }
    out
}

/// `<K: Copy + 'static, V: 'static>`, or empty.
fn generic_decl(params: &[GenericParam]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let rendered: Vec<String> = params
        .iter()
        .map(|p| format!("{}: {}", p.name, bounds(p)))
        .collect();
    format!("<{}>", rendered.join(", "))
}

/// `<K, V>`, or empty.
fn generic_args(params: &[GenericParam]) -> String {
    if params.is_empty() {
        return String::new();
    }
    format!("<{}>", param_names(params))
}

/// `K, V`.
fn param_names(params: &[GenericParam]) -> String {
    let names: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
    names.join(", ")
}

/// Rust bounds for one generic parameter.
///
/// Value-type and unmanaged constraints map to `Copy`; interface
/// constraints map to the named trait; reference-type and not-null
/// constraints need no bound, since every Rust type already satisfies
/// them. Everything crossing the interceptor boundary is boxed, so
/// `'static` is always appended.
fn bounds(param: &GenericParam) -> String {
    let mut out: Vec<String> = Vec::new();
    for constraint in &param.constraints {
        match constraint {
            Constraint::ValueType | Constraint::Unmanaged => {
                if !out.iter().any(|b| b == "Copy") {
                    out.push("Copy".to_string());
                }
            }
            Constraint::Implements(target) => out.push(target.as_str().to_string()),
            Constraint::ReferenceType | Constraint::NotNull => {}
        }
    }
    out.push("'static".to_string());
    out.join(" + ")
}

/// Trait path for a union member, with the proxied interface's type
/// parameters applied positionally when the member is generic.
fn face_path(plan: &ProxyTypeDescriptor, face: &InterfaceId) -> String {
    if face.arity == 0 {
        return face.qualified();
    }
    let names: Vec<&str> = plan
        .generics
        .iter()
        .take(face.arity)
        .map(|p| p.name.as_str())
        .collect();
    format!("{}<{}>", face.qualified(), names.join(", "))
}

/// `CalcProxy` to `calc_proxy`.
fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i != 0 {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// `CalcProxy` to `CALC_PROXY_TOKENS`.
fn tokens_static_name(type_name: &str) -> String {
    format!("{}_TOKENS", snake_case(type_name).to_ascii_uppercase())
}
