//! `veneer gen`: render proxy sources from a manifest.
//!
//! Failures are isolated per interface: one bad declaration is
//! reported and skipped while the rest still generate, and the exit
//! status reflects whether anything failed.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use veneer_codegen::{generate, plan, registration_module, CodegenOptions};
use veneer_model::{extract, DeclIndex};

use crate::output::{resolve_color_choice, StyledOutput};

pub fn execute(
    manifest_path: PathBuf,
    out_dir: PathBuf,
    options: CodegenOptions,
    color: &str,
) -> anyhow::Result<()> {
    let mut out = StyledOutput::new(resolve_color_choice(color));
    let manifest = super::load_manifest(&manifest_path)?;
    let index = DeclIndex::from_manifest(&manifest)?;

    let proxied = index.proxied();
    if proxied.is_empty() {
        out.warning("no interfaces marked for proxy generation");
        out.newline();
    }

    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let mut generated = Vec::new();
    // Emitted names derive from the bare interface name, so two
    // proxied interfaces in different modules can map to one file.
    let mut claimed: HashMap<String, String> = HashMap::new();
    let mut failures = 0usize;
    for decl in proxied {
        let qualified = DeclIndex::qualified_name_of(decl);
        let planned = extract(decl, &index)
            .map_err(anyhow::Error::from)
            .and_then(|descriptor| Ok(plan(&descriptor, &index)?));
        match planned {
            Ok(planned) => {
                let file = generate(&planned, &options);
                if let Some(previous) = claimed.get(&file.file_stem) {
                    failures += 1;
                    out.stderr_error(&format!(
                        "error: {}: proxy type {} collides with the one generated for {}; rename one of the interfaces\n",
                        qualified, file.type_name, previous
                    ));
                    continue;
                }
                claimed.insert(file.file_stem.clone(), qualified.clone());
                let path = out_dir.join(format!("{}.rs", file.file_stem));
                fs::write(&path, &file.contents)
                    .with_context(|| format!("writing {}", path.display()))?;
                out.success("generated");
                out.plain(&format!(" {} -> {}", qualified, path.display()));
                out.newline();
                generated.push(file);
            }
            Err(err) => {
                failures += 1;
                out.stderr_error(&format!("error: {}: {:#}\n", qualified, err));
            }
        }
    }

    let module_path = out_dir.join("mod.rs");
    fs::write(&module_path, registration_module(&generated))
        .with_context(|| format!("writing {}", module_path.display()))?;
    out.plain(&format!(
        "wrote {} proxy file(s) and {}",
        generated.len(),
        module_path.display()
    ));
    out.newline();
    out.flush();

    if failures > 0 {
        anyhow::bail!("proxy generation failed for {failures} interface(s)");
    }
    Ok(())
}
