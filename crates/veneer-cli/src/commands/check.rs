//! `veneer check`: validate a manifest without writing output.
//!
//! Runs every proxied interface through extraction and planning and
//! reports each outcome, so a broken merge list or missing module
//! surfaces before anything touches the filesystem.

use std::collections::HashMap;
use std::path::PathBuf;

use veneer_codegen::plan;
use veneer_model::{extract, DeclIndex};

use crate::output::{resolve_color_choice, StyledOutput};

pub fn execute(manifest_path: PathBuf, color: &str) -> anyhow::Result<()> {
    let mut out = StyledOutput::new(resolve_color_choice(color));
    let manifest = super::load_manifest(&manifest_path)?;
    let index = DeclIndex::from_manifest(&manifest)?;

    let mut checked = 0usize;
    let mut failures = 0usize;
    let mut claimed: HashMap<String, String> = HashMap::new();
    for decl in index.proxied() {
        checked += 1;
        let qualified = DeclIndex::qualified_name_of(decl);
        let planned = extract(decl, &index)
            .map_err(anyhow::Error::from)
            .and_then(|descriptor| Ok(plan(&descriptor, &index)?));
        match planned {
            Ok(planned) => {
                if let Some(previous) = claimed.get(&planned.type_name) {
                    failures += 1;
                    out.stderr_error(&format!(
                        "error: {}: proxy type {} collides with the one for {}; rename one of the interfaces\n",
                        qualified, planned.type_name, previous
                    ));
                    continue;
                }
                claimed.insert(planned.type_name.clone(), qualified.clone());
                out.success("ok");
                out.plain(&format!(
                    " {} ({} method(s) across {} interface(s))",
                    qualified,
                    planned.slots.slots.len(),
                    planned.satisfies.len()
                ));
                out.newline();
            }
            Err(err) => {
                failures += 1;
                out.stderr_error(&format!("error: {}: {:#}\n", qualified, err));
            }
        }
    }

    out.plain(&format!("checked {} proxied interface(s)", checked));
    out.newline();
    out.flush();

    if failures > 0 {
        anyhow::bail!("{failures} interface(s) failed validation");
    }
    Ok(())
}
