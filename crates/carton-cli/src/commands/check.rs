use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, bail};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CheckArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `carton check`.
pub fn handle(args: &CheckArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let present = match &args.dir {
        Some(dir) => relations_in_dir(Path::new(dir))?,
        None => args.relations.clone(),
    };

    let schema = ctx.schema.get().context("failed to load export tree")?;
    let report = schema.check_entries(&present);
    output(&report, flags.format)?;

    if !report.is_complete() {
        bail!(
            "archive does not match the export tree ({} missing, {} unexpected)",
            report.missing.len(),
            report.unexpected.len()
        );
    }
    Ok(())
}

/// Relation names of the entries in an extracted archive directory.
///
/// `issues.json` and `issues/` both count as `issues`. Hidden entries are
/// ignored.
fn relations_in_dir(dir: &Path) -> anyhow::Result<Vec<String>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read archive directory {}", dir.display()))?;

    let mut names = BTreeSet::new();
    for entry in entries {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            tracing::warn!(entry = ?entry.path(), "skipping non UTF-8 archive entry");
            continue;
        };
        if file_name.starts_with('.') {
            continue;
        }
        let relation = file_name.split('.').next().unwrap_or(file_name);
        names.insert(relation.to_string());
    }
    Ok(names.into_iter().collect())
}
