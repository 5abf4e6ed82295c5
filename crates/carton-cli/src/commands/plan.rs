use std::path::Path;

use anyhow::Context;
use carton_schema::{ExportSchema, flatten};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PlanArgs;
use crate::context::AppContext;
use crate::output::output;

/// Planning data for exporting one project.
#[derive(Debug, Serialize)]
pub struct ExportPlan {
    pub storage_root: String,
    pub staging_path: String,
    pub archive_path: String,
    pub attributes: Vec<&'static str>,
    pub relations: Vec<String>,
    pub tree: ExportSchema,
}

/// Handle `carton plan`.
pub fn handle(args: &PlanArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let plan = build_plan(&args.relative, ctx)?;
    output(&plan, flags.format)
}

pub fn build_plan(relative: &str, ctx: &AppContext) -> anyhow::Result<ExportPlan> {
    let staging_path = ctx
        .paths
        .export_path(relative)
        .with_context(|| format!("cannot stage '{relative}'"))?;

    let stem = Path::new(relative)
        .file_name()
        .and_then(|name| name.to_str())
        .context("relative path has no final component")?;
    let archive_path = staging_path.join(ctx.config.export.archive_name(&format!("{stem}_export")));

    let schema = ctx.schema.get().context("failed to load export tree")?;

    Ok(ExportPlan {
        storage_root: ctx.paths.storage_root().display().to_string(),
        staging_path: staging_path.display().to_string(),
        archive_path: archive_path.display().to_string(),
        attributes: carton_core::attribute_names(),
        relations: flatten(&schema),
        tree: (*schema).clone(),
    })
}
