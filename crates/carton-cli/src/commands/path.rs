use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PathArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct PathResponse {
    storage_root: String,
    path: String,
}

/// Handle `carton path`.
pub fn handle(args: &PathArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let path = ctx
        .paths
        .export_path(&args.relative)
        .with_context(|| format!("cannot stage '{}'", args.relative))?;

    let response = PathResponse {
        storage_root: ctx.paths.storage_root().display().to_string(),
        path: path.display().to_string(),
    };
    output(&response, flags.format)
}
