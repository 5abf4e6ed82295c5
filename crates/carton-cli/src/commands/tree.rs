use anyhow::Context;
use carton_schema::{ExportSchema, flatten};

use crate::cli::root_commands::TreeArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

/// Handle `carton tree`.
pub fn handle(args: &TreeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = ctx.schema.get().context("failed to load export tree")?;

    if !args.nested {
        return output(&flatten(&schema), flags.format);
    }

    match flags.format {
        OutputFormat::Text => {
            println!("{}", render_indented(&schema));
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(&*schema, flags.format),
    }
}

fn render_indented(schema: &ExportSchema) -> String {
    schema
        .walk()
        .iter()
        .map(|entry| format!("{}{}", "  ".repeat(entry.depth()), entry.node.name()))
        .collect::<Vec<_>>()
        .join("\n")
}
