use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `carton attributes`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&carton_core::attribute_names(), flags.format)
}
