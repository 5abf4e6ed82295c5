use std::path::PathBuf;

use anyhow::Context;
use carton_config::CartonConfig;
use carton_core::ExportPaths;
use carton_schema::{SchemaCache, SchemaSource, source_for};

use crate::cli::GlobalFlags;

pub type DynSource = Box<dyn SchemaSource + Send + Sync>;

/// Everything a command needs, built once per invocation.
pub struct AppContext {
    pub config: CartonConfig,
    pub paths: ExportPaths,
    pub schema: SchemaCache<DynSource>,
}

impl AppContext {
    /// Build the context from loaded configuration.
    ///
    /// `--schema` on the command line wins over `export.schema_path`.
    pub fn init(config: CartonConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let paths = config
            .shared
            .export_paths()
            .context("failed to derive export storage root")?;

        let schema_file = flags
            .schema
            .as_ref()
            .map(PathBuf::from)
            .or_else(|| config.export.schema_file());
        let source = source_for(schema_file);
        tracing::debug!(
            storage_root = %paths.storage_root().display(),
            schema = %source.name(),
            "initialized carton context"
        );

        Ok(Self {
            config,
            paths,
            schema: SchemaCache::new(source),
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use std::path::Path;

    fn flags(schema: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet: true,
            verbose: false,
            schema: schema.map(str::to_string),
        }
    }

    #[test]
    fn defaults_use_bundled_tree() {
        let ctx = AppContext::init(CartonConfig::default(), &flags(None)).expect("context");
        assert_eq!(
            ctx.paths.storage_root(),
            Path::new("shared/tmp/project_exports")
        );
        assert!(ctx.schema.flatten().expect("bundled tree").contains(&"issues".to_string()));
    }

    #[test]
    fn flag_overrides_configured_schema() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let path = dir.path().join("tree.yml");
        std::fs::write(&path, "- only_this\n").expect("write");

        let mut config = CartonConfig::default();
        config.export.schema_path = "does/not/exist.yml".to_string();

        let ctx = AppContext::init(config, &flags(path.to_str())).expect("context");
        assert_eq!(ctx.schema.flatten().expect("override tree"), vec!["only_this"]);
    }

    #[test]
    fn empty_shared_path_fails() {
        let mut config = CartonConfig::default();
        config.shared.path = String::new();
        assert!(AppContext::init(config, &flags(None)).is_err());
    }
}
