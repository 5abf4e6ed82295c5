use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `carton` binary.
#[derive(Debug, Parser)]
#[command(name = "carton", version, about = "Carton - project export planning")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, text, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Export tree file, overriding `export.schema_path`
    #[arg(short, long, global = true)]
    pub schema: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            schema: self.schema.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["carton", "--format", "text", "--verbose", "attributes"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Attributes));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["carton", "tree", "--nested", "--schema", "tree.yml"])
            .expect("cli should parse");

        assert_eq!(cli.global_flags().schema.as_deref(), Some("tree.yml"));
        assert!(matches!(cli.command, Commands::Tree(ref args) if args.nested));
    }

    #[test]
    fn plan_requires_relative_path() {
        assert!(Cli::try_parse_from(["carton", "plan"]).is_err());
    }

    #[test]
    fn check_rejects_relations_with_dir() {
        assert!(Cli::try_parse_from(["carton", "check", "labels", "--dir", "out"]).is_err());
    }
}
