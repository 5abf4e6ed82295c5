use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the relations an export contains.
    Tree(TreeArgs),
    /// List the project attributes written to an export.
    Attributes,
    /// Resolve a staging path below the export storage root.
    Path(PathArgs),
    /// Print everything an exporter needs for one project.
    Plan(PlanArgs),
    /// Compare the relations found in an archive against the export tree.
    Check(CheckArgs),
}

#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Show nested relations as well as top-level ones.
    #[arg(long)]
    pub nested: bool,
}

#[derive(Debug, Args)]
pub struct PathArgs {
    /// Path relative to the storage root, e.g. `group/project`.
    pub relative: String,
}

#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Project path relative to the storage root, e.g. `group/project`.
    pub relative: String,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Relation names present in the archive.
    #[arg(conflicts_with = "dir")]
    pub relations: Vec<String>,

    /// Extracted archive directory; entry names minus extensions are used.
    #[arg(long)]
    pub dir: Option<String>,
}
