use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Render the archive page document to disk.
    Build(BuildArgs),
    /// List the entries the archive page would show.
    List,
    /// Print the page's main markup with chosen rows expanded.
    Render(RenderArgs),
    /// Print the JSON Schema of entry frontmatter.
    Schema,
}

#[derive(Clone, Debug, Args)]
pub struct BuildArgs {
    /// Output file (defaults to `output.path` from config)
    #[arg(short, long)]
    pub out: Option<String>,

    /// Skip reveal animations regardless of config
    #[arg(long)]
    pub reduced_motion: bool,

    /// Emit a fully static document with no client script
    #[arg(long)]
    pub no_script: bool,

    /// Path the page is served at, for nav highlighting
    #[arg(long, default_value = "/archive")]
    pub location: String,
}

#[derive(Clone, Debug, Args)]
pub struct RenderArgs {
    /// Entry id to expand (repeatable)
    #[arg(short, long = "expand", value_name = "ID")]
    pub expand: Vec<String>,

    /// Path the page is served at
    #[arg(long, default_value = "/archive")]
    pub location: String,
}
