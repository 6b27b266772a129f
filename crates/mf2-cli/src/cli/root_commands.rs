use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Extract microformats from an HTML file.
    Parse(ParseArgs),
    /// Print the effective parser settings.
    Settings,
    /// List registered legacy vocabularies.
    Vocab,
}

#[derive(Clone, Debug, Args)]
pub struct ParseArgs {
    /// HTML file to read, or `-` for stdin.
    pub input: String,
    /// Only print objects of this type (e.g. h-card).
    #[arg(short = 't', long = "type")]
    pub object_type: Option<String>,
    /// Search nested objects too, not only top-level ones.
    #[arg(short, long)]
    pub nested: bool,
    /// Print the single object whose root element has this id.
    #[arg(long, conflicts_with_all = ["object_type", "nested"])]
    pub id: Option<String>,
    /// Recognise legacy (v1) microformats.
    #[arg(long)]
    pub legacy: bool,
    /// Drop u-* values that do not look like URLs.
    #[arg(long)]
    pub validate_urls: bool,
    /// Do not collect rel relationships.
    #[arg(long)]
    pub no_rels: bool,
}
