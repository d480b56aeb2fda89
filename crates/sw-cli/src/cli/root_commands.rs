use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Oversold products across every category.
    Urgent,
    /// Products below their restock threshold in one category.
    Category(CategoryArgs),
    /// List registered categories.
    Categories,
    /// Fetch a few unfiltered products to check connectivity.
    Probe(ProbeArgs),
    /// Serve the HTML dashboard.
    Serve(ServeArgs),
}

/// Arguments for `stockwatch category`.
#[derive(Clone, Debug, Args)]
pub struct CategoryArgs {
    /// Category slug (see `stockwatch categories`).
    pub slug: String,
}

/// Arguments for `stockwatch probe`.
#[derive(Clone, Debug, Args)]
pub struct ProbeArgs {
    /// Number of products to fetch (1-250).
    #[arg(long, default_value_t = sw_catalog::query::DEFAULT_PROBE_LIMIT)]
    pub limit: u16,
}

/// Arguments for `stockwatch serve`.
#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Listen address (defaults to `server.bind` from config).
    #[arg(long)]
    pub bind: Option<String>,
}
