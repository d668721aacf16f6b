use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "vitrine")]
#[command(about = "Browse a storefront's product catalog from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Products service base URL (overrides config and environment)
    #[arg(long, global = true)]
    pub products_url: Option<String>,

    /// Category/brand service base URL (overrides config and environment)
    #[arg(long, global = true)]
    pub catalog_url: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List products, with filters and sorting applied
    #[command(alias = "ls")]
    List {
        /// Category id to include (repeatable, OR semantics)
        #[arg(short, long = "category")]
        categories: Vec<u32>,

        /// Brand id to include (repeatable, OR semantics)
        #[arg(short, long = "brand")]
        brands: Vec<u32>,

        /// Price band as "min-max", e.g. 5000000-10000000
        #[arg(short, long)]
        price: Option<String>,

        /// Sort order: default, price-asc, price-desc, name-asc, name-desc
        #[arg(short, long, default_value = "default")]
        sort: String,

        /// Pull in this many extra pages beyond the first
        #[arg(long, default_value_t = 0)]
        pages: usize,

        /// Pull in every page
        #[arg(long)]
        all: bool,
    },

    /// Show one product in full
    #[command(alias = "s")]
    Show {
        /// Product id
        id: u32,
    },

    /// List featured products
    Featured {
        /// Maximum number to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Pick random products from the catalog
    Random {
        /// Number of products to pick
        #[arg(short, long, default_value_t = 5)]
        count: usize,
    },

    /// List active categories
    Categories,

    /// List active brands
    Brands,

    /// Get or set configuration
    Config {
        /// Configuration key (products-url, catalog-url, page-size)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
