use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vitrine::api::ProductBrowser;
use vitrine::config::VitrineConfig;
use vitrine::engine::SortKey;
use vitrine::error::{Result, VitrineError};
use vitrine::selection::{PriceRange, SelectionPatch, PRICE_BANDS};
use vitrine::source::http::HttpCatalog;

mod args;
mod print;

use args::{Cli, Commands};
use print::{print_brands, print_categories, print_product_detail, print_products};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Config is the only command that must work without a backend.
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(key.clone(), value.clone());
    }

    let config = load_config(&cli)?;
    let source = HttpCatalog::from_config(&config);
    let browser = ProductBrowser::configured(source, &config);

    match cli.command {
        Some(Commands::List {
            categories,
            brands,
            price,
            sort,
            pages,
            all,
        }) => {
            handle_list(browser, categories, brands, price, &sort, pages, all).await
        }
        Some(Commands::Show { id }) => handle_show(browser, id).await,
        Some(Commands::Featured { limit }) => handle_featured(browser, limit).await,
        Some(Commands::Random { count }) => handle_random(browser, count).await,
        Some(Commands::Categories) => handle_categories(browser).await,
        Some(Commands::Brands) => handle_brands(browser).await,
        Some(Commands::Config { .. }) => unreachable!("handled above"),
        None => handle_list(browser, Vec::new(), Vec::new(), None, "default", 0, false).await,
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "vitrine=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn config_dir() -> PathBuf {
    ProjectDirs::from("com", "vitrine", "vitrine")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn load_config(cli: &Cli) -> Result<VitrineConfig> {
    let mut config = VitrineConfig::load(config_dir())
        .unwrap_or_default()
        .overridden_from_env();
    if let Some(url) = &cli.products_url {
        config.products_url = url.clone();
    }
    if let Some(url) = &cli.catalog_url {
        config.catalog_url = url.clone();
    }
    Ok(config)
}

#[allow(clippy::too_many_arguments)]
async fn handle_list(
    mut browser: ProductBrowser<HttpCatalog>,
    categories: Vec<u32>,
    brands: Vec<u32>,
    price: Option<String>,
    sort: &str,
    pages: usize,
    all: bool,
) -> Result<()> {
    // Validate user-typed tokens up front, before touching the network.
    let sort: SortKey = sort.parse()?;
    if let Some(token) = &price {
        if let Err(e) = token.parse::<PriceRange>() {
            eprintln!("Price bands are written as min-max, e.g.:");
            for band in PRICE_BANDS.iter() {
                eprintln!("  {:<22} {}", band.range.to_string(), band.label);
            }
            return Err(e);
        }
    }

    browser.refresh().await?;

    let mut patch = SelectionPatch::default();
    if !categories.is_empty() {
        patch.categories = Some(categories);
    }
    if !brands.is_empty() {
        patch.brands = Some(brands);
    }
    patch.price_range = price;
    browser.set_filter(patch);
    browser.set_sort(sort);

    if all {
        while browser.load_more().await {}
    } else {
        for _ in 0..pages {
            if !browser.load_more().await {
                break;
            }
        }
    }

    print_products(
        browser.visible_products(),
        browser.total_matched(),
        browser.has_more(),
    );
    Ok(())
}

async fn handle_show(browser: ProductBrowser<HttpCatalog>, id: u32) -> Result<()> {
    let product = browser.product(id).await?;
    print_product_detail(&product);
    Ok(())
}

async fn handle_featured(
    browser: ProductBrowser<HttpCatalog>,
    limit: Option<usize>,
) -> Result<()> {
    let featured = browser.featured_products(limit).await?;
    let total = featured.len();
    print_products(&featured, total, false);
    Ok(())
}

async fn handle_random(mut browser: ProductBrowser<HttpCatalog>, count: usize) -> Result<()> {
    browser.refresh().await?;
    let sample = browser.random_products(count);
    let total = sample.len();
    print_products(&sample, total, false);
    Ok(())
}

async fn handle_categories(mut browser: ProductBrowser<HttpCatalog>) -> Result<()> {
    browser.refresh().await?;
    print_categories(browser.categories());
    Ok(())
}

async fn handle_brands(mut browser: ProductBrowser<HttpCatalog>) -> Result<()> {
    browser.refresh().await?;
    print_brands(browser.brands());
    Ok(())
}

fn handle_config(key: Option<String>, value: Option<String>) -> Result<()> {
    let dir = config_dir();
    let mut config = VitrineConfig::load(&dir).unwrap_or_default();

    match (key.as_deref(), value) {
        (None, _) => {
            println!("products-url = {}", config.products_url);
            println!("catalog-url  = {}", config.catalog_url);
            println!("page-size    = {}", config.page_size);
        }
        (Some("products-url"), None) => println!("{}", config.products_url),
        (Some("catalog-url"), None) => println!("{}", config.catalog_url),
        (Some("page-size"), None) => println!("{}", config.page_size),
        (Some("products-url"), Some(v)) => {
            config.products_url = v;
            config.save(&dir)?;
        }
        (Some("catalog-url"), Some(v)) => {
            config.catalog_url = v;
            config.save(&dir)?;
        }
        (Some("page-size"), Some(v)) => {
            config.page_size = v
                .parse()
                .map_err(|_| VitrineError::InvalidFilterValue(format!("not a page size: {}", v)))?;
            config.save(&dir)?;
        }
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
        }
    }
    Ok(())
}
