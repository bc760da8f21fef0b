use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "Cabinet storefront: browse the catalog, price an order, generate invoices")]
#[command(version)]
pub struct Args {
    /// Log level (overrides LOG_LEVEL)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List cabinet types
    Types {
        #[command(flatten)]
        catalog: CatalogArgs,
    },
    /// List the items of one type
    Items {
        #[command(flatten)]
        catalog: CatalogArgs,
        /// Cabinet type (any capitalization)
        #[arg(short, long = "type")]
        item_type: String,
    },
    /// Price an order and print the quote
    Quote {
        #[command(flatten)]
        order: OrderArgs,
    },
    /// Price an order and write the invoice PDF
    Invoice {
        #[command(flatten)]
        order: OrderArgs,
        /// Write to this path instead of a temporary file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List delivery zones and their fees
    Zones,
}

#[derive(ClapArgs, Debug)]
pub struct CatalogArgs {
    /// Catalog JSON file
    #[arg(short, long, env = "CATALOG_FILE")]
    pub catalog: PathBuf,
}

#[derive(ClapArgs, Debug)]
pub struct OrderArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,
    /// Order JSON file
    #[arg(short, long)]
    pub order: PathBuf,
    /// Markup percent applied to every line (invalid values fall back to 0)
    #[arg(short, long)]
    pub markup: Option<String>,
    /// Delivery zone (overrides the order file)
    #[arg(short, long)]
    pub zone: Option<String>,
}
