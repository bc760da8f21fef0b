use anyhow::{Context, Result};
use invoice_pdf::FileSink;
use tracing::{info, warn};

use super::args::{Args, CatalogArgs, Commands, OrderArgs};
use crate::{
    cart::{CartSession, OrderRequest, render_summary},
    catalog::Catalog,
    core::Config,
    invoice::{InvoiceDocument, InvoiceService},
    money::{format_fee, format_money, parse_markup},
};
use shared::models::DeliveryZone;

/// Execute one command
pub fn run(args: Args, config: &Config) -> Result<()> {
    match args.command {
        Commands::Types { catalog } => list_types(&catalog),
        Commands::Items { catalog, item_type } => list_items(&catalog, &item_type),
        Commands::Zones => {
            for zone in DeliveryZone::ALL {
                println!(
                    "{:<10} {}",
                    zone.name(),
                    format_fee(zone.fee(), zone.is_pick_up())
                );
            }
            Ok(())
        }
        Commands::Quote { order } => {
            let session = build_session(&order, config)?;
            print!("{}", render_summary(session.lines(), &session.totals()));
            Ok(())
        }
        Commands::Invoice { order, output } => {
            let session = build_session(&order, config)?;
            let result = match output {
                Some(path) => InvoiceService::new(
                    config.page_size()?,
                    FileSink::new(path),
                    &config.business_name,
                    &config.contact_email,
                )
                .generate(&session),
                None => InvoiceService::from_config(config)?.generate(&session),
            };

            match result {
                Ok(document) => {
                    print_document(&document);
                    Ok(())
                }
                Err(e) if e.is_warning() => {
                    eprintln!("Warning: {}", e);
                    Ok(())
                }
                Err(e) => Err(e).context("Failed to generate invoice"),
            }
        }
    }
}

fn load_catalog(args: &CatalogArgs) -> Result<Catalog> {
    Catalog::load_json(&args.catalog)
        .with_context(|| format!("Failed to load catalog {}", args.catalog.display()))
}

fn list_types(args: &CatalogArgs) -> Result<()> {
    let catalog = load_catalog(args)?;
    for t in catalog.types() {
        println!("{}", t.label);
    }
    Ok(())
}

fn list_items(args: &CatalogArgs, item_type: &str) -> Result<()> {
    let catalog = load_catalog(args)?;
    let items = catalog.items_of_type(item_type)?;
    for item in items {
        println!(
            "{:<28} {:>12} {:>12}",
            item.name,
            format_money(item.retail_price),
            format_money(item.discounted_price)
        );
    }
    Ok(())
}

/// Load catalog and order, then fill a fresh session
///
/// `--markup` goes through [`parse_markup`], so bad input prices at 0;
/// `--zone` replaces the zone named in the order file.
pub fn build_session(args: &OrderArgs, config: &Config) -> Result<CartSession> {
    let catalog = load_catalog(&args.catalog)?;
    let request = OrderRequest::load(&args.order)
        .with_context(|| format!("Failed to load order {}", args.order.display()))?;

    let mut session = CartSession::from_config(config);
    session.set_markup(parse_markup(args.markup.as_deref()))?;
    request.apply(&catalog, &mut session)?;

    if let Some(zone) = &args.zone {
        session.set_delivery_zone(zone.parse()?);
    }

    info!(
        lines = session.len(),
        markup = %session.markup_percent(),
        zone = %session.delivery_zone(),
        "Order loaded"
    );
    if session.is_empty() {
        warn!("Order has no items");
    }
    Ok(session)
}

fn print_document(document: &InvoiceDocument) {
    println!("{}", document.path.display());
    info!(
        file_name = %document.file_name,
        mime = %document.mime,
        pages = document.pages,
        "Invoice ready"
    );
}
