//! Command-line behaviour: argument parsing through `cli::run`

use clap::Parser;
use rust_decimal::Decimal;
use shared::error::{AppError, ErrorCode};
use shared::models::DeliveryZone;
use std::fs;
use std::path::{Path, PathBuf};
use storefront::Config;
use storefront::cli::{self, Args, Commands, build_session};

const CATALOG_JSON: &str = r#"[
    {"TYPE": "Base Cabinet", "ITEM": "B12", "ORIGINAL PRICE": 250, "PRICE WITH DISCOUNT": 100},
    {"TYPE": "Wall Cabinet", "ITEM": "W3030", "ORIGINAL PRICE": 180, "PRICE WITH DISCOUNT": 90}
]"#;

const PICK_UP_ORDER: &str =
    r#"{"delivery_zone": "Pick Up", "items": [{"type": "Base Cabinet", "item": "B12", "qty": 2}]}"#;

/// Catalog and order files in their own directory
struct Fixture {
    dir: tempfile::TempDir,
    catalog: PathBuf,
    order: PathBuf,
}

impl Fixture {
    fn new(order_json: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let catalog = dir.path().join("catalog.json");
        let order = dir.path().join("order.json");
        fs::write(&catalog, CATALOG_JSON).unwrap();
        fs::write(&order, order_json).unwrap();
        Self {
            dir,
            catalog,
            order,
        }
    }

    fn args(&self, command: &str, extra: &[&str]) -> Args {
        let mut argv = vec![
            "storefront".to_string(),
            command.to_string(),
            "--catalog".to_string(),
            self.catalog.display().to_string(),
            "--order".to_string(),
            self.order.display().to_string(),
        ];
        argv.extend(extra.iter().map(|s| s.to_string()));
        Args::try_parse_from(argv).unwrap()
    }
}

fn config(invoice_dir: Option<&Path>) -> Config {
    Config {
        business_name: "Cabinet Outlet".into(),
        contact_email: "orders@cabinet-outlet.example".into(),
        shipping_fee: Decimal::from(400),
        tax_rate: Decimal::new(65, 3),
        invoice_dir: invoice_dir.map(Path::to_path_buf),
        page_size: "letter".into(),
        log_level: "info".into(),
        log_dir: None,
        environment: "development".into(),
    }
}

fn session_for(args: Args) -> storefront::CartSession {
    match args.command {
        Commands::Quote { order } | Commands::Invoice { order, .. } => {
            build_session(&order, &config(None)).unwrap()
        }
        other => panic!("not an order command: {:?}", other),
    }
}

#[test]
fn test_zone_flag_overrides_order_file() {
    let fixture = Fixture::new(PICK_UP_ORDER);

    let session = session_for(fixture.args("quote", &[]));
    assert_eq!(session.delivery_zone(), DeliveryZone::PickUp);

    let session = session_for(fixture.args("quote", &["--zone", "metro"]));
    assert_eq!(session.delivery_zone(), DeliveryZone::Metro);
    assert_eq!(session.totals().delivery_fee, Decimal::from(250));
}

#[test]
fn test_unknown_zone_flag_is_an_error() {
    let fixture = Fixture::new(PICK_UP_ORDER);
    let args = fixture.args("quote", &["-z", "mars"]);
    let Commands::Quote { order } = args.command else {
        panic!("expected quote");
    };

    let err = build_session(&order, &config(None)).unwrap_err();
    let app = err.downcast_ref::<AppError>().unwrap();
    assert_eq!(app.code, ErrorCode::UnknownDeliveryZone);
}

#[test]
fn test_markup_flag() {
    let fixture = Fixture::new(PICK_UP_ORDER);

    let session = session_for(fixture.args("quote", &["--markup", "30%"]));
    assert_eq!(session.markup_percent(), Decimal::from(30));
    assert_eq!(session.totals().grand_total, Decimal::new(67690, 2));

    // Unparsable, negative or oversized markup prices at base
    for bad in ["abc", "-5", "10000000000000000000000000"] {
        let flag = format!("--markup={}", bad);
        let session = session_for(fixture.args("quote", &[flag.as_str()]));
        assert_eq!(session.markup_percent(), Decimal::ZERO, "{}", bad);
        assert_eq!(session.lines()[0].final_price, Decimal::from(100));
    }
}

#[test]
fn test_invoice_on_empty_order_writes_nothing() {
    let fixture = Fixture::new(r#"{"items": []}"#);
    let invoice_dir = tempfile::tempdir().unwrap();
    let config = config(Some(invoice_dir.path()));

    cli::run(fixture.args("invoice", &[]), &config).unwrap();
    assert_eq!(fs::read_dir(invoice_dir.path()).unwrap().count(), 0);

    let target = fixture.dir.path().join("out.pdf");
    let output = target.display().to_string();
    cli::run(fixture.args("invoice", &["--output", output.as_str()]), &config).unwrap();
    assert!(!target.exists());
}

#[test]
fn test_invoice_to_output_path() {
    let fixture = Fixture::new(PICK_UP_ORDER);
    let target = fixture.dir.path().join("invoices").join("order-1.pdf");
    let output = target.display().to_string();

    cli::run(
        fixture.args("invoice", &["--output", output.as_str(), "--zone", "local"]),
        &config(None),
    )
    .unwrap();

    let bytes = fs::read(&target).unwrap();
    assert!(bytes.starts_with(b"%PDF-1.4"));
    assert_eq!(lopdf::Document::load_mem(&bytes).unwrap().get_pages().len(), 1);
}

#[test]
fn test_invoice_into_invoice_dir() {
    let fixture = Fixture::new(PICK_UP_ORDER);
    let invoice_dir = tempfile::tempdir().unwrap();

    cli::run(
        fixture.args("invoice", &[]),
        &config(Some(invoice_dir.path())),
    )
    .unwrap();

    let written: Vec<_> = fs::read_dir(invoice_dir.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(written.len(), 1);
    assert_eq!(written[0].extension().unwrap(), "pdf");
}

#[test]
fn test_unknown_order_item_fails_without_output() {
    let fixture = Fixture::new(
        r#"{"items": [{"type": "Base Cabinet", "item": "B99", "qty": 1}]}"#,
    );
    let invoice_dir = tempfile::tempdir().unwrap();

    let err = cli::run(
        fixture.args("invoice", &[]),
        &config(Some(invoice_dir.path())),
    )
    .unwrap_err();
    assert_eq!(
        err.downcast_ref::<AppError>().unwrap().code,
        ErrorCode::CatalogItemNotFound
    );
    assert_eq!(fs::read_dir(invoice_dir.path()).unwrap().count(), 0);
}
