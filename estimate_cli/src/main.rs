//! # Quotient CLI
//!
//! Runs an estimate file through the engine and prints the bill of
//! materials and report sheets as plain-text tables.
//!
//! Usage:
//!
//! ```text
//! estimate_cli <estimate.json> [--sheet sales|cost|materials|acceptance]
//! ```
//!
//! Without `--sheet`, the detail list and all four sheets are printed.
//! Exits with status 1 on a validation or parse failure.

use std::process::ExitCode;
use std::sync::Arc;

use estimate_core::catalog::{builtin_reference_store, LookupService, ReferenceCache};
use estimate_core::costing::PricedBillOfMaterials;
use estimate_core::estimate::Estimate;
use estimate_core::sheets;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (path, sheet) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("usage: estimate_cli <estimate.json> [--sheet sales|cost|materials|acceptance]");
            return ExitCode::FAILURE;
        }
    };

    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("error: cannot read {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };
    let estimate: Estimate = match serde_json::from_str(&raw) {
        Ok(estimate) => estimate,
        Err(e) => {
            eprintln!("error: {} is not a valid estimate file: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    let lookup = LookupService::new(
        Arc::new(builtin_reference_store()),
        Arc::new(ReferenceCache::with_default_ttl()),
    );

    let priced = match estimate.calculate(&lookup) {
        Ok(priced) => priced,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match sheet.as_deref() {
        None => {
            print_detail(&priced);
            print_sales(&priced);
            print_cost(&priced);
            print_materials(&priced);
            print_acceptance(&priced, &estimate);
        }
        Some("sales") => print_sales(&priced),
        Some("cost") => print_cost(&priced),
        Some("materials") => print_materials(&priced),
        Some("acceptance") => print_acceptance(&priced, &estimate),
        Some(other) => {
            eprintln!("error: unknown sheet '{}'", other);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

fn parse_args(args: &[String]) -> Result<(String, Option<String>), String> {
    let mut path = None;
    let mut sheet = None;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--sheet" {
            match iter.next() {
                Some(name) => sheet = Some(name.clone()),
                None => return Err("error: --sheet requires a name".to_string()),
            }
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(format!("error: unexpected argument '{}'", arg));
        }
    }
    match path {
        Some(path) => Ok((path, sheet)),
        None => Err("error: missing estimate file".to_string()),
    }
}

fn rule(width: usize) {
    println!("{}", "=".repeat(width));
}

fn print_detail(priced: &PricedBillOfMaterials) {
    rule(100);
    println!("  DETAIL - BILL OF MATERIALS");
    rule(100);
    println!(
        "{:>4}  {:<12} {:<34} {:>8} {:>8} {:>10} {:>10}",
        "#", "CODE", "DESCRIPTION", "QTY", "SIZE", "WEIGHT", "PRICE"
    );
    for item in &priced.bill.items {
        if item.is_separator {
            println!();
            continue;
        }
        if item.is_header {
            println!("      -- {} --", item.description);
            continue;
        }
        println!(
            "{:>4}  {:<12} {:<34} {:>8.2} {:>8.2} {:>10.1} {:>10.2}",
            item.line_no,
            item.code,
            truncate(&item.description, 34),
            item.quantity,
            item.size,
            item.total_weight,
            item.total_price,
        );
    }
    println!();
    println!(
        "  {} items, {:.1} kg, material cost {:.2}",
        priced.bill.item_count, priced.bill.total_weight, priced.bill.total_price
    );
    println!();
}

fn print_sales(priced: &PricedBillOfMaterials) {
    rule(64);
    println!("  SALES ROLLUP");
    rule(64);
    println!(
        "{:<8} {:>12} {:>12} {:>12} {:>8}",
        "CODE", "WEIGHT", "COST", "PRICE", "RATIO"
    );
    for row in sheets::sales_rollup(priced) {
        let label = if row.is_total { "TOTAL" } else { &row.sales_code };
        println!(
            "{:<8} {:>12.1} {:>12.2} {:>12.2} {:>8.3}",
            label, row.weight, row.cost, row.selling_price, row.markup_ratio
        );
    }
    println!();
}

fn print_cost(priced: &PricedBillOfMaterials) {
    rule(64);
    println!("  COST CATEGORIES");
    rule(64);
    println!(
        "{:<24} {:>12} {:>12} {:>12}",
        "CATEGORY", "WEIGHT", "COST", "PRICE"
    );
    for row in sheets::cost_breakdown(priced) {
        println!(
            "{:<24} {:>12.1} {:>12.2} {:>12.2}",
            row.label, row.weight, row.cost, row.selling_price
        );
    }
    println!();
}

fn print_materials(priced: &PricedBillOfMaterials) {
    rule(72);
    println!("  RAW MATERIALS");
    rule(72);
    for row in sheets::raw_material_breakdown(priced) {
        if row.is_header {
            println!("  {} ({:.1} kg)", row.category, row.weight);
        } else {
            println!(
                "    {:<12} {:<32} {:>8.2} {:>10.1}",
                row.code,
                truncate(&row.description, 32),
                row.quantity,
                row.weight
            );
        }
    }
    println!();
}

fn print_acceptance(priced: &PricedBillOfMaterials, estimate: &Estimate) {
    let summary = sheets::job_acceptance_summary(priced, &estimate.building);
    rule(48);
    println!("  JOB ACCEPTANCE - {}", estimate.meta.job_number);
    rule(48);
    println!("  Client:          {}", estimate.meta.client);
    println!("  Frame type:      {}", summary.frame_type);
    println!("  Freight terms:   {}", summary.freight_terms);
    println!("  Eaves (f/b):     {:.1} / {:.1} m", summary.eave_front_m, summary.eave_back_m);
    println!("  Total weight:    {:.2} t", summary.total_weight_t);
    println!("  Material cost:   {:.2}", summary.total_cost);
    println!("  Selling price:   {:.2}", summary.total_selling);
    match summary.price_per_ton {
        Some(ppt) => println!("  Price per ton:   {:.2}", ppt),
        None => println!("  Price per ton:   n/a"),
    }
    println!("  Supply:          {:.2}", summary.supply);
    println!("  Erection:        {:.2}", summary.erection);
    println!("  Contract:        {:.2}", summary.contract);
    println!("  Delivery:        {} weeks", summary.delivery_weeks);
    println!();
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
