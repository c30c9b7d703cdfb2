//! # Seed Data Generator
//!
//! Populates the database with demo sales for development.
//!
//! ## Usage
//! ```bash
//! # Generate 200 sales (default)
//! cargo run -p steez-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p steez-db --bin seed -- --count 1000
//!
//! # Specify database path
//! cargo run -p steez-db --bin seed -- --db ./data/steez.db
//! ```
//!
//! ## Generated Sales
//! Sales cycle through the default suppliers, parties and work types and are
//! spread over the last few years, so the yearly dashboard has several
//! buckets. Payment state rotates between paid, part-paid and unpaid.

use chrono::{Datelike, Duration, Utc};
use std::env;
use steez_core::{SaleDraft, SaleInput, DEFAULT_PARTIES, DEFAULT_SUPPLIERS, DEFAULT_WORK_TYPES};
use steez_db::{Database, DbConfig};

/// Years covered by the generated dates, counting back from today.
const YEARS_BACK: i64 = 4;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 200;
    let mut db_path = String::from("./steez.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(200);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Steez Sales Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of sales to generate (default: 200)");
                println!("  -d, --db <PATH>    Database file path (default: ./steez.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Steez Sales Seed Data Generator");
    println!("==================================");
    println!("Database: {}", db_path);
    println!("Sales:    {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.sales().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} sales", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Generating sales...");

    let start = std::time::Instant::now();
    let mut generated = 0;

    for seed in 0..count {
        let draft = SaleDraft::new(generate_sale(seed));

        if let Err(e) = db.sales().create(&draft).await {
            eprintln!("Failed to insert {}: {}", draft.input().invoice_no, e);
            continue;
        }

        generated += 1;

        if generated % 50 == 0 {
            println!("  Generated {} sales...", generated);
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Generated {} sales in {:?}", generated, elapsed);

    let summary = steez_core::yearly_summary(&db.sales().list_all().await?);
    println!();
    println!("Yearly totals:");
    for year in summary {
        println!(
            "  {}: invoiced {:.2}, paid {:.2}, outstanding {:.2}",
            year.year, year.invoice_total, year.amount_paid, year.outstanding
        );
    }

    println!();
    println!("✓ Seed complete!");

    db.close().await;
    Ok(())
}

/// Generates a single sale with plausible data.
fn generate_sale(seed: usize) -> SaleInput {
    let today = Utc::now().date_naive();
    let days_back = (seed as i64 * 37) % (YEARS_BACK * 365);
    let date = today - Duration::days(days_back);

    // Invoice: 1,500.00 - 49,500.00 in steps of 500
    let invoice_total = 1500.0 + ((seed * 13) % 97) as f64 * 500.0;

    // Rotate payment state: paid, half paid, unpaid
    let amount_paid = match seed % 3 {
        0 => invoice_total,
        1 => (invoice_total / 2.0).floor(),
        _ => 0.0,
    };

    let completion_percent = match seed % 3 {
        0 => 100.0,
        1 => 50.0 + (seed % 5) as f64 * 10.0,
        _ => (seed % 4) as f64 * 10.0,
    };

    SaleInput {
        supplier: DEFAULT_SUPPLIERS[seed % DEFAULT_SUPPLIERS.len()].to_string(),
        party: DEFAULT_PARTIES[seed % DEFAULT_PARTIES.len()].to_string(),
        date: date.format("%Y-%m-%d").to_string(),
        work_type: DEFAULT_WORK_TYPES[seed % DEFAULT_WORK_TYPES.len()].to_string(),
        completion_percent,
        quotation_no: format!("Q-{}-{:04}", date.year(), seed + 1),
        po_no: format!("PO-{:05}", 10_000 + seed),
        invoice_no: format!("INV-{}-{:04}", date.year(), seed + 1),
        invoice_total,
        amount_paid,
    }
}
