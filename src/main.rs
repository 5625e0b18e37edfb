use clap::Parser;
use fieldpay::application::engine::BillingEngine;
use fieldpay::error::BillingError;
use fieldpay::interfaces::csv::summary_writer::SummaryWriter;
use fieldpay::interfaces::csv::technician_reader::TechnicianReader;
use fieldpay::interfaces::csv::work_order_reader::WorkOrderReader;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Technician roster CSV file
    technicians: PathBuf,

    /// Work orders CSV file
    orders: PathBuf,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Print the aggregate report as JSON instead of the technician listing
    #[arg(long)]
    report: bool,
}

fn in_memory_engine() -> BillingEngine {
    use fieldpay::infrastructure::in_memory::{InMemoryTechnicianStore, InMemoryWorkOrderStore};

    BillingEngine::new(
        Box::new(InMemoryTechnicianStore::new()),
        Box::new(InMemoryWorkOrderStore::new()),
    )
}

#[cfg(feature = "storage-rocksdb")]
fn persistent_engine(db_path: PathBuf) -> Result<BillingEngine> {
    use fieldpay::infrastructure::rocksdb::RocksDBStore;

    let store = RocksDBStore::open(db_path).into_diagnostic()?;
    Ok(BillingEngine::new(
        Box::new(store.clone()),
        Box::new(store),
    ))
}

#[cfg(not(feature = "storage-rocksdb"))]
fn persistent_engine(_db_path: PathBuf) -> Result<BillingEngine> {
    eprintln!(
        "WARNING: Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
    );
    Ok(in_memory_engine())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let engine = match cli.db_path {
        Some(db_path) => persistent_engine(db_path)?,
        None => in_memory_engine(),
    };

    // Load the roster first so orders can be checked against it
    let roster = File::open(cli.technicians).into_diagnostic()?;
    for technician_result in TechnicianReader::new(roster).technicians() {
        match technician_result {
            Ok(technician) => {
                if let Err(e) = engine.register_technician(technician).await {
                    eprintln!("Error registering technician: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading technician: {}", e);
            }
        }
    }

    let orders = File::open(cli.orders).into_diagnostic()?;
    for order_result in WorkOrderReader::new(orders).orders() {
        match order_result {
            Ok(order) => {
                if let Err(e) = engine.submit_order(order).await {
                    eprintln!("Error processing work order: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading work order: {}", e);
            }
        }
    }

    let stdout = io::stdout();
    if cli.report {
        match engine.build_report().await {
            Ok(report) => {
                serde_json::to_writer_pretty(stdout.lock(), &report).into_diagnostic()?;
                println!();
            }
            Err(BillingError::EmptyDatasetError) => {
                eprintln!("No data: report requires at least one active technician");
                std::process::exit(2);
            }
            Err(e) => return Err(e).into_diagnostic(),
        }
    } else {
        let summaries = engine.technician_summaries().await.into_diagnostic()?;
        let mut writer = SummaryWriter::new(stdout.lock());
        writer.write_summaries(&summaries).into_diagnostic()?;
    }

    Ok(())
}
