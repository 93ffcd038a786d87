use std::io::{BufWriter, Write, stderr, stdout};
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, fmt};

use bank_accounts_engine::catalog::AccountTypeCatalog;
use bank_accounts_engine::clients::{InMemoryCustomerDirectory, InMemoryLedger};
use bank_accounts_engine::engine::BatchEngine;
use bank_accounts_engine::lifecycle::AccountLifecycleManager;
use bank_accounts_engine::models::Customer;
use bank_accounts_engine::processor::TransactionProcessor;
use bank_accounts_engine::storage::{AccountStore, InMemoryAccountStore};
use bank_accounts_engine::types::SystemClock;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: bank-accounts-engine [commands].csv [log_level:optional] > [accounts].csv");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let path = &args[1];
    let log_level = args
        .get(2)
        .map(|s| parse_log_level(s))
        .unwrap_or(LevelFilter::ERROR);

    setup_logging(log_level);

    let store = Arc::new(InMemoryAccountStore::new());
    let ledger = Arc::new(InMemoryLedger::new());
    let catalog = Arc::new(AccountTypeCatalog::new());
    let directory = Arc::new(seed_demo_directory());

    let lifecycle = AccountLifecycleManager::new(store.clone(), directory, catalog);
    let processor = TransactionProcessor::new(store.clone(), ledger.clone(), SystemClock);
    let engine = BatchEngine::new(lifecycle, processor, SystemClock);

    let timer = Instant::now();
    engine.run(path).await?;
    let duration = timer.elapsed();

    info!("Processed command batch in: {duration:?}");
    info!("Ledger recorded {} movement(s)", ledger.entries().len());

    write_results_to_stdout(store).await?;

    Ok(())
}

/// Stand-in for the external customer service: a handful of known customers.
fn seed_demo_directory() -> InMemoryCustomerDirectory {
    let directory = InMemoryCustomerDirectory::new();

    directory.insert_person(Customer {
        id: "C001".to_string(),
        customer_type: "PERSONAL".to_string(),
    });
    directory.insert_person(Customer {
        id: "C002".to_string(),
        customer_type: "PERSONAL".to_string(),
    });
    directory.insert_company(Customer {
        id: "E100".to_string(),
        customer_type: "EMPRESARIAL".to_string(),
    });

    directory
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    // Stdout carries the account dump, so logging goes to stderr.
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry().with(terminal_log).init();
}

async fn write_results_to_stdout(store: Arc<InMemoryAccountStore>) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    writeln!(output, "account,customer,type,balance,remaining,number")?;

    let mut accounts = store.find_all().await?;
    accounts.sort_by(|a, b| a.id.cmp(&b.id));

    for account in accounts {
        writeln!(
            output,
            "{},{},{},{},{},{}",
            account.id.unwrap_or_default(),
            account.customer_id,
            account.type_account_name,
            account.balance,
            account.remaining_monthly_transactions,
            account.account_number
        )?;
    }

    output.flush()?;

    Ok(())
}
