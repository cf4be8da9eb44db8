use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use trip_ledger_core::models::expense::ExpenseDraft;
use trip_ledger_core::storage::snapshot::EXPORT_FILE_NAME;
use trip_ledger_core::storage::store::FileStore;
use trip_ledger_core::TripLedger;

mod render;

#[derive(Parser, Debug)]
#[command(name = "trip-ledger")]
#[command(about = "Split trip expenses against a shared per-person budget")]
struct Cli {
    /// Directory the trip state lives in (also read from `TRIP_LEDGER_DIR`).
    #[arg(long, env = "TRIP_LEDGER_DIR", default_value = ".", global = true)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the trip: setup, totals, and all expenses (the default).
    Status,
    /// Set the per-person budget and the people list.
    Setup {
        /// Per-person budget. Non-numeric input counts as 0.
        #[arg(long)]
        budget: String,
        /// Comma-separated people, e.g. "Ana, Ben, Cho". Empty falls back to "Me".
        #[arg(long, default_value = "")]
        people: String,
    },
    /// Log an expense.
    Add {
        /// Amount spent. Must be positive; it is rounded to cents.
        amount: f64,
        /// Date of the expense (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Spending category. Defaults to "Other".
        #[arg(long)]
        category: Option<String>,
        /// Short note on what the money went to.
        #[arg(long)]
        desc: Option<String>,
        /// Who paid. Defaults to the first configured person.
        #[arg(long)]
        paid_by: Option<String>,
    },
    /// Delete an expense by id.
    Delete {
        /// Id shown in the expense table.
        id: String,
    },
    /// Write a snapshot of the whole trip to a JSON file.
    Export {
        /// Output path. Defaults to trip-ledger-export.json.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Replace the whole trip with a snapshot file.
    Import {
        /// Snapshot file produced by `export` (or any compatible JSON).
        file: PathBuf,
    },
    /// Wipe everything back to the default trip.
    Reset {
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let store = FileStore::new(&cli.data_dir);
    let mut ledger = TripLedger::open(Box::new(store));
    tracing::debug!(data_dir = %cli.data_dir.display(), "opened trip ledger");

    match cli.command.unwrap_or(Command::Status) {
        Command::Status => render::render(&ledger),
        Command::Setup { budget, people } => {
            ledger.configure_from_input(&budget, &people)?;
            println!("Setup saved.");
            render::render(&ledger);
        }
        Command::Add {
            amount,
            date,
            category,
            desc,
            paid_by,
        } => {
            let draft = ExpenseDraft {
                date,
                category,
                description: desc,
                paid_by,
                amount,
            };
            match ledger.add_expense(draft)? {
                Some(id) => {
                    println!("added expense: {id}");
                    render::render(&ledger);
                }
                None => {
                    eprintln!("amount must be a positive number");
                    std::process::exit(2);
                }
            }
        }
        Command::Delete { id } => {
            if ledger.delete_expense(&id)? {
                println!("deleted expense: {id}");
                render::render(&ledger);
            } else {
                eprintln!("no expense with id: {id}");
                std::process::exit(1);
            }
        }
        Command::Export { out } => {
            let path = out.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
            let json = ledger.export_snapshot()?;
            fs::write(&path, &json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(bytes = json.len(), "snapshot exported");
            println!("exported trip to: {}", path.display());
        }
        Command::Import { file } => {
            let text = fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            match ledger.import_snapshot(&text) {
                Ok(()) => {
                    println!("imported trip from: {}", file.display());
                    render::render(&ledger);
                }
                Err(err) => {
                    tracing::warn!(%err, "import rejected, state unchanged");
                    eprintln!("{err}");
                    std::process::exit(1);
                }
            }
        }
        Command::Reset { yes } => {
            if yes || confirm("Reset everything? This deletes the whole trip.")? {
                ledger.reset()?;
                println!("Trip reset.");
                render::render(&ledger);
            } else {
                println!("Aborted.");
            }
        }
    }

    Ok(())
}

fn confirm(question: &str) -> anyhow::Result<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
