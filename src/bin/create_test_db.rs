use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use expense_tracker_rs::{create_employee, create_expense, initialize_db};

/// A utility for creating a test database for the expense tracker REST API
/// server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating test employees and expenses...");

    let jane = create_employee("Jane Doe", &conn)?;
    let john = create_employee("John Smith", &conn)?;

    create_expense("Coffee with client", 4.50, jane.id, &conn)?;
    create_expense("Taxi to airport", 32.00, jane.id, &conn)?;
    create_expense("Team lunch", 86.20, john.id, &conn)?;

    println!("Success!");

    Ok(())
}
