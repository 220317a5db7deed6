use anyhow::Result;
use auto_header::cli::{Cli, Commands};
use auto_header::commands::{hello, insert_header, InsertOutcome};
use auto_header::editor::{ConsoleHost, FileHost};

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Insert { file, verbose } => {
            run_insert(&file, verbose)?;
        }
        Commands::Hello => {
            run_hello();
        }
    }

    Ok(())
}

/// Run the insert command
fn run_insert(file_path: &std::path::Path, verbose: bool) -> Result<()> {
    let mut host = FileHost::open(file_path)?;

    if verbose {
        println!(
            "Loaded {} ({} lines)",
            file_path.display(),
            host.document().line_count()
        );
    }

    match insert_header(&mut host) {
        InsertOutcome::Inserted { guard_macro } => {
            host.save()?;
            if verbose {
                println!("Inserted include guard: {}", guard_macro);
            }
            Ok(())
        }
        // The host has already shown the rejection message.
        InsertOutcome::Rejected => std::process::exit(1),
    }
}

/// Run the hello command
fn run_hello() {
    let mut host = ConsoleHost::new();
    hello(&mut host);
}
