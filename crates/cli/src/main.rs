//! reelstore: replay a video store's command file against its catalog.
//!
//! Two phases:
//! - **Load**: customers, then movies. Bad lines are reported and skipped.
//! - **Serve**: every command line is executed in order. Bad lines are
//!   reported and skipped.
//!
//! Exit status: 0 on completion, 1 when the load phase fails, 2 when the
//! command file cannot be processed.

mod commands;

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process;

use tracing::Level;

use reelstore_core::{Error, MovieRegistry};
use reelstore_engine::{Catalog, RejectedLine, StoreConfig};
use reelstore_executor::Session;

use commands::build_cli;

/// Load phase failed
const EXIT_INIT: i32 = 1;
/// Command phase failed
const EXIT_COMMANDS: i32 = 2;

fn main() {
    let matches = build_cli().get_matches();

    let mut config = match StoreConfig::load_or_default(Path::new(".")) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("(error) {}", e);
            process::exit(EXIT_INIT);
        }
    };
    for (name, slot) in [
        ("movies", &mut config.movies),
        ("customers", &mut config.customers),
        ("commands", &mut config.commands),
    ] {
        if let Some(path) = matches.get_one::<PathBuf>(name) {
            *slot = path.clone();
        }
    }

    init_logging(&config.log_level);

    let catalog = match load_catalog(&config) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("(error) {}", e);
            eprintln!("Failed to initialize store");
            process::exit(EXIT_INIT);
        }
    };

    if let Err(e) = serve(catalog, &config.commands) {
        eprintln!("(error) {}", e);
        eprintln!("Failed to process command file");
        process::exit(EXIT_COMMANDS);
    }

    println!("Done!");
}

/// Install the stderr subscriber at the configured level.
fn init_logging(level: &str) {
    let level = level.parse::<Level>().unwrap_or(Level::ERROR);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn load_catalog(config: &StoreConfig) -> Result<Catalog, Error> {
    let stderr = io::stderr();
    let mut err = stderr.lock();

    let mut catalog = Catalog::with_registry(MovieRegistry::standard(), config.customer_buckets);
    let report = catalog.initialize_reporting(&config.movies, &config.customers, |rejected| {
        report_rejection(&mut err, rejected)
    })?;
    if report.customers.loaded == 0 {
        writeln!(
            err,
            "Warning: no customers loaded from {}",
            config.customers.display()
        )?;
    }
    Ok(catalog)
}

fn report_rejection<W: Write>(err: &mut W, rejected: &RejectedLine) -> io::Result<()> {
    writeln!(
        err,
        "(error) {}, discarding line: {}",
        rejected.error,
        rejected.line.trim()
    )
}

fn serve(catalog: Catalog, commands: &Path) -> Result<(), Error> {
    let file = File::open(commands).map_err(|source| Error::SourceUnavailable {
        path: commands.display().to_string(),
        source,
    })?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    let mut session = Session::new(catalog);
    session.run(BufReader::new(file), &mut out, &mut err)?;
    out.flush()?;
    Ok(())
}
