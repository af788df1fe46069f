//! Full pipeline over real files: config, load phase, command phase.

use std::fs::File;
use std::io::BufReader;

use reelstore::{Catalog, Error, MovieRegistry, Session, StoreConfig};

use crate::common::{DataDir, CUSTOMERS, MOVIES};

const COMMANDS: &str = "\
I
B 1234 D F Fargo, 1996
B 1234 D D Steven Spielberg, Schindler's List,
R 1234 D F Fargo, 1996

H 1234
B 9999 D F Fargo, 1996
";

fn open_store(data: &DataDir, config: &StoreConfig) -> reelstore::Result<Catalog> {
    let mut catalog = Catalog::with_registry(MovieRegistry::standard(), config.customer_buckets);
    catalog.initialize(&data.movies(), &data.customers())?;
    Ok(catalog)
}

#[test]
fn load_and_replay_command_file() {
    let data = DataDir::new(MOVIES, CUSTOMERS, COMMANDS);
    let config = StoreConfig::load_or_default(data.path()).unwrap();
    let catalog = open_store(&data, &config).unwrap();
    assert_eq!(catalog.movie_count(), 8);
    assert_eq!(catalog.customer_count(), 4);

    let mut session = Session::new(catalog);
    let (mut out, mut err) = (Vec::new(), Vec::new());
    let reader = BufReader::new(File::open(data.commands()).unwrap());
    let summary = session.run(reader, &mut out, &mut err).unwrap();

    assert_eq!(summary.succeeded, 5);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.skipped, 1);

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Borrow 1234 Doe John Fargo, 1996, Joel Coen (2) - Comedy"));
    assert!(out.contains("Return 1234 Doe John Fargo, 1996, Joel Coen (3) - Comedy"));
    assert!(out.contains(
        "Borrow Schindler's List Doe John Steven Spielberg, Schindler's List, 1993 (9) - Drama"
    ));
    let err = String::from_utf8(err).unwrap();
    assert_eq!(
        err.trim_end(),
        "(error) customer 9999 not found, discarding line: B 9999 D F Fargo, 1996"
    );
}

#[test]
fn config_file_sets_bucket_count() {
    let data = DataDir::new(MOVIES, CUSTOMERS, COMMANDS);
    std::fs::write(data.path().join("reelstore.toml"), "customer_buckets = 2\n").unwrap();
    let config = StoreConfig::load_or_default(data.path()).unwrap();
    assert_eq!(config.customer_buckets, 2);

    let catalog = open_store(&data, &config).unwrap();
    // Four customers forced at least two doublings.
    assert!(catalog.customer_index().bucket_count() >= 8);
    assert!(catalog.customer_index().load_factor() <= 0.75);
}

#[test]
fn missing_customer_file_fails_initialization() {
    let data = DataDir::new(MOVIES, CUSTOMERS, COMMANDS);
    std::fs::remove_file(data.customers()).unwrap();
    let err = open_store(&data, &StoreConfig::default()).unwrap_err();
    assert!(matches!(err, Error::SourceUnavailable { .. }));
    assert!(err.is_fatal());
}

#[test]
fn movie_file_without_valid_lines_fails_initialization() {
    let data = DataDir::new("Z, 1, Nobody, Nothing, 2000\n\n", CUSTOMERS, COMMANDS);
    let err = open_store(&data, &StoreConfig::default()).unwrap_err();
    assert!(matches!(err, Error::EmptyCatalog { .. }));
}

#[test]
fn empty_customer_file_is_not_fatal() {
    let data = DataDir::new(MOVIES, "", "H 1234\n");
    let catalog = open_store(&data, &StoreConfig::default()).unwrap();
    assert_eq!(catalog.customer_count(), 0);
    assert_eq!(catalog.movie_count(), 8);
}
