//! Borrow / Return / History scenarios against a loaded catalog.

use crate::common::{run, session, stock, transactions};
use reelstore::{Error, Output, TransactionKind};

#[test]
fn fargo_borrow_return_return() {
    let mut session = session();

    let output = session.execute_line("B 1234 D F Fargo, 1996").unwrap();
    assert!(matches!(
        output,
        Output::Rental {
            kind: TransactionKind::Borrow,
            ..
        }
    ));
    assert_eq!(stock(session.catalog(), 'F', "Fargo,1996"), 2);
    assert_eq!(transactions(session.catalog(), "1234"), 1);

    session.execute_line("R 1234 D F Fargo, 1996").unwrap();
    assert_eq!(stock(session.catalog(), 'F', "Fargo,1996"), 3);

    let err = session.execute_line("R 1234 D F Fargo, 1996").unwrap_err();
    assert!(matches!(err, Error::NotBorrowed { .. }));
    assert_eq!(stock(session.catalog(), 'F', "Fargo,1996"), 3);
    assert_eq!(transactions(session.catalog(), "1234"), 2);
}

#[test]
fn history_for_unknown_customer() {
    let mut session = session();
    let err = session.execute_line("H 9999").unwrap_err();
    assert!(matches!(err, Error::CustomerNotFound { .. }));
    assert!(err.to_string().contains("not found"));
    assert!(!err.is_fatal());
}

#[test]
fn borrow_with_no_stock() {
    let mut session = session();
    let err = session
        .execute_line("B 1234 D F When Harry Met Sally, 1989")
        .unwrap_err();
    assert!(matches!(err, Error::OutOfStock { .. }));
    assert_eq!(stock(session.catalog(), 'F', "When Harry Met Sally,1989"), 0);
    assert_eq!(transactions(session.catalog(), "1234"), 0);
}

#[test]
fn classic_versions_are_distinct_movies() {
    let mut session = session();
    session
        .execute_line("B 3333 D C 9 1938 Cary Grant")
        .unwrap();
    assert_eq!(stock(session.catalog(), 'C', "9 1938 Cary Grant"), 9);
    assert_eq!(stock(session.catalog(), 'C', "9 1938 Katherine Hepburn"), 10);
}

#[test]
fn command_file_with_mixed_lines() {
    let mut session = session();
    let (out, err) = run(
        &mut session,
        "\
B 8888 D C 7 1939 Judy Garland
X 1234
B 1234 Z C 9 1938 Cary Grant
B 1234 D C 13 1938 Cary Grant
H 8888
",
    );

    let out: Vec<&str> = out.lines().collect();
    assert_eq!(
        out,
        vec![
            "Borrow 8888 Pig Porky 1939 7, Judy Garland, Victor Fleming, The Wizard of Oz (9) - Classics",
            "History for 8888 Pig Porky",
            "==========================",
            "History for 8888 Pig Porky:",
            "Borrow The Wizard of Oz Pig Porky 1939 7, Judy Garland, Victor Fleming, The Wizard of Oz (9) - Classics",
        ]
    );

    let err: Vec<&str> = err.lines().collect();
    assert_eq!(err.len(), 3);
    assert!(err.iter().all(|line| line.starts_with("(error) ")));
    assert!(err[2].contains("release month 13"));
}

#[test]
fn history_with_no_transactions() {
    let mut session = session();
    let (out, err) = run(&mut session, "H 4444\n");
    assert!(err.is_empty());
    assert_eq!(
        out,
        "History for 4444 Moose Bullwinkle\n==========================\nHistory for 4444 Moose Bullwinkle:\nNo history for Moose Bullwinkle\n"
    );
}
