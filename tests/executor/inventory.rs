//! Inventory is grouped Comedy, Drama, Classic and sorted within each group,
//! whatever order the load file lists movies in.

use std::io::Cursor;

use proptest::prelude::*;
use reelstore::{Catalog, Movie, Output};

use crate::common::session;

fn genre_rank(code: char) -> usize {
    match code {
        'F' => 0,
        'D' => 1,
        'C' => 2,
        other => panic!("unexpected genre {}", other),
    }
}

fn movie_line() -> impl Strategy<Value = String> {
    let word = "[A-Z][a-z]{1,6}";
    prop_oneof![
        (0u32..20, word, word, 1900i32..2030)
            .prop_map(|(stock, director, title, year)| format!("F, {}, {}, {}, {}", stock, director, title, year)),
        (0u32..20, word, word, 1900i32..2030)
            .prop_map(|(stock, director, title, year)| format!("D, {}, {}, {}, {}", stock, director, title, year)),
        (0u32..20, word, word, word, word, 1u32..=12, 1900i32..2030).prop_map(
            |(stock, director, title, first, last, month, year)| format!(
                "C, {}, {}, {}, {} {} {} {}",
                stock, director, title, first, last, month, year
            )
        ),
    ]
}

#[test]
fn inventory_listing_layout() {
    let mut session = session();
    let output = session.execute_line("I").unwrap();
    let Output::Inventory { lines } = &output else {
        panic!("expected inventory, got {:?}", output);
    };
    assert_eq!(
        lines,
        &vec![
            "Fargo, 1996, Joel Coen (3) - Comedy".to_string(),
            "When Harry Met Sally, 1989, Rob Reiner (0) - Comedy".to_string(),
            "You've Got Mail, 1998, Nora Ephron (10) - Comedy".to_string(),
            "Phillippe De Broca, King of Hearts, 1967 (10) - Drama".to_string(),
            "Steven Spielberg, Schindler's List, 1993 (10) - Drama".to_string(),
            "1938 9, Cary Grant, George Cukor, Holiday (10) - Classics".to_string(),
            "1938 9, Katherine Hepburn, George Cukor, Holiday (10) - Classics".to_string(),
            "1939 7, Judy Garland, Victor Fleming, The Wizard of Oz (10) - Classics".to_string(),
        ]
    );
    assert!(output.to_string().starts_with("==========================\n"));
}

proptest! {
    #[test]
    fn inventory_grouped_and_sorted(lines in proptest::collection::vec(movie_line(), 1..60)) {
        let mut catalog = Catalog::new();
        let report = catalog.load_movies(Cursor::new(lines.join("\n"))).unwrap();
        prop_assert_eq!(report.loaded, lines.len());

        let movies: Vec<&dyn Movie> = catalog.inventory().collect();
        prop_assert_eq!(movies.len(), lines.len());
        for pair in movies.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let (ra, rb) = (genre_rank(a.movie_type()), genre_rank(b.movie_type()));
            prop_assert!(ra <= rb);
            if ra == rb {
                prop_assert!(a.sorting_key() <= b.sorting_key());
            }
        }
    }
}
