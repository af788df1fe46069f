//! A record's own search key equals the key built from a command naming it.

use proptest::prelude::*;
use reelstore::{Movie, MovieRegistry, MovieRequest};
use reelstore_engine::parse_movie_line;

fn words() -> impl Strategy<Value = String> {
    proptest::collection::vec("[A-Z][a-z']{0,6}", 1..4).prop_map(|w| w.join(" "))
}

fn name() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,8}"
}

fn check(registry: &MovieRegistry, load: &str, command: &str) -> Result<(), TestCaseError> {
    let movie = parse_movie_line(registry, load).unwrap();
    let request = MovieRequest::parse(command, registry).unwrap();
    prop_assert_eq!(request.genre, movie.movie_type());
    prop_assert_eq!(request.search_key, movie.search_key());
    Ok(())
}

proptest! {
    #[test]
    fn comedy_keys_match(director in words(), title in words(), year in 1900i32..2030) {
        let registry = MovieRegistry::standard();
        check(
            &registry,
            &format!("F, 1, {}, {}, {}", director, title, year),
            &format!(" 1234 D F {}, {}", title, year),
        )?;
    }

    #[test]
    fn drama_keys_match(director in words(), title in words(), year in 1900i32..2030) {
        let registry = MovieRegistry::standard();
        check(
            &registry,
            &format!("D, 1, {}, {}, {}", director, title, year),
            &format!(" 1234 D D {}, {},", director, title),
        )?;
    }

    #[test]
    fn classic_keys_match(
        director in words(),
        title in words(),
        first in name(),
        last in name(),
        month in 1u32..=12,
        year in 1900i32..2030,
    ) {
        let registry = MovieRegistry::standard();
        check(
            &registry,
            &format!("C, 1, {}, {}, {} {} {} {}", director, title, first, last, month, year),
            &format!(" 1234 D C {} {} {} {}", month, year, first, last),
        )?;
    }
}
