//! Clap command definition.

use std::path::PathBuf;

use clap::{value_parser, Arg, Command};

/// Build the CLI: three optional positional input paths.
pub fn build_cli() -> Command {
    Command::new("reelstore")
        .about("Video rental store: load movies and customers, then replay commands")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("movies")
                .index(1)
                .value_parser(value_parser!(PathBuf))
                .help("Movie load file (default: data4movies.txt)"),
        )
        .arg(
            Arg::new("customers")
                .index(2)
                .value_parser(value_parser!(PathBuf))
                .help("Customer load file (default: data4customers.txt)"),
        )
        .arg(
            Arg::new("commands")
                .index(3)
                .value_parser(value_parser!(PathBuf))
                .help("Command file (default: data4commands.txt)"),
        )
}
