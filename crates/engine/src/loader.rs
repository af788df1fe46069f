//! Bulk loading from line-oriented text sources
//!
//! Load phase: customers first, then movies. A bad line is rejected and
//! recorded in the [`LoadReport`]; it never stops the load. Lines are
//! decoded lossily, so a stray non-UTF-8 byte spoils only its own line.
//! Only failing to read the source at all is fatal.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{info, warn};

use reelstore_core::types::next_code;
use reelstore_core::{lossy_lines, Customer, Error, Movie, MovieRegistry, Result};

use crate::catalog::Catalog;

/// A load line that was not added to the catalog.
#[derive(Debug)]
pub struct RejectedLine {
    /// 1-based line number in the source
    pub line_no: usize,
    /// The line as read
    pub line: String,
    /// Why it was rejected
    pub error: Error,
}

/// Outcome of loading one source.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Records added to the catalog
    pub loaded: usize,
    /// Lines that were skipped, in source order
    pub rejected: Vec<RejectedLine>,
}

impl LoadReport {
    fn reject(
        &mut self,
        source: &'static str,
        line_no: usize,
        line: &str,
        error: Error,
    ) -> &RejectedLine {
        warn!(
            target: "reelstore::load",
            source,
            line_no,
            category = error.category().as_str(),
            error = %error,
            "Rejected load line"
        );
        self.rejected.push(RejectedLine {
            line_no,
            line: line.to_string(),
            error,
        });
        &self.rejected[self.rejected.len() - 1]
    }
}

/// Outcome of [`Catalog::initialize`].
#[derive(Debug, Default)]
pub struct InitReport {
    /// Customer source
    pub customers: LoadReport,
    /// Movie source
    pub movies: LoadReport,
}

/// Build a movie from a load line: `<code>,<genre-specific fields>`.
pub fn parse_movie_line(registry: &MovieRegistry, line: &str) -> Result<Box<dyn Movie>> {
    let (code, rest) = next_code(line).ok_or_else(|| Error::parse("empty movie line"))?;
    let mut movie = registry.create(code)?;
    let rest = rest
        .trim_start()
        .strip_prefix(',')
        .ok_or_else(|| Error::parse(format!("expected ',' after movie type '{}'", code)))?;
    movie.parse_data(rest)?;
    Ok(movie)
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| Error::SourceUnavailable {
            path: path.display().to_string(),
            source,
        })
}

/// Feed every non-blank line of `reader` to `accept`, numbering from 1.
fn for_each_line<R, F>(reader: R, mut accept: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(usize, &str) -> io::Result<()>,
{
    for (pos, line) in lossy_lines(reader).enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        accept(pos + 1, &line)?;
    }
    Ok(())
}

impl Catalog {
    /// Load customers, one `<id> <last> <first>` per line.
    ///
    /// # Errors
    ///
    /// Only a read failure on `reader`; bad lines land in the report.
    pub fn load_customers<R: BufRead>(&mut self, reader: R) -> Result<LoadReport> {
        self.load_customers_reporting(reader, |_| Ok(()))
    }

    /// [`load_customers`](Self::load_customers), handing each rejected line
    /// to `on_reject` as soon as it is rejected.
    ///
    /// # Errors
    ///
    /// A read failure on `reader`, or the first error `on_reject` returns.
    pub fn load_customers_reporting<R, F>(
        &mut self,
        reader: R,
        mut on_reject: F,
    ) -> Result<LoadReport>
    where
        R: BufRead,
        F: FnMut(&RejectedLine) -> io::Result<()>,
    {
        let mut report = LoadReport::default();
        for_each_line(reader, |line_no, line| {
            match Customer::parse(line).and_then(|customer| self.add_customer(customer)) {
                Ok(_) => {
                    report.loaded += 1;
                    Ok(())
                }
                Err(e) => on_reject(report.reject("customers", line_no, line, e)),
            }
        })?;
        info!(
            target: "reelstore::load",
            loaded = report.loaded,
            rejected = report.rejected.len(),
            "Customers loaded"
        );
        Ok(report)
    }

    /// Load movies, one `<code>,<fields>` per line.
    ///
    /// # Errors
    ///
    /// Only a read failure on `reader`; bad lines land in the report.
    pub fn load_movies<R: BufRead>(&mut self, reader: R) -> Result<LoadReport> {
        self.load_movies_reporting(reader, |_| Ok(()))
    }

    /// [`load_movies`](Self::load_movies), handing each rejected line to
    /// `on_reject` as soon as it is rejected.
    ///
    /// # Errors
    ///
    /// A read failure on `reader`, or the first error `on_reject` returns.
    pub fn load_movies_reporting<R, F>(
        &mut self,
        reader: R,
        mut on_reject: F,
    ) -> Result<LoadReport>
    where
        R: BufRead,
        F: FnMut(&RejectedLine) -> io::Result<()>,
    {
        let mut report = LoadReport::default();
        for_each_line(reader, |line_no, line| {
            let added = parse_movie_line(self.registry(), line).and_then(|movie| self.add_movie(movie));
            match added {
                Ok(_) => {
                    report.loaded += 1;
                    Ok(())
                }
                Err(e) => on_reject(report.reject("movies", line_no, line, e)),
            }
        })?;
        info!(
            target: "reelstore::load",
            loaded = report.loaded,
            rejected = report.rejected.len(),
            "Movies loaded"
        );
        Ok(report)
    }

    /// Load phase from files: customers, then movies.
    ///
    /// # Errors
    ///
    /// - [`Error::SourceUnavailable`] if either file cannot be opened
    /// - [`Error::EmptyCatalog`] if no movie line was accepted
    ///
    /// An empty customer roster is only logged.
    pub fn initialize(&mut self, movies: &Path, customers: &Path) -> Result<InitReport> {
        self.initialize_reporting(movies, customers, |_| Ok(()))
    }

    /// [`initialize`](Self::initialize), handing every rejected line of
    /// both sources to `on_reject` as it happens. Rejections are delivered
    /// even when the load then fails with [`Error::EmptyCatalog`].
    ///
    /// # Errors
    ///
    /// As [`initialize`](Self::initialize), plus the first error
    /// `on_reject` returns.
    pub fn initialize_reporting<F>(
        &mut self,
        movies: &Path,
        customers: &Path,
        mut on_reject: F,
    ) -> Result<InitReport>
    where
        F: FnMut(&RejectedLine) -> io::Result<()>,
    {
        let customer_source = open(customers)?;
        let movie_source = open(movies)?;

        let customers_report = self.load_customers_reporting(customer_source, &mut on_reject)?;
        if customers_report.loaded == 0 {
            warn!(target: "reelstore::load", path = %customers.display(), "No customers loaded");
        }

        let movies_report = self.load_movies_reporting(movie_source, &mut on_reject)?;
        if movies_report.loaded == 0 {
            return Err(Error::EmptyCatalog {
                path: movies.display().to_string(),
            });
        }

        Ok(InitReport {
            customers: customers_report,
            movies: movies_report,
        })
    }
}
