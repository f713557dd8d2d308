//! Line-oriented edge lists.
//!
//! One link per line: `from to [weight]`, fields separated by commas,
//! spaces or tabs. Lines that are blank or whose first field starts with
//! `#` are ignored, a missing weight means 1, and extra fields are ignored.
//!
//! ```text
//! # from  to  weight
//! A, B, 4
//! A  C  1
//! C  B
//! ```

use std::borrow::Cow;
use std::io::BufRead;
use std::str::FromStr;

use log::{debug, warn};
use serde::Serialize;

use crate::graph::{DirectedGraph, Weight};
use crate::{Error, Result};

/// Name used for standard input
pub const STDIN_NAME: &str = "stdin";

/// Token that selects standard input on the command line
pub const STDIN_TOKEN: &str = "-";

fn is_separator(c: char) -> bool {
    matches!(c, ',' | ' ' | '\t' | '\r' | '\n')
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Fail on an unparsable weight instead of skipping the record
    pub strict: bool,
}

/// Counters for one loaded input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    /// Lines holding at least one field
    pub records: usize,
    /// Records turned into a link
    pub links: usize,
    /// Records dropped with a warning
    pub skipped: usize,
}

/// A parsed record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord<'a, W> {
    pub from: &'a str,
    pub to: &'a str,
    pub weight: W,
}

/// Why a line did not yield a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineError<'a> {
    /// Blank line or comment
    Empty,
    MissingDestination,
    InvalidWeight(&'a str),
}

/// Splits one line into a record
pub fn parse_line<W: Weight + FromStr>(line: &str) -> std::result::Result<EdgeRecord<'_, W>, LineError<'_>> {
    let mut fields = line.split(is_separator).filter(|field| !field.is_empty());

    let from = match fields.next() {
        Some(field) if !field.starts_with('#') => field,
        _ => return Err(LineError::Empty),
    };
    let to = fields.next().ok_or(LineError::MissingDestination)?;
    let weight = match fields.next() {
        Some(text) => text.parse().map_err(|_| LineError::InvalidWeight(text))?,
        None => W::one(),
    };

    Ok(EdgeRecord { from, to, weight })
}

/// Reads an edge list into `graph`, creating nodes on first mention.
///
/// `source_name` only labels warnings and errors. Bytes that are not valid
/// UTF-8 are replaced with U+FFFD and the line is still loaded.
pub fn load_edge_list<W, R>(
    graph: &mut DirectedGraph<W>,
    mut reader: R,
    source_name: &str,
    options: LoadOptions,
) -> Result<LoadStats>
where
    W: Weight + FromStr,
    R: BufRead,
{
    let mut stats = LoadStats::default();
    let mut buf = Vec::new();
    let mut lineno = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        lineno += 1;

        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            warn!("{}:{}: invalid UTF-8, replaced with U+FFFD", source_name, lineno);
        }

        match parse_line::<W>(&line) {
            Ok(record) => {
                stats.records += 1;
                let from = graph.lookup_or_create(record.from);
                let to = graph.lookup_or_create(record.to);
                graph.add_link(from, to, record.weight)?;
                stats.links += 1;
            }
            Err(LineError::Empty) => {}
            Err(LineError::MissingDestination) => {
                stats.records += 1;
                stats.skipped += 1;
                warn!("{}:{}: no 'to' node name, skipping this entry", source_name, lineno);
            }
            Err(LineError::InvalidWeight(text)) => {
                if options.strict {
                    return Err(Error::InvalidWeight {
                        source_name: source_name.to_owned(),
                        line: lineno,
                        text: text.to_owned(),
                    });
                }
                stats.records += 1;
                stats.skipped += 1;
                warn!("{}:{}: invalid weight {:?}, skipping this entry", source_name, lineno, text);
            }
        }
    }

    debug!(
        "{}: {} records, {} links, {} skipped",
        source_name, stats.records, stats.links, stats.skipped
    );
    Ok(stats)
}

impl<W: Weight + FromStr> DirectedGraph<W> {
    /// Builds a graph named `name` from an edge list, skipping bad records
    pub fn from_edge_list<R: BufRead>(name: &str, reader: R) -> Result<Self> {
        let mut graph = DirectedGraph::new(name);
        load_edge_list(&mut graph, reader, name, LoadOptions::default())?;
        Ok(graph)
    }
}
