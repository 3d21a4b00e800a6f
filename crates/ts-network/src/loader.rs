//! Input-file loader.
//!
//! # Format
//!
//! Space separated, no header row.  The first line holds five integers, then
//! `S` street lines, then `V` path lines:
//!
//! ```text
//! 6 4 5 2 1000          D I S V F
//! 2 0 rue-de-londres 1  B E name L
//! 0 1 rue-d-amsterdam 1
//! 3 1 rue-d-athenes 1
//! 2 3 rue-de-rome 2
//! 1 2 rue-de-moscou 3
//! 4 rue-de-londres rue-d-amsterdam rue-de-moscou rue-de-rome
//! 3 rue-d-athenes rue-de-moscou rue-de-londres
//! ```
//!
//! A path line starts with its street count, which is checked and dropped.
//! Street names in paths are **not** checked against the network.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};

use ts_core::{IntersectionId, ProblemHeader};

use crate::{NetworkError, NetworkResult, StreetNetwork, StreetNetworkBuilder, VehiclePath};

/// A fully parsed input file.
#[derive(Clone, Debug)]
pub struct Problem {
    pub header:  ProblemHeader,
    pub network: StreetNetwork,
    pub paths:   Vec<VehiclePath>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a problem from an input file.
pub fn load_problem(path: &Path) -> NetworkResult<Problem> {
    let file = File::open(path).map_err(NetworkError::Io)?;
    load_problem_reader(file)
}

/// Like [`load_problem`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for embedded inputs.
pub fn load_problem_reader<R: Read>(reader: R) -> NetworkResult<Problem> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(reader);
    let mut records = csv_reader.records();

    // ── Header ────────────────────────────────────────────────────────────
    let Some(first) = records.next() else {
        return Err(NetworkError::Parse { line: 1, message: "empty input".to_owned() });
    };
    let first = first?;
    let header = parse_header(&first)?;
    debug!(
        "header: D={} I={} S={} V={} F={}",
        header.duration,
        header.intersection_count,
        header.street_count,
        header.vehicle_count,
        header.cycle_length,
    );

    // ── Streets ───────────────────────────────────────────────────────────
    let mut builder = StreetNetworkBuilder::with_capacity(
        header.intersection_count,
        (header.street_count as usize).min(1_000_000),
    );
    while builder.street_count() < header.street_count as usize {
        let Some(record) = records.next() else {
            return Err(NetworkError::StreetCountMismatch {
                expected: header.street_count,
                got:      builder.street_count() as u32,
            });
        };
        let record = record?;
        let line = line_of(&record);
        let fields = fields(&record);
        let [from, to, name, travel_time] = fields.as_slice() else {
            return Err(NetworkError::Parse {
                line,
                message: format!("street record needs 4 fields, found {}", fields.len()),
            });
        };
        builder.add_street(
            *name,
            IntersectionId(parse_field(from, "source intersection", line)?),
            IntersectionId(parse_field(to, "destination intersection", line)?),
            parse_field(travel_time, "travel time", line)?,
        )?;
    }
    let network = builder.build();

    // ── Paths ─────────────────────────────────────────────────────────────
    let mut paths = Vec::with_capacity((header.vehicle_count as usize).min(1_000_000));
    for record in records {
        let record = record?;
        let line = line_of(&record);
        let fields = fields(&record);
        let Some((declared, names)) = fields.split_first() else {
            continue;
        };
        let declared: usize = parse_field(declared, "path length", line)?;
        if declared != names.len() {
            return Err(NetworkError::PathLengthMismatch { line, declared, got: names.len() });
        }
        paths.push(names.iter().copied().collect::<VehiclePath>());
    }
    if paths.len() != header.vehicle_count as usize {
        return Err(NetworkError::VehicleCountMismatch {
            expected: header.vehicle_count,
            got:      paths.len() as u32,
        });
    }

    info!(
        "loaded {} intersections, {} streets, {} vehicle paths",
        network.intersection_count(),
        network.street_count(),
        paths.len()
    );

    Ok(Problem { header, network, paths })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_header(record: &StringRecord) -> NetworkResult<ProblemHeader> {
    let line = line_of(record);
    let fields = fields(record);
    let [d, i, s, v, f] = fields.as_slice() else {
        return Err(NetworkError::Parse {
            line,
            message: format!("header needs 5 fields (D I S V F), found {}", fields.len()),
        });
    };
    Ok(ProblemHeader {
        duration:           parse_field(d, "simulation duration", line)?,
        intersection_count: parse_field(i, "intersection count", line)?,
        street_count:       parse_field(s, "street count", line)?,
        vehicle_count:      parse_field(v, "vehicle count", line)?,
        cycle_length:       parse_field(f, "cycle length", line)?,
    })
}

/// Non-empty fields of a record.  Repeated or trailing spaces produce empty
/// fields, which carry no meaning in this format.
fn fields(record: &StringRecord) -> Vec<&str> {
    record.iter().filter(|f| !f.is_empty()).collect()
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, |p| p.line())
}

fn parse_field<T: FromStr>(value: &str, what: &str, line: u64) -> NetworkResult<T> {
    value.parse::<T>().map_err(|_| NetworkError::Parse {
        line,
        message: format!("invalid {what} {value:?}"),
    })
}
