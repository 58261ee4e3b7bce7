//! Reading swap requests from a delimited roster export.
//!
//! The first line is a header. Columns are found by name, so extra columns
//! (a course code, a timestamp) are ignored and column order does not matter.
//!
//! | Field | Header names |
//! |-------|--------------|
//! | id | `student_id`, `id` |
//! | current group | `original_group`, `current` |
//! | desired group | `new_group`, `desired` |
//! | flexible | `accept_swap_teammate`, `flexible` |
//! | preferred partner | `swap_teammate_id`, `partner` |
//!
//! Fields follow RFC 4180 quoting, so a quoted cell may hold the delimiter,
//! doubled quotes or a line break. Fields are trimmed.
//!
//! ## Example
//!
//! ```
//! use swap_pairing::roster::parse_roster;
//!
//! let text = "course,student_id,original_group,new_group,accept_swap_teammate,swap_teammate_id\n\
//!             \"CS101, Fall\",1,G1,G2,True,\n\
//!             \"CS101, Fall\",2,G2,G1,False,1\n";
//! let requests = parse_roster(text, ',').unwrap();
//!
//! assert_eq!(requests.len(), 2);
//! assert_eq!(requests[1].preferred_partner, Some(1));
//! ```

use csv::{Position, ReaderBuilder, StringRecord, Trim};
use thiserror::Error;

use crate::types::{GroupId, RequestId, SwapRequest};

/// Errors from reading a roster
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("roster is empty")]
    Empty,

    #[error("delimiter '{0}' is not a single ASCII character")]
    InvalidDelimiter(char),

    #[error("line {line}: {message}")]
    Malformed { line: usize, message: String },

    #[error("header has no {0} column")]
    MissingColumn(&'static str),

    #[error("line {line}: missing {field}")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: {field} '{value}' is not a valid id")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: '{value}' is not a yes/no value")]
    InvalidBool { line: usize, value: String },
}

impl From<csv::Error> for RosterError {
    fn from(err: csv::Error) -> Self {
        RosterError::Malformed {
            line: line_of(err.position()),
            message: err.to_string(),
        }
    }
}

/// Column positions resolved from the header
#[derive(Debug, Clone, Copy)]
struct Columns {
    id: usize,
    current: usize,
    desired: usize,
    flexible: usize,
    partner: usize,
}

impl Columns {
    fn resolve(header: &StringRecord) -> Result<Self, RosterError> {
        let find = |names: &[&str], label: &'static str| {
            header
                .iter()
                .position(|h| names.iter().any(|n| h.eq_ignore_ascii_case(n)))
                .ok_or(RosterError::MissingColumn(label))
        };

        Ok(Self {
            id: find(&["student_id", "id"], "student_id")?,
            current: find(&["original_group", "current"], "original_group")?,
            desired: find(&["new_group", "desired"], "new_group")?,
            flexible: find(
                &["accept_swap_teammate", "flexible"],
                "accept_swap_teammate",
            )?,
            partner: find(&["swap_teammate_id", "partner"], "swap_teammate_id")?,
        })
    }
}

/// Parse roster text into requests, in row order.
///
/// Blank lines are skipped. Line numbers in errors are 1-based, count the
/// header, and point at the line a record starts on.
pub fn parse_roster(text: &str, delimiter: char) -> Result<Vec<SwapRequest>, RosterError> {
    let delimiter = u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or(RosterError::InvalidDelimiter(delimiter))?;

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut rows = reader
        .records()
        .map(|row| row.map_err(RosterError::from))
        .filter(|row| !matches!(row, Ok(record) if is_blank(record)));

    let header = rows.next().ok_or(RosterError::Empty)??;
    let columns = Columns::resolve(&header)?;

    rows.map(|row| row.and_then(|record| parse_row(&record, columns)))
        .collect()
}

fn parse_row(record: &StringRecord, columns: Columns) -> Result<SwapRequest, RosterError> {
    let line = line_of(record.position());
    let field = |pos: usize| record.get(pos).unwrap_or("");
    let required = |pos: usize, name: &'static str| {
        let value = field(pos);
        if value.is_empty() {
            Err(RosterError::MissingField { line, field: name })
        } else {
            Ok(value)
        }
    };

    let id = parse_id(line, "student_id", required(columns.id, "student_id")?)?;
    let current = GroupId::from(required(columns.current, "original_group")?);
    let desired = GroupId::from(required(columns.desired, "new_group")?);
    let flexible = parse_bool(line, required(columns.flexible, "accept_swap_teammate")?)?;
    let preferred_partner = match field(columns.partner) {
        "" => None,
        value => Some(parse_id(line, "swap_teammate_id", value)?),
    };

    Ok(SwapRequest {
        id,
        current,
        desired,
        flexible,
        preferred_partner,
    })
}

/// A line of whitespace, or of empty cells only
fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(str::is_empty)
}

fn line_of(position: Option<&Position>) -> usize {
    position.map_or(0, |p| p.line() as usize)
}

/// Parse an id, accepting spreadsheet floats such as `12.0`
fn parse_id(line: usize, field: &'static str, value: &str) -> Result<RequestId, RosterError> {
    let digits = value.strip_suffix(".0").unwrap_or(value);
    digits.parse().map_err(|_| RosterError::InvalidNumber {
        line,
        field,
        value: value.to_string(),
    })
}

fn parse_bool(line: usize, value: &str) -> Result<bool, RosterError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" => Ok(false),
        _ => Err(RosterError::InvalidBool {
            line,
            value: value.to_string(),
        }),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
