//! Parses the pasted ISO 3166-1 table into country code records.
//!
//! The expected input is the body of the "Officially assigned code elements"
//! table on the English Wikipedia ISO 3166-1 page, copied from a browser. Each
//! row holds the columns `[name, alpha-2, alpha-3, numeric]` (any further
//! columns are ignored), and cells are separated by runs of two or more
//! whitespace characters. If the page layout changes, this is where parsing
//! will break.

use crate::error::UpdateError;
use regex::Regex;
use std::sync::LazyLock;

/// Pattern separating the cells of one row.
pub const FIELD_DELIMITER: &str = r"\s{2,}";

/// Number of leading cells a row must provide.
pub const REQUIRED_FIELDS: usize = 4;

static FIELD_DELIMITER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(FIELD_DELIMITER).expect("field delimiter is a valid regex"));

/// One row of the country code table. Cells borrow from the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryCodeRecord<'a> {
    pub name: &'a str,
    pub alpha2: &'a str,
    pub alpha3: &'a str,
    pub num: &'a str,
}

/// Splits a row into its cells. Cells are returned verbatim.
pub fn split_fields(line: &str) -> Vec<&str> {
    FIELD_DELIMITER_RE.split(line).collect()
}

/// Parses every non-blank line of `text` into a record, keeping input order.
///
/// With `strict` set, each record must also pass [`validate_record`]. Any bad
/// row fails the whole parse; rows are never skipped.
pub fn parse_table(text: &str, strict: bool) -> Result<Vec<CountryCodeRecord<'_>>, UpdateError> {
    let mut records = Vec::new();

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_number = index + 1;

        let fields = split_fields(line);
        if fields.len() < REQUIRED_FIELDS {
            return Err(UpdateError::MalformedRow {
                line: line_number,
                found: fields.len(),
                row: line.to_string(),
            });
        }
        if fields.len() > REQUIRED_FIELDS {
            log::debug!(
                "Ignoring {} extra field(s) on line {line_number}: {:?}",
                fields.len() - REQUIRED_FIELDS,
                &fields[REQUIRED_FIELDS..]
            );
        }

        let record = CountryCodeRecord {
            name: fields[0],
            alpha2: fields[1],
            alpha3: fields[2],
            num: fields[3],
        };

        if strict {
            validate_record(&record).map_err(|reason| UpdateError::InvalidRecord {
                line: line_number,
                reason,
            })?;
        }

        records.push(record);
    }

    if records.is_empty() {
        return Err(UpdateError::EmptyTable);
    }

    Ok(records)
}

/// Checks the shape of each cell, returning a description of the first problem.
pub fn validate_record(record: &CountryCodeRecord<'_>) -> Result<(), String> {
    fn is_code(value: &str, len: usize) -> bool {
        value.len() == len && value.bytes().all(|b| b.is_ascii_uppercase())
    }

    if !is_code(record.alpha2, 2) {
        return Err(format!(
            "alpha-2 code {:?} is not two uppercase letters",
            record.alpha2
        ));
    }
    if !is_code(record.alpha3, 3) {
        return Err(format!(
            "alpha-3 code {:?} is not three uppercase letters",
            record.alpha3
        ));
    }
    if record.num.len() != 3 || !record.num.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!(
            "numeric code {:?} is not three digits",
            record.num
        ));
    }
    if record.name.is_empty() {
        return Err("name is empty".to_string());
    }
    if record.name.contains(['"', '\\']) {
        return Err(format!(
            "name {:?} contains a quote or backslash",
            record.name
        ));
    }

    Ok(())
}
