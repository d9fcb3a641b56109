// Parser for the sectioned fleet text format
use crate::domain::fleet::{Fleet, Report, Station};
use crate::infrastructure::input_error::InputError;
use std::num::ParseIntError;
use std::str::FromStr;

pub const STATIONS_HEADER: &str = "[Stations]";
pub const REPORTS_HEADER: &str = "[Charger Availability Reports]";

/// Parse the `[Stations]` and `[Charger Availability Reports]` sections.
///
/// Blank lines are skipped and line numbers in errors refer to the raw input.
/// Cross references between the sections are checked separately by
/// `validation::validate_fleet`.
pub fn parse_fleet(content: &str) -> Result<Fleet, InputError> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(idx, text)| (idx + 1, text.trim()))
        .filter(|(_, text)| !text.is_empty());

    match lines.next() {
        Some((_, STATIONS_HEADER)) => {}
        _ => return Err(InputError::MissingSection(STATIONS_HEADER)),
    }

    let mut stations = Vec::new();
    let mut has_reports_section = false;
    for (line, text) in lines.by_ref() {
        if text == REPORTS_HEADER {
            has_reports_section = true;
            break;
        }
        stations.push(parse_station(line, text)?);
    }

    if !has_reports_section {
        return Err(InputError::MissingSection(REPORTS_HEADER));
    }

    let reports = lines
        .map(|(line, text)| parse_report(line, text))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        "Parsed {} stations and {} reports",
        stations.len(),
        reports.len()
    );

    Ok(Fleet::new(stations, reports))
}

fn parse_station(line: usize, text: &str) -> Result<Station, InputError> {
    let mut fields = text.split_whitespace();
    let malformed = || InputError::MalformedStation {
        line,
        content: text.to_string(),
    };

    let id = parse_number(line, fields.next().ok_or_else(malformed)?)?;
    let chargers = fields
        .map(|field| parse_number(line, field))
        .collect::<Result<Vec<_>, _>>()?;

    if chargers.is_empty() {
        return Err(malformed());
    }

    Ok(Station::new(id, chargers))
}

fn parse_report(line: usize, text: &str) -> Result<Report, InputError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let [charger_id, start, end, is_up] = fields.as_slice() else {
        return Err(InputError::MalformedReport {
            line,
            content: text.to_string(),
        });
    };

    let charger_id = parse_number(line, charger_id)?;
    let start: u64 = parse_number(line, start)?;
    let end: u64 = parse_number(line, end)?;
    let is_up = parse_availability(line, is_up)?;

    if start >= end {
        return Err(InputError::EmptyInterval { line, start, end });
    }

    Ok(Report::new(charger_id, start, end, is_up))
}

fn parse_number<T>(line: usize, value: &str) -> Result<T, InputError>
where
    T: FromStr<Err = ParseIntError>,
{
    value.parse().map_err(|source| InputError::InvalidNumber {
        line,
        value: value.to_string(),
        source,
    })
}

fn parse_availability(line: usize, value: &str) -> Result<bool, InputError> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(InputError::InvalidAvailability {
            line,
            value: value.to_string(),
        })
    }
}
