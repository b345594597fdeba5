//! Dataset loading and normalization.
//!
//! Parses the delimited leader list, coerces numeric columns, drops rows
//! with a non-positive duration, and sorts ascending by `label` so flagged
//! rows draw on top. Ids are assigned after the sort. Columns are resolved
//! through the header row, so column order is irrelevant and unknown
//! columns are ignored. Malformed numeric fields fail the load with row and
//! column context rather than silently coercing.

use std::path::Path;

use crate::data::model::{Dataset, Gender, Leader, LeaderId, Region, RegionFlags};
use crate::error::DataError;

/// Read and parse a dataset file. The one async suspension point of the
/// dashboard: everything after a successful load is synchronous.
pub async fn load_dataset(path: &Path) -> Result<Dataset, DataError> {
    let text = tokio::fs::read_to_string(path).await?;
    parse_dataset(&text)
}

/// Column indices resolved from the header row.
struct Header {
    country: usize,
    leader: usize,
    gender: usize,
    start_year: usize,
    end_year: usize,
    start_age: usize,
    end_age: usize,
    duration: usize,
    pcgdp: usize,
    label: usize,
    regions: [usize; 5],
    max_index: usize,
}

impl Header {
    fn parse(line: &str) -> Result<Header, DataError> {
        let names = split_fields(line);
        let find = |name: &'static str| -> Result<usize, DataError> {
            names
                .iter()
                .position(|n| n.trim() == name)
                .ok_or(DataError::MissingColumn { name })
        };

        let mut regions = [0usize; 5];
        for (slot, region) in regions.iter_mut().zip(Region::ALL) {
            *slot = find(region.column())?;
        }

        let header = Header {
            country: find("country")?,
            leader: find("leader")?,
            gender: find("gender")?,
            start_year: find("start_year")?,
            end_year: find("end_year")?,
            start_age: find("start_age")?,
            end_age: find("end_age")?,
            duration: find("duration")?,
            pcgdp: find("pcgdp")?,
            label: find("label")?,
            regions,
            max_index: 0,
        };
        let max_index = [
            header.country,
            header.leader,
            header.gender,
            header.start_year,
            header.end_year,
            header.start_age,
            header.end_age,
            header.duration,
            header.pcgdp,
            header.label,
        ]
        .into_iter()
        .chain(header.regions)
        .max()
        .unwrap_or(0);
        Ok(Header { max_index, ..header })
    }
}

/// Parse dataset text into a normalized [`Dataset`].
pub fn parse_dataset(text: &str) -> Result<Dataset, DataError> {
    let mut lines = text.lines();
    let header_line = lines.next().filter(|l| !l.trim().is_empty());
    let header = Header::parse(header_line.ok_or(DataError::EmptyFile)?)?;

    let mut leaders = Vec::new();
    for (idx, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = idx + 2; // 1-based, header is line 1
        let fields = split_fields(line);
        if fields.len() <= header.max_index {
            return Err(DataError::ShortRow {
                line: line_no,
                expected: header.max_index + 1,
                found: fields.len(),
            });
        }
        let row = parse_row(&header, &fields, line_no)?;
        if row.duration <= 0 {
            continue;
        }
        leaders.push(row);
    }

    // Stable sort: label 1 rows draw last, ties keep file order.
    leaders.sort_by_key(|l| l.label);
    for (idx, leader) in leaders.iter_mut().enumerate() {
        leader.id = LeaderId(idx);
    }
    Ok(Dataset::new(leaders))
}

fn parse_row(header: &Header, fields: &[String], line: usize) -> Result<Leader, DataError> {
    let int = |idx: usize, column: &'static str| -> Result<i32, DataError> {
        let raw = fields[idx].trim();
        raw.parse::<i32>().map_err(|_| DataError::MalformedField {
            line,
            column,
            value: raw.to_string(),
        })
    };

    let gender_raw = fields[header.gender].trim();
    let gender = match gender_raw {
        "M" | "m" => Gender::Male,
        "F" | "f" => Gender::Female,
        other => {
            return Err(DataError::InvalidGender {
                line,
                value: other.to_string(),
            })
        }
    };

    let pcgdp_raw = fields[header.pcgdp].trim();
    let pcgdp = if pcgdp_raw == "NA" {
        None
    } else {
        Some(
            pcgdp_raw
                .parse::<f64>()
                .map_err(|_| DataError::MalformedField {
                    line,
                    column: "pcgdp",
                    value: pcgdp_raw.to_string(),
                })?,
        )
    };

    let mut regions = RegionFlags::default();
    for (region, idx) in Region::ALL.into_iter().zip(header.regions) {
        let flag = int(idx, region.column())? == 1;
        match region {
            Region::Oecd => regions.oecd = flag,
            Region::Eu => regions.eu = flag,
            Region::Brics => regions.brics = flag,
            Region::GSeven => regions.gseven = flag,
            Region::GTwenty => regions.gtwenty = flag,
        }
    }

    Ok(Leader {
        id: LeaderId(0), // assigned after the sort
        country: fields[header.country].trim().to_string(),
        leader: fields[header.leader].trim().to_string(),
        gender,
        start_year: int(header.start_year, "start_year")?,
        end_year: int(header.end_year, "end_year")?,
        start_age: int(header.start_age, "start_age")?,
        end_age: int(header.end_age, "end_age")?,
        duration: int(header.duration, "duration")?,
        pcgdp,
        label: int(header.label, "label")?.clamp(0, 1) as u8,
        regions,
    })
}

/// Split one delimited line, honoring double-quoted fields (leader and
/// country names may contain commas).
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                chars.next();
                current.push('"');
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}
