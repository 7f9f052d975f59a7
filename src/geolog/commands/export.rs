use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GeologError, Result};
use crate::model::{Sample, SampleFields};
use crate::store::DataStore;

use super::helpers::load_or_recover;

/// Header line of the export format. Field order is fixed.
const CSV_HEADER: &str =
    "id,sampleNumber,collector,locality,country,mineralogy,paleontology,latitude,longitude";

const FIELD_COUNT: usize = 9;

/// Produce export text for the whole collection. An empty collection yields
/// no text at all — the caller shows a message instead of writing a file
/// with only a header.
pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let (samples, recovery) = load_or_recover(store)?;

    let mut result = CmdResult::default();
    if let Some(warning) = recovery {
        result.add_message(warning);
    }
    if samples.is_empty() {
        result.add_message(CmdMessage::info("No samples to export."));
        return Ok(result);
    }

    result.export = Some(to_csv(&samples));
    result.add_message(CmdMessage::success(format!(
        "Exported {} sample(s).",
        samples.len()
    )));
    Ok(result)
}

/// Comma-separated, every field double-quoted, embedded quotes doubled.
/// Multi-line values stay inside their quotes.
pub fn to_csv(samples: &[Sample]) -> String {
    let mut out = String::from(CSV_HEADER);
    for s in samples {
        let f = &s.fields;
        let cells = [
            s.id.to_string(),
            f.sample_number.clone(),
            f.collector.clone(),
            f.locality.clone(),
            f.country.clone(),
            f.mineralogy.clone(),
            f.paleontology.clone(),
            f.latitude.clone(),
            f.longitude.clone(),
        ];
        out.push('\n');
        let line: Vec<String> = cells.iter().map(|c| quote(c)).collect();
        out.push_str(&line.join(","));
    }
    out
}

/// Parse export text back into field sets. The id column is read but not
/// returned — re-imported records get fresh ids.
pub fn from_csv(text: &str) -> Result<Vec<SampleFields>> {
    let mut records = parse_records(text)?;
    records.retain(|r| !(r.len() == 1 && r[0].is_empty()));

    let mut iter = records.into_iter();
    let header = iter
        .next()
        .ok_or_else(|| GeologError::Api("Empty CSV input".to_string()))?;
    if header.len() != FIELD_COUNT {
        return Err(GeologError::Api(format!(
            "Unexpected CSV header with {} field(s)",
            header.len()
        )));
    }

    let mut parsed = Vec::new();
    for (n, record) in iter.enumerate() {
        if record.len() != FIELD_COUNT {
            return Err(GeologError::Api(format!(
                "CSV record {} has {} field(s), expected {}",
                n + 1,
                record.len(),
                FIELD_COUNT
            )));
        }
        let mut cells = record.into_iter();
        let _id = cells.next();
        parsed.push(SampleFields {
            sample_number: cells.next().unwrap_or_default(),
            collector: cells.next().unwrap_or_default(),
            locality: cells.next().unwrap_or_default(),
            country: cells.next().unwrap_or_default(),
            mineralogy: cells.next().unwrap_or_default(),
            paleontology: cells.next().unwrap_or_default(),
            latitude: cells.next().unwrap_or_default(),
            longitude: cells.next().unwrap_or_default(),
        });
    }
    Ok(parsed)
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Quote-aware record splitter. Newlines inside quotes belong to the field;
/// a doubled quote inside quotes is a literal one.
fn parse_records(text: &str) -> Result<Vec<Vec<String>>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => record.push(std::mem::take(&mut field)),
                '\n' => {
                    record.push(std::mem::take(&mut field));
                    records.push(std::mem::take(&mut record));
                }
                '\r' => {}
                _ => field.push(c),
            }
        }
    }
    if in_quotes {
        return Err(GeologError::Api(
            "Unterminated quote in CSV input".to_string(),
        ));
    }
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }
    Ok(records)
}
