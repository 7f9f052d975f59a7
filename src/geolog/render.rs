//! # View Renderer
//!
//! Pure projection of the collection into display-ready rows. Blank or
//! whitespace-only fields are shown as the placeholder marker; the marker is
//! display-only and never stored. There is no diffing — callers re-render
//! the whole collection after every mutation.

use crate::model::Sample;
use uuid::Uuid;

/// Shown in place of a blank field.
pub const PLACEHOLDER: &str = "---";

/// One sample, ready for display. Every field is non-empty: blanks have
/// been replaced by [`PLACEHOLDER`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub id: Uuid,
    pub sample_number: String,
    pub collector: String,
    pub locality: String,
    pub country: String,
    pub mineralogy: String,
    pub paleontology: String,
    pub latitude: String,
    pub longitude: String,
}

fn cell(value: &str) -> String {
    if value.trim().is_empty() {
        PLACEHOLDER.to_string()
    } else {
        value.to_string()
    }
}

pub fn render_row(sample: &Sample) -> DisplayRow {
    let f = &sample.fields;
    DisplayRow {
        id: sample.id,
        sample_number: cell(&f.sample_number),
        collector: cell(&f.collector),
        locality: cell(&f.locality),
        country: cell(&f.country),
        mineralogy: cell(&f.mineralogy),
        paleontology: cell(&f.paleontology),
        latitude: cell(&f.latitude),
        longitude: cell(&f.longitude),
    }
}

pub fn render_rows(samples: &[Sample]) -> Vec<DisplayRow> {
    samples.iter().map(render_row).collect()
}

/// Inverse of the placeholder substitution, for values captured back from a
/// rendered cell: the marker reads as empty, anything else as literal text.
pub fn edit_value(cell: &str) -> String {
    if cell == PLACEHOLDER {
        String::new()
    } else {
        cell.to_string()
    }
}
