use crate::error::{GeologError, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The eight user-editable fields of a sample record.
///
/// All fields are free text and optional; an empty string means "not
/// recorded". `latitude`/`longitude` are kept as the strings the collector
/// wrote down (degree marks and all) rather than parsed numbers — numeric
/// interpretation only happens in [`crate::map`].
///
/// Serialized member names are camelCase to match the on-disk collection
/// format (see [`crate::store`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SampleFields {
    pub sample_number: String,
    pub collector: String,
    pub locality: String,
    pub country: String,
    pub mineralogy: String,
    pub paleontology: String,
    pub latitude: String,
    pub longitude: String,
}

impl SampleFields {
    /// Coordinates come as a pair: after trimming, either both are present
    /// or both are absent. Every write path runs this check.
    pub fn validate(&self) -> Result<()> {
        let has_lat = !self.latitude.trim().is_empty();
        let has_lon = !self.longitude.trim().is_empty();
        if has_lat != has_lon {
            return Err(GeologError::UnpairedCoordinates);
        }
        Ok(())
    }
}

/// One geological specimen record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub id: Uuid,
    #[serde(flatten)]
    pub fields: SampleFields,
}

impl Sample {
    pub fn new(fields: SampleFields) -> Self {
        Self {
            id: Uuid::new_v4(),
            fields,
        }
    }
}
