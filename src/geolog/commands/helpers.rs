use crate::commands::CmdMessage;
use crate::error::{GeologError, Result};
use crate::model::Sample;
use crate::store::DataStore;
use uuid::Uuid;

/// Read the collection, downgrading a corrupt slot to an empty collection
/// plus a warning the caller must surface. Every other error propagates.
pub fn load_or_recover<S: DataStore>(store: &S) -> Result<(Vec<Sample>, Option<CmdMessage>)> {
    match store.load() {
        Ok(samples) => Ok((samples, None)),
        Err(GeologError::CorruptData(detail)) => Ok((
            Vec::new(),
            Some(CmdMessage::warning(format!(
                "Stored data could not be read and is being treated as empty: {}",
                detail
            ))),
        )),
        Err(e) => Err(e),
    }
}

pub fn find_sample(samples: &[Sample], id: Uuid) -> Result<usize> {
    samples
        .iter()
        .position(|s| s.id == id)
        .ok_or(GeologError::SampleNotFound(id))
}

/// Short human label for messages: the sample number when there is one,
/// otherwise the first block of the id.
pub fn label(sample: &Sample) -> String {
    let number = sample.fields.sample_number.trim();
    if number.is_empty() {
        sample.id.to_string()[..8].to_string()
    } else {
        number.to_string()
    }
}
