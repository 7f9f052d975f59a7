use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::SampleFields;
use crate::store::DataStore;
use uuid::Uuid;

use super::helpers::{find_sample, label, load_or_recover};

/// Replace every field of the sample except its id.
pub fn run<S: DataStore>(store: &mut S, id: Uuid, fields: SampleFields) -> Result<CmdResult> {
    fields.validate()?;

    let (mut samples, recovery) = load_or_recover(store)?;
    let pos = find_sample(&samples, id)?;
    samples[pos].fields = fields;
    let updated = samples[pos].clone();
    store.save(&samples)?;

    let mut result = CmdResult::default();
    if let Some(warning) = recovery {
        result.add_message(warning);
    }
    result.add_message(CmdMessage::success(format!(
        "Sample updated: {}",
        label(&updated)
    )));
    result.affected_samples.push(updated);
    Ok(result)
}
