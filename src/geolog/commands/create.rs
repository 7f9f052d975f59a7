use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Sample, SampleFields};
use crate::store::DataStore;

use super::helpers::{label, load_or_recover};

pub fn run<S: DataStore>(store: &mut S, fields: SampleFields) -> Result<CmdResult> {
    fields.validate()?;

    let (mut samples, recovery) = load_or_recover(store)?;
    let sample = Sample::new(fields);
    samples.push(sample.clone());
    store.save(&samples)?;

    let mut result = CmdResult::default();
    if let Some(warning) = recovery {
        result.add_message(warning);
    }
    result.add_message(CmdMessage::success(format!(
        "Sample recorded: {}",
        label(&sample)
    )));
    result.affected_samples.push(sample);
    Ok(result)
}
