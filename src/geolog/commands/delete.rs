use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use uuid::Uuid;

use super::helpers::{find_sample, label, load_or_recover};

/// Remove one sample. Confirmation of destructive actions is the caller's
/// business; by the time this runs, the decision has been made.
pub fn run<S: DataStore>(store: &mut S, id: Uuid) -> Result<CmdResult> {
    let (mut samples, recovery) = load_or_recover(store)?;
    let pos = find_sample(&samples, id)?;
    let removed = samples.remove(pos);
    store.save(&samples)?;

    let mut result = CmdResult::default();
    if let Some(warning) = recovery {
        result.add_message(warning);
    }
    result.add_message(CmdMessage::success(format!(
        "Sample deleted: {}",
        label(&removed)
    )));
    result.affected_samples.push(removed);
    Ok(result)
}
