use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Empty the collection by removing the storage slot outright. Like delete,
/// the confirmation step happens in the caller.
pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    store.clear()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("All samples removed."));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn clears_collection_and_slot() {
        let mut fixture = StoreFixture::new().with_samples(3);
        run(&mut fixture.store).unwrap();

        assert!(fixture.store.load().unwrap().is_empty());
        assert!(fixture.store.raw_slot().is_none());
    }

    #[test]
    fn clearing_an_empty_store_is_fine() {
        let mut fixture = StoreFixture::new();
        assert!(run(&mut fixture.store).is_ok());
    }
}
