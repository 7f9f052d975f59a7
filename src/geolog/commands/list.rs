use crate::commands::CmdResult;
use crate::error::Result;
use crate::render;
use crate::store::DataStore;

use super::helpers::load_or_recover;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let (samples, recovery) = load_or_recover(store)?;
    let mut result = CmdResult::default().with_rows(render::render_rows(&samples));
    if let Some(warning) = recovery {
        result.add_message(warning);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::model::SampleFields;
    use crate::render::PLACEHOLDER;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_collection_lists_no_rows() {
        let store = InMemoryStore::new();
        let result = run(&store).unwrap();
        assert!(result.rows.is_empty());
    }

    #[test]
    fn lists_rows_with_placeholders_in_stored_order() {
        let mut store = InMemoryStore::new();
        create::run(
            &mut store,
            SampleFields {
                sample_number: "S-001".to_string(),
                latitude: "-34.6".to_string(),
                longitude: "-58.4".to_string(),
                ..Default::default()
            },
        )
        .unwrap();
        create::run(&mut store, SampleFields::default()).unwrap();

        let result = run(&store).unwrap();
        assert_eq!(result.rows.len(), 2);
        assert_eq!(result.rows[0].sample_number, "S-001");
        assert_eq!(result.rows[0].collector, PLACEHOLDER);
        assert_eq!(result.rows[0].latitude, "-34.6");
        assert_eq!(result.rows[1].sample_number, PLACEHOLDER);
    }

    #[test]
    fn corrupt_slot_lists_as_empty_with_warning() {
        let fixture = StoreFixture::new().with_corrupt_slot();
        let result = run(&fixture.store).unwrap();
        assert!(result.rows.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
