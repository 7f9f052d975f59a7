use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Sample;
use crate::store::DataStore;

use super::export;
use super::helpers::load_or_recover;

/// Append the records of previously exported CSV text to the collection.
/// Imported samples get fresh ids. The whole input is validated before
/// anything is written, so a bad record aborts the import with the
/// collection unchanged.
pub fn run<S: DataStore>(store: &mut S, text: &str) -> Result<CmdResult> {
    let parsed = export::from_csv(text)?;
    for fields in &parsed {
        fields.validate()?;
    }

    let mut result = CmdResult::default();
    if parsed.is_empty() {
        result.add_message(CmdMessage::info("No records to import."));
        return Ok(result);
    }

    let (mut samples, recovery) = load_or_recover(store)?;
    if let Some(warning) = recovery {
        result.add_message(warning);
    }
    let count = parsed.len();
    samples.extend(parsed.into_iter().map(Sample::new));
    store.save(&samples)?;

    result.add_message(CmdMessage::success(format!(
        "Imported {} sample(s).",
        count
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, export};
    use crate::error::GeologError;
    use crate::model::SampleFields;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn imports_what_export_produced() {
        let mut source = InMemoryStore::new();
        create::run(
            &mut source,
            SampleFields {
                sample_number: "S-001".to_string(),
                mineralogy: "quartz\nfeldspar".to_string(),
                ..Default::default()
            },
        )
        .unwrap();
        let text = export::run(&source).unwrap().export.unwrap();

        let mut target = InMemoryStore::new();
        run(&mut target, &text).unwrap();

        let samples = target.load().unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].fields, source.load().unwrap()[0].fields);
        assert_ne!(samples[0].id, source.load().unwrap()[0].id);
    }

    #[test]
    fn bad_record_aborts_without_writing() {
        let mut store = InMemoryStore::new();
        create::run(&mut store, SampleFields::default()).unwrap();

        let text = "id,sampleNumber,collector,locality,country,mineralogy,paleontology,latitude,longitude\n\"x\",\"n\",\"\",\"\",\"\",\"\",\"\",\"10\",\"\"";
        let err = run(&mut store, text).unwrap_err();
        assert!(matches!(err, GeologError::UnpairedCoordinates));
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn header_only_input_imports_nothing() {
        let mut store = InMemoryStore::new();
        let result = run(
            &mut store,
            "id,sampleNumber,collector,locality,country,mineralogy,paleontology,latitude,longitude",
        )
        .unwrap();
        assert!(store.load().unwrap().is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
