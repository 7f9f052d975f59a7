use super::DataStore;
use crate::error::{GeologError, Result};
use crate::model::Sample;

/// In-memory storage for testing and development.
///
/// The slot is an `Option<String>` holding the serialized blob, so load and
/// save go through the same serialization path as [`super::fs::FileStore`].
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    slot: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the slot with a raw blob, valid or not.
    pub fn from_raw(blob: &str) -> Self {
        Self {
            slot: Some(blob.to_string()),
        }
    }

    pub fn raw_slot(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Sample>> {
        match &self.slot {
            None => Ok(Vec::new()),
            Some(blob) => serde_json::from_str(blob)
                .map_err(|e| GeologError::CorruptData(format!("in-memory slot: {}", e))),
        }
    }

    fn save(&mut self, samples: &[Sample]) -> Result<()> {
        let blob = serde_json::to_string(samples).map_err(GeologError::Serialization)?;
        self.slot = Some(blob);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.slot = None;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::SampleFields;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_samples(mut self, count: usize) -> Self {
            let mut samples = self.store.load().unwrap();
            for i in 0..count {
                let fields = SampleFields {
                    sample_number: format!("S-{:03}", i + 1),
                    collector: format!("Collector {}", i + 1),
                    ..Default::default()
                };
                samples.push(Sample::new(fields));
            }
            self.store.save(&samples).unwrap();
            self
        }

        pub fn with_sample(mut self, fields: SampleFields) -> Self {
            let mut samples = self.store.load().unwrap();
            samples.push(Sample::new(fields));
            self.store.save(&samples).unwrap();
            self
        }

        pub fn with_corrupt_slot(mut self) -> Self {
            self.store = InMemoryStore::from_raw("{ this is not a collection");
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SampleFields;

    #[test]
    fn missing_slot_loads_as_empty() {
        let store = InMemoryStore::new();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = InMemoryStore::new();
        let samples = vec![
            Sample::new(SampleFields {
                sample_number: "S-001".to_string(),
                mineralogy: "quartz\nfeldspar".to_string(),
                ..Default::default()
            }),
            Sample::new(SampleFields::default()),
        ];
        store.save(&samples).unwrap();
        assert_eq!(store.load().unwrap(), samples);
    }

    #[test]
    fn save_of_loaded_collection_is_idempotent() {
        let mut store = InMemoryStore::new();
        store
            .save(&[Sample::new(SampleFields::default())])
            .unwrap();
        let loaded = store.load().unwrap();
        store.save(&loaded).unwrap();
        assert_eq!(store.load().unwrap(), loaded);
    }

    #[test]
    fn garbage_slot_is_corrupt_not_a_panic() {
        let store = InMemoryStore::from_raw("not json at all");
        let err = store.load().unwrap_err();
        assert!(matches!(err, GeologError::CorruptData(_)));
    }

    #[test]
    fn clear_removes_the_slot() {
        let mut store = InMemoryStore::new();
        store
            .save(&[Sample::new(SampleFields::default())])
            .unwrap();
        store.clear().unwrap();
        assert!(store.raw_slot().is_none());
        assert!(store.load().unwrap().is_empty());
    }
}
