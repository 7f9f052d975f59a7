//! # API Facade
//!
//! Thin facade over the command layer and the single entry point for any
//! UI. No business logic here and no I/O beyond what the store does:
//! methods dispatch to `commands::*` and hand back structured
//! `Result<CmdResult>` values for the caller to present.
//!
//! Generic over [`DataStore`], so the same facade runs against the file
//! store in production and the in-memory store in tests.

use crate::commands;
use crate::edit::EditSession;
use crate::error::Result;
use crate::map;
use crate::model::SampleFields;
use crate::store::DataStore;
use uuid::Uuid;

pub struct GeologApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> GeologApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn create_sample(&mut self, fields: SampleFields) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, fields)
    }

    pub fn update_sample(
        &mut self,
        id: Uuid,
        fields: SampleFields,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, fields)
    }

    pub fn delete_sample(&mut self, id: Uuid) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn list_samples(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn clear_samples(&mut self) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.store)
    }

    pub fn export_samples(&self) -> Result<commands::CmdResult> {
        commands::export::run(&self.store)
    }

    pub fn import_samples(&mut self, text: &str) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.store, text)
    }

    /// Begin an edit session on a sample. Commit through [`Self::commit_edit`].
    pub fn edit_sample(&self, id: Uuid) -> Result<EditSession> {
        EditSession::begin(&self.store, id)
    }

    pub fn commit_edit(&mut self, session: &EditSession) -> Result<commands::CmdResult> {
        session.commit(&mut self.store)
    }

    /// Map lookup URL for a sample, or `None` when there is not enough
    /// location data to build one.
    pub fn map_url(&self, id: Uuid) -> Result<Option<String>> {
        let (samples, _) = commands::helpers::load_or_recover(&self.store)?;
        let pos = commands::helpers::find_sample(&samples, id)?;
        let f = &samples[pos].fields;
        Ok(map::lookup_url(
            &f.latitude,
            &f.longitude,
            &f.locality,
            &f.country,
        ))
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn dispatches_create_then_list() {
        let mut api = GeologApi::new(InMemoryStore::new());
        api.create_sample(SampleFields {
            sample_number: "S-001".to_string(),
            ..Default::default()
        })
        .unwrap();

        let listed = api.list_samples().unwrap();
        assert_eq!(listed.rows.len(), 1);
        assert_eq!(listed.rows[0].sample_number, "S-001");
    }

    #[test]
    fn edit_round_trip_goes_through_the_facade() {
        let mut api = GeologApi::new(InMemoryStore::new());
        let id = api
            .create_sample(SampleFields::default())
            .unwrap()
            .affected_samples[0]
            .id;

        let mut session = api.edit_sample(id).unwrap();
        session.fields.country = "Argentina".to_string();
        api.commit_edit(&session).unwrap();

        let listed = api.list_samples().unwrap();
        assert_eq!(listed.rows[0].country, "Argentina");
    }

    #[test]
    fn map_url_reports_insufficient_data_as_none() {
        let mut api = GeologApi::new(InMemoryStore::new());
        let id = api
            .create_sample(SampleFields::default())
            .unwrap()
            .affected_samples[0]
            .id;
        assert_eq!(api.map_url(id).unwrap(), None);
    }
}
