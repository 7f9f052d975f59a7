//! # Edit Session Controller
//!
//! A row goes through two states: Display and Editing. An [`EditSession`]
//! is a row in the Editing state — it captures the sample's current field
//! values as a working copy, the caller mutates them freely, and commit
//! pushes them back through the update command. A failed commit leaves the
//! session (and the stored sample) exactly as they were, so nothing typed
//! is lost.
//!
//! Sessions are plain values with no shared state: several rows can be in
//! Editing at once, each committing independently.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::model::SampleFields;
use crate::render::{self, DisplayRow};
use crate::store::DataStore;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct EditSession {
    id: Uuid,
    pub fields: SampleFields,
}

impl EditSession {
    /// Start editing the sample with the given id, capturing its stored
    /// field values.
    pub fn begin<S: DataStore>(store: &S, id: Uuid) -> Result<Self> {
        let (samples, _) = commands::helpers::load_or_recover(store)?;
        let pos = commands::helpers::find_sample(&samples, id)?;
        Ok(Self {
            id,
            fields: samples[pos].fields.clone(),
        })
    }

    /// Start editing from a rendered row. Placeholder cells read back as
    /// empty, not as literal text.
    pub fn from_row(row: &DisplayRow) -> Self {
        Self {
            id: row.id,
            fields: SampleFields {
                sample_number: render::edit_value(&row.sample_number),
                collector: render::edit_value(&row.collector),
                locality: render::edit_value(&row.locality),
                country: render::edit_value(&row.country),
                mineralogy: render::edit_value(&row.mineralogy),
                paleontology: render::edit_value(&row.paleontology),
                latitude: render::edit_value(&row.latitude),
                longitude: render::edit_value(&row.longitude),
            },
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Commit the edited fields. Validation failure returns the error and
    /// the session stays usable — the caller remains in the Editing state.
    pub fn commit<S: DataStore>(&self, store: &mut S) -> Result<CmdResult> {
        self.fields.validate()?;
        commands::update::run(store, self.id, self.fields.clone())
    }
}
