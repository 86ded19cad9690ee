//! Named filter presets persisted per feature

use std::sync::Arc;

use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::criteria::FilterCriteria;
use crate::models::RecordField;
use crate::store::{self, KvStore, StoreError};

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("at least one filter condition is required")]
    EmptyCriteria,

    #[error("preset name must not be blank")]
    EmptyName,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A named snapshot of filter criteria
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "F: RecordField"))]
pub struct SavedFilterPreset<F: RecordField> {
    pub id: String,
    pub name: String,
    pub conditions: FilterCriteria<F>,
    pub create_time: String,
}

/// Storage key for a feature's presets, e.g. `attackLogsSavedFilters`
pub fn storage_key(feature: &str) -> String {
    format!("{}SavedFilters", feature)
}

/// Presets of one feature, loaded once and written back whole on change
pub struct PresetStore<F: RecordField> {
    store: Arc<dyn KvStore>,
    key: String,
    presets: Vec<SavedFilterPreset<F>>,
    last_id: u64,
}

impl<F: RecordField> PresetStore<F> {
    /// Load the persisted presets of `feature`.
    ///
    /// Read failures are logged and leave the cache empty.
    pub fn load(store: Arc<dyn KvStore>, feature: &str) -> Self {
        let key = storage_key(feature);
        let presets: Vec<SavedFilterPreset<F>> = match store::read_json(store.as_ref(), &key) {
            Ok(presets) => presets,
            Err(e) => {
                tracing::error!(key = %key, error = %e, "Failed to load saved filters");
                Vec::new()
            }
        };
        let last_id = presets
            .iter()
            .filter_map(|p| p.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        tracing::debug!(key = %key, count = presets.len(), "Loaded saved filters");

        Self {
            store,
            key,
            presets,
            last_id,
        }
    }

    pub fn presets(&self) -> &[SavedFilterPreset<F>] {
        &self.presets
    }

    pub fn get(&self, id: &str) -> Option<&SavedFilterPreset<F>> {
        self.presets.iter().find(|p| p.id == id)
    }

    /// Save `criteria` under `name` and persist the whole list
    pub fn save_preset(
        &mut self,
        name: &str,
        criteria: &FilterCriteria<F>,
    ) -> Result<SavedFilterPreset<F>, PresetError> {
        if criteria.is_empty() {
            return Err(PresetError::EmptyCriteria);
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(PresetError::EmptyName);
        }

        let preset = SavedFilterPreset {
            id: self.next_id().to_string(),
            name: name.to_string(),
            conditions: criteria.clone(),
            create_time: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        };

        let mut updated = self.presets.clone();
        updated.push(preset.clone());
        store::write_json(self.store.as_ref(), &self.key, &updated)?;
        self.presets = updated;

        tracing::info!(key = %self.key, id = %preset.id, name = %preset.name, "Saved filter preset");
        Ok(preset)
    }

    /// Overlay a preset's conditions onto `form`.
    ///
    /// Returns `false` and leaves `form` untouched when `id` is unknown.
    pub fn apply_preset(&self, id: &str, form: &mut FilterCriteria<F>) -> bool {
        match self.get(id) {
            Some(preset) => {
                form.merge(&preset.conditions);
                true
            }
            None => {
                tracing::debug!(key = %self.key, id, "Preset not found");
                false
            }
        }
    }

    /// Remove a preset; returns whether one was removed
    pub fn delete_preset(&mut self, id: &str) -> Result<bool, PresetError> {
        if self.get(id).is_none() {
            return Ok(false);
        }

        let updated: Vec<_> = self.presets.iter().filter(|p| p.id != id).cloned().collect();
        store::write_json(self.store.as_ref(), &self.key, &updated)?;
        self.presets = updated;
        Ok(true)
    }

    /// Millisecond timestamp, bumped so ids stay strictly increasing
    fn next_id(&mut self) -> u64 {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        self.last_id = now.max(self.last_id + 1);
        self.last_id
    }
}
