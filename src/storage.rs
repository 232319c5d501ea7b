//! Browser Storage
//!
//! `localStorage` behind the planner's key-value store trait.

use planner_core::{KeyValueStore, PlannerError, PlannerResult};
use wasm_bindgen::JsValue;

/// Window-local persistent storage
pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    /// `None` when storage is unavailable (e.g. disabled by privacy settings)
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        Some(Self { storage })
    }
}

fn storage_error(action: &str, key: &str, err: JsValue) -> PlannerError {
    PlannerError::Storage(format!("{} '{}': {:?}", action, key, err))
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> PlannerResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| storage_error("write", key, e))
    }

    fn remove(&mut self, key: &str) -> PlannerResult<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| storage_error("remove", key, e))
    }
}
