//! JSON Codec
//!
//! Typed get/set over a [`KeyValueStore`]. Missing and malformed values both
//! read back as `None`; only the log sees the difference.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::traits::KeyValueStore;
use crate::error::PlannerResult;

pub fn load_json<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("ignoring malformed '{}' in storage: {}", key, e);
            None
        }
    }
}

pub fn save_json<T, S>(store: &mut S, key: &str, value: &T) -> PlannerResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::collections::BTreeMap;

    #[test]
    fn test_absent_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(load_json::<Vec<u32>, _>(&store, "nothing"), None);
    }

    #[test]
    fn test_malformed_value_is_none() {
        let store = MemoryStore::new().with_entry("mealPlan", "{not json");
        assert_eq!(load_json::<BTreeMap<String, u32>, _>(&store, "mealPlan"), None);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        save_json(&mut store, "numbers", &vec![3, 1, 2]).unwrap();
        assert_eq!(store.get("numbers").as_deref(), Some("[3,1,2]"));
        assert_eq!(load_json::<Vec<u32>, _>(&store, "numbers"), Some(vec![3, 1, 2]));
    }
}
