//! Food Details
//!
//! Shopping link and free-text notes attached to a placed food, keyed by the
//! placed food's id so they follow it through moves.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::food::FoodId;
use super::plan::MealPlan;
use super::week::{Day, Meal, Slot};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodDetail {
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub notes: String,
}

impl FoodDetail {
    pub fn new(link: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            notes: notes.into(),
        }
    }
}

/// Persisted shape: string key → detail
pub type StoredDetails = BTreeMap<String, FoodDetail>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodDetails {
    by_food: BTreeMap<FoodId, FoodDetail>,
}

/// Parse a positional `{day}-{meal}-{index}` key
fn parse_positional_key(key: &str) -> Option<(Slot, usize)> {
    let mut parts = key.splitn(3, '-');
    let day = Day::from_str(parts.next()?)?;
    let meal = Meal::from_str(parts.next()?)?;
    let index = parts.next()?.parse().ok()?;
    Some((Slot::new(day, meal), index))
}

impl FoodDetails {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild details from their persisted form.
    ///
    /// Keys are placed-food ids. Positional `{day}-{meal}-{index}` keys are
    /// resolved against `plan` to the food currently at that position. Keys
    /// that point at no placed food are dropped.
    pub fn from_stored(stored: StoredDetails, plan: &MealPlan) -> Self {
        let mut details = FoodDetails::new();
        let mut positional = Vec::new();
        for (key, detail) in stored {
            if let Ok(id) = key.parse::<FoodId>() {
                if plan.get(id).is_some() {
                    details.by_food.insert(id, detail);
                } else {
                    log::warn!("dropping details for missing food {}", id);
                }
            } else if let Some((slot, index)) = parse_positional_key(&key) {
                positional.push((slot, index, key, detail));
            } else {
                log::warn!("dropping details under unrecognized key '{}'", key);
            }
        }
        // Id-keyed records win over positional ones for the same food.
        for (slot, index, key, detail) in positional {
            match plan.foods(slot).get(index) {
                Some(food) => {
                    details.by_food.entry(food.id).or_insert(detail);
                }
                None => log::warn!("dropping details for empty position '{}'", key),
            }
        }
        details
    }

    pub fn to_stored(&self) -> StoredDetails {
        self.by_food
            .iter()
            .map(|(id, detail)| (id.to_string(), detail.clone()))
            .collect()
    }

    pub fn get(&self, id: FoodId) -> Option<&FoodDetail> {
        self.by_food.get(&id)
    }

    /// Detail for a food, or empty link and notes when none was saved
    pub fn get_or_default(&self, id: FoodId) -> FoodDetail {
        self.get(id).cloned().unwrap_or_default()
    }

    /// Last writer wins
    pub fn save(&mut self, id: FoodId, detail: FoodDetail) {
        self.by_food.insert(id, detail);
    }

    pub fn remove(&mut self, id: FoodId) -> Option<FoodDetail> {
        self.by_food.remove(&id)
    }

    pub fn clear(&mut self) {
        self.by_food.clear();
    }

    pub fn len(&self) -> usize {
        self.by_food.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_food.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlacedFood;

    fn plan() -> MealPlan {
        let mut plan = MealPlan::new();
        let breakfast = Slot::new(Day::Monday, Meal::Breakfast);
        plan.push(breakfast, PlacedFood::new(10, "Oats", "grain"));
        plan.push(breakfast, PlacedFood::new(11, "Berries", "fruit"));
        plan
    }

    #[test]
    fn test_parse_positional_key() {
        assert_eq!(
            parse_positional_key("monday-breakfast-1"),
            Some((Slot::new(Day::Monday, Meal::Breakfast), 1))
        );
        assert_eq!(parse_positional_key("monday-brunch-1"), None);
        assert_eq!(parse_positional_key("monday-breakfast"), None);
        assert_eq!(parse_positional_key("monday-breakfast-x"), None);
    }

    #[test]
    fn test_default_is_empty_strings() {
        let details = FoodDetails::new();
        assert_eq!(details.get_or_default(10), FoodDetail::new("", ""));
    }

    #[test]
    fn test_save_overwrites() {
        let mut details = FoodDetails::new();
        details.save(10, FoodDetail::new("https://a.com", "first"));
        details.save(10, FoodDetail::new("https://b.com", "second"));
        assert_eq!(details.get(10).unwrap().notes, "second");
        assert_eq!(details.len(), 1);
    }

    #[test]
    fn test_stored_round_trip() {
        let mut details = FoodDetails::new();
        details.save(11, FoodDetail::new("https://shop.example/berries", "frozen is fine"));
        let stored = details.to_stored();
        assert!(stored.contains_key("11"));
        assert_eq!(FoodDetails::from_stored(stored, &plan()), details);
    }

    #[test]
    fn test_positional_keys_migrate_to_ids() {
        let json = r#"{
            "monday-breakfast-1": { "link": "https://a.com", "notes": "berries" },
            "monday-breakfast-5": { "link": "", "notes": "nothing here" },
            "99": { "link": "", "notes": "orphan" },
            "garbage": { "link": "", "notes": "" }
        }"#;
        let stored: StoredDetails = serde_json::from_str(json).unwrap();
        let details = FoodDetails::from_stored(stored, &plan());
        assert_eq!(details.len(), 1);
        assert_eq!(details.get(11).unwrap().notes, "berries");
    }

    #[test]
    fn test_id_key_wins_over_positional() {
        let json = r#"{
            "10": { "link": "", "notes": "by id" },
            "monday-breakfast-0": { "link": "", "notes": "by position" }
        }"#;
        let stored: StoredDetails = serde_json::from_str(json).unwrap();
        let details = FoodDetails::from_stored(stored, &plan());
        assert_eq!(details.get(10).unwrap().notes, "by id");
    }

    #[test]
    fn test_missing_fields_default() {
        let stored: StoredDetails = serde_json::from_str(r#"{ "10": { "notes": "only notes" } }"#).unwrap();
        let details = FoodDetails::from_stored(stored, &plan());
        assert_eq!(details.get(10).unwrap().link, "");
    }
}
