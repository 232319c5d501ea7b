//! Meal Plan
//!
//! Ordered placed-food lists for every day/meal slot. Insertion order is
//! significant and always appends.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use super::entity::position_of;
use super::food::{FoodId, IdGen, PlacedFood};
use super::week::{Day, Meal, Slot};

/// Persisted shape: `{ "<day>": { "<meal>": [food, ...] } }`
pub type StoredPlan = BTreeMap<String, BTreeMap<String, Vec<StoredFood>>>;

/// Persisted placed food. Records written before ids existed have none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredFood {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<FoodId>,
    pub name: String,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealPlan {
    slots: BTreeMap<Slot, Vec<PlacedFood>>,
}

impl MealPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every id present in a persisted plan
    pub fn stored_ids(stored: &StoredPlan) -> impl Iterator<Item = FoodId> + '_ {
        stored
            .values()
            .flat_map(|meals| meals.values())
            .flatten()
            .filter_map(|food| food.id)
    }

    /// Rebuild a plan from its persisted form.
    ///
    /// Unknown day or meal keys are skipped. Foods without an id, or whose id
    /// was already seen, get a fresh one from `ids`, assigned in week order.
    /// `ids` must already reserve every stored id.
    pub fn from_stored(stored: StoredPlan, ids: &mut IdGen) -> Self {
        let mut by_slot: BTreeMap<Slot, Vec<StoredFood>> = BTreeMap::new();
        for (day_key, meals) in stored {
            let Some(day) = Day::from_str(&day_key) else {
                log::warn!("skipping unknown day '{}' in stored plan", day_key);
                continue;
            };
            for (meal_key, foods) in meals {
                let Some(meal) = Meal::from_str(&meal_key) else {
                    log::warn!("skipping unknown meal '{}' for {}", meal_key, day_key);
                    continue;
                };
                by_slot.insert(Slot::new(day, meal), foods);
            }
        }

        let mut seen = HashSet::new();
        let mut plan = MealPlan::new();
        for (slot, foods) in by_slot {
            for food in foods {
                let id = match food.id {
                    Some(id) if seen.insert(id) => id,
                    _ => {
                        let id = ids.next_id();
                        seen.insert(id);
                        id
                    }
                };
                plan.push(slot, PlacedFood::new(id, food.name, food.category));
            }
        }
        plan
    }

    /// Persisted form with every one of the 28 slots present
    pub fn to_stored(&self) -> StoredPlan {
        let mut stored = StoredPlan::new();
        for slot in Slot::all() {
            let foods = self
                .foods(slot)
                .iter()
                .map(|food| StoredFood {
                    id: Some(food.id),
                    name: food.name.clone(),
                    category: food.category.clone(),
                })
                .collect();
            stored
                .entry(slot.day.as_str().to_string())
                .or_default()
                .insert(slot.meal.as_str().to_string(), foods);
        }
        stored
    }

    pub fn foods(&self, slot: Slot) -> &[PlacedFood] {
        self.slots.get(&slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every food placed on `day`, across all meals
    pub fn day_foods(&self, day: Day) -> impl Iterator<Item = &PlacedFood> + '_ {
        Meal::ALL
            .into_iter()
            .flat_map(move |meal| self.foods(Slot::new(day, meal)).iter())
    }

    /// Append to the end of a slot
    pub fn push(&mut self, slot: Slot, food: PlacedFood) {
        self.slots.entry(slot).or_default().push(food);
    }

    pub fn get(&self, id: FoodId) -> Option<&PlacedFood> {
        self.locate(id)
            .map(|(slot, index)| &self.slots[&slot][index])
    }

    /// Slot and position of a placed food
    pub fn locate(&self, id: FoodId) -> Option<(Slot, usize)> {
        self.slots
            .iter()
            .find_map(|(slot, foods)| position_of(foods, id).map(|index| (*slot, index)))
    }

    pub fn remove(&mut self, id: FoodId) -> Option<(Slot, PlacedFood)> {
        let (slot, index) = self.locate(id)?;
        let foods = self.slots.get_mut(&slot)?;
        let food = foods.remove(index);
        if foods.is_empty() {
            self.slots.remove(&slot);
        }
        Some((slot, food))
    }

    /// Move a placed food to the end of `to`. The food keeps its id, so it
    /// appears exactly once afterwards.
    pub fn move_to(&mut self, id: FoodId, to: Slot) -> bool {
        match self.remove(id) {
            Some((_, food)) => {
                self.push(to, food);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Foods in export order: day, meal, then insertion order
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &PlacedFood)> + '_ {
        self.slots
            .iter()
            .flat_map(|(slot, foods)| foods.iter().map(move |food| (*slot, food)))
    }

    pub fn len(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(day: Day, meal: Meal) -> Slot {
        Slot::new(day, meal)
    }

    #[test]
    fn test_push_appends_in_order() {
        let mut plan = MealPlan::new();
        let s = slot(Day::Monday, Meal::Lunch);
        plan.push(s, PlacedFood::new(1, "Rice", "grain"));
        plan.push(s, PlacedFood::new(2, "Tofu", "protein"));
        plan.push(s, PlacedFood::new(3, "Rice", "grain"));
        let names: Vec<&str> = plan.foods(s).iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Rice", "Tofu", "Rice"]);
        assert_eq!(plan.len(), 3);
    }

    #[test]
    fn test_move_leaves_single_instance() {
        let mut plan = MealPlan::new();
        let from = slot(Day::Monday, Meal::Breakfast);
        let to = slot(Day::Thursday, Meal::Dinner);
        plan.push(from, PlacedFood::new(7, "Eggs", "protein"));
        plan.push(to, PlacedFood::new(8, "Pasta", "grain"));

        assert!(plan.move_to(7, to));
        assert!(plan.foods(from).is_empty());
        let ids: Vec<FoodId> = plan.foods(to).iter().map(|f| f.id).collect();
        assert_eq!(ids, [8, 7]);
        assert_eq!(plan.iter().filter(|(_, f)| f.id == 7).count(), 1);
    }

    #[test]
    fn test_move_unknown_is_noop() {
        let mut plan = MealPlan::new();
        assert!(!plan.move_to(99, slot(Day::Friday, Meal::Lunch)));
        assert!(plan.is_empty());
    }

    #[test]
    fn test_iter_follows_week_order() {
        let mut plan = MealPlan::new();
        plan.push(slot(Day::Sunday, Meal::Breakfast), PlacedFood::new(1, "Late", "other"));
        plan.push(slot(Day::Monday, Meal::Snacks), PlacedFood::new(2, "Nuts", "other"));
        plan.push(slot(Day::Monday, Meal::Breakfast), PlacedFood::new(3, "Oats", "grain"));
        let ids: Vec<FoodId> = plan.iter().map(|(_, f)| f.id).collect();
        assert_eq!(ids, [3, 2, 1]);
    }

    #[test]
    fn test_stored_round_trip_preserves_order() {
        let mut plan = MealPlan::new();
        plan.push(slot(Day::Tuesday, Meal::Dinner), PlacedFood::new(4, "Fish", "protein"));
        plan.push(slot(Day::Tuesday, Meal::Dinner), PlacedFood::new(2, "Salad", "veggie"));
        plan.push(slot(Day::Saturday, Meal::Snacks), PlacedFood::new(9, "Apple", "fruit"));

        let stored = plan.to_stored();
        assert_eq!(stored.len(), 7);
        assert!(stored.values().all(|meals| meals.len() == 4));

        let mut ids = IdGen::reserving(MealPlan::stored_ids(&stored));
        let restored = MealPlan::from_stored(stored, &mut ids);
        assert_eq!(restored, plan);
    }

    #[test]
    fn test_legacy_records_get_ids_in_week_order() {
        let json = r#"{
            "tuesday": { "lunch": [ { "name": "Soup", "category": "other" } ] },
            "monday": {
                "breakfast": [ { "name": "Oats", "category": "grain" }, { "id": 5, "name": "Apple", "category": "fruit" } ],
                "brunch": [ { "name": "Waffles", "category": "grain" } ]
            },
            "funday": { "lunch": [] }
        }"#;
        let stored: StoredPlan = serde_json::from_str(json).unwrap();
        let mut ids = IdGen::reserving(MealPlan::stored_ids(&stored));
        let plan = MealPlan::from_stored(stored, &mut ids);

        let monday = plan.foods(slot(Day::Monday, Meal::Breakfast));
        assert_eq!(monday[0].name, "Oats");
        assert_eq!(monday[0].id, 6);
        assert_eq!(monday[1].id, 5);
        assert_eq!(plan.foods(slot(Day::Tuesday, Meal::Lunch))[0].id, 7);
        assert_eq!(plan.len(), 3);
    }

    #[test]
    fn test_duplicate_stored_ids_are_reassigned() {
        let json = r#"{ "monday": { "lunch": [
            { "id": 3, "name": "Rice", "category": "grain" },
            { "id": 3, "name": "Beans", "category": "protein" }
        ] } }"#;
        let stored: StoredPlan = serde_json::from_str(json).unwrap();
        let mut ids = IdGen::reserving(MealPlan::stored_ids(&stored));
        let plan = MealPlan::from_stored(stored, &mut ids);
        let foods = plan.foods(slot(Day::Monday, Meal::Lunch));
        assert_eq!(foods[0].id, 3);
        assert_eq!(foods[1].id, 4);
    }

    #[test]
    fn test_day_foods_spans_meals() {
        let mut plan = MealPlan::new();
        plan.push(slot(Day::Wednesday, Meal::Snacks), PlacedFood::new(1, "Nuts", "other"));
        plan.push(slot(Day::Wednesday, Meal::Breakfast), PlacedFood::new(2, "Milk", "dairy"));
        plan.push(slot(Day::Thursday, Meal::Breakfast), PlacedFood::new(3, "Toast", "grain"));
        let names: Vec<&str> = plan.day_foods(Day::Wednesday).map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Milk", "Nuts"]);
    }
}
