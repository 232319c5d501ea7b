//! Food Catalog
//!
//! The palette of draggable foods, grouped by category. Built-in categories
//! ship with the app; user categories can be added and deleted.

use serde::{Deserialize, Serialize};

use super::entity::{position_of, Entity};
use super::food::{FoodId, IdGen};
use crate::color::color_for;

/// A draggable food in the palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFood {
    pub id: FoodId,
    pub name: String,
}

impl Entity for CatalogFood {
    fn id(&self) -> FoodId {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Slug, unique within the catalog
    pub id: String,
    pub name: String,
    /// CSS color for badges and placed chips
    pub color: String,
    #[serde(default)]
    pub builtin: bool,
    #[serde(default)]
    pub items: Vec<CatalogFood>,
}

/// Built-in categories: (slug, display name, color, seed foods)
const BUILTIN_CATEGORIES: &[(&str, &str, &str, &[&str])] = &[
    ("fruit", "Fruit", "#ff8a80", &["Apple", "Banana", "Berries", "Orange"]),
    ("veggie", "Veggie", "#81c784", &["Broccoli", "Carrots", "Spinach", "Salad"]),
    ("protein", "Protein", "#ffb74d", &["Chicken", "Eggs", "Fish", "Tofu"]),
    ("grain", "Grain", "#ffe082", &["Oats", "Rice", "Bread", "Pasta"]),
    ("dairy", "Dairy", "#90caf9", &["Milk", "Yogurt", "Cheese"]),
    ("other", "Other", "#b0bec5", &["Nuts", "Smoothie"]),
];

/// Lowercase, with every whitespace run collapsed to a single hyphen
pub fn slugify(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Catalog holding only the built-in categories and their seed foods
    pub fn builtin(ids: &mut IdGen) -> Self {
        let categories = BUILTIN_CATEGORIES
            .iter()
            .map(|(id, name, color, foods)| Category {
                id: id.to_string(),
                name: name.to_string(),
                color: color.to_string(),
                builtin: true,
                items: foods
                    .iter()
                    .map(|food| CatalogFood { id: ids.next_id(), name: food.to_string() })
                    .collect(),
            })
            .collect();
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Add a user category. Blank names are ignored. A name whose slug is
    /// already taken resolves to the existing category instead of a new one.
    pub fn add_category(&mut self, name: &str) -> Option<&Category> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let id = slugify(name);
        let existing = self.categories.iter().position(|category| category.id == id);
        match existing {
            Some(index) => Some(&self.categories[index]),
            None => {
                self.categories.push(Category {
                    color: color_for(&id).to_string(),
                    id,
                    name: name.to_string(),
                    builtin: false,
                    items: Vec::new(),
                });
                self.categories.last()
            }
        }
    }

    /// Delete a user category and every food in it. Built-ins stay.
    pub fn delete_category(&mut self, id: &str) -> Option<Category> {
        let index = self
            .categories
            .iter()
            .position(|category| category.id == id && !category.builtin)?;
        Some(self.categories.remove(index))
    }

    /// Append a food to a category, returning its new id
    pub fn add_food(&mut self, category_id: &str, name: &str, ids: &mut IdGen) -> Option<FoodId> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let Some(category) = self.categories.iter_mut().find(|category| category.id == category_id) else {
            log::warn!("no category '{}' for food '{}'", category_id, name);
            return None;
        };
        let id = ids.next_id();
        category.items.push(CatalogFood { id, name: name.to_string() });
        Some(id)
    }

    pub fn remove_food(&mut self, id: FoodId) -> Option<CatalogFood> {
        self.categories.iter_mut().find_map(|category| {
            position_of(&category.items, id).map(|index| category.items.remove(index))
        })
    }

    /// The category and palette entry for a catalog food id
    pub fn find_food(&self, id: FoodId) -> Option<(&Category, &CatalogFood)> {
        self.categories.iter().find_map(|category| {
            position_of(&category.items, id).map(|index| (category, &category.items[index]))
        })
    }

    /// Badge color for a category id. Foods whose category has since been
    /// deleted still get the derived color.
    pub fn color_of(&self, category_id: &str) -> String {
        self.get(category_id)
            .map(|category| category.color.clone())
            .unwrap_or_else(|| color_for(category_id).to_string())
    }

    /// Ids of every palette food
    pub fn ids(&self) -> impl Iterator<Item = FoodId> + '_ {
        self.categories
            .iter()
            .flat_map(|category| category.items.iter().map(|food| food.id))
    }

    pub fn max_id(&self) -> Option<FoodId> {
        self.ids().max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> (Catalog, IdGen) {
        let mut ids = IdGen::default();
        let catalog = Catalog::builtin(&mut ids);
        (catalog, ids)
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Late Night  Snacks"), "late-night-snacks");
        assert_eq!(slugify("  Fruit "), "fruit");
        assert_eq!(slugify("A\tB"), "a-b");
    }

    #[test]
    fn test_builtin_catalog_has_unique_ids() {
        let (catalog, _) = catalog();
        assert!(catalog.get("fruit").unwrap().builtin);
        assert!(catalog.get("veggie").is_some());
        let mut all: Vec<FoodId> = catalog
            .categories()
            .iter()
            .flat_map(|c| c.items.iter().map(|f| f.id))
            .collect();
        let count = all.len();
        all.dedup();
        assert_eq!(all.len(), count);
    }

    #[test]
    fn test_add_category_derives_slug_and_color() {
        let (mut catalog, _) = catalog();
        let added = catalog.add_category("  Late Snacks ").unwrap().clone();
        assert_eq!(added.id, "late-snacks");
        assert_eq!(added.name, "Late Snacks");
        assert_eq!(added.color, color_for("late-snacks").to_string());
        assert!(!added.builtin);
        assert!(added.items.is_empty());
        assert_eq!(catalog.categories().last().unwrap().id, "late-snacks");
    }

    #[test]
    fn test_add_blank_category_is_ignored() {
        let (mut catalog, _) = catalog();
        let before = catalog.categories().len();
        assert!(catalog.add_category("   ").is_none());
        assert_eq!(catalog.categories().len(), before);
    }

    #[test]
    fn test_colliding_slug_merges() {
        let (mut catalog, mut ids) = catalog();
        catalog.add_category("Late Snacks");
        catalog.add_food("late-snacks", "Popcorn", &mut ids);
        let before = catalog.categories().len();

        let merged = catalog.add_category("late   snacks").unwrap();
        assert_eq!(merged.items.len(), 1);
        assert_eq!(catalog.categories().len(), before);
    }

    #[test]
    fn test_delete_category_cascades_items() {
        let (mut catalog, mut ids) = catalog();
        catalog.add_category("Drinks");
        let tea = catalog.add_food("drinks", "Tea", &mut ids).unwrap();

        let deleted = catalog.delete_category("drinks").unwrap();
        assert_eq!(deleted.items.len(), 1);
        assert!(catalog.get("drinks").is_none());
        assert!(catalog.find_food(tea).is_none());
    }

    #[test]
    fn test_builtin_categories_cannot_be_deleted() {
        let (mut catalog, _) = catalog();
        assert!(catalog.delete_category("fruit").is_none());
        assert!(catalog.get("fruit").is_some());
        assert!(catalog.delete_category("missing").is_none());
    }

    #[test]
    fn test_add_and_remove_food() {
        let (mut catalog, mut ids) = catalog();
        assert!(catalog.add_food("fruit", "  ", &mut ids).is_none());
        assert!(catalog.add_food("nope", "Kiwi", &mut ids).is_none());

        let kiwi = catalog.add_food("fruit", " Kiwi ", &mut ids).unwrap();
        let (category, food) = catalog.find_food(kiwi).unwrap();
        assert_eq!(category.id, "fruit");
        assert_eq!(food.name, "Kiwi");
        assert_eq!(catalog.get("fruit").unwrap().items.last().unwrap().id, kiwi);

        let removed = catalog.remove_food(kiwi).unwrap();
        assert_eq!(removed.name, "Kiwi");
        assert!(catalog.find_food(kiwi).is_none());
        assert!(catalog.remove_food(kiwi).is_none());
    }

    #[test]
    fn test_color_of_falls_back_to_derived() {
        let (catalog, _) = catalog();
        assert_eq!(catalog.color_of("fruit"), "#ff8a80");
        assert_eq!(catalog.color_of("gone"), color_for("gone").to_string());
    }

    #[test]
    fn test_catalog_serializes_as_list() {
        let (catalog, _) = catalog();
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(json.starts_with('['));
        let restored: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, catalog);
    }
}
