//! Domain Layer
//!
//! Contains all planner entities and the rules that keep them consistent.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod week;
mod food;
mod plan;
mod catalog;
mod detail;

pub use entity::{Entity, position_of};
pub use week::{Day, Meal, Slot};
pub use food::{FoodId, IdGen, PlacedFood};
pub use plan::{MealPlan, StoredFood, StoredPlan};
pub use catalog::{slugify, Catalog, CatalogFood, Category};
pub use detail::{FoodDetail, FoodDetails, StoredDetails};
