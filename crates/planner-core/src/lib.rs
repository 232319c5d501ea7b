//! Meal Planner Core
//!
//! Layered like the front end expects it:
//! - domain: week grid, placed foods, catalog, detail records
//! - storage: key-value persistence and its JSON codec
//! - planner: the single state owner and its command reducer
//!
//! Nothing in here touches the DOM, so every rule is unit-testable natively.

pub mod advisory;
pub mod color;
pub mod config;
pub mod csv;
pub mod domain;
pub mod error;
pub mod planner;
pub mod storage;

pub use config::PlannerConfig;
pub use domain::{Catalog, CatalogFood, Category, Day, FoodDetail, FoodDetails, FoodId, MealPlan, Meal, PlacedFood, Slot};
pub use error::{PlannerError, PlannerResult};
pub use planner::{Command, Effects, Planner};
pub use storage::{KeyValueStore, MemoryStore};
