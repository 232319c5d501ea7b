//! Domain Layer - Core Entity Trait
//!
//! Every food the planner tracks, in the palette or on the board, carries a
//! stable id assigned at creation time. Lookups and removals go through it.

use super::food::FoodId;

/// Core trait for entities addressed by a generated id
pub trait Entity {
    fn id(&self) -> FoodId;
}

/// Index of the entity with `id` in `items`
pub fn position_of<T: Entity>(items: &[T], id: FoodId) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}
