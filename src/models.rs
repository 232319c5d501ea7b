//! Frontend Models
//!
//! What a drag carries, and how a drop turns into a planner command.

use leptos_dragdrop::DndSignals;
use planner_core::{CatalogFood, Command, FoodId, PlacedFood, Slot};

/// Where a dragged food came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOrigin {
    /// A palette entry; dropping copies it into the slot
    Palette(FoodId),
    /// A food already on the board; dropping moves it
    Placed(FoodId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub name: String,
    pub category: String,
    pub origin: DragOrigin,
}

impl DragPayload {
    pub fn from_palette(food: &CatalogFood, category: &str) -> Self {
        Self {
            name: food.name.clone(),
            category: category.to_string(),
            origin: DragOrigin::Palette(food.id),
        }
    }

    pub fn from_placed(food: &PlacedFood) -> Self {
        Self {
            name: food.name.clone(),
            category: food.category.clone(),
            origin: DragOrigin::Placed(food.id),
        }
    }

    /// Does this payload carry a food of `category`?
    pub fn is_from_category(&self, category: &str) -> bool {
        self.category == category
    }

    /// Command for dropping this payload onto `slot`
    pub fn into_command(self, slot: Slot) -> Command {
        match self.origin {
            DragOrigin::Palette(_) => Command::AddFood {
                slot,
                name: self.name,
                category: self.category,
            },
            DragOrigin::Placed(id) => Command::MoveFood { id, to: slot },
        }
    }
}

/// DnD signals specialised to the planner board
pub type PlannerDnd = DndSignals<DragPayload, Slot>;
