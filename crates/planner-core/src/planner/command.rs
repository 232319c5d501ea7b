//! Planner Commands
//!
//! Every user action the board and the daily view can trigger.

use crate::domain::{FoodId, Slot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a user category from a display name
    AddCategory { name: String },
    /// Delete a user category and its palette foods
    DeleteCategory { id: String },
    /// Add a food to a category's palette
    AddCatalogFood { category: String, name: String },
    RemoveCatalogFood { id: FoodId },
    /// Place a food into a slot (drop from the palette)
    AddFood { slot: Slot, name: String, category: String },
    RemoveFood { id: FoodId },
    /// Move a placed food to the end of another slot
    MoveFood { id: FoodId, to: Slot },
    SaveDetail { id: FoodId, link: String, notes: String },
    /// Empty every slot and drop every detail record
    ClearAll,
    Export,
}

impl Command {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddCategory { .. } => "AddCategory",
            Command::DeleteCategory { .. } => "DeleteCategory",
            Command::AddCatalogFood { .. } => "AddCatalogFood",
            Command::RemoveCatalogFood { .. } => "RemoveCatalogFood",
            Command::AddFood { .. } => "AddFood",
            Command::RemoveFood { .. } => "RemoveFood",
            Command::MoveFood { .. } => "MoveFood",
            Command::SaveDetail { .. } => "SaveDetail",
            Command::ClearAll => "ClearAll",
            Command::Export => "Export",
        }
    }
}
