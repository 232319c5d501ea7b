//! Placed Food Entity
//!
//! A food dropped into a meal slot, plus the id source shared by everything
//! that needs a stable identity.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Stable identifier for catalog and placed foods
pub type FoodId = u32;

/// A food placed into a day/meal slot. Duplicates by name are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedFood {
    pub id: FoodId,
    pub name: String,
    /// Category slug, e.g. "fruit" or a user-created "late-snacks"
    pub category: String,
}

impl PlacedFood {
    pub fn new(id: FoodId, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
        }
    }
}

impl Entity for PlacedFood {
    fn id(&self) -> FoodId {
        self.id
    }
}

/// Id generator. Ids start at 1 and are never handed out twice; after the
/// top of the range it wraps to the lowest id not yet issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGen {
    next: FoodId,
    issued: BTreeSet<FoodId>,
}

impl Default for IdGen {
    fn default() -> Self {
        Self { next: 1, issued: BTreeSet::new() }
    }
}

impl IdGen {
    /// Resume after the highest of `ids`, treating all of them as taken
    pub fn reserving(ids: impl IntoIterator<Item = FoodId>) -> Self {
        let issued: BTreeSet<FoodId> = ids.into_iter().collect();
        let next = issued.last().map_or(1, |id| id.wrapping_add(1).max(1));
        Self { next, issued }
    }

    pub fn next_id(&mut self) -> FoodId {
        while self.issued.contains(&self.next) {
            self.advance();
        }
        let id = self.next;
        self.issued.insert(id);
        self.advance();
        id
    }

    fn advance(&mut self) {
        self.next = self.next.checked_add(1).unwrap_or(1);
    }
}
