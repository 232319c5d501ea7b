//! Fruit/Veggie Advisory
//!
//! Flags days that have food planned but nothing from the produce categories.

use crate::domain::{Day, MealPlan, PlacedFood};

/// Categories that satisfy the advisory
pub const PRODUCE_CATEGORIES: &[&str] = &["fruit", "veggie"];

/// True iff at least one food is given and none of them is fruit or veggie.
/// An empty day is not flagged.
pub fn needs_fruit_veggie<'a, I>(foods: I) -> bool
where
    I: IntoIterator<Item = &'a PlacedFood>,
{
    let mut any = false;
    for food in foods {
        if PRODUCE_CATEGORIES.contains(&food.category.as_str()) {
            return false;
        }
        any = true;
    }
    any
}

/// Days of `plan` that currently need the advisory, in week order
pub fn flagged_days(plan: &MealPlan) -> Vec<Day> {
    Day::ALL
        .into_iter()
        .filter(|day| needs_fruit_veggie(plan.day_foods(*day)))
        .collect()
}
