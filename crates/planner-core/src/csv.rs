//! CSV Export
//!
//! Serializes the whole week, with detail annotations, in one pass.

use std::borrow::Cow;

use crate::config::ExportConfig;
use crate::domain::{FoodDetails, MealPlan};

pub const HEADER: &str = "Day,Meal,Food,Category,Link,Notes";

/// A generated file ready to be offered as a download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvFile {
    pub file_name: String,
    pub mime_type: String,
    pub contents: String,
}

impl CsvFile {
    pub fn new(config: &ExportConfig, contents: String) -> Self {
        Self {
            file_name: config.file_name.clone(),
            mime_type: config.mime_type.clone(),
            contents,
        }
    }
}

/// Wrap in double quotes, doubling any inner quote
fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Leave plain fields alone; quote only those that would break the row
fn bare_or_quoted(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        Cow::Owned(quoted(field))
    } else {
        Cow::Borrowed(field)
    }
}

/// Render the plan as CSV.
///
/// Rows run day, meal, then insertion order. Link and Notes are always
/// quoted; Food and Category only when they contain a delimiter, quote or
/// line break. Every line ends with `\n`.
pub fn export_plan(plan: &MealPlan, details: &FoodDetails) -> String {
    let mut csv = String::with_capacity(HEADER.len() + 1 + plan.len() * 48);
    csv.push_str(HEADER);
    csv.push('\n');
    for (slot, food) in plan.iter() {
        let detail = details.get_or_default(food.id);
        csv.push_str(&format!(
            "{},{},{},{},{},{}\n",
            slot.day.as_str(),
            slot.meal.as_str(),
            bare_or_quoted(&food.name),
            bare_or_quoted(&food.category),
            quoted(&detail.link),
            quoted(&detail.notes),
        ));
    }
    csv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Day, FoodDetail, Meal, PlacedFood, Slot};

    #[test]
    fn test_empty_plan_is_header_only() {
        let csv = export_plan(&MealPlan::new(), &FoodDetails::new());
        assert_eq!(csv, "Day,Meal,Food,Category,Link,Notes\n");
    }

    #[test]
    fn test_single_entry_row() {
        let mut plan = MealPlan::new();
        plan.push(Slot::new(Day::Monday, Meal::Breakfast), PlacedFood::new(1, "Oats", "grain"));
        let mut details = FoodDetails::new();
        details.save(1, FoodDetail::new("https://a.com", "good"));

        let csv = export_plan(&plan, &details);
        assert_eq!(
            csv,
            "Day,Meal,Food,Category,Link,Notes\nmonday,breakfast,Oats,grain,\"https://a.com\",\"good\"\n"
        );
    }

    #[test]
    fn test_notes_quotes_are_doubled() {
        let mut plan = MealPlan::new();
        plan.push(Slot::new(Day::Friday, Meal::Dinner), PlacedFood::new(3, "Pasta", "grain"));
        let mut details = FoodDetails::new();
        details.save(3, FoodDetail::new("", "say \"hi\""));

        let csv = export_plan(&plan, &details);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, "friday,dinner,Pasta,grain,\"\",\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_missing_detail_exports_empty_quotes() {
        let mut plan = MealPlan::new();
        plan.push(Slot::new(Day::Sunday, Meal::Snacks), PlacedFood::new(2, "Nuts", "other"));
        let csv = export_plan(&plan, &FoodDetails::new());
        assert!(csv.ends_with("sunday,snacks,Nuts,other,\"\",\"\"\n"));
    }

    #[test]
    fn test_food_with_comma_is_quoted() {
        let mut plan = MealPlan::new();
        plan.push(
            Slot::new(Day::Monday, Meal::Lunch),
            PlacedFood::new(1, "Rice, brown", "grain"),
        );
        plan.push(
            Slot::new(Day::Monday, Meal::Lunch),
            PlacedFood::new(2, "6\" sub", "other"),
        );
        let csv = export_plan(&plan, &FoodDetails::new());
        let rows: Vec<&str> = csv.lines().skip(1).collect();
        assert_eq!(rows[0], "monday,lunch,\"Rice, brown\",grain,\"\",\"\"");
        assert_eq!(rows[1], "monday,lunch,\"6\"\" sub\",other,\"\",\"\"");
    }

    #[test]
    fn test_row_order_is_day_meal_insertion() {
        let mut plan = MealPlan::new();
        plan.push(Slot::new(Day::Tuesday, Meal::Breakfast), PlacedFood::new(1, "C", "x"));
        plan.push(Slot::new(Day::Monday, Meal::Dinner), PlacedFood::new(2, "B", "x"));
        plan.push(Slot::new(Day::Monday, Meal::Breakfast), PlacedFood::new(3, "A2", "x"));
        plan.push(Slot::new(Day::Monday, Meal::Breakfast), PlacedFood::new(4, "A1", "x"));
        let csv = export_plan(&plan, &FoodDetails::new());
        let foods: Vec<&str> = csv
            .lines()
            .skip(1)
            .map(|row| row.split(',').nth(2).unwrap())
            .collect();
        assert_eq!(foods, ["A2", "A1", "B", "C"]);
    }
}
