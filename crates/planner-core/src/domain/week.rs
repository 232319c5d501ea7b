//! Week Grid
//!
//! The seven days and four meals every plan is laid out on.

use serde::{Deserialize, Serialize};

/// Day of the week, in planner order (Monday first)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Monday => "monday",
            Day::Tuesday => "tuesday",
            Day::Wednesday => "wednesday",
            Day::Thursday => "thursday",
            Day::Friday => "friday",
            Day::Saturday => "saturday",
            Day::Sunday => "sunday",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Day::ALL.into_iter().find(|day| day.as_str() == s)
    }

    /// Capitalized name for headings
    pub fn label(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    /// Map a JS `Date.getDay()` value (0 = Sunday) onto the planner week
    pub fn from_weekday(index: u32) -> Self {
        match index % 7 {
            0 => Day::Sunday,
            n => Day::ALL[(n - 1) as usize],
        }
    }
}

/// Meal of the day, in serving order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl Meal {
    pub const ALL: [Meal; 4] = [Meal::Breakfast, Meal::Lunch, Meal::Dinner, Meal::Snacks];

    pub fn as_str(&self) -> &'static str {
        match self {
            Meal::Breakfast => "breakfast",
            Meal::Lunch => "lunch",
            Meal::Dinner => "dinner",
            Meal::Snacks => "snacks",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Meal::ALL.into_iter().find(|meal| meal.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Meal::Breakfast => "Breakfast",
            Meal::Lunch => "Lunch",
            Meal::Dinner => "Dinner",
            Meal::Snacks => "Snacks",
        }
    }
}

/// One cell of the board. Ordering follows day, then meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub day: Day,
    pub meal: Meal,
}

impl Slot {
    pub fn new(day: Day, meal: Meal) -> Self {
        Self { day, meal }
    }

    /// All 28 slots in export order
    pub fn all() -> impl Iterator<Item = Slot> {
        Day::ALL
            .into_iter()
            .flat_map(|day| Meal::ALL.into_iter().map(move |meal| Slot::new(day, meal)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_round_trip_names() {
        for day in Day::ALL {
            assert_eq!(Day::from_str(day.as_str()), Some(day));
        }
        assert_eq!(Day::from_str("Monday"), None);
        assert_eq!(Day::from_str("someday"), None);
    }

    #[test]
    fn test_from_weekday_is_sunday_first() {
        assert_eq!(Day::from_weekday(0), Day::Sunday);
        assert_eq!(Day::from_weekday(1), Day::Monday);
        assert_eq!(Day::from_weekday(6), Day::Saturday);
    }

    #[test]
    fn test_slots_in_export_order() {
        let slots: Vec<Slot> = Slot::all().collect();
        assert_eq!(slots.len(), 28);
        assert_eq!(slots[0], Slot::new(Day::Monday, Meal::Breakfast));
        assert_eq!(slots[3], Slot::new(Day::Monday, Meal::Snacks));
        assert_eq!(slots[4], Slot::new(Day::Tuesday, Meal::Breakfast));
        assert_eq!(slots[27], Slot::new(Day::Sunday, Meal::Snacks));
        let mut sorted = slots.clone();
        sorted.sort();
        assert_eq!(sorted, slots);
    }

    #[test]
    fn test_meal_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Meal::Snacks).unwrap(), "\"snacks\"");
        assert_eq!(serde_json::from_str::<Day>("\"sunday\"").unwrap(), Day::Sunday);
    }
}
