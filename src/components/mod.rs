//! UI Components
//!
//! Leptos components for the weekly board and the daily detail page.

mod category_palette;
mod daily_view;
mod delete_confirm_button;
mod drop_zone;
mod food_detail_form;
mod toolbar;
mod week_board;

pub use category_palette::CategoryPalette;
pub use daily_view::DailyView;
pub use delete_confirm_button::DeleteConfirmButton;
pub use drop_zone::{slot_from_element, MealDropZone, MealDropZoneProps};
pub use food_detail_form::FoodDetailForm;
pub use toolbar::Toolbar;
pub use week_board::WeekBoard;
