//! Daily View Component
//!
//! Detail page for one day: every placed food with its link and notes.

use leptos::prelude::*;
use planner_core::{Day, Meal, Slot};

use crate::components::FoodDetailForm;
use crate::context::use_app_context;
use crate::navigation;

#[component]
pub fn DailyView(day: Day) -> impl IntoView {
    view! {
        <div class="daily-view">
            <header class="daily-header">
                <a class="back-link" href=navigation::board_href()>"← Back to Week"</a>
                <h1 id="dayTitle">{format!("{} Meal Plan", day.label())}</h1>
            </header>
            {Meal::ALL
                .into_iter()
                .map(|meal| MealDetailSection(MealDetailSectionProps::builder().slot(Slot::new(day, meal)).build()))
                .collect_view()}
        </div>
    }
}

#[component]
fn MealDetailSection(slot: Slot) -> impl IntoView {
    let ctx = use_app_context();
    let foods = Memo::new(move |_| ctx.planner.with(|p| p.plan().foods(slot).to_vec()));

    view! {
        <section class="meal-detail-section">
            <h2>{slot.meal.label()}</h2>
            <div class="food-detail-list" id=format!("{}-list", slot.meal.as_str())>
                <Show
                    when=move || foods.with(|f| !f.is_empty())
                    fallback=|| view! { <p class="empty-message">"No food planned for this meal"</p> }
                >
                    <For
                        each=move || foods.get()
                        key=|food| food.id
                        children=|food| view! { <FoodDetailForm food=food /> }
                    />
                </Show>
            </div>
        </section>
    }
}
