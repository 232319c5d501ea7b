//! Meal Planner Frontend App
//!
//! Loads the planner, provides it as context and renders either the weekly
//! board or a single day's detail page.

use leptos::prelude::*;
use planner_core::PlannerConfig;

use crate::components::{CategoryPalette, DailyView, Toolbar, WeekBoard};
use crate::context::AppContext;
use crate::navigation::{self, Page};

#[component]
pub fn App() -> impl IntoView {
    let config = PlannerConfig::default();
    let default_day = config.default_day;

    let ctx = AppContext::load(config);
    provide_context(ctx);

    let page = navigation::current_page(default_day);
    web_sys::console::log_1(&format!("[APP] Rendering {:?}", page).into());

    match page {
        Page::Daily(day) => view! { <DailyView day=day /> }.into_any(),
        Page::Board => view! {
            <div class="app-layout">
                // Left: category palette
                <CategoryPalette />

                // Center: the week
                <main class="main-content">
                    <h1>"Weekly Meal Planner"</h1>
                    <Toolbar />
                    <WeekBoard />
                </main>
            </div>
        }
        .into_any(),
    }
}
