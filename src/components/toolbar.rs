//! Toolbar Component
//!
//! Board-wide actions: CSV export and clearing the whole week.

use leptos::prelude::*;
use planner_core::Command;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_app_context();
    let planned = Memo::new(move |_| ctx.planner.with(|p| p.plan().len()));

    let clear_all = Callback::new(move |_: ()| {
        ctx.dispatch(Command::ClearAll);
        if let Some(win) = web_sys::window() {
            let _ = win.alert_with_message("All meal plans have been cleared.");
        }
    });

    view! {
        <div class="toolbar">
            <button id="exportBtn" class="export-btn" on:click=move |_| ctx.dispatch(Command::Export)>
                "Export CSV"
            </button>
            <DeleteConfirmButton
                button_class="clear-all-btn"
                label="Clear All"
                prompt="Clear all meal plans?"
                on_confirm=clear_all
            />
            <span class="plan-count">{move || format!("{} foods planned", planned.get())}</span>
        </div>
    }
}
