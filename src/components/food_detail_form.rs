//! Food Detail Form Component
//!
//! Shopping link and markdown notes for one placed food, with a live
//! notes preview. Edits stay local until Save.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use planner_core::{Command, PlacedFood};
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::markdown::{link_href, render_notes};

/// How long the "Saved" confirmation stays visible
const SAVED_FLASH_MS: u32 = 1500;

#[component]
pub fn FoodDetailForm(food: PlacedFood) -> impl IntoView {
    let ctx = use_app_context();
    let id = food.id;
    let saved = Memo::new(move |_| ctx.planner.with(|p| p.detail(id)));

    let initial = saved.get_untracked();
    let (link, set_link) = signal(initial.link);
    let (notes, set_notes) = signal(initial.notes);
    let (just_saved, set_just_saved) = signal(false);

    let save = move |_: web_sys::MouseEvent| {
        ctx.dispatch(Command::SaveDetail {
            id,
            link: link.get_untracked(),
            notes: notes.get_untracked(),
        });
        set_just_saved.set(true);
        Timeout::new(SAVED_FLASH_MS, move || set_just_saved.set(false)).forget();
    };

    let on_notes_input = move |ev: web_sys::Event| {
        if let Some(area) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok()) {
            set_notes.set(area.value());
        }
    };

    view! {
        <div class="food-item-detail" data-food-id=id.to_string()>
            <div class="food-name">
                {food.name.clone()}
                <span class="food-category">{food.category.clone()}</span>
            </div>
            <div class="food-link-section">
                <label>"Buy Online:"</label>
                <input
                    type="text"
                    class="food-link"
                    placeholder="Enter shopping link"
                    prop:value=move || link.get()
                    on:input=move |ev| set_link.set(event_target_value(&ev))
                />
                {move || saved.with(|d| link_href(&d.link)).map(|href| view! {
                    <a class="food-link-open" href=href target="_blank" rel="noopener noreferrer">"Open Link →"</a>
                })}
            </div>
            <div class="food-notes-section">
                <label>"Notes/Comments:"</label>
                <textarea
                    class="food-notes"
                    placeholder="Add notes or comments..."
                    prop:value=move || notes.get()
                    on:input=on_notes_input
                ></textarea>
                <Show when=move || notes.with(|n| !n.trim().is_empty())>
                    <div class="notes-preview" inner_html=move || render_notes(&notes.get())></div>
                </Show>
            </div>
            <button class="save-btn" on:click=save>
                {move || if just_saved.get() { "Saved ✓" } else { "Save" }}
            </button>
        </div>
    }
}
