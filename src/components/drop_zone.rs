//! Meal Drop Zone Component
//!
//! One meal slot on the board: a drop target listing the foods placed in it.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mousedown, make_on_mouseleave, make_on_touchstart, make_on_zone_mouseenter};
use planner_core::{Command, Day, Meal, PlacedFood, Slot};

use crate::context::use_app_context;
use crate::models::{DragOrigin, DragPayload};

const DAY_ATTR: &str = "data-drop-day";
const MEAL_ATTR: &str = "data-drop-meal";

/// Map an element under the pointer to the slot whose drop zone contains it
pub fn slot_from_element(el: &web_sys::Element) -> Option<Slot> {
    let zone = el.closest(&format!("[{}]", DAY_ATTR)).ok()??;
    let day = Day::from_str(&zone.get_attribute(DAY_ATTR)?)?;
    let meal = Meal::from_str(&zone.get_attribute(MEAL_ATTR)?)?;
    Some(Slot::new(day, meal))
}

/// Drop target for one slot
#[component]
pub fn MealDropZone(slot: Slot) -> impl IntoView {
    let ctx = use_app_context();
    let dnd = ctx.dnd;

    let on_mouseenter = make_on_zone_mouseenter(dnd, slot);
    let on_mouseleave = make_on_mouseleave(dnd);
    let foods = Memo::new(move |_| ctx.planner.with(|p| p.plan().foods(slot).to_vec()));

    let zone_class = move || {
        let mut c = String::from("drop-zone");
        if dnd.is_dragging() { c.push_str(" drop-ready"); }
        if dnd.is_over(slot) { c.push_str(" drag-over"); }
        c
    };

    view! {
        <div
            class=zone_class
            data-drop-day=slot.day.as_str()
            data-drop-meal=slot.meal.as_str()
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <For
                each=move || foods.get()
                key=|food| food.id
                children=move |food| view! { <PlacedFoodChip food=food /> }
            />
        </div>
    }
}

/// A placed food: draggable to another slot, removable with ×
#[component]
fn PlacedFoodChip(food: PlacedFood) -> impl IntoView {
    let ctx = use_app_context();
    let id = food.id;
    let payload = DragPayload::from_placed(&food);

    let on_mousedown = make_on_mousedown(ctx.dnd, payload.clone());
    let on_touchstart = make_on_touchstart(ctx.dnd, payload);
    let is_dragging = move || ctx.dnd.is_dragging_where(|p| p.origin == DragOrigin::Placed(id));

    let category = food.category.clone();
    let color = Memo::new(move |_| ctx.planner.with(|p| p.catalog().color_of(&category)));

    view! {
        <div
            class=move || if is_dragging() { "dropped-food dragging" } else { "dropped-food" }
            data-category=food.category.clone()
            style=move || format!("background: {};", color.get())
            on:mousedown=on_mousedown
            on:touchstart=on_touchstart
        >
            <span class="dropped-food-name">{food.name.clone()}</span>
            <button
                class="remove-btn"
                title="Remove"
                on:click=move |ev| {
                    ev.stop_propagation();
                    ctx.dispatch(Command::RemoveFood { id });
                }
            >
                "×"
            </button>
        </div>
    }
}
