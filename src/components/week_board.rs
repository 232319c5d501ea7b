//! Week Board Component
//!
//! Seven day cards, each with four meal drop zones. Owns the global drag
//! listeners that turn a drop into a planner command.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_dragdrop::{bind_global_mouseup, bind_global_touch};
use planner_core::{Day, Meal, Slot};

use crate::components::{slot_from_element, MealDropZone, MealDropZoneProps};
use crate::context::{use_app_context, AppContext};
use crate::models::DragPayload;
use crate::navigation;

fn drop_into(ctx: AppContext, payload: DragPayload, slot: Slot) {
    web_sys::console::log_1(
        &format!("[DND] Drop {} on {} {}", payload.name, slot.day.as_str(), slot.meal.as_str()).into(),
    );
    ctx.dispatch(payload.into_command(slot));
}

#[component]
pub fn WeekBoard() -> impl IntoView {
    let ctx = use_app_context();
    let (day_order, set_day_order) = signal(Day::ALL.to_vec());
    let today = navigation::today();

    bind_global_mouseup(ctx.dnd, move |payload, slot| drop_into(ctx, payload, slot));
    bind_global_touch(ctx.dnd, slot_from_element, move |payload, slot| drop_into(ctx, payload, slot));

    let bring_to_top = Callback::new(move |day: Day| {
        set_day_order.update(|order| {
            order.retain(|d| *d != day);
            order.insert(0, day);
        });
    });

    view! {
        <div class="weekly-calendar">
            <For
                each=move || day_order.get()
                key=|day| *day
                children=move |day| view! {
                    <DayCard day=day is_today=day == today on_bring_to_top=bring_to_top />
                }
            />
        </div>
    }
}

#[component]
fn DayCard(day: Day, is_today: bool, on_bring_to_top: Callback<Day>) -> impl IntoView {
    let ctx = use_app_context();
    let card_ref = NodeRef::<leptos::html::Div>::new();
    let needs_produce = Memo::new(move |_| ctx.planner.with(|p| p.needs_fruit_veggie(day)));

    let card_class = move || {
        let mut c = String::from("day-card");
        if is_today { c.push_str(" today"); }
        if needs_produce.get() { c.push_str(" needs-fruit-veggie"); }
        c
    };

    let on_bring = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        on_bring_to_top.run(day);
        // The reorder is applied after this handler returns
        Timeout::new(0, move || {
            if let Some(card) = card_ref.get_untracked() {
                card.scroll_into_view();
            }
        })
        .forget();
    };

    view! {
        <div class=card_class data-day=day.as_str() node_ref=card_ref>
            <div class="day-header">
                <h2>{day.label()}</h2>
                <div class="day-actions">
                    <button class="bring-to-top-btn" title="Bring to top" on:click=on_bring>"⬆"</button>
                    <button
                        class="view-detail-btn"
                        title="View details"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            navigation::open_day_details(day);
                        }
                    >
                        "Details"
                    </button>
                </div>
            </div>
            {Meal::ALL
                .into_iter()
                .map(|meal| view! {
                    <div class="meal-section" data-meal=meal.as_str()>
                        <h4>{meal.label()}</h4>
                        {MealDropZone(MealDropZoneProps::builder().slot(Slot::new(day, meal)).build())}
                    </div>
                })
                .collect_view()}
            <Show when=move || needs_produce.get()>
                <div class="fruit-veggie-alert">"⚠️ Add fruit or veggie!"</div>
            </Show>
        </div>
    }
}
