//! Category Palette Component
//!
//! Left sidebar: food categories with draggable foods, per-category add
//! forms, and the add-category form.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mousedown, make_on_touchstart};
use planner_core::{CatalogFood, Category, Command};
use web_sys::SubmitEvent;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::models::{DragOrigin, DragPayload};

/// Sidebar listing every category
#[component]
pub fn CategoryPalette() -> impl IntoView {
    let ctx = use_app_context();
    let categories = Memo::new(move |_| ctx.planner.with(|p| p.catalog().categories().to_vec()));

    view! {
        <aside class="food-palette">
            <div class="palette-header">"Food Categories"</div>
            <div class="food-categories" id="foodCategories">
                <For
                    each=move || categories.get()
                    // Items are part of the key so a card re-renders when its foods change
                    key=|category| {
                        (
                            category.id.clone(),
                            category.items.iter().map(|food| food.id).collect::<Vec<_>>(),
                        )
                    }
                    children=move |category| view! { <CategoryCard category=category /> }
                />
            </div>
            <AddCategoryForm />
        </aside>
    }
}

/// One category: header, add-food form and its draggable foods
#[component]
fn CategoryCard(category: Category) -> impl IntoView {
    let ctx = use_app_context();
    let (new_food, set_new_food) = signal(String::new());
    let category_id = category.id.clone();

    let add_food = {
        let category_id = category_id.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let name = new_food.get_untracked();
            if name.trim().is_empty() {
                return;
            }
            ctx.dispatch(Command::AddCatalogFood { category: category_id.clone(), name });
            set_new_food.set(String::new());
        }
    };

    let delete_id = category_id.clone();
    let on_delete = Callback::new(move |_: ()| {
        let id = delete_id.clone();
        // A drag carrying this category must not land after it is gone
        ctx.dnd.cancel_if(|payload| payload.is_from_category(&id));
        web_sys::console::log_1(&format!("[PALETTE] Deleting category {}", id).into());
        ctx.dispatch(Command::DeleteCategory { id });
    });

    let foods = category.items.clone();
    let food_category = category_id.clone();

    view! {
        <div class="category" data-category=category_id.clone() style=format!("--category-color: {};", category.color)>
            <div class="category-header">
                <span class="category-color-dot" style=format!("background-color: {};", category.color)></span>
                <h3>{category.name.clone()}</h3>
                {(!category.builtin).then(|| view! {
                    <DeleteConfirmButton
                        button_class="delete-category-btn"
                        prompt="Delete category?"
                        on_confirm=on_delete
                    />
                })}
            </div>
            <form class="add-food-section" on:submit=add_food>
                <input
                    type="text"
                    class="add-food-input"
                    placeholder="Add food item"
                    prop:value=move || new_food.get()
                    on:input=move |ev| set_new_food.set(event_target_value(&ev))
                />
                <button type="submit" class="add-food-btn">"+"</button>
            </form>
            <div class="food-items">
                {foods
                    .into_iter()
                    .map(|food| view! { <PaletteFood food=food category=food_category.clone() /> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// A draggable palette entry
#[component]
fn PaletteFood(food: CatalogFood, category: String) -> impl IntoView {
    let ctx = use_app_context();
    let id = food.id;
    let payload = DragPayload::from_palette(&food, &category);

    let on_mousedown = make_on_mousedown(ctx.dnd, payload.clone());
    let on_touchstart = make_on_touchstart(ctx.dnd, payload);
    let is_dragging = move || ctx.dnd.is_dragging_where(|p| p.origin == DragOrigin::Palette(id));

    view! {
        <div
            class=move || if is_dragging() { "food-item dragging" } else { "food-item" }
            data-category=category
            on:mousedown=on_mousedown
            on:touchstart=on_touchstart
        >
            <span class="food-item-name">{food.name}</span>
            <button
                class="remove-food-btn"
                title="Remove from palette"
                on:click=move |ev| {
                    ev.stop_propagation();
                    ctx.dispatch(Command::RemoveCatalogFood { id });
                }
            >
                "×"
            </button>
        </div>
    }
}

/// Form for adding a user category
#[component]
fn AddCategoryForm() -> impl IntoView {
    let ctx = use_app_context();
    let (new_name, set_new_name) = signal(String::new());

    let add_category = move |ev: SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get_untracked();
        if name.trim().is_empty() {
            return;
        }
        ctx.dispatch(Command::AddCategory { name });
        set_new_name.set(String::new());
    };

    view! {
        <form class="add-category-section" on:submit=add_category>
            <input
                type="text"
                id="newCategoryInput"
                placeholder="New category name"
                prop:value=move || new_name.get()
                on:input=move |ev| set_new_name.set(event_target_value(&ev))
            />
            <button type="submit" id="addCategoryBtn">"Add Category"</button>
        </form>
    }
}
