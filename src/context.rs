//! Application Context
//!
//! Shared state provided via Leptos Context API. Every state change goes
//! through [`AppContext::dispatch`], which updates the planner, persists what
//! changed and performs any download.

use leptos::prelude::*;
use leptos_dragdrop::create_dnd_signals;
use planner_core::{Command, Effects, Planner, PlannerConfig};

use crate::download;
use crate::models::PlannerDnd;
use crate::storage::LocalStore;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Planner state. Read it freely; write only via `dispatch`.
    pub planner: RwSignal<Planner>,
    /// Board drag-and-drop state
    pub dnd: PlannerDnd,
}

impl AppContext {
    /// Load the planner from browser storage, rewriting repaired records
    pub fn load(config: PlannerConfig) -> Self {
        let planner = match LocalStore::open() {
            Some(mut store) => Planner::open(&mut store, config),
            None => {
                web_sys::console::warn_1(&"[STORE] localStorage unavailable; changes will not be kept".into());
                Planner::new(config)
            }
        };
        Self {
            planner: RwSignal::new(planner),
            dnd: create_dnd_signals(),
        }
    }

    /// Apply a command. Subscribers are only notified when state changed.
    pub fn dispatch(&self, command: Command) {
        let name = command.name();
        let Some(effects) = self.planner.try_update_untracked(|planner| planner.dispatch(command)) else {
            return;
        };
        if effects.is_empty() {
            web_sys::console::log_1(&format!("[APP] {} changed nothing", name).into());
            return;
        }
        if effects.changed() {
            self.planner.notify();
            self.persist(&effects);
        }
        if let Some(file) = &effects.download {
            if let Err(e) = download::offer(file) {
                web_sys::console::error_1(&format!("[EXPORT] Download failed: {:?}", e).into());
            }
        }
    }

    fn persist(&self, effects: &Effects) {
        let Some(mut store) = LocalStore::open() else { return };
        let result = self.planner.with_untracked(|planner| planner.persist(&mut store, effects));
        if let Err(e) = result {
            web_sys::console::error_1(&format!("[STORE] {}", e).into());
        }
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
