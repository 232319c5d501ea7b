//! Planner State
//!
//! `Planner` owns the plan, the detail records and the catalog. Commands go
//! through [`Planner::dispatch`], which only mutates memory and reports what
//! changed; [`Planner::persist`] is the one place that writes to storage.

mod command;


pub use command::Command;

use crate::advisory;
use crate::config::PlannerConfig;
use crate::csv::{export_plan, CsvFile};
use crate::domain::{
    Catalog, Day, FoodDetail, FoodDetails, FoodId, IdGen, MealPlan, PlacedFood, StoredDetails, StoredPlan,
};
use crate::error::PlannerResult;
use crate::storage::{load_json, save_json, KeyValueStore};

/// What a dispatched command changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Effects {
    pub plan: bool,
    pub details: bool,
    pub catalog: bool,
    /// Plan and details were wiped; their keys should be removed
    pub cleared: bool,
    pub download: Option<CsvFile>,
}

impl Effects {
    fn plan() -> Self {
        Self { plan: true, ..Self::default() }
    }

    fn details() -> Self {
        Self { details: true, ..Self::default() }
    }

    fn catalog() -> Self {
        Self { catalog: true, ..Self::default() }
    }

    /// Nothing to persist and nothing to download
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Did in-memory state change?
    pub fn changed(&self) -> bool {
        self.plan || self.details || self.catalog || self.cleared
    }
}

#[derive(Debug, Clone)]
pub struct Planner {
    plan: MealPlan,
    details: FoodDetails,
    catalog: Catalog,
    ids: IdGen,
    config: PlannerConfig,
}

impl Planner {
    /// Empty week with the built-in catalog
    pub fn new(config: PlannerConfig) -> Self {
        let mut ids = IdGen::default();
        let catalog = Catalog::builtin(&mut ids);
        Self {
            plan: MealPlan::new(),
            details: FoodDetails::new(),
            catalog,
            ids,
            config,
        }
    }

    /// Rebuild state from the store. Missing or malformed records load as
    /// their empty form; this never fails.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S, config: PlannerConfig) -> Self {
        Self::read(store, config).0
    }

    /// Load, then write back any record that loading had to repair (legacy
    /// positional detail keys, foods without ids) so storage holds only the
    /// id-keyed form. A failed write is logged and the session continues.
    pub fn open<S: KeyValueStore + ?Sized>(store: &mut S, config: PlannerConfig) -> Self {
        let (planner, repaired) = Self::read(&*store, config);
        if repaired.changed() {
            log::info!("rewriting repaired records (plan: {}, details: {})", repaired.plan, repaired.details);
            if let Err(e) = planner.persist(store, &repaired) {
                log::warn!("could not rewrite repaired records: {}", e);
            }
        }
        planner
    }

    /// Load state, reporting which stored records differ from their
    /// normalized form
    fn read<S: KeyValueStore + ?Sized>(store: &S, config: PlannerConfig) -> (Self, Effects) {
        let raw_plan: Option<StoredPlan> = load_json(store, &config.storage.plan);
        let raw_details: Option<StoredDetails> = load_json(store, &config.storage.details);
        let stored_catalog: Option<Catalog> = load_json(store, &config.storage.catalog);

        let stored_plan = raw_plan.clone().unwrap_or_default();
        let mut ids = IdGen::reserving(
            MealPlan::stored_ids(&stored_plan).chain(stored_catalog.iter().flat_map(Catalog::ids)),
        );

        let plan = MealPlan::from_stored(stored_plan, &mut ids);
        let catalog = stored_catalog.unwrap_or_else(|| Catalog::builtin(&mut ids));
        let details = FoodDetails::from_stored(raw_details.clone().unwrap_or_default(), &plan);

        let repaired = Effects {
            plan: raw_plan.is_some_and(|raw| raw != plan.to_stored()),
            details: raw_details.is_some_and(|raw| raw != details.to_stored()),
            ..Effects::default()
        };

        log::debug!(
            "loaded {} placed foods, {} detail records, {} categories",
            plan.len(),
            details.len(),
            catalog.categories().len()
        );

        (Self { plan, details, catalog, ids, config }, repaired)
    }

    pub fn plan(&self) -> &MealPlan {
        &self.plan
    }

    pub fn details(&self) -> &FoodDetails {
        &self.details
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Link and notes for a placed food, empty when none were saved
    pub fn detail(&self, id: FoodId) -> FoodDetail {
        self.details.get_or_default(id)
    }

    pub fn needs_fruit_veggie(&self, day: Day) -> bool {
        advisory::needs_fruit_veggie(self.plan.day_foods(day))
    }

    /// Apply a command in memory. Invalid input (blank names, unknown ids)
    /// is a silent no-op and yields empty effects.
    pub fn dispatch(&mut self, command: Command) -> Effects {
        log::debug!("dispatch {}", command.name());
        match command {
            Command::AddCategory { name } => {
                let before = self.catalog.categories().len();
                let resolved = self.catalog.add_category(&name).is_some();
                if resolved && self.catalog.categories().len() > before {
                    Effects::catalog()
                } else {
                    Effects::default()
                }
            }
            Command::DeleteCategory { id } => match self.catalog.delete_category(&id) {
                Some(_) => Effects::catalog(),
                None => {
                    log::debug!("category '{}' not deletable", id);
                    Effects::default()
                }
            },
            Command::AddCatalogFood { category, name } => {
                match self.catalog.add_food(&category, &name, &mut self.ids) {
                    Some(_) => Effects::catalog(),
                    None => Effects::default(),
                }
            }
            Command::RemoveCatalogFood { id } => match self.catalog.remove_food(id) {
                Some(_) => Effects::catalog(),
                None => Effects::default(),
            },
            Command::AddFood { slot, name, category } => {
                let name = name.trim();
                if name.is_empty() {
                    return Effects::default();
                }
                let id = self.ids.next_id();
                self.plan.push(slot, PlacedFood::new(id, name, category));
                Effects::plan()
            }
            Command::RemoveFood { id } => match self.plan.remove(id) {
                Some(_) => {
                    let details = self.details.remove(id).is_some();
                    Effects { plan: true, details, ..Effects::default() }
                }
                None => Effects::default(),
            },
            Command::MoveFood { id, to } => {
                if self.plan.move_to(id, to) {
                    Effects::plan()
                } else {
                    Effects::default()
                }
            }
            Command::SaveDetail { id, link, notes } => {
                if self.plan.get(id).is_none() {
                    log::warn!("ignoring details for unknown food {}", id);
                    return Effects::default();
                }
                self.details.save(id, FoodDetail::new(link, notes));
                Effects::details()
            }
            Command::ClearAll => {
                self.plan.clear();
                self.details.clear();
                Effects { cleared: true, ..Effects::default() }
            }
            Command::Export => {
                let contents = export_plan(&self.plan, &self.details);
                Effects {
                    download: Some(CsvFile::new(&self.config.export, contents)),
                    ..Effects::default()
                }
            }
        }
    }

    /// Write every record named by `effects`. The plan is written before the
    /// details; the two writes are not atomic with each other.
    pub fn persist<S: KeyValueStore + ?Sized>(&self, store: &mut S, effects: &Effects) -> PlannerResult<()> {
        let keys = &self.config.storage;
        if effects.cleared {
            store.remove(&keys.plan)?;
            store.remove(&keys.details)?;
        } else {
            if effects.plan {
                save_json(store, &keys.plan, &self.plan.to_stored())?;
            }
            if effects.details {
                save_json(store, &keys.details, &self.details.to_stored())?;
            }
        }
        if effects.catalog {
            save_json(store, &keys.catalog, &self.catalog)?;
        }
        Ok(())
    }

    /// Dispatch and persist in one step
    pub fn apply<S: KeyValueStore + ?Sized>(&mut self, store: &mut S, command: Command) -> PlannerResult<Effects> {
        let effects = self.dispatch(command);
        self.persist(store, &effects)?;
        Ok(effects)
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}
