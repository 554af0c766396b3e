use super::{
    collection::Collection,
    entity::{Entity, Identity},
    field::{FieldError, FieldValue},
};
use crate::utils::time::today_string;
use leptos::*;
use log::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMode {
    Create,
    Edit(String),
}

/// `Idle -> ModalOpen -> Idle` on submit or cancel,
/// `Idle -> ConfirmingDelete -> Idle` on confirm or cancel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Idle,
    ModalOpen(ModalMode),
    ConfirmingDelete(String),
}

impl PanelState {
    pub fn is_modal_open(&self) -> bool {
        matches!(self, PanelState::ModalOpen(_))
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, PanelState::ModalOpen(ModalMode::Edit(_)))
    }

    pub fn pending_delete(&self) -> Option<&str> {
        match self {
            PanelState::ConfirmingDelete(id) => Some(id),
            _ => None,
        }
    }
}

/// Reactive create/edit/delete/search store for one entity type.
pub struct CrudStore<E: Entity> {
    collection: RwSignal<Collection<E>>,
    draft: RwSignal<E>,
    state: RwSignal<PanelState>,
    search: RwSignal<String>,
}

impl<E: Entity> Clone for CrudStore<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Entity> Copy for CrudStore<E> {}

impl<E: Entity> CrudStore<E> {
    pub fn new(seed: Vec<E>) -> Self {
        Self::with_search(seed, create_rw_signal(String::new()))
    }

    /// Store filtered by a search term shared with other stores of the panel.
    pub fn with_search(seed: Vec<E>, search: RwSignal<String>) -> Self {
        Self {
            collection: create_rw_signal(Collection::new(seed)),
            draft: create_rw_signal(E::default()),
            state: create_rw_signal(PanelState::Idle),
            search,
        }
    }

    pub fn items(&self) -> Signal<Vec<E>> {
        let collection = self.collection;
        Signal::derive(move || collection.with(|c| c.items().to_vec()))
    }

    /// Records matching the current search term, in list order.
    pub fn filtered(&self) -> Signal<Vec<E>> {
        let collection = self.collection;
        let search = self.search;
        Signal::derive(move || {
            let term = search.get();
            collection.with(|c| c.search(&term))
        })
    }

    pub fn len(&self) -> usize {
        self.collection.with_untracked(|c| c.len())
    }

    pub fn get(&self, id: &str) -> Option<E> {
        self.collection.with_untracked(|c| c.get(id).cloned())
    }

    pub fn search(&self) -> RwSignal<String> {
        self.search
    }

    pub fn draft(&self) -> ReadSignal<E> {
        self.draft.read_only()
    }

    pub fn state(&self) -> ReadSignal<PanelState> {
        self.state.read_only()
    }

    pub fn modal_open(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(PanelState::is_modal_open))
    }

    pub fn editing(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(PanelState::is_editing))
    }

    pub fn confirming_delete(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.pending_delete().is_some()))
    }

    fn is_idle(&self) -> bool {
        self.state.with_untracked(|s| *s == PanelState::Idle)
    }

    pub fn open_create(&self) {
        if !self.is_idle() {
            debug!("{}: ignoring create request while busy", E::KIND);
            return;
        }
        self.draft.set(E::default());
        self.state.set(PanelState::ModalOpen(ModalMode::Create));
    }

    pub fn open_edit(&self, entity: &E) {
        if !self.is_idle() {
            debug!("{}: ignoring edit request while busy", E::KIND);
            return;
        }
        self.draft.set(entity.clone());
        self.state
            .set(PanelState::ModalOpen(ModalMode::Edit(entity.id().to_string())));
    }

    /// Replaces one leaf of the draft. The draft is left as it was on error.
    pub fn update_field(&self, field: &E::Field, value: FieldValue) -> Result<(), FieldError> {
        let next = self.draft.with_untracked(|draft| draft.with_field(field, value));
        match next {
            Ok(next) => {
                self.draft.set(next);
                Ok(())
            }
            Err(err) => {
                warn!("{}: {}", E::KIND, err);
                Err(err)
            }
        }
    }

    /// Reactive projection of the draft, for binding form controls.
    pub fn select<T: 'static>(&self, project: impl Fn(&E) -> T + 'static) -> Signal<T> {
        let draft = self.draft;
        Signal::derive(move || draft.with(|d| project(d)))
    }

    /// Callback for a form control bound to `field`. Rejected values are
    /// logged and dropped.
    pub fn setter(&self, field: E::Field) -> Callback<FieldValue> {
        let store = *self;
        Callback::new(move |value: FieldValue| {
            let _ = store.update_field(&field, value);
        })
    }

    pub fn update_path(&self, path: &str, value: FieldValue) -> Result<(), FieldError> {
        let field = path.parse::<E::Field>().map_err(|err| {
            warn!("{}: {}", E::KIND, err);
            err
        })?;
        self.update_field(&field, value)
    }

    /// Applies the draft (append in create mode, in-place replacement in edit
    /// mode), then closes the modal. Returns the id of the affected record.
    pub fn submit(&self) -> Option<String> {
        let mode = match self.state.get_untracked() {
            PanelState::ModalOpen(mode) => mode,
            _ => {
                debug!("{}: submit without an open form", E::KIND);
                return None;
            }
        };
        let mut draft = self.draft.get_untracked();
        draft.fill_blanks(&today_string());
        let affected = match mode {
            ModalMode::Create => {
                let mut identity = None;
                self.collection.update(|c| {
                    identity = Some(c.create(draft, Identity::fresh));
                });
                let id = identity.map(|identity| identity.id);
                if let Some(id) = &id {
                    info!("{}: created {}", E::KIND, id);
                }
                id
            }
            ModalMode::Edit(id) => {
                let mut replaced = false;
                self.collection.update(|c| replaced = c.replace(&id, draft));
                if replaced {
                    info!("{}: updated {}", E::KIND, id);
                    Some(id)
                } else {
                    warn!("{}: {} vanished before the edit was saved", E::KIND, id);
                    None
                }
            }
        };
        self.close();
        affected
    }

    pub fn cancel(&self) {
        if self.state.with_untracked(PanelState::is_modal_open) {
            self.close();
        }
    }

    fn close(&self) {
        self.state.set(PanelState::Idle);
        self.draft.set(E::default());
    }

    pub fn request_delete(&self, id: &str) {
        if !self.is_idle() {
            debug!("{}: ignoring delete request while busy", E::KIND);
            return;
        }
        self.state.set(PanelState::ConfirmingDelete(id.to_string()));
    }

    /// Removes the record awaiting confirmation. An unknown id is a no-op.
    pub fn confirm_delete(&self) -> Option<E> {
        let id = self
            .state
            .with_untracked(|s| s.pending_delete().map(str::to_string))?;
        let mut removed = None;
        self.collection.update(|c| removed = c.remove(&id));
        match &removed {
            Some(_) => info!("{}: deleted {}", E::KIND, id),
            None => debug!("{}: {} already gone", E::KIND, id),
        }
        self.state.set(PanelState::Idle);
        removed
    }

    pub fn cancel_delete(&self) {
        if self.state.with_untracked(|s| s.pending_delete().is_some()) {
            self.state.set(PanelState::Idle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Customer, CustomerField, Truck, TruckField, TruckStatus};
    use crate::pages::{customers::repository::CustomersRepository, logistics::repository::LogisticsRepository};
    use crate::test_support::ssr::with_runtime;

    fn fill_customer(store: &CrudStore<Customer>) {
        for (path, value) in [
            ("first_name", "Ana"),
            ("last_name", "Souza"),
            ("email", "ana@x.com"),
            ("phone", "119999"),
            ("birth_date", "1990-01-01"),
        ] {
            store.update_path(path, value.into()).unwrap();
        }
    }

    #[test]
    fn creating_a_customer_appends_a_stamped_record() {
        with_runtime(|| {
            let store = CrudStore::new(CustomersRepository::new().customers());
            let before = store.len();
            store.open_create();
            fill_customer(&store);
            let id = store.submit().expect("created id");

            assert_eq!(store.len(), before + 1);
            let created = store.get(&id).unwrap();
            assert!(!created.id.is_empty());
            assert_eq!(created.created_at, today_string());
            assert_eq!(created.first_name, "Ana");
            assert_eq!(created.address.country, "Brasil");
            assert_eq!(store.state().get_untracked(), PanelState::Idle);
            assert_eq!(store.draft().get_untracked(), Customer::default());
        });
    }

    #[test]
    fn duplicate_submissions_get_distinct_ids() {
        with_runtime(|| {
            let store = CrudStore::new(Vec::<Customer>::new());
            store.open_create();
            fill_customer(&store);
            let first = store.submit().unwrap();
            store.open_create();
            fill_customer(&store);
            let second = store.submit().unwrap();
            assert_ne!(first, second);
            assert_eq!(store.len(), 2);
        });
    }

    #[test]
    fn editing_truck_status_keeps_everything_else() {
        with_runtime(|| {
            let store = CrudStore::new(LogisticsRepository::new().trucks());
            let truck = store.get("1").unwrap();
            assert_eq!(truck.status, TruckStatus::Available);

            store.open_edit(&truck);
            store
                .update_field(&TruckField::Status, "maintenance".into())
                .unwrap();
            assert_eq!(store.submit().as_deref(), Some("1"));

            let trucks = store.items().get_untracked();
            let matching: Vec<&Truck> = trucks.iter().filter(|t| t.id == "1").collect();
            assert_eq!(matching.len(), 1);
            assert_eq!(matching[0].status, TruckStatus::Maintenance);
            assert_eq!(matching[0].license_plate, truck.license_plate);
        });
    }

    #[test]
    fn clearing_last_maintenance_on_edit_falls_back_to_today() {
        with_runtime(|| {
            let store = CrudStore::new(LogisticsRepository::new().trucks());
            let truck = store.get("1").unwrap();
            assert_eq!(truck.last_maintenance, "2024-02-15");

            store.open_edit(&truck);
            store
                .update_field(&TruckField::LastMaintenance, "".into())
                .unwrap();
            store.submit();
            let edited = store.get("1").unwrap();
            assert_eq!(edited.last_maintenance, today_string());
            assert_eq!(edited.next_maintenance, truck.next_maintenance);
        });
    }

    #[test]
    fn resubmitting_an_unchanged_edit_is_a_no_op() {
        with_runtime(|| {
            let store = CrudStore::new(CustomersRepository::new().customers());
            store.open_create();
            fill_customer(&store);
            store.submit();
            let before = store.items().get_untracked();

            store.open_edit(&before[0]);
            store.submit();
            assert_eq!(store.items().get_untracked(), before);
        });
    }

    #[test]
    fn cancel_discards_the_draft() {
        with_runtime(|| {
            let store = CrudStore::new(CustomersRepository::new().customers());
            let before = store.items().get_untracked();
            let customer = before[0].clone();
            store.open_edit(&customer);
            store
                .update_field(&CustomerField::FirstName, "Outro".into())
                .unwrap();
            store.cancel();
            assert_eq!(store.items().get_untracked(), before);
            assert_eq!(store.draft().get_untracked(), Customer::default());
            assert!(store.submit().is_none());
        });
    }

    #[test]
    fn delete_requires_confirmation() {
        with_runtime(|| {
            let store = CrudStore::new(CustomersRepository::new().groups());
            let before = store.len();

            store.request_delete("1");
            assert!(store.confirming_delete().get_untracked());
            store.cancel_delete();
            assert_eq!(store.len(), before);

            store.request_delete("missing");
            assert!(store.confirm_delete().is_none());
            assert_eq!(store.len(), before);

            store.request_delete("1");
            assert!(store.confirm_delete().is_some());
            assert_eq!(store.len(), before - 1);
            assert!(store.get("1").is_none());
            assert_eq!(store.state().get_untracked(), PanelState::Idle);
        });
    }

    #[test]
    fn transitions_out_of_order_are_ignored() {
        with_runtime(|| {
            let store = CrudStore::new(CustomersRepository::new().groups());
            store.request_delete("1");
            store.open_create();
            assert!(!store.modal_open().get_untracked());

            store.cancel_delete();
            store.open_create();
            store.request_delete("1");
            assert!(store.modal_open().get_untracked());
            assert!(store.confirm_delete().is_none());
        });
    }

    #[test]
    fn invalid_updates_leave_the_draft_alone() {
        with_runtime(|| {
            let store = CrudStore::new(LogisticsRepository::new().trucks());
            store.open_create();
            store.update_path("driver.name", "Carlos".into()).unwrap();
            let before = store.draft().get_untracked();

            assert!(store.update_path("driver.shoe_size", "42".into()).is_err());
            assert!(store.update_path("mileage", "muito".into()).is_err());
            assert!(store.update_path("status", "flying".into()).is_err());
            assert_eq!(store.draft().get_untracked(), before);
        });
    }

    #[test]
    fn search_filters_without_touching_the_list() {
        with_runtime(|| {
            let store = CrudStore::new(CustomersRepository::new().customers());
            store.search().set("JOÃO".into());
            let upper = store.filtered().get_untracked();
            store.search().set("joão".into());
            let lower = store.filtered().get_untracked();
            assert_eq!(upper, lower);
            assert_eq!(upper.len(), 1);

            store.search().set("ninguém".into());
            assert!(store.filtered().get_untracked().is_empty());
            assert_eq!(store.len(), 1);
        });
    }
}
