use super::{repository::CustomersRepository, utils::CustomersTab};
use crate::crud::CrudStore;
use crate::models::{Customer, CustomerGroup};
use leptos::*;

#[derive(Clone, Copy)]
pub struct CustomersViewModel {
    pub customers: CrudStore<Customer>,
    pub groups: CrudStore<CustomerGroup>,
    pub active_tab: RwSignal<CustomersTab>,
    /// Shared by both tabs.
    pub search: RwSignal<String>,
}

impl CustomersViewModel {
    pub fn new(repository: &CustomersRepository) -> Self {
        let search = create_rw_signal(String::new());
        Self {
            customers: CrudStore::with_search(repository.customers(), search),
            groups: CrudStore::with_search(repository.groups(), search),
            active_tab: create_rw_signal(CustomersTab::default()),
            search,
        }
    }

    /// Opens the create form of whichever tab is showing.
    pub fn open_create(&self) {
        match self.active_tab.get_untracked() {
            CustomersTab::Customers => self.customers.open_create(),
            CustomersTab::Groups => self.groups.open_create(),
        }
    }
}

pub fn use_customers_view_model() -> CustomersViewModel {
    CustomersViewModel::new(&CustomersRepository::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crud::PanelState;
    use crate::pages::customers::utils::group_badges;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn one_search_term_filters_both_tabs() {
        with_runtime(|| {
            let vm = use_customers_view_model();
            vm.search.set("vip".into());
            assert_eq!(vm.groups.filtered().get_untracked().len(), 1);
            assert!(vm.customers.filtered().get_untracked().is_empty());
        });
    }

    #[test]
    fn new_button_follows_the_active_tab() {
        with_runtime(|| {
            let vm = use_customers_view_model();
            vm.active_tab.set(CustomersTab::Groups);
            vm.open_create();
            assert!(vm.groups.modal_open().get_untracked());
            assert_eq!(vm.customers.state().get_untracked(), PanelState::Idle);
        });
    }

    #[test]
    fn deleting_a_group_leaves_members_untouched() {
        with_runtime(|| {
            let vm = use_customers_view_model();
            let before = vm.customers.items().get_untracked();
            assert_eq!(before[0].group_ids, vec!["1".to_string()]);

            vm.groups.request_delete("1");
            vm.groups.confirm_delete();

            let groups = vm.groups.items().get_untracked();
            assert!(groups.iter().all(|g| g.id != "1"));
            let after = vm.customers.items().get_untracked();
            assert_eq!(after, before);
            assert!(group_badges(&after[0].group_ids, &groups).is_empty());
        });
    }
}
