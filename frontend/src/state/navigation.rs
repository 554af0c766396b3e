use leptos::*;
use log::info;

/// One top-level panel, addressed by its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Inventory,
    Orders,
    Customers,
    Logistics,
    AiAssistant,
    Integrations,
    Marketing,
    Financial,
    Reports,
    Settings,
}

impl Page {
    /// Sidebar order.
    pub const ALL: [Page; 11] = [
        Page::Dashboard,
        Page::Inventory,
        Page::Orders,
        Page::Customers,
        Page::Logistics,
        Page::AiAssistant,
        Page::Integrations,
        Page::Marketing,
        Page::Financial,
        Page::Reports,
        Page::Settings,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Dashboard => "/",
            Page::Inventory => "/inventory",
            Page::Orders => "/orders",
            Page::Customers => "/customers",
            Page::Logistics => "/logistics",
            Page::AiAssistant => "/ai-assistant",
            Page::Integrations => "/integrations",
            Page::Marketing => "/marketing",
            Page::Financial => "/financas",
            Page::Reports => "/reports",
            Page::Settings => "/settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Inventory => "Estoque",
            Page::Orders => "Pedidos",
            Page::Customers => "Clientes",
            Page::Logistics => "Logística",
            Page::AiAssistant => "Assistente IA",
            Page::Integrations => "Integrações",
            Page::Marketing => "Marketing",
            Page::Financial => "Finanças",
            Page::Reports => "Relatórios",
            Page::Settings => "Configurações",
        }
    }

    /// Font Awesome class.
    pub fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "fas fa-chart-pie",
            Page::Inventory => "fas fa-box",
            Page::Orders => "fas fa-shopping-cart",
            Page::Customers => "fas fa-users",
            Page::Logistics => "fas fa-truck",
            Page::AiAssistant => "fas fa-robot",
            Page::Integrations => "fas fa-link",
            Page::Marketing => "fas fa-bullhorn",
            Page::Financial => "fas fa-wallet",
            Page::Reports => "fas fa-chart-bar",
            Page::Settings => "fas fa-cog",
        }
    }

    /// Unknown paths resolve to the dashboard.
    pub fn from_path(path: &str) -> Page {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        Page::ALL
            .into_iter()
            .find(|page| page.path() == normalized)
            .unwrap_or_default()
    }
}

/// Which panel the shell renders.
#[derive(Clone, Copy)]
pub struct NavigationState {
    current: RwSignal<Page>,
}

impl NavigationState {
    pub fn new(initial: Page) -> Self {
        Self {
            current: create_rw_signal(initial),
        }
    }

    pub fn current(&self) -> ReadSignal<Page> {
        self.current.read_only()
    }

    pub fn navigate(&self, page: Page) {
        if self.current.get_untracked() != page {
            info!("navigate: {} -> {}", self.current.get_untracked().path(), page.path());
            self.current.set(page);
        }
    }

    pub fn navigate_to_path(&self, path: &str) {
        self.navigate(Page::from_path(path));
    }
}

pub fn provide_navigation(initial: Page) -> NavigationState {
    let state = NavigationState::new(initial);
    provide_context(state);
    state
}

pub fn use_navigation() -> Option<NavigationState> {
    use_context::<NavigationState>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;
    use std::collections::HashSet;

    #[test]
    fn paths_are_unique_and_round_trip() {
        let unique: HashSet<&str> = Page::ALL.iter().map(Page::path).collect();
        assert_eq!(unique.len(), Page::ALL.len());
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), page);
        }
    }

    #[test]
    fn unknown_paths_fall_back_to_dashboard() {
        assert_eq!(Page::from_path("/nowhere"), Page::Dashboard);
        assert_eq!(Page::from_path(""), Page::Dashboard);
        assert_eq!(Page::from_path("/inventory/"), Page::Inventory);
        assert_eq!(Page::from_path("/financas"), Page::Financial);
    }

    #[test]
    fn navigate_switches_current_page() {
        with_runtime(|| {
            let nav = provide_navigation(Page::Dashboard);
            nav.navigate_to_path("/customers");
            assert_eq!(nav.current().get_untracked(), Page::Customers);
            nav.navigate_to_path("/bogus");
            assert_eq!(nav.current().get_untracked(), Page::Dashboard);
            assert!(use_navigation().is_some());
        });
    }
}
