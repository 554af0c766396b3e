use leptos::*;
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_class(&self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeState {
    pub theme: RwSignal<Theme>,
}

impl ThemeState {
    pub fn new() -> Self {
        Self {
            theme: create_rw_signal(Theme::default()),
        }
    }

    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        self.apply_to_dom();
    }

    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        debug!("theme -> {:?}", next);
        self.set_theme(next);
    }

    pub fn is_dark(&self) -> Signal<bool> {
        let theme = self.theme;
        Signal::derive(move || theme.get() == Theme::Dark)
    }

    #[cfg(target_arch = "wasm32")]
    fn apply_to_dom(&self) {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            let class_list = root.class_list();
            let _ = class_list.remove_1("dark");
            if self.theme.get_untracked() == Theme::Dark {
                let _ = class_list.add_1("dark");
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn apply_to_dom(&self) {}

    pub fn current(&self) -> ReadSignal<Theme> {
        self.theme.read_only()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_theme() -> Option<ThemeState> {
    use_context::<ThemeState>()
}

pub fn provide_theme() -> ThemeState {
    let state = ThemeState::new();
    provide_context(state);
    state.apply_to_dom();
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn toggle_flips_between_light_and_dark() {
        with_runtime(|| {
            let state = provide_theme();
            assert_eq!(state.current().get_untracked(), Theme::Light);
            state.toggle();
            assert!(state.is_dark().get_untracked());
            assert_eq!(state.current().get_untracked().as_class(), "dark");
            state.toggle();
            assert_eq!(state.current().get_untracked(), Theme::Light);
            assert!(use_theme().is_some());
        });
    }
}
