pub mod ssr;

pub mod helpers {
    use crate::state::{
        navigation::{provide_navigation, NavigationState, Page},
        theme::{provide_theme, ThemeState},
    };

    /// Provides the application-state contexts the shell normally sets up.
    pub fn provide_shell(initial: Page) -> (NavigationState, ThemeState) {
        (provide_navigation(initial), provide_theme())
    }
}
