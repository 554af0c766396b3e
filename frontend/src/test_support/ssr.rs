use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

#[cfg(not(target_arch = "wasm32"))]
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Text as the SSR renderer writes it into element bodies.
#[cfg(not(target_arch = "wasm32"))]
pub fn html_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
        .replace('/', "&#x2F;")
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn slashes_in_rendered_text_are_escaped() {
        let html = render_to_string(|| leptos::view! { <span>{"15/03/2024"}</span> });
        assert!(html.contains(&html_text("15/03/2024")));
        assert!(!html.contains("15/03/2024"));
        assert_eq!(html_text("a/b & c"), "a&#x2F;b &amp; c");
    }
}
