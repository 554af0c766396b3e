use crate::state::navigation::Page;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::OnceLock;

pub const DEFAULT_COMPANY_NAME: &str = "Estoka.AI";

/// Optional deployment overrides, read from `window.__ESTOKA_CONFIG`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub log_level: Option<String>,
    pub initial_page: Option<String>,
    pub company_name: Option<String>,
}

impl RuntimeConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level
            .as_deref()
            .and_then(|level| log::Level::from_str(level.trim()).ok())
            .unwrap_or(log::Level::Info)
    }

    /// Panel shown on start; unknown paths fall back to the dashboard.
    pub fn initial_page(&self) -> Page {
        self.initial_page
            .as_deref()
            .map(Page::from_path)
            .unwrap_or_default()
    }

    pub fn company_name(&self) -> &str {
        self.company_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_COMPANY_NAME)
    }
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn read_window_config() -> Option<RuntimeConfig> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &"__ESTOKA_CONFIG".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let raw = js_sys::JSON::stringify(&any).ok()?.as_string()?;
    match RuntimeConfig::from_json(&raw) {
        Ok(cfg) => Some(cfg),
        Err(err) => {
            log::warn!("ignoring malformed __ESTOKA_CONFIG: {}", err);
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_window_config() -> Option<RuntimeConfig> {
    None
}

pub fn current() -> &'static RuntimeConfig {
    RUNTIME_CONFIG.get_or_init(|| read_window_config().unwrap_or_default())
}

pub fn init() -> &'static RuntimeConfig {
    current()
}
