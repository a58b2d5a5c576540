#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

const DEFAULT_CHECK_INTERVAL_MS: u32 = 10_000;
const MIN_CHECK_INTERVAL_MS: u32 = 1_000;

/// Runtime configuration injected by the hosting page through `window.ENV`
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Suggested backend address shown on the connect page
    pub api_url: Option<String>,
    /// Delay between connection checks
    pub connection_check_interval_ms: u32,
    /// Release build; verbose diagnostics are off
    pub production: bool,
}

impl AppConfig {
    /// Load from `window.ENV`, falling back to defaults
    pub fn load() -> Self {
        Self::from_lookup(read_env)
    }

    /// Build from a key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup("API_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let connection_check_interval_ms = lookup("CONNECTION_CHECK_INTERVAL_MS")
            .and_then(|s| s.trim().parse().ok())
            .map(|ms: u32| ms.max(MIN_CHECK_INTERVAL_MS))
            .unwrap_or(DEFAULT_CHECK_INTERVAL_MS);

        Self {
            api_url,
            connection_check_interval_ms,
            production: !cfg!(debug_assertions),
        }
    }

    /// Most verbose log level for this build
    pub fn log_level(&self) -> log::Level {
        if self.production {
            log::Level::Warn
        } else {
            log::Level::Debug
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Read a string property of window.ENV
fn read_env(key: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let env = js_sys::Reflect::get(&window, &JsValue::from_str("ENV")).ok()?;
        if env.is_undefined() {
            return None;
        }
        let value = js_sys::Reflect::get(&env, &JsValue::from_str(key)).ok()?;
        // Numbers are accepted as well as strings
        value
            .as_string()
            .or_else(|| value.as_f64().map(|n| n.to_string()))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
        None
    }
}
