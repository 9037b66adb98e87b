//! Build-time client configuration with an optional runtime override read from
//! `window.GEOATTEND_CONFIG`, so a static deployment can point at another API
//! or identity client without rebuilding. Values are public; never put secrets here.

use attendance_core::{LocationPolicy, timer::DEFAULT_WINDOW_SECONDS};

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Empty means same origin.
    pub api_base_url: String,
    pub google_client_id: String,
    pub window_seconds: u32,
    pub location_policy: LocationPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            google_client_id: String::new(),
            window_seconds: DEFAULT_WINDOW_SECONDS,
            location_policy: LocationPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self::default();

        let build_time = RuntimeConfig {
            api_base_url: option_env!("GEOATTEND_API_BASE_URL").and_then(normalize_runtime_value),
            google_client_id: option_env!("GEOATTEND_GOOGLE_CLIENT_ID")
                .and_then(normalize_runtime_value),
            window_seconds: option_env!("GEOATTEND_WINDOW_SECONDS")
                .and_then(normalize_runtime_value),
            location_policy: option_env!("GEOATTEND_LOCATION_POLICY")
                .and_then(normalize_runtime_value),
        };
        apply_runtime_overrides(&mut config, build_time);

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    google_client_id: Option<String>,
    window_seconds: Option<String>,
    location_policy: Option<String>,
}

/// Present values win. Numbers and policies that fail to parse are ignored.
fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.google_client_id {
        config.google_client_id = value;
    }
    if let Some(seconds) = runtime
        .window_seconds
        .and_then(|value| value.parse::<u32>().ok())
        .filter(|seconds| *seconds > 0)
    {
        config.window_seconds = seconds;
    }
    if let Some(policy) = runtime
        .location_policy
        .and_then(|value| value.parse::<LocationPolicy>().ok())
    {
        config.location_policy = policy;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("GEOATTEND_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        google_client_id: read_runtime_value(&object, "google_client_id"),
        window_seconds: read_runtime_value(&object, "window_seconds"),
        location_policy: read_runtime_value(&object, "location_policy"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

/// Strings are read as-is; numbers are accepted for `window_seconds`.
#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    let value = value
        .as_string()
        .or_else(|| value.as_f64().map(|number| number.to_string()))?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
