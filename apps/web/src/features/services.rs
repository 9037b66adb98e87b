use crate::app_lib::{AppConfig, api::HttpApi};
use leptos::prelude::*;

/// Provides the loaded config and the API client to the component tree.
pub fn provide_services(config: AppConfig) {
    provide_context(HttpApi::new(&config.api_base_url));
    provide_context(config);
}

/// Returns the provided config or the build-time defaults.
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_else(AppConfig::load)
}

/// Returns the provided API client or one built from the current config.
pub fn use_api() -> HttpApi {
    use_context::<HttpApi>().unwrap_or_else(|| HttpApi::new(&use_config().api_base_url))
}
