use leptos::*;

mod api;
pub mod config;
mod pages;
#[cfg(test)]
mod test_support;

pub use api::{ApiClient, ApiError, FetchError, UserResponse};
use pages::login::LoginPage;

/// Installs logging, starts runtime config loading and mounts the login page.
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(config::DEFAULT_LOG_LEVEL).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting login form frontend (wasm)");

    // Non-blocking: window.__LOGINFORM_ENV wins over ./config.json.
    spawn_local(async move {
        let settings = config::await_settings().await;
        log::set_max_level(settings.log_level.to_level_filter());
        log::info!("Runtime config initialized (api: {})", settings.api_base_url);
    });

    mount_to_body(|| {
        view! { <LoginPage/> }
    });
}
