use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::sync::OnceLock;
use wasm_bindgen::JsValue;

pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_USER_PATH: &str = "/users/1";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

const ENV_GLOBAL: &str = "__LOGINFORM_ENV";
const CONFIG_FILE: &str = "./config.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub user_path: Option<String>,
    pub log_level: Option<String>,
}

impl RuntimeConfig {
    /// Fills every unset field from `fallback`; fields already set win.
    pub fn merge(self, fallback: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.or(fallback.api_base_url),
            user_path: self.user_path.or(fallback.user_path),
            log_level: self.log_level.or(fallback.log_level),
        }
    }

    fn is_complete(&self) -> bool {
        self.api_base_url.is_some() && self.user_path.is_some() && self.log_level.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub user_path: String,
    pub log_level: log::Level,
}

impl Default for Settings {
    fn default() -> Self {
        resolve_settings(RuntimeConfig::default())
    }
}

static SETTINGS: OnceLock<Settings> = OnceLock::new();

pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

pub fn normalize_path(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

pub fn parse_log_level(raw: &str) -> Option<log::Level> {
    raw.trim().parse::<log::Level>().ok()
}

pub fn resolve_settings(cfg: RuntimeConfig) -> Settings {
    let api_base_url = cfg
        .api_base_url
        .as_deref()
        .map(normalize_base_url)
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    let user_path = cfg
        .user_path
        .as_deref()
        .filter(|path| !path.trim().is_empty())
        .map(normalize_path)
        .unwrap_or_else(|| DEFAULT_USER_PATH.to_string());
    let log_level = cfg
        .log_level
        .as_deref()
        .and_then(parse_log_level)
        .unwrap_or(DEFAULT_LOG_LEVEL);

    Settings {
        api_base_url,
        user_path,
        log_level,
    }
}

fn read_string(obj: &js_sys::Object, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(obj, &JsValue::from_str(key))
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

fn config_from_env_js() -> Option<RuntimeConfig> {
    // Optional global: window.__LOGINFORM_ENV = { API_BASE_URL: "...", USER_PATH: "...", LOG_LEVEL: "..." }
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &JsValue::from_str(ENV_GLOBAL)).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    Some(RuntimeConfig {
        api_base_url: read_string(&obj, &["API_BASE_URL", "api_base_url"]),
        user_path: read_string(&obj, &["USER_PATH", "user_path"]),
        log_level: read_string(&obj, &["LOG_LEVEL", "log_level"]),
    })
}

/// `./config.json` resolved against the current page URL.
pub fn config_url(page_href: &str) -> anyhow::Result<reqwest::Url> {
    reqwest::Url::parse(page_href)
        .and_then(|page| page.join(CONFIG_FILE))
        .with_context(|| format!("cannot resolve {} against {}", CONFIG_FILE, page_href))
}

async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no global `window` exists"))?;
    let href = window
        .location()
        .href()
        .map_err(|_| anyhow!("window.location.href is unavailable"))?;
    let url = config_url(&href)?;
    let resp = reqwest::get(url.clone())
        .await
        .with_context(|| format!("GET {}", url))?;
    if !resp.status().is_success() {
        return Err(anyhow!("GET {} returned {}", url, resp.status()));
    }
    resp.json::<RuntimeConfig>()
        .await
        .context("config.json is not a valid runtime config")
}

pub async fn await_settings() -> Settings {
    if let Some(cached) = SETTINGS.get() {
        return cached.clone();
    }

    let mut cfg = config_from_env_js().unwrap_or_default();
    if !cfg.is_complete() {
        match fetch_runtime_config().await {
            Ok(file_cfg) => cfg = cfg.merge(file_cfg),
            Err(err) => log::debug!("runtime config not loaded: {:#}", err),
        }
    }

    let settings = resolve_settings(cfg);
    SETTINGS.get_or_init(|| settings).clone()
}
