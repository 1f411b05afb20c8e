use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const FALLBACK_API_BASE_URL: &str = "http://localhost:3000/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn read_global(global: &str, keys: [&str; 2]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
        .find(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.as_string())
}

fn snapshot_from_globals() -> Option<String> {
    // window.__LOGWATCH_ENV (env.js) wins over window.__LOGWATCH_CONFIG.
    read_global("__LOGWATCH_ENV", ["API_BASE_URL", "api_base_url"])
        .or_else(|| read_global("__LOGWATCH_CONFIG", ["api_base_url", "API_BASE_URL"]))
        .and_then(|url| normalize_base_url(&url))
}

fn write_window_config(url: &str) {
    let w = match web_sys::window() {
        Some(win) => win,
        None => return,
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &"api_base_url".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&w, &"__LOGWATCH_CONFIG".into(), &obj);
}

fn origin_base_url() -> Option<String> {
    let origin = web_sys::window()?.location().origin().ok()?;
    normalize_base_url(&format!("{}/api", origin))
}

/// Trims whitespace and trailing slashes; blank values are rejected.
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn cache_base_url(value: String) -> String {
    API_BASE_URL.get_or_init(|| value).clone()
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let url = web_sys::window()?.location().origin().ok()? + "/config.json";
    let resp = reqwest::get(&url).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(existing);
    }
    if let Some(url) = fetch_runtime_config()
        .await
        .and_then(|cfg| cfg.api_base_url)
        .and_then(|url| normalize_base_url(&url))
    {
        write_window_config(&url);
        return cache_base_url(url);
    }
    let fallback = origin_base_url().unwrap_or_else(|| FALLBACK_API_BASE_URL.to_string());
    log::info!("No runtime config found, using {}", fallback);
    cache_base_url(fallback)
}

pub async fn init() {
    let url = await_api_base_url().await;
    log::debug!("API base URL resolved to {}", url);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_base_url_strips_trailing_slashes() {
        assert_eq!(
            normalize_base_url(" https://logwatch.example/api// "),
            Some("https://logwatch.example/api".to_string())
        );
    }

    #[test]
    fn normalize_base_url_rejects_blank_values() {
        assert_eq!(normalize_base_url("   "), None);
        assert_eq!(normalize_base_url("/"), None);
    }

    #[test]
    fn runtime_config_parses_optional_base_url() {
        let cfg: RuntimeConfig =
            serde_json::from_str(r#"{"api_base_url":"https://logwatch.example/api"}"#).unwrap();
        assert_eq!(cfg.api_base_url.as_deref(), Some("https://logwatch.example/api"));

        let empty: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert!(empty.api_base_url.is_none());
    }
}
