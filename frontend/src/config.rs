use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// One configuration source. Every field is optional; sources are merged
/// field by field, first non-blank value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "BACKEND_URL")]
    pub backend_url: Option<String>,
    #[serde(default, alias = "LOG_LEVEL")]
    pub log_level: Option<String>,
}

impl RuntimeConfig {
    fn from_build_env() -> Self {
        Self {
            backend_url: option_env!("HRMS_BACKEND_URL").map(str::to_string),
            log_level: option_env!("HRMS_LOG_LEVEL").map(str::to_string),
        }
    }

    pub fn or(self, fallback: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            backend_url: non_blank(self.backend_url).or_else(|| non_blank(fallback.backend_url)),
            log_level: non_blank(self.log_level).or_else(|| non_blank(fallback.log_level)),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub backend_url: String,
    pub log_level: LevelFilter,
}

impl ResolvedConfig {
    pub fn from_sources(sources: impl IntoIterator<Item = RuntimeConfig>) -> Self {
        let merged = sources
            .into_iter()
            .fold(RuntimeConfig::default(), RuntimeConfig::or);
        let backend_url = merged
            .backend_url
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        let log_level = merged
            .log_level
            .as_deref()
            .and_then(parse_log_level)
            .unwrap_or(DEFAULT_LOG_LEVEL);
        Self {
            backend_url,
            log_level,
        }
    }
}

pub fn parse_log_level(raw: &str) -> Option<LevelFilter> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

static RESOLVED: OnceLock<ResolvedConfig> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;
    use anyhow::{anyhow, Context};
    use wasm_bindgen::JsValue;

    fn read_key(obj: &JsValue, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(obj, &JsValue::from_str(key))
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
                .and_then(|v| v.as_string())
        })
    }

    /// Reads `window.__HRMS_ENV`, injected by a deployment-time `env.js`.
    pub fn from_globals() -> RuntimeConfig {
        let Some(window) = web_sys::window() else {
            return RuntimeConfig::default();
        };
        let env = match js_sys::Reflect::get(&window, &JsValue::from_str("__HRMS_ENV")) {
            Ok(env) if !env.is_undefined() && !env.is_null() => env,
            _ => return RuntimeConfig::default(),
        };
        RuntimeConfig {
            backend_url: read_key(&env, &["BACKEND_URL", "backend_url"]),
            log_level: read_key(&env, &["LOG_LEVEL", "log_level"]),
        }
    }

    pub async fn fetch_config_json() -> anyhow::Result<RuntimeConfig> {
        let window = web_sys::window().ok_or_else(|| anyhow!("no global `window` exists"))?;
        let href = window
            .location()
            .href()
            .map_err(|e| anyhow!("failed to read location: {:?}", e))?;
        let url = reqwest::Url::parse(&href)
            .and_then(|base| base.join("config.json"))
            .context("invalid config.json location")?;
        let response = reqwest::get(url)
            .await
            .context("config.json request failed")?;
        if !response.status().is_success() {
            return Ok(RuntimeConfig::default());
        }
        response
            .json::<RuntimeConfig>()
            .await
            .context("config.json is not valid JSON")
    }
}

#[cfg(target_arch = "wasm32")]
async fn load_sources() -> Vec<RuntimeConfig> {
    let from_file = match browser::fetch_config_json().await {
        Ok(cfg) => cfg,
        Err(err) => {
            log::warn!("Ignoring config.json: {:#}", err);
            RuntimeConfig::default()
        }
    };
    vec![browser::from_globals(), from_file, RuntimeConfig::from_build_env()]
}

#[cfg(not(target_arch = "wasm32"))]
async fn load_sources() -> Vec<RuntimeConfig> {
    vec![RuntimeConfig::from_build_env()]
}

pub async fn await_config() -> ResolvedConfig {
    if let Some(cached) = RESOLVED.get() {
        return cached.clone();
    }
    let resolved = ResolvedConfig::from_sources(load_sources().await);
    RESOLVED.get_or_init(|| resolved).clone()
}

pub async fn await_backend_url() -> String {
    await_config().await.backend_url
}

/// Resolves the configuration once and applies the configured log level.
pub async fn init() {
    let config = await_config().await;
    log::set_max_level(config.log_level);
    log::info!("Backend URL: {}", config.backend_url);
}
