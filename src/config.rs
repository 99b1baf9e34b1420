//! Runtime configuration.
//!
//! Deploy-time knobs resolve in this order: an optional
//! `window.__PORTFOLIO_CONFIG` global (env.js style), then a same-origin
//! `config.json`, then compiled-in defaults from the static content. The
//! resolved snapshot is cached for the life of the tab.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::data;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub resume_url: Option<String>,
    pub contact_email: Option<String>,
}

static RUNTIME: OnceLock<RuntimeConfig> = OnceLock::new();

/// URL of the downloadable resume, after overrides.
pub fn resume_url() -> String {
    resolve_resume_url(RUNTIME.get())
}

/// Address used by the mailto affordances, after overrides.
pub fn contact_email() -> String {
    resolve_contact_email(RUNTIME.get())
}

fn resolve_resume_url(cfg: Option<&RuntimeConfig>) -> String {
    cfg.and_then(|c| c.resume_url.clone())
        .unwrap_or_else(|| data::portfolio().personal.resume.clone())
}

fn resolve_contact_email(cfg: Option<&RuntimeConfig>) -> String {
    cfg.and_then(|c| c.contact_email.clone())
        .unwrap_or_else(|| data::portfolio().personal.email.clone())
}

#[cfg(target_arch = "wasm32")]
fn get_from_window_config() -> Option<RuntimeConfig> {
    // Expect optional global object: window.__PORTFOLIO_CONFIG = { resume_url: "...", contact_email: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &"__PORTFOLIO_CONFIG".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let field = |key: &str| {
        js_sys::Reflect::get(&obj, &key.into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    };
    Some(RuntimeConfig {
        resume_url: field("resume_url"),
        contact_email: field("contact_email"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn get_from_window_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn config_json_url() -> Option<String> {
    let origin = web_sys::window()?.location().origin().ok()?;
    Some(format!("{origin}/config.json"))
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let url = config_json_url()?;
    let resp = reqwest::get(&url).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    None
}

/// Resolves and caches the runtime config. Called once at startup; safe to
/// call again (later calls keep the first snapshot).
pub async fn init() {
    if RUNTIME.get().is_some() {
        return;
    }
    let cfg = match get_from_window_config() {
        Some(cfg) => cfg,
        None => fetch_runtime_config().await.unwrap_or_default(),
    };
    let _ = RUNTIME.set(cfg);
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn defaults_come_from_static_content() {
        assert_eq!(
            resolve_resume_url(None),
            data::portfolio().personal.resume
        );
        assert_eq!(
            resolve_contact_email(None),
            data::portfolio().personal.email
        );
    }

    #[test]
    fn overrides_win_when_present() {
        let cfg = RuntimeConfig {
            resume_url: Some("https://cdn.example.com/resume.pdf".into()),
            contact_email: None,
        };
        assert_eq!(
            resolve_resume_url(Some(&cfg)),
            "https://cdn.example.com/resume.pdf"
        );
        // Missing fields still fall back per knob.
        assert_eq!(
            resolve_contact_email(Some(&cfg)),
            data::portfolio().personal.email
        );
    }

    #[test]
    fn runtime_config_round_trips_through_json() {
        let raw = r#"{"resume_url":"https://x/resume.pdf","contact_email":"me@x.dev"}"#;
        let cfg: RuntimeConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(cfg.resume_url.as_deref(), Some("https://x/resume.pdf"));
        let back = serde_json::to_value(&cfg).unwrap();
        assert_eq!(back["contact_email"], serde_json::json!("me@x.dev"));
    }
}
