use std::env;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

fn profiled_env_bool(profile: &str, key: &str, default: bool) -> bool {
    profiled_env_opt(profile, key)
        .and_then(|v| parse_bool(&v))
        .unwrap_or(default)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// ── Codec config ──────────────────────────────────────────────

/// Settings for the notification codec and the `notify-codec` tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Active profile name (empty = default).
    pub profile: String,
    /// Report the url field (instead of the secret field) in the
    /// "invalid Webhook URL" message.
    pub report_webhook_url: bool,
    /// Pretty-print JSON output.
    pub pretty_json: bool,
    /// Ignore empty lines when reading descriptors from a file or stdin.
    pub skip_blank_lines: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            profile: String::new(),
            report_webhook_url: false,
            pretty_json: false,
            skip_blank_lines: true,
        }
    }
}

impl CodecConfig {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `NOTIFY_PROFILE`. When set (e.g. `PROD`), every
    /// key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env_or("NOTIFY_PROFILE", "").to_uppercase();
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        let defaults = Self::default();
        Self {
            profile: p.to_string(),
            report_webhook_url: profiled_env_bool(
                p,
                "NOTIFY_REPORT_WEBHOOK_URL",
                defaults.report_webhook_url,
            ),
            pretty_json: profiled_env_bool(p, "NOTIFY_PRETTY_JSON", defaults.pretty_json),
            skip_blank_lines: profiled_env_bool(
                p,
                "NOTIFY_SKIP_BLANK_LINES",
                defaults.skip_blank_lines,
            ),
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!(
            profile = self.profile_label(),
            report_webhook_url = self.report_webhook_url,
            pretty_json = self.pretty_json,
            skip_blank_lines = self.skip_blank_lines,
            "codec config loaded"
        );
    }
}
