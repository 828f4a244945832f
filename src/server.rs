//! Local preview server for the built bundle in `dist/`.

use axum::{
    extract::State,
    http::{header::CACHE_CONTROL, HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::{
    cmp::Ordering,
    path::PathBuf,
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STATIC_DIR: &str = "dist";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const PORT_BOUNDS: (u16, u16) = (1, u16::MAX);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct ServerConfig {
    port: u16,
    static_dir: PathBuf,
    log_level: LogLevel,
}

impl ServerConfig {
    fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_u16_with_bounds(lookup("PORT"), DEFAULT_PORT, PORT_BOUNDS);
        let static_dir = parse_non_empty_string(lookup("STATIC_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));
        let log_level = parse_log_level(lookup("LOG_LEVEL"), DEFAULT_LOG_LEVEL);

        Self {
            port,
            static_dir,
            log_level,
        }
    }
}

#[derive(Clone)]
struct AppState {
    config: Arc<ServerConfig>,
    started_at: u64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthPayload {
    ok: bool,
    static_dir: String,
    uptime_seconds: u64,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();
    let bind_address = format!("0.0.0.0:{}", config.port);
    let index = config.static_dir.join("index.html");
    let static_service = ServeDir::new(&config.static_dir).not_found_service(ServeFile::new(index));

    let state = AppState {
        config: Arc::new(config),
        started_at: now_unix_seconds(),
    };

    let app = Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(static_service)
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    log_event(
        &state.config,
        LogLevel::Info,
        "server_started",
        serde_json::json!({
            "url": format!("http://127.0.0.1:{}", state.config.port),
            "staticDir": state.config.static_dir.display().to_string(),
        }),
    );
    axum::serve(listener, app).await?;
    Ok(())
}

async fn healthz(State(state): State<AppState>) -> impl IntoResponse {
    let payload = HealthPayload {
        ok: true,
        static_dir: state.config.static_dir.display().to_string(),
        uptime_seconds: now_unix_seconds().saturating_sub(state.started_at),
    };
    log_event(
        &state.config,
        LogLevel::Debug,
        "healthz",
        serde_json::json!({ "uptimeSeconds": payload.uptime_seconds }),
    );

    let mut headers = HeaderMap::new();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
    (StatusCode::OK, headers, Json(payload))
}

fn parse_u16_with_bounds(value: Option<String>, default: u16, bounds: (u16, u16)) -> u16 {
    value
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_non_empty_string(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_log_level(value: Option<String>, default: LogLevel) -> LogLevel {
    match parse_non_empty_string(value)
        .unwrap_or_else(|| default.as_str().to_string())
        .to_ascii_lowercase()
        .as_str()
    {
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        _ => default,
    }
}

fn log_event(config: &ServerConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    println!("{}", event_payload(level, event, fields));
}

fn event_payload(level: LogLevel, event: &str, fields: serde_json::Value) -> serde_json::Value {
    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    serde_json::Value::Object(payload)
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        ServerConfig::from_lookup(|name| env.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config = config_from(&[]);

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.static_dir, PathBuf::from("dist"));
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn out_of_range_or_malformed_port_falls_back() {
        assert_eq!(config_from(&[("PORT", "0")]).port, DEFAULT_PORT);
        assert_eq!(config_from(&[("PORT", "70000")]).port, DEFAULT_PORT);
        assert_eq!(config_from(&[("PORT", "eighty")]).port, DEFAULT_PORT);
        assert_eq!(config_from(&[("PORT", " 3000 ")]).port, 3000);
    }

    #[test]
    fn blank_static_dir_is_ignored() {
        assert_eq!(config_from(&[("STATIC_DIR", "   ")]).static_dir, PathBuf::from("dist"));
        assert_eq!(
            config_from(&[("STATIC_DIR", "public")]).static_dir,
            PathBuf::from("public")
        );
    }

    #[test]
    fn log_level_is_case_insensitive() {
        assert_eq!(config_from(&[("LOG_LEVEL", "DEBUG")]).log_level, LogLevel::Debug);
        assert_eq!(config_from(&[("LOG_LEVEL", "trace")]).log_level, LogLevel::Info);
    }

    #[test]
    fn debug_events_are_below_info() {
        assert!(LogLevel::Debug < LogLevel::Info);
    }

    #[test]
    fn event_payload_merges_extra_fields() {
        let payload = event_payload(
            LogLevel::Info,
            "server_started",
            serde_json::json!({ "url": "http://127.0.0.1:8080" }),
        );

        assert_eq!(payload["level"], "info");
        assert_eq!(payload["event"], "server_started");
        assert_eq!(payload["url"], "http://127.0.0.1:8080");
        assert!(payload["ts"].is_u64());
    }

    #[tokio::test]
    async fn healthz_reports_static_dir() {
        let state = AppState {
            config: Arc::new(config_from(&[("STATIC_DIR", "public")])),
            started_at: now_unix_seconds(),
        };

        let response = healthz(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(CACHE_CONTROL),
            Some(&HeaderValue::from_static("no-store"))
        );
    }
}
