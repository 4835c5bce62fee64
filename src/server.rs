use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue},
    middleware::{self, Next},
    response::Response,
    Router,
};
use std::{
    cmp::Ordering,
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};
use tokio::{net::TcpListener, time::Instant};
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_STATIC_CACHE_SECONDS: u64 = 3_600;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const PORT_BOUNDS: (u16, u16) = (1, u16::MAX);
const STATIC_CACHE_SECONDS_BOUNDS: (u64, u64) = (0, 365 * 24 * 60 * 60);
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

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

/// Settings for the static host that serves the compiled site bundle.
#[derive(Clone, Debug)]
struct HostConfig {
    port: u16,
    dist_dir: PathBuf,
    static_cache_seconds: u64,
    log_level: LogLevel,
}

impl HostConfig {
    fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_with_bounds(lookup("PORT").as_deref(), DEFAULT_PORT, PORT_BOUNDS);
        let dist_dir = non_empty(lookup("SITE_DIST_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let static_cache_seconds = parse_with_bounds(
            lookup("STATIC_CACHE_SECONDS").as_deref(),
            DEFAULT_STATIC_CACHE_SECONDS,
            STATIC_CACHE_SECONDS_BOUNDS,
        );
        let log_level = parse_log_level(lookup("LOG_LEVEL"), DEFAULT_LOG_LEVEL);

        Self {
            port,
            dist_dir,
            static_cache_seconds,
            log_level,
        }
    }
}

#[derive(Clone)]
struct HostState {
    config: Arc<HostConfig>,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = HostConfig::from_env();
    let bind_address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&bind_address).await?;

    log_event(
        &config,
        LogLevel::Info,
        "server_listening",
        serde_json::json!({
            "address": format!("http://127.0.0.1:{}", config.port),
            "dist_dir": config.dist_dir.display().to_string(),
        }),
    );

    let log_config = config.clone();
    axum::serve(listener, router(config))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log_event(&log_config, LogLevel::Info, "server_stopped", serde_json::json!({}));
    Ok(())
}

fn router(config: HostConfig) -> Router {
    let index = config.dist_dir.join("index.html");
    let static_service = ServeDir::new(&config.dist_dir).not_found_service(ServeFile::new(index));
    let state = HostState {
        config: Arc::new(config),
    };

    Router::new()
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(state, track_request))
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

async fn track_request(State(state): State<HostState>, request: Request, next: Next) -> Response {
    let started_at = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;

    let cache_control = cache_control_for(response.headers(), state.config.static_cache_seconds);
    let headers = response.headers_mut();
    headers.insert(header::CACHE_CONTROL, cache_control);
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        headers.insert(REQUEST_ID_HEADER, value);
    }

    let status = response.status();
    let level = if status.is_success() || status.is_redirection() {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    log_event(
        &state.config,
        level,
        "request_complete",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "method": method.as_str(),
            "path": path.as_str(),
            "status": status.as_u16(),
            "duration_ms": started_at.elapsed().as_millis(),
        }),
    );

    response
}

/// HTML is always revalidated so a redeploy shows up on reload; everything
/// else may be cached for the configured period.
fn cache_control_for(headers: &HeaderMap, static_cache_seconds: u64) -> HeaderValue {
    let is_html = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("text/html"))
        .unwrap_or(false);

    if is_html || static_cache_seconds == 0 {
        return HeaderValue::from_static("no-cache");
    }

    HeaderValue::from_str(&format!("public, max-age={static_cache_seconds}"))
        .unwrap_or_else(|_| HeaderValue::from_static("no-cache"))
}

fn parse_with_bounds<T>(raw: Option<&str>, default: T, bounds: (T, T)) -> T
where
    T: std::str::FromStr + PartialOrd,
{
    raw.and_then(|value| value.trim().parse::<T>().ok())
        .filter(|value| *value >= bounds.0 && *value <= bounds.1)
        .unwrap_or(default)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_log_level(raw: Option<String>, default: LogLevel) -> LogLevel {
    match non_empty(raw)
        .unwrap_or_else(|| default.as_str().to_string())
        .to_ascii_lowercase()
        .as_str()
    {
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        _ => default,
    }
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    value.unwrap_or_else(generate_request_id)
}

fn log_event(config: &HostConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

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

    println!("{}", serde_json::Value::Object(payload));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{collections::HashMap, fs};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name| values.get(name).cloned()
    }

    fn fixture_dist() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(
            dir.path().join("index.html"),
            "<!doctype html><html><body><div id=\"app\"></div></body></html>",
        )
        .expect("write index");
        fs::write(dir.path().join("app.js"), "console.log('site');").expect("write asset");
        dir
    }

    fn test_config(dist_dir: PathBuf) -> HostConfig {
        HostConfig {
            port: 0,
            dist_dir,
            static_cache_seconds: 600,
            log_level: LogLevel::Info,
        }
    }

    struct RawResponse {
        status: u16,
        headers: String,
        body: String,
    }

    async fn spawn_host(config: HostConfig) -> std::net::SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let address = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, router(config)).await;
        });
        address
    }

    async fn get(address: std::net::SocketAddr, path: &str, extra_headers: &str) -> RawResponse {
        let mut stream = tokio::net::TcpStream::connect(address).await.expect("connect");
        let request = format!(
            "GET {path} HTTP/1.1\r\nHost: localhost\r\n{extra_headers}Connection: close\r\n\r\n"
        );
        stream.write_all(request.as_bytes()).await.expect("write request");

        let mut raw = Vec::new();
        stream.read_to_end(&mut raw).await.expect("read response");
        let text = String::from_utf8_lossy(&raw).to_string();

        let (head, body) = text.split_once("\r\n\r\n").expect("header terminator");
        let status = head
            .split_whitespace()
            .nth(1)
            .and_then(|code| code.parse().ok())
            .expect("status code");

        RawResponse {
            status,
            headers: head.to_ascii_lowercase(),
            body: body.to_string(),
        }
    }

    #[test]
    fn config_defaults_when_unset() {
        let config = HostConfig::from_lookup(lookup_from(&[]));

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
        assert_eq!(config.static_cache_seconds, DEFAULT_STATIC_CACHE_SECONDS);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn config_reads_valid_values() {
        let config = HostConfig::from_lookup(lookup_from(&[
            ("PORT", " 3000 "),
            ("SITE_DIST_DIR", "public"),
            ("STATIC_CACHE_SECONDS", "0"),
            ("LOG_LEVEL", "DEBUG"),
        ]));

        assert_eq!(config.port, 3000);
        assert_eq!(config.dist_dir, PathBuf::from("public"));
        assert_eq!(config.static_cache_seconds, 0);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn config_rejects_out_of_range_values() {
        let config = HostConfig::from_lookup(lookup_from(&[
            ("PORT", "0"),
            ("SITE_DIST_DIR", "   "),
            ("STATIC_CACHE_SECONDS", "99999999999"),
            ("LOG_LEVEL", "trace"),
        ]));

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
        assert_eq!(config.static_cache_seconds, DEFAULT_STATIC_CACHE_SECONDS);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn request_id_prefers_incoming_header() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("  abc-123 "));
        assert_eq!(resolve_request_id(&headers), "abc-123");

        let generated = resolve_request_id(&HeaderMap::new());
        assert!(generated.starts_with("req-"));
    }

    #[test]
    fn html_is_never_long_cached() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/html; charset=utf-8"));
        assert_eq!(cache_control_for(&headers, 600), "no-cache");

        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/wasm"));
        assert_eq!(cache_control_for(&headers, 600), "public, max-age=600");
        assert_eq!(cache_control_for(&headers, 0), "no-cache");
    }

    #[tokio::test]
    async fn serves_index_and_assets() {
        let dist = fixture_dist();
        let address = spawn_host(test_config(dist.path().to_path_buf())).await;

        let index = get(address, "/", "").await;
        assert_eq!(index.status, 200);
        assert!(index.body.contains("id=\"app\""));
        assert!(index.headers.contains("cache-control: no-cache"));

        let asset = get(address, "/app.js", "").await;
        assert_eq!(asset.status, 200);
        assert!(asset.body.contains("console.log"));
        assert!(asset.headers.contains("cache-control: public, max-age=600"));
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_index() {
        let dist = fixture_dist();
        let address = spawn_host(test_config(dist.path().to_path_buf())).await;

        let response = get(address, "/no/such/page", "").await;
        assert_eq!(response.status, 404);
        assert!(response.body.contains("id=\"app\""));
    }

    #[tokio::test]
    async fn echoes_request_id() {
        let dist = fixture_dist();
        let address = spawn_host(test_config(dist.path().to_path_buf())).await;

        let response = get(address, "/", "x-request-id: trace-42\r\n").await;
        assert!(response.headers.contains("x-request-id: trace-42"));
    }
}
