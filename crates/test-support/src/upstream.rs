use axum::Router;
use axum::body::Bytes;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::IntoResponse;
use axum::routing::{any, get};
use serde_json::{Value, json};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// An axum app bound to `127.0.0.1:0`, shut down gracefully by [`Upstream::stop`].
pub struct Upstream {
    base_url: String,
    shutdown_tx: oneshot::Sender<()>,
    handle: JoinHandle<std::io::Result<()>>,
}

impl Upstream {
    /// # Errors
    ///
    /// Returns an error if the listener cannot be bound.
    pub async fn start(app: Router) -> anyhow::Result<Self> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let server = axum::serve(listener, app).with_graceful_shutdown(async move {
            let _ = shutdown_rx.await;
        });
        let handle = tokio::spawn(async move { server.await });
        Ok(Self {
            base_url: format!("http://{addr}"),
            shutdown_tx,
            handle,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// # Errors
    ///
    /// Returns an error if the server task panicked or failed.
    pub async fn stop(self) -> anyhow::Result<()> {
        let _ = self.shutdown_tx.send(());
        self.handle.await??;
        Ok(())
    }
}

/// Reflects the request back as JSON: method, path, raw query, `x-trace` and
/// `content-type` headers, and the body as text.
pub async fn echo_handler(
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> axum::Json<Value> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    axum::Json(json!({
        "method": method.as_str(),
        "path": uri.path(),
        "query": uri.query().unwrap_or(""),
        "x_trace": header("x-trace"),
        "content_type": header("content-type"),
        "body": String::from_utf8_lossy(&body),
    }))
}

/// Every path echoes.
#[must_use]
pub fn echo_router() -> Router {
    Router::new().route("/{*path}", any(echo_handler))
}

/// Fixed responses for the verb tool scenarios:
/// - `/data`: JSON `{"items":[1,2,3]}`
/// - `/created`: `201` plain text `created`
/// - `/missing`: `404` plain text `no such item`
/// - `/echo/*`: [`echo_handler`]
#[must_use]
pub fn fixture_router() -> Router {
    Router::new()
        .route("/data", get(|| async { axum::Json(json!({"items": [1, 2, 3]})) }))
        .route("/created", any(created))
        .route("/missing", any(missing))
        .route("/echo/{*path}", any(echo_handler))
}

async fn created() -> impl IntoResponse {
    (
        StatusCode::CREATED,
        [(header::CONTENT_TYPE, "text/plain")],
        "created",
    )
}

async fn missing() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "no such item")
}
