mod order;
mod product;
mod push;

use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, routing::post, Json, Router};
use tokio::{net::TcpListener, sync::Mutex};

/// Request captured by the stub push gateway: the `Authorization` header and JSON body.
type Captured = Arc<Mutex<Vec<(Option<String>, serde_json::Value)>>>;

/// Starts a local HTTP server that records every push request it receives.
///
/// # Returns
/// - `(url, captured)` - Endpoint to configure on the `PushClient` and the shared log
async fn start_push_gateway() -> (String, Captured) {
    async fn record(
        State(captured): State<Captured>,
        headers: HeaderMap,
        Json(body): Json<serde_json::Value>,
    ) {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        captured.lock().await.push((auth, body));
    }

    let captured: Captured = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/send", post(record))
        .with_state(captured.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/send", addr), captured)
}

/// Waits until the gateway has received `count` requests or a second has passed.
async fn wait_for_pushes(captured: &Captured, count: usize) -> usize {
    for _ in 0..100 {
        let len = captured.lock().await.len();
        if len >= count {
            return len;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    captured.lock().await.len()
}
