//! Local HTTP stub for exercising the real provider clients in tests.

use axum::{http::StatusCode, Router};
use tokio::net::TcpListener;

/// Serves `status` + `body` for every request on an ephemeral port.
/// Returns the base URL, e.g. `http://127.0.0.1:54321`.
pub async fn spawn_stub(status: StatusCode, body: &'static str) -> String {
    let app = Router::new().fallback(move || async move { (status, body) });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}
