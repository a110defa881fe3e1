//! Peer server endpoints
//!
//! The fixed-contract counterpart the client measures against: a download
//! endpoint streaming a fixed-size payload, an upload endpoint draining
//! request bodies, and a liveness probe. Not part of the measurement core.

use crate::{
    error::Result,
    logging,
};
use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use bytes::Bytes;
use futures::StreamExt;

/// Shared state for the payload-serving endpoints
#[derive(Clone)]
struct ServerState {
    payload: Bytes,
}

/// Build the peer server router serving a payload of the given size
pub fn router(payload_bytes: u64) -> Router {
    let state = ServerState {
        payload: Bytes::from(vec![0u8; payload_bytes as usize]),
    };

    Router::new()
        .route("/health", get(health))
        .route("/download", get(download))
        .route("/upload", post(upload))
        .with_state(state)
}

/// Bind and run the peer server until shutdown
pub async fn serve(port: u16, payload_bytes: u64) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;

    logging::info(
        "server",
        &format!(
            "listening on port {} serving {} byte payloads",
            port, payload_bytes
        ),
    );

    axum::serve(listener, router(payload_bytes)).await?;
    Ok(())
}

/// Liveness probe
async fn health() -> &'static str {
    "OK"
}

/// Serve the fixed-size download payload
async fn download(State(state): State<ServerState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/octet-stream")],
        state.payload.clone(),
    )
}

/// Drain an uploaded payload, discarding the bytes
async fn upload(body: Body) -> StatusCode {
    let mut stream = body.into_data_stream();
    let mut received: u64 = 0;

    while let Some(chunk) = stream.next().await {
        match chunk {
            Ok(bytes) => received += bytes.len() as u64,
            Err(e) => {
                logging::warn("server", &format!("failed to read upload body: {}", e));
                return StatusCode::INTERNAL_SERVER_ERROR;
            }
        }
    }

    logging::debug("server", &format!("received {} bytes", received));
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Serve the router on an ephemeral port, returning its base URL
    async fn spawn_test_server(payload_bytes: u64) -> String {
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router(payload_bytes)).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let base = spawn_test_server(1024).await;

        let response = reqwest::get(format!("{}/health", base)).await.unwrap();
        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(response.text().await.unwrap(), "OK");
    }

    #[tokio::test]
    async fn test_download_serves_exact_payload_size() {
        let base = spawn_test_server(64 * 1024).await;

        let response = reqwest::get(format!("{}/download", base)).await.unwrap();
        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/octet-stream"
        );

        let body = response.bytes().await.unwrap();
        assert_eq!(body.len(), 64 * 1024);
    }

    #[tokio::test]
    async fn test_upload_drains_body() {
        let base = spawn_test_server(1024).await;

        let client = reqwest::Client::new();
        let response = client
            .post(format!("{}/upload", base))
            .header(header::CONTENT_TYPE, "application/octet-stream")
            .body(vec![b'A'; 256 * 1024])
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 200);
    }
}
