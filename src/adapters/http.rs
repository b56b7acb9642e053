use crate::config::ServerSettings;
use crate::core::engine::DefaultEngine;
use crate::domain::model::{Verdict, VerdictBody};
use crate::utils::error::Result;
use axum::extract::{RawQuery, State};
use axum::http::header::ACCEPT;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

pub fn router(engine: Arc<DefaultEngine>, route: &str) -> Router {
    Router::new()
        .route(route, get(pyramid_word))
        .with_state(engine)
}

/// Anything but a pyramid word is a resource that does not exist.
pub fn status_for(verdict: &Verdict) -> StatusCode {
    if verdict.is_pyramid() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn pyramid_word(
    State(engine): State<Arc<DefaultEngine>>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Response {
    // RawQuery 已去掉開頭的 `?`，沒有 `?` 時為 None
    let verdict = engine.classify(query.as_deref());
    let status = status_for(&verdict);

    tracing::info!(
        query = query.as_deref().unwrap_or_default(),
        status = status.as_u16(),
        pyramid = verdict.is_pyramid(),
        "Classified request"
    );

    // 依 Accept 標頭決定回傳 JSON 或純文字
    if wants_json(&headers) {
        (status, Json(VerdictBody::from(&verdict))).into_response()
    } else {
        (status, verdict.message()).into_response()
    }
}

fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(ACCEPT)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|accept| accept.contains("application/json"))
}

pub async fn serve(settings: &ServerSettings) -> Result<()> {
    let listener = TcpListener::bind((settings.host.as_str(), settings.port)).await?;
    serve_with_shutdown(listener, &settings.route, shutdown_signal()).await
}

pub async fn serve_with_shutdown<F>(listener: TcpListener, route: &str, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!("🚀 Listening on http://{}{}", addr, route);

    let app = router(Arc::new(DefaultEngine::default()), route);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    // Kubernetes 等環境以 SIGTERM 關閉
    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(&Verdict::Missing), StatusCode::NOT_FOUND);
        assert_eq!(
            status_for(&Verdict::Undecodable {
                raw: "%".to_string()
            }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&Verdict::NotPyramid {
                word: "aabb".to_string()
            }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&Verdict::Pyramid {
                word: "a".to_string()
            }),
            StatusCode::OK
        );
    }

    #[test]
    fn test_wants_json() {
        let mut headers = HeaderMap::new();
        assert!(!wants_json(&headers));

        headers.insert(ACCEPT, HeaderValue::from_static("text/plain"));
        assert!(!wants_json(&headers));

        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, text/plain;q=0.5"),
        );
        assert!(wants_json(&headers));
    }
}
