//! Router and request handlers.

use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::package::PackageInfo;

const APK_CONTENT_TYPE: &str = "application/vnd.android.package-archive";

#[derive(Clone)]
struct AppState {
    package: Arc<PackageInfo>,
}

/// Build the distribution app: landing page at `/`, package download at
/// `/<download-name>`, 404 for everything else.
#[must_use]
pub fn router(package: PackageInfo) -> Router {
    let state = AppState {
        package: Arc::new(package),
    };
    Router::new()
        .route("/", get(landing))
        .route("/index.html", get(landing))
        .route("/{file}", get(download))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn landing(State(state): State<AppState>) -> Html<String> {
    Html(landing_page(&state.package))
}

async fn download(State(state): State<AppState>, Path(file): Path<String>) -> Response {
    if file != state.package.download_name {
        return (StatusCode::NOT_FOUND, "not found").into_response();
    }
    match tokio::fs::read(&state.package.path).await {
        Ok(bytes) => {
            tracing::info!(file = %file, bytes = bytes.len(), "package downloaded");
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, APK_CONTENT_TYPE.to_owned()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{file}\""),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(err) => {
            tracing::warn!(error = %err, "package vanished after startup");
            (StatusCode::NOT_FOUND, "package no longer available").into_response()
        }
    }
}

/// Render the install landing page.
fn landing_page(package: &PackageInfo) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Conductor Mobile - Install</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            max-width: 600px;
            margin: 0 auto;
            padding: 20px;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
            color: white;
        }}
        .card {{
            background: rgba(255,255,255,0.95);
            border-radius: 16px;
            padding: 30px;
            color: #333;
        }}
        h1 {{ margin: 0 0 10px 0; font-size: 28px; }}
        .subtitle {{ color: #666; margin-bottom: 20px; }}
        .download-btn {{
            display: block;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            text-decoration: none;
            padding: 18px 30px;
            border-radius: 12px;
            text-align: center;
            font-size: 18px;
            font-weight: bold;
            margin: 20px 0;
        }}
        .steps {{ background: #f5f5f5; padding: 15px; border-radius: 8px; margin: 20px 0; }}
        .steps ol {{ margin: 0; padding-left: 20px; }}
        .info {{ font-size: 14px; color: #666; }}
        .version {{ font-size: 12px; color: #999; text-align: center; margin-top: 20px; }}
    </style>
</head>
<body>
    <div class="card">
        <h1>Conductor Mobile</h1>
        <p class="subtitle">Coordinate synchronized actions in real-time</p>

        <a href="/{name}" class="download-btn">Download APK ({size:.1} MB)</a>

        <div class="steps">
            <h3>Installation Steps:</h3>
            <ol>
                <li>Tap the download button above</li>
                <li>When prompted, tap "Open" or find the APK in Downloads</li>
                <li>If asked, allow installation from this source</li>
                <li>Tap "Install" when prompted</li>
                <li>Open Conductor and scan your first event QR code!</li>
            </ol>
        </div>

        <p class="info">
            <strong>Note:</strong> You may need to enable "Install unknown apps"
            in your phone's settings for your browser.
        </p>

        <p class="version">Conductor Mobile v{version}</p>
    </div>
</body>
</html>"#,
        name = package.download_name,
        size = package.size_mb(),
        version = env!("CARGO_PKG_VERSION"),
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
