//! `carecast serve`: the planner over HTTP.

use std::net::SocketAddr;

use anyhow::Result;
use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;

use carecast_core::brief::lint_brief;
use carecast_core::plan::assemble;
use carecast_core::{CampaignBundle, CampaignInput, platforms};

use crate::brief_cmd::today;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.into(),
        }
    }

    pub fn unprocessable(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: msg.into(),
        }
    }

    pub fn rejected(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::json!({ "error": self.message });
        (self.status, Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    #[serde(flatten)]
    pub bundle: CampaignBundle,
    /// Advisory notes about the brief; never block generation.
    pub warnings: Vec<String>,
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn build_router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/platforms", get(list_platforms))
        .route("/api/platforms/{name}", get(get_platform))
        .route("/api/brief/default", get(default_brief))
        .route("/api/plan", post(generate))
        .layer(CorsLayer::permissive())
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub async fn run_serve(bind: &str, port: u16) -> Result<()> {
    let app = build_router();
    let addr: SocketAddr = format!("{bind}:{port}").parse()?;
    tracing::info!("carecast serve listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("carecast serve shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install Ctrl+C handler: {e}");
        std::future::pending::<()>().await;
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn index() -> Html<String> {
    let rows = platforms::all()
        .iter()
        .map(|p| {
            format!(
                "<tr><td><a href=\"/api/platforms/{name}\">{name}</a></td><td>{cadence}</td></tr>",
                name = escape_html(&p.name),
                cadence = escape_html(&p.cadence),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    Html(format!(
        "<!DOCTYPE html>\
<html><head><meta charset=\"utf-8\"><title>carecast</title></head><body>\
<h1>carecast</h1>\
<p><a href=\"/api/platforms\">/api/platforms</a> | <a href=\"/api/brief/default\">/api/brief/default</a> | POST /api/plan</p>\
<table><tr><th>Platform</th><th>Cadence</th></tr>{rows}</table>\
</body></html>"
    ))
}

/// Escape text for use inside HTML element content and quoted attributes.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

async fn list_platforms() -> impl IntoResponse {
    Json(platforms::all())
}

async fn get_platform(Path(name): Path<String>) -> Result<axum::response::Response, AppError> {
    let platform = platforms::lookup(&name)
        .ok_or_else(|| AppError::not_found(format!("platform {name} not found")))?;
    Ok(Json(platform).into_response())
}

async fn default_brief() -> Json<CampaignInput> {
    Json(CampaignInput::default_brief(today()))
}

async fn generate(
    payload: Result<Json<CampaignInput>, JsonRejection>,
) -> Result<axum::response::Response, AppError> {
    let Json(input) = payload.map_err(AppError::rejected)?;
    input
        .check_plan_limit()
        .map_err(|e| AppError::unprocessable(e.to_string()))?;

    let warnings: Vec<String> = lint_brief(&input).iter().map(ToString::to_string).collect();
    let bundle = assemble(&input);
    tracing::info!(
        platforms = input.platforms.len(),
        weeks = input.duration_weeks,
        events = bundle.calendar.len(),
        "plan generated"
    );

    Ok(Json(PlanResponse { bundle, warnings }).into_response())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
