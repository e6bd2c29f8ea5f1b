use std::sync::Arc;

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{middleware, Router};
use tower_http::services::ServeDir;
use tracing::error;

use crate::data::board::BoardView;
use crate::data::units::UnitsData;
use crate::server::page::{render_builder_page, PageContext};
use crate::server::{api, gzip, static_files, AppState};

const JSON_CONTENT_TYPE: &str = "application/json";
const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Full application router: page, API, robots.txt and the static mount, all
/// behind the gzip middleware.
pub fn build_router(state: AppState) -> Router {
    let mount = state.config.static_mount();
    let static_routes = Router::new()
        .nest_service(&mount, ServeDir::new(&state.config.static_dir))
        .layer(middleware::from_fn_with_state(
            state.config.static_cache_secs,
            static_files::static_cache_headers,
        ));

    Router::new()
        .route("/", get(builder_page))
        .route("/robots.txt", get(robots_txt))
        .route("/api/health", get(health))
        .route("/api/units", get(units))
        .with_state(state)
        .merge(static_routes)
        .fallback(not_found)
        .layer(middleware::from_fn(gzip::compress_response))
}

async fn builder_page(State(state): State<AppState>) -> Response {
    let data = load_units_or_empty(&state);
    let board = BoardView::default();
    let canonical = state.config.canonical_url();
    let html = render_builder_page(&PageContext {
        units: &data.units,
        board: &board,
        static_base: &state.config.static_base_url,
        canonical: &canonical,
        assets: &state.assets,
    });
    Html(html).into_response()
}

async fn robots_txt(State(state): State<AppState>) -> Response {
    let path = state.config.static_dir.join("robots.txt");
    match tokio::fs::read_to_string(&path).await {
        Ok(body) => text_response(StatusCode::OK, body),
        Err(err) => {
            error!(path = %path.display(), error = %err, "robots.txt unavailable");
            text_response(StatusCode::NOT_FOUND, "Not Found".to_string())
        }
    }
}

async fn health() -> Response {
    json_response(api::health_payload())
}

async fn units(State(state): State<AppState>) -> Response {
    match state.units.load_units() {
        Ok(data) => json_response(api::units_payload(&data)),
        Err(err) => {
            error!(error = %err, "unit data unavailable");
            error_response(StatusCode::SERVICE_UNAVAILABLE, &err.to_string())
        }
    }
}

async fn not_found() -> Response {
    text_response(StatusCode::NOT_FOUND, "Not Found".to_string())
}

fn load_units_or_empty(state: &AppState) -> Arc<UnitsData> {
    state.units.load_units().unwrap_or_else(|err| {
        error!(error = %err, "error loading units");
        Arc::new(UnitsData::empty())
    })
}

fn json_response(payload: Result<String, serde_json::Error>) -> Response {
    match payload {
        Ok(body) => (
            StatusCode::OK,
            [(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
            body,
        )
            .into_response(),
        Err(err) => error_response(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string()),
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        [(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
        api::error_payload(message),
    )
        .into_response()
}

fn text_response(status: StatusCode, body: String) -> Response {
    (
        status,
        [(CONTENT_TYPE, HeaderValue::from_static(TEXT_CONTENT_TYPE))],
        body,
    )
        .into_response()
}
