//! HTTP handlers and view models, one module per entity.

pub mod auth;
pub mod bids;
pub mod curve_points;
pub mod forms;
pub mod ratings;
pub mod rule_names;
pub mod trades;
pub mod views;

use std::sync::Arc;

use askama::Template;
use axum::http::HeaderValue;
use axum::middleware;
use axum::response::{Html, Redirect};
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::error::WebResult;
use crate::main_lib::AppState;
use crate::session;

pub(crate) fn render<T: Template>(template: &T) -> WebResult<Html<String>> {
    Ok(Html(template.render()?))
}

pub fn app_router(state: Arc<AppState>) -> Router {
    let protected = Router::new()
        .route("/", get(|| async { Redirect::to("/bid/list") }))
        .merge(bids::router())
        .merge(curve_points::router())
        .merge(ratings::router())
        .merge(trades::router())
        .merge(rule_names::router())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            session::require_auth,
        ));

    Router::new()
        .merge(protected)
        .merge(auth::router())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session::session_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::map_response(
            |mut response: axum::response::Response| async move {
                // Rendered pages carry one-shot flash banners and must not
                // be cached.
                response
                    .headers_mut()
                    .insert("cache-control", HeaderValue::from_static("no-store"));
                response
            },
        ))
        .with_state(state)
}
