//! Login form and session lifecycle endpoints.

use std::sync::Arc;

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use askama::Template;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Extension, Form, Router};
use serde::Deserialize;

use super::render;
use crate::error::WebResult;
use crate::main_lib::AppState;
use crate::session::SessionToken;

#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate {
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    password: String,
}

async fn login_form() -> WebResult<Response> {
    Ok(render(&LoginTemplate { error: None })?.into_response())
}

async fn login_submit(
    State(state): State<Arc<AppState>>,
    Extension(SessionToken(token)): Extension<SessionToken>,
    Form(form): Form<LoginForm>,
) -> WebResult<Response> {
    let Some(hash) = state.password_hash.as_deref() else {
        // Gate is open; nothing to verify.
        return Ok(Redirect::to("/bid/list").into_response());
    };

    let parsed = PasswordHash::new(hash).map_err(|e| {
        poseidon_core::Error::Unexpected(format!("invalid password hash in configuration: {}", e))
    })?;

    if Argon2::default()
        .verify_password(form.password.as_bytes(), &parsed)
        .is_ok()
    {
        state.sessions.authenticate(&token);
        tracing::info!("login succeeded");
        Ok(Redirect::to("/bid/list").into_response())
    } else {
        tracing::warn!("login attempt with wrong password");
        Ok(render(&LoginTemplate {
            error: Some("Invalid password".to_string()),
        })?
        .into_response())
    }
}

async fn logout(
    State(state): State<Arc<AppState>>,
    Extension(SessionToken(token)): Extension<SessionToken>,
) -> Response {
    state.sessions.remove(&token);
    Redirect::to("/login").into_response()
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/login", get(login_form).post(login_submit))
        .route("/logout", post(logout))
}
