//! Cookie-backed server-side sessions.
//!
//! Every request is guaranteed a session by [`session_middleware`]; the
//! session carries the authentication flag for the login gate and the
//! one-shot flash message consumed by the next page render.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use dashmap::DashMap;
use rand::RngCore;

use crate::main_lib::AppState;

pub const SESSION_COOKIE: &str = "POSEIDON_SESSION";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

/// One-time message carried across a redirect.
#[derive(Debug, Clone)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Flash {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Flash {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == FlashKind::Error
    }
}

#[derive(Debug, Default)]
struct SessionData {
    authenticated: bool,
    flash: Option<Flash>,
}

/// In-memory session store keyed by the cookie token.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<DashMap<String, SessionData>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn new_token() -> String {
        let mut bytes = [0u8; 32];
        rand::rngs::OsRng.fill_bytes(&mut bytes);
        URL_SAFE_NO_PAD.encode(bytes)
    }

    /// Creates a fresh (unauthenticated) session and returns its token.
    pub fn create(&self) -> String {
        let token = Self::new_token();
        self.sessions.insert(token.clone(), SessionData::default());
        token
    }

    pub fn contains(&self, token: &str) -> bool {
        self.sessions.contains_key(token)
    }

    pub fn is_authenticated(&self, token: &str) -> bool {
        self.sessions
            .get(token)
            .map(|data| data.authenticated)
            .unwrap_or(false)
    }

    pub fn authenticate(&self, token: &str) {
        if let Some(mut data) = self.sessions.get_mut(token) {
            data.authenticated = true;
        }
    }

    pub fn remove(&self, token: &str) {
        self.sessions.remove(token);
    }

    pub fn set_flash(&self, token: &str, flash: Flash) {
        if let Some(mut data) = self.sessions.get_mut(token) {
            data.flash = Some(flash);
        }
    }

    /// Pops the pending flash; a flash is shown exactly once.
    pub fn take_flash(&self, token: &str) -> Option<Flash> {
        self.sessions
            .get_mut(token)
            .and_then(|mut data| data.flash.take())
    }
}

/// Request extension carrying the caller's session token.
#[derive(Clone)]
pub struct SessionToken(pub String);

fn cookie_token(req: &Request) -> Option<String> {
    let header = req.headers().get(COOKIE)?.to_str().ok()?;
    header.split(';').map(str::trim).find_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

/// Guarantees a live session for every request, setting the cookie when a
/// new one had to be created.
pub async fn session_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Response {
    let existing = cookie_token(&req).filter(|token| state.sessions.contains(token));
    let (token, is_new) = match existing {
        Some(token) => (token, false),
        None => (state.sessions.create(), true),
    };
    req.extensions_mut().insert(SessionToken(token.clone()));

    let mut response = next.run(req).await;

    if is_new {
        let cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, token);
        if let Ok(value) = cookie.parse() {
            response.headers_mut().append(SET_COOKIE, value);
        }
    }
    response
}

/// Login gate for the entity routes. Open when no password hash is
/// configured.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    if state.auth_enabled() {
        let authenticated = req
            .extensions()
            .get::<SessionToken>()
            .map(|token| state.sessions.is_authenticated(&token.0))
            .unwrap_or(false);
        if !authenticated {
            return Redirect::to("/login").into_response();
        }
    }
    next.run(req).await
}
