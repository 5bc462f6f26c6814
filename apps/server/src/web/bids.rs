use std::sync::Arc;

use askama::Template;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Extension, Form, Router};
use serde::Deserialize;

use poseidon_core::bids::{Bid, BidUpdate, NewBid};
use poseidon_core::Error;

use super::forms::{self, FieldError};
use super::render;
use super::views::BidView;
use crate::error::WebResult;
use crate::main_lib::AppState;
use crate::session::{Flash, SessionToken};

#[derive(Template)]
#[template(path = "bids/list.html")]
struct BidListTemplate {
    flash: Option<Flash>,
    bids: Vec<BidView>,
}

#[derive(Template)]
#[template(path = "bids/form.html")]
struct BidFormTemplate {
    heading: &'static str,
    action: String,
    form: BidForm,
    errors: Vec<FieldError>,
}

/// Raw form payload; string-typed so invalid input can be re-rendered
/// verbatim.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BidForm {
    pub account: String,
    #[serde(rename = "type")]
    pub bid_type: String,
    #[serde(rename = "bidQuantity")]
    pub bid_quantity: String,
    #[serde(rename = "askQuantity")]
    pub ask_quantity: String,
    pub bid: String,
    pub ask: String,
    pub benchmark: String,
    pub commentary: String,
}

impl BidForm {
    fn parse_new(&self) -> Result<NewBid, Vec<FieldError>> {
        let mut errors = Vec::new();
        let account = forms::require_text(&self.account, "account", "Account", &mut errors);
        let bid_type = forms::require_text(&self.bid_type, "type", "Type", &mut errors);
        let bid_quantity = forms::parse_non_negative_decimal(
            &self.bid_quantity,
            "bidQuantity",
            "Bid quantity",
            &mut errors,
        );
        let ask_quantity = forms::parse_non_negative_decimal(
            &self.ask_quantity,
            "askQuantity",
            "Ask quantity",
            &mut errors,
        );
        let bid = forms::parse_non_negative_decimal(&self.bid, "bid", "Bid", &mut errors);
        let ask = forms::parse_non_negative_decimal(&self.ask, "ask", "Ask", &mut errors);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(NewBid {
            account,
            bid_type,
            bid_quantity,
            ask_quantity,
            bid,
            ask,
            benchmark: forms::optional_text(&self.benchmark),
            commentary: forms::optional_text(&self.commentary),
        })
    }

    fn parse_update(&self) -> Result<BidUpdate, Vec<FieldError>> {
        self.parse_new().map(|new_bid| BidUpdate {
            account: new_bid.account,
            bid_type: new_bid.bid_type,
            bid_quantity: new_bid.bid_quantity,
            ask_quantity: new_bid.ask_quantity,
            bid: new_bid.bid,
            ask: new_bid.ask,
            benchmark: new_bid.benchmark,
            commentary: new_bid.commentary,
        })
    }

    fn from_bid(bid: &Bid) -> Self {
        Self {
            account: bid.account.clone(),
            bid_type: bid.bid_type.clone(),
            bid_quantity: bid.bid_quantity.map(|d| d.to_string()).unwrap_or_default(),
            ask_quantity: bid.ask_quantity.map(|d| d.to_string()).unwrap_or_default(),
            bid: bid.bid.map(|d| d.to_string()).unwrap_or_default(),
            ask: bid.ask.map(|d| d.to_string()).unwrap_or_default(),
            benchmark: bid.benchmark.clone().unwrap_or_default(),
            commentary: bid.commentary.clone().unwrap_or_default(),
        }
    }
}

async fn list(
    State(state): State<Arc<AppState>>,
    Extension(SessionToken(token)): Extension<SessionToken>,
) -> WebResult<Response> {
    let bids: Vec<BidView> = state.bid_service.get_bids()?.iter().map(BidView::from).collect();
    let flash = state.sessions.take_flash(&token);
    Ok(render(&BidListTemplate { flash, bids })?.into_response())
}

async fn add_form() -> WebResult<Response> {
    Ok(render(&BidFormTemplate {
        heading: "Add bid",
        action: "/bid/validate".to_string(),
        form: BidForm::default(),
        errors: Vec::new(),
    })?
    .into_response())
}

async fn add_submit(
    State(state): State<Arc<AppState>>,
    Extension(SessionToken(token)): Extension<SessionToken>,
    Form(form): Form<BidForm>,
) -> WebResult<Response> {
    let new_bid = match form.parse_new() {
        Ok(new_bid) => new_bid,
        Err(errors) => {
            return Ok(render(&BidFormTemplate {
                heading: "Add bid",
                action: "/bid/validate".to_string(),
                form,
                errors,
            })?
            .into_response());
        }
    };
    match state.bid_service.create_bid(new_bid).await {
        Ok(_) => {
            state
                .sessions
                .set_flash(&token, Flash::success("Bid created"));
            Ok(Redirect::to("/bid/list").into_response())
        }
        Err(Error::Validation(e)) => Ok(render(&BidFormTemplate {
            heading: "Add bid",
            action: "/bid/validate".to_string(),
            form,
            errors: vec![FieldError::new("", e.to_string())],
        })?
        .into_response()),
        Err(e) => Err(e.into()),
    }
}

async fn update_form(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(SessionToken(token)): Extension<SessionToken>,
) -> WebResult<Response> {
    match state.bid_service.get_bid(&id) {
        Ok(bid) => Ok(render(&BidFormTemplate {
            heading: "Update bid",
            action: format!("/bid/update/{}", id),
            form: BidForm::from_bid(&bid),
            errors: Vec::new(),
        })?
        .into_response()),
        Err(e) if e.is_not_found() => {
            state
                .sessions
                .set_flash(&token, Flash::error("Bid not found"));
            Ok(Redirect::to("/bid/list").into_response())
        }
        Err(e) => Err(e.into()),
    }
}

async fn update_submit(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(SessionToken(token)): Extension<SessionToken>,
    Form(form): Form<BidForm>,
) -> WebResult<Response> {
    let update = match form.parse_update() {
        Ok(update) => update,
        Err(errors) => {
            return Ok(render(&BidFormTemplate {
                heading: "Update bid",
                action: format!("/bid/update/{}", id),
                form,
                errors,
            })?
            .into_response());
        }
    };
    match state.bid_service.update_bid(&id, update).await {
        Ok(_) => {
            state
                .sessions
                .set_flash(&token, Flash::success("Bid updated"));
            Ok(Redirect::to("/bid/list").into_response())
        }
        Err(e) if e.is_not_found() => {
            state
                .sessions
                .set_flash(&token, Flash::error("Bid not found"));
            Ok(Redirect::to("/bid/list").into_response())
        }
        Err(e) => Err(e.into()),
    }
}

async fn delete(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(SessionToken(token)): Extension<SessionToken>,
) -> WebResult<Response> {
    match state.bid_service.delete_bid(&id).await {
        Ok(()) => {
            state
                .sessions
                .set_flash(&token, Flash::success("Bid deleted"));
            Ok(Redirect::to("/bid/list").into_response())
        }
        Err(e) if e.is_not_found() => {
            state
                .sessions
                .set_flash(&token, Flash::error("Bid not found"));
            Ok(Redirect::to("/bid/list").into_response())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/bid/list", get(list))
        .route("/bid/add", get(add_form))
        .route("/bid/validate", post(add_submit))
        .route("/bid/update/{id}", get(update_form).post(update_submit))
        .route("/bid/delete/{id}", get(delete))
}
