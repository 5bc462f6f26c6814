use std::sync::Arc;

use askama::Template;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Extension, Form, Router};
use serde::Deserialize;

use poseidon_core::trades::{NewTrade, Trade, TradeUpdate};
use poseidon_core::Error;

use super::forms::{self, FieldError};
use super::render;
use super::views::TradeView;
use crate::error::WebResult;
use crate::main_lib::AppState;
use crate::session::{Flash, SessionToken};

#[derive(Template)]
#[template(path = "trades/list.html")]
struct TradeListTemplate {
    flash: Option<Flash>,
    trades: Vec<TradeView>,
}

#[derive(Template)]
#[template(path = "trades/form.html")]
struct TradeFormTemplate {
    heading: &'static str,
    action: String,
    form: TradeForm,
    errors: Vec<FieldError>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TradeForm {
    pub account: String,
    #[serde(rename = "type")]
    pub trade_type: String,
    #[serde(rename = "buyQuantity")]
    pub buy_quantity: String,
    #[serde(rename = "sellQuantity")]
    pub sell_quantity: String,
    #[serde(rename = "buyPrice")]
    pub buy_price: String,
    #[serde(rename = "sellPrice")]
    pub sell_price: String,
    pub benchmark: String,
    #[serde(rename = "tradeDate")]
    pub trade_date: String,
    pub security: String,
    pub status: String,
    pub trader: String,
    pub book: String,
}

impl TradeForm {
    fn parse_new(&self) -> Result<NewTrade, Vec<FieldError>> {
        let mut errors = Vec::new();
        let account = forms::require_text(&self.account, "account", "Account", &mut errors);
        let trade_type = forms::require_text(&self.trade_type, "type", "Type", &mut errors);
        let buy_quantity = forms::parse_non_negative_decimal(
            &self.buy_quantity,
            "buyQuantity",
            "Buy quantity",
            &mut errors,
        );
        let sell_quantity = forms::parse_non_negative_decimal(
            &self.sell_quantity,
            "sellQuantity",
            "Sell quantity",
            &mut errors,
        );
        let buy_price =
            forms::parse_non_negative_decimal(&self.buy_price, "buyPrice", "Buy price", &mut errors);
        let sell_price = forms::parse_non_negative_decimal(
            &self.sell_price,
            "sellPrice",
            "Sell price",
            &mut errors,
        );
        let trade_date =
            forms::parse_datetime(&self.trade_date, "tradeDate", "Trade date", &mut errors);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(NewTrade {
            account,
            trade_type,
            buy_quantity,
            sell_quantity,
            buy_price,
            sell_price,
            benchmark: forms::optional_text(&self.benchmark),
            trade_date,
            security: forms::optional_text(&self.security),
            status: forms::optional_text(&self.status),
            trader: forms::optional_text(&self.trader),
            book: forms::optional_text(&self.book),
        })
    }

    fn parse_update(&self) -> Result<TradeUpdate, Vec<FieldError>> {
        self.parse_new().map(|new_trade| TradeUpdate {
            account: new_trade.account,
            trade_type: new_trade.trade_type,
            buy_quantity: new_trade.buy_quantity,
            sell_quantity: new_trade.sell_quantity,
            buy_price: new_trade.buy_price,
            sell_price: new_trade.sell_price,
            benchmark: new_trade.benchmark,
            trade_date: new_trade.trade_date,
            security: new_trade.security,
            status: new_trade.status,
            trader: new_trade.trader,
            book: new_trade.book,
        })
    }

    fn from_trade(trade: &Trade) -> Self {
        Self {
            account: trade.account.clone(),
            trade_type: trade.trade_type.clone(),
            buy_quantity: trade.buy_quantity.map(|d| d.to_string()).unwrap_or_default(),
            sell_quantity: trade
                .sell_quantity
                .map(|d| d.to_string())
                .unwrap_or_default(),
            buy_price: trade.buy_price.map(|d| d.to_string()).unwrap_or_default(),
            sell_price: trade.sell_price.map(|d| d.to_string()).unwrap_or_default(),
            benchmark: trade.benchmark.clone().unwrap_or_default(),
            trade_date: forms::datetime_input_value(trade.trade_date),
            security: trade.security.clone().unwrap_or_default(),
            status: trade.status.clone().unwrap_or_default(),
            trader: trade.trader.clone().unwrap_or_default(),
            book: trade.book.clone().unwrap_or_default(),
        }
    }
}

async fn list(
    State(state): State<Arc<AppState>>,
    Extension(SessionToken(token)): Extension<SessionToken>,
) -> WebResult<Response> {
    let trades: Vec<TradeView> = state
        .trade_service
        .get_trades()?
        .iter()
        .map(TradeView::from)
        .collect();
    let flash = state.sessions.take_flash(&token);
    Ok(render(&TradeListTemplate { flash, trades })?.into_response())
}

async fn add_form() -> WebResult<Response> {
    Ok(render(&TradeFormTemplate {
        heading: "Add trade",
        action: "/trade/validate".to_string(),
        form: TradeForm::default(),
        errors: Vec::new(),
    })?
    .into_response())
}

async fn add_submit(
    State(state): State<Arc<AppState>>,
    Extension(SessionToken(token)): Extension<SessionToken>,
    Form(form): Form<TradeForm>,
) -> WebResult<Response> {
    let new_trade = match form.parse_new() {
        Ok(new_trade) => new_trade,
        Err(errors) => {
            return Ok(render(&TradeFormTemplate {
                heading: "Add trade",
                action: "/trade/validate".to_string(),
                form,
                errors,
            })?
            .into_response());
        }
    };
    match state.trade_service.create_trade(new_trade).await {
        Ok(_) => {
            state
                .sessions
                .set_flash(&token, Flash::success("Trade created"));
            Ok(Redirect::to("/trade/list").into_response())
        }
        Err(Error::Validation(e)) => Ok(render(&TradeFormTemplate {
            heading: "Add trade",
            action: "/trade/validate".to_string(),
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
    match state.trade_service.get_trade(&id) {
        Ok(trade) => Ok(render(&TradeFormTemplate {
            heading: "Update trade",
            action: format!("/trade/update/{}", id),
            form: TradeForm::from_trade(&trade),
            errors: Vec::new(),
        })?
        .into_response()),
        Err(e) if e.is_not_found() => {
            state
                .sessions
                .set_flash(&token, Flash::error("Trade not found"));
            Ok(Redirect::to("/trade/list").into_response())
        }
        Err(e) => Err(e.into()),
    }
}

async fn update_submit(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(SessionToken(token)): Extension<SessionToken>,
    Form(form): Form<TradeForm>,
) -> WebResult<Response> {
    let update = match form.parse_update() {
        Ok(update) => update,
        Err(errors) => {
            return Ok(render(&TradeFormTemplate {
                heading: "Update trade",
                action: format!("/trade/update/{}", id),
                form,
                errors,
            })?
            .into_response());
        }
    };
    match state.trade_service.update_trade(&id, update).await {
        Ok(_) => {
            state
                .sessions
                .set_flash(&token, Flash::success("Trade updated"));
            Ok(Redirect::to("/trade/list").into_response())
        }
        Err(e) if e.is_not_found() => {
            state
                .sessions
                .set_flash(&token, Flash::error("Trade not found"));
            Ok(Redirect::to("/trade/list").into_response())
        }
        Err(e) => Err(e.into()),
    }
}

async fn delete(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(SessionToken(token)): Extension<SessionToken>,
) -> WebResult<Response> {
    match state.trade_service.delete_trade(&id).await {
        Ok(()) => {
            state
                .sessions
                .set_flash(&token, Flash::success("Trade deleted"));
            Ok(Redirect::to("/trade/list").into_response())
        }
        Err(e) if e.is_not_found() => {
            state
                .sessions
                .set_flash(&token, Flash::error("Trade not found"));
            Ok(Redirect::to("/trade/list").into_response())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/trade/list", get(list))
        .route("/trade/add", get(add_form))
        .route("/trade/validate", post(add_submit))
        .route("/trade/update/{id}", get(update_form).post(update_submit))
        .route("/trade/delete/{id}", get(delete))
}
