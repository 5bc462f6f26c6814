use std::sync::Arc;

use askama::Template;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Extension, Form, Router};
use serde::Deserialize;

use poseidon_core::ratings::{NewRating, Rating, RatingUpdate};
use poseidon_core::Error;

use super::forms::{self, FieldError};
use super::render;
use super::views::RatingView;
use crate::error::WebResult;
use crate::main_lib::AppState;
use crate::session::{Flash, SessionToken};

#[derive(Template)]
#[template(path = "ratings/list.html")]
struct RatingListTemplate {
    flash: Option<Flash>,
    ratings: Vec<RatingView>,
}

#[derive(Template)]
#[template(path = "ratings/form.html")]
struct RatingFormTemplate {
    heading: &'static str,
    action: String,
    form: RatingForm,
    errors: Vec<FieldError>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RatingForm {
    #[serde(rename = "moodysRating")]
    pub moodys_rating: String,
    #[serde(rename = "sandPRating")]
    pub sandp_rating: String,
    #[serde(rename = "fitchRating")]
    pub fitch_rating: String,
    #[serde(rename = "orderNumber")]
    pub order_number: String,
}

impl RatingForm {
    fn parse_new(&self) -> Result<NewRating, Vec<FieldError>> {
        let mut errors = Vec::new();
        let moodys_rating =
            forms::require_text(&self.moodys_rating, "moodysRating", "Moody's rating", &mut errors);
        let sandp_rating =
            forms::require_text(&self.sandp_rating, "sandPRating", "S&P rating", &mut errors);
        let fitch_rating =
            forms::require_text(&self.fitch_rating, "fitchRating", "Fitch rating", &mut errors);
        let order_number =
            forms::parse_required_i32(&self.order_number, "orderNumber", "Order number", &mut errors);
        if order_number < 0 {
            errors.push(FieldError::new(
                "orderNumber",
                "Order number cannot be negative",
            ));
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(NewRating {
            moodys_rating,
            sandp_rating,
            fitch_rating,
            order_number,
        })
    }

    fn parse_update(&self) -> Result<RatingUpdate, Vec<FieldError>> {
        self.parse_new().map(|new_rating| RatingUpdate {
            moodys_rating: new_rating.moodys_rating,
            sandp_rating: new_rating.sandp_rating,
            fitch_rating: new_rating.fitch_rating,
            order_number: new_rating.order_number,
        })
    }

    fn from_rating(rating: &Rating) -> Self {
        Self {
            moodys_rating: rating.moodys_rating.clone(),
            sandp_rating: rating.sandp_rating.clone(),
            fitch_rating: rating.fitch_rating.clone(),
            order_number: rating.order_number.to_string(),
        }
    }
}

async fn list(
    State(state): State<Arc<AppState>>,
    Extension(SessionToken(token)): Extension<SessionToken>,
) -> WebResult<Response> {
    let ratings: Vec<RatingView> = state
        .rating_service
        .get_ratings()?
        .iter()
        .map(RatingView::from)
        .collect();
    let flash = state.sessions.take_flash(&token);
    Ok(render(&RatingListTemplate { flash, ratings })?.into_response())
}

async fn add_form() -> WebResult<Response> {
    Ok(render(&RatingFormTemplate {
        heading: "Add rating",
        action: "/rating/validate".to_string(),
        form: RatingForm::default(),
        errors: Vec::new(),
    })?
    .into_response())
}

async fn add_submit(
    State(state): State<Arc<AppState>>,
    Extension(SessionToken(token)): Extension<SessionToken>,
    Form(form): Form<RatingForm>,
) -> WebResult<Response> {
    let new_rating = match form.parse_new() {
        Ok(new_rating) => new_rating,
        Err(errors) => {
            return Ok(render(&RatingFormTemplate {
                heading: "Add rating",
                action: "/rating/validate".to_string(),
                form,
                errors,
            })?
            .into_response());
        }
    };
    match state.rating_service.create_rating(new_rating).await {
        Ok(_) => {
            state
                .sessions
                .set_flash(&token, Flash::success("Rating created"));
            Ok(Redirect::to("/rating/list").into_response())
        }
        Err(Error::Validation(e)) => Ok(render(&RatingFormTemplate {
            heading: "Add rating",
            action: "/rating/validate".to_string(),
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
    match state.rating_service.get_rating(&id) {
        Ok(rating) => Ok(render(&RatingFormTemplate {
            heading: "Update rating",
            action: format!("/rating/update/{}", id),
            form: RatingForm::from_rating(&rating),
            errors: Vec::new(),
        })?
        .into_response()),
        Err(e) if e.is_not_found() => {
            state
                .sessions
                .set_flash(&token, Flash::error("Rating not found"));
            Ok(Redirect::to("/rating/list").into_response())
        }
        Err(e) => Err(e.into()),
    }
}

async fn update_submit(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(SessionToken(token)): Extension<SessionToken>,
    Form(form): Form<RatingForm>,
) -> WebResult<Response> {
    let update = match form.parse_update() {
        Ok(update) => update,
        Err(errors) => {
            return Ok(render(&RatingFormTemplate {
                heading: "Update rating",
                action: format!("/rating/update/{}", id),
                form,
                errors,
            })?
            .into_response());
        }
    };
    match state.rating_service.update_rating(&id, update).await {
        Ok(_) => {
            state
                .sessions
                .set_flash(&token, Flash::success("Rating updated"));
            Ok(Redirect::to("/rating/list").into_response())
        }
        Err(e) if e.is_not_found() => {
            state
                .sessions
                .set_flash(&token, Flash::error("Rating not found"));
            Ok(Redirect::to("/rating/list").into_response())
        }
        Err(e) => Err(e.into()),
    }
}

async fn delete(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(SessionToken(token)): Extension<SessionToken>,
) -> WebResult<Response> {
    match state.rating_service.delete_rating(&id).await {
        Ok(()) => {
            state
                .sessions
                .set_flash(&token, Flash::success("Rating deleted"));
            Ok(Redirect::to("/rating/list").into_response())
        }
        Err(e) if e.is_not_found() => {
            state
                .sessions
                .set_flash(&token, Flash::error("Rating not found"));
            Ok(Redirect::to("/rating/list").into_response())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/rating/list", get(list))
        .route("/rating/add", get(add_form))
        .route("/rating/validate", post(add_submit))
        .route("/rating/update/{id}", get(update_form).post(update_submit))
        .route("/rating/delete/{id}", get(delete))
}
