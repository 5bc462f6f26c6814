use std::sync::Arc;

use askama::Template;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Extension, Form, Router};
use serde::Deserialize;

use poseidon_core::curve_points::{CurvePoint, CurvePointUpdate, NewCurvePoint};
use poseidon_core::Error;

use super::forms::{self, FieldError};
use super::render;
use super::views::CurvePointView;
use crate::error::WebResult;
use crate::main_lib::AppState;
use crate::session::{Flash, SessionToken};

#[derive(Template)]
#[template(path = "curve_points/list.html")]
struct CurvePointListTemplate {
    flash: Option<Flash>,
    points: Vec<CurvePointView>,
}

#[derive(Template)]
#[template(path = "curve_points/form.html")]
struct CurvePointFormTemplate {
    heading: &'static str,
    action: String,
    form: CurvePointForm,
    errors: Vec<FieldError>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CurvePointForm {
    #[serde(rename = "curveId")]
    pub curve_id: String,
    #[serde(rename = "asOfDate")]
    pub as_of_date: String,
    pub term: String,
    pub value: String,
}

impl CurvePointForm {
    fn parse_new(&self) -> Result<NewCurvePoint, Vec<FieldError>> {
        let mut errors = Vec::new();
        let curve_id = forms::parse_required_i32(&self.curve_id, "curveId", "Curve id", &mut errors);
        let as_of_date = forms::parse_datetime(&self.as_of_date, "asOfDate", "As-of date", &mut errors);
        let term = forms::parse_non_negative_decimal(&self.term, "term", "Term", &mut errors);
        let value = forms::parse_decimal(&self.value, "value", "Value", &mut errors);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(NewCurvePoint {
            curve_id,
            as_of_date,
            term,
            value,
        })
    }

    fn parse_update(&self) -> Result<CurvePointUpdate, Vec<FieldError>> {
        self.parse_new().map(|new_point| CurvePointUpdate {
            curve_id: new_point.curve_id,
            as_of_date: new_point.as_of_date,
            term: new_point.term,
            value: new_point.value,
        })
    }

    fn from_point(point: &CurvePoint) -> Self {
        Self {
            curve_id: point.curve_id.to_string(),
            as_of_date: forms::datetime_input_value(point.as_of_date),
            term: point.term.map(|d| d.to_string()).unwrap_or_default(),
            value: point.value.map(|d| d.to_string()).unwrap_or_default(),
        }
    }
}

async fn list(
    State(state): State<Arc<AppState>>,
    Extension(SessionToken(token)): Extension<SessionToken>,
) -> WebResult<Response> {
    let points: Vec<CurvePointView> = state
        .curve_point_service
        .get_curve_points()?
        .iter()
        .map(CurvePointView::from)
        .collect();
    let flash = state.sessions.take_flash(&token);
    Ok(render(&CurvePointListTemplate { flash, points })?.into_response())
}

async fn add_form() -> WebResult<Response> {
    Ok(render(&CurvePointFormTemplate {
        heading: "Add curve point",
        action: "/curvePoint/validate".to_string(),
        form: CurvePointForm::default(),
        errors: Vec::new(),
    })?
    .into_response())
}

async fn add_submit(
    State(state): State<Arc<AppState>>,
    Extension(SessionToken(token)): Extension<SessionToken>,
    Form(form): Form<CurvePointForm>,
) -> WebResult<Response> {
    let new_point = match form.parse_new() {
        Ok(new_point) => new_point,
        Err(errors) => {
            return Ok(render(&CurvePointFormTemplate {
                heading: "Add curve point",
                action: "/curvePoint/validate".to_string(),
                form,
                errors,
            })?
            .into_response());
        }
    };
    match state.curve_point_service.create_curve_point(new_point).await {
        Ok(_) => {
            state
                .sessions
                .set_flash(&token, Flash::success("Curve point created"));
            Ok(Redirect::to("/curvePoint/list").into_response())
        }
        Err(Error::Validation(e)) => Ok(render(&CurvePointFormTemplate {
            heading: "Add curve point",
            action: "/curvePoint/validate".to_string(),
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
    match state.curve_point_service.get_curve_point(&id) {
        Ok(point) => Ok(render(&CurvePointFormTemplate {
            heading: "Update curve point",
            action: format!("/curvePoint/update/{}", id),
            form: CurvePointForm::from_point(&point),
            errors: Vec::new(),
        })?
        .into_response()),
        Err(e) if e.is_not_found() => {
            state
                .sessions
                .set_flash(&token, Flash::error("Curve point not found"));
            Ok(Redirect::to("/curvePoint/list").into_response())
        }
        Err(e) => Err(e.into()),
    }
}

async fn update_submit(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(SessionToken(token)): Extension<SessionToken>,
    Form(form): Form<CurvePointForm>,
) -> WebResult<Response> {
    let update = match form.parse_update() {
        Ok(update) => update,
        Err(errors) => {
            return Ok(render(&CurvePointFormTemplate {
                heading: "Update curve point",
                action: format!("/curvePoint/update/{}", id),
                form,
                errors,
            })?
            .into_response());
        }
    };
    match state.curve_point_service.update_curve_point(&id, update).await {
        Ok(_) => {
            state
                .sessions
                .set_flash(&token, Flash::success("Curve point updated"));
            Ok(Redirect::to("/curvePoint/list").into_response())
        }
        Err(e) if e.is_not_found() => {
            state
                .sessions
                .set_flash(&token, Flash::error("Curve point not found"));
            Ok(Redirect::to("/curvePoint/list").into_response())
        }
        Err(e) => Err(e.into()),
    }
}

async fn delete(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(SessionToken(token)): Extension<SessionToken>,
) -> WebResult<Response> {
    match state.curve_point_service.delete_curve_point(&id).await {
        Ok(()) => {
            state
                .sessions
                .set_flash(&token, Flash::success("Curve point deleted"));
            Ok(Redirect::to("/curvePoint/list").into_response())
        }
        Err(e) if e.is_not_found() => {
            state
                .sessions
                .set_flash(&token, Flash::error("Curve point not found"));
            Ok(Redirect::to("/curvePoint/list").into_response())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/curvePoint/list", get(list))
        .route("/curvePoint/add", get(add_form))
        .route("/curvePoint/validate", post(add_submit))
        .route(
            "/curvePoint/update/{id}",
            get(update_form).post(update_submit),
        )
        .route("/curvePoint/delete/{id}", get(delete))
}
