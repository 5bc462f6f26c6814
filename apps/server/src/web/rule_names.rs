use std::sync::Arc;

use askama::Template;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Extension, Form, Router};
use serde::Deserialize;

use poseidon_core::rule_names::{NewRuleName, RuleName, RuleNameUpdate};
use poseidon_core::Error;

use super::forms::{self, FieldError};
use super::render;
use super::views::RuleNameView;
use crate::error::WebResult;
use crate::main_lib::AppState;
use crate::session::{Flash, SessionToken};

#[derive(Template)]
#[template(path = "rule_names/list.html")]
struct RuleNameListTemplate {
    flash: Option<Flash>,
    rules: Vec<RuleNameView>,
}

#[derive(Template)]
#[template(path = "rule_names/form.html")]
struct RuleNameFormTemplate {
    heading: &'static str,
    action: String,
    form: RuleNameForm,
    errors: Vec<FieldError>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RuleNameForm {
    pub name: String,
    pub description: String,
    pub json: String,
    pub template: String,
    #[serde(rename = "sqlStr")]
    pub sql_str: String,
    #[serde(rename = "sqlPart")]
    pub sql_part: String,
}

impl RuleNameForm {
    fn parse_new(&self) -> Result<NewRuleName, Vec<FieldError>> {
        let mut errors = Vec::new();
        let name = forms::require_text(&self.name, "name", "Name", &mut errors);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(NewRuleName {
            name,
            description: forms::optional_text(&self.description),
            json: forms::optional_text(&self.json),
            template: forms::optional_text(&self.template),
            sql_str: forms::optional_text(&self.sql_str),
            sql_part: forms::optional_text(&self.sql_part),
        })
    }

    fn parse_update(&self) -> Result<RuleNameUpdate, Vec<FieldError>> {
        self.parse_new().map(|new_rule| RuleNameUpdate {
            name: new_rule.name,
            description: new_rule.description,
            json: new_rule.json,
            template: new_rule.template,
            sql_str: new_rule.sql_str,
            sql_part: new_rule.sql_part,
        })
    }

    fn from_rule(rule: &RuleName) -> Self {
        Self {
            name: rule.name.clone(),
            description: rule.description.clone().unwrap_or_default(),
            json: rule.json.clone().unwrap_or_default(),
            template: rule.template.clone().unwrap_or_default(),
            sql_str: rule.sql_str.clone().unwrap_or_default(),
            sql_part: rule.sql_part.clone().unwrap_or_default(),
        }
    }
}

async fn list(
    State(state): State<Arc<AppState>>,
    Extension(SessionToken(token)): Extension<SessionToken>,
) -> WebResult<Response> {
    let rules: Vec<RuleNameView> = state
        .rule_name_service
        .get_rule_names()?
        .iter()
        .map(RuleNameView::from)
        .collect();
    let flash = state.sessions.take_flash(&token);
    Ok(render(&RuleNameListTemplate { flash, rules })?.into_response())
}

async fn add_form() -> WebResult<Response> {
    Ok(render(&RuleNameFormTemplate {
        heading: "Add rule",
        action: "/ruleName/validate".to_string(),
        form: RuleNameForm::default(),
        errors: Vec::new(),
    })?
    .into_response())
}

async fn add_submit(
    State(state): State<Arc<AppState>>,
    Extension(SessionToken(token)): Extension<SessionToken>,
    Form(form): Form<RuleNameForm>,
) -> WebResult<Response> {
    let new_rule = match form.parse_new() {
        Ok(new_rule) => new_rule,
        Err(errors) => {
            return Ok(render(&RuleNameFormTemplate {
                heading: "Add rule",
                action: "/ruleName/validate".to_string(),
                form,
                errors,
            })?
            .into_response());
        }
    };
    match state.rule_name_service.create_rule_name(new_rule).await {
        Ok(_) => {
            state
                .sessions
                .set_flash(&token, Flash::success("Rule created"));
            Ok(Redirect::to("/ruleName/list").into_response())
        }
        Err(Error::Validation(e)) => Ok(render(&RuleNameFormTemplate {
            heading: "Add rule",
            action: "/ruleName/validate".to_string(),
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
    match state.rule_name_service.get_rule_name(&id) {
        Ok(rule) => Ok(render(&RuleNameFormTemplate {
            heading: "Update rule",
            action: format!("/ruleName/update/{}", id),
            form: RuleNameForm::from_rule(&rule),
            errors: Vec::new(),
        })?
        .into_response()),
        Err(e) if e.is_not_found() => {
            state
                .sessions
                .set_flash(&token, Flash::error("Rule not found"));
            Ok(Redirect::to("/ruleName/list").into_response())
        }
        Err(e) => Err(e.into()),
    }
}

async fn update_submit(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(SessionToken(token)): Extension<SessionToken>,
    Form(form): Form<RuleNameForm>,
) -> WebResult<Response> {
    let update = match form.parse_update() {
        Ok(update) => update,
        Err(errors) => {
            return Ok(render(&RuleNameFormTemplate {
                heading: "Update rule",
                action: format!("/ruleName/update/{}", id),
                form,
                errors,
            })?
            .into_response());
        }
    };
    match state.rule_name_service.update_rule_name(&id, update).await {
        Ok(_) => {
            state
                .sessions
                .set_flash(&token, Flash::success("Rule updated"));
            Ok(Redirect::to("/ruleName/list").into_response())
        }
        Err(e) if e.is_not_found() => {
            state
                .sessions
                .set_flash(&token, Flash::error("Rule not found"));
            Ok(Redirect::to("/ruleName/list").into_response())
        }
        Err(e) => Err(e.into()),
    }
}

async fn delete(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(SessionToken(token)): Extension<SessionToken>,
) -> WebResult<Response> {
    match state.rule_name_service.delete_rule_name(&id).await {
        Ok(()) => {
            state
                .sessions
                .set_flash(&token, Flash::success("Rule deleted"));
            Ok(Redirect::to("/ruleName/list").into_response())
        }
        Err(e) if e.is_not_found() => {
            state
                .sessions
                .set_flash(&token, Flash::error("Rule not found"));
            Ok(Redirect::to("/ruleName/list").into_response())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ruleName/list", get(list))
        .route("/ruleName/add", get(add_form))
        .route("/ruleName/validate", post(add_submit))
        .route("/ruleName/update/{id}", get(update_form).post(update_submit))
        .route("/ruleName/delete/{id}", get(delete))
}
