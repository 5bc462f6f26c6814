//! Rule name domain models.

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Domain model representing a named rule definition.
///
/// The json/template/sql fields are opaque rule payloads; they are stored
/// and displayed verbatim, never interpreted by this application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RuleName {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub json: Option<String>,
    pub template: Option<String>,
    pub sql_str: Option<String>,
    pub sql_part: Option<String>,
}

/// Input model for creating a new rule name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRuleName {
    pub name: String,
    pub description: Option<String>,
    pub json: Option<String>,
    pub template: Option<String>,
    pub sql_str: Option<String>,
    pub sql_part: Option<String>,
}

impl NewRuleName {
    pub fn validate(&self) -> Result<()> {
        validate_rule_name(&self.name)
    }
}

/// Input model for updating an existing rule name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleNameUpdate {
    pub name: String,
    pub description: Option<String>,
    pub json: Option<String>,
    pub template: Option<String>,
    pub sql_str: Option<String>,
    pub sql_part: Option<String>,
}

impl RuleNameUpdate {
    pub fn validate(&self) -> Result<()> {
        validate_rule_name(&self.name)
    }
}

fn validate_rule_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "name".to_string(),
        )));
    }
    Ok(())
}
