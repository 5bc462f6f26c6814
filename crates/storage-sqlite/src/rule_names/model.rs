//! Database models for rule names.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use poseidon_core::rule_names::{NewRuleName, RuleName, RuleNameUpdate};

/// Database model for rule names
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::rule_names)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct RuleNameDB {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub json: Option<String>,
    pub template: Option<String>,
    pub sql_str: Option<String>,
    pub sql_part: Option<String>,
}

/// Changeset applied on update.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::rule_names)]
#[diesel(treat_none_as_null = true)]
pub struct RuleNameChangesetDB {
    pub name: String,
    pub description: Option<String>,
    pub json: Option<String>,
    pub template: Option<String>,
    pub sql_str: Option<String>,
    pub sql_part: Option<String>,
}

impl RuleNameDB {
    pub fn from_new(new_rule: NewRuleName, id: String) -> Self {
        Self {
            id,
            name: new_rule.name,
            description: new_rule.description,
            json: new_rule.json,
            template: new_rule.template,
            sql_str: new_rule.sql_str,
            sql_part: new_rule.sql_part,
        }
    }
}

impl From<RuleNameUpdate> for RuleNameChangesetDB {
    fn from(update: RuleNameUpdate) -> Self {
        Self {
            name: update.name,
            description: update.description,
            json: update.json,
            template: update.template,
            sql_str: update.sql_str,
            sql_part: update.sql_part,
        }
    }
}

// Conversion to the domain model
impl From<RuleNameDB> for RuleName {
    fn from(db: RuleNameDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            description: db.description,
            json: db.json,
            template: db.template,
            sql_str: db.sql_str,
            sql_part: db.sql_part,
        }
    }
}
