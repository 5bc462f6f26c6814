//! Database models for curve points.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use poseidon_core::curve_points::{CurvePoint, CurvePointUpdate, NewCurvePoint};

use crate::utils::{opt_decimal_to_string, parse_opt_decimal};

/// Database model for curve points
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::curve_points)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct CurvePointDB {
    pub id: String,
    pub curve_id: i32,
    pub as_of_date: Option<NaiveDateTime>,
    pub term: Option<String>,
    pub value: Option<String>,
    pub creation_date: NaiveDateTime,
}

/// Changeset applied on update. creation_date is set once at insert and
/// never written again.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::curve_points)]
#[diesel(treat_none_as_null = true)]
pub struct CurvePointChangesetDB {
    pub curve_id: i32,
    pub as_of_date: Option<NaiveDateTime>,
    pub term: Option<String>,
    pub value: Option<String>,
}

impl CurvePointDB {
    pub fn from_new(new_point: NewCurvePoint, id: String, now: NaiveDateTime) -> Self {
        Self {
            id,
            curve_id: new_point.curve_id,
            as_of_date: new_point.as_of_date,
            term: opt_decimal_to_string(new_point.term),
            value: opt_decimal_to_string(new_point.value),
            creation_date: now,
        }
    }
}

impl From<CurvePointUpdate> for CurvePointChangesetDB {
    fn from(update: CurvePointUpdate) -> Self {
        Self {
            curve_id: update.curve_id,
            as_of_date: update.as_of_date,
            term: opt_decimal_to_string(update.term),
            value: opt_decimal_to_string(update.value),
        }
    }
}

// Conversion to the domain model
impl From<CurvePointDB> for CurvePoint {
    fn from(db: CurvePointDB) -> Self {
        Self {
            id: db.id,
            curve_id: db.curve_id,
            as_of_date: db.as_of_date,
            term: parse_opt_decimal(db.term, "term"),
            value: parse_opt_decimal(db.value, "value"),
            creation_date: db.creation_date,
        }
    }
}
