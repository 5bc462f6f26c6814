//! Curve point domain models.
//!
//! Points sharing a `curve_id` conceptually belong to the same term
//! structure; no aggregate object or foreign key enforces this.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Domain model representing one point on a curve.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurvePoint {
    pub id: String,
    /// Grouping key: points with the same curve id form one curve.
    pub curve_id: i32,
    /// Financial validity date. Distinct from `creation_date`, which is
    /// the audit timestamp.
    pub as_of_date: Option<NaiveDateTime>,
    pub term: Option<Decimal>,
    pub value: Option<Decimal>,
    /// Audit timestamp, set once at insert and never overwritten.
    pub creation_date: NaiveDateTime,
}

/// Input model for creating a new curve point.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCurvePoint {
    pub curve_id: i32,
    pub as_of_date: Option<NaiveDateTime>,
    pub term: Option<Decimal>,
    pub value: Option<Decimal>,
}

impl NewCurvePoint {
    pub fn validate(&self) -> Result<()> {
        validate_curve_point_fields(self.term)
    }
}

/// Input model for updating an existing curve point.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurvePointUpdate {
    pub curve_id: i32,
    pub as_of_date: Option<NaiveDateTime>,
    pub term: Option<Decimal>,
    pub value: Option<Decimal>,
}

impl CurvePointUpdate {
    pub fn validate(&self) -> Result<()> {
        validate_curve_point_fields(self.term)
    }
}

// Value is deliberately unconstrained: curve values can be negative.
fn validate_curve_point_fields(term: Option<Decimal>) -> Result<()> {
    if let Some(term) = term {
        if term.is_sign_negative() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Term cannot be negative".to_string(),
            )));
        }
    }
    Ok(())
}
