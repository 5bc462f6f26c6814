//! Rating domain models.

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Domain model representing a credit rating row.
///
/// The three agency labels are independent scales and are never
/// cross-validated against each other. A lower `order_number` denotes
/// better credit quality.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id: String,
    pub moodys_rating: String,
    pub sandp_rating: String,
    pub fitch_rating: String,
    pub order_number: i32,
}

/// Input model for creating a new rating.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRating {
    pub moodys_rating: String,
    pub sandp_rating: String,
    pub fitch_rating: String,
    pub order_number: i32,
}

impl NewRating {
    pub fn validate(&self) -> Result<()> {
        validate_rating_fields(
            &self.moodys_rating,
            &self.sandp_rating,
            &self.fitch_rating,
            self.order_number,
        )
    }
}

/// Input model for updating an existing rating.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingUpdate {
    pub moodys_rating: String,
    pub sandp_rating: String,
    pub fitch_rating: String,
    pub order_number: i32,
}

impl RatingUpdate {
    pub fn validate(&self) -> Result<()> {
        validate_rating_fields(
            &self.moodys_rating,
            &self.sandp_rating,
            &self.fitch_rating,
            self.order_number,
        )
    }
}

fn validate_rating_fields(
    moodys: &str,
    sandp: &str,
    fitch: &str,
    order_number: i32,
) -> Result<()> {
    for (field, label) in [
        ("moodysRating", moodys),
        ("sandPRating", sandp),
        ("fitchRating", fitch),
    ] {
        if label.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                field.to_string(),
            )));
        }
    }
    if order_number < 0 {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Order number cannot be negative".to_string(),
        )));
    }
    Ok(())
}
