//! Bid domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Domain model representing a bid list entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    pub id: String,
    pub account: String,
    pub bid_type: String,
    pub bid_quantity: Option<Decimal>,
    pub ask_quantity: Option<Decimal>,
    pub bid: Option<Decimal>,
    pub ask: Option<Decimal>,
    pub benchmark: Option<String>,
    pub commentary: Option<String>,
    /// Audit timestamp, set once at insert.
    pub creation_date: NaiveDateTime,
    /// Stamped on every update.
    pub revision_date: Option<NaiveDateTime>,
}

/// Input model for creating a new bid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBid {
    pub account: String,
    pub bid_type: String,
    pub bid_quantity: Option<Decimal>,
    pub ask_quantity: Option<Decimal>,
    pub bid: Option<Decimal>,
    pub ask: Option<Decimal>,
    pub benchmark: Option<String>,
    pub commentary: Option<String>,
}

impl NewBid {
    /// Validates the new bid data.
    pub fn validate(&self) -> Result<()> {
        validate_bid_fields(
            &self.account,
            &self.bid_type,
            &[
                ("Bid quantity", self.bid_quantity),
                ("Ask quantity", self.ask_quantity),
                ("Bid", self.bid),
                ("Ask", self.ask),
            ],
        )
    }
}

/// Input model for updating an existing bid.
///
/// Every mutable field is overwritten; id and creation date never change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidUpdate {
    pub account: String,
    pub bid_type: String,
    pub bid_quantity: Option<Decimal>,
    pub ask_quantity: Option<Decimal>,
    pub bid: Option<Decimal>,
    pub ask: Option<Decimal>,
    pub benchmark: Option<String>,
    pub commentary: Option<String>,
}

impl BidUpdate {
    /// Validates the updated bid data.
    pub fn validate(&self) -> Result<()> {
        validate_bid_fields(
            &self.account,
            &self.bid_type,
            &[
                ("Bid quantity", self.bid_quantity),
                ("Ask quantity", self.ask_quantity),
                ("Bid", self.bid),
                ("Ask", self.ask),
            ],
        )
    }
}

fn validate_bid_fields(
    account: &str,
    bid_type: &str,
    amounts: &[(&str, Option<Decimal>)],
) -> Result<()> {
    if account.trim().is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "account".to_string(),
        )));
    }
    if bid_type.trim().is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "type".to_string(),
        )));
    }
    for (name, amount) in amounts {
        if let Some(value) = amount {
            if value.is_sign_negative() {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "{} cannot be negative",
                    name
                ))));
            }
        }
    }
    Ok(())
}
