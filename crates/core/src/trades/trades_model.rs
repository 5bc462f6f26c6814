//! Trade domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Domain model representing a trade record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: String,
    pub account: String,
    pub trade_type: String,
    pub buy_quantity: Option<Decimal>,
    pub sell_quantity: Option<Decimal>,
    pub buy_price: Option<Decimal>,
    pub sell_price: Option<Decimal>,
    pub benchmark: Option<String>,
    pub trade_date: Option<NaiveDateTime>,
    pub security: Option<String>,
    pub status: Option<String>,
    pub trader: Option<String>,
    pub book: Option<String>,
    /// Audit timestamp, set once at insert.
    pub creation_date: NaiveDateTime,
    /// Stamped on every update.
    pub revision_date: Option<NaiveDateTime>,
}

/// Input model for creating a new trade.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTrade {
    pub account: String,
    pub trade_type: String,
    pub buy_quantity: Option<Decimal>,
    pub sell_quantity: Option<Decimal>,
    pub buy_price: Option<Decimal>,
    pub sell_price: Option<Decimal>,
    pub benchmark: Option<String>,
    pub trade_date: Option<NaiveDateTime>,
    pub security: Option<String>,
    pub status: Option<String>,
    pub trader: Option<String>,
    pub book: Option<String>,
}

impl NewTrade {
    pub fn validate(&self) -> Result<()> {
        validate_trade_fields(
            &self.account,
            &self.trade_type,
            &[
                ("Buy quantity", self.buy_quantity),
                ("Sell quantity", self.sell_quantity),
                ("Buy price", self.buy_price),
                ("Sell price", self.sell_price),
            ],
        )
    }
}

/// Input model for updating an existing trade.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeUpdate {
    pub account: String,
    pub trade_type: String,
    pub buy_quantity: Option<Decimal>,
    pub sell_quantity: Option<Decimal>,
    pub buy_price: Option<Decimal>,
    pub sell_price: Option<Decimal>,
    pub benchmark: Option<String>,
    pub trade_date: Option<NaiveDateTime>,
    pub security: Option<String>,
    pub status: Option<String>,
    pub trader: Option<String>,
    pub book: Option<String>,
}

impl TradeUpdate {
    pub fn validate(&self) -> Result<()> {
        validate_trade_fields(
            &self.account,
            &self.trade_type,
            &[
                ("Buy quantity", self.buy_quantity),
                ("Sell quantity", self.sell_quantity),
                ("Buy price", self.buy_price),
                ("Sell price", self.sell_price),
            ],
        )
    }
}

fn validate_trade_fields(
    account: &str,
    trade_type: &str,
    amounts: &[(&str, Option<Decimal>)],
) -> Result<()> {
    if account.trim().is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "account".to_string(),
        )));
    }
    if trade_type.trim().is_empty() {
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
