//! Database models for trades.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use poseidon_core::trades::{NewTrade, Trade, TradeUpdate};

use crate::utils::{opt_decimal_to_string, parse_opt_decimal};

/// Database model for trades
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::trades)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct TradeDB {
    pub id: String,
    pub account: String,
    pub trade_type: String,
    pub buy_quantity: Option<String>,
    pub sell_quantity: Option<String>,
    pub buy_price: Option<String>,
    pub sell_price: Option<String>,
    pub benchmark: Option<String>,
    pub trade_date: Option<NaiveDateTime>,
    pub security: Option<String>,
    pub status: Option<String>,
    pub trader: Option<String>,
    pub book: Option<String>,
    pub creation_date: NaiveDateTime,
    pub revision_date: Option<NaiveDateTime>,
}

/// Changeset applied on update. creation_date is never written.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::trades)]
#[diesel(treat_none_as_null = true)]
pub struct TradeChangesetDB {
    pub account: String,
    pub trade_type: String,
    pub buy_quantity: Option<String>,
    pub sell_quantity: Option<String>,
    pub buy_price: Option<String>,
    pub sell_price: Option<String>,
    pub benchmark: Option<String>,
    pub trade_date: Option<NaiveDateTime>,
    pub security: Option<String>,
    pub status: Option<String>,
    pub trader: Option<String>,
    pub book: Option<String>,
    pub revision_date: NaiveDateTime,
}

impl TradeDB {
    pub fn from_new(new_trade: NewTrade, id: String, now: NaiveDateTime) -> Self {
        Self {
            id,
            account: new_trade.account,
            trade_type: new_trade.trade_type,
            buy_quantity: opt_decimal_to_string(new_trade.buy_quantity),
            sell_quantity: opt_decimal_to_string(new_trade.sell_quantity),
            buy_price: opt_decimal_to_string(new_trade.buy_price),
            sell_price: opt_decimal_to_string(new_trade.sell_price),
            benchmark: new_trade.benchmark,
            trade_date: new_trade.trade_date,
            security: new_trade.security,
            status: new_trade.status,
            trader: new_trade.trader,
            book: new_trade.book,
            creation_date: now,
            revision_date: None,
        }
    }
}

impl TradeChangesetDB {
    pub fn from_update(update: TradeUpdate, now: NaiveDateTime) -> Self {
        Self {
            account: update.account,
            trade_type: update.trade_type,
            buy_quantity: opt_decimal_to_string(update.buy_quantity),
            sell_quantity: opt_decimal_to_string(update.sell_quantity),
            buy_price: opt_decimal_to_string(update.buy_price),
            sell_price: opt_decimal_to_string(update.sell_price),
            benchmark: update.benchmark,
            trade_date: update.trade_date,
            security: update.security,
            status: update.status,
            trader: update.trader,
            book: update.book,
            revision_date: now,
        }
    }
}

// Conversion to the domain model
impl From<TradeDB> for Trade {
    fn from(db: TradeDB) -> Self {
        Self {
            id: db.id,
            account: db.account,
            trade_type: db.trade_type,
            buy_quantity: parse_opt_decimal(db.buy_quantity, "buy_quantity"),
            sell_quantity: parse_opt_decimal(db.sell_quantity, "sell_quantity"),
            buy_price: parse_opt_decimal(db.buy_price, "buy_price"),
            sell_price: parse_opt_decimal(db.sell_price, "sell_price"),
            benchmark: db.benchmark,
            trade_date: db.trade_date,
            security: db.security,
            status: db.status,
            trader: db.trader,
            book: db.book,
            creation_date: db.creation_date,
            revision_date: db.revision_date,
        }
    }
}
