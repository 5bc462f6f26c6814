//! Database models for bids.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use poseidon_core::bids::{Bid, BidUpdate, NewBid};

use crate::utils::{opt_decimal_to_string, parse_opt_decimal};

/// Database model for bids
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::bids)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct BidDB {
    pub id: String,
    pub account: String,
    pub bid_type: String,
    pub bid_quantity: Option<String>,
    pub ask_quantity: Option<String>,
    pub bid: Option<String>,
    pub ask: Option<String>,
    pub benchmark: Option<String>,
    pub commentary: Option<String>,
    pub creation_date: NaiveDateTime,
    pub revision_date: Option<NaiveDateTime>,
}

/// Changeset applied on update. creation_date is never written.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::bids)]
#[diesel(treat_none_as_null = true)]
pub struct BidChangesetDB {
    pub account: String,
    pub bid_type: String,
    pub bid_quantity: Option<String>,
    pub ask_quantity: Option<String>,
    pub bid: Option<String>,
    pub ask: Option<String>,
    pub benchmark: Option<String>,
    pub commentary: Option<String>,
    pub revision_date: NaiveDateTime,
}

impl BidDB {
    /// Builds the full row for a new bid with its generated id and
    /// insert-time audit stamp.
    pub fn from_new(new_bid: NewBid, id: String, now: NaiveDateTime) -> Self {
        Self {
            id,
            account: new_bid.account,
            bid_type: new_bid.bid_type,
            bid_quantity: opt_decimal_to_string(new_bid.bid_quantity),
            ask_quantity: opt_decimal_to_string(new_bid.ask_quantity),
            bid: opt_decimal_to_string(new_bid.bid),
            ask: opt_decimal_to_string(new_bid.ask),
            benchmark: new_bid.benchmark,
            commentary: new_bid.commentary,
            creation_date: now,
            revision_date: None,
        }
    }
}

impl BidChangesetDB {
    pub fn from_update(update: BidUpdate, now: NaiveDateTime) -> Self {
        Self {
            account: update.account,
            bid_type: update.bid_type,
            bid_quantity: opt_decimal_to_string(update.bid_quantity),
            ask_quantity: opt_decimal_to_string(update.ask_quantity),
            bid: opt_decimal_to_string(update.bid),
            ask: opt_decimal_to_string(update.ask),
            benchmark: update.benchmark,
            commentary: update.commentary,
            revision_date: now,
        }
    }
}

// Conversion to the domain model
impl From<BidDB> for Bid {
    fn from(db: BidDB) -> Self {
        Self {
            id: db.id,
            account: db.account,
            bid_type: db.bid_type,
            bid_quantity: parse_opt_decimal(db.bid_quantity, "bid_quantity"),
            ask_quantity: parse_opt_decimal(db.ask_quantity, "ask_quantity"),
            bid: parse_opt_decimal(db.bid, "bid"),
            ask: parse_opt_decimal(db.ask, "ask"),
            benchmark: db.benchmark,
            commentary: db.commentary,
            creation_date: db.creation_date,
            revision_date: db.revision_date,
        }
    }
}
