//! Display-oriented projections of the domain entities.
//!
//! One view struct per entity, built by a pure conversion: decimals are
//! fixed to two places, date-times stringified, and absent optional fields
//! rendered as a placeholder instead of failing.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use poseidon_core::bids::Bid;
use poseidon_core::curve_points::CurvePoint;
use poseidon_core::ratings::Rating;
use poseidon_core::rule_names::RuleName;
use poseidon_core::trades::Trade;

pub const NOT_AVAILABLE: &str = "N/A";

pub fn fmt_decimal(value: Decimal) -> String {
    format!("{:.2}", value)
}

pub fn fmt_opt_decimal(value: Option<Decimal>) -> String {
    value
        .map(fmt_decimal)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn fmt_datetime(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

pub fn fmt_opt_datetime(value: Option<NaiveDateTime>) -> String {
    value
        .map(fmt_datetime)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn fmt_opt_text(value: &Option<String>) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text.clone(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

pub struct BidView {
    pub id: String,
    pub account: String,
    pub bid_type: String,
    pub bid_quantity: String,
    pub ask_quantity: String,
    pub bid: String,
    pub ask: String,
    pub benchmark: String,
    pub commentary: String,
    pub creation_date: String,
    pub revision_date: String,
}

impl From<&Bid> for BidView {
    fn from(bid: &Bid) -> Self {
        Self {
            id: bid.id.clone(),
            account: bid.account.clone(),
            bid_type: bid.bid_type.clone(),
            bid_quantity: fmt_opt_decimal(bid.bid_quantity),
            ask_quantity: fmt_opt_decimal(bid.ask_quantity),
            bid: fmt_opt_decimal(bid.bid),
            ask: fmt_opt_decimal(bid.ask),
            benchmark: fmt_opt_text(&bid.benchmark),
            commentary: fmt_opt_text(&bid.commentary),
            creation_date: fmt_datetime(bid.creation_date),
            revision_date: fmt_opt_datetime(bid.revision_date),
        }
    }
}

pub struct CurvePointView {
    pub id: String,
    pub curve_id: i32,
    pub as_of_date: String,
    pub term: String,
    pub value: String,
    pub creation_date: String,
}

impl From<&CurvePoint> for CurvePointView {
    fn from(point: &CurvePoint) -> Self {
        Self {
            id: point.id.clone(),
            curve_id: point.curve_id,
            as_of_date: fmt_opt_datetime(point.as_of_date),
            term: fmt_opt_decimal(point.term),
            value: fmt_opt_decimal(point.value),
            creation_date: fmt_datetime(point.creation_date),
        }
    }
}

pub struct RatingView {
    pub id: String,
    pub moodys_rating: String,
    pub sandp_rating: String,
    pub fitch_rating: String,
    pub order_number: i32,
}

impl From<&Rating> for RatingView {
    fn from(rating: &Rating) -> Self {
        Self {
            id: rating.id.clone(),
            moodys_rating: rating.moodys_rating.clone(),
            sandp_rating: rating.sandp_rating.clone(),
            fitch_rating: rating.fitch_rating.clone(),
            order_number: rating.order_number,
        }
    }
}

pub struct TradeView {
    pub id: String,
    pub account: String,
    pub trade_type: String,
    pub buy_quantity: String,
    pub sell_quantity: String,
    pub buy_price: String,
    pub sell_price: String,
    pub benchmark: String,
    pub trade_date: String,
    pub security: String,
    pub status: String,
    pub trader: String,
    pub book: String,
    pub creation_date: String,
    pub revision_date: String,
}

impl From<&Trade> for TradeView {
    fn from(trade: &Trade) -> Self {
        Self {
            id: trade.id.clone(),
            account: trade.account.clone(),
            trade_type: trade.trade_type.clone(),
            buy_quantity: fmt_opt_decimal(trade.buy_quantity),
            sell_quantity: fmt_opt_decimal(trade.sell_quantity),
            buy_price: fmt_opt_decimal(trade.buy_price),
            sell_price: fmt_opt_decimal(trade.sell_price),
            benchmark: fmt_opt_text(&trade.benchmark),
            trade_date: fmt_opt_datetime(trade.trade_date),
            security: fmt_opt_text(&trade.security),
            status: fmt_opt_text(&trade.status),
            trader: fmt_opt_text(&trade.trader),
            book: fmt_opt_text(&trade.book),
            creation_date: fmt_datetime(trade.creation_date),
            revision_date: fmt_opt_datetime(trade.revision_date),
        }
    }
}

pub struct RuleNameView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub json: String,
    pub template: String,
    pub sql_str: String,
    pub sql_part: String,
}

impl From<&RuleName> for RuleNameView {
    fn from(rule: &RuleName) -> Self {
        Self {
            id: rule.id.clone(),
            name: rule.name.clone(),
            description: fmt_opt_text(&rule.description),
            json: fmt_opt_text(&rule.json),
            template: fmt_opt_text(&rule.template),
            sql_str: fmt_opt_text(&rule.sql_str),
            sql_part: fmt_opt_text(&rule.sql_part),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn decimals_render_with_two_places() {
        assert_eq!(fmt_opt_decimal(Some(dec!(10.5))), "10.50");
        assert_eq!(fmt_opt_decimal(Some(dec!(3))), "3.00");
        assert_eq!(fmt_opt_decimal(Some(dec!(101.25))), "101.25");
    }

    #[test]
    fn missing_values_render_placeholder() {
        assert_eq!(fmt_opt_decimal(None), NOT_AVAILABLE);
        assert_eq!(fmt_opt_datetime(None), NOT_AVAILABLE);
        assert_eq!(fmt_opt_text(&None), NOT_AVAILABLE);
        assert_eq!(fmt_opt_text(&Some("  ".to_string())), NOT_AVAILABLE);
    }

    #[test]
    fn bid_view_formats_fields() {
        let stamp = NaiveDate::from_ymd_opt(2025, 6, 15)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let bid = Bid {
            id: "b1".to_string(),
            account: "ACC1".to_string(),
            bid_type: "Buy".to_string(),
            bid_quantity: Some(dec!(10.5)),
            ask_quantity: None,
            bid: None,
            ask: None,
            benchmark: None,
            commentary: Some("first".to_string()),
            creation_date: stamp,
            revision_date: None,
        };

        let view = BidView::from(&bid);
        assert_eq!(view.bid_quantity, "10.50");
        assert_eq!(view.ask_quantity, NOT_AVAILABLE);
        assert_eq!(view.commentary, "first");
        assert_eq!(view.creation_date, "2025-06-15 09:30");
        assert_eq!(view.revision_date, NOT_AVAILABLE);
    }
}
