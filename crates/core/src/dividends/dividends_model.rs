//! Dividend domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lifecycle status of a logged dividend.
///
/// `Paid` records are immutable historical fact; `Scheduled` and
/// `Projected` records are forward-looking and may be superseded when
/// projections are recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DividendStatus {
    #[default]
    Paid,
    Scheduled,
    Projected,
}

impl DividendStatus {
    /// Whether this record is a forward-looking entry rather than
    /// realized income.
    pub fn is_forward_looking(&self) -> bool {
        matches!(self, DividendStatus::Scheduled | DividendStatus::Projected)
    }
}

/// A single dividend payment as supplied by the persistence layer.
///
/// `pay_date` is the sole temporal anchor; the record carries no time
/// component. Amounts are decimals to keep multi-year aggregation free
/// of binary-float drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividendRecord {
    pub id: String,
    pub ticker: String,
    pub account_id: String,
    pub account_name: String,
    #[serde(with = "decimal_input_format")]
    pub amount_per_share: Decimal,
    #[serde(with = "decimal_input_format")]
    pub total_amount: Decimal,
    pub pay_date: NaiveDate,
    pub status: DividendStatus,
}

impl DividendRecord {
    /// Composite grouping key identifying the holding this payment
    /// belongs to. A holding is a unique (account, ticker) pairing.
    pub fn holding_key(&self) -> String {
        format!("{}:{}", self.account_id, self.ticker)
    }

    /// Check if this record is realized income.
    pub fn is_paid(&self) -> bool {
        self.status == DividendStatus::Paid
    }
}

/// Groups records by holding key into an ordered map.
///
/// Ordered so that downstream aggregation iterates holdings in a stable
/// order, keeping engine output byte-identical for identical input.
pub fn group_by_holding(records: &[DividendRecord]) -> BTreeMap<String, Vec<&DividendRecord>> {
    let mut by_holding: BTreeMap<String, Vec<&DividendRecord>> = BTreeMap::new();
    for record in records {
        by_holding.entry(record.holding_key()).or_default().push(record);
    }
    by_holding
}

// Custom deserialization for Decimal inputs to support strings and numbers.
// Persistence backends store amounts as decimal strings; older exports
// carry plain JSON numbers.
mod decimal_input_format {
    use rust_decimal::Decimal;
    use serde::{self, Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum DecimalOrString {
            Decimal(Decimal),
            String(String),
        }

        match DecimalOrString::deserialize(deserializer)? {
            DecimalOrString::Decimal(d) => Ok(d),
            DecimalOrString::String(s) => {
                let trimmed = s.trim();
                Decimal::from_str(trimmed)
                    .or_else(|_| Decimal::from_scientific(trimmed))
                    .map_err(serde::de::Error::custom)
            }
        }
    }
}
