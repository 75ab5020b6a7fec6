use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use crate::pools::{Currency, Status};

pub const NUM_DECIMAL_PLACES: u32 = 2;

/// Second resolution, always UTC, e.g. `2025-05-01T13:45:00Z`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// One synthetic transaction as stored in the `transactions` list.
/// Field names are the exact keys found in the store file.
#[allow(clippy::module_name_repetitions)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: Currency,
    pub status: Status,
    #[serde(with = "timestamp")]
    pub timestamp: DateTime<Utc>,
    pub description: String,
    pub merchant: Merchant,
    pub payment_method: PaymentMethod,
    pub sender: Party,
    pub receiver: Party,
    pub fees: Fees,
    pub metadata: Metadata,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Merchant {
    pub name: String,
    pub id: String,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct PaymentMethod {
    #[serde(rename = "type")]
    pub method_type: String,
    pub last4: String,
    pub brand: String,
}

/// Either side of a transfer
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Party {
    pub name: String,
    pub account_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Fees {
    #[serde(with = "rust_decimal::serde::float")]
    pub processing_fee: Decimal,
    pub currency: Currency,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub order_id: String,
    pub customer_id: String,
}

impl From<&(&str, &str, &str)> for PaymentMethod {
    fn from(&(method_type, last4, brand): &(&str, &str, &str)) -> Self {
        PaymentMethod {
            method_type: method_type.to_owned(),
            last4: last4.to_owned(),
            brand: brand.to_owned(),
        }
    }
}

impl Transaction {
    /// Timestamp rendered the way it is written to the store
    #[must_use]
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

mod timestamp {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(de::Error::custom)
    }
}
