use std::collections::BTreeSet;

use rust_decimal::prelude::*;
use serde::Serialize;

use crate::store::StoreDocument;
use crate::transaction::TIMESTAMP_FORMAT;

/// Ranges and distinct values across every record of a store, used to drive filters
#[derive(Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct StoreSummary {
    pub amount: AmountRange,
    pub timestamp: TimestampRange,
    pub merchant_name: Vec<String>,
    pub payment_method: Vec<String>,
}

#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AmountRange {
    #[serde(with = "rust_decimal::serde::float")]
    pub min: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub max: Decimal,
}

/// Empty strings when the store has no records
#[derive(Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct TimestampRange {
    pub min: String,
    pub max: String,
}

impl StoreSummary {
    /// Records that are not shaped like a generated transaction are left out.
    #[must_use]
    pub fn from_document(document: &StoreDocument) -> Self {
        let mut summary = StoreSummary::default();
        let mut amounts: Option<AmountRange> = None;
        let mut timestamps = None;
        let mut merchant_names = BTreeSet::new();
        let mut payment_methods = BTreeSet::new();

        for txn in document.typed_transactions() {
            amounts = Some(match amounts {
                Some(range) => AmountRange {
                    min: range.min.min(txn.amount),
                    max: range.max.max(txn.amount),
                },
                None => AmountRange {
                    min: txn.amount,
                    max: txn.amount,
                },
            });
            timestamps = Some(match timestamps {
                Some((min, max)) => (txn.timestamp.min(min), txn.timestamp.max(max)),
                None => (txn.timestamp, txn.timestamp),
            });
            merchant_names.insert(txn.merchant.name);
            payment_methods.insert(txn.payment_method.method_type);
        }

        if let Some(range) = amounts {
            summary.amount = range;
        }
        if let Some((min, max)) = timestamps {
            summary.timestamp = TimestampRange {
                min: min.format(TIMESTAMP_FORMAT).to_string(),
                max: max.format(TIMESTAMP_FORMAT).to_string(),
            };
        }
        summary.merchant_name = merchant_names.into_iter().collect();
        summary.payment_method = payment_methods.into_iter().collect();
        summary
    }
}
