use chrono::{DateTime, TimeDelta, Utc};
use rand::distributions::Distribution;
use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::prelude::*;

use crate::pools::{
    Currency, Status, DESCRIPTIONS, MERCHANT_ID_POOL_SIZE, MERCHANT_NAMES, PAYMENT_METHODS,
    SENDER_NAMES,
};
use crate::transaction::{
    Fees, Merchant, Metadata, Party, PaymentMethod, Transaction, NUM_DECIMAL_PLACES,
};

/// Amounts are drawn in whole cents from this inclusive range (10.00 to 500.00)
pub const AMOUNT_CENTS_RANGE: (i64, i64) = (1_000, 50_000);

/// Fee factor in millionths, inclusive (0.01 to 0.03)
const FEE_FACTOR_MICROS_RANGE: (i64, i64) = (10_000, 30_000);
const FEE_FACTOR_SCALE: u32 = 6;

/// 2025-05-01T00:00:00Z
pub const TIMESTAMP_START: i64 = 1_746_057_600;
/// 2025-06-30T23:59:59Z
pub const TIMESTAMP_END: i64 = 1_751_327_999;

/// Produces synthetic [`Transaction`]s from the fixed value pools.
///
/// Merchant ids are the only pool that is not a constant: a factory draws its own set once, when
/// it is created, and every transaction it produces picks from that same set. All other fields
/// are drawn from the random provider passed to [`Distribution::sample`], so a seeded rng gives
/// reproducible output.
///
/// ```
/// use rand::{rngs::StdRng, Rng, SeedableRng};
/// use txn_generator::factory::TransactionFactory;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let factory = TransactionFactory::new(&mut rng);
/// let txn = rng.sample(&factory);
/// assert!(txn.id.starts_with("txn_"));
/// ```
#[derive(Debug, Clone)]
pub struct TransactionFactory {
    merchant_ids: Vec<String>,
}

impl TransactionFactory {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let merchant_ids = (0..MERCHANT_ID_POOL_SIZE)
            .map(|_| format!("mcht_{}", rng.gen_range(100_000..=999_999)))
            .collect();
        TransactionFactory { merchant_ids }
    }

    #[must_use]
    pub fn merchant_ids(&self) -> &[String] {
        &self.merchant_ids
    }
}

/// Every pool is a non-empty constant or the factory's own merchant ids, so `choose` only falls
/// back to a default for an empty slice, which never happens.
impl Distribution<Transaction> for TransactionFactory {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Transaction {
        let amount = random_amount(rng);
        let currency = Currency::ALL.choose(rng).copied().unwrap_or_default();

        Transaction {
            id: random_txn_id(rng),
            amount,
            currency,
            status: Status::ALL.choose(rng).copied().unwrap_or_default(),
            timestamp: random_timestamp(rng),
            description: choose_name(rng, &DESCRIPTIONS),
            merchant: Merchant {
                name: choose_name(rng, &MERCHANT_NAMES),
                id: self.merchant_ids.choose(rng).cloned().unwrap_or_default(),
            },
            payment_method: PAYMENT_METHODS
                .choose(rng)
                .map(PaymentMethod::from)
                .unwrap_or_default(),
            sender: Party {
                name: choose_name(rng, &SENDER_NAMES),
                account_id: random_prefixed_id(rng, "acc"),
            },
            receiver: Party {
                name: choose_name(rng, &MERCHANT_NAMES),
                account_id: random_prefixed_id(rng, "acc"),
            },
            fees: Fees {
                processing_fee: random_processing_fee(rng, amount),
                currency,
            },
            metadata: Metadata {
                order_id: random_prefixed_id(rng, "ord"),
                customer_id: random_prefixed_id(rng, "cust"),
            },
        }
    }
}

fn choose_name<R: Rng + ?Sized>(rng: &mut R, pool: &[&str]) -> String {
    pool.choose(rng).copied().unwrap_or_default().to_owned()
}

/// `txn_` followed by the first 8 hex digits of a random v4 uuid.
/// Collisions are possible and are not checked for.
fn random_txn_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let uuid = uuid::Builder::from_random_bytes(rng.gen()).into_uuid();
    let mut hex = uuid.simple().to_string();
    hex.truncate(8);
    format!("txn_{hex}")
}

fn random_prefixed_id<R: Rng + ?Sized>(rng: &mut R, prefix: &str) -> String {
    format!("{prefix}_{}", rng.gen_range(10_000..=99_999))
}

fn random_amount<R: Rng + ?Sized>(rng: &mut R) -> Decimal {
    let (low, high) = AMOUNT_CENTS_RANGE;
    Decimal::new(rng.gen_range(low..=high), NUM_DECIMAL_PLACES)
}

/// `amount` times a factor in [0.01, 0.03], rounded to cents.
/// Rounding may not push the fee outside the bounds of the factor range.
fn random_processing_fee<R: Rng + ?Sized>(rng: &mut R, amount: Decimal) -> Decimal {
    let (low, high) = FEE_FACTOR_MICROS_RANGE;
    let factor = Decimal::new(rng.gen_range(low..=high), FEE_FACTOR_SCALE);
    let min_fee = (amount * Decimal::new(low, FEE_FACTOR_SCALE))
        .round_dp_with_strategy(NUM_DECIMAL_PLACES, RoundingStrategy::AwayFromZero);
    let max_fee = (amount * Decimal::new(high, FEE_FACTOR_SCALE))
        .round_dp_with_strategy(NUM_DECIMAL_PLACES, RoundingStrategy::ToZero);
    (amount * factor)
        .round_dp(NUM_DECIMAL_PLACES)
        .clamp(min_fee, max_fee)
}

fn random_timestamp<R: Rng + ?Sized>(rng: &mut R) -> DateTime<Utc> {
    let seconds = rng.gen_range(TIMESTAMP_START..=TIMESTAMP_END);
    DateTime::<Utc>::UNIX_EPOCH + TimeDelta::seconds(seconds)
}
