//! Fixed value pools sampled when generating transactions.
//! Nothing in here changes after startup.

use serde::{Deserialize, Serialize};

pub const MERCHANT_NAMES: [&str; 10] = [
    "Example Store",
    "Streaming Service",
    "Hotel Plaza",
    "Fresh Market",
    "Tech Gadgets",
    "Coffee Haven",
    "Book Nook",
    "Fitness Club",
    "Clothing Boutique",
    "Electronics Hub",
];

pub const SENDER_NAMES: [&str; 10] = [
    "John Doe",
    "Alice Smith",
    "Robert Johnson",
    "Emma Wilson",
    "Michael Brown",
    "Sarah Davis",
    "David Lee",
    "Laura Martinez",
    "James Taylor",
    "Emily Clark",
];

pub const DESCRIPTIONS: [&str; 10] = [
    "Online Purchase",
    "Subscription Renewal",
    "Hotel Booking",
    "Grocery Store Purchase",
    "Electronics Purchase",
    "Coffee Shop Order",
    "Book Purchase",
    "Gym Membership",
    "Clothing Purchase",
    "Restaurant Order",
];

/// `(type, last4, brand)`; non-card methods leave `last4` and `brand` empty
pub const PAYMENT_METHODS: [(&str, &str, &str); 5] = [
    ("credit_card", "4242", "visa"),
    ("credit_card", "1111", "mastercard"),
    ("debit_card", "5678", "visa"),
    ("paypal", "", ""),
    ("credit_card", "9999", "amex"),
];

/// Number of merchant ids generated for each factory
pub const MERCHANT_ID_POOL_SIZE: usize = 10;

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Completed,
    Pending,
    Failed,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Eur, Currency::Gbp];
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Completed, Status::Pending, Status::Failed];
}
