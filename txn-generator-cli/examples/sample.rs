//! Prints a handful of transactions without touching any store.
//! can be run with `cargo run --example sample -- [seed]`

use std::env;
use std::error::Error;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use txn_generator::factory::TransactionFactory;
use txn_generator::transaction::Transaction;

fn main() -> Result<(), Box<dyn Error>> {
    let seed = match env::args().nth(1) {
        Some(raw) => raw.parse()?,
        None => 42,
    };
    let mut rng = StdRng::seed_from_u64(seed);
    let factory = TransactionFactory::new(&mut rng);
    let txns: Vec<Transaction> = (0..5).map(|_| rng.sample(&factory)).collect();
    println!("{}", serde_json::to_string_pretty(&txns)?);
    Ok(())
}
