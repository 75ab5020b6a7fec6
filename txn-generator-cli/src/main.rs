use std::error::Error;
use std::io::Write;

use clap::Parser;
use env_logger::{Env, Target};
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use txn_generator::generator::{generate_transactions, DEFAULT_TARGET_COUNT};
use txn_generator::store::{self, DEFAULT_STORE_PATH};
use txn_generator::summary::StoreSummary;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// The JSON store to top up
    #[clap(short, long, default_value = DEFAULT_STORE_PATH)]
    pub(crate) path: String,
    /// Total number of transactions the store should hold
    #[clap(short, long, default_value_t = DEFAULT_TARGET_COUNT)]
    pub(crate) target: usize,
    /// Seed for reproducible output
    #[clap(long)]
    pub(crate) seed: Option<u64>,
    /// Print the amount, timestamp, merchant and payment method ranges of the store afterwards
    #[clap(long)]
    pub(crate) summary: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let total = generate_transactions(cli.target, &cli.path, &mut rng);
    if total > 0 {
        info!("Generated {} total transactions in {}", total, cli.path);
    } else {
        error!("Failed to generate transactions. Check error messages above.");
    }

    if cli.summary {
        let summary = StoreSummary::from_document(&store::load_or_default(&cli.path));
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
