use std::path::{Path, PathBuf};

use log::{error, info};
use rand::distributions::Distribution;
use rand::Rng;

use crate::error::StoreError;
use crate::factory::TransactionFactory;
use crate::store::{self, StoreDocument, DEFAULT_STORE_PATH};

pub const DEFAULT_TARGET_COUNT: usize = 500;

/// Where to find the store and how many records it should end up with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub path: PathBuf,
    pub target_count: usize,
}

/// Outcome of a successful run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Records found in the store before the run
    pub existing: usize,
    /// Records created by this run
    pub generated: usize,
    /// Records in the store after the run
    pub total: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            path: PathBuf::from(DEFAULT_STORE_PATH),
            target_count: DEFAULT_TARGET_COUNT,
        }
    }
}

impl GeneratorConfig {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, target_count: usize) -> Self {
        GeneratorConfig {
            path: path.into(),
            target_count,
        }
    }

    /// Loads the store, tops it up to `target_count` and saves it.
    ///
    /// The store is left untouched on disk when it already holds `target_count` records or
    /// more; existing records are never removed or changed.
    ///
    /// # Errors
    /// Errors when the new records cannot be serialized or the store cannot be written. A store
    /// that cannot be read is not an error: the run starts from an empty document instead.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GenerationReport, StoreError> {
        let mut document = store::load_or_default(&self.path);
        let existing = document.len();
        let needed = self.target_count.saturating_sub(existing);

        info!(
            "Found {} existing transactions. Generating {} new transactions.",
            existing, needed
        );

        if needed == 0 {
            return Ok(GenerationReport {
                existing,
                generated: 0,
                total: existing,
            });
        }

        let generated = top_up(&mut document, needed, rng)?;
        store::save(&self.path, &document)?;
        info!(
            "Successfully saved {} transactions to {}",
            document.len(),
            self.path.display()
        );

        Ok(GenerationReport {
            existing,
            generated,
            total: document.len(),
        })
    }
}

/// Appends `count` freshly generated transactions to `document`.
///
/// # Errors
/// Errors when a generated transaction cannot be serialized.
pub fn top_up<R: Rng + ?Sized>(
    document: &mut StoreDocument,
    count: usize,
    rng: &mut R,
) -> Result<usize, StoreError> {
    let factory = TransactionFactory::new(rng);
    let transactions: Vec<_> = (0..count).map(|_| factory.sample(rng)).collect();
    document.append(transactions)
}

/// Runs the generator and reports only the final record count.
///
/// Any failure is logged and turned into `0`. The count is only returned once the store has
/// been persisted, so a failed save also yields `0`.
pub fn generate_transactions<R: Rng + ?Sized>(
    target_count: usize,
    path: impl AsRef<Path>,
    rng: &mut R,
) -> usize {
    let path = path.as_ref();
    match GeneratorConfig::new(path, target_count).run(rng) {
        Ok(report) => report.total,
        Err(e @ StoreError::PermissionDenied(_)) => {
            error!("{}. Please check file permissions.", e);
            0
        }
        Err(StoreError::IoError(e)) => {
            error!("Error saving to {}: {}", path.display(), e);
            0
        }
        Err(e) => {
            error!("Error generating transactions for {}: {}", path.display(), e);
            0
        }
    }
}
