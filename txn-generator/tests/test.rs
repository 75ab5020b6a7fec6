use std::fs;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};
use txn_generator::error::StoreError;
use txn_generator::generator::{generate_transactions, GenerationReport, GeneratorConfig};
use txn_generator::store::{self, StoreDocument};
use txn_generator::summary::StoreSummary;
use txn_generator::transaction::Transaction;

const VALID_STORE: &str = "../resources/input/valid-store.json";
const INVALID_STORE: &str = "../resources/input/invalid.json";
const WRONG_SHAPE_STORE: &str = "../resources/input/wrong-shape.json";

/// A directory under the system temp dir, unique per test and process, removed on drop
struct ScratchDir(PathBuf);

impl ScratchDir {
    fn new(test: &str) -> Self {
        let dir = std::env::temp_dir().join(format!(
            "txn-generator-test-{}-{}",
            std::process::id(),
            test
        ));
        fs::create_dir_all(&dir).unwrap();
        ScratchDir(dir)
    }

    fn path(&self, name: &str) -> PathBuf {
        self.0.join(name)
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_load_valid_store() {
    let document = store::load(VALID_STORE).unwrap();
    assert_eq!(document.len(), 3);
    assert_eq!(document.transactions()[2]["id"], "legacy-record");
    assert_eq!(document.typed_transactions().count(), 2);
}

#[test]
fn test_load_missing_store() {
    let scratch = ScratchDir::new("missing");
    let path = scratch.path("missing.json");
    assert!(matches!(store::load(&path), Err(StoreError::NotFound(_))));
    assert_eq!(store::load_or_default(&path), StoreDocument::default());
}

#[test]
fn test_load_invalid_json() {
    assert!(matches!(
        store::load(INVALID_STORE),
        Err(StoreError::InvalidJson(_))
    ));
    assert_eq!(store::load_or_default(INVALID_STORE), StoreDocument::default());
}

#[test]
fn test_load_wrong_shape() {
    assert!(matches!(
        store::load(WRONG_SHAPE_STORE),
        Err(StoreError::UnexpectedStructure(_))
    ));
    assert_eq!(
        store::load_or_default(WRONG_SHAPE_STORE),
        StoreDocument::default()
    );
}

#[test]
fn test_save_then_load() {
    let scratch = ScratchDir::new("round-trip");
    let path = scratch.path("round-trip.json");
    let mut rng = StdRng::seed_from_u64(17);
    let mut document = store::load(VALID_STORE).unwrap();
    txn_generator::generator::top_up(&mut document, 5, &mut rng).unwrap();

    store::save(&path, &document).unwrap();
    let reloaded = store::load(&path).unwrap();
    assert_eq!(reloaded.transactions(), document.transactions());

    let rendered = fs::read_to_string(&path).unwrap();
    assert!(rendered.starts_with("{\n  \"transactions\": [\n    {\n      \"id\""));
}

#[test]
fn test_save_into_missing_directory() {
    let scratch = ScratchDir::new("no-such-dir");
    let path = scratch.path("no-such-dir").join("db.json");
    let res = store::save(&path, &StoreDocument::default());
    assert!(matches!(res, Err(StoreError::IoError(_))));
}

#[test]
fn test_empty_store_target_three() {
    let scratch = ScratchDir::new("empty-three");
    let path = scratch.path("empty-three.json");
    let mut rng = StdRng::seed_from_u64(1);

    let total = generate_transactions(3, &path, &mut rng);

    assert_eq!(total, 3);
    let saved = read_json(&path);
    let transactions = saved["transactions"].as_array().unwrap();
    assert_eq!(transactions.len(), 3);
    for value in transactions {
        let txn: Transaction = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(txn.fees.currency, txn.currency);
    }
}

#[test]
fn test_existing_records_untouched() {
    let scratch = ScratchDir::new("top-up");
    let path = scratch.path("top-up.json");
    fs::copy(VALID_STORE, &path).unwrap();
    let original = store::load(VALID_STORE).unwrap();
    let mut rng = StdRng::seed_from_u64(2);

    let report = GeneratorConfig::new(&path, 10).run(&mut rng).unwrap();

    assert_eq!(
        report,
        GenerationReport {
            existing: 3,
            generated: 7,
            total: 10
        }
    );
    let saved = store::load(&path).unwrap();
    assert_eq!(saved.len(), 10);
    assert_eq!(&saved.transactions()[..3], original.transactions());
    assert_eq!(
        saved.transactions()[2],
        json!({ "id": "legacy-record", "note": "imported by hand", "amount": 12 })
    );
}

#[test]
fn test_existing_numbers_survive_top_up() {
    let scratch = ScratchDir::new("big-numbers");
    let path = scratch.path("big-numbers.json");
    let legacy = r#"{"id":"legacy","n":123456789012345678901234567890,"amount":19.990000000000000213}"#;
    fs::write(&path, format!(r#"{{"transactions":[{legacy}]}}"#)).unwrap();
    let mut rng = StdRng::seed_from_u64(9);

    assert_eq!(generate_transactions(2, &path, &mut rng), 2);

    let rendered = fs::read_to_string(&path).unwrap();
    assert!(rendered.contains(r#""n": 123456789012345678901234567890,"#));
    assert!(rendered.contains(r#""amount": 19.990000000000000213"#));
    let saved = store::load(&path).unwrap();
    assert_eq!(saved.len(), 2);
    assert_eq!(
        serde_json::to_string(&saved.transactions()[0]).unwrap(),
        legacy
    );
}

#[test]
fn test_top_level_keys_keep_their_place() {
    let scratch = ScratchDir::new("key-order");
    let path = scratch.path("key-order.json");
    fs::write(&path, r#"{"users":[],"transactions":[],"meta":{"v":1}}"#).unwrap();
    let mut rng = StdRng::seed_from_u64(10);

    assert_eq!(generate_transactions(1, &path, &mut rng), 1);

    let rendered = fs::read_to_string(&path).unwrap();
    let users = rendered.find("\"users\"").unwrap();
    let transactions = rendered.find("\"transactions\"").unwrap();
    let meta = rendered.find("\"meta\"").unwrap();
    assert!(users < transactions && transactions < meta);
}

#[test]
fn test_full_store_is_not_rewritten() {
    let scratch = ScratchDir::new("full");
    let path = scratch.path("full.json");
    let records: Vec<Value> = (0..500).map(|i| json!({ "id": i })).collect();
    let raw = serde_json::to_string(&json!({ "transactions": records })).unwrap();
    fs::write(&path, &raw).unwrap();
    let mut rng = StdRng::seed_from_u64(3);

    assert_eq!(generate_transactions(500, &path, &mut rng), 500);
    assert_eq!(fs::read_to_string(&path).unwrap(), raw);
}

#[test]
fn test_store_above_target_is_not_truncated() {
    let scratch = ScratchDir::new("above-target");
    let path = scratch.path("above-target.json");
    fs::copy(VALID_STORE, &path).unwrap();
    let mut rng = StdRng::seed_from_u64(4);

    let report = GeneratorConfig::new(&path, 2).run(&mut rng).unwrap();

    assert_eq!(report.generated, 0);
    assert_eq!(report.total, 3);
    assert_eq!(store::load(&path).unwrap().len(), 3);
}

#[test]
fn test_malformed_store_is_replaced() {
    let scratch = ScratchDir::new("malformed");
    let path = scratch.path("malformed.json");
    fs::copy(INVALID_STORE, &path).unwrap();
    let mut rng = StdRng::seed_from_u64(5);

    assert_eq!(generate_transactions(4, &path, &mut rng), 4);
    assert_eq!(store::load(&path).unwrap().len(), 4);
}

#[test]
fn test_failed_save_reports_zero() {
    let scratch = ScratchDir::new("unwritable-dir");
    let path = scratch.path("unwritable-dir").join("db.json");
    let mut rng = StdRng::seed_from_u64(6);

    assert_eq!(generate_transactions(3, &path, &mut rng), 0);
    assert!(!path.exists());
}

#[test]
fn test_summary_of_fixture() {
    let document = store::load(VALID_STORE).unwrap();
    let summary = StoreSummary::from_document(&document);
    assert_eq!(
        serde_json::to_value(summary).unwrap(),
        json!({
            "amount": { "min": 42.5, "max": 310.0 },
            "timestamp": { "min": "2025-05-03T10:15:00Z", "max": "2025-06-21T22:01:45Z" },
            "merchant_name": ["Book Nook", "Hotel Plaza"],
            "payment_method": ["credit_card", "paypal"]
        })
    );
}
