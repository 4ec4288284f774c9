use backoffice_core::{
    config::{Config, ConfigManager},
    core::services::{ClientService, TransferService},
    domain::{category::Category, client::ClientDraft},
    errors::StoreError,
    ledger::Office,
    store::{JsonStorage, StorageBackend},
};

fn sample_office() -> Office {
    let mut office = Office::new("Main");
    let source = Category::new("Касса", "Wallet", "bg-emerald-500", 2).with_amount(50_000);
    let target = Category::new("Материалы", "Package", "bg-orange-500", 2);
    let source_id = source.id;
    let target_id = target.id;
    office.add_category(source);
    office.add_category(target);
    TransferService::execute(&mut office, source_id, target_id, 2000, "цемент").unwrap();
    ClientService::register(&mut office, ClientDraft::new("Ахметов", "Ержан", 2025)).unwrap();
    office
}

#[test]
fn snapshot_round_trips_through_json() {
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonStorage::new(Some(dir.path().to_path_buf())).unwrap();
    let office = sample_office();

    storage.save(&office, "Main").unwrap();
    let restored = storage.load("Main").unwrap();

    assert_eq!(restored.categories, office.categories);
    assert_eq!(restored.transactions, office.transactions);
    assert_eq!(restored.clients, office.clients);
    assert_eq!(restored.schema_version, office.schema_version);
}

#[test]
fn stored_documents_keep_the_historical_spellings() {
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonStorage::new(Some(dir.path().to_path_buf())).unwrap();
    let office = sample_office();
    storage.save(&office, "Main").unwrap();

    let raw = std::fs::read_to_string(storage.office_path("Main")).unwrap();
    // Category balances travel as "<integer> ₸" strings.
    assert!(raw.contains("48000 ₸"));
    assert!(raw.contains("2000 ₸"));
    // Transaction documents use the legacy field names.
    assert!(raw.contains("\"fromUser\""));
    assert!(raw.contains("\"toUser\""));
    assert!(raw.contains("\"type\": \"expense\""));
    assert!(raw.contains("\"type\": \"income\""));
    // Client numbers are flat "YYYY-NNN" strings.
    assert!(raw.contains("\"2025-001\""));
}

#[test]
fn list_returns_sorted_snapshot_names() {
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonStorage::new(Some(dir.path().to_path_buf())).unwrap();
    let office = Office::new("x");

    storage.save(&office, "Second Office").unwrap();
    storage.save(&office, "Main").unwrap();

    assert_eq!(storage.list().unwrap(), vec!["main", "second-office"]);
}

#[test]
fn loading_a_missing_snapshot_reports_its_name() {
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonStorage::new(Some(dir.path().to_path_buf())).unwrap();

    let err = storage.load("nope").expect_err("absent snapshot must fail");
    match err {
        StoreError::Missing(name) => assert_eq!(name, "nope"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn save_overwrites_an_existing_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonStorage::new(Some(dir.path().to_path_buf())).unwrap();

    let mut office = Office::new("Main");
    storage.save(&office, "Main").unwrap();
    office.add_category(Category::new("Касса", "Wallet", "bg-emerald-500", 2));
    storage.save(&office, "Main").unwrap();

    let restored = storage.load("Main").unwrap();
    assert_eq!(restored.categories.len(), 1);
    assert_eq!(storage.list().unwrap().len(), 1);
}

#[test]
fn config_round_trips_and_defaults_when_absent() {
    let dir = tempfile::tempdir().unwrap();
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();

    assert_eq!(manager.load().unwrap(), Config::default());

    let mut config = Config::default();
    config.year_span = 3;
    config.default_deposit = 100_000;
    manager.save(&config).unwrap();

    let restored = manager.load().unwrap();
    assert_eq!(restored, config);
    assert_eq!(restored.year_options(2026), vec![2026, 2027, 2028]);
}
