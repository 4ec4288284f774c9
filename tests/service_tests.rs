use backoffice_core::{
    core::services::{
        CategoryService, FeedService, ServiceError, SummaryService, TransferService,
    },
    domain::category::Category,
    ledger::Office,
};
use chrono::{Duration, Utc};
use uuid::Uuid;

fn grid_office() -> Office {
    let mut office = Office::new("Grid");
    office.add_category(Category::new("Касса", "Wallet", "bg-emerald-500", 2).with_amount(50_000));
    office.add_category(Category::new("Материалы", "Package", "bg-orange-500", 2));
    office
}

#[test]
fn add_rejects_same_row_duplicates_case_insensitively() {
    let mut office = grid_office();
    let err = CategoryService::add(
        &mut office,
        Category::new("  касса ", "Wallet", "bg-emerald-500", 2),
    )
    .expect_err("duplicate title in the same row must fail");
    assert!(matches!(err, ServiceError::Invalid(_)));

    // Same title in another row is a different icon.
    CategoryService::add(&mut office, Category::new("Касса", "Wallet", "bg-emerald-500", 3))
        .unwrap();
    assert_eq!(CategoryService::list(&office).len(), 3);
}

#[test]
fn rename_rewrites_historical_transfer_labels() {
    let mut office = grid_office();
    let source_id = office.categories[0].id;
    let target_id = office.categories[1].id;
    TransferService::execute(&mut office, source_id, target_id, 2000, "цемент").unwrap();
    TransferService::execute(&mut office, target_id, source_id, 500, "возврат").unwrap();

    let mut renamed = office.category(target_id).unwrap().clone();
    renamed.title = "Стройматериалы".into();
    CategoryService::edit(&mut office, target_id, renamed).unwrap();

    assert!(office
        .transactions
        .iter()
        .all(|txn| txn.from_label != "Материалы" && txn.to_label != "Материалы"));
    let touched = office
        .transactions
        .iter()
        .filter(|txn| txn.from_label == "Стройматериалы" || txn.to_label == "Стройматериалы")
        .count();
    assert_eq!(touched, 4);
    // Stable links never move.
    assert!(office
        .transactions
        .iter()
        .all(|txn| txn.category_id == source_id || txn.category_id == target_id));
}

#[test]
fn edit_without_rename_keeps_labels_untouched() {
    let mut office = grid_office();
    let source_id = office.categories[0].id;
    let target_id = office.categories[1].id;
    TransferService::execute(&mut office, source_id, target_id, 2000, "цемент").unwrap();

    let mut changes = office.category(target_id).unwrap().clone();
    changes.color = "bg-rose-500".into();
    CategoryService::edit(&mut office, target_id, changes).unwrap();

    assert!(office
        .transactions
        .iter()
        .any(|txn| txn.to_label == "Материалы"));
    assert_eq!(office.category(target_id).unwrap().color, "bg-rose-500");
}

#[test]
fn remove_icon_is_soft_purge_is_hard() {
    let mut office = grid_office();
    let source_id = office.categories[0].id;
    let target_id = office.categories[1].id;
    TransferService::execute(&mut office, source_id, target_id, 2000, "цемент").unwrap();

    let removed = CategoryService::remove_icon(&mut office, target_id).unwrap();
    assert_eq!(removed.title, "Материалы");
    assert_eq!(office.transaction_count(), 2);

    office.add_category(removed);
    let (_, purged) = CategoryService::purge(&mut office, target_id).unwrap();
    assert_eq!(purged, 1);
    assert_eq!(office.transaction_count(), 1);
    assert!(office
        .transactions
        .iter()
        .all(|txn| txn.category_id == source_id));
}

#[test]
fn editing_a_missing_category_fails() {
    let mut office = grid_office();
    let err = CategoryService::edit(
        &mut office,
        Uuid::new_v4(),
        Category::new("Новая", "Home", "bg-emerald-500", 2),
    )
    .expect_err("unknown id must fail");
    assert!(matches!(err, ServiceError::Invalid(_)));
}

#[test]
fn stats_count_overdrafts_as_expenses() {
    let mut office = grid_office();
    let source_id = office.categories[0].id;
    let target_id = office.categories[1].id;
    // Drive the source negative: 70 000 out against a 50 000 balance.
    TransferService::execute(&mut office, source_id, target_id, 50_000, "закупка").unwrap();
    TransferService::execute(&mut office, source_id, target_id, 20_000, "доставка").unwrap();

    let stats = SummaryService::stats(&office);
    assert_eq!(office.category(source_id).unwrap().amount, -20_000);
    assert_eq!(stats.expenses, 20_000);
    assert_eq!(stats.balance, 70_000 - 20_000);
    assert_eq!(stats.planned, 0);
}

#[test]
fn feed_shows_one_entry_per_transfer_newest_first() {
    let mut office = grid_office();
    let source_id = office.categories[0].id;
    let target_id = office.categories[1].id;
    TransferService::execute(&mut office, source_id, target_id, 2000, "цемент").unwrap();
    TransferService::execute(&mut office, source_id, target_id, 700, "гвозди").unwrap();
    assert_eq!(office.transaction_count(), 4);

    let feed = FeedService::feed(&office);
    assert_eq!(feed.len(), 2);
    assert!(feed[0].timestamp >= feed[1].timestamp);
}

#[test]
fn daily_report_sums_visible_entries_per_day() {
    use backoffice_core::domain::transaction::Transaction;

    let mut office = grid_office();
    let source = office.categories[0].clone();
    let target = office.categories[1].clone();
    let now = Utc::now();

    let (w1, d1) = Transaction::transfer_pair(&source, &target, 2000, "цемент", now);
    let (w2, d2) = Transaction::transfer_pair(&source, &target, 700, "гвозди", now);
    let (w3, d3) =
        Transaction::transfer_pair(&source, &target, 300, "песок", now - Duration::days(2));
    for txn in [w1, d1, w2, d2, w3, d3] {
        office.add_transaction(txn);
    }

    let report = FeedService::daily_report(&office);
    assert_eq!(report.len(), 2);
    assert_eq!(report[0].total, 2700);
    assert_eq!(report[0].entries.len(), 2);
    assert_eq!(report[1].total, 300);
}
