//! The operation feed and the per-day report.
//!
//! Both views fold the expense/income pair of each transfer into one
//! visible entry, keyed by (from, to, amount, timestamp second) — the
//! first record of a pair wins.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::domain::transaction::Transaction;
use crate::ledger::Office;

/// One day of the report: entries and their amount total.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTotal {
    pub day: NaiveDate,
    pub total: i64,
    pub entries: Vec<Transaction>,
}

pub struct FeedService;

impl FeedService {
    /// Newest-first feed with transfer pairs deduplicated.
    pub fn feed(office: &Office) -> Vec<Transaction> {
        let mut entries: Vec<Transaction> = office.transactions.to_vec();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        let mut seen = HashSet::new();
        entries.retain(|txn| {
            seen.insert((
                txn.from_label.clone(),
                txn.to_label.clone(),
                txn.amount,
                txn.timestamp.timestamp(),
            ))
        });
        entries
    }

    /// Feed entries grouped by calendar day, newest day first, each day
    /// carrying the sum of its entry amounts.
    pub fn daily_report(office: &Office) -> Vec<DailyTotal> {
        let mut days: Vec<DailyTotal> = Vec::new();
        for txn in Self::feed(office) {
            let day = txn.timestamp.date_naive();
            match days.iter_mut().find(|entry| entry.day == day) {
                Some(entry) => {
                    entry.total += txn.amount;
                    entry.entries.push(txn);
                }
                None => days.push(DailyTotal {
                    day,
                    total: txn.amount,
                    entries: vec![txn],
                }),
            }
        }
        days
    }
}
