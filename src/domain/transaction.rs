//! Append-only transaction records backing the feed and reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::category::Category;
use crate::domain::common::{Displayable, Identifiable};

/// Direction of a transaction relative to its category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// A single ledger entry.
///
/// `from_label` / `to_label` carry the category *titles* at the time of
/// the operation, denormalized next to the stable `category_id` — both
/// are stored, matching the historical documents. A category rename must
/// rewrite the labels of its past transactions to stay consistent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    pub category_id: Uuid,
    #[serde(rename = "fromUser")]
    pub from_label: String,
    #[serde(rename = "toUser")]
    pub to_label: String,
    pub amount: i64,
    pub description: String,
    #[serde(rename = "date")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl Transaction {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        category_id: Uuid,
        kind: TransactionKind,
        from_label: impl Into<String>,
        to_label: impl Into<String>,
        amount: i64,
        description: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            category_id,
            from_label: from_label.into(),
            to_label: to_label.into(),
            amount,
            description: description.into(),
            timestamp,
            kind,
        }
    }

    /// Builds the record pair one transfer appends: an expense tagged to
    /// the source category and an income tagged to the target, sharing
    /// amount, description, and timestamp.
    pub fn transfer_pair(
        source: &Category,
        target: &Category,
        amount: i64,
        description: &str,
        at: DateTime<Utc>,
    ) -> (Self, Self) {
        let withdrawal = Self::new(
            source.id,
            TransactionKind::Expense,
            source.title.clone(),
            target.title.clone(),
            amount,
            description,
            at,
        );
        let deposit = Self::new(
            target.id,
            TransactionKind::Income,
            source.title.clone(),
            target.title.clone(),
            amount,
            description,
            at,
        );
        (withdrawal, deposit)
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("txn:{} [{:?}]", self.id, self.kind)
    }
}
