//! Paired debit/credit transfers between categories.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::category::Category;
use crate::domain::transaction::Transaction;
use crate::ledger::Office;

use super::{ServiceError, ServiceResult};

/// Everything one transfer commits: two new balances and two records.
/// Computed up front so the whole set can be handed to an atomic-commit
/// boundary.
#[derive(Debug, Clone)]
pub struct TransferPlan {
    pub source_id: Uuid,
    pub target_id: Uuid,
    pub new_source_amount: i64,
    pub new_target_amount: i64,
    pub withdrawal: Transaction,
    pub deposit: Transaction,
}

pub struct TransferService;

impl TransferService {
    /// Computes the paired mutation for a transfer without applying it.
    ///
    /// `amount` must be positive; the source balance may go negative
    /// (overdraft is allowed). Both transaction records share `amount`,
    /// `description`, and the single timestamp `at`.
    pub fn plan(
        source: &Category,
        target: &Category,
        amount: i64,
        description: &str,
        at: DateTime<Utc>,
    ) -> ServiceResult<TransferPlan> {
        if amount <= 0 {
            return Err(ServiceError::Invalid(
                "Transfer amount must be positive".into(),
            ));
        }
        if source.id == target.id {
            return Err(ServiceError::Invalid(
                "Source and target categories must differ".into(),
            ));
        }
        let (withdrawal, deposit) = Transaction::transfer_pair(source, target, amount, description, at);
        Ok(TransferPlan {
            source_id: source.id,
            target_id: target.id,
            new_source_amount: source.amount - amount,
            new_target_amount: target.amount + amount,
            withdrawal,
            deposit,
        })
    }

    /// Validates, plans, and applies a transfer inside one borrow: both
    /// balance writes and both record inserts land together, or nothing
    /// is touched.
    pub fn execute(
        office: &mut Office,
        source_id: Uuid,
        target_id: Uuid,
        amount: i64,
        description: &str,
    ) -> ServiceResult<TransferPlan> {
        let source = office
            .category(source_id)
            .cloned()
            .ok_or_else(|| ServiceError::Invalid("Source category not found".into()))?;
        let target = office
            .category(target_id)
            .cloned()
            .ok_or_else(|| ServiceError::Invalid("Target category not found".into()))?;

        let plan = Self::plan(&source, &target, amount, description, Utc::now())?;

        if let Some(category) = office.category_mut(source_id) {
            category.amount = plan.new_source_amount;
        }
        if let Some(category) = office.category_mut(target_id) {
            category.amount = plan.new_target_amount;
        }
        office.add_transaction(plan.withdrawal.clone());
        office.add_transaction(plan.deposit.clone());

        tracing::info!(
            amount,
            from = %source.title,
            to = %target.title,
            "transfer executed"
        );
        Ok(plan)
    }

    /// Zeroes every category balance and purges the transaction history
    /// in one operation. Irreversible; returns the purged record count.
    pub fn reset_all(office: &mut Office) -> usize {
        for category in &mut office.categories {
            category.amount = 0;
        }
        let purged = office.transactions.len();
        office.transactions.clear();
        office.touch();
        tracing::warn!(purged, "all balances reset and history purged");
        purged
    }
}
