//! Header statistics over the category grid.

use crate::currency;
use crate::ledger::Office;

/// The three header figures. `planned` is carried but always zero — the
/// planning feature never landed and the header still shows the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub balance: i64,
    pub expenses: i64,
    pub planned: i64,
}

impl Stats {
    /// Labeled display lines for the header, formatted at the boundary.
    pub fn lines(&self) -> [(&'static str, String); 3] {
        [
            ("Баланс", currency::display_amount(self.balance)),
            ("Расходы", currency::display_amount(self.expenses)),
            ("В планах", currency::display_amount(self.planned)),
        ]
    }
}

pub struct SummaryService;

impl SummaryService {
    /// Folds category balances: a negative balance counts its magnitude
    /// into expenses and subtracts from the total, a positive one adds.
    pub fn stats(office: &Office) -> Stats {
        let mut balance = 0i64;
        let mut expenses = 0i64;
        for category in &office.categories {
            if category.amount < 0 {
                expenses += category.amount.abs();
                balance -= category.amount.abs();
            } else {
                balance += category.amount;
            }
        }
        Stats {
            balance,
            expenses,
            planned: 0,
        }
    }
}
