//! Category balance buckets shown on the main grid.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency;
use crate::domain::common::*;

/// Grid row holding client icons.
pub const ROW_CLIENTS: u8 = 1;
/// Grid row holding project icons.
pub const ROW_PROJECTS: u8 = 3;

/// A named balance bucket: a person, a project, or an expense type.
///
/// The balance is a running signed total; negative means net expense.
/// `icon` and `color` are symbolic tags the UI resolves, stored verbatim
/// (`"Building2"`, `"bg-blue-500"`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub title: String,
    #[serde(with = "currency::encoded")]
    pub amount: i64,
    pub icon: String,
    #[serde(default = "Category::default_color")]
    pub color: String,
    #[serde(default = "Category::default_row")]
    pub row: u8,
}

impl Category {
    pub fn new(
        title: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
        row: u8,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            amount: 0,
            icon: icon.into(),
            color: color.into(),
            row,
        }
    }

    pub fn with_amount(mut self, amount: i64) -> Self {
        self.amount = amount;
        self
    }

    pub fn default_color() -> String {
        "bg-emerald-500".into()
    }

    pub fn default_row() -> u8 {
        ROW_CLIENTS
    }
}

impl Identifiable for Category {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Category {
    fn name(&self) -> &str {
        &self.title
    }
}

impl Displayable for Category {
    fn display_label(&self) -> String {
        format!("{} ({})", self.title, currency::display_amount(self.amount))
    }
}
