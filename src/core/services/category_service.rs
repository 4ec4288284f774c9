//! Validated operations over the category grid.

use uuid::Uuid;

use crate::domain::category::Category;
use crate::ledger::Office;

use super::{ServiceError, ServiceResult};

pub struct CategoryService;

impl CategoryService {
    pub fn add(office: &mut Office, category: Category) -> ServiceResult<Uuid> {
        Self::validate_title(office, None, &category.title, category.row)?;
        Ok(office.add_category(category))
    }

    /// Applies `changes` to the category identified by `id`.
    ///
    /// Renaming rewrites the denormalized labels of every historical
    /// transaction that carries the old title, in the same borrow; the
    /// `category_id` links on those records are untouched.
    pub fn edit(office: &mut Office, id: Uuid, changes: Category) -> ServiceResult<()> {
        Self::validate_title(office, Some(id), &changes.title, changes.row)?;
        let old_title = {
            let category = office
                .category_mut(id)
                .ok_or_else(|| ServiceError::Invalid("Category not found".into()))?;
            let old_title = std::mem::replace(&mut category.title, changes.title.clone());
            category.amount = changes.amount;
            category.icon = changes.icon;
            category.color = changes.color;
            category.row = changes.row;
            old_title
        };

        if old_title != changes.title {
            let mut rewritten = 0usize;
            for txn in &mut office.transactions {
                if txn.from_label == old_title {
                    txn.from_label = changes.title.clone();
                    rewritten += 1;
                }
                if txn.to_label == old_title {
                    txn.to_label = changes.title.clone();
                    rewritten += 1;
                }
            }
            tracing::info!(
                from = %old_title,
                to = %changes.title,
                rewritten,
                "category renamed, historical labels rewritten"
            );
        }
        office.touch();
        Ok(())
    }

    /// Soft delete: removes only the icon; the transaction history
    /// survives in the store.
    pub fn remove_icon(office: &mut Office, id: Uuid) -> ServiceResult<Category> {
        let position = office
            .categories
            .iter()
            .position(|category| category.id == id)
            .ok_or_else(|| ServiceError::Invalid("Category not found".into()))?;
        let removed = office.categories.remove(position);
        office.touch();
        Ok(removed)
    }

    /// Hard delete: removes the icon and every transaction tagged with
    /// its id. Returns the category and the purged record count.
    pub fn purge(office: &mut Office, id: Uuid) -> ServiceResult<(Category, usize)> {
        let removed = Self::remove_icon(office, id)?;
        let before = office.transactions.len();
        office.transactions.retain(|txn| txn.category_id != id);
        let purged = before - office.transactions.len();
        office.touch();
        tracing::info!(title = %removed.title, purged, "category purged with history");
        Ok((removed, purged))
    }

    pub fn list(office: &Office) -> Vec<&Category> {
        office.categories.iter().collect()
    }

    pub fn list_row(office: &Office, row: u8) -> Vec<&Category> {
        office
            .categories
            .iter()
            .filter(|category| category.row == row)
            .collect()
    }

    /// Titles must be non-empty and unique within a grid row; the same
    /// title may appear in different rows (client icons do).
    fn validate_title(
        office: &Office,
        exclude: Option<Uuid>,
        candidate: &str,
        row: u8,
    ) -> ServiceResult<()> {
        let normalized = candidate.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(ServiceError::Invalid("Category title is empty".into()));
        }
        let duplicate = office.categories.iter().any(|category| {
            category.row == row
                && category.title.trim().to_lowercase() == normalized
                && exclude.map_or(true, |id| category.id != id)
        });
        if duplicate {
            Err(ServiceError::Invalid(format!(
                "Category `{}` already exists in row {}",
                candidate, row
            )))
        } else {
            Ok(())
        }
    }
}
