use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::ledger::{Category, Ledger};

pub struct CategoryService;

impl CategoryService {
    pub fn add(ledger: &mut Ledger, category: Category) -> ServiceResult<Uuid> {
        Self::validate_name(ledger, None, &category.name)?;
        Ok(ledger.add_category(category))
    }

    pub fn edit(ledger: &mut Ledger, id: Uuid, changes: Category) -> ServiceResult<()> {
        Self::validate_name(ledger, Some(id), &changes.name)?;
        let category = ledger
            .category_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Category not found".into()))?;
        category.name = changes.name;
        category.kind = changes.kind;
        category.color = changes.color;
        ledger.touch();
        Ok(())
    }

    /// Removes a category. Transactions, recurring definitions, and budgets
    /// keep their reference; lookups for it resolve to nothing afterward.
    pub fn remove(ledger: &mut Ledger, id: Uuid) -> ServiceResult<()> {
        let before = ledger.categories.len();
        ledger.categories.retain(|category| category.id != id);
        if ledger.categories.len() == before {
            return Err(ServiceError::Invalid("Category not found".into()));
        }
        ledger.touch();
        Ok(())
    }

    pub fn list(ledger: &Ledger) -> Vec<&Category> {
        ledger.categories.iter().collect()
    }

    fn validate_name(ledger: &Ledger, exclude: Option<Uuid>, candidate: &str) -> ServiceResult<()> {
        let normalized = candidate.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return Err(ServiceError::Invalid("Category name must not be empty".into()));
        }
        let duplicate = ledger.categories.iter().any(|category| {
            let name = category.name.trim().to_ascii_lowercase();
            name == normalized && exclude.map_or(true, |id| category.id != id)
        });
        if duplicate {
            Err(ServiceError::Invalid(format!(
                "Category `{}` already exists",
                candidate
            )))
        } else {
            Ok(())
        }
    }
}
