//! List Categories Use Case
//!
//! Returns the id-to-name mapping of every category.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::repository::CategoryRepository;
use crate::domain::services::project_categories;
use crate::error::{TriviaError, TriviaResult};

/// List categories use case
pub struct ListCategoriesUseCase<C>
where
    C: CategoryRepository,
{
    categories: Arc<C>,
}

impl<C> ListCategoriesUseCase<C>
where
    C: CategoryRepository,
{
    pub fn new(categories: Arc<C>) -> Self {
        Self { categories }
    }

    /// An empty category table is reported as not-found, by contract.
    pub async fn execute(&self) -> TriviaResult<BTreeMap<i64, String>> {
        let categories = self.categories.list_all().await?;
        let mapping = project_categories(&categories);

        if mapping.is_empty() {
            return Err(TriviaError::NoCategories);
        }

        Ok(mapping)
    }
}
