use serde::Deserialize;
use crate::domain::models::cart::CartLine;
use crate::domain::models::catalog::{CatalogQuery, SortOption};
use crate::domain::models::product::VariantCategory;
use crate::error::AppError;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub pin: String,
}

/// Query string of the listing endpoints. List filters are comma-separated.
#[derive(Deserialize, Default)]
pub struct ProductListQuery {
    pub q: Option<String>,
    pub sizes: Option<String>,
    pub categories: Option<String>,
    pub sort: Option<String>,
    pub page: Option<usize>,
}

impl ProductListQuery {
    pub fn into_catalog_query(self) -> Result<CatalogQuery, AppError> {
        let categories = split_list(self.categories.as_deref())
            .into_iter()
            .map(|c| c.parse::<VariantCategory>().map_err(AppError::Validation))
            .collect::<Result<Vec<_>, _>>()?;

        let sort = match self.sort.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => raw.parse::<SortOption>().map_err(AppError::Validation)?,
            None => SortOption::default(),
        };

        Ok(CatalogQuery {
            query: self.q.filter(|q| !q.trim().is_empty()),
            sizes: split_list(self.sizes.as_deref()),
            categories,
            sort,
            page: self.page.unwrap_or(1),
            ..CatalogQuery::default()
        })
    }
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Deserialize)]
pub struct ProductDetailQuery {
    pub category: Option<String>,
}

#[derive(Deserialize)]
pub struct SuggestQuery {
    pub q: Option<String>,
}

#[derive(Deserialize)]
pub struct CheckoutRequest {
    pub items: Vec<CartLine>,
}
