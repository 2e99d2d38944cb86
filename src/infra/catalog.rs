use crate::domain::services::catalog::Catalog;
use crate::error::AppError;

const PRODUCTS_JSON: &str = include_str!("../../data/products.json");

/// Parses the product list bundled into the binary.
pub fn load_catalog() -> Result<Catalog, AppError> {
    Catalog::from_json(PRODUCTS_JSON)
        .map_err(|e| AppError::InternalWithMsg(format!("Invalid product catalog: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::catalog::CANONICAL_SIZES;

    #[test]
    fn test_bundled_catalog_parses() {
        let catalog = load_catalog().unwrap();
        assert!(!catalog.products().is_empty());
        assert!(catalog.products().iter().all(|p| !p.variants.is_empty()));
        assert!(catalog.available_sizes().iter().all(|s| CANONICAL_SIZES.contains(&s.as_str())));
    }
}
