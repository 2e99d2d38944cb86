use std::cmp::Ordering;
use crate::domain::models::catalog::{CatalogQuery, CollectionKind, Page, SortOption, CANONICAL_SIZES, PAGE_SIZE};
use crate::domain::models::product::Product;

pub const SUGGESTION_LIMIT: usize = 8;
pub const SIGNATURE_LIMIT: usize = 12;
pub const SIGNATURE_TAG: &str = "Signature";

/// Static, read-only product list loaded once at boot.
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(raw)?))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Distinct sizes in canonical order.
    pub fn available_sizes(&self) -> Vec<String> {
        let mut sizes: Vec<String> = Vec::new();
        for variant in self.products.iter().flat_map(|p| p.variants.iter()) {
            if !sizes.contains(&variant.size) {
                sizes.push(variant.size.clone());
            }
        }
        sort_sizes(&mut sizes);
        sizes
    }

    pub fn search(&self, query: &CatalogQuery) -> Page<&Product> {
        self.collection(CollectionKind::All, query)
    }

    /// Text filter, collection filter, category and size filters, sort,
    /// then paginate.
    pub fn collection(&self, kind: CollectionKind, query: &CatalogQuery) -> Page<&Product> {
        let terms = search_terms(query.query.as_deref().unwrap_or_default());

        let mut result: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| matches_terms(p, &terms, query.query.as_deref()))
            .filter(|p| kind.includes(p))
            .filter(|p| {
                query.categories.is_empty()
                    || p.variants.iter().any(|v| query.categories.contains(&v.category))
            })
            .filter(|p| {
                query.sizes.is_empty()
                    || p.variants.iter().any(|v| query.sizes.contains(&v.size))
            })
            .collect();

        sort_products(&mut result, query.sort);
        paginate(result, query.page, query.page_size)
    }

    /// Quick matches for the search box: only for queries longer than one
    /// character, capped at `limit`.
    pub fn suggest(&self, raw_query: &str, limit: usize) -> Vec<&Product> {
        if raw_query.trim().chars().count() <= 1 {
            return Vec::new();
        }
        let terms = search_terms(raw_query);
        self.products
            .iter()
            .filter(|p| matches_terms(p, &terms, Some(raw_query)))
            .take(limit)
            .collect()
    }

    /// Products in the order the ids are listed; unknown ids are skipped.
    pub fn featured(&self, ids: &[String]) -> Vec<&Product> {
        let mut seen: Vec<&str> = Vec::new();
        ids.iter()
            .filter(|id| {
                if seen.contains(&id.as_str()) {
                    false
                } else {
                    seen.push(id.as_str());
                    true
                }
            })
            .filter_map(|id| self.find(id))
            .collect()
    }

    pub fn signature(&self, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.collection_tag.as_deref() == Some(SIGNATURE_TAG))
            .take(limit)
            .collect()
    }
}

pub fn search_terms(raw: &str) -> Vec<String> {
    raw.to_lowercase().split_whitespace().map(str::to_string).collect()
}

/// Every term must appear in at least one of name, description or a
/// variant category. An exact id match also counts.
pub fn matches_terms(product: &Product, terms: &[String], raw_query: Option<&str>) -> bool {
    if terms.is_empty() {
        return true;
    }
    if let Some(raw) = raw_query
        && product.id.eq_ignore_ascii_case(raw.trim())
    {
        return true;
    }

    let name = product.name.to_lowercase();
    let description = product.description.to_lowercase();
    let categories: Vec<String> = product.variants.iter().map(|v| v.category.as_str().to_lowercase()).collect();

    terms.iter().all(|term| {
        name.contains(term.as_str())
            || description.contains(term.as_str())
            || categories.iter().any(|c| c.contains(term.as_str()))
    })
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

/// Stable sort; equal keys keep catalog order.
pub fn sort_products(products: &mut [&Product], sort: SortOption) {
    match sort {
        SortOption::NameAsc => products.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortOption::PriceLow => products.sort_by(|a, b| a.min_price().total_cmp(&b.min_price())),
        SortOption::PriceHigh => products.sort_by(|a, b| b.max_price().total_cmp(&a.max_price())),
    }
}

/// Position in the canonical size list; sizes outside it rank -1 and so
/// sort ahead of every known size.
pub fn size_rank(size: &str) -> i64 {
    CANONICAL_SIZES
        .iter()
        .position(|s| *s == size)
        .map(|i| i as i64)
        .unwrap_or(-1)
}

pub fn sort_sizes(sizes: &mut [String]) {
    sizes.sort_by_key(|s| size_rank(s));
}

/// 1-based pagination. Page 0 or a page past the end yields no items.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let page_size = if page_size == 0 { PAGE_SIZE } else { page_size };
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);

    let items = if page == 0 || page > total_pages {
        Vec::new()
    } else {
        items.into_iter().skip((page - 1) * page_size).take(page_size).collect()
    };

    Page { items, page, page_size, total_items, total_pages }
}
