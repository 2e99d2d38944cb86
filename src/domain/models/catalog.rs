use serde::{Deserialize, Serialize};
use std::str::FromStr;
use crate::domain::models::product::{Product, VariantCategory};

pub const PAGE_SIZE: usize = 24;
pub const CANONICAL_SIZES: [&str; 4] = ["100ml", "250ml", "500ml", "1Kg"];

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    #[default]
    #[serde(rename = "name-asc")]
    NameAsc,
    #[serde(rename = "price-low")]
    PriceLow,
    #[serde(rename = "price-high")]
    PriceHigh,
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name-asc" => Ok(SortOption::NameAsc),
            "price-low" => Ok(SortOption::PriceLow),
            "price-high" => Ok(SortOption::PriceHigh),
            other => Err(format!("Unknown sort option '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuery {
    pub query: Option<String>,
    pub sizes: Vec<String>,
    pub categories: Vec<VariantCategory>,
    pub sort: SortOption,
    pub page: usize,
    pub page_size: usize,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            query: None,
            sizes: Vec::new(),
            categories: Vec::new(),
            sort: SortOption::default(),
            page: 1,
            page_size: PAGE_SIZE,
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

/// Browsable collections, keyed by their path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Acrylic,
    Wooden,
    Metal,
    All,
}

impl CollectionKind {
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "acrylic" => Some(CollectionKind::Acrylic),
            "wooden" => Some(CollectionKind::Wooden),
            "metal" => Some(CollectionKind::Metal),
            "all" => Some(CollectionKind::All),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CollectionKind::Acrylic => "Acrylic Collection",
            CollectionKind::Wooden => "Vintage Wooden",
            CollectionKind::Metal => "Luxury Metal",
            CollectionKind::All => "All Collections",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CollectionKind::Acrylic => "Modern, transparent elegance for vibrant gifts.",
            CollectionKind::Wooden => "Rustic charm for organic and earthy hampers.",
            CollectionKind::Metal => "Sophisticated gold wire baskets for premium spa kits.",
            CollectionKind::All => "Discover our full range of handcrafted hampers.",
        }
    }

    pub fn includes(&self, product: &Product) -> bool {
        match self {
            CollectionKind::Acrylic => product.has_category(VariantCategory::Acrylic),
            CollectionKind::Wooden => product.has_category(VariantCategory::Wooden),
            CollectionKind::Metal => product.has_category(VariantCategory::Metal),
            CollectionKind::All => true,
        }
    }
}
