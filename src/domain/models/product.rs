use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantCategory {
    Acrylic,
    Wooden,
    Metal,
}

impl VariantCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariantCategory::Acrylic => "Acrylic",
            VariantCategory::Wooden => "Wooden",
            VariantCategory::Metal => "Metal",
        }
    }
}

impl fmt::Display for VariantCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VariantCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "acrylic" => Ok(VariantCategory::Acrylic),
            "wooden" => Ok(VariantCategory::Wooden),
            "metal" => Ok(VariantCategory::Metal),
            other => Err(format!("Unknown category '{}'", other)),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Variant {
    pub size: String,
    pub price: f64,
    pub category: VariantCategory,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Notes {
    pub top: String,
    pub heart: String,
    pub base: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_tag: Option<String>,
    #[serde(default)]
    pub notes: Notes,
    pub variants: Vec<Variant>,
}

impl Product {
    /// Lowest variant price; `INFINITY` for a product without variants.
    pub fn min_price(&self) -> f64 {
        self.variants.iter().map(|v| v.price).fold(f64::INFINITY, f64::min)
    }

    /// Highest variant price; `NEG_INFINITY` for a product without variants.
    pub fn max_price(&self) -> f64 {
        self.variants.iter().map(|v| v.price).fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn has_category(&self, category: VariantCategory) -> bool {
        self.variants.iter().any(|v| v.category == category)
    }

    pub fn find_variant(&self, size: &str, category: VariantCategory) -> Option<&Variant> {
        self.variants.iter().find(|v| v.size == size && v.category == category)
    }
}
