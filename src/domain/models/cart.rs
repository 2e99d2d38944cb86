use serde::{Deserialize, Serialize};
use crate::domain::models::product::VariantCategory;

/// A line as the client submits it; prices are looked up server-side.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: String,
    pub size: String,
    pub category: VariantCategory,
    pub quantity: i64,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,
    pub product_name: String,
    pub size: String,
    pub category: VariantCategory,
    pub unit_price: f64,
    pub quantity: u32,
}

impl CartItem {
    fn same_line(&self, product_id: &str, size: &str, category: VariantCategory) -> bool {
        self.product_id == product_id && self.size == size && self.category == category
    }

    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

/// Lines are identified by product id, size and category together.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn add(&mut self, item: CartItem) {
        match self.items.iter_mut().find(|i| i.same_line(&item.product_id, &item.size, item.category)) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(item.quantity),
            None => self.items.push(item),
        }
    }

    pub fn remove(&mut self, product_id: &str, size: &str, category: VariantCategory) {
        self.items.retain(|i| !i.same_line(product_id, size, category));
    }

    pub fn update_quantity(&mut self, product_id: &str, size: &str, category: VariantCategory, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id, size, category);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.same_line(product_id, size, category)) {
            item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    pub fn total_items(&self) -> u32 {
        self.items.iter().fold(0u32, |total, i| total.saturating_add(i.quantity))
    }

    pub fn total_price(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }
}
