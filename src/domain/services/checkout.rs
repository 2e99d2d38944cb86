use serde::Serialize;
use tera::{Context, Tera};
use tracing::error;
use crate::domain::models::cart::{Cart, CartItem, CartLine};
use crate::domain::models::event::Event;
use crate::domain::services::catalog::Catalog;
use crate::domain::services::discount::{format_amount, format_rupees, price_for};
use crate::error::AppError;

const ORDER_TEMPLATE_NAME: &str = "whatsapp_order.txt";
const ORDER_TEMPLATE: &str = "Hello {{ store_name }}, I am interested in ordering the following:\n\n\
{% for line in lines %}• {{ line.quantity }}x {{ line.name }} ({{ line.category }} - {{ line.size }}) - ₹{{ line.amount }}\n{% endfor %}\
\nTotal Estimate: {{ total }}";

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderHandoff {
    pub message: String,
    pub url: String,
    pub total_items: u32,
    pub total_price: f64,
}

#[derive(Serialize)]
struct MessageLine<'a> {
    quantity: u32,
    name: &'a str,
    category: &'a str,
    size: &'a str,
    amount: String,
}

/// Turns a cart into a pre-filled WhatsApp conversation. Nothing is stored.
pub struct CheckoutService {
    templates: Tera,
    store_name: String,
    whatsapp_number: String,
}

impl CheckoutService {
    pub fn new(store_name: String, whatsapp_number: String) -> Result<Self, AppError> {
        let mut templates = Tera::default();
        templates
            .add_raw_template(ORDER_TEMPLATE_NAME, ORDER_TEMPLATE)
            .map_err(|e| AppError::InternalWithMsg(format!("Order template error: {}", e)))?;

        Ok(Self { templates, store_name, whatsapp_number })
    }

    /// Prices every line from the catalog, applying the running event's
    /// discount.
    pub fn build_cart(&self, catalog: &Catalog, current: Option<&Event>, lines: &[CartLine]) -> Result<Cart, AppError> {
        if lines.is_empty() {
            return Err(AppError::Validation("Cart is empty".into()));
        }

        let mut cart = Cart::new();
        for line in lines {
            if line.quantity < 1 {
                return Err(AppError::Validation(format!("Quantity for '{}' must be at least 1", line.product_id)));
            }
            let product = catalog
                .find(&line.product_id)
                .ok_or_else(|| AppError::Validation(format!("Unknown product '{}'", line.product_id)))?;
            let variant = product.find_variant(&line.size, line.category).ok_or_else(|| {
                AppError::Validation(format!(
                    "'{}' is not available as {} {}",
                    product.name, line.category, line.size
                ))
            })?;

            cart.add(CartItem {
                product_id: product.id.clone(),
                product_name: product.name.clone(),
                size: variant.size.clone(),
                category: variant.category,
                unit_price: price_for(current, variant.price),
                quantity: u32::try_from(line.quantity).unwrap_or(u32::MAX),
            });
        }
        Ok(cart)
    }

    pub fn compose(&self, cart: &Cart) -> Result<OrderHandoff, AppError> {
        let lines: Vec<MessageLine> = cart
            .items()
            .iter()
            .map(|item| MessageLine {
                quantity: item.quantity,
                name: &item.product_name,
                category: item.category.as_str(),
                size: &item.size,
                amount: format_amount(item.line_total()),
            })
            .collect();

        let mut context = Context::new();
        context.insert("store_name", &self.store_name);
        context.insert("lines", &lines);
        context.insert("total", &format_rupees(cart.total_price()));

        let message = self.templates.render(ORDER_TEMPLATE_NAME, &context).map_err(|e| {
            error!("Order message render failed: {:?}", e);
            AppError::InternalWithMsg(format!("Order message render failed: {}", e))
        })?;

        let url = format!("https://wa.me/{}?text={}", self.whatsapp_number, urlencoding::encode(&message));

        Ok(OrderHandoff {
            message,
            url,
            total_items: cart.total_items(),
            total_price: cart.total_price(),
        })
    }
}
