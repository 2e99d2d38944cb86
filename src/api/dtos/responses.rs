use serde::Serialize;
use crate::domain::models::catalog::Page;
use crate::domain::models::event::{DefaultTheme, Event, EventConfig, EventStatus};
use crate::domain::models::product::{Notes, Product, VariantCategory};
use crate::domain::models::theme::{Palette, StorefrontState, ThemeTokens};
use crate::domain::services::discount::sale_price;

pub const DEFAULT_HERO_HEADLINE: &str = "Hamper World";
pub const DEFAULT_HERO_TAGLINE: &str = "Crafting Memories";
pub const DEFAULT_HERO_IMAGE: &str = "/hero-hamper.png";

/// Envelope for admin writes.
#[derive(Serialize)]
pub struct WriteResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> WriteResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self { success: true, message: message.into(), data }
    }
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub authenticated: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminEventView {
    #[serde(flatten)]
    pub event: Event,
    pub status: EventStatus,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminEventsResponse {
    pub events: Vec<AdminEventView>,
    pub default_theme: DefaultTheme,
    pub current_event_id: Option<String>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct VariantView {
    pub size: String,
    pub category: VariantCategory,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounted_price: Option<f64>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_tag: Option<String>,
    pub notes: Notes,
    pub variants: Vec<VariantView>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl ProductView {
    /// Prices as shown while `current` runs, optionally narrowed to one
    /// container category.
    pub fn build(product: &Product, current: Option<&Event>, category: Option<VariantCategory>) -> Self {
        let variants: Vec<VariantView> = product
            .variants
            .iter()
            .filter(|v| category.is_none_or(|c| v.category == c))
            .map(|v| VariantView {
                size: v.size.clone(),
                category: v.category,
                price: v.price,
                discounted_price: sale_price(current, v.price),
            })
            .collect();

        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            image_url: product.image_url.clone(),
            collection_tag: product.collection_tag.clone(),
            notes: product.notes.clone(),
            min_price: Some(product.min_price()).filter(|p| p.is_finite()),
            max_price: Some(product.max_price()).filter(|p| p.is_finite()),
            variants,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionResponse {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub products: Page<ProductView>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedResponse {
    pub active: bool,
    pub event_name: Option<String>,
    pub products: Vec<ProductView>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub id: String,
    pub name: String,
    pub discount_percent: i32,
    pub featured_products: Vec<String>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BannerView {
    pub text: String,
    pub link: Option<String>,
    pub dismissible: bool,
    pub background: String,
}

#[derive(Serialize, Debug)]
pub struct HeroView {
    pub headline: String,
    pub tagline: String,
    pub image: String,
}

#[derive(Serialize, Debug)]
pub struct StorefrontResponse {
    pub event: Option<EventSummary>,
    pub theme: ThemeTokens,
    pub palette: Palette,
    pub banner: Option<BannerView>,
    pub hero: HeroView,
}

impl StorefrontResponse {
    pub fn build(state: StorefrontState, banner_dismissed: bool) -> Self {
        let event = state.current_event.as_ref();
        let hero = event.and_then(|e| e.hero_override.as_ref());

        let banner = event
            .filter(|e| !(e.banner.is_dismissible() && banner_dismissed))
            .map(|e| BannerView {
                text: e.banner.text.clone(),
                link: e.banner.link.clone(),
                dismissible: e.banner.is_dismissible(),
                background: state.tokens.banner_bg.clone(),
            });

        let hero = HeroView {
            headline: hero
                .and_then(|h| h.headline.clone())
                .unwrap_or_else(|| DEFAULT_HERO_HEADLINE.to_string()),
            tagline: hero
                .and_then(|h| h.tagline.clone())
                .unwrap_or_else(|| DEFAULT_HERO_TAGLINE.to_string()),
            image: hero
                .and_then(|h| h.image.clone())
                .unwrap_or_else(|| DEFAULT_HERO_IMAGE.to_string()),
        };

        Self {
            event: event.map(|e| EventSummary {
                id: e.id.clone(),
                name: e.name.clone(),
                discount_percent: e.discount_percent,
                featured_products: e.featured_products.clone().unwrap_or_default(),
            }),
            banner,
            hero,
            theme: state.tokens,
            palette: state.palette,
        }
    }
}

pub fn admin_events(config: EventConfig, statuses: Vec<EventStatus>, current: Option<String>) -> AdminEventsResponse {
    AdminEventsResponse {
        events: config
            .events
            .into_iter()
            .zip(statuses)
            .map(|(event, status)| AdminEventView { event, status })
            .collect(),
        default_theme: config.default_theme,
        current_event_id: current,
    }
}
