use sqlx::FromRow;
use crate::domain::models::event::{DefaultTheme, Event, EventBanner, EventConfig, EventTheme, HeroOverride};

/// Column shape of one `events` row.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct EventRow {
    pub id: String,
    pub position: i32,
    pub name: String,
    pub is_active: bool,
    pub start_date: String,
    pub end_date: String,
    pub primary_color: String,
    pub accent_color: String,
    pub light_bg: Option<String>,
    pub banner_bg: Option<String>,
    pub banner_text: String,
    pub banner_link: Option<String>,
    pub banner_dismissible: Option<bool>,
    pub discount_percent: i32,
    pub hero_headline: Option<String>,
    pub hero_tagline: Option<String>,
    pub hero_image: Option<String>,
    pub featured_products: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct StoreConfigRow {
    pub default_primary_color: String,
    pub default_accent_color: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigRows {
    pub store: StoreConfigRow,
    pub events: Vec<EventRow>,
}

impl EventRow {
    pub fn from_event(event: &Event, position: i32) -> Self {
        let hero = event.hero_override.as_ref().filter(|h| !h.is_empty());

        Self {
            id: event.id.clone(),
            position,
            name: event.name.clone(),
            is_active: event.is_active,
            start_date: event.start_date.clone(),
            end_date: event.end_date.clone(),
            primary_color: event.theme.primary_color.clone(),
            accent_color: event.theme.accent_color.clone(),
            light_bg: event.theme.light_bg.clone(),
            banner_bg: event.theme.banner_bg.clone(),
            banner_text: event.banner.text.clone(),
            banner_link: event.banner.link.clone(),
            banner_dismissible: event.banner.dismissible,
            discount_percent: event.discount_percent,
            hero_headline: hero.and_then(|h| h.headline.clone()),
            hero_tagline: hero.and_then(|h| h.tagline.clone()),
            hero_image: hero.and_then(|h| h.image.clone()),
            featured_products: event
                .featured_products
                .as_ref()
                .and_then(|ids| serde_json::to_string(ids).ok()),
        }
    }

    pub fn into_event(self) -> Event {
        let hero = HeroOverride {
            headline: self.hero_headline,
            tagline: self.hero_tagline,
            image: self.hero_image,
        };

        Event {
            id: self.id,
            name: self.name,
            is_active: self.is_active,
            start_date: self.start_date,
            end_date: self.end_date,
            theme: EventTheme {
                primary_color: self.primary_color,
                accent_color: self.accent_color,
                light_bg: self.light_bg,
                banner_bg: self.banner_bg,
            },
            banner: EventBanner {
                text: self.banner_text,
                link: self.banner_link,
                dismissible: self.banner_dismissible,
            },
            discount_percent: self.discount_percent,
            hero_override: (!hero.is_empty()).then_some(hero),
            // Malformed JSON is treated as no featured products.
            featured_products: self
                .featured_products
                .and_then(|raw| serde_json::from_str(&raw).ok()),
        }
    }
}

impl ConfigRows {
    pub fn from_config(config: &EventConfig) -> Self {
        Self {
            store: StoreConfigRow {
                default_primary_color: config.default_theme.primary_color.clone(),
                default_accent_color: config.default_theme.accent_color.clone(),
            },
            events: config
                .events
                .iter()
                .enumerate()
                .map(|(i, e)| EventRow::from_event(e, i as i32))
                .collect(),
        }
    }

    pub fn into_config(self) -> EventConfig {
        let mut events = self.events;
        events.sort_by_key(|row| row.position);

        EventConfig {
            events: events.into_iter().map(EventRow::into_event).collect(),
            default_theme: DefaultTheme {
                primary_color: self.store.default_primary_color,
                accent_color: self.store.default_accent_color,
            },
        }
    }
}
