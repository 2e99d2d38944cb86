use serde::{Deserialize, Serialize};

/// Colour tokens an event overrides while it is current.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventTheme {
    pub primary_color: String,
    pub accent_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light_bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_bg: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventBanner {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dismissible: Option<bool>,
}

impl EventBanner {
    pub fn is_dismissible(&self) -> bool {
        self.dismissible.unwrap_or(false)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct HeroOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl HeroOverride {
    pub fn is_empty(&self) -> bool {
        self.headline.is_none() && self.tagline.is_none() && self.image.is_none()
    }
}

/// A time-boxed promotional campaign.
///
/// Dates are kept as the calendar strings the admin entered (`YYYY-MM-DD`).
/// Documents written by older tooling may carry values that do not parse;
/// those events load fine but never resolve as current.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    pub start_date: String,
    pub end_date: String,
    pub theme: EventTheme,
    pub banner: EventBanner,
    #[serde(default)]
    pub discount_percent: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_override: Option<HeroOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_products: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DefaultTheme {
    pub primary_color: String,
    pub accent_color: String,
}

impl Default for DefaultTheme {
    fn default() -> Self {
        Self {
            primary_color: "#043927".to_string(),
            accent_color: "#D4AF37".to_string(),
        }
    }
}

/// The whole-document unit of persistence.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct EventConfig {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub default_theme: DefaultTheme,
}

impl EventConfig {
    pub fn find(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Replaces the event with the same id in place, or appends it.
    pub fn upsert(&mut self, event: Event) {
        match self.events.iter_mut().find(|e| e.id == event.id) {
            Some(existing) => *existing = event,
            None => self.events.push(event),
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<Event> {
        let idx = self.events.iter().position(|e| e.id == id)?;
        Some(self.events.remove(idx))
    }

    pub fn toggle_active(&mut self, id: &str) -> Option<&Event> {
        let event = self.events.iter_mut().find(|e| e.id == id)?;
        event.is_active = !event.is_active;
        Some(event)
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    Live,
    Scheduled,
    Inactive,
}
