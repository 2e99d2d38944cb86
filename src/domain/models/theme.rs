use serde::Serialize;
use crate::domain::models::event::{DefaultTheme, Event};

pub const BASELINE_PRIMARY: &str = "#043927";
pub const BASELINE_ACCENT: &str = "#D4AF37";
pub const BASELINE_LIGHT: &str = "#F9F9F9";
pub const BASELINE_DARK: &str = "#022216";
pub const EVENT_LIGHT_FALLBACK: &str = "#FFF5F8";

/// Presentation tokens consumed by every colour-dependent piece of chrome.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTokens {
    pub primary: String,
    pub accent: String,
    pub light: String,
    pub dark: String,
    pub banner_bg: String,
}

impl ThemeTokens {
    pub fn baseline() -> Self {
        Self {
            primary: BASELINE_PRIMARY.to_string(),
            accent: BASELINE_ACCENT.to_string(),
            light: BASELINE_LIGHT.to_string(),
            dark: BASELINE_DARK.to_string(),
            banner_bg: BASELINE_PRIMARY.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub primary_color: String,
    pub accent_color: String,
}

impl From<&DefaultTheme> for Palette {
    fn from(theme: &DefaultTheme) -> Self {
        Self {
            primary_color: theme.primary_color.clone(),
            accent_color: theme.accent_color.clone(),
        }
    }
}

/// Resolved storefront presentation: what every themed component reads.
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontState {
    pub current_event: Option<Event>,
    pub tokens: ThemeTokens,
    pub palette: Palette,
    pub discount_percent: i32,
}

impl StorefrontState {
    pub fn baseline() -> Self {
        Self {
            current_event: None,
            tokens: ThemeTokens::baseline(),
            palette: Palette::from(&DefaultTheme::default()),
            discount_percent: 0,
        }
    }

    pub fn is_event_active(&self) -> bool {
        self.current_event.is_some()
    }
}
