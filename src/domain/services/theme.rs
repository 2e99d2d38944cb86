use tokio::sync::watch;
use crate::domain::models::event::{DefaultTheme, Event};
use crate::domain::models::theme::{Palette, StorefrontState, ThemeTokens, EVENT_LIGHT_FALLBACK};

/// Maps the resolved event (or its absence) onto presentation tokens.
pub fn tokens_for(current: Option<&Event>) -> ThemeTokens {
    match current {
        Some(event) => {
            let theme = &event.theme;
            ThemeTokens {
                primary: theme.primary_color.clone(),
                accent: theme.accent_color.clone(),
                light: theme.light_bg.clone().unwrap_or_else(|| EVENT_LIGHT_FALLBACK.to_string()),
                dark: theme.primary_color.clone(),
                banner_bg: theme.banner_bg.clone().unwrap_or_else(|| theme.primary_color.clone()),
            }
        }
        None => ThemeTokens::baseline(),
    }
}

pub fn resolve_state(current: Option<&Event>, default_theme: &DefaultTheme) -> StorefrontState {
    let palette = match current {
        Some(event) => Palette {
            primary_color: event.theme.primary_color.clone(),
            accent_color: event.theme.accent_color.clone(),
        },
        None => Palette::from(default_theme),
    };

    StorefrontState {
        current_event: current.cloned(),
        tokens: tokens_for(current),
        palette,
        discount_percent: current.map(|e| e.discount_percent).unwrap_or(0),
    }
}

/// Single owner of the storefront presentation state. `apply` is the only
/// writer; readers either take a snapshot or subscribe for changes.
pub struct ThemeState {
    tx: watch::Sender<StorefrontState>,
}

impl ThemeState {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(StorefrontState::baseline());
        Self { tx }
    }

    /// Returns true when the published state changed.
    pub fn apply(&self, current: Option<&Event>, default_theme: &DefaultTheme) -> bool {
        let next = resolve_state(current, default_theme);
        self.tx.send_if_modified(|state| {
            if *state == next {
                false
            } else {
                *state = next;
                true
            }
        })
    }

    pub fn current(&self) -> StorefrontState {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<StorefrontState> {
        self.tx.subscribe()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}
