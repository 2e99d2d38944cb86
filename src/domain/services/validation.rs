use chrono::NaiveDate;
use std::collections::HashSet;
use crate::domain::models::event::{Event, EventConfig};
use crate::error::AppError;

pub const MAX_DISCOUNT_PERCENT: i32 = 50;

fn parse_calendar_date(field: &str, raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("{} must be a YYYY-MM-DD date", field)))
}

/// Constraints enforced when an admin writes an event.
pub fn validate_event(event: &Event) -> Result<(), AppError> {
    if event.id.trim().is_empty() {
        return Err(AppError::Validation("Event id is required".into()));
    }
    if event.name.trim().is_empty() {
        return Err(AppError::Validation("Event name is required".into()));
    }

    let start = parse_calendar_date("startDate", &event.start_date)?;
    let end = parse_calendar_date("endDate", &event.end_date)?;
    if end < start {
        return Err(AppError::Validation("End date must be on or after start date".into()));
    }

    if !(0..=MAX_DISCOUNT_PERCENT).contains(&event.discount_percent) {
        return Err(AppError::Validation(format!(
            "discountPercent must be between 0 and {}",
            MAX_DISCOUNT_PERCENT
        )));
    }

    if event.theme.primary_color.trim().is_empty() || event.theme.accent_color.trim().is_empty() {
        return Err(AppError::Validation("Theme primary and accent colors are required".into()));
    }

    Ok(())
}

pub fn validate_unique_ids(events: &[Event]) -> Result<(), AppError> {
    let mut ids = HashSet::new();
    for event in events {
        if !ids.insert(event.id.as_str()) {
            return Err(AppError::Validation(format!("Duplicate event id '{}'", event.id)));
        }
    }
    Ok(())
}

/// Full check for a document submitted as a whole.
pub fn validate_config(config: &EventConfig) -> Result<(), AppError> {
    for event in &config.events {
        validate_event(event)?;
    }
    validate_unique_ids(&config.events)?;

    if config.default_theme.primary_color.trim().is_empty() || config.default_theme.accent_color.trim().is_empty() {
        return Err(AppError::Validation("Default theme colors are required".into()));
    }
    Ok(())
}
