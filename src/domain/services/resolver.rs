use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use crate::domain::models::event::{Event, EventStatus};

/// Parses an event calendar date. Full RFC 3339 timestamps are accepted and
/// reduced to their calendar day in the store's zone.
pub fn parse_event_date(raw: &str, tz: Tz) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&tz).date_naive())
    })
}

/// First instant of `date` in local time. A midnight that falls into a DST
/// gap moves forward to the first valid local instant.
pub fn start_of_day(date: NaiveDate, tz: Tz) -> Option<DateTime<Utc>> {
    let naive = date.and_time(NaiveTime::MIN);
    tz.from_local_datetime(&naive)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(naive + Duration::hours(1))).earliest())
        .map(|dt| dt.with_timezone(&Utc))
}

/// Last instant (23:59:59.999) of `date` in local time.
pub fn end_of_day(date: NaiveDate, tz: Tz) -> Option<DateTime<Utc>> {
    let naive: NaiveDateTime = date.and_hms_milli_opt(23, 59, 59, 999)?;
    tz.from_local_datetime(&naive)
        .latest()
        .or_else(|| tz.from_local_datetime(&(naive - Duration::hours(1))).latest())
        .map(|dt| dt.with_timezone(&Utc))
}

/// Inclusive UTC window an event covers, or `None` when either date is
/// unparsable.
pub fn event_window(event: &Event, tz: Tz) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start = start_of_day(parse_event_date(&event.start_date, tz)?, tz)?;
    let end = end_of_day(parse_event_date(&event.end_date, tz)?, tz)?;
    Some((start, end))
}

pub fn is_event_current(event: &Event, now: DateTime<Utc>, tz: Tz) -> bool {
    if !event.is_active {
        return false;
    }
    match event_window(event, tz) {
        Some((start, end)) => now >= start && now <= end,
        None => false,
    }
}

/// Picks the event that is current at `now`. When several qualify, the first
/// in list order wins.
pub fn resolve_current_event(events: &[Event], now: DateTime<Utc>, tz: Tz) -> Option<&Event> {
    events.iter().find(|e| is_event_current(e, now, tz))
}

pub fn event_status(event: &Event, now: DateTime<Utc>, tz: Tz) -> EventStatus {
    if !event.is_active {
        EventStatus::Inactive
    } else if is_event_current(event, now, tz) {
        EventStatus::Live
    } else {
        EventStatus::Scheduled
    }
}
