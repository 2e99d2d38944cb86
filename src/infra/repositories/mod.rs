pub mod event_row;
pub mod file_event_store;
pub mod kv_event_store;
pub mod memory_dismissal_store;
pub mod postgres_dismissal_store;
pub mod postgres_event_store;
pub mod sqlite_dismissal_store;
pub mod sqlite_event_store;
