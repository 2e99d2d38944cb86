use crate::domain::{models::event::EventConfig, ports::EventStore};
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::{debug, error};

pub const EVENTS_KEY: &str = "events";

/// Events document held under a single key of an HTTP key-value config
/// service. Reads and writes may go to different endpoints.
pub struct KvEventStore {
    client: Client,
    read_url: String,
    write_url: String,
    token: Option<String>,
}

impl KvEventStore {
    pub fn new(read_url: String, write_url: Option<String>, token: Option<String>) -> Self {
        let read_url = read_url.trim_end_matches('/').to_string();
        let write_url = write_url
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or_else(|| read_url.clone());

        Self {
            client: Client::new(),
            read_url,
            write_url,
            token,
        }
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        }
    }
}

#[derive(Serialize)]
struct UpsertItem<'a> {
    operation: &'static str,
    key: &'static str,
    value: &'a EventConfig,
}

#[derive(Serialize)]
struct PatchPayload<'a> {
    items: Vec<UpsertItem<'a>>,
}

fn connection_error(e: reqwest::Error) -> AppError {
    let msg = format!("Config service connection error: {}", e);
    error!("{}", msg);
    AppError::Store(msg)
}

#[async_trait]
impl EventStore for KvEventStore {
    async fn load(&self) -> Result<EventConfig, AppError> {
        let url = format!("{}/item/{}", self.read_url, EVENTS_KEY);
        let res = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .map_err(connection_error)?;

        if res.status() == StatusCode::NOT_FOUND {
            debug!("No events document stored yet");
            return Ok(EventConfig::default());
        }
        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(AppError::Store(format!("Config service returned {}: {}", status, text)));
        }

        let body: Option<EventConfig> = res
            .json()
            .await
            .map_err(|e| AppError::Store(format!("Invalid events document: {}", e)))?;
        Ok(body.unwrap_or_default())
    }

    async fn save(&self, config: &EventConfig) -> Result<(), AppError> {
        let payload = PatchPayload {
            items: vec![UpsertItem { operation: "upsert", key: EVENTS_KEY, value: config }],
        };

        let res = self
            .authorize(self.client.patch(format!("{}/items", self.write_url)))
            .json(&payload)
            .send()
            .await
            .map_err(connection_error)?;

        if !res.status().is_success() {
            let text = res.text().await.unwrap_or_default();
            error!("Config service update failed: {}", text);
            return Err(AppError::Store(format!("Failed to update config service: {}", text)));
        }
        Ok(())
    }
}
