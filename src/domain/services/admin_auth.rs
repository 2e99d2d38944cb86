use std::collections::HashMap;
use chrono::{DateTime, Duration, Utc};
use rand::{distributions::Alphanumeric, Rng};
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;
use crate::error::AppError;

pub const SESSION_TTL_HOURS: i64 = 12;

/// Shared-PIN admin gate. Only SHA-256 digests of the PIN and of issued
/// session tokens are held in memory.
pub struct AdminAuth {
    pin_hash: String,
    sessions: RwLock<HashMap<String, DateTime<Utc>>>,
}

impl AdminAuth {
    pub fn new(pin: &str) -> Self {
        Self {
            pin_hash: hash_token(pin),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Checks the PIN and opens a session, returning the raw token.
    pub async fn login(&self, pin: &str) -> Result<String, AppError> {
        if hash_token(pin) != self.pin_hash {
            return Err(AppError::Unauthorized("Incorrect PIN".into()));
        }

        let token: String = rand::thread_rng().sample_iter(&Alphanumeric).take(64).map(char::from).collect();
        let now = Utc::now();

        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, expires_at| *expires_at > now);
        sessions.insert(hash_token(&token), now + Duration::hours(SESSION_TTL_HOURS));
        Ok(token)
    }

    pub async fn is_valid(&self, token: &str) -> bool {
        let sessions = self.sessions.read().await;
        sessions
            .get(&hash_token(token))
            .is_some_and(|expires_at| *expires_at > Utc::now())
    }

    pub async fn logout(&self, token: &str) {
        self.sessions.write().await.remove(&hash_token(token));
    }
}

pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}
