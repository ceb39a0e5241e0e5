// src/session.rs
use crate::errors::ServerError;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::Mutex;

pub const SESSION_COOKIE: &str = "listings_session";

/// Per-visitor state that survives a reload: the current search term.
pub trait SessionStore: Send + Sync {
    fn load(&self, token: &str, now: DateTime<Utc>) -> Result<Option<String>, ServerError>;
    fn save(&self, token: &str, search: &str, now: DateTime<Utc>) -> Result<(), ServerError>;
}

#[derive(Debug, Clone)]
struct SessionEntry {
    search: String,
    last_seen: DateTime<Utc>,
}

/// Keeps sessions in process memory, keyed by the SHA-256 of the token.
pub struct MemorySessionStore {
    ttl: Duration,
    entries: Mutex<HashMap<[u8; 32], SessionEntry>>,
}

impl MemorySessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn expired(&self, entry: &SessionEntry, now: DateTime<Utc>) -> bool {
        now - entry.last_seen > self.ttl
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self, token: &str, now: DateTime<Utc>) -> Result<Option<String>, ServerError> {
        let key = hash_token(token);
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| ServerError::InternalError)?;

        let Some(entry) = entries.get_mut(&key) else {
            return Ok(None);
        };
        if self.expired(entry, now) {
            entries.remove(&key);
            return Ok(None);
        }

        entry.last_seen = now;
        Ok(Some(entry.search.clone()))
    }

    fn save(&self, token: &str, search: &str, now: DateTime<Utc>) -> Result<(), ServerError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| ServerError::InternalError)?;

        let before = entries.len();
        entries.retain(|_, entry| !self.expired(entry, now));
        let purged = before - entries.len();
        if purged > 0 {
            tracing::debug!(purged, "dropped idle sessions");
        }

        entries.insert(
            hash_token(token),
            SessionEntry {
                search: search.to_string(),
                last_seen: now,
            },
        );
        Ok(())
    }
}

/// 32 random bytes, URL-safe base64 without padding.
pub fn new_session_token() -> String {
    let mut raw = [0u8; 32];
    OsRng.fill_bytes(&mut raw);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(raw)
}

fn hash_token(token: &str) -> [u8; 32] {
    Sha256::digest(token.as_bytes()).into()
}

/// Value for a `Set-Cookie` header. No `Max-Age`, so the browser drops it
/// when the session ends.
pub fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax")
}

/// Pulls the session token out of a `Cookie` header value.
pub fn token_from_cookie_header(header: &str) -> Option<&str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}
