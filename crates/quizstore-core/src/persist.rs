//! Session snapshot persistence.
//!
//! The whole [`SessionState`] is written as `{"state": ..., "version": N}`
//! under a single storage key. Loading never fails: a missing entry, an
//! unreadable blob, or a different schema version all yield the default state.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::session::SessionState;
use crate::traits::StateStore;

/// Default storage key.
pub const STORAGE_KEY: &str = "quizz";

/// Current schema version of the persisted state.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    state: &'a SessionState,
    version: u32,
    saved_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct RawEnvelope {
    state: serde_json::Value,
    version: u32,
}

/// Reads and writes session snapshots through a [`StateStore`].
#[derive(Clone)]
pub struct Persistence {
    store: Arc<dyn StateStore>,
    key: String,
    version: u32,
}

impl Persistence {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self {
            store,
            key: STORAGE_KEY.to_string(),
            version: SCHEMA_VERSION,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the stored state, falling back to the default on any problem.
    pub fn load(&self) -> SessionState {
        let raw = match self.store.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key = %self.key, "no persisted session state");
                return SessionState::default();
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to read session state, starting fresh");
                return SessionState::default();
            }
        };

        let envelope: RawEnvelope = match serde_json::from_str(&raw) {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "persisted session state is malformed, starting fresh");
                return SessionState::default();
            }
        };

        if envelope.version != self.version {
            tracing::warn!(
                key = %self.key,
                stored = envelope.version,
                expected = self.version,
                "persisted session state has a different schema version, starting fresh"
            );
            return SessionState::default();
        }

        match serde_json::from_value::<SessionState>(envelope.state) {
            Ok(state) => state.normalized(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "persisted session state does not match the schema, starting fresh");
                SessionState::default()
            }
        }
    }

    /// Write a full snapshot of `state`.
    pub fn save(&self, state: &SessionState) -> Result<(), StoreError> {
        let envelope = EnvelopeRef {
            state,
            version: self.version,
            saved_at: Utc::now(),
        };
        let json = serde_json::to_string(&envelope)?;
        self.store.write(&self.key, &json)
    }
}
