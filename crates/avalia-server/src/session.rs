//! In-memory sessions. Each session exclusively owns one form and at most
//! one generated document; nothing outlives the process.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use thiserror::Error;
use uuid::Uuid;

use avalia_core::dates;
use avalia_core::form::{FormSession, FormState};
use avalia_export::render::RenderedDocument;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session not found: {0}")]
    NotFound(Uuid),

    #[error("session limit of {capacity} reached")]
    Full { capacity: usize },
}

#[derive(Debug)]
pub struct Session {
    form: FormSession,
    /// Last successfully generated document; cleared on any edit.
    pub document: Option<RenderedDocument>,
    last_seen: Instant,
}

impl Session {
    fn new() -> Self {
        let mut form = FormSession::new();
        form.initialize(dates::today());
        Self {
            form,
            document: None,
            last_seen: Instant::now(),
        }
    }

    pub fn form(&mut self) -> &mut FormState {
        self.form.initialize(dates::today())
    }
}

#[derive(Debug)]
pub struct SessionStore {
    sessions: HashMap<Uuid, Session>,
    ttl: Duration,
    capacity: usize,
}

impl SessionStore {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            sessions: HashMap::new(),
            ttl,
            capacity,
        }
    }

    /// Open a session with a freshly initialized form.
    pub fn create(&mut self) -> Result<(Uuid, &mut Session), SessionError> {
        self.evict_expired();
        if self.sessions.len() >= self.capacity {
            return Err(SessionError::Full {
                capacity: self.capacity,
            });
        }

        let id = Uuid::new_v4();
        tracing::info!(session_id = %id, active = self.sessions.len() + 1, "session created");
        Ok((id, self.sessions.entry(id).or_insert_with(Session::new)))
    }

    /// Look a live session up and mark it as active.
    pub fn get_mut(&mut self, id: Uuid) -> Result<&mut Session, SessionError> {
        self.evict_expired();
        let session = self
            .sessions
            .get_mut(&id)
            .ok_or(SessionError::NotFound(id))?;
        session.last_seen = Instant::now();
        Ok(session)
    }

    /// End a session, discarding its record.
    pub fn remove(&mut self, id: Uuid) -> Result<(), SessionError> {
        self.sessions
            .remove(&id)
            .map(|_| tracing::info!(session_id = %id, "session ended"))
            .ok_or(SessionError::NotFound(id))
    }

    fn evict_expired(&mut self) {
        let ttl = self.ttl;
        let before = self.sessions.len();
        self.sessions
            .retain(|_, session| session.last_seen.elapsed() < ttl);

        let evicted = before - self.sessions.len();
        if evicted > 0 {
            tracing::info!(evicted, "expired sessions discarded");
        }
    }
}
