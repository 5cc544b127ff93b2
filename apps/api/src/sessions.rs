//! In-memory session registry. Sessions live for the process lifetime and
//! are never persisted or evicted.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::pitch::workflow::PitchSession;

/// Shared registry of pitch sessions. The outer lock guards map membership
/// only; each session carries its own lock, held for the duration of a
/// workflow run, so steps within one run stay strictly sequential while
/// other sessions proceed independently.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Arc<Mutex<PitchSession>>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, session: PitchSession) -> Uuid {
        let id = session.id;
        self.inner
            .write()
            .await
            .insert(id, Arc::new(Mutex::new(session)));
        id
    }

    pub async fn get(&self, id: Uuid) -> Option<Arc<Mutex<PitchSession>>> {
        self.inner.read().await.get(&id).cloned()
    }
}
