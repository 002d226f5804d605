use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_sessions::Session;
use uuid::Uuid;
use crate::errors::AppResult;
use crate::orchestrator::SessionState;

const STATE_KEY: &str = "telegrowth_state_id";

type Slot = Arc<Mutex<SessionState>>;

/// Application state of every session, shared by all clones of the router.
/// The cookie session only carries the key of its slot. Each slot has its own
/// lock, so requests on one session mutate it one after another. Nothing is
/// persisted: the map lives as long as the process.
#[derive(Clone, Default)]
pub struct StateStore {
    slots: Arc<Mutex<HashMap<Uuid, Slot>>>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn slot(&self, session: &Session) -> AppResult<Slot> {
        let key = match session.get::<Uuid>(STATE_KEY).await? {
            Some(key) => key,
            None => {
                let key = Uuid::new_v4();
                session.insert(STATE_KEY, key).await?;
                tracing::debug!("New session state {}", key);
                key
            }
        };

        let mut slots = self.slots.lock().await;
        Ok(slots.entry(key).or_default().clone())
    }

    /// Copy of the session's state. Read only: a session without state gets
    /// the default and nothing is created for it.
    pub async fn load(&self, session: &Session) -> AppResult<SessionState> {
        let Some(key) = session.get::<Uuid>(STATE_KEY).await? else {
            return Ok(SessionState::default());
        };

        let slot = self.slots.lock().await.get(&key).cloned();
        match slot {
            Some(slot) => Ok(slot.lock().await.clone()),
            None => Ok(SessionState::default()),
        }
    }

    /// Runs `f` on the session's state while holding its lock.
    pub async fn update<R>(
        &self,
        session: &Session,
        f: impl FnOnce(&mut SessionState) -> R,
    ) -> AppResult<R> {
        let slot = self.slot(session).await?;
        let mut state = slot.lock().await;
        Ok(f(&mut state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tower_sessions::MemoryStore;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn load_does_not_create_state() {
        let store = StateStore::new();
        let session = session();

        let state = store.load(&session).await.unwrap();
        assert!(!state.is_registered());
        assert!(store.slots.lock().await.is_empty());
    }

    #[tokio::test]
    async fn updates_are_kept_per_session() {
        let store = StateStore::new();
        let (alice, bob) = (session(), session());

        store.update(&alice, |state| state.toggle_mobile_menu()).await.unwrap();

        assert!(store.load(&alice).await.unwrap().show_mobile_menu);
        assert!(!store.load(&bob).await.unwrap().show_mobile_menu);
    }
}
