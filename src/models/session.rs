use async_session::{MemoryStore, Session, SessionStore};

use crate::error::InternalError;
use crate::models::quiz::QuizState;

const QUIZ_STATE_KEY: &str = "quiz";

/// Creates an empty session and returns its cookie value. The quiz state is
/// not stored until the first answer; a missing entry reads as the initial
/// state.
pub async fn create_session(store: &MemoryStore) -> Result<String, InternalError> {
    store
        .store_session(Session::new())
        .await
        .map_err(|err| InternalError::new(format!("Failed to store new session: {err}")))?
        .ok_or_else(|| InternalError::new("Session store did not return a cookie value"))
}

async fn fetch_session(store: &MemoryStore, token: &str) -> Result<Session, InternalError> {
    store
        .load_session(token.to_string())
        .await
        .map_err(|err| InternalError::new(format!("Failed to load session from store: {err}")))?
        .ok_or_else(|| InternalError::new("No session found for token"))
}

pub async fn load_quiz_state(store: &MemoryStore, token: &str) -> Result<QuizState, InternalError> {
    let session = fetch_session(store, token).await?;
    Ok(session.get::<QuizState>(QUIZ_STATE_KEY).unwrap_or_default())
}

pub async fn save_quiz_state(
    store: &MemoryStore,
    token: &str,
    state: &QuizState,
) -> Result<(), InternalError> {
    let mut session = fetch_session(store, token).await?;
    session
        .insert(QUIZ_STATE_KEY, state)
        .map_err(|err| InternalError::new(format!("Failed to encode quiz state: {err}")))?;
    store
        .store_session(session)
        .await
        .map_err(|err| InternalError::new(format!("Failed to store session: {err}")))?;
    Ok(())
}
