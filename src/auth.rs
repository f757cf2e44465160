//! Placeholder authentication for the two demo accounts, plus the session
//! store the dashboards hang off. Sessions are created on login and removed
//! on logout; nothing here touches the dataset.

use parking_lot::Mutex;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

use crate::models::Role;

/// Every login waits this long before resolving, matching the simulated
/// API call in the original flow. The wait cannot be cancelled.
pub const LOGIN_DELAY: Duration = Duration::from_millis(1000);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    // One message for every bad combination; wrong username and wrong
    // password are deliberately indistinguishable.
    #[error("usuario o contraseña incorrectos")]
    InvalidCredentials,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: Uuid,
    pub role: Role,
    pub display_name: String,
    /// Seeded dataset user backing this session, when one exists. The admin
    /// account is not a dataset user.
    pub user_id: Option<String>,
}

#[derive(Clone)]
pub struct SessionStore {
    delay: Duration,
    sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::with_delay(LOGIN_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Checks the two hardcoded credential pairs after the fixed delay.
    /// Success creates and stores a session; everything else is the single
    /// generic failure.
    pub async fn login(
        &self,
        role: Role,
        username: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        tokio::time::sleep(self.delay).await;

        let session = match (role, username, password) {
            (Role::Admin, "admin", "admin") => Session {
                id: Uuid::new_v4(),
                role,
                display_name: "Administrador".into(),
                user_id: None,
            },
            (Role::Employee, "user", "user") => Session {
                id: Uuid::new_v4(),
                role,
                display_name: "María García López".into(),
                user_id: Some("1".into()),
            },
            _ => return Err(AuthError::InvalidCredentials),
        };

        self.sessions.lock().insert(session.id, session.clone());
        Ok(session)
    }

    /// Removes the session. Unknown ids are a no-op; teardown is idempotent.
    pub fn logout(&self, id: Uuid) {
        self.sessions.lock().remove(&id);
    }

    pub fn get(&self, id: Uuid) -> Option<Session> {
        self.sessions.lock().get(&id).cloned()
    }

    pub fn active_count(&self) -> usize {
        self.sessions.lock().len()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SessionStore {
        SessionStore::with_delay(Duration::ZERO)
    }

    #[tokio::test]
    async fn admin_pair_logs_in() {
        let store = store();
        let session = store.login(Role::Admin, "admin", "admin").await.unwrap();
        assert_eq!(session.role, Role::Admin);
        assert_eq!(session.display_name, "Administrador");
        assert!(session.user_id.is_none());
        assert!(store.get(session.id).is_some());
    }

    #[tokio::test]
    async fn employee_pair_resolves_to_the_demo_student() {
        let store = store();
        let session = store.login(Role::Employee, "user", "user").await.unwrap();
        assert_eq!(session.user_id.as_deref(), Some("1"));
        assert_eq!(session.display_name, "María García López");
    }

    #[tokio::test]
    async fn any_other_combination_fails_the_same_way() {
        let store = store();
        for (role, user, pass) in [
            (Role::Admin, "admin", "wrong"),
            (Role::Admin, "wrong", "admin"),
            (Role::Admin, "user", "user"),
            (Role::Employee, "admin", "admin"),
            (Role::Employee, "user", ""),
        ] {
            let err = store.login(role, user, pass).await.unwrap_err();
            assert_eq!(err, AuthError::InvalidCredentials);
        }
        assert_eq!(store.active_count(), 0);
    }

    #[tokio::test]
    async fn logout_tears_down_and_is_idempotent() {
        let store = store();
        let session = store.login(Role::Admin, "admin", "admin").await.unwrap();
        assert_eq!(store.active_count(), 1);
        store.logout(session.id);
        assert!(store.get(session.id).is_none());
        store.logout(session.id); // second teardown is fine
        assert_eq!(store.active_count(), 0);
    }
}
