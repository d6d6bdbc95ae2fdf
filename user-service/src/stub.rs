// In-memory repository
// Stands in for the HTTP backend in tests; records every call it receives

use crate::client::UserRepository;
use crate::error::{ServiceError, ServiceResult};
use crate::models::{NewUser, User};

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

/// A call received by [`StubUserRepository`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    List,
    Create(NewUser),
    Update(u64, User),
    Delete(u64),
}

#[derive(Debug, Clone, Default)]
pub struct StubUserRepository {
    inner: Arc<RwLock<StubState>>,
}

#[derive(Debug, Default)]
struct StubState {
    users: Vec<User>,
    calls: Vec<RecordedCall>,
    failure_status: Option<u16>,
}

impl StubUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        let stub = Self::new();
        if let Ok(mut state) = stub.inner.write() {
            state.users = users;
        }
        stub
    }

    /// Make every following call fail with the given HTTP status
    pub fn fail_with_status(&self, status: u16) {
        if let Ok(mut state) = self.inner.write() {
            state.failure_status = Some(status);
        }
    }

    pub fn recover(&self) {
        if let Ok(mut state) = self.inner.write() {
            state.failure_status = None;
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.inner
            .read()
            .map(|state| state.calls.clone())
            .unwrap_or_default()
    }

    /// Server-side view of the data
    pub fn stored_users(&self) -> Vec<User> {
        self.inner
            .read()
            .map(|state| state.users.clone())
            .unwrap_or_default()
    }

    fn record(
        &self,
        call: RecordedCall,
    ) -> ServiceResult<std::sync::RwLockWriteGuard<'_, StubState>> {
        let mut state = self
            .inner
            .write()
            .map_err(|_| ServiceError::Config("stub repository lock poisoned".to_string()))?;
        state.calls.push(call);
        if let Some(status) = state.failure_status {
            return Err(ServiceError::Status {
                status,
                body: "stubbed failure".to_string(),
            });
        }
        Ok(state)
    }
}

#[async_trait]
impl UserRepository for StubUserRepository {
    async fn list(&self) -> ServiceResult<Vec<User>> {
        let state = self.record(RecordedCall::List)?;
        Ok(state.users.clone())
    }

    async fn create(&self, user: &NewUser) -> ServiceResult<User> {
        let mut state = self.record(RecordedCall::Create(user.clone()))?;
        let id = crate::controller::view::next_user_id(&state.users)
            .ok_or_else(|| ServiceError::InvalidInput("No user ids left".to_string()))?;
        let created = user.clone().into_user(id);
        state.users.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: u64, user: &User) -> ServiceResult<User> {
        let mut state = self.record(RecordedCall::Update(id, user.clone()))?;
        match state.users.iter_mut().find(|u| u.id == id) {
            Some(existing) => {
                *existing = user.clone();
                Ok(user.clone())
            }
            None => Err(ServiceError::NotFound(format!("User with id {} not found", id))),
        }
    }

    async fn delete(&self, id: u64) -> ServiceResult<()> {
        let mut state = self.record(RecordedCall::Delete(id))?;
        let before = state.users.len();
        state.users.retain(|u| u.id != id);
        if state.users.len() == before {
            return Err(ServiceError::NotFound(format!("User with id {} not found", id)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_calls_and_mutates_store() {
        let stub =
            StubUserRepository::with_users(vec![User::new(1, "Ann", "Lee", "a@example.com")]);
        let created = stub
            .create(&User::new(0, "Bo", "D", "b@example.com").to_new_user())
            .await
            .unwrap();
        assert_eq!(created.id, 2);
        stub.delete(1).await.unwrap();

        assert_eq!(stub.stored_users(), vec![created]);
        assert_eq!(stub.calls().len(), 2);
        assert!(matches!(stub.calls()[1], RecordedCall::Delete(1)));
    }

    #[tokio::test]
    async fn test_injected_failure() {
        let stub = StubUserRepository::new();
        stub.fail_with_status(503);
        let err = stub.list().await.unwrap_err();
        assert!(matches!(err, ServiceError::Status { status: 503, .. }));
        stub.recover();
        assert!(stub.list().await.unwrap().is_empty());
        assert_eq!(stub.calls(), vec![RecordedCall::List, RecordedCall::List]);
    }
}
