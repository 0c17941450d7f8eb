use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use userstore_core::{Entity, User, UserId, UserProfile};

use super::UserRepository;

/// In-memory user repository.
///
/// A single `RwLock` guards the map: inserts, updates and deletes take the
/// write lock, lookups take the read lock and see a consistent snapshot.
/// No lock is held across anything but one map access.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    inner: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    // Every critical section leaves the map consistent, so a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<UserId, User>> {
        self.inner.read().unwrap_or_else(|poisoned| {
            tracing::warn!("user repository lock poisoned; recovering");
            PoisonError::into_inner(poisoned)
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<UserId, User>> {
        self.inner.write().unwrap_or_else(|poisoned| {
            tracing::warn!("user repository lock poisoned; recovering");
            PoisonError::into_inner(poisoned)
        })
    }
}

impl UserRepository for InMemoryUserRepository {
    fn insert(&self, profile: UserProfile) -> User {
        let user = User::new(UserId::new(), profile);
        self.write().insert(*user.id(), user.clone());
        user
    }

    fn find_all(&self) -> Vec<User> {
        self.read().values().cloned().collect()
    }

    fn find_by_id(&self, id: &UserId) -> Option<User> {
        self.read().get(id).cloned()
    }

    fn update(&self, user: User) -> Option<User> {
        let mut map = self.write();
        let row = map.get_mut(user.id())?;
        row.apply_profile(user.profile());
        Some(row.clone())
    }

    fn delete(&self, id: &UserId) {
        self.write().remove(id);
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}
