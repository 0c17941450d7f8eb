//! User repository boundary.
//!
//! Handlers talk to a [`UserRepository`]; the only adapter today is the
//! process-local [`InMemoryUserRepository`]. Every operation hands back owned
//! copies, so callers never hold references into repository state.

pub mod in_memory;

use std::sync::Arc;

use userstore_core::{DomainError, DomainResult, User, UserId, UserProfile};

pub use in_memory::InMemoryUserRepository;

/// CRUD contract over user records keyed by [`UserId`].
pub trait UserRepository: Send + Sync {
    /// Store a new record under a freshly generated id and return it.
    fn insert(&self, profile: UserProfile) -> User;

    /// Snapshot of every stored record, in no particular order.
    fn find_all(&self) -> Vec<User>;

    fn find_by_id(&self, id: &UserId) -> Option<User>;

    /// Overwrite the profile of the record whose id matches `user`.
    ///
    /// Returns `None` (and stores nothing) when no such record exists.
    fn update(&self, user: User) -> Option<User>;

    /// Remove the record if present. Deleting an unknown id is a no-op.
    fn delete(&self, id: &UserId);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Like [`find_by_id`](Self::find_by_id), but absence is an error.
    fn get(&self, id: &UserId) -> DomainResult<User> {
        self.find_by_id(id).ok_or_else(DomainError::not_found)
    }
}

impl<S> UserRepository for Arc<S>
where
    S: UserRepository + ?Sized,
{
    fn insert(&self, profile: UserProfile) -> User {
        (**self).insert(profile)
    }

    fn find_all(&self) -> Vec<User> {
        (**self).find_all()
    }

    fn find_by_id(&self, id: &UserId) -> Option<User> {
        (**self).find_by_id(id)
    }

    fn update(&self, user: User) -> Option<User> {
        (**self).update(user)
    }

    fn delete(&self, id: &UserId) {
        (**self).delete(id)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
