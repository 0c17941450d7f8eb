//! Shared handler dependencies, built once at startup and injected into the router.

use std::sync::Arc;

use userstore_infra::UserRepository;

#[derive(Clone)]
pub struct AppServices {
    pub users: Arc<dyn UserRepository>,
}

impl AppServices {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}
