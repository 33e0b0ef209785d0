use std::sync::Arc;

use crate::domain::repositories::UserRepository;
use crate::services::UserService;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
}

impl AppState {
    /// Wires the user service on top of whichever repository was chosen
    /// at startup.
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self {
            users: Arc::new(UserService::new(repo)),
        }
    }
}
