use std::sync::Arc;

use service::shopping::repository::ShoppingRepository;
use service::ShoppingService;

/// Per-process handler state, built once at startup and cloned into each request.
#[derive(Clone)]
pub struct ServerState {
    pub shopping: ShoppingService,
}

impl ServerState {
    pub fn new(shopping: ShoppingService) -> Self { Self { shopping } }

    pub fn with_repository(repo: Arc<dyn ShoppingRepository>) -> Self {
        Self::new(ShoppingService::new(repo))
    }
}
