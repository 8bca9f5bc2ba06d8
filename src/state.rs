use crate::config::Config;
use crate::greeting::GreetingService;
use crate::store::RecordStore;
use std::sync::Arc;

/// Shared application state for the store-backed routes
#[derive(Clone)]
pub struct AppState {
    pub store: RecordStore,
    pub greeter: GreetingService,
    pub config: Arc<Config>,
}
