use crate::modules::cart::application::store::CartStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CartStore>,
}
