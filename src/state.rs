use crate::index::DeliveryIndex;
use std::sync::Arc;

/// Shared by every request. The index is read-only once built, so it is
/// handed out behind an `Arc` with no lock.
#[derive(Clone)]
pub struct AppState {
    pub index: Arc<DeliveryIndex>,
}

impl AppState {
    pub fn new(index: DeliveryIndex) -> Self {
        Self {
            index: Arc::new(index),
        }
    }
}
