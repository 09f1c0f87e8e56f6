use crate::backend::Journal;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub journal: Arc<Journal>,
}

impl AppState {
    pub fn new(journal: Journal) -> Self {
        Self {
            journal: Arc::new(journal),
        }
    }
}
