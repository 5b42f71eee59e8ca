use std::sync::Arc;

use crate::models::SdgTable;

#[derive(Clone)]
pub struct AppState {
    pub table: Arc<SdgTable>,
}

impl AppState {
    pub fn new(table: Arc<SdgTable>) -> Self {
        Self { table }
    }
}
