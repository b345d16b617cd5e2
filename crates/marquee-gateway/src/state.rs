use std::sync::Arc;

use marquee_core::Catalog;

#[derive(Clone)]
pub struct AppState {
    catalog: Arc<dyn Catalog>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &dyn Catalog {
        self.catalog.as_ref()
    }
}
