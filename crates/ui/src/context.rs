use std::sync::Arc;

use api::DeckGateway;

pub trait UiApp: Send + Sync {
    fn deck_gateway(&self) -> Arc<dyn DeckGateway>;
}

#[derive(Clone)]
pub struct AppContext {
    deck_gateway: Arc<dyn DeckGateway>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            deck_gateway: app.deck_gateway(),
        }
    }

    #[must_use]
    pub fn deck_gateway(&self) -> Arc<dyn DeckGateway> {
        Arc::clone(&self.deck_gateway)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
