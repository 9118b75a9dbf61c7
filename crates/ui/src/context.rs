use std::sync::Arc;

use services::QuestionSource;

/// What the composition root must supply to the view layer.
pub trait UiApp: Send + Sync {
    fn questions(&self) -> Arc<dyn QuestionSource>;
}

#[derive(Clone)]
pub struct AppContext {
    questions: Arc<dyn QuestionSource>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            questions: app.questions(),
        }
    }

    #[must_use]
    pub fn questions(&self) -> Arc<dyn QuestionSource> {
        Arc::clone(&self.questions)
    }
}

// Provided once by the composition root (`crates/app`) before launch.

/// Build an `AppContext` from the app's service wiring.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
