use chrono::Duration;
use std::sync::Arc;

use crate::clock::Clock;
use crate::report::content::ReportContent;
use crate::report::pdf::PdfRenderer;
use crate::task::store::TaskStore;

/// Shared application state, constructed once at startup and injected into
/// handlers through `web::Data`.
pub struct AppState {
    pub clock: Arc<dyn Clock>,
    pub store: TaskStore,
    pub content: Arc<ReportContent>,
    pub pdf: PdfRenderer,
}

impl AppState {
    pub fn new(
        clock: Arc<dyn Clock>,
        processing_window: Duration,
        content: ReportContent,
        pdf: PdfRenderer,
    ) -> Self {
        Self {
            clock: clock.clone(),
            store: TaskStore::new(clock, processing_window),
            content: Arc::new(content),
            pdf,
        }
    }
}
