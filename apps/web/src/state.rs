use std::sync::Arc;

use tokio::sync::RwLock;

use crate::analysis::models::{AnalysisResult, CoachResult};
use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Parsed results for the current interactive session, one slot per mode.
///
/// A slot is set only by a fully successful parse of a model response and
/// cleared only by the mode's "start new" action. The slots are independent:
/// switching modes never touches the other slot.
#[derive(Debug, Default)]
pub struct SessionState {
    pub analysis: Option<AnalysisResult>,
    pub coach: Option<CoachResult>,
}

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Absent when the API credential is missing; views render a
    /// configuration error instead of the form.
    pub generator: Option<Arc<dyn TextGenerator>>,
    pub session: Arc<RwLock<SessionState>>,
}

impl AppState {
    pub fn new(config: Config, generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self {
            config,
            generator,
            session: Arc::new(RwLock::new(SessionState::default())),
        }
    }
}
