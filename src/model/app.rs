use std::sync::Arc;

use crate::pool::PoolOrchestrator;

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<PoolOrchestrator>,
}
