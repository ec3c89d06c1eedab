use crate::catalog::Catalog;
use crate::config::Config;
use crate::gate::SubmissionGate;
use crate::sink::SubmissionSink;
use chrono::NaiveDate;
use chrono_tz::Tz;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// Immutable session context plus the shared gate, created once at
/// startup and handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub epoch: NaiveDate,
    pub timezone: Tz,
    pub catalog: Arc<Catalog>,
    pub gate_path: PathBuf,
    pub gate: Arc<Mutex<SubmissionGate>>,
    pub sink: Arc<dyn SubmissionSink>,
}

impl AppState {
    pub fn new(
        config: &Config,
        catalog: Catalog,
        gate: SubmissionGate,
        sink: Arc<dyn SubmissionSink>,
    ) -> Self {
        Self {
            epoch: config.epoch,
            timezone: config.timezone,
            catalog: Arc::new(catalog),
            gate_path: config.gate_path.clone(),
            gate: Arc::new(Mutex::new(gate)),
            sink,
        }
    }
}
