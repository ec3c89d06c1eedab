use crate::errors::AppError;
use crate::gate::SubmissionGate;
use std::path::Path;
use tokio::fs;
use tracing::error;

pub async fn load_gate(path: &Path) -> SubmissionGate {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(gate) => gate,
            Err(err) => {
                error!("failed to parse gate store: {err}");
                SubmissionGate::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => SubmissionGate::default(),
        Err(err) => {
            error!("failed to read gate store: {err}");
            SubmissionGate::default()
        }
    }
}

pub async fn persist_gate(path: &Path, gate: &SubmissionGate) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(gate).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
