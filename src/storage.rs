use crate::models::DeliveryRecord;
use serde_json::Value;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, warn};

pub fn resolve_deliveries_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("DELIVERIES_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/deliveries.json"))
}

/// Reads the restock feed. A file that cannot be read or is not a JSON array
/// leaves the calendar empty instead of stopping the server; a single bad row
/// is skipped on its own.
pub async fn load_deliveries(path: &Path) -> Vec<DeliveryRecord> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<Vec<Value>>(&bytes) {
            Ok(rows) => parse_rows(rows),
            Err(err) => {
                error!("failed to parse deliveries file {}: {err}", path.display());
                Vec::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            warn!("no deliveries file at {}, calendar starts empty", path.display());
            Vec::new()
        }
        Err(err) => {
            error!("failed to read deliveries file {}: {err}", path.display());
            Vec::new()
        }
    }
}

fn parse_rows(rows: Vec<Value>) -> Vec<DeliveryRecord> {
    let total = rows.len();
    let records: Vec<DeliveryRecord> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(row, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(row, "skipping delivery record: {err}");
                None
            }
        })
        .collect();

    if records.len() < total {
        warn!(skipped = total - records.len(), total, "some delivery records were skipped");
    }
    records
}
