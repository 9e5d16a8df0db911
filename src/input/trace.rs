use std::path::Path;

use super::event::PointerEvent;
use crate::error::OrbitalError;

/// Decode a recorded gesture trace: a JSON array of [`PointerEvent`]s.
///
/// # Errors
///
/// [`OrbitalError::TraceParse`] if the JSON is malformed.
pub fn parse_trace(json: &str) -> Result<Vec<PointerEvent>, OrbitalError> {
    serde_json::from_str(json)
        .map_err(|e| OrbitalError::TraceParse(e.to_string()))
}

/// Read and decode a trace file.
///
/// # Errors
///
/// [`OrbitalError::Io`] if the file cannot be read,
/// [`OrbitalError::TraceParse`] if its contents are malformed.
pub fn load_trace(path: &Path) -> Result<Vec<PointerEvent>, OrbitalError> {
    let content = std::fs::read_to_string(path)?;
    let events = parse_trace(&content)?;
    log::debug!("loaded {} events from {}", events.len(), path.display());
    Ok(events)
}
