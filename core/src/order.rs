use serde_json::Value;

use crate::error::GalleryError;
use crate::project::ProjectId;

/// Persisted gallery order, stored as a JSON array of ids under one key.
pub trait OrderStore {
    fn read_raw(&self) -> Option<String>;

    fn write_raw(&self, raw: &str) -> Result<(), GalleryError>;

    /// `None` when nothing usable is stored.
    fn load(&self) -> Option<Vec<ProjectId>> {
        let raw = self.read_raw()?;
        parse_stored_order(&raw)
    }

    fn save(&self, ids: &[ProjectId]) -> Result<(), GalleryError> {
        let raw = serialize_order(ids)?;
        self.write_raw(&raw)
    }
}

/// Absent, non-JSON, non-array and empty-array values all read as "no order".
/// Non-string entries are dropped since they can never match a rendered id.
pub fn parse_stored_order(raw: &str) -> Option<Vec<ProjectId>> {
    if raw.is_empty() {
        return None;
    }
    let value: Value = serde_json::from_str(raw).ok()?;
    let entries = value.as_array()?;
    if entries.is_empty() {
        return None;
    }
    Some(
        entries
            .iter()
            .filter_map(Value::as_str)
            .map(ProjectId::from)
            .collect(),
    )
}

pub fn serialize_order(ids: &[ProjectId]) -> Result<String, GalleryError> {
    serde_json::to_string(ids).map_err(|err| GalleryError::Storage(err.to_string()))
}
