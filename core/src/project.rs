use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GalleryError;

const OUTSIDE_SUFFIX: &str = "-outside";

/// One gallery entry as published in the data file.
///
/// Both the `*_src` and the bare field names are accepted; the `*_src`
/// variant wins when both are present and non-empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_main_src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_main: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_second_src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_second: Option<String>,
}

impl ProjectRecord {
    pub fn new(title: &str, image_main_src: &str, image_second_src: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            image_main_src: Some(image_main_src.to_string()),
            image_main: None,
            image_second_src: Some(image_second_src.to_string()),
            image_second: None,
        }
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn main_src(&self) -> &str {
        first_non_empty(&self.image_main_src, &self.image_main)
    }

    pub fn second_src(&self) -> &str {
        first_non_empty(&self.image_second_src, &self.image_second)
    }

    /// Alt text for the visible image.
    pub fn front_alt(&self) -> String {
        format!("{} – outside", self.title())
    }
}

fn first_non_empty<'a>(preferred: &'a Option<String>, fallback: &'a Option<String>) -> &'a str {
    preferred
        .as_deref()
        .filter(|value| !value.is_empty())
        .or_else(|| fallback.as_deref())
        .unwrap_or("")
}

/// Lowercase slug joining a rendered node to its persisted position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ProjectId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProjectId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

pub fn derive_project_id(record: &ProjectRecord) -> ProjectId {
    project_id_from_src(record.main_src())
}

/// `"a/b/bfly-outside.jpg"` becomes `"bfly"`. Malformed input yields a
/// degenerate (possibly empty) id rather than an error.
pub fn project_id_from_src(src: &str) -> ProjectId {
    let name = src.rsplit('/').next().unwrap_or("");
    let stem = match name.rfind('.') {
        Some(idx) if idx + 1 < name.len() => &name[..idx],
        _ => name,
    };
    let stem = stem.strip_suffix(OUTSIDE_SUFFIX).unwrap_or(stem);
    ProjectId(stem.to_lowercase())
}

pub fn parse_projects(raw: &str) -> Result<Vec<ProjectRecord>, GalleryError> {
    serde_json::from_str(raw).map_err(|err| GalleryError::Payload(err.to_string()))
}
