pub const DEFAULT_DATA_PATH: &str = "assets/data.json";
pub const DEFAULT_STORE_KEY: &str = "living-shapes-order-v1";

pub const DEFAULT_GRID_ID: &str = "projects";
pub const DEFAULT_PROJECTS_BUTTON_ID: &str = "btn-projects";
pub const DEFAULT_CONTACT_BUTTON_ID: &str = "btn-contact";
pub const DEFAULT_CONTACT_FORM_ID: &str = "contact-form";
pub const DEFAULT_FORM_STATUS_SELECTOR: &str = ".form-status";

pub const DEFAULT_INDEX_PAGE: &str = "index.html";
pub const DEFAULT_CONTACT_PAGE: &str = "contact.html";
pub const DEFAULT_GALLERY_FRAGMENT: &str = "#projects";

pub const DEFAULT_CONFIRMATION_MESSAGE: &str = "Bedankt! Je bericht is verzonden.";

/// Page contract and storage settings handed to the gallery at boot.
///
/// The store key carries its own format version; bump the suffix to
/// invalidate orders written by an older layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryConfig {
    pub data_path: String,
    pub store_key: String,
    pub grid_id: String,
    pub projects_button_id: String,
    pub contact_button_id: String,
    pub contact_form_id: String,
    pub form_status_selector: String,
    pub index_page: String,
    pub contact_page: String,
    pub gallery_fragment: String,
    pub confirmation_message: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            data_path: DEFAULT_DATA_PATH.to_string(),
            store_key: DEFAULT_STORE_KEY.to_string(),
            grid_id: DEFAULT_GRID_ID.to_string(),
            projects_button_id: DEFAULT_PROJECTS_BUTTON_ID.to_string(),
            contact_button_id: DEFAULT_CONTACT_BUTTON_ID.to_string(),
            contact_form_id: DEFAULT_CONTACT_FORM_ID.to_string(),
            form_status_selector: DEFAULT_FORM_STATUS_SELECTOR.to_string(),
            index_page: DEFAULT_INDEX_PAGE.to_string(),
            contact_page: DEFAULT_CONTACT_PAGE.to_string(),
            gallery_fragment: DEFAULT_GALLERY_FRAGMENT.to_string(),
            confirmation_message: DEFAULT_CONFIRMATION_MESSAGE.to_string(),
        }
    }
}

impl GalleryConfig {
    /// Applies optional overrides; blank values keep the current setting.
    pub fn with_overrides(mut self, data_path: Option<&str>, store_key: Option<&str>) -> Self {
        if let Some(path) = non_empty(data_path) {
            self.data_path = path;
        }
        if let Some(key) = non_empty(store_key) {
            self.store_key = key;
        }
        self
    }

    /// `index.html#projects`
    pub fn gallery_url(&self) -> String {
        format!("{}{}", self.index_page, self.gallery_fragment)
    }

    pub fn is_gallery_hash(&self, hash: &str) -> bool {
        hash == self.gallery_fragment
    }
}

fn non_empty(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}
