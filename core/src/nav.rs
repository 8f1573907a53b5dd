use crate::config::GalleryConfig;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavAction {
    ScrollToGallery,
    Navigate(String),
}

pub fn is_index_path(path: &str) -> bool {
    if path.is_empty() || path == "/" {
        return true;
    }
    last_segment(path) == "index.html"
}

/// Matches `contact` or `contact.html` as the last segment, with at most one
/// trailing slash.
pub fn is_contact_path(path: &str) -> bool {
    let path = path.strip_suffix('/').unwrap_or(path);
    matches!(last_segment(path), "contact" | "contact.html")
}

pub fn projects_click(path: &str, config: &GalleryConfig) -> NavAction {
    if is_index_path(path) {
        NavAction::ScrollToGallery
    } else {
        NavAction::Navigate(config.gallery_url())
    }
}

pub fn contact_click(path: &str, config: &GalleryConfig) -> Option<NavAction> {
    if is_contact_path(path) {
        return None;
    }
    Some(NavAction::Navigate(config.contact_page.clone()))
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
