use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    Http { status: u16 },
    Fetch(String),
    Payload(String),
    Render(String),
    Storage(String),
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::Http { status } => write!(f, "HTTP {status}"),
            GalleryError::Fetch(message) => write!(f, "fetch failed: {message}"),
            GalleryError::Payload(message) => write!(f, "invalid payload: {message}"),
            GalleryError::Render(message) => write!(f, "render failed: {message}"),
            GalleryError::Storage(message) => write!(f, "storage failed: {message}"),
        }
    }
}

impl std::error::Error for GalleryError {}
