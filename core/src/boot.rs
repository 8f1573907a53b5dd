use crate::error::GalleryError;
use crate::project::ProjectRecord;

/// Turns fetched records into gallery nodes inside the grid container.
/// Must run once per page load; a second call duplicates entries.
pub trait GalleryRenderer {
    fn render(&self, projects: &[ProjectRecord]) -> Result<usize, GalleryError>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BootReport {
    pub rendered: usize,
    pub error: Option<GalleryError>,
}

/// Renders the payload if it arrived, then runs `attach` whatever happened,
/// so a failed fetch still leaves a working (empty) gallery shell.
pub fn render_then_attach<R, F>(
    renderer: &R,
    payload: Result<Vec<ProjectRecord>, GalleryError>,
    attach: F,
) -> BootReport
where
    R: GalleryRenderer + ?Sized,
    F: FnOnce(),
{
    let outcome = payload.and_then(|projects| renderer.render(&projects));
    attach();
    match outcome {
        Ok(rendered) => BootReport {
            rendered,
            error: None,
        },
        Err(error) => BootReport {
            rendered: 0,
            error: Some(error),
        },
    }
}
