use living_shapes_core::{derive_project_id, GalleryError, GalleryRenderer, ProjectRecord};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlImageElement};

use crate::dom_grid::{DATA_ID_ATTR, HOLDER_CLASS, PROJECT_CLASS};
use crate::js_error::js_err;

const FRONT_IMAGE_CLASS: &str = "img img--front";
const BACK_IMAGE_CLASS: &str = "img img--back";

pub(crate) struct DomRenderer {
    document: Document,
    grid: Element,
}

impl DomRenderer {
    pub(crate) fn new(document: Document, grid: Element) -> Self {
        Self { document, grid }
    }

    /// Builds every node into one fragment and appends it in a single
    /// mutation. Nothing reaches the grid if any node fails to build.
    fn render_nodes(&self, projects: &[ProjectRecord]) -> Result<usize, JsValue> {
        let fragment = self.document.create_document_fragment();
        for project in projects {
            let node = build_project_node(&self.document, project)?;
            fragment.append_child(&node)?;
        }
        self.grid.append_child(&fragment)?;
        Ok(projects.len())
    }
}

impl GalleryRenderer for DomRenderer {
    fn render(&self, projects: &[ProjectRecord]) -> Result<usize, GalleryError> {
        self.render_nodes(projects)
            .map_err(|err| GalleryError::Render(js_err(err)))
    }
}

fn build_project_node(document: &Document, project: &ProjectRecord) -> Result<Element, JsValue> {
    let id = derive_project_id(project);

    let project_el = document.create_element("section")?;
    project_el.set_class_name(PROJECT_CLASS);
    project_el.set_attribute(DATA_ID_ATTR, id.as_str())?;

    let holder = document.create_element("section")?;
    holder.set_class_name(HOLDER_CLASS);
    holder.set_id(id.as_str());
    holder.set_attribute("tabindex", "0")?;

    let front = build_image(FRONT_IMAGE_CLASS, project.main_src(), &project.front_alt())?;
    let back = build_image(BACK_IMAGE_CLASS, project.second_src(), "")?;
    back.set_attribute("aria-hidden", "true")?;

    holder.append_child(&front)?;
    holder.append_child(&back)?;
    project_el.append_child(&holder)?;
    Ok(project_el)
}

fn build_image(class_name: &str, src: &str, alt: &str) -> Result<HtmlImageElement, JsValue> {
    let image = HtmlImageElement::new()?;
    image.set_class_name(class_name);
    image.set_src(src);
    image.set_alt(alt);
    image.set_attribute("loading", "lazy")?;
    image.set_attribute("decoding", "async")?;
    Ok(image)
}
