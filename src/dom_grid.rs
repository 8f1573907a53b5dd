use living_shapes_core::{GalleryGrid, ProjectId};
use web_sys::{Element, Node};

pub(crate) const PROJECT_CLASS: &str = "project";
pub(crate) const HOLDER_CLASS: &str = "img--holder";
pub(crate) const DATA_ID_ATTR: &str = "data-id";

/// The `#projects` container; its element children are the gallery nodes.
#[derive(Clone)]
pub(crate) struct DomGrid {
    root: Element,
}

impl DomGrid {
    pub(crate) fn new(root: Element) -> Self {
        Self { root }
    }
}

impl GalleryGrid for DomGrid {
    type Node = Element;

    fn children(&self) -> Vec<Element> {
        let list = self.root.children();
        (0..list.length()).filter_map(|idx| list.item(idx)).collect()
    }

    fn node_id(&self, node: &Element) -> ProjectId {
        node_project_id(node)
    }

    fn append(&self, node: &Element) {
        let _ = self.root.append_child(node);
    }

    fn insert_before(&self, node: &Element, reference: Option<&Element>) {
        match reference {
            Some(reference) => {
                let reference: &Node = reference;
                let _ = self.root.insert_before(node, Some(reference));
            }
            None => {
                let _ = self.root.append_child(node);
            }
        }
    }
}

/// `data-id` on the node, else the id of its image holder.
pub(crate) fn node_project_id(node: &Element) -> ProjectId {
    if let Some(id) = node.get_attribute(DATA_ID_ATTR) {
        if !id.is_empty() {
            return ProjectId::from(id);
        }
    }
    node.query_selector(&format!(".{HOLDER_CLASS}"))
        .ok()
        .flatten()
        .map(|holder| ProjectId::from(holder.id()))
        .unwrap_or_default()
}
