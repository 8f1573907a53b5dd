use std::cell::{Cell, RefCell};

use crate::boot::GalleryRenderer;
use crate::error::GalleryError;
use crate::grid::GalleryGrid;
use crate::order::OrderStore;
use crate::project::{derive_project_id, ProjectId, ProjectRecord};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryImage {
    pub src: String,
    pub alt: String,
    pub decorative: bool,
}

/// Stand-in for a rendered gallery node. Equality is identity: two nodes
/// built from identical records are still different nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryNode {
    key: u64,
    pub id: ProjectId,
    pub front: MemoryImage,
    pub back: MemoryImage,
}

/// In-memory grid container, usable wherever the browser grid is.
#[derive(Debug, Default)]
pub struct MemoryGrid {
    children: RefCell<Vec<MemoryNode>>,
    next_key: Cell<u64>,
}

impl MemoryGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grid holding one bare node per id, in the given order.
    pub fn with_ids(ids: &[&str]) -> Self {
        let grid = Self::new();
        for id in ids {
            let node = grid.build_node(ProjectId::from(*id), empty_image(false), empty_image(true));
            grid.children.borrow_mut().push(node);
        }
        grid
    }

    pub fn ids(&self) -> Vec<String> {
        self.children
            .borrow()
            .iter()
            .map(|node| node.id.as_str().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.children.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.borrow().is_empty()
    }

    pub fn node(&self, index: usize) -> Option<MemoryNode> {
        self.children.borrow().get(index).cloned()
    }

    fn build_node(&self, id: ProjectId, front: MemoryImage, back: MemoryImage) -> MemoryNode {
        let key = self.next_key.get();
        self.next_key.set(key.saturating_add(1));
        MemoryNode {
            key,
            id,
            front,
            back,
        }
    }

    fn detach(&self, node: &MemoryNode) {
        self.children
            .borrow_mut()
            .retain(|child| child.key != node.key);
    }
}

fn empty_image(decorative: bool) -> MemoryImage {
    MemoryImage {
        src: String::new(),
        alt: String::new(),
        decorative,
    }
}

impl GalleryGrid for MemoryGrid {
    type Node = MemoryNode;

    fn children(&self) -> Vec<MemoryNode> {
        self.children.borrow().clone()
    }

    fn node_id(&self, node: &MemoryNode) -> ProjectId {
        node.id.clone()
    }

    fn append(&self, node: &MemoryNode) {
        self.detach(node);
        self.children.borrow_mut().push(node.clone());
    }

    fn insert_before(&self, node: &MemoryNode, reference: Option<&MemoryNode>) {
        self.detach(node);
        let mut children = self.children.borrow_mut();
        let index = reference
            .and_then(|reference| children.iter().position(|child| child.key == reference.key))
            .unwrap_or(children.len());
        children.insert(index, node.clone());
    }
}

impl GalleryRenderer for MemoryGrid {
    fn render(&self, projects: &[ProjectRecord]) -> Result<usize, GalleryError> {
        let batch: Vec<MemoryNode> = projects
            .iter()
            .map(|project| {
                let front = MemoryImage {
                    src: project.main_src().to_string(),
                    alt: project.front_alt(),
                    decorative: false,
                };
                let back = MemoryImage {
                    src: project.second_src().to_string(),
                    alt: String::new(),
                    decorative: true,
                };
                self.build_node(derive_project_id(project), front, back)
            })
            .collect();
        let count = batch.len();
        self.children.borrow_mut().extend(batch);
        Ok(count)
    }
}

/// Order store backed by a raw string slot, so corrupt values can be seeded.
#[derive(Debug, Default)]
pub struct MemoryOrderStore {
    raw: RefCell<Option<String>>,
    fail_writes: Cell<bool>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(raw: &str) -> Self {
        let store = Self::new();
        *store.raw.borrow_mut() = Some(raw.to_string());
        store
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }

    /// Simulates a full or disabled storage area.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl OrderStore for MemoryOrderStore {
    fn read_raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }

    fn write_raw(&self, raw: &str) -> Result<(), GalleryError> {
        if self.fail_writes.get() {
            return Err(GalleryError::Storage("quota exceeded".to_string()));
        }
        *self.raw.borrow_mut() = Some(raw.to_string());
        Ok(())
    }
}
