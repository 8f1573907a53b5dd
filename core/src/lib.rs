pub mod boot;
pub mod config;
pub mod drag;
pub mod error;
pub mod grid;
pub mod memory;
pub mod nav;
pub mod order;
pub mod project;

pub use boot::{render_then_attach, BootReport, GalleryRenderer};
pub use config::GalleryConfig;
pub use drag::{DragPhase, DragTracker, GestureEnd};
pub use error::GalleryError;
pub use grid::{
    current_order, drop_onto, load_order, restore_order, save_order, DropOutcome, GalleryGrid,
};
pub use memory::{MemoryGrid, MemoryImage, MemoryNode, MemoryOrderStore};
pub use nav::{contact_click, is_contact_path, is_index_path, projects_click, NavAction};
pub use order::{parse_stored_order, serialize_order, OrderStore};
pub use project::{derive_project_id, parse_projects, project_id_from_src, ProjectId, ProjectRecord};
