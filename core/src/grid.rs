use std::collections::HashMap;

use crate::error::GalleryError;
use crate::order::OrderStore;
use crate::project::ProjectId;

/// The container that owns the rendered gallery nodes.
///
/// Ids are read from the nodes on every call so a reorder can never leave
/// a stale cache behind.
pub trait GalleryGrid {
    type Node: Clone + PartialEq;

    fn children(&self) -> Vec<Self::Node>;

    fn node_id(&self, node: &Self::Node) -> ProjectId;

    /// Moves `node` to the end of the child list.
    fn append(&self, node: &Self::Node);

    /// Moves `node` in front of `reference`, or to the end when `None`.
    fn insert_before(&self, node: &Self::Node, reference: Option<&Self::Node>);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    Moved { from: usize, to: usize },
    SameNode,
    MissingSource,
    MissingTarget,
}

pub fn current_order<G: GalleryGrid>(grid: &G) -> Vec<ProjectId> {
    grid.children()
        .iter()
        .map(|node| grid.node_id(node))
        .collect()
}

/// Reorders the grid as (ids found in `ids`, in stored order) followed by
/// (every other node, in its prior relative order). Each node is moved to
/// the end in that sequence; unknown ids are skipped and a repeated id ends
/// up at its last listed position. Returns how many listed ids matched.
pub fn restore_order<G: GalleryGrid>(grid: &G, ids: &[ProjectId]) -> usize {
    let children = grid.children();
    let by_id: HashMap<ProjectId, G::Node> = children
        .iter()
        .map(|node| (grid.node_id(node), node.clone()))
        .collect();
    let mut listed: Vec<G::Node> = Vec::new();
    for id in ids {
        if let Some(node) = by_id.get(id) {
            grid.append(node);
            listed.push(node.clone());
        }
    }
    if listed.is_empty() {
        return 0;
    }
    for node in children.iter().filter(|node| !listed.contains(node)) {
        grid.append(node);
    }
    listed.len()
}

/// Places the node carrying `dragged_id` next to `target`: after it when
/// dragging forward, before it when dragging backward.
pub fn drop_onto<G: GalleryGrid>(grid: &G, dragged_id: &ProjectId, target: &G::Node) -> DropOutcome {
    let children = grid.children();
    let Some(from) = children
        .iter()
        .position(|node| grid.node_id(node) == *dragged_id)
    else {
        return DropOutcome::MissingSource;
    };
    let dragged = &children[from];
    if dragged == target {
        return DropOutcome::SameNode;
    }
    let Some(to) = children.iter().position(|node| node == target) else {
        return DropOutcome::MissingTarget;
    };
    if from < to {
        grid.insert_before(dragged, children.get(to + 1));
    } else {
        grid.insert_before(dragged, Some(target));
    }
    DropOutcome::Moved { from, to }
}

pub fn save_order<G, S>(grid: &G, store: &S) -> Result<(), GalleryError>
where
    G: GalleryGrid,
    S: OrderStore + ?Sized,
{
    store.save(&current_order(grid))
}

/// Safe to call repeatedly; a missing or malformed stored order is a no-op.
pub fn load_order<G, S>(grid: &G, store: &S) -> usize
where
    G: GalleryGrid,
    S: OrderStore + ?Sized,
{
    match store.load() {
        Some(ids) => restore_order(grid, &ids),
        None => 0,
    }
}
