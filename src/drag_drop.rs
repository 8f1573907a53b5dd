use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use living_shapes_core::{
    drop_onto, load_order, save_order, DragTracker, DropOutcome, GalleryGrid, ProjectId,
};
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Element, Event};

use crate::dom_grid::{node_project_id, DomGrid};
use crate::order_store::LocalOrderStore;

const DRAGGING_CLASS: &str = "dragging";
const DROP_TARGET_CLASS: &str = "drop-target";
const TRANSFER_FORMAT: &str = "text/plain";
const MOVE_EFFECT: &str = "move";

/// Restores the stored order, makes every rendered node draggable and keeps
/// the grid in step with writes from other tabs.
pub(crate) fn init_drag_drop(grid: &DomGrid, store: Rc<LocalOrderStore>) {
    let restored = load_order(grid, &*store);
    if restored > 0 {
        gloo::console::log!("gallery: restored order", restored as u32);
    }

    let tracker = Rc::new(RefCell::new(DragTracker::default()));
    for node in grid.children() {
        setup_draggable(grid, &node, &store, &tracker);
    }

    let grid_for_sync = grid.clone();
    let store_for_sync = Rc::clone(&store);
    if let Some(listener) = store.subscribe(move || {
        gloo::console::log!("gallery: order changed in another tab", store_for_sync.key().to_string());
        load_order(&grid_for_sync, &*store_for_sync);
    }) {
        listener.forget();
    }
}

fn blocking_options() -> EventListenerOptions {
    EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: false,
    }
}

fn setup_draggable(
    grid: &DomGrid,
    node: &Element,
    store: &Rc<LocalOrderStore>,
    tracker: &Rc<RefCell<DragTracker>>,
) {
    let _ = node.set_attribute("draggable", "true");
    let mut listeners = Vec::new();

    let node_for_start = node.clone();
    let tracker_for_start = Rc::clone(tracker);
    listeners.push(EventListener::new(node, "dragstart", move |event: &Event| {
        let Some(event) = event.dyn_ref::<DragEvent>() else {
            return;
        };
        let id = node_project_id(&node_for_start);
        let _ = node_for_start.class_list().add_1(DRAGGING_CLASS);
        if let Some(transfer) = event.data_transfer() {
            transfer.set_effect_allowed(MOVE_EFFECT);
            let _ = transfer.set_data(TRANSFER_FORMAT, id.as_str());
        }
        tracker_for_start.borrow_mut().begin(id);
    }));

    let node_for_end = node.clone();
    let grid_for_end = grid.clone();
    let store_for_end = Rc::clone(store);
    let tracker_for_end = Rc::clone(tracker);
    listeners.push(EventListener::new(node, "dragend", move |_event: &Event| {
        let _ = node_for_end.class_list().remove_1(DRAGGING_CLASS);
        for child in grid_for_end.children() {
            let _ = child.class_list().remove_1(DROP_TARGET_CLASS);
        }
        let end = tracker_for_end.borrow_mut().end();
        if !end.dropped {
            gloo::console::log!("gallery: drag ended without drop");
        }
        if let Err(err) = save_order(&grid_for_end, &*store_for_end) {
            gloo::console::warn!("gallery: order not saved", err.to_string());
        }
    }));

    listeners.push(EventListener::new_with_options(
        node,
        "dragover",
        blocking_options(),
        move |event: &Event| {
            event.prevent_default();
            let Some(event) = event.dyn_ref::<DragEvent>() else {
                return;
            };
            if let Some(transfer) = event.data_transfer() {
                transfer.set_drop_effect(MOVE_EFFECT);
            }
        },
    ));

    let node_for_enter = node.clone();
    listeners.push(EventListener::new(node, "dragenter", move |_event: &Event| {
        let _ = node_for_enter.class_list().add_1(DROP_TARGET_CLASS);
    }));

    let node_for_leave = node.clone();
    listeners.push(EventListener::new(node, "dragleave", move |_event: &Event| {
        let _ = node_for_leave.class_list().remove_1(DROP_TARGET_CLASS);
    }));

    let node_for_drop = node.clone();
    let grid_for_drop = grid.clone();
    let tracker_for_drop = Rc::clone(tracker);
    listeners.push(EventListener::new_with_options(
        node,
        "drop",
        blocking_options(),
        move |event: &Event| {
            event.prevent_default();
            let Some(event) = event.dyn_ref::<DragEvent>() else {
                return;
            };
            let dragged_id = event
                .data_transfer()
                .and_then(|transfer| transfer.get_data(TRANSFER_FORMAT).ok())
                .unwrap_or_default();
            let outcome = drop_onto(&grid_for_drop, &ProjectId::from(dragged_id), &node_for_drop);
            if let DropOutcome::Moved { .. } = outcome {
                tracker_for_drop.borrow_mut().mark_dropped();
                let _ = node_for_drop.class_list().remove_1(DROP_TARGET_CLASS);
            }
        },
    ));

    for listener in listeners {
        listener.forget();
    }
}
