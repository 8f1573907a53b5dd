use std::rc::Rc;

use living_shapes_core::{
    drop_onto, load_order, save_order, DropOutcome, GalleryGrid, GalleryRenderer, OrderStore,
    ProjectId, ProjectRecord,
};
use wasm_bindgen_test::*;
use web_sys::{
    DataTransfer, Document, DragEvent, DragEventInit, Element, StorageEvent, StorageEventInit,
};

use crate::dom_grid::{node_project_id, DomGrid};
use crate::drag_drop::init_drag_drop;
use crate::order_store::LocalOrderStore;
use crate::renderer::DomRenderer;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window()
        .and_then(|window| window.document())
        .expect("document available")
}

fn fresh_grid() -> Element {
    let document = document();
    let grid = document.create_element("div").expect("grid element");
    document
        .body()
        .expect("body")
        .append_child(&grid)
        .expect("attach grid");
    grid
}

fn sample_projects() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord::new("Butterfly", "img/bfly-outside.jpg", "img/bfly-inside.jpg"),
        ProjectRecord::new("Shell", "img/shell-outside.jpg", "img/shell-inside.jpg"),
        ProjectRecord::new("Moth", "img/moth-outside.jpg", "img/moth-inside.jpg"),
        ProjectRecord::new("Cat", "img/CAT.PNG", "img/cat-2.png"),
    ]
}

fn rendered_grid() -> DomGrid {
    let root = fresh_grid();
    let renderer = DomRenderer::new(document(), root.clone());
    renderer.render(&sample_projects()).expect("render");
    DomGrid::new(root)
}

fn ids(grid: &DomGrid) -> Vec<String> {
    grid.children()
        .iter()
        .map(|node| node_project_id(node).as_str().to_string())
        .collect()
}

fn unique_store(label: &str) -> LocalOrderStore {
    let key = format!("living-shapes-test-{label}-{}", js_sys::Math::random());
    LocalOrderStore::new(&key)
}

#[wasm_bindgen_test]
fn renders_one_node_per_project_with_front_and_back_images() {
    let grid = rendered_grid();
    let nodes = grid.children();
    assert_eq!(nodes.len(), 4);
    assert_eq!(ids(&grid), vec!["bfly", "shell", "moth", "cat"]);

    let first = &nodes[0];
    assert_eq!(first.class_name(), "project");
    let holder = first
        .query_selector(".img--holder")
        .expect("query")
        .expect("holder");
    assert_eq!(holder.id(), "bfly");
    assert_eq!(holder.get_attribute("tabindex").as_deref(), Some("0"));

    let front = first
        .query_selector(".img--front")
        .expect("query")
        .expect("front image");
    assert_eq!(front.get_attribute("alt").as_deref(), Some("Butterfly – outside"));
    assert_eq!(front.get_attribute("loading").as_deref(), Some("lazy"));
    assert_eq!(front.get_attribute("aria-hidden"), None);

    let back = first
        .query_selector(".img--back")
        .expect("query")
        .expect("back image");
    assert_eq!(back.get_attribute("alt").as_deref(), Some(""));
    assert_eq!(back.get_attribute("aria-hidden").as_deref(), Some("true"));
    assert_eq!(back.get_attribute("decoding").as_deref(), Some("async"));
}

#[wasm_bindgen_test]
fn node_id_falls_back_to_holder_id() {
    let grid = rendered_grid();
    let node = grid.children().remove(1);
    node.remove_attribute("data-id").expect("remove attribute");
    assert_eq!(node_project_id(&node), ProjectId::from("shell"));
}

#[wasm_bindgen_test]
fn drop_moves_dom_nodes_direction_aware() {
    let grid = rendered_grid();
    let target = grid.children().remove(2);
    let outcome = drop_onto(&grid, &ProjectId::from("bfly"), &target);
    assert_eq!(outcome, DropOutcome::Moved { from: 0, to: 2 });
    assert_eq!(ids(&grid), vec!["shell", "moth", "bfly", "cat"]);

    let target = grid.children().remove(0);
    drop_onto(&grid, &ProjectId::from("bfly"), &target);
    assert_eq!(ids(&grid), vec!["bfly", "shell", "moth", "cat"]);

    let same = grid.children().remove(1);
    assert_eq!(drop_onto(&grid, &ProjectId::from("shell"), &same), DropOutcome::SameNode);
}

#[wasm_bindgen_test]
fn local_store_round_trips_order_into_fresh_grid() {
    let store = unique_store("round-trip");
    let grid = rendered_grid();
    let target = grid.children().remove(3);
    drop_onto(&grid, &ProjectId::from("shell"), &target);
    save_order(&grid, &store).expect("save");

    let fresh = rendered_grid();
    load_order(&fresh, &store);
    assert_eq!(ids(&fresh), ids(&grid));
    assert_eq!(ids(&fresh), vec!["bfly", "moth", "cat", "shell"]);
}

#[wasm_bindgen_test]
fn local_store_ignores_malformed_values() {
    let store = unique_store("malformed");
    for raw in ["not json", "{}", "[]"] {
        store.write_raw(raw).expect("seed");
        let grid = rendered_grid();
        assert_eq!(load_order(&grid, &store), 0);
        assert_eq!(ids(&grid), vec!["bfly", "shell", "moth", "cat"]);
    }
}

#[wasm_bindgen_test]
fn partial_stored_order_puts_listed_ids_first() {
    let store = unique_store("partial");
    store.write_raw(r#"["moth","bfly"]"#).expect("seed");
    let grid = rendered_grid();
    load_order(&grid, &store);
    assert_eq!(ids(&grid), vec!["moth", "bfly", "shell", "cat"]);
    assert_eq!(store.load().map(|order| order.len()), Some(2));
}

fn dispatch_storage_change(key: &str) {
    let init = StorageEventInit::new();
    init.set_key(Some(key));
    let event = StorageEvent::new_with_event_init_dict("storage", &init).expect("storage event");
    web_sys::window()
        .expect("window")
        .dispatch_event(&event)
        .expect("dispatch storage event");
}

fn dispatch_drag(node: &Element, kind: &str, transfer: &DataTransfer) {
    let init = DragEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_data_transfer(Some(transfer));
    let event = DragEvent::new_with_event_init_dict(kind, &init).expect("drag event");
    node.dispatch_event(&event).expect("dispatch drag event");
}

fn has_class(node: &Element, class: &str) -> bool {
    node.class_list().contains(class)
}

#[wasm_bindgen_test]
fn storage_change_for_own_key_reapplies_order() {
    let store = Rc::new(unique_store("cross-tab"));
    let grid = rendered_grid();
    let grid_for_sync = grid.clone();
    let store_for_sync = Rc::clone(&store);
    let _subscription = store
        .subscribe(move || {
            load_order(&grid_for_sync, &*store_for_sync);
        })
        .expect("subscription");

    store.write_raw(r#"["moth","bfly"]"#).expect("seed");
    assert_eq!(ids(&grid), vec!["bfly", "shell", "moth", "cat"]);

    dispatch_storage_change("living-shapes-some-other-key");
    assert_eq!(ids(&grid), vec!["bfly", "shell", "moth", "cat"]);

    dispatch_storage_change(store.key());
    assert_eq!(ids(&grid), vec!["moth", "bfly", "shell", "cat"]);
}

#[wasm_bindgen_test]
fn dropped_gesture_reorders_clears_classes_and_saves() {
    let store = Rc::new(unique_store("drag-drop"));
    let grid = rendered_grid();
    init_drag_drop(&grid, Rc::clone(&store));

    let nodes = grid.children();
    let source = nodes[0].clone();
    let target = nodes[2].clone();
    assert_eq!(source.get_attribute("draggable").as_deref(), Some("true"));

    let transfer = DataTransfer::new().expect("data transfer");
    dispatch_drag(&source, "dragstart", &transfer);
    assert!(has_class(&source, "dragging"));
    assert_eq!(transfer.get_data("text/plain").expect("payload"), "bfly");

    dispatch_drag(&target, "dragenter", &transfer);
    assert!(has_class(&target, "drop-target"));
    dispatch_drag(&target, "drop", &transfer);
    assert_eq!(ids(&grid), vec!["shell", "moth", "bfly", "cat"]);
    assert_eq!(store.read_raw(), None);

    dispatch_drag(&source, "dragend", &transfer);
    for node in grid.children() {
        assert!(!has_class(&node, "dragging"));
        assert!(!has_class(&node, "drop-target"));
    }
    assert_eq!(
        store.read_raw().as_deref(),
        Some(r#"["shell","moth","bfly","cat"]"#)
    );
}

#[wasm_bindgen_test]
fn cancelled_gesture_still_saves_current_order() {
    let store = Rc::new(unique_store("drag-cancel"));
    let grid = rendered_grid();
    init_drag_drop(&grid, Rc::clone(&store));

    let source = grid.children().remove(1);
    let other = grid.children().remove(3);
    let transfer = DataTransfer::new().expect("data transfer");
    dispatch_drag(&source, "dragstart", &transfer);
    dispatch_drag(&other, "dragenter", &transfer);
    dispatch_drag(&source, "dragend", &transfer);

    assert!(!has_class(&source, "dragging"));
    assert!(!has_class(&other, "drop-target"));
    assert_eq!(ids(&grid), vec!["bfly", "shell", "moth", "cat"]);
    assert_eq!(
        store.read_raw().as_deref(),
        Some(r#"["bfly","shell","moth","cat"]"#)
    );
}
