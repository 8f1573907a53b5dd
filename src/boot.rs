use std::rc::Rc;

use gloo::events::EventListener;
use living_shapes_core::{render_then_attach, GalleryConfig};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use crate::behaviors;
use crate::config::gallery_config;
use crate::dom_grid::DomGrid;
use crate::drag_drop;
use crate::fetch::fetch_projects;
use crate::navigation;
use crate::order_store::LocalOrderStore;
use crate::renderer::DomRenderer;

pub(crate) fn run() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let config = gallery_config();
    if document.ready_state() == "loading" {
        let document_for_ready = document.clone();
        EventListener::once(&document, "DOMContentLoaded", move |_event| {
            start(&document_for_ready, config);
        })
        .forget();
    } else {
        start(&document, config);
    }
}

fn start(document: &Document, config: GalleryConfig) {
    navigation::init_navigation(document, &config);
    navigation::init_contact_form(document, &config);

    let Some(grid) = document.get_element_by_id(&config.grid_id) else {
        return;
    };
    let document = document.clone();
    spawn_local(async move {
        boot_gallery(document, grid, config).await;
    });
}

/// Fetch and render, then attach behaviors whether or not the data arrived.
async fn boot_gallery(document: Document, grid: Element, config: GalleryConfig) {
    let payload = fetch_projects(&config.data_path).await;
    let renderer = DomRenderer::new(document, grid.clone());
    let report = render_then_attach(&renderer, payload, || {
        behaviors::init_scroll_fade(&grid);
        let store = Rc::new(LocalOrderStore::new(&config.store_key));
        drag_drop::init_drag_drop(&DomGrid::new(grid.clone()), store);
        behaviors::smooth_hash_landing(&grid, &config);
    });
    match report.error {
        Some(err) => {
            gloo::console::error!(
                format!("gallery: failed to load {}:", config.data_path),
                err.to_string()
            );
        }
        None => {
            gloo::console::log!("gallery: rendered projects", report.rendered as u32);
        }
    }
}
