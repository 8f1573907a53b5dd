use std::cell::RefCell;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use living_shapes_core::GalleryConfig;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window};

const SCROLLED_CLASS: &str = "scrolled";

thread_local! {
    static LANDING_FRAME: RefCell<Option<AnimationFrame>> = RefCell::new(None);
}

pub(crate) fn scroll_into_view_smooth(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Keeps the `scrolled` class on the grid in sync with the page offset.
pub(crate) fn init_scroll_fade(grid: &Element) {
    let Some(window) = web_sys::window() else {
        return;
    };
    update_scrolled(&window, grid);
    let grid = grid.clone();
    let window_for_scroll = window.clone();
    EventListener::new(&window, "scroll", move |_event| {
        update_scrolled(&window_for_scroll, &grid);
    })
    .forget();
}

fn update_scrolled(window: &Window, grid: &Element) {
    let scrolled = window.scroll_y().map(|offset| offset > 0.0).unwrap_or(false);
    let _ = grid.class_list().toggle_with_force(SCROLLED_CLASS, scrolled);
}

/// Arriving with `#projects`: jump to the top, then glide to the gallery on
/// the next frame.
pub(crate) fn smooth_hash_landing(grid: &Element, config: &GalleryConfig) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let hash = window.location().hash().unwrap_or_default();
    if !config.is_gallery_hash(&hash) {
        return;
    }
    window.scroll_to_with_x_and_y(0.0, 0.0);
    let grid = grid.clone();
    let handle = request_animation_frame(move |_| {
        LANDING_FRAME.with(|slot| {
            slot.borrow_mut().take();
        });
        scroll_into_view_smooth(&grid);
    });
    LANDING_FRAME.with(|slot| {
        *slot.borrow_mut() = Some(handle);
    });
}
