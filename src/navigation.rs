use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use living_shapes_core::{contact_click, projects_click, GalleryConfig, NavAction};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlFormElement};

use crate::behaviors::scroll_into_view_smooth;

fn blocking_options() -> EventListenerOptions {
    EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: false,
    }
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_default()
}

fn apply(document: &Document, config: &GalleryConfig, action: NavAction) {
    match action {
        NavAction::ScrollToGallery => {
            if let Some(grid) = document.get_element_by_id(&config.grid_id) {
                scroll_into_view_smooth(&grid);
            }
        }
        NavAction::Navigate(url) => {
            let Some(window) = web_sys::window() else {
                return;
            };
            if window.location().set_href(&url).is_err() {
                gloo::console::warn!("navigation: failed to open", url);
            }
        }
    }
}

/// Wires the projects and contact buttons when they exist on the page.
pub(crate) fn init_navigation(document: &Document, config: &GalleryConfig) {
    if let Some(button) = document.get_element_by_id(&config.projects_button_id) {
        let document = document.clone();
        let config = config.clone();
        EventListener::new_with_options(&button, "click", blocking_options(), move |event: &Event| {
            event.prevent_default();
            let action = projects_click(&current_path(), &config);
            apply(&document, &config, action);
        })
        .forget();
    }

    if let Some(button) = document.get_element_by_id(&config.contact_button_id) {
        let document = document.clone();
        let config = config.clone();
        EventListener::new_with_options(&button, "click", blocking_options(), move |event: &Event| {
            event.prevent_default();
            if let Some(action) = contact_click(&current_path(), &config) {
                apply(&document, &config, action);
            }
        })
        .forget();
    }
}

/// Client-only submit: native validation UI when invalid, otherwise a fixed
/// confirmation and a cleared form. Nothing is sent anywhere.
pub(crate) fn init_contact_form(document: &Document, config: &GalleryConfig) {
    let form = document
        .get_element_by_id(&config.contact_form_id)
        .and_then(|element| element.dyn_into::<HtmlFormElement>().ok());
    let status = document
        .query_selector(&config.form_status_selector)
        .ok()
        .flatten();
    let (Some(form), Some(status)) = (form, status) else {
        return;
    };
    let message = config.confirmation_message.clone();
    let form_for_submit = form.clone();
    EventListener::new_with_options(&form, "submit", blocking_options(), move |event: &Event| {
        event.prevent_default();
        if !form_for_submit.check_validity() {
            form_for_submit.report_validity();
            return;
        }
        status.set_text_content(Some(message.as_str()));
        form_for_submit.reset();
    })
    .forget();
}
