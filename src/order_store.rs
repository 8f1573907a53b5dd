use gloo::events::EventListener;
use living_shapes_core::{GalleryError, OrderStore};
use wasm_bindgen::JsCast;
use web_sys::{Event, Storage, StorageEvent};

use crate::js_error::js_err;

/// Gallery order in `window.localStorage` under one fixed key.
#[derive(Clone, Debug)]
pub(crate) struct LocalOrderStore {
    key: String,
}

impl LocalOrderStore {
    pub(crate) fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }

    pub(crate) fn key(&self) -> &str {
        &self.key
    }

    /// Calls `on_change` whenever another document writes this key. The
    /// subscription lasts as long as the returned listener.
    pub(crate) fn subscribe<F>(&self, on_change: F) -> Option<EventListener>
    where
        F: Fn() + 'static,
    {
        let window = web_sys::window()?;
        let key = self.key.clone();
        Some(EventListener::new(&window, "storage", move |event: &Event| {
            let Some(event) = event.dyn_ref::<StorageEvent>() else {
                return;
            };
            if event.key().as_deref() == Some(key.as_str()) {
                on_change();
            }
        }))
    }
}

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

impl OrderStore for LocalOrderStore {
    fn read_raw(&self) -> Option<String> {
        local_storage()?.get_item(&self.key).ok()?
    }

    fn write_raw(&self, raw: &str) -> Result<(), GalleryError> {
        let Some(storage) = local_storage() else {
            return Err(GalleryError::Storage("local storage unavailable".to_string()));
        };
        storage
            .set_item(&self.key, raw)
            .map_err(|err| GalleryError::Storage(js_err(err)))
    }
}
