mod behaviors;
mod boot;
mod config;
mod dom_grid;
mod drag_drop;
mod fetch;
mod js_error;
mod navigation;
mod order_store;
mod renderer;

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests;

fn main() {
    console_error_panic_hook::set_once();
    boot::run();
}
