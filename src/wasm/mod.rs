/// WASM / JS API, JSON in and out. Only `Print_PrintSection` needs a browser.
pub mod api;
/// WASM API Datastructures, can be used even on non-WASM targets
pub mod structs;
