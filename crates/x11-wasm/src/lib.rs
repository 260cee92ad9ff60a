//! WebAssembly bindings for the X11 hash.
//!
//! This crate provides JavaScript-accessible APIs for:
//! - Hashing byte buffers, whole or up to a declared length
//! - Hashing 80-byte block headers into display-order hex
//! - Measuring hash throughput in the browser

use wasm_bindgen::prelude::*;

pub mod hasher;
pub mod state;

pub use hasher::{benchmark, console_log, digest, digest_hex, digest_with_length, header_hash};
pub use state::HashStats;

/// Initialize the WASM module with better panic messages.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
