//! Hashing entry points exported to JavaScript.
//!
//! Each export is a thin wrapper over a plain Rust function so the logic can
//! be exercised without a JavaScript host.

use wasm_bindgen::prelude::*;
use x11_core::{hash_to_display_hex, x11, BlockHeader, X11Error, DIGEST_LEN, HEADER_LEN};

use crate::state::HashStats;

fn to_js_error(err: X11Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn digest_prefix(data: &[u8], len: usize) -> Result<[u8; DIGEST_LEN], X11Error> {
    x11_core::HashChain::X11.digest(data, Some(len))
}

fn header_hash_hex(header: &[u8]) -> Result<String, X11Error> {
    let header = BlockHeader::from_bytes(header)?;
    Ok(hash_to_display_hex(&header.hash()))
}

/// X11 of the whole buffer, as 32 raw bytes.
#[wasm_bindgen]
pub fn digest(data: &[u8]) -> Vec<u8> {
    x11(data).to_vec()
}

/// X11 of the first `len` bytes of `data`.
///
/// Throws if `data` is shorter than `len`.
#[wasm_bindgen]
pub fn digest_with_length(data: &[u8], len: usize) -> Result<Vec<u8>, JsValue> {
    digest_prefix(data, len)
        .map(|hash| hash.to_vec())
        .map_err(to_js_error)
}

/// X11 of the whole buffer as lowercase hex, in output byte order.
#[wasm_bindgen]
pub fn digest_hex(data: &[u8]) -> String {
    hex::encode(x11(data))
}

/// Block hash of an 80-byte serialized header, in display order.
#[wasm_bindgen]
pub fn header_hash(header: &[u8]) -> Result<String, JsValue> {
    header_hash_hex(header).map_err(to_js_error)
}

/// Current time in milliseconds, preferring the high-resolution clock.
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Hash `iterations` random headers, varying the nonce, and report throughput.
#[wasm_bindgen]
pub fn benchmark(iterations: u32) -> Result<JsValue, JsValue> {
    let mut header = [0u8; HEADER_LEN];
    getrandom::getrandom(&mut header)
        .map_err(|e| JsValue::from_str(&format!("Random source unavailable: {}", e)))?;

    let start = now_ms();
    let mut last = [0u8; DIGEST_LEN];
    for nonce in 0..iterations {
        header[76..80].copy_from_slice(&nonce.to_le_bytes());
        last = x11_core::digest_header(&header);
    }

    let mut stats = HashStats::new();
    stats.total_hashes = iterations as u64;
    stats.elapsed_ms = now_ms() - start;
    stats.update_hash_rate();
    stats.last_hash = Some(hash_to_display_hex(&last));

    console_log(&format!(
        "x11 benchmark: {} hashes in {:.1} ms ({})",
        stats.total_hashes,
        stats.elapsed_ms,
        stats.format_hash_rate()
    ));
    stats.to_js()
}

/// Log to the browser console.
#[wasm_bindgen]
pub fn console_log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}
