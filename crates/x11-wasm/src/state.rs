//! Benchmark statistics handed back to JavaScript.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Hashing statistics from a benchmark run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HashStats {
    /// Total hashes computed.
    pub total_hashes: u64,
    /// Elapsed time in milliseconds.
    pub elapsed_ms: f64,
    /// Hash rate (hashes per second).
    pub hash_rate: f64,
    /// Display-order hex of the last hash, so the work cannot be optimized away.
    pub last_hash: Option<String>,
}

impl HashStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update hash rate based on elapsed time.
    pub fn update_hash_rate(&mut self) {
        if self.elapsed_ms > 0.0 {
            self.hash_rate = (self.total_hashes as f64) / (self.elapsed_ms / 1000.0);
        }
    }

    /// Format hash rate for display.
    pub fn format_hash_rate(&self) -> String {
        if self.hash_rate >= 1_000_000.0 {
            format!("{:.2} MH/s", self.hash_rate / 1_000_000.0)
        } else if self.hash_rate >= 1_000.0 {
            format!("{:.2} KH/s", self.hash_rate / 1_000.0)
        } else {
            format!("{:.2} H/s", self.hash_rate)
        }
    }

    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}
