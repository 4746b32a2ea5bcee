//! Response Encoder
//!
//! The last step of every JSON response: turning a value into body bytes.
//! Kept behind a trait so a failing encoder can be injected.

use serde_json::Value;

/// Encodes a response value into the bytes written to the client.
pub trait ResponseEncoder: Send + Sync {
    fn encode(&self, value: &Value) -> serde_json::Result<Vec<u8>>;
}

/// Default encoder, plain `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder;

impl ResponseEncoder for JsonEncoder {
    fn encode(&self, value: &Value) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(value)
    }
}
