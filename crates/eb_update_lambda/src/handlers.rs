pub mod is_complete;
pub mod on_event;

use serde_json::Value;

use crate::runtime::contract::LifecycleEvent;

/// Decodes a raw Lambda payload into a lifecycle event.
pub fn decode_event(payload: Value) -> Result<LifecycleEvent, String> {
    serde_json::from_value(payload).map_err(|error| format!("invalid lifecycle event: {error}"))
}
