//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// Prefix of every generated event id (example of an id: `event-1760690000000-3f9a1c2b7`).
/// Feel free to override it when initing this library.
pub static ID_PREFIX: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("event".to_string())));

/// How much an event color is blended toward white to get its background color
pub const DEFAULT_LIGHTEN_FACTOR: f64 = 0.85;

/// Number of events a month cell displays before collapsing the rest into "+N more"
pub const MAX_EVENTS_PER_CELL: usize = 3;

/// Start hour of a freshly opened event form
pub const DEFAULT_START_HOUR: u32 = 9;
/// End hour of a freshly opened event form
pub const DEFAULT_END_HOUR: u32 = 10;

/// Returns the current id prefix
pub fn id_prefix() -> String {
    match ID_PREFIX.lock() {
        Ok(prefix) => prefix.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}
