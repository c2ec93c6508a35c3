use serde::{Deserialize, Serialize};

/// One hour-long booking unit within the daily window, annotated with
/// availability. Derived on demand, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlot {
    pub time: String,
    pub available: bool,
}
