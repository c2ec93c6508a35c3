use chrono::NaiveDate;

/// Daily booking window, half-open: slots run "09:00" through "16:00".
pub const OPEN_HOUR: u32 = 9;
pub const CLOSE_HOUR: u32 = 17;

pub fn slot_label(hour: u32) -> String {
    format!("{hour:02}:00")
}

/// Parses a "HH:00" slot label. Anything else (minutes, out-of-range hour,
/// garbage) is rejected.
pub fn parse_slot_label(label: &str) -> Option<u32> {
    let (hour, minute) = label.split_once(':')?;
    if hour.len() != 2 || minute != "00" {
        return None;
    }
    let hour: u32 = hour.parse().ok()?;
    if hour > 23 {
        return None;
    }
    Some(hour)
}

pub fn within_window(hour: u32) -> bool {
    (OPEN_HOUR..CLOSE_HOUR).contains(&hour)
}

/// External-world occupancy for a slot, independent of this ledger's own
/// bookings. Pluggable so the simulated mask can be swapped for a real
/// conflict-detection rule without touching slot generation.
pub trait SlotMask: Send + Sync {
    fn is_blocked(&self, date: NaiveDate, resource_id: &str, hour: u32) -> bool;
}

/// Deterministic pseudo-random mask: same (date, resource, hour) always
/// yields the same answer. Roughly one hour in seven comes back blocked.
pub struct SeededMask;

impl SlotMask for SeededMask {
    fn is_blocked(&self, date: NaiveDate, resource_id: &str, hour: u32) -> bool {
        let date_str = date.format("%Y-%m-%d").to_string();
        let sum: u32 = date_str
            .bytes()
            .chain(resource_id.bytes())
            .map(u32::from)
            .sum();
        (sum + hour) % 7 == 0
    }
}

/// Mask that blocks nothing. Useful where only ledger-driven availability
/// should matter.
pub struct OpenMask;

impl SlotMask for OpenMask {
    fn is_blocked(&self, _date: NaiveDate, _resource_id: &str, _hour: u32) -> bool {
        false
    }
}
