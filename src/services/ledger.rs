use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::models::{Booking, BookingStatus, TimeSlot};
use crate::services::availability::{
    self, SlotMask, CLOSE_HOUR, OPEN_HOUR,
};

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("time slot {slot} is outside booking hours (09:00-17:00)")]
    OutsideHours { slot: String },

    #[error("time slot {slot} on {date} is no longer available")]
    SlotTaken { date: NaiveDate, slot: String },
}

/// In-memory collection of bookings and the operations over it. Holds no
/// reference data; services and resources live in the catalog. The host
/// constructs one ledger and guards it with a mutex, so the availability
/// re-check inside [`Ledger::create`] and the append it guards happen under
/// one lock acquisition.
pub struct Ledger {
    bookings: Vec<Booking>,
    mask: Box<dyn SlotMask>,
    last_created_at: i64,
}

impl Ledger {
    pub fn new(mask: Box<dyn SlotMask>) -> Self {
        Self {
            bookings: Vec::new(),
            mask,
            last_created_at: 0,
        }
    }

    /// One slot per hour in [09:00, 17:00), ascending. An hour is
    /// unavailable when a confirmed booking occupies it for this resource
    /// and date, or when the mask blocks it. Read-only.
    pub fn available_slots(&self, date: NaiveDate, resource_id: &str) -> Vec<TimeSlot> {
        (OPEN_HOUR..CLOSE_HOUR)
            .map(|hour| {
                let time = availability::slot_label(hour);
                let booked = self.slot_occupied(date, resource_id, &time);
                let masked = self.mask.is_blocked(date, resource_id, hour);
                TimeSlot {
                    time,
                    available: !booked && !masked,
                }
            })
            .collect()
    }

    /// Appends a confirmed booking. The slot is re-checked here so that a
    /// stale availability view held by the caller cannot double-book:
    /// occupied or masked slots fail with [`LedgerError::SlotTaken`].
    /// Service and resource ids are taken as-is; dangling references are
    /// accepted and surface as unresolved joins when listing.
    pub fn create(
        &mut self,
        service_id: &str,
        resource_id: &str,
        date: NaiveDate,
        time_slot: &str,
        customer_name: &str,
    ) -> Result<Booking, LedgerError> {
        let hour = availability::parse_slot_label(time_slot)
            .filter(|h| availability::within_window(*h))
            .ok_or_else(|| LedgerError::OutsideHours {
                slot: time_slot.to_string(),
            })?;

        if self.slot_occupied(date, resource_id, time_slot)
            || self.mask.is_blocked(date, resource_id, hour)
        {
            return Err(LedgerError::SlotTaken {
                date,
                slot: time_slot.to_string(),
            });
        }

        let booking = Booking {
            id: Uuid::new_v4().to_string(),
            service_id: service_id.to_string(),
            resource_id: resource_id.to_string(),
            date,
            time_slot: time_slot.to_string(),
            status: BookingStatus::Confirmed,
            customer_name: customer_name.to_string(),
            created_at: self.next_created_at(),
        };
        self.bookings.push(booking.clone());
        Ok(booking)
    }

    /// Flips a confirmed booking to cancelled. Idempotent: cancelling an
    /// already-cancelled or unknown id is a silent no-op. Returns whether a
    /// transition happened.
    pub fn cancel(&mut self, id: &str) -> bool {
        match self.bookings.iter_mut().find(|b| b.id == id) {
            Some(booking) if booking.status == BookingStatus::Confirmed => {
                booking.status = BookingStatus::Cancelled;
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    /// All bookings, most recent first.
    pub fn bookings(&self) -> Vec<Booking> {
        let mut bookings = self.bookings.clone();
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        bookings
    }

    fn slot_occupied(&self, date: NaiveDate, resource_id: &str, time_slot: &str) -> bool {
        self.bookings.iter().any(|b| {
            b.status == BookingStatus::Confirmed
                && b.resource_id == resource_id
                && b.date == date
                && b.time_slot == time_slot
        })
    }

    // Wall-clock millis, bumped past the previous value so createdAt stays a
    // strict total order even for creations within the same millisecond.
    fn next_created_at(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        self.last_created_at = now.max(self.last_created_at + 1);
        self.last_created_at
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(Box::new(availability::SeededMask))
    }
}
