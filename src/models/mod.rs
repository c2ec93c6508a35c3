pub mod booking;
pub mod resource;
pub mod service;
pub mod slot;

pub use booking::{Booking, BookingStatus};
pub use resource::Resource;
pub use service::{Service, ServiceType};
pub use slot::TimeSlot;
