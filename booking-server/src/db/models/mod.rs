//! Database Models

// Serde helpers
pub mod serde_record;

pub mod booking;
pub mod experience;
pub mod promo_code;

// Re-exports
pub use booking::{Booking, BookingId};
pub use experience::{Experience, ExperienceId, Slot};
pub use promo_code::{DiscountType, PromoCode};
