//! # TechFix Core
//!
//! Booking domain for the TechFix repair shop page.
//!
//! ```text
//! field edit ──► FormState ──submit──► RepairList (prepend, newest first)
//!                    │                      │
//!                    └── reset              └── SuccessBanner: hidden ─► visible ─(ticket)─► hidden
//! ```
//!
//! Everything here is synchronous and owned by a single [`BookingView`].
//! Timers, locking and rendering live in the web crate.

pub mod banner;
pub mod catalog;
pub mod clock;
pub mod form;
pub mod repair;
pub mod view;

pub use banner::{BannerTicket, SuccessBanner};
pub use catalog::{ServiceOffering, PAGE_DESCRIPTION, PAGE_TITLE, SERVICES, SHOP_NAME};
pub use clock::{Clock, FixedClock, SystemClock};
pub use form::{FormField, FormState, Urgency};
pub use repair::{RepairList, RepairRecord, RepairStatus};
pub use view::{BookingView, Submission};

/// Result type for techfix-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in techfix-core
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    #[error("Unknown urgency: {0} (expected normal, urgent or emergency)")]
    UnknownUrgency(String),
}
