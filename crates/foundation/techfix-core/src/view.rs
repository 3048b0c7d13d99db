//! State of one booking page view

use chrono::NaiveDate;

use crate::banner::{BannerTicket, SuccessBanner};
use crate::form::{FormField, FormState};
use crate::repair::{RepairList, RepairRecord};
use crate::Result;

/// Everything one page view holds: repairs, form values, banner.
#[derive(Debug, Clone)]
pub struct BookingView {
    pub repairs: RepairList,
    pub form: FormState,
    pub banner: SuccessBanner,
}

/// Outcome of a submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub record: RepairRecord,
    /// Pass back to [`BookingView::expire_banner`] when the timer fires
    pub ticket: BannerTicket,
}

impl BookingView {
    /// Fresh view with the seed repairs, an empty form and no banner
    pub fn new() -> Self {
        Self {
            repairs: RepairList::seeded(),
            form: FormState::default(),
            banner: SuccessBanner::new(),
        }
    }

    /// Field edit. Never touches the repair list.
    pub fn update_field(&mut self, field: FormField, value: &str) -> Result<()> {
        self.form.update_field(field, value)
    }

    /// Book the current form: prepend the record, clear the form, show the banner.
    pub fn submit(&mut self, today: NaiveDate) -> Submission {
        let record = self.repairs.submit_booking(&self.form, today).clone();
        self.form.reset();
        let ticket = self.banner.show();
        Submission { record, ticket }
    }

    /// Hide the banner if `ticket` is from the latest submit
    pub fn expire_banner(&mut self, ticket: BannerTicket) -> bool {
        self.banner.expire(ticket)
    }
}

impl Default for BookingView {
    fn default() -> Self {
        Self::new()
    }
}
