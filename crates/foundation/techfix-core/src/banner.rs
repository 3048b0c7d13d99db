//! Success banner shown after a booking
//!
//! Two states, hidden and visible. Every `show` hands out a fresh
//! [`BannerTicket`]; only the holder of the latest ticket can hide the banner,
//! so a timer left over from an earlier booking never cuts a newer banner short.

/// Identifies one `show` of the banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BannerTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct SuccessBanner {
    visible: bool,
    generation: u64,
}

impl SuccessBanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// hidden/visible -> visible, restarting the window
    pub fn show(&mut self) -> BannerTicket {
        self.generation += 1;
        self.visible = true;
        BannerTicket(self.generation)
    }

    /// visible -> hidden, if `ticket` is still the latest.
    ///
    /// Returns whether the banner was hidden by this call.
    pub fn expire(&mut self, ticket: BannerTicket) -> bool {
        if self.visible && ticket.0 == self.generation {
            self.visible = false;
            true
        } else {
            false
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        assert!(!SuccessBanner::new().is_visible());
    }

    #[test]
    fn test_show_then_expire() {
        let mut banner = SuccessBanner::new();
        let ticket = banner.show();
        assert!(banner.is_visible());

        assert!(banner.expire(ticket));
        assert!(!banner.is_visible());

        // Second expiry is a no-op
        assert!(!banner.expire(ticket));
    }

    #[test]
    fn test_stale_ticket_keeps_newer_banner() {
        let mut banner = SuccessBanner::new();
        let first = banner.show();
        let second = banner.show();
        assert_ne!(first, second);

        assert!(!banner.expire(first));
        assert!(banner.is_visible());

        assert!(banner.expire(second));
        assert!(!banner.is_visible());
    }
}
