//! # Error Banner State Module
//!
//! Transient error notification with a race-free hide.
//!
//! ## Responsibilities:
//! - Hold the currently displayed error message, if any
//! - Replace (never queue) a pending banner when a new error arrives
//! - Ignore the stale hide timer of a banner that was already replaced
//!
//! Each shown banner gets a monotonically increasing generation. The
//! embedding UI schedules a one-shot timer for [`BANNER_DURATION`] and
//! calls [`BannerState::expire`] with the generation it was handed; if a
//! newer banner replaced the old one in the meantime, the stale expiry is
//! a no-op instead of hiding the wrong message.

use std::time::Duration;

/// How long an error banner stays up before its hide timer fires.
pub const BANNER_DURATION: Duration = Duration::from_secs(7);

/// A visible error notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBanner {
    pub message: String,
    pub generation: u64,
}

/// Holder for the current banner plus the generation counter.
#[derive(Debug, Default)]
pub struct BannerState {
    current: Option<ErrorBanner>,
    next_generation: u64,
}

impl BannerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a message, replacing any banner already up.
    ///
    /// Returns the new banner's generation for the caller's hide timer.
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.current = Some(ErrorBanner {
            message: message.into(),
            generation,
        });
        generation
    }

    /// Hide the banner, but only if `generation` still matches.
    ///
    /// Returns true if the banner was actually hidden.
    pub fn expire(&mut self, generation: u64) -> bool {
        match &self.current {
            Some(banner) if banner.generation == generation => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Hide the banner unconditionally (user dismissed it).
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&ErrorBanner> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_expire() {
        let mut banner = BannerState::new();
        let generation = banner.show("Insufficient funds for withdrawal amount.");
        assert_eq!(
            banner.current().unwrap().message,
            "Insufficient funds for withdrawal amount."
        );

        assert!(banner.expire(generation));
        assert!(banner.current().is_none());
    }

    #[test]
    fn test_stale_expiry_is_ignored() {
        let mut banner = BannerState::new();
        let first = banner.show("first error");
        let second = banner.show("second error");

        // The first banner's timer fires after it was already replaced.
        assert!(!banner.expire(first));
        assert_eq!(banner.current().unwrap().message, "second error");

        assert!(banner.expire(second));
        assert!(banner.current().is_none());
    }

    #[test]
    fn test_expire_after_dismiss_is_a_no_op() {
        let mut banner = BannerState::new();
        let generation = banner.show("error");
        banner.dismiss();
        assert!(!banner.expire(generation));
    }

    #[test]
    fn test_generations_are_monotonic() {
        let mut banner = BannerState::new();
        let a = banner.show("a");
        let b = banner.show("b");
        let c = banner.show("c");
        assert!(a < b && b < c);
    }
}
