//! Cart counter.
//!
//! A tally of "add to cart" clicks, not a list of contents. The count lives
//! in an owned [`CartCounter`]; showing it is a separate, optional step.

use serde::{Deserialize, Serialize};

/// Somewhere the current count can be shown.
pub trait CartDisplay {
    fn show_count(&mut self, count: u64);
}

/// Number of items added since the storefront page was loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartCounter {
    count: u64,
}

impl CartCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Add one and push the new value to `display` if there is one.
    ///
    /// The counter advances whether or not a display is attached.
    pub fn increment(&mut self, display: Option<&mut dyn CartDisplay>) -> u64 {
        self.count = self.count.saturating_add(1);
        if let Some(display) = display {
            self.sync(display);
        }
        self.count
    }

    /// Write the current value to `display`.
    pub fn sync(&self, display: &mut dyn CartDisplay) {
        display.show_count(self.count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Badge {
        text: Option<String>,
        writes: usize,
    }

    impl CartDisplay for Badge {
        fn show_count(&mut self, count: u64) {
            self.text = Some(count.to_string());
            self.writes += 1;
        }
    }

    #[test]
    fn test_increment_n_times_displays_n() {
        let mut counter = CartCounter::new();
        let mut badge = Badge::default();
        for _ in 0..5 {
            counter.increment(Some(&mut badge));
        }
        assert_eq!(counter.count(), 5);
        assert_eq!(badge.text.as_deref(), Some("5"));
        assert_eq!(badge.writes, 5);
    }

    #[test]
    fn test_increment_without_display_still_counts() {
        let mut counter = CartCounter::new();
        assert_eq!(counter.increment(None), 1);
        assert_eq!(counter.increment(None), 2);

        let mut badge = Badge::default();
        counter.sync(&mut badge);
        assert_eq!(badge.text.as_deref(), Some("2"));
    }

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(CartCounter::default().count(), 0);
    }
}
