//! Scroll-advance trigger: a latched boundary sensor for infinite scroll.
//!
//! The trigger holds no collection knowledge. It is fed samples of
//! `(should_listen, near_bottom)` by whatever drives the viewport and fires
//! at most once per "reaching bottom" event; it re-arms only when the
//! viewport leaves the bottom zone, or when the listen predicate goes false
//! and then true again. The consumer passes
//! [`crate::CollectionView::should_listen`] as the predicate, so the trigger
//! cannot fire while a fetch is outstanding or after the end is reached.

use tracing::trace;

/// Edge-detecting latch over viewport-bottom samples.
#[derive(Debug)]
pub struct ScrollAdvanceTrigger {
    armed: bool,
    was_listening: bool,
}

impl ScrollAdvanceTrigger {
    pub fn new() -> Self {
        Self {
            armed: true,
            was_listening: false,
        }
    }

    /// Feed one sample. Returns `true` exactly when the callback should run.
    pub fn update(&mut self, should_listen: bool, near_bottom: bool) -> bool {
        // Predicate false -> true re-arms the latch
        if should_listen && !self.was_listening {
            self.armed = true;
        }
        self.was_listening = should_listen;

        if !should_listen {
            return false;
        }

        if near_bottom {
            if self.armed {
                self.armed = false;
                trace!(component = "scroll", "bottom reached, firing advance");
                return true;
            }
            false
        } else {
            // Leaving the bottom zone re-arms the latch
            self.armed = true;
            false
        }
    }
}

impl Default for ScrollAdvanceTrigger {
    fn default() -> Self {
        Self::new()
    }
}
