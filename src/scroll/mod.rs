//! Smooth scrolling between page sections.
//!
//! The header only talks to the traits in this module. [`WindowScroll`] backs
//! them with the browser window; tests substitute a fake source.

pub mod clock;
pub mod spy;
mod window;

#[cfg(test)]
pub(crate) mod testing;

use std::time::Duration;

pub use spy::{SectionBounds, active_section};
pub use window::WindowScroll;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: &'static str,
    pub offset: i32,
    pub duration: Duration,
    /// Whether the target takes part in active-section highlighting.
    pub track_active: bool,
}

impl ScrollRequest {
    /// Document offset the viewport should end at, given where the target starts.
    pub fn destination(&self, section_top: f64) -> f64 {
        (section_top + self.offset as f64).max(0.0)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScrollError {
    #[error("no element with id `{0}`")]
    MissingAnchor(String),
    #[error("no browser window available")]
    NoWindow,
}

/// Releases a scroll listener when removed or dropped, whichever comes first.
#[must_use = "dropping the subscription removes the listener"]
pub struct ScrollSubscription {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl ScrollSubscription {
    pub fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn remove(mut self) {
        self.release_once();
    }

    fn release_once(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.release_once();
    }
}

impl std::fmt::Debug for ScrollSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollSubscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// The viewport's vertical scroll signal.
pub trait ScrollSource: Clone + Send + Sync + 'static {
    fn subscribe(&self, on_scroll: impl Fn(f64) + Send + Sync + 'static) -> ScrollSubscription;

    /// Hands the current offset to `measure` once the page can be measured.
    fn measure_offset(&self, measure: impl FnOnce(f64) + 'static);
}

/// Document geometry of anchored sections.
pub trait SectionLayout {
    fn section_bounds(&self, anchor: &str) -> Option<SectionBounds>;
}

pub trait SmoothScroller {
    /// Starts scrolling toward the request's target. Fire-and-forget.
    fn scroll_to(&self, request: ScrollRequest);
}

/// Ease-in-out quadratic curve over `progress` in `0.0..=1.0`.
pub fn ease_in_out_quad(progress: f64) -> f64 {
    let t = progress.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

pub fn interpolate(from: f64, to: f64, progress: f64) -> f64 {
    from + (to - from) * ease_in_out_quad(progress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn destination_clamps_at_top_of_document() {
        let request = ScrollRequest {
            target: "hero",
            offset: -100,
            duration: Duration::from_millis(800),
            track_active: true,
        };
        assert_eq!(request.destination(40.0), 0.0);
        assert_eq!(request.destination(900.0), 800.0);
    }

    #[test]
    fn easing_hits_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert_eq!(ease_in_out_quad(0.5), 0.5);
        assert_eq!(ease_in_out_quad(1.0), 1.0);
        assert_eq!(ease_in_out_quad(2.0), 1.0);
        assert!(ease_in_out_quad(0.25) < 0.25);
        assert!(ease_in_out_quad(0.75) > 0.75);
    }

    #[test]
    fn interpolation_moves_in_both_directions() {
        assert_eq!(interpolate(100.0, 300.0, 0.5), 200.0);
        assert_eq!(interpolate(300.0, 100.0, 1.0), 100.0);
    }

    #[test]
    fn subscription_releases_exactly_once() {
        let released = Arc::new(AtomicUsize::new(0));
        let counter = released.clone();
        let subscription = ScrollSubscription::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        subscription.remove();
        assert_eq!(released.load(Ordering::SeqCst), 1);

        let counter = released.clone();
        {
            let _subscription = ScrollSubscription::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }
        assert_eq!(released.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn missing_anchor_message_names_the_id() {
        let err = ScrollError::MissingAnchor("projects".into());
        assert_eq!(err.to_string(), "no element with id `projects`");
    }
}
