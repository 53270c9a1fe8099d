use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use leptos::leptos_dom::helpers::window_event_listener;
use leptos::prelude::*;

use super::clock::{self, TimePoint, now_millis};
use super::{
    ScrollError, ScrollRequest, ScrollSource, ScrollSubscription, SectionBounds, SectionLayout,
    SmoothScroller, interpolate,
};

/// Scrolls the browser window. Clones share one animation slot, so a newer
/// request takes over from one still in flight.
#[derive(Debug, Clone, Default)]
pub struct WindowScroll {
    generation: Arc<AtomicU64>,
}

impl WindowScroll {
    pub fn new() -> Self {
        Self::default()
    }

    fn start(&self, request: ScrollRequest) -> Result<(), ScrollError> {
        let window = web_sys::window().ok_or(ScrollError::NoWindow)?;
        let bounds = self
            .section_bounds(request.target)
            .ok_or_else(|| ScrollError::MissingAnchor(request.target.to_string()))?;
        let from = window.scroll_y().unwrap_or(0.0);
        let to = request.destination(bounds.top);
        let generation = self.generation.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::trace!(target_id = request.target, from, to, "starting smooth scroll");

        Animation {
            from,
            to,
            started: now_millis(),
            duration: request.duration,
            generation,
            current: self.generation.clone(),
            _interrupts: interrupt_on_user_input(&self.generation, generation),
        }
        .step();
        Ok(())
    }
}

fn current_offset() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

impl ScrollSource for WindowScroll {
    fn subscribe(&self, on_scroll: impl Fn(f64) + Send + Sync + 'static) -> ScrollSubscription {
        let handle = window_event_listener(leptos::ev::scroll, move |_| on_scroll(current_offset()));
        ScrollSubscription::new(move || handle.remove())
    }

    fn measure_offset(&self, measure: impl FnOnce(f64) + 'static) {
        // Wait a frame so hydration sees the server-rendered markup.
        #[cfg(target_arch = "wasm32")]
        request_animation_frame(move || measure(current_offset()));
        #[cfg(not(target_arch = "wasm32"))]
        let _ = measure;
    }
}

/// Stops the animation for `generation` if it is still the one running.
fn interrupt(current: &AtomicU64, generation: u64) -> bool {
    current
        .compare_exchange(generation, generation + 1, Ordering::Relaxed, Ordering::Relaxed)
        .is_ok()
}

/// Wheel, touch and key input take the viewport back from a running animation.
fn interrupt_on_user_input(current: &Arc<AtomicU64>, generation: u64) -> Vec<ScrollSubscription> {
    let listen = |handle: leptos::leptos_dom::helpers::WindowListenerHandle| {
        ScrollSubscription::new(move || handle.remove())
    };
    vec![
        listen(window_event_listener(leptos::ev::wheel, on_input(current.clone(), generation))),
        listen(window_event_listener(
            leptos::ev::touchstart,
            on_input(current.clone(), generation),
        )),
        listen(window_event_listener(leptos::ev::keydown, on_input(current.clone(), generation))),
    ]
}

fn on_input<E: 'static>(current: Arc<AtomicU64>, generation: u64) -> impl Fn(E) + 'static {
    move |_| {
        if interrupt(&current, generation) {
            tracing::trace!(generation, "smooth scroll interrupted by user input");
        }
    }
}

impl SectionLayout for WindowScroll {
    fn section_bounds(&self, anchor: &str) -> Option<SectionBounds> {
        let window = web_sys::window()?;
        let element = window.document()?.get_element_by_id(anchor)?;
        let rect = element.get_bounding_client_rect();
        Some(SectionBounds {
            top: rect.top() + window.scroll_y().unwrap_or(0.0),
            height: rect.height(),
        })
    }
}

impl SmoothScroller for WindowScroll {
    fn scroll_to(&self, request: ScrollRequest) {
        if let Err(err) = self.start(request) {
            tracing::debug!(target_id = request.target, %err, "smooth scroll skipped");
        }
    }
}

struct Animation {
    from: f64,
    to: f64,
    started: TimePoint,
    duration: Duration,
    generation: u64,
    current: Arc<AtomicU64>,
    // Dropped with the animation, which removes the listeners.
    _interrupts: Vec<ScrollSubscription>,
}

impl Animation {
    fn step(self) {
        if self.current.load(Ordering::Relaxed) != self.generation {
            return;
        }
        let progress = clock::progress(self.started, now_millis(), self.duration);
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, interpolate(self.from, self.to, progress));
        }
        if progress < 1.0 {
            request_animation_frame(move || self.step());
        }
    }
}
