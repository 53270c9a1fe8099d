use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{
    ScrollRequest, ScrollSource, ScrollSubscription, SectionBounds, SectionLayout, SmoothScroller,
};

type Listener = Arc<dyn Fn(f64) + Send + Sync>;

#[derive(Default)]
struct Inner {
    next_id: usize,
    offset_y: f64,
    listeners: Vec<(usize, Listener)>,
    sections: HashMap<String, SectionBounds>,
    requests: Vec<ScrollRequest>,
}

/// In-memory viewport: records listeners and scroll requests, dispatches offsets on demand.
#[derive(Clone, Default)]
pub(crate) struct FakeViewport {
    inner: Arc<Mutex<Inner>>,
}

impl FakeViewport {
    pub fn with_section(self, anchor: &str, top: f64, height: f64) -> Self {
        self.inner
            .lock()
            .unwrap()
            .sections
            .insert(anchor.to_string(), SectionBounds { top, height });
        self
    }

    pub fn scrolled_to(self, offset_y: f64) -> Self {
        self.inner.lock().unwrap().offset_y = offset_y;
        self
    }

    pub fn listener_count(&self) -> usize {
        self.inner.lock().unwrap().listeners.len()
    }

    pub fn requests(&self) -> Vec<ScrollRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    /// Delivers one scroll event. Listeners removed mid-dispatch still see this event.
    pub fn dispatch(&self, offset_y: f64) {
        let listeners: Vec<Listener> = {
            let mut inner = self.inner.lock().unwrap();
            inner.offset_y = offset_y;
            inner
                .listeners
                .iter()
                .map(|(_, listener)| listener.clone())
                .collect()
        };
        for listener in listeners {
            listener(offset_y);
        }
    }
}

impl ScrollSource for FakeViewport {
    fn subscribe(&self, on_scroll: impl Fn(f64) + Send + Sync + 'static) -> ScrollSubscription {
        let listener: Listener = Arc::new(on_scroll);
        let id = {
            let mut inner = self.inner.lock().unwrap();
            inner.next_id += 1;
            let id = inner.next_id;
            inner.listeners.push((id, listener));
            id
        };
        let inner = self.inner.clone();
        ScrollSubscription::new(move || {
            inner
                .lock()
                .unwrap()
                .listeners
                .retain(|(listener_id, _)| *listener_id != id);
        })
    }

    fn measure_offset(&self, measure: impl FnOnce(f64) + 'static) {
        measure(self.current_offset());
    }
}

impl FakeViewport {
    fn current_offset(&self) -> f64 {
        self.inner.lock().unwrap().offset_y
    }
}

impl SectionLayout for FakeViewport {
    fn section_bounds(&self, anchor: &str) -> Option<SectionBounds> {
        self.inner.lock().unwrap().sections.get(anchor).copied()
    }
}

impl SmoothScroller for FakeViewport {
    fn scroll_to(&self, request: ScrollRequest) {
        self.inner.lock().unwrap().requests.push(request);
    }
}
