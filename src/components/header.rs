use std::time::Duration;

use crate::components::icons::{CloseIcon, MenuIcon};
use crate::motion::{Ease, Pose, Stagger, Transition, Variants, use_entrance};
use crate::nav::{NAV_LINKS, NavLink, NavSurface, is_scrolled, logo_scroll_request};
use crate::scroll::{
    ScrollSource, SectionLayout, SmoothScroller, WindowScroll, active_section,
};
use leptos::{either::Either, prelude::*};

const HEADER_VARIANTS: Variants = Variants {
    hidden: Pose::shifted(-100.0, 0.0),
    visible: Pose::REST,
    transition: Transition::new(Duration::from_millis(500), Ease::EaseOut),
};

const LOGO_VARIANTS: Variants = Variants {
    hidden: Pose::scaled(0.8, 0.0),
    visible: Pose::REST,
    transition: Transition::new(Duration::from_millis(400), Ease::EaseInOut)
        .with_delay(Duration::from_millis(300)),
};

const NAV_ITEM_VARIANTS: Variants = Variants {
    hidden: Pose::shifted(-20.0, 0.0),
    visible: Pose::REST,
    transition: Transition::new(Duration::from_millis(300), Ease::EaseOut),
};

const NAV_STAGGER: Stagger = Stagger {
    delay_children: Duration::from_millis(400),
    stagger_children: Duration::from_millis(100),
};

// Background changes ride along with the entrance transition on the same element.
const HEADER_BACKGROUND_TRANSITIONS: [&str; 3] = [
    "background-color 300ms ease",
    "box-shadow 300ms ease",
    "backdrop-filter 300ms ease",
];

/// Per-mount header state. Handles are `Copy`, so closures can capture it freely.
#[derive(Debug, Clone, Copy)]
pub struct HeaderState {
    pub menu_open: RwSignal<bool>,
    pub scrolled: RwSignal<bool>,
    pub active: RwSignal<Option<&'static str>>,
}

impl HeaderState {
    pub fn new() -> Self {
        Self {
            menu_open: RwSignal::new(false),
            scrolled: RwSignal::new(false),
            active: RwSignal::new(None),
        }
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
        tracing::debug!(open = self.menu_open.get_untracked(), "menu toggled");
    }

    pub fn close_menu(&self) {
        self.menu_open.set(false);
    }

    /// Recomputes scroll-derived state. Signals are only written when their value changes.
    ///
    /// A header unmounted while an event is being delivered still sees that
    /// event; disposed signals are left alone.
    pub fn observe_scroll<L: SectionLayout + ?Sized>(&self, layout: &L, offset_y: f64) {
        let scrolled = is_scrolled(offset_y);
        let Some(was_scrolled) = self.scrolled.try_get_untracked() else {
            return;
        };
        if was_scrolled != scrolled {
            tracing::trace!(offset_y, scrolled, "header crossed scroll threshold");
            _ = self.scrolled.try_set(scrolled);
        }
        self.sync_active(layout, offset_y);
    }

    /// Recomputes only the highlighted section.
    pub fn sync_active<L: SectionLayout + ?Sized>(&self, layout: &L, offset_y: f64) {
        let active = active_section(layout, &NAV_LINKS, offset_y);
        if self
            .active
            .try_get_untracked()
            .is_some_and(|current| current != active)
        {
            _ = self.active.try_set(active);
        }
    }

    pub fn activate<S: SmoothScroller + ?Sized>(
        &self,
        link: &NavLink,
        scroller: &S,
        surface: NavSurface,
    ) {
        scroller.scroll_to(link.scroll_request());
        if surface == NavSurface::Mobile {
            self.close_menu();
        }
    }
}

impl Default for HeaderState {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates header state and keeps it in sync with `viewport` until the
/// current reactive owner is cleaned up.
pub fn use_header_state<V>(viewport: V) -> HeaderState
where
    V: ScrollSource + SectionLayout,
{
    let state = HeaderState::new();
    let subscription = viewport.subscribe({
        let viewport = viewport.clone();
        move |offset_y| state.observe_scroll(&viewport, offset_y)
    });
    on_cleanup(move || subscription.remove());
    // Highlight the section already in view; `scrolled` waits for a real event.
    viewport.measure_offset({
        let viewport = viewport.clone();
        move |offset_y| state.sync_active(&viewport, offset_y)
    });
    state
}

pub fn header_class(scrolled: bool) -> String {
    let surface = if scrolled {
        "bg-background/80 backdrop-blur-md shadow-md"
    } else {
        "bg-transparent"
    };
    format!("fixed top-0 left-0 right-0 z-50 {surface}")
}

pub fn mobile_panel_class(open: bool) -> String {
    let height = if open { "max-h-64 shadow-lg" } else { "max-h-0" };
    format!(
        "md:hidden absolute top-full left-0 right-0 bg-background/95 backdrop-blur-md transition-all duration-300 overflow-hidden {height}"
    )
}

fn nav_link_class(surface: NavSurface, active: bool) -> String {
    let size = match surface {
        NavSurface::Desktop => "text-sm font-medium",
        NavSurface::Mobile => "font-medium",
    };
    let color = if active {
        "text-primary"
    } else {
        "text-accent hover:text-primary"
    };
    format!("{color} transition-colors duration-300 cursor-pointer {size}")
}

#[component]
pub fn Header() -> impl IntoView {
    let viewport = WindowScroll::new();
    let state = use_header_state(viewport.clone());
    let shown = use_entrance();
    view! { <HeaderBar state=state viewport=viewport shown=shown.into() /> }
}

/// The bar itself, driven by `state` and scrolling through `viewport`.
/// `shown` switches the entrance animation from hidden to visible.
#[component]
pub fn HeaderBar<V>(state: HeaderState, viewport: V, shown: Signal<bool>) -> impl IntoView
where
    V: SmoothScroller + Clone + Send + Sync + 'static,
{
    let desktop_links = NAV_LINKS
        .iter()
        .enumerate()
        .map(|(index, link)| {
            let delay = NAV_STAGGER.delay_for(index);
            view! {
                <div style=move || NAV_ITEM_VARIANTS.style_delayed(shown.get(), delay)>
                    <NavAnchor
                        link=link
                        state=state
                        viewport=viewport.clone()
                        surface=NavSurface::Desktop
                    />
                </div>
            }
        })
        .collect_view();

    let mobile_links = NAV_LINKS
        .iter()
        .map(|link| {
            view! {
                <NavAnchor
                    link=link
                    state=state
                    viewport=viewport.clone()
                    surface=NavSurface::Mobile
                />
            }
        })
        .collect_view();

    let scroll_home = {
        let viewport = viewport.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            viewport.scroll_to(logo_scroll_request());
        }
    };

    view! {
        <header
            class=move || header_class(state.scrolled.get())
            style=move || {
                HEADER_VARIANTS
                    .style_with(shown.get(), Duration::ZERO, &HEADER_BACKGROUND_TRANSITIONS)
            }
        >
            <div class="container mx-auto px-4 py-4 flex justify-between items-center">
                <div style=move || LOGO_VARIANTS.style(shown.get())>
                    <a href="#hero" class="flex items-center group" on:click=scroll_home>
                        <img
                            src="/logo.svg"
                            alt="Logo"
                            class="w-12 h-12 transition-all duration-300 group-hover:scale-105 group-hover:brightness-125 group-hover:drop-shadow-[0_0_8px_rgba(59,130,246,0.5)]"
                        />
                    </a>
                </div>

                <nav class="hidden md:flex space-x-8">{desktop_links}</nav>

                <button
                    type="button"
                    class="md:hidden text-accent hover:text-primary"
                    aria-label="Toggle menu"
                    aria-expanded=move || state.menu_open.get().to_string()
                    on:click=move |_| state.toggle_menu()
                >
                    {move || {
                        if state.menu_open.get() {
                            Either::Left(view! { <CloseIcon /> })
                        } else {
                            Either::Right(view! { <MenuIcon /> })
                        }
                    }}
                </button>
            </div>

            <div class=move || mobile_panel_class(state.menu_open.get())>
                <div class="container mx-auto px-4 py-4">
                    <div class="flex flex-col space-y-4">{mobile_links}</div>
                </div>
            </div>
        </header>
    }
}

#[component]
fn NavAnchor<V>(
    link: &'static NavLink,
    state: HeaderState,
    viewport: V,
    surface: NavSurface,
) -> impl IntoView
where
    V: SmoothScroller + Clone + Send + Sync + 'static,
{
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        state.activate(link, &viewport, surface);
    };

    view! {
        <a
            href=link.href()
            class=move || nav_link_class(surface, state.active.get() == Some(link.target))
            on:click=on_click
        >
            {link.label}
        </a>
    }
}
