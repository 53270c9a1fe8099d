//! Declarative entrance animations built on CSS transitions.
//!
//! A [`Variants`] pairs a hidden and a visible [`Pose`]; flipping the signal
//! returned by [`use_entrance`] swaps the inline style and lets the browser
//! run the transition.

use std::time::Duration;

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Vertical translation in pixels.
    pub y: f32,
    pub opacity: f32,
    pub scale: f32,
}

impl Pose {
    pub const REST: Pose = Pose {
        y: 0.0,
        opacity: 1.0,
        scale: 1.0,
    };

    pub const fn shifted(y: f32, opacity: f32) -> Self {
        Self {
            y,
            opacity,
            scale: 1.0,
        }
    }

    pub const fn scaled(scale: f32, opacity: f32) -> Self {
        Self {
            y: 0.0,
            opacity,
            scale,
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "transform: translateY({}px) scale({}); opacity: {};",
            self.y, self.scale, self.opacity
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    EaseOut,
    EaseInOut,
}

impl Ease {
    pub fn as_css(&self) -> &'static str {
        match self {
            Ease::EaseOut => "cubic-bezier(0, 0, 0.58, 1)",
            Ease::EaseInOut => "cubic-bezier(0.42, 0, 0.58, 1)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub duration: Duration,
    pub delay: Duration,
    pub ease: Ease,
}

impl Transition {
    pub const fn new(duration: Duration, ease: Ease) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
            ease,
        }
    }

    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn entry(&self, property: &str, extra_delay: Duration) -> String {
        format!(
            "{property} {}ms {} {}ms",
            self.duration.as_millis(),
            self.ease.as_css(),
            (self.delay + extra_delay).as_millis()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variants {
    pub hidden: Pose,
    pub visible: Pose,
    pub transition: Transition,
}

impl Variants {
    pub fn style(&self, shown: bool) -> String {
        self.style_with(shown, Duration::ZERO, &[])
    }

    pub fn style_delayed(&self, shown: bool, extra_delay: Duration) -> String {
        self.style_with(shown, extra_delay, &[])
    }

    /// Inline style for the current pose. `alongside` carries transitions for
    /// other properties on the same element, which would otherwise be
    /// overridden by the inline `transition`.
    pub fn style_with(&self, shown: bool, extra_delay: Duration, alongside: &[&str]) -> String {
        let pose = if shown { self.visible } else { self.hidden };
        let mut transitions = vec![
            self.transition.entry("transform", extra_delay),
            self.transition.entry("opacity", extra_delay),
        ];
        transitions.extend(alongside.iter().map(|entry| entry.to_string()));
        format!("{} transition: {};", pose.to_css(), transitions.join(", "))
    }
}

/// Delays children one after another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub delay_children: Duration,
    pub stagger_children: Duration,
}

impl Stagger {
    pub fn delay_for(&self, index: usize) -> Duration {
        self.delay_children + self.stagger_children * index as u32
    }
}

/// Flips to `true` on the first animation frame after mount, and never back.
///
/// Stays `false` during server rendering so the hydrated page starts hidden.
pub fn use_entrance() -> ReadSignal<bool> {
    let (shown, set_shown) = signal(false);
    Effect::new(move |_| {
        request_animation_frame(move || set_shown.set(true));
    });
    shown
}
