use std::time::Duration;

use crate::scroll::ScrollRequest;

/// Vertical offset, in pixels, past which the header switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// How long a navigation scroll takes.
pub const NAV_SCROLL_DURATION: Duration = Duration::from_millis(800);

/// Anchor the logo scrolls back to.
pub const HOME_ANCHOR: &str = "hero";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: &'static str,
    pub offset: i32,
}

impl NavLink {
    const fn new(label: &'static str, target: &'static str, offset: i32) -> Self {
        Self {
            label,
            target,
            offset,
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.target)
    }

    pub fn scroll_request(&self) -> ScrollRequest {
        ScrollRequest {
            target: self.target,
            offset: self.offset,
            duration: NAV_SCROLL_DURATION,
            track_active: true,
        }
    }
}

pub static NAV_LINKS: [NavLink; 5] = [
    NavLink::new("Home", "hero", -100),
    NavLink::new("About", "about", -80),
    NavLink::new("Skills", "skills", -80),
    NavLink::new("Projects", "projects", -80),
    NavLink::new("Contact", "contact", -80),
];

/// Where a link was activated from. Mobile activations also collapse the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSurface {
    Desktop,
    Mobile,
}

pub fn is_scrolled(offset_y: f64) -> bool {
    offset_y > SCROLL_THRESHOLD
}

pub fn logo_scroll_request() -> ScrollRequest {
    ScrollRequest {
        target: HOME_ANCHOR,
        offset: 0,
        duration: NAV_SCROLL_DURATION,
        track_active: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_render_in_fixed_order() {
        let labels: Vec<_> = NAV_LINKS.iter().map(|link| link.label).collect();
        assert_eq!(labels, ["Home", "About", "Skills", "Projects", "Contact"]);
    }

    #[test]
    fn home_uses_larger_offset() {
        assert_eq!(NAV_LINKS[0].target, "hero");
        assert_eq!(NAV_LINKS[0].offset, -100);
        assert!(NAV_LINKS[1..].iter().all(|link| link.offset == -80));
    }

    #[test]
    fn threshold_is_strictly_greater_than_fifty() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(49.9));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(120.0));
    }

    #[test]
    fn projects_link_requests_tracked_scroll() {
        let projects = NAV_LINKS
            .iter()
            .find(|link| link.label == "Projects")
            .unwrap();
        let request = projects.scroll_request();
        assert_eq!(request.target, "projects");
        assert_eq!(request.offset, -80);
        assert_eq!(request.duration, Duration::from_millis(800));
        assert!(request.track_active);
        assert_eq!(projects.href(), "#projects");
    }

    #[test]
    fn logo_scrolls_home_untracked() {
        let request = logo_scroll_request();
        assert_eq!(request.target, "hero");
        assert_eq!(request.offset, 0);
        assert!(!request.track_active);
    }
}
