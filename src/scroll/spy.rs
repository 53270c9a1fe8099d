use crate::nav::NavLink;

use super::SectionLayout;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    /// Distance from the top of the document.
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    fn contains(&self, scroll_y: f64, offset: i32) -> bool {
        let top = (self.top + offset as f64).floor();
        let bottom = (self.top + offset as f64 + self.height).floor();
        scroll_y >= top && scroll_y < bottom
    }
}

/// Picks the first link whose offset-adjusted section contains `scroll_y`.
pub fn active_section<L: SectionLayout + ?Sized>(
    layout: &L,
    links: &[NavLink],
    scroll_y: f64,
) -> Option<&'static str> {
    links
        .iter()
        .find(|link| {
            layout
                .section_bounds(link.target)
                .is_some_and(|bounds| bounds.contains(scroll_y, link.offset))
        })
        .map(|link| link.target)
}
